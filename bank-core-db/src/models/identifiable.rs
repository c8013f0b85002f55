use uuid::Uuid;

/// Entities addressable by a UUID primary key. The generic store traits are
/// bounded on this.
pub trait Identifiable {
    fn get_id(&self) -> Uuid;
}
