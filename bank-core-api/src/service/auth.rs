use async_trait::async_trait;
use uuid::Uuid;

/// Collaborator seam for the authentication layer.
///
/// The core never validates credentials itself. It receives an opaque caller
/// credential (a bearer token in the reference deployment) and asks the
/// gateway which owner it belongs to; `None` means the credential does not
/// resolve. Token issuance and password handling live entirely behind this
/// trait.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn resolve_owner(
        &self,
        credential: &str,
    ) -> Result<Option<Uuid>, Box<dyn std::error::Error + Send + Sync>>;
}
