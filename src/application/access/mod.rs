use crate::application::services::session::SessionIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("unauthorized access")]
    Unauthenticated,
    #[error("Forbidden access")]
    Forbidden,
}

// Presentation builds the identity from the session cookie; an absent or
// invalid token never gets this far.

/// A caller may only read records filed under their own email.
pub fn require_owner(identity: &SessionIdentity, requested_email: &str) -> Result<(), AccessError> {
    if identity.email == requested_email {
        Ok(())
    } else {
        Err(AccessError::Forbidden)
    }
}
