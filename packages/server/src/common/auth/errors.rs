use thiserror::Error;

/// Authorization errors returned by the offer gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Anonymous requester; logging in may grant access
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Admin access required")]
    AdminRequired,
}
