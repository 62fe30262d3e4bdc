/// Authorization for offer actions
///
/// The requester's `Role` is resolved once per request and passed explicitly:
///
/// ```rust
/// use server_core::common::auth::{Actor, OfferAction, Role};
///
/// let role = Role::Volunteer;
/// assert!(Actor::new(&role).can(OfferAction::Join).check().is_ok());
/// assert!(Actor::new(&role).can(OfferAction::Delete).check().is_err());
/// ```
mod builder;
mod capability;
mod errors;
mod role;

pub use builder::{Actor, CapabilityBuilder};
pub use capability::OfferAction;
pub use errors::AuthError;
pub use role::Role;
