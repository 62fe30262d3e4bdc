//! Typed ID definitions for all domain entities.
//!
//! ```rust
//! use server_core::common::{OfferId, OrganizationId};
//!
//! let offer_id = OfferId::from_i64(1);
//! let organization_id = OrganizationId::from_i64(1);
//!
//! // This would be a compile error:
//! // let wrong: OfferId = organization_id;
//! # let _ = (offer_id, organization_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Organization entities.
pub struct Organization;

/// Marker type for UserProfile entities (accounts).
pub struct UserProfile;

/// Marker type for Offer entities.
pub struct Offer;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Organization entities.
pub type OrganizationId = Id<Organization>;

/// Typed ID for UserProfile entities.
pub type UserId = Id<UserProfile>;

/// Typed ID for Offer entities.
pub type OfferId = Id<Offer>;
