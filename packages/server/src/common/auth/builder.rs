use super::capability::anonymous_error;
use super::{AuthError, OfferAction, Role};
use crate::common::entity_ids::OrganizationId;

/// Entry point for authorization checks
///
/// Usage:
/// ```
/// use server_core::common::{Actor, OfferAction, OrganizationId, Role};
///
/// let role = Role::OrganizationMember(vec![OrganizationId::from_i64(1)]);
/// Actor::new(&role)
///     .can(OfferAction::Edit)
///     .on(OrganizationId::from_i64(1))
///     .check()
///     .unwrap();
/// ```
pub struct Actor<'a> {
    role: &'a Role,
}

impl<'a> Actor<'a> {
    pub fn new(role: &'a Role) -> Self {
        Self { role }
    }

    /// Specify what the actor wants to do
    pub fn can(self, action: OfferAction) -> CapabilityBuilder<'a> {
        CapabilityBuilder {
            role: self.role,
            action,
            owner: None,
        }
    }
}

/// Builder after specifying the action
pub struct CapabilityBuilder<'a> {
    role: &'a Role,
    action: OfferAction,
    owner: Option<OrganizationId>,
}

impl<'a> CapabilityBuilder<'a> {
    /// Organization owning the target offer (or receiving a new one)
    pub fn on(mut self, owner: OrganizationId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Perform the authorization check
    pub fn check(self) -> Result<(), AuthError> {
        check_offer_permission(self.role, self.action, self.owner)
    }
}

fn check_offer_permission(
    role: &Role,
    action: OfferAction,
    owner: Option<OrganizationId>,
) -> Result<(), AuthError> {
    match action {
        OfferAction::View | OfferAction::List | OfferAction::Join => return Ok(()),
        _ => {}
    }

    match role {
        Role::Administrator => Ok(()),
        Role::Anonymous => Err(anonymous_error(action)),
        _ if action.requires_admin() => Err(AuthError::AdminRequired),
        Role::Volunteer => Err(AuthError::PermissionDenied(
            "organization membership required".to_string(),
        )),
        Role::OrganizationMember(_) => match (action, owner) {
            (OfferAction::Create, None) => Ok(()),
            (_, Some(owner)) if role.is_member_of(owner) => Ok(()),
            _ => Err(AuthError::PermissionDenied(
                "not a member of the owning organization".to_string(),
            )),
        },
    }
}
