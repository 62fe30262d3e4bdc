use serde::{Deserialize, Serialize};

use crate::common::entity_ids::OrganizationId;

/// Who is making a request, resolved once per request from the session.
///
/// Administrators take precedence over organization membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Anonymous,
    Volunteer,
    OrganizationMember(Vec<OrganizationId>),
    Administrator,
}

impl Role {
    /// Build the role of an authenticated account
    pub fn for_account(is_administrator: bool, organizations: Vec<OrganizationId>) -> Self {
        if is_administrator {
            Role::Administrator
        } else if organizations.is_empty() {
            Role::Volunteer
        } else {
            Role::OrganizationMember(organizations)
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Administrator)
    }

    /// Organizations the requester acts for (empty for admins and volunteers)
    pub fn organizations(&self) -> &[OrganizationId] {
        match self {
            Role::OrganizationMember(orgs) => orgs,
            _ => &[],
        }
    }

    pub fn is_member_of(&self, organization_id: OrganizationId) -> bool {
        self.organizations().contains(&organization_id)
    }
}
