/// Actions a requester can attempt against offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferAction {
    /// Open an offer's detail page
    View,

    /// Browse the offer listing (filtered by role, never denied)
    List,

    /// Create an offer for an organization
    Create,

    /// Rewrite an offer's fields (full edit)
    Edit,

    /// Change the legacy status field (moderation)
    ChangeStatus,

    /// Remove an offer
    Delete,

    /// Accept and publish an offer
    Accept,

    /// Apply to an offer as a volunteer
    Join,
}

impl OfferAction {
    /// Moderation actions reserved to administrators
    pub fn requires_admin(&self) -> bool {
        matches!(
            self,
            OfferAction::ChangeStatus | OfferAction::Delete | OfferAction::Accept
        )
    }

    /// Actions an anonymous requester is denied outright rather than sent to login
    fn denies_anonymous_outright(&self) -> bool {
        matches!(self, OfferAction::Delete | OfferAction::Accept)
    }
}

pub(super) fn anonymous_error(action: OfferAction) -> super::AuthError {
    if action.denies_anonymous_outright() {
        super::AuthError::AdminRequired
    } else {
        super::AuthError::AuthenticationRequired
    }
}
