//! Offer pages: listing, archive, detail, create, edit, join, moderation

use axum::{
    extract::{Extension, Path},
    response::Response,
    Form,
};
use sqlx::PgPool;
use tracing::debug;

use super::render;
use crate::common::{Actor, OfferAction, OfferId, Role};
use crate::domains::offers::actions::{
    accept_offer, create_offer, delete_offer, edit_offer, join_offer, EditOutcome, JoinOutcome,
    OfferError,
};
use crate::domains::offers::data::{FormErrors, JoinForm, OfferForm};
use crate::domains::offers::models::{Offer, OfferVolunteer};
use crate::domains::organization::models::Organization;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::requester::Requester;
use crate::server::response::{found, login_url};
use crate::server::session;
use crate::server::views::messages;
use crate::server::views::offers::{join_form, offer_detail, offer_form, offer_list, OfferFormView};

const CREATE_PATH: &str = "/offers/create";

pub async fn index_handler() -> Response {
    found("/offers")
}

pub async fn list_offers_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
) -> Result<Response, AppError> {
    let offers = Offer::find_visible(&requester.role, &state.db_pool).await?;
    debug!(count = offers.len(), "Listing offers");
    render(&requester, "Offers", offer_list(&offers, &requester.role)).await
}

pub async fn archived_offers_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
) -> Result<Response, AppError> {
    let offers = Offer::find_archived(&state.db_pool).await?;
    render(&requester, "Archived offers", offer_list(&offers, &Role::Anonymous)).await
}

// =============================================================================
// Detail
// =============================================================================

pub async fn offer_detail_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let offer = match locate(&slug, &id, "", &state.db_pool).await? {
        Located::Found(offer) => offer,
        Located::Moved(redirect) => return Ok(redirect),
    };

    let can_edit = Actor::new(&requester.role)
        .can(OfferAction::Edit)
        .on(offer.organization_id)
        .check()
        .is_ok();
    let volunteers = if can_edit {
        Some(OfferVolunteer::find_volunteers(offer.id, &state.db_pool).await?)
    } else {
        None
    };
    let organization = Organization::find_by_id(offer.organization_id, &state.db_pool).await?;

    let body = offer_detail(&offer, organization.as_ref(), volunteers.as_deref(), can_edit);
    render(&requester, &offer.title, body).await
}

// =============================================================================
// Create
// =============================================================================

pub async fn create_offer_page_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
) -> Result<Response, AppError> {
    Actor::new(&requester.role)
        .can(OfferAction::Create)
        .check()
        .map_err(|e| AppError::from_auth(e, CREATE_PATH))?;

    let organizations = organization_choices(&requester, &state.db_pool).await?;
    let view = OfferFormView {
        action: CREATE_PATH,
        form: &OfferForm::default(),
        errors: &FormErrors::new(),
        organizations: &organizations,
        message: None,
        editing: false,
        show_status: false,
    };
    render(&requester, "Add offer", offer_form(&view)).await
}

pub async fn create_offer_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Form(form): Form<OfferForm>,
) -> Result<Response, AppError> {
    match create_offer(&requester.role, &form, &state.db_pool).await {
        Ok(offer) => {
            session::push_flash(&requester.session, messages::OFFER_CREATED).await?;
            Ok(found(&offer.url()))
        }
        Err(OfferError::Invalid(errors)) => {
            let organizations = organization_choices(&requester, &state.db_pool).await?;
            let view = OfferFormView {
                action: CREATE_PATH,
                form: &form,
                errors: &errors,
                organizations: &organizations,
                message: Some(messages::OFFER_FORM_INVALID),
                editing: false,
                show_status: false,
            };
            render(&requester, "Add offer", offer_form(&view)).await
        }
        Err(e) => Err(AppError::from_offer(e, CREATE_PATH)),
    }
}

// =============================================================================
// Edit
// =============================================================================

pub async fn edit_offer_page_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let offer = match locate(&slug, &id, "/edit", &state.db_pool).await? {
        Located::Found(offer) => offer,
        Located::Moved(redirect) => return Ok(redirect),
    };

    Actor::new(&requester.role)
        .can(OfferAction::Edit)
        .on(offer.organization_id)
        .check()
        .map_err(|e| AppError::from_auth(e, &offer.edit_url()))?;

    let organizations = organization_choices(&requester, &state.db_pool).await?;
    let view = OfferFormView {
        action: &offer.edit_url(),
        form: &OfferForm::from_offer(&offer),
        errors: &FormErrors::new(),
        organizations: &organizations,
        message: None,
        editing: true,
        show_status: requester.role.is_admin(),
    };
    render(&requester, &offer.title, offer_form(&view)).await
}

pub async fn edit_offer_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path((slug, id)): Path<(String, String)>,
    Form(form): Form<OfferForm>,
) -> Result<Response, AppError> {
    let offer = match locate(&slug, &id, "/edit", &state.db_pool).await? {
        Located::Found(offer) => offer,
        Located::Moved(redirect) => return Ok(redirect),
    };

    let result = edit_offer(&requester.role, &offer, &form, &state.db_pool).await;
    let (current, shown, errors, message) = match result {
        Ok(EditOutcome::Updated(updated)) | Ok(EditOutcome::StatusChanged(updated)) => {
            let shown = OfferForm::from_offer(&updated);
            (updated, shown, FormErrors::new(), messages::OFFER_CHANGED)
        }
        Ok(EditOutcome::StatusChangeDenied) => {
            let shown = OfferForm::from_offer(&offer);
            (offer, shown, FormErrors::new(), messages::STATUS_CHANGE_DENIED)
        }
        Err(OfferError::Invalid(errors)) => (offer, form, errors, messages::OFFER_FORM_INVALID),
        Err(e) => return Err(AppError::from_offer(e, &offer.edit_url())),
    };

    let organizations = organization_choices(&requester, &state.db_pool).await?;
    let view = OfferFormView {
        action: &current.edit_url(),
        form: &shown,
        errors: &errors,
        organizations: &organizations,
        message: Some(message),
        editing: true,
        show_status: requester.role.is_admin(),
    };
    render(&requester, &current.title, offer_form(&view)).await
}

// =============================================================================
// Join
// =============================================================================

pub async fn join_offer_page_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path((slug, id)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let offer = match locate(&slug, &id, "/join", &state.db_pool).await? {
        Located::Found(offer) => offer,
        Located::Moved(redirect) => return Ok(redirect),
    };

    let form = JoinForm {
        email: requester.email().map(String::from),
        ..Default::default()
    };
    let body = join_form(&offer, &form, &FormErrors::new(), None);
    render(&requester, &offer.title, body).await
}

pub async fn join_offer_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path((slug, id)): Path<(String, String)>,
    Form(form): Form<JoinForm>,
) -> Result<Response, AppError> {
    let offer = match locate(&slug, &id, "/join", &state.db_pool).await? {
        Located::Found(offer) => offer,
        Located::Moved(redirect) => return Ok(redirect),
    };

    let application = match form.validate() {
        Ok(application) => application,
        Err(errors) => {
            let body = join_form(&offer, &form, &errors, Some(messages::JOIN_FORM_INVALID));
            return render(&requester, &offer.title, body).await;
        }
    };

    let outcome = join_offer(requester.account.as_ref(), &offer, &application, &state.db_pool)
        .await
        .map_err(|e| AppError::from_offer(e, &offer.join_url()))?;

    let (message, location) = match outcome {
        JoinOutcome::Joined => (messages::JOIN_THANK_YOU, offer.url()),
        JoinOutcome::AlreadyJoined => (messages::JOIN_ALREADY_JOINED, "/offers".to_string()),
        JoinOutcome::LoginRequired => (messages::JOIN_LOGIN_FIRST, login_url(&offer.join_url())),
        JoinOutcome::RegistrationRequired => (messages::JOIN_REGISTER_FIRST, "/register".to_string()),
    };
    session::push_flash(&requester.session, message).await?;
    Ok(found(&location))
}

// =============================================================================
// Moderation
// =============================================================================

pub async fn delete_offer_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = OfferId::parse(&id).map_err(|_| AppError::NotFound)?;
    delete_offer(&requester.role, id, &state.db_pool)
        .await
        .map_err(|e| AppError::from_offer(e, "/offers"))?;

    session::push_flash(&requester.session, messages::OFFER_DELETED).await?;
    Ok(found("/offers"))
}

pub async fn accept_offer_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = OfferId::parse(&id).map_err(|_| AppError::NotFound)?;
    accept_offer(&requester.role, id, &state.db_pool)
        .await
        .map_err(|e| AppError::from_offer(e, "/offers"))?;

    session::push_flash(&requester.session, messages::OFFER_ACCEPTED).await?;
    Ok(found("/offers"))
}

// =============================================================================
// Helpers
// =============================================================================

enum Located {
    Found(Offer),
    /// Stale slug; redirect to the canonical URL
    Moved(Response),
}

/// Resolve `/offers/{slug}/{id}{suffix}`: unknown or non-numeric ids are 404
async fn locate(slug: &str, id: &str, suffix: &str, pool: &PgPool) -> Result<Located, AppError> {
    let id = OfferId::parse(id).map_err(|_| AppError::NotFound)?;
    let offer = Offer::find_by_id(id, pool).await?.ok_or(AppError::NotFound)?;

    if slug != offer.slug() {
        debug!(offer_id = %offer.id, slug, "Redirecting stale offer slug");
        return Ok(Located::Moved(found(&format!("{}{}", offer.url(), suffix))));
    }
    Ok(Located::Found(offer))
}

/// Organizations offered in the form: all of them for administrators,
/// otherwise the requester's own
async fn organization_choices(requester: &Requester, pool: &PgPool) -> anyhow::Result<Vec<Organization>> {
    match (&requester.role, &requester.account) {
        (Role::Administrator, _) => Organization::find_all(pool).await,
        (_, Some(account)) => Organization::find_for_member(account.id, pool).await,
        _ => Ok(Vec::new()),
    }
}
