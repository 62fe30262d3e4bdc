use crate::common::utils::{escape, render_markdown};
use crate::common::Role;
use crate::domains::member::models::UserProfile;
use crate::domains::offers::data::{format_datetime, FormErrors, JoinForm, OfferForm};
use crate::domains::offers::models::{LegacyStatus, Offer};
use crate::domains::organization::models::Organization;

use super::{messages, notice, select, text_area, text_input};

const CONTENT_FIELDS: &[(&str, &str)] = &[
    ("description", "Description"),
    ("requirements", "Requirements"),
    ("time_commitment", "Time commitment"),
    ("benefits", "Benefits"),
    ("location", "Location"),
    ("time_period", "Time period"),
];

/// Offer listing; administrators also get status and moderation links
pub fn offer_list(offers: &[Offer], role: &Role) -> String {
    if offers.is_empty() {
        return format!("<p>{}</p>", messages::NO_OFFERS);
    }

    let items: String = offers
        .iter()
        .map(|offer| {
            let moderation = if role.is_admin() {
                format!(
                    r#" <span class="status">{status} / {published}</span> <a href="/offers/accept/{id}">Accept</a> <a href="/offers/delete/{id}">Delete</a>"#,
                    status = offer.status_old.label(),
                    published = offer.offer_status,
                    id = offer.id,
                )
            } else {
                String::new()
            };
            format!(
                r#"<li class="offer"><a href="{url}">{title}</a> <span class="location">{location}</span>{moderation}</li>"#,
                url = offer.url(),
                title = escape(&offer.title),
                location = escape(&offer.location),
            )
        })
        .collect();

    format!(r#"<ul class="offers">{}</ul>"#, items)
}

/// Offer detail; `volunteers` is only passed for requesters who may edit
pub fn offer_detail(
    offer: &Offer,
    organization: Option<&Organization>,
    volunteers: Option<&[UserProfile]>,
    can_edit: bool,
) -> String {
    let mut body = String::new();

    if let Some(org) = organization {
        body.push_str(&format!(
            r#"<p class="organization">{}</p>"#,
            escape(&org.name)
        ));
    }

    body.push_str(&format!(
        r#"<div class="description">{}</div>"#,
        render_markdown(&offer.description)
    ));

    body.push_str("<dl>");
    for (field, label) in CONTENT_FIELDS.iter().skip(1) {
        let value = match *field {
            "requirements" => &offer.requirements,
            "time_commitment" => &offer.time_commitment,
            "benefits" => &offer.benefits,
            "location" => &offer.location,
            _ => &offer.time_period,
        };
        body.push_str(&format!("<dt>{}</dt><dd>{}</dd>", label, escape(value)));
    }
    for (label, date) in [("Starts", offer.started_at), ("Ends", offer.finished_at)] {
        if let Some(date) = date {
            body.push_str(&format!("<dt>{}</dt><dd>{}</dd>", label, format_datetime(date)));
        }
    }
    body.push_str("</dl>");

    body.push_str(&format!(
        r#"<p><a href="{}">Apply</a>"#,
        offer.join_url()
    ));
    if can_edit {
        body.push_str(&format!(r#" <a href="{}">Edit</a>"#, offer.edit_url()));
    }
    body.push_str("</p>");

    if let Some(volunteers) = volunteers {
        let items: String = volunteers
            .iter()
            .map(|v| format!(r#"<li class="volunteer">{}</li>"#, escape(&v.email)))
            .collect();
        body.push_str(&format!(
            r#"<h2>Volunteers ({})</h2><ul class="volunteers">{}</ul>"#,
            volunteers.len(),
            items
        ));
    }

    body
}

/// Inputs for the create / edit form
pub struct OfferFormView<'a> {
    pub action: &'a str,
    pub form: &'a OfferForm,
    pub errors: &'a FormErrors,
    pub organizations: &'a [Organization],
    pub message: Option<&'a str>,
    /// Edit page: adds the `edit_type` marker and the status form
    pub editing: bool,
    pub show_status: bool,
}

pub fn offer_form(view: &OfferFormView<'_>) -> String {
    let OfferFormView {
        action,
        form,
        errors,
        organizations,
        message,
        editing,
        show_status,
    } = view;

    let mut body = notice(*message);

    let orgs: Vec<(String, String)> = organizations
        .iter()
        .map(|o| (o.id.to_string(), o.name.clone()))
        .collect();

    body.push_str(&format!(r#"<form method="post" action="{}" class="offer">"#, action));
    if *editing {
        body.push_str(r#"<input type="hidden" name="edit_type" value="full_edit">"#);
    }
    body.push_str(&select(
        "organization",
        "Organization",
        &orgs,
        form.value("organization"),
        errors.get("organization"),
    ));
    body.push_str(&text_input("title", "Title", form.value("title"), errors.get("title")));
    for (field, label) in CONTENT_FIELDS {
        body.push_str(&text_area(field, label, form.value(field), errors.get(field)));
    }
    body.push_str(&text_input(
        "started_at",
        "Start date",
        form.value("started_at"),
        errors.get("started_at"),
    ));
    body.push_str(&text_input(
        "finished_at",
        "End date",
        form.value("finished_at"),
        errors.get("finished_at"),
    ));
    body.push_str(r#"<p><button type="submit">Save</button></p></form>"#);

    if *show_status {
        let statuses: Vec<(String, String)> = LegacyStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.label().to_string()))
            .collect();
        body.push_str(&format!(
            r#"<form method="post" action="{}" class="status"><input type="hidden" name="edit_type" value="status_change">{}<p><button type="submit">Change status</button></p></form>"#,
            action,
            select(
                "status_old",
                "Status",
                &statuses,
                form.value("status_old"),
                errors.get("status_old"),
            )
        ));
    }

    body
}

pub fn join_form(offer: &Offer, form: &JoinForm, errors: &FormErrors, message: Option<&str>) -> String {
    let mut body = notice(message);
    body.push_str(&format!(
        r#"<p>Applying for <a href="{}">{}</a></p>"#,
        offer.url(),
        escape(&offer.title)
    ));
    body.push_str(&format!(r#"<form method="post" action="{}" class="join">"#, offer.join_url()));
    body.push_str(&text_input("email", "Email", form.value("email"), errors.get("email")));
    body.push_str(&text_input(
        "phone_no",
        "Phone number",
        form.value("phone_no"),
        errors.get("phone_no"),
    ));
    body.push_str(&text_input(
        "fullname",
        "Full name",
        form.value("fullname"),
        errors.get("fullname"),
    ));
    body.push_str(&text_area("comments", "Comments", form.value("comments"), None));
    body.push_str(r#"<p><button type="submit">Apply</button></p></form>"#);
    body
}
