//! Form input for offers and its validation.
//!
//! Forms arrive as `application/x-www-form-urlencoded` bodies where any field
//! may be missing, so every field is optional here and validation turns the
//! raw strings into typed values or a set of per-field errors.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::common::OrganizationId;
use crate::domains::offers::models::{LegacyStatus, Offer, OfferContent};

/// Per-field validation errors, keyed by form field name
#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("form contains {} invalid field(s)", .fields.len())]
pub struct FormErrors {
    fields: BTreeMap<&'static str, &'static str>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: &'static str) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    /// Record an error; the first message for a field wins
    pub fn add(&mut self, field: &'static str, message: &'static str) {
        self.fields.entry(field).or_insert(message);
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.fields.get(field).copied()
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, FormErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

const REQUIRED: &str = "This field is required.";
const INVALID_DATE: &str = "Enter a valid date and time (YYYY-MM-DD HH:MM:SS).";
pub const INVALID_CHOICE: &str = "Select a valid choice.";
const END_BEFORE_START: &str = "The end date cannot precede the start date.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Which kind of edit an edit-form submission performs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditType {
    FullEdit,
    StatusChange,
}

impl std::str::FromStr for EditType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "full_edit" => Ok(EditType::FullEdit),
            "status_change" => Ok(EditType::StatusChange),
            _ => Err(anyhow::anyhow!("Invalid edit type: {}", s)),
        }
    }
}

// =============================================================================
// Offer create / edit form
// =============================================================================

/// Raw offer form, used for creation, both edit modes and re-rendering
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OfferForm {
    pub edit_type: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub time_commitment: Option<String>,
    pub benefits: Option<String>,
    pub location: Option<String>,
    pub time_period: Option<String>,
    pub started_at: Option<String>,
    pub finished_at: Option<String>,
    pub status_old: Option<String>,
}

impl OfferForm {
    /// Form pre-filled with an existing offer
    pub fn from_offer(offer: &Offer) -> Self {
        Self {
            edit_type: None,
            organization: Some(offer.organization_id.to_string()),
            title: Some(offer.title.clone()),
            description: Some(offer.description.clone()),
            requirements: Some(offer.requirements.clone()),
            time_commitment: Some(offer.time_commitment.clone()),
            benefits: Some(offer.benefits.clone()),
            location: Some(offer.location.clone()),
            time_period: Some(offer.time_period.clone()),
            started_at: offer.started_at.map(format_datetime),
            finished_at: offer.finished_at.map(format_datetime),
            status_old: Some(offer.status_old.as_str().to_string()),
        }
    }

    /// Raw value of a field for re-rendering
    pub fn value(&self, field: &str) -> &str {
        let value = match field {
            "organization" => &self.organization,
            "title" => &self.title,
            "description" => &self.description,
            "requirements" => &self.requirements,
            "time_commitment" => &self.time_commitment,
            "benefits" => &self.benefits,
            "location" => &self.location,
            "time_period" => &self.time_period,
            "started_at" => &self.started_at,
            "finished_at" => &self.finished_at,
            "status_old" => &self.status_old,
            _ => &None,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn edit_type(&self) -> Result<EditType, FormErrors> {
        self.edit_type
            .as_deref()
            .map(str::trim)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| FormErrors::single("edit_type", INVALID_CHOICE))
    }

    /// Validate the status-only edit
    pub fn legacy_status(&self) -> Result<LegacyStatus, FormErrors> {
        match non_blank(&self.status_old) {
            None => Err(FormErrors::single("status_old", REQUIRED)),
            Some(raw) => raw
                .parse()
                .map_err(|_| FormErrors::single("status_old", INVALID_CHOICE)),
        }
    }

    /// Validate the full content (creation and full edit)
    pub fn content(&self) -> Result<OfferContent, FormErrors> {
        let mut errors = FormErrors::new();

        let organization_id = match non_blank(&self.organization) {
            None => {
                errors.add("organization", REQUIRED);
                None
            }
            Some(raw) => match OrganizationId::parse(raw) {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("organization", INVALID_CHOICE);
                    None
                }
            },
        };

        let mut required = |field: &'static str, value: &Option<String>| -> String {
            match non_blank(value) {
                Some(v) => v.to_string(),
                None => {
                    errors.add(field, REQUIRED);
                    String::new()
                }
            }
        };
        let title = required("title", &self.title);
        let description = required("description", &self.description);
        let requirements = required("requirements", &self.requirements);
        let time_commitment = required("time_commitment", &self.time_commitment);
        let benefits = required("benefits", &self.benefits);
        let location = required("location", &self.location);
        let time_period = required("time_period", &self.time_period);

        let started_at = parse_optional_datetime(&self.started_at).unwrap_or_else(|_| {
            errors.add("started_at", INVALID_DATE);
            None
        });
        let finished_at = parse_optional_datetime(&self.finished_at).unwrap_or_else(|_| {
            errors.add("finished_at", INVALID_DATE);
            None
        });
        if let (Some(start), Some(end)) = (started_at, finished_at) {
            if end < start {
                errors.add("finished_at", END_BEFORE_START);
            }
        }

        match organization_id {
            Some(organization_id) if errors.is_empty() => Ok(OfferContent {
                organization_id,
                title,
                description,
                requirements,
                time_commitment,
                benefits,
                location,
                time_period,
                started_at,
                finished_at,
            }),
            _ => Err(errors),
        }
    }
}

// =============================================================================
// Join form
// =============================================================================

/// Raw application submitted on the join page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinForm {
    pub email: Option<String>,
    pub phone_no: Option<String>,
    pub fullname: Option<String>,
    pub comments: Option<String>,
}

/// A validated application to an offer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinApplication {
    pub email: String,
    pub phone_no: String,
    pub fullname: String,
    pub comments: String,
}

impl JoinForm {
    pub fn value(&self, field: &str) -> &str {
        let value = match field {
            "email" => &self.email,
            "phone_no" => &self.phone_no,
            "fullname" => &self.fullname,
            "comments" => &self.comments,
            _ => &None,
        };
        value.as_deref().unwrap_or("")
    }

    pub fn validate(&self) -> Result<JoinApplication, FormErrors> {
        let mut errors = FormErrors::new();

        let email = match non_blank(&self.email) {
            None => {
                errors.add("email", REQUIRED);
                String::new()
            }
            Some(email) if !validator::validate_email(email) => {
                errors.add("email", INVALID_EMAIL);
                String::new()
            }
            Some(email) => email.to_string(),
        };
        let phone_no = non_blank(&self.phone_no).map(String::from).unwrap_or_else(|| {
            errors.add("phone_no", REQUIRED);
            String::new()
        });
        let fullname = non_blank(&self.fullname).map(String::from).unwrap_or_else(|| {
            errors.add("fullname", REQUIRED);
            String::new()
        });
        let comments = non_blank(&self.comments).unwrap_or("").to_string();

        errors.into_result(|| JoinApplication {
            email,
            phone_no,
            fullname,
            comments,
        })
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse an optional form date; blank means "no date".
///
/// Naive values are interpreted as UTC.
fn parse_optional_datetime(value: &Option<String>) -> Result<Option<DateTime<Utc>>, ()> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(Some(naive.and_utc()));
        }
    }
    Err(())
}

pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}
