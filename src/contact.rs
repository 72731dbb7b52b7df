//! Contact submission domain model and validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Lifecycle tag of a stored submission
///
/// Submissions are immutable after creation, so `New` is the only state a
/// record can currently hold.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
}

/// A stored contact form submission
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

/// Raw request body for `POST /api/contact`
///
/// Fields default to empty strings so that an absent field surfaces as a
/// per-field validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// A validated, normalized submission ready for storage
#[derive(Debug, Clone, Validate)]
pub struct NewContact {
    #[validate(
        length(min = 2, message = "Name must be at least 2 characters long"),
        regex(path = *NAME_PATTERN, message = "Name can only contain letters and spaces")
    )]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters long"))]
    pub message: String,
}

/// One failed field rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ContactForm {
    /// Apply the field rules and produce a normalized record or every failed
    /// field. Pure function of the input; no side effects.
    pub fn into_validated(self) -> Result<NewContact, Vec<FieldError>> {
        let mut candidate = NewContact {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        candidate.validate().map_err(field_errors)?;

        candidate.email = normalize_email(&candidate.email);
        Ok(candidate)
    }
}

/// Canonicalize an already syntactically-valid email address
///
/// The whole address is lowercased; provider-specific sub-address
/// conventions are stripped so equivalent inboxes compare equal:
/// gmail ignores dots and `+suffix` (and googlemail.com is an alias),
/// the outlook and icloud families ignore `+suffix`, yahoo ignores
/// `-suffix`. Unknown domains are only lowercased.
pub fn normalize_email(email: &str) -> String {
    let lowered = email.to_lowercase();
    let Some((local, domain)) = lowered.rsplit_once('@') else {
        return lowered;
    };

    let mut local = local.to_string();
    let mut domain = domain.to_string();

    match domain.as_str() {
        "gmail.com" | "googlemail.com" => {
            if let Some(idx) = local.find('+') {
                local.truncate(idx);
            }
            local.retain(|c| c != '.');
            domain = "gmail.com".to_string();
        }
        "outlook.com" | "hotmail.com" | "live.com" | "icloud.com" | "me.com" => {
            if let Some(idx) = local.find('+') {
                local.truncate(idx);
            }
        }
        "yahoo.com" | "ymail.com" => {
            if let Some(idx) = local.find('-') {
                local.truncate(idx);
            }
        }
        _ => {}
    }

    format!("{local}@{domain}")
}

/// Flatten `ValidationErrors` into field/message pairs, every failed rule
/// included, sorted by field for a stable response shape.
fn field_errors(errors: validator::ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(|error| FieldError {
                field: field.to_string(),
                message: error
                    .message
                    .clone()
                    .map(|m| m.into_owned())
                    .unwrap_or_else(|| error.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    out
}
