//! Validated HTML form types.
//!
//! Each form derives `Deserialize` (decoded from the request body by
//! `axum::Form`) and `Validate`. Handlers call `validate()` before any
//! persistence; unknown fields in the submitted body are ignored by
//! serde, so a client cannot smuggle extra columns (notably an owner id)
//! through a crafted form.

use serde::Deserialize;
use sigcolle_core::types::DbId;
use validator::{Validate, ValidationError, ValidationErrors};

/// Signature submission for an existing campaign.
///
/// `campaign_id` travels as a hidden field; the redirect after a
/// successful submission is built from it, never from the inserted row.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignatureForm {
    pub campaign_id: DbId,

    #[validate(
        custom(function = non_blank),
        length(max = 50, message = "Name must be at most 50 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 500, message = "Comment must be at most 500 characters"))]
    pub signature_comment: String,
}

impl SignatureForm {
    /// An empty form pre-filled with the campaign id, for the initial
    /// page render.
    pub fn empty(campaign_id: DbId) -> Self {
        Self {
            campaign_id,
            name: String::new(),
            signature_comment: String::new(),
        }
    }
}

/// New campaign submission.
///
/// Deliberately has no owner field: the owner is always resolved from
/// the authenticated session.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCampaignForm {
    #[validate(
        custom(function = non_blank),
        length(max = 30, message = "Title must be at most 30 characters")
    )]
    pub title: String,

    #[validate(
        custom(function = non_blank),
        length(max = 1000, message = "Statement must be at most 1000 characters")
    )]
    pub statement: String,

    #[validate(range(min = 1, message = "Goal must be a positive number"))]
    pub goal: i64,
}

/// Reject values that are empty or whitespace-only.
fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("non_blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Flatten validation errors into display strings, one per failed rule,
/// ordered by field name for stable output.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
