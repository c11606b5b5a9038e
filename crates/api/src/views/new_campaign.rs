//! Campaign creation form view model.

use askama::Template;

use crate::forms::CreateCampaignForm;

/// The creation form, empty on first render or echoed back with errors
/// after a failed submission.
#[derive(Debug, Template)]
#[template(path = "new_campaign.html")]
pub struct NewCampaignView {
    pub title: String,
    pub statement: String,
    /// Echoed as text so an empty field stays empty.
    pub goal: String,
    pub errors: Vec<String>,
}

impl NewCampaignView {
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            statement: String::new(),
            goal: String::new(),
            errors: Vec::new(),
        }
    }

    pub fn from_form(form: &CreateCampaignForm, errors: Vec<String>) -> Self {
        Self {
            title: form.title.clone(),
            statement: form.statement.clone(),
            goal: form.goal.to_string(),
            errors,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
