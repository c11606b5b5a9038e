//! Campaign page view model.

use askama::Template;
use sigcolle_core::types::DbId;
use sigcolle_db::models::campaign::UserCampaign;

use crate::forms::SignatureForm;

/// The campaign detail page: campaign data, the derived signature count,
/// the signature form (possibly echoed back with errors), and an
/// optional one-shot message.
#[derive(Debug, Template)]
#[template(path = "campaign.html")]
pub struct CampaignView {
    pub campaign_id: DbId,
    pub title: String,
    /// Stored statement; rendered HTML when Markdown rendering was
    /// enabled at creation time.
    pub statement: String,
    pub goal: i64,
    pub owner_name: String,
    pub signature_count: i64,
    pub signature_name: String,
    pub signature_comment: String,
    pub errors: Vec<String>,
    pub message: Option<String>,
}

impl CampaignView {
    pub fn new(
        campaign: &UserCampaign,
        signature_count: i64,
        form: &SignatureForm,
        errors: Vec<String>,
        message: Option<String>,
    ) -> Self {
        Self {
            campaign_id: campaign.id,
            title: campaign.title.clone(),
            statement: campaign.statement.clone(),
            goal: campaign.goal,
            owner_name: format!("{} {}", campaign.first_name, campaign.last_name),
            signature_count,
            signature_name: form.name.clone(),
            signature_comment: form.signature_comment.clone(),
            errors,
            message,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_campaign() -> UserCampaign {
        UserCampaign {
            id: 5,
            title: "Save the Park".to_string(),
            statement: "<p><strong>bold</strong></p>".to_string(),
            goal: 100,
            create_user_id: 42,
            created_at: Utc::now(),
            last_name: "Yamada".to_string(),
            first_name: "Taro".to_string(),
        }
    }

    #[test]
    fn renders_campaign_data() {
        let view = CampaignView::new(
            &sample_campaign(),
            3,
            &SignatureForm::empty(5),
            vec![],
            None,
        );
        let html = view.render().unwrap();

        assert!(html.contains("Save the Park"));
        assert!(html.contains("Taro Yamada"));
        assert!(html.contains("3"));
        // Stored statement HTML is emitted as-is.
        assert!(html.contains("<p><strong>bold</strong></p>"));
    }

    #[test]
    fn renders_flash_message_when_present() {
        let view = CampaignView::new(
            &sample_campaign(),
            0,
            &SignatureForm::empty(5),
            vec![],
            Some("Thank you for your support!".to_string()),
        );
        let html = view.render().unwrap();
        assert!(html.contains("Thank you for your support!"));
    }

    #[test]
    fn echoes_submitted_form_and_errors() {
        let form = SignatureForm {
            campaign_id: 5,
            name: String::new(),
            signature_comment: "hi".to_string(),
        };
        let view = CampaignView::new(
            &sample_campaign(),
            0,
            &form,
            vec!["name: must not be blank".to_string()],
            None,
        );
        let html = view.render().unwrap();

        assert!(html.contains("name: must not be blank"));
        assert!(html.contains(">hi</textarea>"));
        assert!(html.contains("value=\"5\""));
    }
}
