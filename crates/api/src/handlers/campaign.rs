//! Handlers for the campaign creation and signing workflow.
//!
//! Three operations: show a campaign page, submit a signature, create a
//! campaign. Validation failures re-render locally with the submitted
//! values echoed back; successful writes commit inside the repository's
//! transaction and answer with a 303 redirect carrying a flash message.

use askama::Template;
use axum::extract::{Path, State};
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use validator::Validate;

use sigcolle_core::campaign::shorten_title;
use sigcolle_core::error::CoreError;
use sigcolle_core::markdown::render_statement;
use sigcolle_core::types::DbId;
use sigcolle_db::models::campaign::CreateCampaign;
use sigcolle_db::models::signature::CreateSignature;
use sigcolle_db::repositories::{CampaignRepo, SignatureRepo};

use crate::error::{AppError, AppResult};
use crate::flash::{clear_flash_cookie, flash_token, pop_flash, redirect_with_flash};
use crate::forms::{error_messages, CreateCampaignForm, SignatureForm};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views::{CampaignView, NewCampaignView};

/// GET /campaign/{id}
///
/// Render the campaign page: owner projection, derived signature count,
/// an empty signature form, and the flash message left by a preceding
/// redirect, if any.
pub async fn show_campaign(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let had_flash_cookie = flash_token(&headers).is_some();
    let message = pop_flash(&state.pool, &headers).await?;

    let html =
        render_campaign_page(&state, id, &SignatureForm::empty(id), Vec::new(), message).await?;

    let mut response = Html(html).into_response();
    if had_flash_cookie {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_flash_cookie());
    }
    Ok(response)
}

/// POST /campaign/sign
///
/// Record a signature. An invalid form re-renders the campaign page with
/// the submitted values and field errors echoed back; nothing touches
/// the database on that path.
pub async fn sign_campaign(
    State(state): State<AppState>,
    Form(form): Form<SignatureForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let html = render_campaign_page(
            &state,
            form.campaign_id,
            &form,
            error_messages(&errors),
            None,
        )
        .await?;
        return Ok(Html(html).into_response());
    }

    let signature = SignatureRepo::create(
        &state.pool,
        &CreateSignature {
            campaign_id: form.campaign_id,
            name: form.name.clone(),
            signature_comment: blank_to_none(&form.signature_comment),
        },
    )
    .await?;

    tracing::info!(
        campaign_id = form.campaign_id,
        signature_id = signature.id,
        "Signature recorded"
    );

    // The redirect target comes from the submitted form, not from the
    // inserted row.
    redirect_with_flash(
        &state.pool,
        &format!("/campaign/{}", form.campaign_id),
        "Thank you for your support!",
    )
    .await
}

/// GET /campaigns/new
///
/// Render the empty campaign creation form.
pub async fn new_campaign_form(_auth: AuthUser) -> AppResult<Html<String>> {
    Ok(Html(NewCampaignView::empty().render()?))
}

/// POST /campaigns
///
/// Create a campaign owned by the session principal. The owner id is
/// never taken from the form; a smuggled `create_user_id` field is
/// dropped during deserialization.
pub async fn create_campaign(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<CreateCampaignForm>,
) -> AppResult<Response> {
    if let Err(errors) = form.validate() {
        let view = NewCampaignView::from_form(&form, error_messages(&errors));
        return Ok((StatusCode::BAD_REQUEST, Html(view.render()?)).into_response());
    }

    let statement = if state.config.markdown_rendering {
        render_statement(&form.statement)
    } else {
        form.statement.clone()
    };

    let campaign = CampaignRepo::create(
        &state.pool,
        &CreateCampaign {
            title: form.title.clone(),
            statement,
            goal: form.goal,
            create_user_id: auth.user_id,
        },
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        campaign_id = campaign.id,
        "Campaign created"
    );

    let message = format!("Created campaign \"{}\".", shorten_title(&campaign.title));
    redirect_with_flash(&state.pool, &format!("/campaign/{}", campaign.id), &message).await
}

/// Load everything the campaign template needs and render it.
///
/// Two read-only queries: the owner projection and the derived signature
/// count. An unknown campaign id is a 404.
async fn render_campaign_page(
    state: &AppState,
    campaign_id: DbId,
    form: &SignatureForm,
    errors: Vec<String>,
    message: Option<String>,
) -> AppResult<String> {
    let campaign = CampaignRepo::find_user_campaign(&state.pool, campaign_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Campaign",
            id: campaign_id,
        }))?;

    let signature_count = SignatureRepo::count_by_campaign(&state.pool, campaign_id).await?;

    let view = CampaignView::new(&campaign, signature_count, form, errors, message);
    Ok(view.render()?)
}

/// Empty or whitespace-only comments are stored as NULL.
fn blank_to_none(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
