//! Form submission route handlers
//!
//! One handler serves all three forms:
//! validate, format, hand to the mailer once, map the outcome.

use crate::error::ApiResult;
use crate::extract::Submission;
use crate::models::{check_required, FormSubmission, SuccessResponse};
use crate::notification::Notification;
use crate::state::SharedState;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

/// POST /submit-contact, /submit-order, /submit-review
///
/// 200 once the transport accepts the message, 400 when a required field is
/// missing (nothing is sent), 500 when the single delivery attempt fails.
pub async fn submit<F: FormSubmission>(
    State(state): State<SharedState>,
    Submission(form): Submission<F>,
) -> ApiResult<Json<SuccessResponse>> {
    debug!("{} form submission: {:?}", F::KIND, form);

    check_required(&form)?;

    let mail = Notification::from_submission(&form)
        .into_mail(form.sender(), &state.operator_address);
    let receipt = state.mailer.send(mail).await?;

    info!("{} email sent: {}", F::KIND, receipt.response);
    Ok(Json(SuccessResponse::new()))
}
