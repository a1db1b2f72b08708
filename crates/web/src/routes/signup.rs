//! Merchant self-registration. Only the member console offers it.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use loyalty_pro_core::Registration;

use super::Outcome;
use crate::error::AppError;
use crate::state::AppState;

/// POST /signup
pub async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<Registration>, JsonRejection>,
) -> Result<Json<Outcome>, AppError> {
    let Json(registration) = payload?;
    let success = state.member().lock().await.sign_up(&registration).await;
    Ok(Json(Outcome { success }))
}
