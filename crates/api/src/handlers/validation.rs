//! Handlers for the `/validation` resource.
//!
//! Lists the well-known rule identifiers and runs ad-hoc checks of a single
//! value against a caller-supplied rule set.

use axum::extract::State;
use axum::Json;
use formkit_core::error::CoreError;
use formkit_core::validation::rules::WELL_KNOWN_RULES;
use formkit_core::validation::{FieldValue, MessageKey, ValidationEngine};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Upper bound on rules accepted by a single check request.
pub const MAX_RULES_PER_CHECK: usize = 32;

/// A well-known rule and its message in the active locale.
#[derive(Debug, Serialize)]
pub struct RuleTypeInfo {
    pub id: &'static str,
    pub message: String,
}

/// Request body for `POST /validation/check`.
#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub min: i64,
    #[serde(default)]
    pub max: i64,
    #[serde(default)]
    pub value: serde_json::Value,
    pub custom_error: Option<String>,
}

/// Outcome of a single check.
#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub valid: bool,
    pub error_state: String,
    pub message: String,
}

/// GET /api/v1/validation/rule-types
pub async fn list_rule_types(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<RuleTypeInfo>>> {
    let data = WELL_KNOWN_RULES
        .iter()
        .copied()
        .map(|id| RuleTypeInfo {
            id,
            message: state.catalog.render(MessageKey::for_rule(id), 0, 0),
        })
        .collect();
    Json(DataResponse { data })
}

/// POST /api/v1/validation/check
///
/// Builds a throwaway engine from the request, checks `value` and reports
/// the resulting state and message. A failing check is still a 200.
pub async fn check(
    State(state): State<AppState>,
    Json(input): Json<CheckRequest>,
) -> AppResult<Json<DataResponse<CheckResponse>>> {
    if input.rules.len() > MAX_RULES_PER_CHECK {
        return Err(AppError::BadRequest(format!(
            "At most {MAX_RULES_PER_CHECK} rules may be checked at once"
        )));
    }
    if input.rules.iter().any(|r| r.trim().is_empty()) {
        return Err(CoreError::Validation("Rule identifiers must not be empty".into()).into());
    }

    let mut engine = ValidationEngine::new().with_catalog(state.catalog.clone());
    engine.min(input.min).max(input.max);
    for rule_id in &input.rules {
        engine.add_rule(rule_id);
    }
    if let Some(message) = input.custom_error {
        engine.set_custom_error(message);
    }

    let valid = engine.check_rules(&FieldValue::from(&input.value));
    let state = engine.reported_state();
    tracing::debug!(valid, state = %state, "Ad-hoc validation check");

    Ok(Json(DataResponse {
        data: CheckResponse {
            valid,
            error_state: state.code().to_string(),
            message: engine.error_message(),
        },
    }))
}
