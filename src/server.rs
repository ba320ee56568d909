use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Map, Value};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::handlers::NutritionHandler;
use crate::models::{CheckGiziRequest, ItemOutcome, NutritionQuery};

pub const INVALID_AGE_MESSAGE: &str = "invalid age";
pub const MISSING_ITEM_MESSAGE: &str = "must supply a food or drink name";
const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

pub struct AppState {
    pub nutrition: Arc<NutritionHandler>,
}

/// POST /check_gizi plus the static front-end; anything that is not the API
/// route falls through to the asset directory.
pub fn create_router(nutrition: Arc<NutritionHandler>) -> Router {
    let state = Arc::new(AppState { nutrition });

    Router::new()
        .route("/check_gizi", post(check_gizi))
        .fallback_service(ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Route boundary: whatever goes wrong below surfaces as a 500 with a
/// generic message, full detail stays in the server log.
async fn check_gizi(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CheckGiziRequest>,
) -> (StatusCode, Json<Value>) {
    match handle_check_gizi(&state, request).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("❌ Unhandled error in /check_gizi: {:#}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
            )
        }
    }
}

async fn handle_check_gizi(
    state: &AppState,
    request: CheckGiziRequest,
) -> anyhow::Result<(StatusCode, Json<Value>)> {
    let age = match request.age.as_ref().and_then(Value::as_u64) {
        Some(age) if age > 0 => age,
        _ => return Ok(bad_request(INVALID_AGE_MESSAGE)),
    };

    let food = NutritionQuery::from_field(request.food.as_deref(), age);
    let drink = NutritionQuery::from_field(request.drink.as_deref(), age);

    if food.is_none() && drink.is_none() {
        return Ok(bad_request(MISSING_ITEM_MESSAGE));
    }

    let mut results = Map::new();
    results.insert("age".to_string(), json!(age));

    // Strictly sequential: at most two upstream calls per request, food
    // first. A failure on one field never blocks the other.
    if let Some(query) = food {
        log::info!("🍛 Checking food '{}' for age {}", query.item_name, age);
        record_outcome(&mut results, "food", state.nutrition.check_item(&query).await)?;
    }
    if let Some(query) = drink {
        log::info!("🥤 Checking drink '{}' for age {}", query.item_name, age);
        record_outcome(&mut results, "drink", state.nutrition.check_item(&query).await)?;
    }

    Ok((StatusCode::OK, Json(Value::Object(results))))
}

fn record_outcome(
    results: &mut Map<String, Value>,
    field: &str,
    outcome: ItemOutcome,
) -> anyhow::Result<()> {
    match outcome {
        ItemOutcome::Report(report) => {
            results.insert(field.to_string(), serde_json::to_value(report)?);
        }
        ItemOutcome::Failed(err) => {
            results.insert(format!("{field}_error"), Value::String(err.message));
            // Client-facing debug payload exists for format failures only.
            // The key is shared, so with two failing fields the later one
            // wins.
            if let Some(raw) = err.debug_response {
                results.insert("debug_response".to_string(), Value::String(raw));
            }
        }
    }
    Ok(())
}

fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}
