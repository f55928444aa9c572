//! HTTP API surface
//!
//! Thin boundary over the query façade, plus the passthrough endpoint that
//! forwards trip-plan requests to the external chatbot service. Route and
//! payload shapes mirror what the browser frontend expects.

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error, info};

use crate::config::ChatbotConfig;
use crate::error::TripScoutError;
use crate::query::PlaceQueryService;

/// Shared state for all API handlers
#[derive(Clone)]
pub struct ApiState {
    pub query: PlaceQueryService,
    pub chatbot: ChatbotConfig,
    pub http: reqwest::Client,
}

pub fn router(state: ApiState) -> Router {
    // The literal sorted-by-distance route coexists with the name capture;
    // axum gives static segments precedence over `{name}`.
    Router::new()
        .route("/places", get(get_places))
        .route("/places/sorted-by-distance", get(get_sorted_by_distance))
        .route("/places/{name}", get(get_place_by_name))
        .route("/nearby", get(get_nearby))
        .route("/ai/plan", post(post_plan))
        .with_state(state)
}

/// Geolocation query parameters, kept as raw strings so the façade owns
/// all parsing and validation
#[derive(Debug, Deserialize)]
struct GeoQuery {
    lat: Option<String>,
    lng: Option<String>,
    limit: Option<String>,
}

fn error_response(err: &TripScoutError) -> Response {
    let status = match err {
        TripScoutError::MissingParameter { .. } | TripScoutError::InvalidCoordinate { .. } => {
            StatusCode::BAD_REQUEST
        }
        TripScoutError::NotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.user_message() }))).into_response()
}

async fn get_places(State(state): State<ApiState>) -> Response {
    debug!("GET /places");
    Json(state.query.get_all()).into_response()
}

async fn get_place_by_name(State(state): State<ApiState>, Path(name): Path<String>) -> Response {
    debug!("GET /places/{name}");
    match state.query.get_by_name(&name) {
        Ok(place) => Json(place).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn get_nearby(State(state): State<ApiState>, Query(params): Query<GeoQuery>) -> Response {
    debug!("GET /nearby with lat={:?}, lng={:?}", params.lat, params.lng);
    match state.query.get_nearby(
        params.lat.as_deref(),
        params.lng.as_deref(),
        params.limit.as_deref(),
    ) {
        Ok(ranked) => Json(ranked).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn get_sorted_by_distance(
    State(state): State<ApiState>,
    Query(params): Query<GeoQuery>,
) -> Response {
    debug!(
        "GET /places/sorted-by-distance with lat={:?}, lng={:?}",
        params.lat, params.lng
    );
    match state
        .query
        .get_sorted_by_distance(params.lat.as_deref(), params.lng.as_deref())
    {
        Ok(ranked) => Json(ranked).into_response(),
        Err(err) => error_response(&err),
    }
}

/// Trip-plan request as sent by the planner page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub current_location: Option<String>,
    pub destination: Option<String>,
    pub days: Option<Value>,
    pub budget: Option<String>,
    pub preference: Option<String>,
}

impl PlanRequest {
    fn has_required_fields(&self) -> bool {
        self.current_location
            .as_deref()
            .is_some_and(|s| !s.is_empty())
            && self.days.is_some()
            && self.budget.as_deref().is_some_and(|s| !s.is_empty())
            && self.preference.as_deref().is_some_and(|s| !s.is_empty())
    }

    fn prompt(&self) -> String {
        let days = self.days.as_ref().map(Value::to_string).unwrap_or_default();
        let current = self.current_location.as_deref().unwrap_or_default();
        let budget = self.budget.as_deref().unwrap_or_default();
        let preference = self.preference.as_deref().unwrap_or_default();

        let destination_part = match self.destination.as_deref() {
            Some(dest) if !dest.is_empty() => format!("My desired destination is {dest}. "),
            _ => "Suggest a destination. ".to_string(),
        };

        format!(
            "Create a {days}-day travel plan. I am currently in {current}. \
             {destination_part}My budget is {budget}, and my travel preference is {preference}. \
             Provide a detailed itinerary including activities for each day, estimated cost, \
             transport suggestions, and a route map link. Format the response as a JSON object \
             with 'title', 'destination', 'days', 'estimatedCost', 'transport', 'routeMap', \
             and 'itinerary' (array of objects with 'day', 'title', 'activities')."
        )
    }
}

async fn post_plan(State(state): State<ApiState>, Json(request): Json<PlanRequest>) -> Response {
    info!("POST /ai/plan for {:?}", request.current_location);

    if !request.has_required_fields() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields for AI plan" })),
        )
            .into_response();
    }

    let payload = json!({
        "prompt": request.prompt(),
        "user_input": request,
    });

    let response = state
        .http
        .post(&state.chatbot.endpoint)
        .json(&payload)
        .send()
        .await;

    let raw: Value = match response {
        Ok(response) => match response.json().await {
            Ok(value) => value,
            Err(e) => {
                error!("Chatbot returned an unreadable body: {e}");
                return chatbot_failure(&e.to_string());
            }
        },
        Err(e) => {
            error!("Error calling chatbot service: {e}");
            return chatbot_failure(&e.to_string());
        }
    };

    Json(normalize_plan(raw, &request)).into_response()
}

fn chatbot_failure(details: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to get plan from chatbot. Please check chatbot API configuration.",
            "details": details,
        })),
    )
        .into_response()
}

/// Shape the chatbot's raw output into the plan structure the planner page
/// renders: string bodies are parsed as JSON with a plain-text fallback,
/// and missing itinerary/title/destination fields are filled in
fn normalize_plan(raw: Value, request: &PlanRequest) -> Value {
    let mut plan = match raw {
        Value::String(text) => match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(parsed)) => Value::Object(parsed),
            _ => fallback_plan(&text, request),
        },
        Value::Object(obj) => Value::Object(obj),
        other => fallback_plan(&other.to_string(), request),
    };

    let destination = request
        .destination
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| "Unknown Destination".to_string());

    let itinerary_missing = !plan
        .get("itinerary")
        .and_then(Value::as_array)
        .is_some_and(|items| !items.is_empty());
    if itinerary_missing {
        let activities = plan
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("No specific activities provided.")
            .to_string();
        plan["itinerary"] = json!([
            { "day": 1, "title": "Plan Details from Chatbot", "activities": activities }
        ]);
    }

    if plan.get("destination").and_then(Value::as_str).is_none() {
        plan["destination"] = json!(destination);
    }
    if plan.get("title").and_then(Value::as_str).is_none() {
        let preference = request.preference.as_deref().unwrap_or("travel");
        let destination = plan["destination"].as_str().unwrap_or(&destination).to_string();
        plan["title"] = json!(format!("Your {preference} trip to {destination}!"));
    }

    plan
}

fn fallback_plan(text: &str, request: &PlanRequest) -> Value {
    json!({
        "title": "Generated Plan (from Chatbot Text)",
        "destination": request.destination.clone().filter(|d| !d.is_empty()),
        "days": request.days,
        "estimatedCost": "N/A",
        "transport": "Check chatbot response for details.",
        "routeMap": "#",
        "itinerary": [{ "day": 1, "title": "Chatbot Response", "activities": text }],
    })
}
