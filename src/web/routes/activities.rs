use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::models::Activity;
use crate::services::activities_service::{self, ActivityError};
use crate::store::ActivityStore;

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: String,
}

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::signup(&store, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "signup rejected");
            error_response(e)
        })
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(store): State<ActivityStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    activities_service::unregister(&store, &activity_name, &query.email)
        .map(|message| Json(json!({ "message": message })))
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "unregister rejected");
            error_response(e)
        })
}

fn error_response(err: ActivityError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ActivityError::ActivityNotFound | ActivityError::NotSignedUp => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp => StatusCode::BAD_REQUEST,
    };
    (status, Json(json!({ "detail": err.to_string() })))
}
