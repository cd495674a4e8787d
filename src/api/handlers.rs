//! HTTP request handlers for the split engine API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! mutating endpoint answers with the full session snapshot taken under the
//! same lock as the mutation.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, patch, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{MemberId, MemberPatch, RosterSnapshot};

use super::request::{PatchMemberRequest, ResizeRequest, SetTotalRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/session", get(get_session_handler))
        .route("/session/total", put(set_total_handler))
        .route("/session/members/count", put(resize_handler))
        .route("/session/members/:id", patch(patch_member_handler))
        .with_state(state)
}

/// Handler for GET /session.
async fn get_session_handler(State(state): State<AppState>) -> Response {
    let snapshot = state.roster().lock().snapshot();
    snapshot_response(snapshot)
}

/// Handler for PUT /session/total.
async fn set_total_handler(
    State(state): State<AppState>,
    payload: Result<Json<SetTotalRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing set total request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let snapshot = {
        let mut roster = state.roster().lock();
        roster.set_total(request.total);
        roster.snapshot()
    };

    info!(
        correlation_id = %correlation_id,
        total = %snapshot.total,
        allocated_total = %snapshot.allocated_total,
        "Total set"
    );
    snapshot_response(snapshot)
}

/// Handler for PUT /session/members/count.
async fn resize_handler(
    State(state): State<AppState>,
    payload: Result<Json<ResizeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing resize request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let max = state.config().session().max_member_count;
    if request.count > max as i64 {
        warn!(
            correlation_id = %correlation_id,
            requested = request.count,
            max = max,
            "Member count above limit"
        );
        return ApiErrorResponse::bad_request(ApiError::with_details(
            "VALIDATION_ERROR",
            format!("count must not exceed {}", max),
            format!("Requested {} members", request.count),
        ))
        .into_response();
    }

    let snapshot = {
        let mut roster = state.roster().lock();
        roster.resize(request.count);
        roster.snapshot()
    };

    info!(
        correlation_id = %correlation_id,
        members = snapshot.members.len(),
        "Resize handled"
    );
    snapshot_response(snapshot)
}

/// Handler for PATCH /session/members/:id.
async fn patch_member_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<PatchMemberRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, member_id = %id, "Processing patch request");

    let member_id: MemberId = match id.parse() {
        Ok(member_id) => member_id,
        Err(err) => {
            warn!(correlation_id = %correlation_id, member_id = %id, error = %err, "Bad member id");
            return ApiErrorResponse::bad_request(ApiError::with_details(
                "VALIDATION_ERROR",
                format!("Invalid member id: {}", id),
                err.to_string(),
            ))
            .into_response();
        }
    };

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let patch = match MemberPatch::try_from(request) {
        Ok(patch) => patch,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid patch");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let result = {
        let mut roster = state.roster().lock();
        let patched = roster.patch_member(member_id, patch).map(|_| ());
        patched.map(|()| roster.snapshot())
    };

    match result {
        Ok(snapshot) => {
            info!(correlation_id = %correlation_id, member_id = %member_id, "Member patched");
            snapshot_response(snapshot)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Patch failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn snapshot_response(snapshot: RosterSnapshot) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(snapshot),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
