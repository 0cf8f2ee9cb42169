//! API handlers for the [`experience`](crate::servers::apis::v1::context::experience)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use tripcompare_primitives::pagination::Pagination;

use super::forms::{LimitQueryParams, ListQueryParams};
use crate::core::experience::{ExperienceFilter, NewExperience, DEFAULT_TOP_RATED_LIMIT};
use crate::core::Backend;
use crate::servers::apis::v1::extractors::client_info::ExtractClientInfo;
use crate::servers::apis::v1::extractors::{Json, Path, Query};
use crate::servers::apis::v1::responses::{created_response, json_response, ok_response};

pub async fn create_experience_handler(State(backend): State<Arc<Backend>>, Json(experience): Json<NewExperience>) -> Response {
    match backend.create_experience(&experience) {
        Ok(experience) => created_response(experience),
        Err(e) => e.into_response(),
    }
}

pub async fn list_experiences_handler(State(backend): State<Arc<Backend>>, Query(params): Query<ListQueryParams>) -> Response {
    let filter = ExperienceFilter {
        destination_id: params.destination_id,
        category: params.category,
    };

    match backend.list_experiences(&filter, &Pagination::new_with_options(params.skip, params.limit)) {
        Ok(experiences) => json_response(experiences),
        Err(e) => e.into_response(),
    }
}

pub async fn experience_categories_handler(State(backend): State<Arc<Backend>>) -> Response {
    json_response(backend.experience_categories())
}

pub async fn top_rated_experiences_handler(
    State(backend): State<Arc<Backend>>,
    Query(params): Query<LimitQueryParams>,
) -> Response {
    match backend.top_rated_experiences(params.limit.unwrap_or(DEFAULT_TOP_RATED_LIMIT)) {
        Ok(experiences) => json_response(experiences),
        Err(e) => e.into_response(),
    }
}

pub async fn get_experience_handler(State(backend): State<Arc<Backend>>, Path(id): Path<i64>) -> Response {
    match backend.get_experience(id) {
        Ok(experience) => json_response(experience),
        Err(e) => e.into_response(),
    }
}

pub async fn track_experience_click_handler(
    State(backend): State<Arc<Backend>>,
    Path(id): Path<i64>,
    ExtractClientInfo(client): ExtractClientInfo,
) -> Response {
    match backend.track_experience_click(id, &client) {
        Ok(()) => ok_response("Click tracked"),
        Err(e) => e.into_response(),
    }
}
