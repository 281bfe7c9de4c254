use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::{case_id::CaseId, seconds::Seconds, state::AppState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    pub activity: String,
    pub case_id: CaseId,
    pub seconds: Seconds,
}

pub fn make_router<S: AppState>(state: S) -> Router {
    Router::new()
        .route("/activities", get(activities_handler::<S>))
        .route(
            "/activities/:activity/time_lasted/:case_id",
            get(time_lasted_handler::<S>),
        )
        .route(
            "/activities/:activity/time_after/:case_id",
            get(time_after_handler::<S>),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn activities_handler<S: AppState>(state: State<S>) -> Json<Vec<String>> {
    Json(state.timings().activities())
}

async fn time_lasted_handler<S: AppState>(
    state: State<S>,
    Path((activity, case_id)): Path<(String, String)>,
) -> Json<Sample> {
    let case_id = CaseId(case_id);
    let seconds = state.timings().time_lasted(&activity, &case_id);
    debug!("{} in case {} lasts {}", activity, case_id, seconds);
    Json(Sample {
        activity,
        case_id,
        seconds,
    })
}

async fn time_after_handler<S: AppState>(
    state: State<S>,
    Path((activity, case_id)): Path<(String, String)>,
) -> Json<Sample> {
    let case_id = CaseId(case_id);
    let seconds = state.timings().time_after(&activity, &case_id);
    debug!("{} in case {} waits {}", activity, case_id, seconds);
    Json(Sample {
        activity,
        case_id,
        seconds,
    })
}
