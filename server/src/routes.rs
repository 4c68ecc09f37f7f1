use std::sync::Arc;

use axum::{Json, body::Bytes, extract::State as AxumState};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{
    counter::Action,
    error::AppError::{self, MalformedPayload},
    state::State,
};

#[derive(Serialize)]
pub struct ViewerCountResponse {
    #[serde(rename = "viewerCount")]
    pub viewer_count: i64,
}

pub async fn viewer_count_handler(
    AxumState(state): AxumState<Arc<State>>,
) -> Json<ViewerCountResponse> {
    Json(ViewerCountResponse {
        viewer_count: state.counter.read(),
    })
}

pub async fn mutate_handler(
    AxumState(state): AxumState<Arc<State>>,
    bytes: Bytes,
) -> Result<Json<ViewerCountResponse>, AppError> {
    let payload: Value = serde_json::from_slice(&bytes).map_err(|_| MalformedPayload)?;

    // A missing, non-string, or unrecognized action takes no branch and the
    // unchanged count goes back out.
    let viewer_count = match payload
        .get("action")
        .and_then(Value::as_str)
        .and_then(Action::parse)
    {
        Some(action) => state.counter.apply(action),
        None => {
            debug!("Unrecognized action, returning current count");
            state.counter.read()
        }
    };

    Ok(Json(ViewerCountResponse { viewer_count }))
}
