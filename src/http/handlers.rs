//! Route handlers. Each one is a single call on the [`QueueClient`](crate::clients::QueueClient).

use super::dto::{
    Ack, ApiResponse, CompleteParams, Completed, DelayParams, Delayed, HealthView, OrderView,
    SummaryView,
};
use super::AppState;
use crate::model::OrderId;
use crate::order_actor::{QueueError, Summary};
use actor_framework::ActorClient;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::warn;

const EMPTY_SUMMARY_MESSAGE: &str = "No completed orders yet.";

/// Domain errors answer 200 with an error payload; a dead actor answers 503.
fn failure<T: Serialize>(err: QueueError) -> Response {
    match err {
        QueueError::ActorCommunicationError(_) => {
            warn!(error = %err, "Café actor unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse::<T>::from_queue_error(&err)),
            )
                .into_response()
        }
        _ => Json(ApiResponse::<T>::from_queue_error(&err)).into_response(),
    }
}

/// `GET /orders`
pub async fn list_orders(State(state): State<AppState>) -> Response {
    match state.queue.poll().await {
        Ok(orders) => {
            let body: Vec<OrderView> = orders.iter().map(OrderView::from).collect();
            Json(body).into_response()
        }
        Err(e) => failure::<Ack>(e),
    }
}

/// `POST /start`
pub async fn start(State(state): State<AppState>) -> Response {
    match state.queue.start().await {
        Ok(_) => Json(ApiResponse::Ok(Ack {})).into_response(),
        Err(e) => failure::<Ack>(e),
    }
}

/// `POST /delay?order_id=<int>&minutes=<int>`
pub async fn delay(State(state): State<AppState>, Query(params): Query<DelayParams>) -> Response {
    match state
        .queue
        .delay(OrderId(params.order_id), params.minutes)
        .await
    {
        Ok(new_predicted) => Json(ApiResponse::Ok(Delayed { new_predicted })).into_response(),
        Err(e) => failure::<Delayed>(e),
    }
}

/// `POST /complete?order_id=<int>`
pub async fn complete(
    State(state): State<AppState>,
    Query(params): Query<CompleteParams>,
) -> Response {
    match state.queue.complete(OrderId(params.order_id)).await {
        Ok(record) => Json(ApiResponse::Ok(Completed::from(&record))).into_response(),
        Err(e) => failure::<Completed>(e),
    }
}

/// `GET /summary`
pub async fn summary(State(state): State<AppState>) -> Response {
    match state.queue.summarize().await {
        Ok(Summary::Empty) => Json(ApiResponse::<SummaryView>::Empty {
            message: EMPTY_SUMMARY_MESSAGE.to_string(),
        })
        .into_response(),
        Ok(Summary::Report(report)) => {
            Json(ApiResponse::Ok(SummaryView::from(&report))).into_response()
        }
        Err(e) => failure::<SummaryView>(e),
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Response {
    match state.queue.snapshot().await {
        Ok(snapshot) => Json(ApiResponse::Ok(HealthView::from(snapshot))).into_response(),
        Err(e) => failure::<HealthView>(e),
    }
}
