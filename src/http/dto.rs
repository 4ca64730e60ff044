//! JSON bodies exchanged with the frontend.
//!
//! Every response object carries a `status` tag (`"ok"`, `"error"` or `"empty"`). Every
//! timestamp is rendered by [`format_timestamp`](crate::model::format_timestamp).

use crate::model::{timestamp, CompletionRecord, Order, OrderId, Timeliness, Timestamp};
use crate::order_actor::{CafeSnapshot, QueueError, SummaryLine, SummaryReport};
use serde::{Deserialize, Serialize};

/// Query of `POST /delay`.
#[derive(Debug, Deserialize)]
pub struct DelayParams {
    pub order_id: u64,
    pub minutes: i64,
}

/// Query of `POST /complete`.
#[derive(Debug, Deserialize)]
pub struct CompleteParams {
    pub order_id: u64,
}

/// Tagged envelope shared by every non-list endpoint.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Ok(T),
    Error { message: String },
    Empty { message: String },
}

impl<T> ApiResponse<T> {
    /// Domain failures become an `"error"` payload with a caller-facing message.
    pub fn from_queue_error(err: &QueueError) -> Self {
        let message = match err {
            QueueError::NotFound(_) => "Order not found".to_string(),
            QueueError::OutOfRange(_) => "Predicted time out of range".to_string(),
            QueueError::ActorCommunicationError(msg) => msg.clone(),
        };
        ApiResponse::Error { message }
    }
}

/// Body of an `"ok"` response that carries nothing else.
#[derive(Debug, Serialize)]
pub struct Ack {}

#[derive(Debug, Serialize)]
pub struct OrderView {
    pub order_id: OrderId,
    pub menus: Vec<String>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub time: Timestamp,
    #[serde(serialize_with = "timestamp::serialize")]
    pub predicted: Timestamp,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            menus: order.menus.clone(),
            time: order.created_at,
            predicted: order.predicted_completion,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Delayed {
    #[serde(serialize_with = "timestamp::serialize")]
    pub new_predicted: Timestamp,
}

#[derive(Debug, Serialize)]
pub struct Completed {
    #[serde(serialize_with = "timestamp::serialize")]
    pub completed: Timestamp,
    pub delay_seconds: f64,
}

impl From<&CompletionRecord> for Completed {
    fn from(record: &CompletionRecord) -> Self {
        Self {
            completed: record.actual,
            delay_seconds: record.delay_seconds,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryLineView {
    pub order_id: OrderId,
    pub menus: Vec<String>,
    #[serde(serialize_with = "timestamp::serialize")]
    pub predicted: Timestamp,
    #[serde(serialize_with = "timestamp::serialize")]
    pub actual: Timestamp,
    pub delay_seconds: f64,
    pub status: Timeliness,
}

impl From<&SummaryLine> for SummaryLineView {
    fn from(line: &SummaryLine) -> Self {
        Self {
            order_id: line.order_id,
            menus: line.menus.clone(),
            predicted: line.predicted,
            actual: line.actual,
            delay_seconds: line.delay_seconds,
            status: line.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SummaryView {
    pub average_accuracy_percent: f64,
    pub average_delay_seconds: f64,
    pub orders: Vec<SummaryLineView>,
}

impl From<&SummaryReport> for SummaryView {
    fn from(report: &SummaryReport) -> Self {
        Self {
            average_accuracy_percent: report.average_accuracy_percent,
            average_delay_seconds: report.average_delay_seconds,
            orders: report.orders.iter().map(SummaryLineView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthView {
    pub operating: bool,
    pub pending: usize,
    pub completed: usize,
}

impl From<CafeSnapshot> for HealthView {
    fn from(snapshot: CafeSnapshot) -> Self {
        Self {
            operating: snapshot.operating,
            pending: snapshot.pending,
            completed: snapshot.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};
    use serde_json::json;

    #[test]
    fn envelope_tags_status() {
        let ok: ApiResponse<Ack> = ApiResponse::Ok(Ack {});
        assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"status": "ok"}));

        let err: ApiResponse<Ack> = ApiResponse::from_queue_error(&QueueError::NotFound(OrderId(4)));
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"status": "error", "message": "Order not found"})
        );
    }

    #[test]
    fn timestamps_render_with_millis_and_offset() {
        let predicted = FixedOffset::east_opt(9 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 1, 12, 0, 5)
            .unwrap();
        let body: ApiResponse<Delayed> = ApiResponse::Ok(Delayed {
            new_predicted: predicted,
        });

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": "ok", "new_predicted": "2024-05-01T12:00:05.000+09:00"})
        );
    }
}
