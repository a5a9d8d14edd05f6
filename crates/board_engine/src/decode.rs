use serde_json::Value;
use thiserror::Error;

use crate::TicketRecord;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unexpected payload shape: expected a ticket array or an object with a `tickets` or `data` array")]
    UnrecognizedShape,
}

/// Normalizes the three accepted payload shapes into one ticket list.
///
/// Accepted: a bare array of ticket objects, or an object carrying the array
/// under `tickets` or `data`. Individual tickets are read leniently; only the
/// top-level shape is validated.
pub fn decode_payload(bytes: &[u8]) -> Result<Vec<TicketRecord>, DecodeError> {
    let payload: Value = serde_json::from_slice(bytes)?;
    let rows = ticket_rows(&payload).ok_or(DecodeError::UnrecognizedShape)?;
    Ok(rows.iter().map(record_from_value).collect())
}

fn ticket_rows(payload: &Value) -> Option<&[Value]> {
    if let Value::Array(rows) = payload {
        return Some(rows);
    }
    for key in ["tickets", "data"] {
        if let Some(Value::Array(rows)) = payload.get(key) {
            return Some(rows);
        }
    }
    None
}

fn record_from_value(row: &Value) -> TicketRecord {
    TicketRecord {
        id: string_field(row, "id"),
        title: string_field(row, "title"),
        status: string_field(row, "status"),
        user: string_field(row, "user"),
        priority: row.get("priority").and_then(Value::as_i64),
    }
}

/// Strings pass through; numeric values (ids in particular arrive as either)
/// are canonicalized to their decimal form.
fn string_field(row: &Value, key: &str) -> Option<String> {
    match row.get(key) {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}
