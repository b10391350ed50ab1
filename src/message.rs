//! Backend socket events: decoding and dispatch.
//!
//! The host page owns the socket. It hands each received event to [`decode`]
//! as `(event_name, json_payload)` and routes the result through [`dispatch`]
//! into a [`MessageHandler`], so the update contract can be exercised without
//! any transport.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use serde::Deserialize;

use crate::engine::MessageHandler;

/// Periodic navigation update with origin-relative offsets.
pub const GPS_UPDATE_EVENT: &str = "gps_update";
/// The backend moved its reference position to the current fix.
pub const REFERENCE_RESET_EVENT: &str = "reference_reset";
/// Greeting sent by the backend right after a client connects.
pub const CONNECTION_RESPONSE_EVENT: &str = "connection_response";
/// Transport-level connection established.
pub const CONNECT_EVENT: &str = "connect";
/// Transport-level connection lost.
pub const DISCONNECT_EVENT: &str = "disconnect";
/// Outbound request asking the backend to re-anchor its reference position.
pub const RESET_REFERENCE_EVENT: &str = "reset_reference";

#[derive(Debug, thiserror::Error)]
pub enum MessageError {
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Subset of the backend's position/velocity/time block kept for status display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FixSummary {
    pub latitude: f64,
    pub longitude: f64,
    pub fix_status: String,
    pub visible_satellites: u32,
}

impl FixSummary {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.fix_status == "Active"
    }
}

/// Payload of a `gps_update` event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GpsUpdate {
    pub pvt: FixSummary,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default)]
    pub has_reference: bool,
}

#[derive(Debug, Deserialize)]
struct ConnectionResponse {
    #[serde(default)]
    status: String,
}

/// A decoded backend event.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    GpsUpdate(GpsUpdate),
    ReferenceReset,
    Connection(bool),
}

/// Decode one socket event.
///
/// Payloads of `reference_reset`, `connect` and `disconnect` are ignored.
///
/// # Errors
///
/// [`MessageError::UnknownEvent`] for event names this renderer does not
/// consume and [`MessageError::Json`] when a payload does not match its shape.
pub fn decode(event: &str, payload: &str) -> Result<Message, MessageError> {
    match event {
        GPS_UPDATE_EVENT => Ok(Message::GpsUpdate(serde_json::from_str(payload)?)),
        REFERENCE_RESET_EVENT => Ok(Message::ReferenceReset),
        CONNECTION_RESPONSE_EVENT => {
            let response: ConnectionResponse = serde_json::from_str(payload)?;
            Ok(Message::Connection(response.status == "connected"))
        }
        CONNECT_EVENT => Ok(Message::Connection(true)),
        DISCONNECT_EVENT => Ok(Message::Connection(false)),
        other => Err(MessageError::UnknownEvent(other.to_owned())),
    }
}

/// Route a decoded message to the handler.
///
/// A `gps_update` always refreshes the fix summary but only moves the
/// position once the backend reports a reference.
pub fn dispatch<H: MessageHandler + ?Sized>(handler: &mut H, message: &Message) {
    match message {
        Message::GpsUpdate(update) => {
            handler.on_fix(&update.pvt);
            if update.has_reference {
                handler.on_position_update(update.offset_x, update.offset_y);
            }
        }
        Message::ReferenceReset => handler.on_origin_reset(),
        Message::Connection(connected) => handler.on_connection_change(*connected),
    }
}
