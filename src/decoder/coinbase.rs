// ============================================================================
// Coinbase Feed Decoder
// Translates raw full-channel feed messages into book commands
// ============================================================================

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use smallvec::smallvec;

use crate::domain::{BookCommand, Order, OrderMutation, OrderState, Side};
use crate::numeric::{NumericResult, Price, Size};

// ============================================================================
// Feed Schema
// ============================================================================

/// One message off the venue's full channel, parsed against a schema per
/// message type. Decimal fields arrive as strings and are parsed exactly;
/// nothing untyped survives past this boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedMessage {
    /// Order accepted by the venue; it is not yet on the book
    Received {
        order_id: String,
        price: Decimal,
        side: Side,
        size: Decimal,
        time: DateTime<Utc>,
    },

    /// Order is now resting on the book
    Open {
        order_id: String,
        remaining_size: Decimal,
        time: DateTime<Utc>,
    },

    /// Order left the book: filled, cancelled, or expired
    Done {
        order_id: String,
        reason: String,
        remaining_size: Decimal,
        time: DateTime<Utc>,
    },

    /// Two orders traded against each other
    Match {
        trade_id: i64,
        maker_order_id: String,
        taker_order_id: String,
        size: Decimal,
        time: DateTime<Utc>,
    },

    /// Order was modified in place
    Change {
        order_id: String,
        new_size: Decimal,
        time: DateTime<Utc>,
    },

    /// Venue-level error message
    Error { message: String },

    /// Any message type this decoder does not track (heartbeat, activate,
    /// ticker, ...)
    #[serde(other)]
    Other,
}

const REASON_FILLED: &str = "filled";
const REASON_CANCELLED: &str = "cancelled";

// ============================================================================
// Decoding
// ============================================================================

/// Decode one raw feed message into zero or more book commands.
///
/// Anything unparseable (malformed JSON, a decimal that does not fit the
/// minor-unit scale, a venue error message) produces zero commands; a
/// decode failure never propagates into book state.
pub fn decode(raw: &[u8]) -> Vec<BookCommand> {
    let message: FeedMessage = match serde_json::from_slice(raw) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(error = %err, "discarding undecodable feed message");
            return Vec::new();
        },
    };

    match commands_for(message) {
        Ok(commands) => commands,
        Err(err) => {
            tracing::warn!(error = %err, "discarding feed message with unconvertible units");
            Vec::new()
        },
    }
}

fn commands_for(message: FeedMessage) -> NumericResult<Vec<BookCommand>> {
    match message {
        FeedMessage::Received {
            order_id,
            price,
            side,
            size,
            time,
        } => Ok(vec![BookCommand::Placement {
            order: Order {
                id: order_id.into(),
                price: Price::from_decimal(price)?,
                side,
            },
            size: Size::from_decimal(size)?,
            event_time: time,
        }]),

        FeedMessage::Open {
            order_id,
            remaining_size,
            time,
        } => Ok(vec![BookCommand::Mutation {
            order_id: order_id.into(),
            mutations: smallvec![
                OrderMutation::size(Size::from_decimal(remaining_size)?, time),
                OrderMutation::state(OrderState::Open, time),
            ],
        }]),

        FeedMessage::Done {
            order_id,
            reason,
            remaining_size,
            time,
        } => {
            // Unknown reasons pass through raw; the book rejects them as
            // InvalidState while the size update in the same batch still
            // applies.
            let state = match reason.as_str() {
                REASON_FILLED => OrderState::Filled.as_str().to_string(),
                REASON_CANCELLED => OrderState::Void.as_str().to_string(),
                _ => reason,
            };
            Ok(vec![BookCommand::Mutation {
                order_id: order_id.into(),
                mutations: smallvec![
                    OrderMutation::size(Size::from_decimal(remaining_size)?, time),
                    OrderMutation::State {
                        state,
                        event_time: time,
                    },
                ],
            }])
        },

        FeedMessage::Match {
            trade_id,
            maker_order_id,
            taker_order_id,
            size,
            time,
        } => {
            let matched = Size::from_decimal(size)?;
            Ok(vec![
                BookCommand::Mutation {
                    order_id: taker_order_id.into(),
                    mutations: smallvec![OrderMutation::Match {
                        trade_id,
                        size: matched,
                        was_maker: false,
                        counterpart: Some(maker_order_id.clone().into()),
                        event_time: time,
                    }],
                },
                BookCommand::Mutation {
                    order_id: maker_order_id.into(),
                    mutations: smallvec![OrderMutation::Match {
                        trade_id,
                        size: matched,
                        was_maker: true,
                        counterpart: None,
                        event_time: time,
                    }],
                },
            ])
        },

        FeedMessage::Change {
            order_id,
            new_size,
            time,
        } => Ok(vec![BookCommand::Mutation {
            order_id: order_id.into(),
            mutations: smallvec![OrderMutation::size(Size::from_decimal(new_size)?, time)],
        }]),

        FeedMessage::Error { message } => {
            tracing::warn!(message = %message, "received venue error");
            Ok(Vec::new())
        },

        FeedMessage::Other => Ok(Vec::new()),
    }
}
