//! Frame receive/transmit engine for the Halyard serial link protocol
//!
//! This crate turns a raw serial byte stream into validated
//! [`halyard_protocol::Frame`]s and structured payloads back into bytes on
//! the wire. It creates no threads or tasks; two roles drive one
//! [`LinkHandler`]:
//!
//! - a **producer** (interrupt handler or I/O callback) feeds arriving bytes
//!   into the receive queue with [`LinkHandler::enqueue_byte`]
//! - a **consumer** (a poll/tick routine) drains the queue through the
//!   receive state machine with [`LinkHandler::poll`]
//!
//! Validated frames are delivered synchronously on the consumer's thread of
//! control through an injected callback. Transmission goes byte-by-byte
//! through an injected [`ByteSink`]. There is no retransmission,
//! acknowledgement, or flow control at this layer; reliability beyond
//! checksum detection belongs to whatever sits on top.

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod config;
pub mod handler;
pub mod ring;
pub mod sink;
pub mod stats;

pub use config::{LinkConfig, RX_BUFFER_SIZE};
pub use handler::{LinkHandler, SendError};
pub use ring::{BufferFull, RingBuffer};
pub use sink::ByteSink;
pub use stats::LinkStats;
