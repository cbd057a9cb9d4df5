//! Wire format for the Halyard serial link protocol
//!
//! Halyard carries addressed, checksummed frames over point-to-point or
//! multi-drop serial links. This crate defines the frame layout, the two
//! checksum schemes used by different controller generations, and the
//! little-endian codec primitives for payload fields.
//!
//! # Frame layout
//!
//! ```text
//! ┌──────┬──────┬──────┬──────┬────────┬────────┬──────────┬──────────┐
//! │ HEAD │ SRC  │ DEST │ FUNC │ LEN_LO │ LEN_HI │ DATA     │ CHECKSUM │
//! │ 1B   │ 1B   │ 1B   │ 1B   │ 1B     │ 1B     │ 0–256B   │ 2B       │
//! └──────┴──────┴──────┴──────┴────────┴────────┴──────────┴──────────┘
//! ```
//!
//! The length field is little-endian. The checksum field covers every
//! preceding byte of the frame and depends on the configured mode:
//! `[sum][accumulate]` for the additive scheme, `[MSB][LSB]` for CRC-16.

#![no_std]
#![deny(unsafe_code)]

pub mod checksum;
pub mod codec;
pub mod frame;

pub use checksum::{Checksum, ChecksumMode};
pub use frame::{Frame, FrameError, FRAME_HEAD, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
