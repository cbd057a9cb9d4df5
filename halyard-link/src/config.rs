//! Link configuration.

use halyard_protocol::checksum::ChecksumMode;
use halyard_protocol::frame::{DEVICE_ADDRESS, FRAME_HEAD, HOST_ADDRESS, MAX_FRAME_SIZE};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Receive queue capacity: room for two maximum-size frames, absorbing the
/// gap between byte-arrival bursts and poll cadence.
pub const RX_BUFFER_SIZE: usize = MAX_FRAME_SIZE * 2;

/// Fixed per-handler configuration.
///
/// All fields are set once at construction. The checksum mode in particular
/// cannot change for the lifetime of a handler; both ends of a link must be
/// built with the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkConfig {
    /// Head marker that starts every frame
    pub head: u8,
    /// Source address written into transmitted frames
    pub source_addr: u8,
    /// Active checksum scheme
    pub checksum: ChecksumMode,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::device(ChecksumMode::Additive)
    }
}

impl LinkConfig {
    /// Configuration for a controller end of the link.
    pub fn device(checksum: ChecksumMode) -> Self {
        Self {
            head: FRAME_HEAD,
            source_addr: DEVICE_ADDRESS,
            checksum,
        }
    }

    /// Configuration for the host end of the link.
    pub fn host(checksum: ChecksumMode) -> Self {
        Self {
            head: FRAME_HEAD,
            source_addr: HOST_ADDRESS,
            checksum,
        }
    }
}
