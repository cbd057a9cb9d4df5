//! Link statistics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters for link activity and discard causes.
///
/// Checksum mismatches and oversized length fields are expected, non-fatal
/// conditions on a noisy link; frames are discarded silently and these
/// counters are the only trace. All counters wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkStats {
    /// Frames that validated and were delivered to the callback
    pub frames_received: u32,
    /// Frames fully written to the sink
    pub frames_sent: u32,
    /// Completed frames discarded for a checksum mismatch
    pub checksum_errors: u32,
    /// Receptions aborted for a length field beyond the payload bound
    pub oversized_frames: u32,
    /// Bytes rejected because the receive queue was full
    pub queue_overruns: u32,
}

impl LinkStats {
    /// Zero all counters.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
