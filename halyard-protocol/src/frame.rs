//! Frame layout and encoding.
//!
//! Frame format:
//! - HEAD (1 byte): 0xAB synchronization marker
//! - SRC (1 byte): source address
//! - DEST (1 byte): destination address
//! - FUNC (1 byte): function id
//! - LEN (2 bytes, little-endian): payload length (0-256)
//! - DATA (LEN bytes): payload
//! - CHECKSUM (2 bytes): mode-dependent, over all preceding bytes

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::checksum::{Checksum, ChecksumMode};

/// Frame synchronization marker
pub const FRAME_HEAD: u8 = 0xAB;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 256;

/// Frame header size (HEAD + SRC + DEST + FUNC + LEN)
pub const HEADER_SIZE: usize = 6;

/// Checksum field size
pub const CHECKSUM_SIZE: usize = 2;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = HEADER_SIZE + MAX_PAYLOAD_SIZE + CHECKSUM_SIZE;

/// Default address of a controller on the link
pub const DEVICE_ADDRESS: u8 = 0x01;

/// Default address of the host
pub const HOST_ADDRESS: u8 = 0x02;

/// Errors that can occur during frame construction or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A received or constructed frame
///
/// The payload storage is inline; a `Frame` can be reused across receptions
/// without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Synchronization marker this frame was received or built with
    pub head: u8,
    /// Source address
    pub source: u8,
    /// Destination address
    pub dest: u8,
    /// Function id
    pub func_id: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Create a frame with the default synchronization marker.
    pub fn new(source: u8, dest: u8, func_id: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| FrameError::PayloadTooLarge)?;

        Ok(Self {
            head: FRAME_HEAD,
            source,
            dest,
            func_id,
            payload: payload_vec,
        })
    }

    /// Total encoded size of this frame, checksum field included.
    pub fn encoded_size(&self) -> usize {
        HEADER_SIZE + self.payload.len() + CHECKSUM_SIZE
    }

    /// Encode this frame into a byte buffer, appending the checksum for the
    /// given mode.
    ///
    /// Returns the number of bytes written.
    pub fn encode(&self, mode: ChecksumMode, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let total = self.encoded_size();
        if buffer.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        buffer[0] = self.head;
        buffer[1] = self.source;
        buffer[2] = self.dest;
        buffer[3] = self.func_id;
        let len = self.payload.len() as u16;
        buffer[4..HEADER_SIZE].copy_from_slice(&len.to_le_bytes());
        buffer[HEADER_SIZE..HEADER_SIZE + self.payload.len()].copy_from_slice(&self.payload);

        let checksum = Checksum::digest(mode, &buffer[..total - CHECKSUM_SIZE]);
        buffer[total - CHECKSUM_SIZE..total].copy_from_slice(&checksum);

        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_additive_golden() {
        let frame = Frame::new(0x01, 0x02, 0x10, &[0x01, 0x02, 0x03]).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(ChecksumMode::Additive, &mut buffer).unwrap();

        assert_eq!(
            &buffer[..len],
            &[0xAB, 0x01, 0x02, 0x10, 0x03, 0x00, 0x01, 0x02, 0x03, 0xC7, 0x92]
        );
    }

    #[test]
    fn encode_crc_golden() {
        let frame = Frame::new(0x01, 0x02, 0x10, &[0x01, 0x02, 0x03]).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(ChecksumMode::Crc16, &mut buffer).unwrap();

        assert_eq!(
            &buffer[..len],
            &[0xAB, 0x01, 0x02, 0x10, 0x03, 0x00, 0x01, 0x02, 0x03, 0x41, 0xE4]
        );
    }

    #[test]
    fn encode_empty_payload() {
        let frame = Frame::new(0x01, 0x02, 0x10, &[]).unwrap();
        let mut buffer = [0u8; 16];
        let len = frame.encode(ChecksumMode::Crc16, &mut buffer).unwrap();

        assert_eq!(len, HEADER_SIZE + CHECKSUM_SIZE);
        assert_eq!(&buffer[..len], &[0xAB, 0x01, 0x02, 0x10, 0x00, 0x00, 0x94, 0x89]);
    }

    #[test]
    fn payload_too_large() {
        let oversized = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(
            Frame::new(0x01, 0x02, 0x10, &oversized),
            Err(FrameError::PayloadTooLarge)
        );
    }

    #[test]
    fn max_payload_accepted() {
        let payload = [0x5A; MAX_PAYLOAD_SIZE];
        let frame = Frame::new(0x01, 0x02, 0x10, &payload).unwrap();
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(ChecksumMode::Additive, &mut buffer).unwrap();

        assert_eq!(len, MAX_FRAME_SIZE);
        // 256 encodes as 0x0100 little-endian
        assert_eq!(buffer[4], 0x00);
        assert_eq!(buffer[5], 0x01);
    }

    #[test]
    fn encode_buffer_too_small() {
        let frame = Frame::new(0x01, 0x02, 0x10, &[0x01, 0x02, 0x03]).unwrap();
        let mut buffer = [0u8; 8];
        assert_eq!(
            frame.encode(ChecksumMode::Additive, &mut buffer),
            Err(FrameError::BufferTooSmall)
        );
    }
}
