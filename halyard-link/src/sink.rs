//! Byte sink abstraction for the transmit path.

use crate::ring::BufferFull;

/// Single-byte transmit capability.
///
/// The sink is injected at handler construction and only used during
/// transmit. It may block; any timeout policy belongs to the implementation.
/// A failure aborts the remainder of the frame; bytes already written stay
/// on the wire.
pub trait ByteSink {
    /// Error reported when a byte cannot be written
    type Error;

    /// Write one byte to the physical medium.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        (**self).write_byte(byte)
    }
}

/// Collects bytes into a bounded buffer, for loopback tests and for staging
/// a frame before handing it to a block-oriented transport.
impl<const N: usize> ByteSink for heapless::Vec<u8, N> {
    type Error = BufferFull;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte).map_err(|_| BufferFull)
    }
}

#[cfg(feature = "std")]
impl ByteSink for std::vec::Vec<u8> {
    type Error = core::convert::Infallible;

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.push(byte);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heapless_vec_collects_and_fills() {
        let mut sink: heapless::Vec<u8, 2> = heapless::Vec::new();
        sink.write_byte(0x01).unwrap();
        sink.write_byte(0x02).unwrap();
        assert_eq!(sink.write_byte(0x03), Err(BufferFull));
        assert_eq!(sink.as_slice(), &[0x01, 0x02]);
    }

    #[test]
    fn mut_ref_forwards() {
        let mut sink: heapless::Vec<u8, 4> = heapless::Vec::new();
        {
            let mut fwd = &mut sink;
            fwd.write_byte(0xAA).unwrap();
        }
        assert_eq!(sink.as_slice(), &[0xAA]);
    }
}
