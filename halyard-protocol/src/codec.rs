//! Little-endian codec primitives for payload fields.
//!
//! All multi-byte payload fields on the link are little-endian. The pack and
//! unpack functions are pure and bit-exact; floats travel as their raw
//! IEEE-754 bit pattern, so NaN payloads and negative zero survive a round
//! trip unchanged.
//!
//! [`PayloadWriter`] and [`PayloadReader`] layer bounds-checked cursors on
//! top for multi-field payloads, so callers never do offset arithmetic by
//! hand.

/// Pack a 16-bit unsigned integer.
pub fn pack_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Unpack a 16-bit unsigned integer.
pub fn unpack_u16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Pack a 16-bit signed integer.
pub fn pack_i16(value: i16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Unpack a 16-bit signed integer.
pub fn unpack_i16(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Pack a 32-bit unsigned integer.
pub fn pack_u32(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Unpack a 32-bit unsigned integer.
pub fn unpack_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Pack a 32-bit signed integer.
pub fn pack_i32(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Unpack a 32-bit signed integer.
pub fn unpack_i32(bytes: [u8; 4]) -> i32 {
    i32::from_le_bytes(bytes)
}

/// Pack a 32-bit float as its raw bit pattern.
pub fn pack_f32(value: f32) -> [u8; 4] {
    value.to_bits().to_le_bytes()
}

/// Unpack a 32-bit float from its raw bit pattern.
pub fn unpack_f32(bytes: [u8; 4]) -> f32 {
    f32::from_bits(u32::from_le_bytes(bytes))
}

/// Errors from the payload cursors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CodecError {
    /// Read past the end of the payload
    UnexpectedEnd,
    /// Write past the end of the buffer
    Overflow,
}

/// Bounds-checked incremental payload builder.
pub struct PayloadWriter<'a> {
    buffer: &'a mut [u8],
    pos: usize,
}

impl<'a> PayloadWriter<'a> {
    /// Start writing at the beginning of `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self { buffer, pos: 0 }
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.pos
    }

    /// `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Append raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let end = self.pos.checked_add(bytes.len()).ok_or(CodecError::Overflow)?;
        if end > self.buffer.len() {
            return Err(CodecError::Overflow);
        }
        self.buffer[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<(), CodecError> {
        self.write_bytes(&[value])
    }

    /// Append a little-endian u16.
    pub fn write_u16(&mut self, value: u16) -> Result<(), CodecError> {
        self.write_bytes(&pack_u16(value))
    }

    /// Append a little-endian i16.
    pub fn write_i16(&mut self, value: i16) -> Result<(), CodecError> {
        self.write_bytes(&pack_i16(value))
    }

    /// Append a little-endian u32.
    pub fn write_u32(&mut self, value: u32) -> Result<(), CodecError> {
        self.write_bytes(&pack_u32(value))
    }

    /// Append a little-endian i32.
    pub fn write_i32(&mut self, value: i32) -> Result<(), CodecError> {
        self.write_bytes(&pack_i32(value))
    }

    /// Append a float as its raw bit pattern.
    pub fn write_f32(&mut self, value: f32) -> Result<(), CodecError> {
        self.write_bytes(&pack_f32(value))
    }

    /// Finish writing and return the filled prefix of the buffer.
    pub fn finish(self) -> &'a [u8] {
        &self.buffer[..self.pos]
    }
}

/// Bounds-checked payload field reader.
pub struct PayloadReader<'a> {
    buffer: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    /// Start reading at the beginning of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, pos: 0 }
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.pos
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let end = self.pos.checked_add(N).ok_or(CodecError::UnexpectedEnd)?;
        if end > self.buffer.len() {
            return Err(CodecError::UnexpectedEnd);
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&self.buffer[self.pos..end]);
        self.pos = end;
        Ok(out)
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16, CodecError> {
        Ok(unpack_u16(self.read_array()?))
    }

    /// Read a little-endian i16.
    pub fn read_i16(&mut self) -> Result<i16, CodecError> {
        Ok(unpack_i16(self.read_array()?))
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32, CodecError> {
        Ok(unpack_u32(self.read_array()?))
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32, CodecError> {
        Ok(unpack_i32(self.read_array()?))
    }

    /// Read a float from its raw bit pattern.
    pub fn read_f32(&mut self) -> Result<f32, CodecError> {
        Ok(unpack_f32(self.read_array()?))
    }

    /// Read a raw byte run of the given length.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let end = self.pos.checked_add(len).ok_or(CodecError::UnexpectedEnd)?;
        if end > self.buffer.len() {
            return Err(CodecError::UnexpectedEnd);
        }
        let slice = &self.buffer[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}
