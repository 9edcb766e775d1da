//! Byte cursor over tag payloads.

use byteorder::{ByteOrder, LittleEndian};
use glam::Affine2;

use super::format::TagHeader;
use crate::util::{Error, Result};

/// Forward-only cursor over an in-memory byte buffer with a tag boundary.
///
/// Primitive reads are little-endian and bounded by the underlying buffer;
/// running out of bytes yields [`Error::UnexpectedEndOfStream`]. The tag
/// boundary itself is advisory: payload decoders compare [`position`] with
/// [`tag_end_position`] to detect records crossing it.
///
/// [`position`]: TagStream::position
/// [`tag_end_position`]: TagStream::tag_end_position
pub struct TagStream<'a> {
    buf: &'a [u8],
    pos: usize,
    tag_end: usize,
}

impl<'a> TagStream<'a> {
    /// Create a stream over a buffer. The tag boundary starts at the buffer
    /// end; [`open_tag`](TagStream::open_tag) narrows it.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            tag_end: buf.len(),
        }
    }

    /// Current cursor position in bytes from the buffer start.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Declared end position of the current tag's payload.
    #[inline]
    pub fn tag_end_position(&self) -> usize {
        self.tag_end
    }

    /// Bytes remaining until the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the cursor reached (or passed) the current tag boundary.
    #[inline]
    pub fn is_at_tag_end(&self) -> bool {
        self.pos >= self.tag_end
    }

    /// Take the next `len` bytes as a slice and advance.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        if self.remaining() < len {
            return Err(Error::eof(self.pos, len));
        }
        let slice = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Read a little-endian u16.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(LittleEndian::read_u16(self.read_bytes(2)?))
    }

    /// Read a little-endian u32.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(LittleEndian::read_u32(self.read_bytes(4)?))
    }

    /// Read a little-endian i32.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(LittleEndian::read_i32(self.read_bytes(4)?))
    }

    /// Read a little-endian f32.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(LittleEndian::read_f32(self.read_bytes(4)?))
    }

    /// Read a 2D affine transform: six f32 in (a, b, c, d, tx, ty) order.
    ///
    /// (a, b) and (c, d) are the matrix columns, (tx, ty) the translation.
    pub fn read_affine(&mut self) -> Result<Affine2> {
        let mut m = [0f32; 6];
        for v in &mut m {
            *v = self.read_f32()?;
        }
        Ok(Affine2::from_cols_array(&m))
    }

    /// Read a tag header and pin the tag boundary to its payload end.
    ///
    /// A declared payload length that overruns the buffer is rejected as
    /// [`Error::MalformedStream`] before any payload byte is consumed.
    pub fn open_tag(&mut self) -> Result<TagHeader> {
        let kind = self.read_u16()?;
        let size = self.read_u32()?;
        let header = TagHeader { kind, size };

        let end = header.end_position(self.pos);
        if end > self.buf.len() {
            return Err(Error::malformed(format!(
                "tag {} declares a {}-byte payload but only {} bytes remain",
                kind,
                size,
                self.remaining()
            )));
        }
        self.tag_end = end;
        Ok(header)
    }

    /// Advance the cursor to the current tag boundary.
    pub fn skip_to_tag_end(&mut self) {
        if self.pos < self.tag_end {
            self.pos = self.tag_end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_reads() {
        let buf = [
            0x2A, // u8
            0x01, 0x02, // u16
            0xFF, 0xFF, 0xFF, 0xFF, // i32 = -1
            0x00, 0x00, 0x80, 0x3F, // f32 = 1.0
        ];
        let mut stream = TagStream::new(&buf);

        assert_eq!(stream.read_u8().unwrap(), 0x2A);
        assert_eq!(stream.read_u16().unwrap(), 0x0201);
        assert_eq!(stream.read_i32().unwrap(), -1);
        assert_eq!(stream.read_f32().unwrap(), 1.0);
        assert_eq!(stream.position(), buf.len());
        assert_eq!(stream.remaining(), 0);
    }

    #[test]
    fn test_eof_reports_position_and_size() {
        let buf = [0x01, 0x02];
        let mut stream = TagStream::new(&buf);
        stream.read_u8().unwrap();

        match stream.read_u32() {
            Err(Error::UnexpectedEndOfStream { position, needed }) => {
                assert_eq!(position, 1);
                assert_eq!(needed, 4);
            }
            other => panic!("expected end-of-stream error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_affine() {
        let mut buf = Vec::new();
        for v in [1.0f32, 0.0, 0.0, 1.0, 10.0, -3.0] {
            buf.extend_from_slice(&v.to_le_bytes());
        }
        let mut stream = TagStream::new(&buf);

        let t = stream.read_affine().unwrap();
        assert_eq!(t.translation, glam::Vec2::new(10.0, -3.0));
        assert_eq!(t.matrix2, glam::Mat2::IDENTITY);
    }

    #[test]
    fn test_open_tag_pins_boundary() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&4u16.to_le_bytes()); // kind
        buf.extend_from_slice(&3u32.to_le_bytes()); // payload size
        buf.extend_from_slice(&[0xAA, 0xBB, 0xCC]); // payload
        buf.extend_from_slice(&[0xEE; 4]); // next tag's bytes

        let mut stream = TagStream::new(&buf);
        let header = stream.open_tag().unwrap();
        assert_eq!(header.kind, 4);
        assert_eq!(header.size, 3);
        assert_eq!(stream.tag_end_position(), 9);
        assert!(!stream.is_at_tag_end());

        stream.skip_to_tag_end();
        assert_eq!(stream.position(), 9);
        assert!(stream.is_at_tag_end());
    }

    #[test]
    fn test_open_tag_rejects_oversized_payload() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&4u16.to_le_bytes());
        buf.extend_from_slice(&100u32.to_le_bytes()); // only 2 bytes follow
        buf.extend_from_slice(&[0x00, 0x00]);

        let mut stream = TagStream::new(&buf);
        assert!(matches!(
            stream.open_tag(),
            Err(Error::MalformedStream(_))
        ));
    }
}
