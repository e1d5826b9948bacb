/*!
A little-endian byte buffer codec.

Two halves: [`ByteWriter`] appends fixed-width integers to a growing
buffer, [`ByteReader`] extracts them from a borrowed slice while tracking
a moving read cursor. Neither does any framing or alignment padding —
the caller decides the layout, as in [`crate::graph::codec`].
*/

use crate::error::{DawgError, Result};

#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
  buf: Vec<u8>,
}

impl ByteWriter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn write_u8(&mut self, value: u8) {
    self.buf.push(value);
  }

  pub fn write_u32(&mut self, value: u32) {
    self.buf.extend_from_slice(&value.to_le_bytes());
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.buf
  }
}

#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
  buf: &'a [u8],
  pos: usize,
}

impl<'a> ByteReader<'a> {
  pub fn new(buf: &'a [u8]) -> Self {
    Self { buf, pos: 0 }
  }

  pub fn read_u8(&mut self) -> Result<u8> {
    let byte = *self
      .buf
      .get(self.pos)
      .ok_or_else(|| DawgError::Decode("unexpected end of buffer reading u8".into()))?;
    self.pos += 1;
    Ok(byte)
  }

  pub fn read_u32(&mut self) -> Result<u32> {
    let end = self.pos + 4;
    let slice = self
      .buf
      .get(self.pos..end)
      .ok_or_else(|| DawgError::Decode("unexpected end of buffer reading u32".into()))?;
    self.pos = end;
    Ok(u32::from_le_bytes(slice.try_into().unwrap()))
  }

  pub fn remaining(&self) -> usize {
    self.buf.len() - self.pos
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn round_trip_u8_u32() {
    let mut w = ByteWriter::new();
    w.write_u8(7);
    w.write_u32(0xdead_beef);
    let bytes = w.into_bytes();

    let mut r = ByteReader::new(&bytes);
    assert_eq!(r.read_u8().unwrap(), 7);
    assert_eq!(r.read_u32().unwrap(), 0xdead_beef);
  }

  #[test]
  fn little_endian_layout() {
    let mut w = ByteWriter::new();
    w.write_u32(1);
    assert_eq!(w.into_bytes(), vec![1, 0, 0, 0]);
  }

  #[test]
  fn read_past_end_is_decode_error() {
    let bytes = [0u8; 2];
    let mut r = ByteReader::new(&bytes);
    assert!(r.read_u32().is_err());
  }

  #[test]
  fn reads_consume_cursor_in_order() {
    let mut w = ByteWriter::new();
    w.write_u8(1);
    w.write_u8(2);
    let bytes = w.into_bytes();
    let mut r = ByteReader::new(&bytes);
    assert_eq!(r.read_u8().unwrap(), 1);
    assert_eq!(r.remaining(), 1);
    assert_eq!(r.read_u8().unwrap(), 2);
    assert_eq!(r.remaining(), 0);
  }
}
