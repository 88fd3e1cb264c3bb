//! Primitive read/write helpers for the big-endian wire encoding.

use std::io::{ErrorKind, Read, Write};

use super::error::CodecError;

pub(crate) fn write_u16(out: &mut dyn Write, value: u16) -> Result<(), CodecError> {
  out.write_all(&value.to_be_bytes())?;
  Ok(())
}

pub(crate) fn write_i32(out: &mut dyn Write, value: i32) -> Result<(), CodecError> {
  out.write_all(&value.to_be_bytes())?;
  Ok(())
}

pub(crate) fn write_i64(out: &mut dyn Write, value: i64) -> Result<(), CodecError> {
  out.write_all(&value.to_be_bytes())?;
  Ok(())
}

pub(crate) fn write_f32(out: &mut dyn Write, value: f32) -> Result<(), CodecError> {
  out.write_all(&value.to_be_bytes())?;
  Ok(())
}

pub(crate) fn write_f64(out: &mut dyn Write, value: f64) -> Result<(), CodecError> {
  out.write_all(&value.to_be_bytes())?;
  Ok(())
}

/// Writes a string as a 16-bit byte length followed by UTF-8 bytes.
pub(crate) fn write_string(out: &mut dyn Write, value: &str) -> Result<(), CodecError> {
  let bytes = value.as_bytes();
  let len = u16::try_from(bytes.len()).map_err(|_| CodecError::StringTooLong(bytes.len()))?;
  write_u16(out, len)?;
  out.write_all(bytes)?;
  Ok(())
}

/// Fills the buffer, reporting a truncated record as a corrupt stream.
pub(crate) fn read_exact(input: &mut dyn Read, buf: &mut [u8]) -> Result<(), CodecError> {
  input.read_exact(buf).map_err(|error| {
    if error.kind() == ErrorKind::UnexpectedEof {
      CodecError::CorruptStream("unexpected end of stream".into())
    } else {
      CodecError::Io(error)
    }
  })
}

pub(crate) fn read_u16(input: &mut dyn Read) -> Result<u16, CodecError> {
  let mut buf = [0_u8; 2];
  read_exact(input, &mut buf)?;
  Ok(u16::from_be_bytes(buf))
}

pub(crate) fn read_i32(input: &mut dyn Read) -> Result<i32, CodecError> {
  let mut buf = [0_u8; 4];
  read_exact(input, &mut buf)?;
  Ok(i32::from_be_bytes(buf))
}

pub(crate) fn read_i64(input: &mut dyn Read) -> Result<i64, CodecError> {
  let mut buf = [0_u8; 8];
  read_exact(input, &mut buf)?;
  Ok(i64::from_be_bytes(buf))
}

pub(crate) fn read_f32(input: &mut dyn Read) -> Result<f32, CodecError> {
  let mut buf = [0_u8; 4];
  read_exact(input, &mut buf)?;
  Ok(f32::from_be_bytes(buf))
}

pub(crate) fn read_f64(input: &mut dyn Read) -> Result<f64, CodecError> {
  let mut buf = [0_u8; 8];
  read_exact(input, &mut buf)?;
  Ok(f64::from_be_bytes(buf))
}

/// Reads a length-prefixed UTF-8 string.
pub(crate) fn read_string(input: &mut dyn Read) -> Result<String, CodecError> {
  let len = read_u16(input)?;
  let mut buf = vec![0_u8; usize::from(len)];
  read_exact(input, &mut buf)?;
  String::from_utf8(buf).map_err(|_| CodecError::CorruptStream("invalid utf-8 in string".into()))
}
