//! Hex dump formatting for inspecting encoded streams.

use core::fmt::Write as _;

/// Renders `data` as a sixteen-bytes-per-row hex view with an offset column
/// and an ASCII pane, one row per line.
#[must_use]
pub fn format(data: &[u8]) -> String {
  let mut out = String::new();
  for (row, chunk) in data.chunks(16).enumerate() {
    let _ = write!(out, "{:04X}: ", row * 16);
    for column in 0..16 {
      if column == 8 {
        out.push(' ');
      }
      match chunk.get(column) {
        Some(byte) => {
          let _ = write!(out, "{byte:02X} ");
        },
        None => out.push_str("   "),
      }
    }
    out.push(' ');
    for byte in chunk {
      let printable = byte.is_ascii_graphic() || *byte == b' ';
      out.push(if printable { char::from(*byte) } else { '.' });
    }
    out.push('\n');
  }
  out
}
