//! JSON line I/O for the CLI
//!
//! - Input: one JSON object per line
//! - Output: one JSON object per line
//! - UTF-8 only; a line that is not UTF-8 is a bad request, not a read failure

use std::io::{BufRead, Write};

use serde::Serialize;

use super::errors::{CliError, CliResult};

/// Iterator over non-blank input lines.
///
/// Yields `CliError::Io` when the reader fails and `CliError::BadRequest`
/// for a line that is not valid UTF-8; reading continues after the latter.
pub struct RequestLines<R> {
    reader: R,
    buf: Vec<u8>,
}

/// Non-blank input lines of `reader`
pub fn read_lines<R: BufRead>(reader: R) -> RequestLines<R> {
    RequestLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for RequestLines<R> {
    type Item = CliResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e.into())),
            }

            let mut bytes = self.buf.as_slice();
            if let Some(rest) = bytes.strip_suffix(b"\n") {
                bytes = rest;
            }
            if let Some(rest) = bytes.strip_suffix(b"\r") {
                bytes = rest;
            }

            match std::str::from_utf8(bytes) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => return Some(Ok(line.to_string())),
                Err(e) => {
                    return Some(Err(CliError::bad_request(format!(
                        "Request is not valid UTF-8: {}",
                        e
                    ))))
                }
            }
        }
    }
}

/// Write one value as a single JSON line
pub fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "{\"a\":1}\n\n   \r\n{\"b\":2}\r\n{\"c\":3}";
        let lines: Vec<_> = read_lines(input.as_bytes())
            .collect::<CliResult<_>>()
            .unwrap();
        assert_eq!(lines, vec!["{\"a\":1}", "{\"b\":2}", "{\"c\":3}"]);
    }

    #[test]
    fn test_invalid_utf8_line_does_not_stop_reading() {
        let input: &[u8] = b"first\n\xff\xfe\nsecond\n";
        let items: Vec<_> = read_lines(input).collect();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].as_ref().unwrap(), "first");
        assert!(matches!(items[1], Err(CliError::BadRequest(_))));
        assert_eq!(items[2].as_ref().unwrap(), "second");
    }

    #[test]
    fn test_write_json_line() {
        let mut out = Vec::new();
        write_json_line(&mut out, &json!({"status": "success"})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"status\":\"success\"}\n");
    }
}
