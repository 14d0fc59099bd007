use std::io::{self, BufRead};

/// Buffered line source for piped input. Hands out complete lines with
/// the trailing `\n` (and `\r` for CRLF input) stripped; the highlighter
/// pipeline only ever sees whole lines.
pub struct LineStream<R> {
    reader: R,
    line_buffer: String,
}

impl<R: BufRead> LineStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::new(),
        }
    }

    /// Reads the next complete line. Returns `Ok(None)` at end of stream.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.line_buffer.clear();

        match self.reader.read_line(&mut self.line_buffer)? {
            0 => Ok(None),
            _ => {
                if self.line_buffer.ends_with('\n') {
                    self.line_buffer.pop();
                    if self.line_buffer.ends_with('\r') {
                        self.line_buffer.pop();
                    }
                }
                Ok(Some(self.line_buffer.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_splits_lines() -> io::Result<()> {
        let mut stream = LineStream::new(Cursor::new("first\nsecond\nthird\n"));
        assert_eq!(stream.next_line()?, Some("first".to_string()));
        assert_eq!(stream.next_line()?, Some("second".to_string()));
        assert_eq!(stream.next_line()?, Some("third".to_string()));
        assert_eq!(stream.next_line()?, None);
        Ok(())
    }

    #[test]
    fn test_strips_crlf() -> io::Result<()> {
        let mut stream = LineStream::new(Cursor::new("windows\r\nline\r\n"));
        assert_eq!(stream.next_line()?, Some("windows".to_string()));
        assert_eq!(stream.next_line()?, Some("line".to_string()));
        Ok(())
    }

    #[test]
    fn test_final_line_without_newline() -> io::Result<()> {
        let mut stream = LineStream::new(Cursor::new("no terminator"));
        assert_eq!(stream.next_line()?, Some("no terminator".to_string()));
        assert_eq!(stream.next_line()?, None);
        Ok(())
    }

    #[test]
    fn test_empty_input() -> io::Result<()> {
        let mut stream = LineStream::new(Cursor::new(""));
        assert_eq!(stream.next_line()?, None);
        Ok(())
    }

    #[test]
    fn test_preserves_empty_lines() -> io::Result<()> {
        let mut stream = LineStream::new(Cursor::new("a\n\nb\n"));
        assert_eq!(stream.next_line()?, Some("a".to_string()));
        assert_eq!(stream.next_line()?, Some("".to_string()));
        assert_eq!(stream.next_line()?, Some("b".to_string()));
        Ok(())
    }
}
