//! Line cursor shared by the log readers.

use std::io::{BufRead, ErrorKind, Lines};

use crate::error::{QuizError, Result};

/// Reads a log one line at a time, tracking the 1-based line number.
pub(crate) struct LineCursor<R: BufRead> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }

    /// Number of the line most recently returned
    pub(crate) fn line_no(&self) -> usize {
        self.line_no
    }

    /// Next line with any trailing carriage return removed, or None at EOF
    pub(crate) fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            Some(line) => {
                self.line_no += 1;
                let mut line = match line {
                    Ok(line) => line,
                    Err(e) if e.kind() == ErrorKind::InvalidData => {
                        return Err(QuizError::parse(self.line_no, "invalid UTF-8"));
                    }
                    Err(e) => return Err(e.into()),
                };
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    /// Next line that is not blank, or None at EOF
    pub(crate) fn next_record_start(&mut self) -> Result<Option<String>> {
        while let Some(line) = self.next_line()? {
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
        Ok(None)
    }

    /// Next line, failing if the log ends before it
    pub(crate) fn expect_line(&mut self, what: &str) -> Result<String> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(QuizError::parse(
                self.line_no + 1,
                format!("unexpected end of file, expected {}", what),
            )),
        }
    }

    /// Next line parsed as an unsigned integer
    pub(crate) fn expect_number(&mut self, what: &str) -> Result<u32> {
        let line = self.expect_line(what)?;
        parse_number(&line, self.line_no, what)
    }
}

/// Parse a trimmed unsigned integer, reporting `line_no` on failure
pub(crate) fn parse_number(value: &str, line_no: usize, what: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| QuizError::parse(line_no, format!("expected {}, found '{}'", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_line_numbers_and_crlf() {
        let mut cursor = LineCursor::new(Cursor::new("a\r\nb\n"));
        assert_eq!(cursor.next_line().unwrap().as_deref(), Some("a"));
        assert_eq!(cursor.line_no(), 1);
        assert_eq!(cursor.next_line().unwrap().as_deref(), Some("b"));
        assert_eq!(cursor.line_no(), 2);
        assert_eq!(cursor.next_line().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut cursor = LineCursor::new(Cursor::new(b"ok\nbad \xff\n".to_vec()));
        assert_eq!(cursor.next_line().unwrap().as_deref(), Some("ok"));
        let err = cursor.next_line().unwrap_err();
        assert!(matches!(err, QuizError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_skips_blank_lines_between_records() {
        let mut cursor = LineCursor::new(Cursor::new("\n  \nTF\n"));
        assert_eq!(cursor.next_record_start().unwrap().as_deref(), Some("TF"));
        assert_eq!(cursor.line_no(), 3);
    }

    #[test]
    fn test_expect_line_at_eof() {
        let mut cursor = LineCursor::new(Cursor::new("only\n"));
        cursor.next_line().unwrap();
        let err = cursor.expect_line("question text").unwrap_err();
        assert!(matches!(err, QuizError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_expect_number() {
        let mut cursor = LineCursor::new(Cursor::new(" 3 \nx\n"));
        assert_eq!(cursor.expect_number("index").unwrap(), 3);
        let err = cursor.expect_number("index").unwrap_err();
        assert!(matches!(err, QuizError::Parse { line: 2, .. }));
    }
}
