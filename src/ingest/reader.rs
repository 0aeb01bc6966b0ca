//! Byte-level row tokenizer for the semicolon-delimited source files
//!
//! Yields typed fields: integers (optional leading `-`), decimals
//! (optional fraction after `.`) and double-quoted strings where `""`
//! escapes an embedded quote. Any structural surprise is a [`ParseError`]
//! that aborts the whole load; there is no per-row recovery.

use thiserror::Error;

/// Errors raised on malformed row structure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected end of input at byte {0}")]
    UnexpectedEof(usize),

    #[error("expected {expected:?} at byte {pos}, found {found:?}")]
    Unexpected { expected: char, found: char, pos: usize },

    #[error("malformed number at byte {0}")]
    InvalidNumber(usize),

    #[error("unterminated quoted string starting at byte {0}")]
    UnterminatedString(usize),
}

/// Cursor over one source file's bytes
pub struct RowReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> RowReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Advance past the next newline, or to end of input.
    pub fn skip_line(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            self.pos += 1;
            if b == b'\n' {
                break;
            }
        }
    }

    /// Consume exactly the given delimiter byte.
    pub fn expect(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.bytes.get(self.pos) {
            Some(&b) if b == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(&b) => Err(ParseError::Unexpected {
                expected: expected as char,
                found: b as char,
                pos: self.pos,
            }),
            None => Err(ParseError::UnexpectedEof(self.pos)),
        }
    }

    /// Read a plain decimal integer.
    pub fn read_int(&mut self) -> Result<i64, ParseError> {
        let start = self.pos;
        if self.bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(ParseError::InvalidNumber(start));
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| ParseError::InvalidNumber(start))?;
        text.parse().map_err(|_| ParseError::InvalidNumber(start))
    }

    /// Read a plain decimal number with an optional fractional part.
    pub fn read_float(&mut self) -> Result<f64, ParseError> {
        let start = self.pos;
        if self.bytes.get(self.pos) == Some(&b'-') {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(ParseError::InvalidNumber(start));
        }
        if self.bytes.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            while matches!(self.bytes.get(self.pos), Some(b) if b.is_ascii_digit()) {
                self.pos += 1;
            }
        }
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| ParseError::InvalidNumber(start))?;
        text.parse().map_err(|_| ParseError::InvalidNumber(start))
    }

    /// Read a double-quoted string, decoding `""` as one embedded quote.
    /// Non-UTF-8 bytes are replaced rather than rejected; the source
    /// dumps carry stray latin-1 bytes in a handful of names.
    pub fn read_string(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        self.expect(b'"')?;
        let mut buf = Vec::new();
        loop {
            match self.bytes.get(self.pos) {
                Some(b'"') => {
                    self.pos += 1;
                    if self.bytes.get(self.pos) == Some(&b'"') {
                        buf.push(b'"');
                        self.pos += 1;
                    } else {
                        return Ok(String::from_utf8_lossy(&buf).into_owned());
                    }
                }
                Some(&b) => {
                    buf.push(b);
                    self.pos += 1;
                }
                None => return Err(ParseError::UnterminatedString(start)),
            }
        }
    }
}
