//! Row parser for delimited text.
//!
//! Works over an in-memory buffer that has already been checked to be UTF-8.
//! Structural problems are reported as [`ParseFailure`] with the line they
//! were found on, so the loader can tell malformed CSV apart from other
//! failures.

use super::config::TextConfig;

/// A structural CSV problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    /// 1-based line number where the problem was detected
    pub line: usize,
    /// Human-readable description for logs
    pub reason: String,
}

impl ParseFailure {
    fn new(line: usize, reason: impl Into<String>) -> Self {
        Self {
            line,
            reason: reason.into(),
        }
    }
}

/// A parsed record with the line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number of the first byte of the record
    pub line: usize,
    /// Field values in column order
    pub fields: Vec<String>,
}

/// Streaming parser for delimited text.
pub struct TextParser<'a> {
    data: &'a [u8],
    config: TextConfig,
    pos: usize,
    line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldState {
    /// Nothing consumed yet for the current field
    Start,
    /// Inside an unquoted field
    Unquoted,
    /// Inside a quoted field
    Quoted,
    /// Just past the closing quote of a quoted field
    AfterQuote,
}

impl<'a> TextParser<'a> {
    /// Create a new text parser over `data`.
    pub fn new(data: &'a [u8], config: TextConfig) -> Self {
        TextParser {
            data,
            config,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parse the next record, skipping blank lines when configured.
    ///
    /// Returns `Ok(None)` at end of input.
    pub fn parse_row(&mut self) -> Result<Option<Record>, ParseFailure> {
        loop {
            if self.pos >= self.data.len() {
                return Ok(None);
            }

            let start_line = self.line;
            let (fields, quoted_any) = self.parse_fields()?;

            if self.config.skip_blank_lines && !quoted_any && Self::is_blank(&fields) {
                continue;
            }

            return Ok(Some(Record {
                line: start_line,
                fields,
            }));
        }
    }

    /// A line is blank when it holds a single unquoted field of whitespace.
    ///
    /// `,,` is not blank: it is a row of empty values.
    fn is_blank(fields: &[String]) -> bool {
        fields.len() == 1 && fields[0].trim().is_empty()
    }

    /// Parse one record's fields, consuming its line terminator.
    fn parse_fields(&mut self) -> Result<(Vec<String>, bool), ParseFailure> {
        let mut fields = Vec::new();
        let mut current = Vec::new();
        let mut state = FieldState::Start;
        let mut quoted_any = false;
        let mut quote_line = self.line;

        while self.pos < self.data.len() {
            let byte = self.data[self.pos];
            self.pos += 1;

            match state {
                FieldState::Quoted => {
                    if byte == self.config.quote {
                        if self.peek() == Some(self.config.quote) {
                            // Doubled quote is a literal quote
                            current.push(byte);
                            self.pos += 1;
                        } else {
                            state = FieldState::AfterQuote;
                        }
                    } else {
                        if byte == b'\n' {
                            self.line += 1;
                        }
                        current.push(byte);
                    }
                },
                FieldState::AfterQuote => {
                    if byte == self.config.delimiter {
                        self.finish_field(&mut current, &mut fields);
                        state = FieldState::Start;
                    } else if byte == b'\n' {
                        self.line += 1;
                        self.finish_field(&mut current, &mut fields);
                        return Ok((fields, quoted_any));
                    } else if byte == b'\r' {
                        // CR before LF, or a bare CR line ending
                        if self.peek() != Some(b'\n') {
                            self.line += 1;
                            self.finish_field(&mut current, &mut fields);
                            return Ok((fields, quoted_any));
                        }
                    } else {
                        return Err(ParseFailure::new(
                            self.line,
                            format!(
                                "'{}' expected after '{}'",
                                self.config.delimiter as char, self.config.quote as char
                            ),
                        ));
                    }
                },
                FieldState::Start | FieldState::Unquoted => {
                    if byte == self.config.delimiter {
                        self.finish_field(&mut current, &mut fields);
                        state = FieldState::Start;
                    } else if byte == b'\n' {
                        self.line += 1;
                        self.finish_field(&mut current, &mut fields);
                        return Ok((fields, quoted_any));
                    } else if byte == b'\r' {
                        if self.peek() != Some(b'\n') {
                            self.line += 1;
                            self.finish_field(&mut current, &mut fields);
                            return Ok((fields, quoted_any));
                        }
                    } else if byte == self.config.quote && state == FieldState::Start {
                        state = FieldState::Quoted;
                        quoted_any = true;
                        quote_line = self.line;
                    } else {
                        // A quote in the middle of an unquoted field is data
                        current.push(byte);
                        state = FieldState::Unquoted;
                    }
                },
            }
        }

        if state == FieldState::Quoted {
            return Err(ParseFailure::new(
                quote_line,
                "unexpected end of data inside quoted field",
            ));
        }

        self.finish_field(&mut current, &mut fields);
        Ok((fields, quoted_any))
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Finish parsing a field and add it to the fields vector
    fn finish_field(&self, current: &mut Vec<u8>, fields: &mut Vec<String>) {
        let bytes = std::mem::take(current);
        // Input was validated as UTF-8 and we only split on ASCII bytes
        fields.push(String::from_utf8_lossy(&bytes).into_owned());
    }
}
