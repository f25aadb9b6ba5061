use regex::Regex;

use crate::error::TextError;

/// A scanning cursor over borrowed text, tracking 1-based line/column for error reporting. Once
/// `failed` is set, every read is a no-op that returns a default value — the same short-circuit
/// convention as [`crate::buffer::BufferReader`].
pub struct StringReader<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    failed: bool,
    errors: Vec<TextError>,
}

impl<'a> StringReader<'a> {
    pub fn new(input: &'a str) -> Self {
        StringReader { input, pos: 0, line: 1, column: 1, failed: false, errors: Vec::new() }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }

    pub fn errors(&self) -> &[TextError] {
        &self.errors
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    fn fail(&mut self, message: impl Into<String>) {
        self.failed = true;
        self.errors.push(TextError::new(self.line, self.column, message));
    }

    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while matches!(self.peek_char(), Some(c) if c.is_whitespace()) {
            self.next_char();
        }
    }

    /// Consumes `expected` if it's next, skipping leading whitespace first. Fails otherwise.
    pub fn expect_char(&mut self, expected: char) {
        if self.failed {
            return;
        }

        self.skip_whitespace();
        match self.peek_char() {
            Some(c) if c == expected => {
                self.next_char();
            }
            other => self.fail(format!("expected '{expected}', found {other:?}")),
        }
    }

    /// Matches `pattern` (no leading `^`) against the unconsumed input, returning and consuming
    /// the match if found at the current position.
    pub fn scan(&mut self, pattern: &str) -> Option<String> {
        if self.failed {
            return None;
        }

        let anchored = format!("^(?:{pattern})");
        let re = Regex::new(&anchored).expect("caller supplies a valid regex fragment");
        let m = re.find(self.remaining())?;
        let text = m.as_str().to_string();
        for _ in 0..text.chars().count() {
            self.next_char();
        }
        Some(text)
    }

    /// Reads a maximal run of non-whitespace characters after skipping leading whitespace. Used
    /// for scalar literals (numbers, bools, enum names).
    pub fn read_word(&mut self) -> String {
        if self.failed {
            return String::new();
        }

        self.skip_whitespace();
        let mut word = String::new();
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || matches!(c, '[' | ']' | '{' | '}' | ',' | '=' | ':') {
                break;
            }
            word.push(c);
            self.next_char();
        }

        if word.is_empty() {
            self.fail("expected a value, found none");
        }

        word
    }

    /// Reads a `"`-delimited string with `\\`, `\"`, `\n`, `\t` escapes, skipping leading
    /// whitespace first.
    pub fn read_quoted_string(&mut self) -> String {
        if self.failed {
            return String::new();
        }

        self.skip_whitespace();
        if self.peek_char() != Some('"') {
            self.fail("expected opening '\"'");
            return String::new();
        }
        self.next_char();

        let mut out = String::new();
        loop {
            match self.next_char() {
                None => {
                    self.fail("unterminated string literal");
                    return out;
                }
                Some('"') => return out,
                Some('\\') => match self.next_char() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some('"') => out.push('"'),
                    Some('\\') => out.push('\\'),
                    Some(other) => out.push(other),
                    None => {
                        self.fail("unterminated escape sequence");
                        return out;
                    }
                },
                Some(c) => out.push(c),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_word_stops_at_punctuation() {
        let mut r = StringReader::new("123, next");
        assert_eq!(r.read_word(), "123");
        assert_eq!(r.peek_char(), Some(','));
    }

    #[test]
    fn quoted_string_handles_escapes() {
        let mut r = StringReader::new(r#""a\"b\nc""#);
        assert_eq!(r.read_quoted_string(), "a\"b\nc");
    }

    #[test]
    fn scan_matches_number_pattern() {
        let mut r = StringReader::new("-3.5 rest");
        let m = r.scan(r"-?[0-9]+(\.[0-9]+)?").unwrap();
        assert_eq!(m, "-3.5");
    }

    #[test]
    fn failure_short_circuits_further_reads() {
        let mut r = StringReader::new("");
        r.expect_char('x');
        assert!(r.has_failed());
        assert_eq!(r.read_word(), "");
    }
}
