use crate::dispatch::ToText;
use crate::format::{parse_format_string, ParameterRef};

/// One argument available to [`StringWriter::format`], addressable by position or by name.
pub struct Arg<'a> {
    pub name: Option<&'a str>,
    pub value: &'a dyn ToText,
}

impl<'a> Arg<'a> {
    pub fn positional(value: &'a dyn ToText) -> Self {
        Arg { name: None, value }
    }

    pub fn named(name: &'a str, value: &'a dyn ToText) -> Self {
        Arg { name: Some(name), value }
    }
}

/// A growing text buffer with indentation tracking for pretty-printers ([`crate::pon`]) and
/// format-string substitution for scalar output.
pub struct StringWriter {
    buf: String,
    indent: usize,
    indent_width: usize,
    pretty: bool,
}

impl Default for StringWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl StringWriter {
    pub fn new() -> Self {
        StringWriter { buf: String::new(), indent: 0, indent_width: 2, pretty: false }
    }

    pub fn pretty(indent_width: usize) -> Self {
        StringWriter { buf: String::new(), indent: 0, indent_width, pretty: true }
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    pub fn write_quoted_string(&mut self, s: &str) {
        self.buf.push('"');
        for c in s.chars() {
            match c {
                '"' => self.buf.push_str("\\\""),
                '\\' => self.buf.push_str("\\\\"),
                '\n' => self.buf.push_str("\\n"),
                '\t' => self.buf.push_str("\\t"),
                other => self.buf.push(other),
            }
        }
        self.buf.push('"');
    }

    pub fn indent(&mut self) {
        self.indent += 1;
    }

    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Starts a new line at the current indent level. A no-op when not in pretty mode.
    pub fn newline(&mut self) {
        if !self.pretty {
            return;
        }
        self.buf.push('\n');
        self.buf.push_str(&" ".repeat(self.indent * self.indent_width));
    }

    /// Substitutes `args` into `fmt`'s replacement fields, writing literal runs verbatim.
    pub fn format(&mut self, fmt: &str, args: &[Arg]) {
        for token in parse_format_string(fmt) {
            self.write_str(&token.literal);
            let arg = match &token.parameter {
                Some(ParameterRef::Positional(i)) => args.get(*i),
                Some(ParameterRef::Named(name)) => args.iter().find(|a| a.name == Some(name.as_str())),
                Some(ParameterRef::Auto) | None => None,
            };
            if let Some(arg) = arg {
                arg.value.to_text(self);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_substitutes_positional_and_named() {
        let mut w = StringWriter::new();
        let name = "bob".to_string();
        let age = 30i32;
        w.format("hello {0}, you are {age}", &[Arg::positional(&name), Arg::named("age", &age)]);
        assert_eq!(w.into_string(), "hello bob, you are 30");
    }

    #[test]
    fn quoted_string_escapes_special_chars() {
        let mut w = StringWriter::new();
        w.write_quoted_string("a\"b");
        assert_eq!(w.into_string(), "\"a\\\"b\"");
    }

    #[test]
    fn pretty_newline_indents() {
        let mut w = StringWriter::pretty(2);
        w.indent();
        w.newline();
        w.write_str("x");
        assert_eq!(w.into_string(), "\n  x");
    }
}
