//! PON ("permissive object notation"): a whitespace-delimited, quote-optional text form for a
//! [`Blueprint`] tree — `{a = 1, b = [true, null]}` rather than JSON's `{"a": 1, "b": [true,
//! null]}`. Members are `key = value` pairs; containers open with a bare `{`/`[`.

use indexmap::IndexMap;

use crate::blueprint::Blueprint;
use crate::error::TextError;
use crate::text::StringReader;
use crate::text::StringWriter;

/// Which layout a writer produces: one line with no padding, or indented with a newline per
/// member/element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PonStyle {
    Compact,
    Pretty,
}

pub fn to_pon(value: &Blueprint, style: PonStyle) -> String {
    let mut w = match style {
        PonStyle::Compact => StringWriter::new(),
        PonStyle::Pretty => StringWriter::pretty(2),
    };
    write_value(value, &mut w);
    w.into_string()
}

pub fn from_pon(input: &str) -> Result<Blueprint, TextError> {
    tracing::trace!(len = input.len(), "parsing PON");
    let mut r = StringReader::new(input);
    let value = parse_value(&mut r);
    r.skip_whitespace();
    if r.has_failed() {
        let error = r.errors().first().cloned().unwrap_or_else(|| TextError::new(r.line(), r.column(), "malformed PON"));
        tracing::debug!(%error, "PON parse failed");
        Err(error)
    } else {
        Ok(value)
    }
}

fn write_value(value: &Blueprint, w: &mut StringWriter) {
    match value {
        Blueprint::Invalid => w.write_str("invalid"),
        Blueprint::Null => w.write_str("null"),
        Blueprint::Boolean(v) => w.write_str(if *v { "true" } else { "false" }),
        Blueprint::Integer(v) => w.write_str(&v.to_string()),
        Blueprint::FloatingPoint(v) => w.write_str(&v.to_string()),
        Blueprint::String(s) => w.write_quoted_string(s),
        Blueprint::Array(items) => write_array(items, w),
        Blueprint::Object(map) => write_object(map, w),
    }
}

fn write_array(items: &[Blueprint], w: &mut StringWriter) {
    w.write_char('[');
    w.indent();
    for (i, item) in items.iter().enumerate() {
        w.newline();
        write_value(item, w);
        if i + 1 < items.len() {
            w.write_str(", ");
        }
    }
    w.dedent();
    if !items.is_empty() {
        w.newline();
    }
    w.write_char(']');
}

fn write_object(map: &IndexMap<String, Blueprint>, w: &mut StringWriter) {
    w.write_char('{');
    w.indent();
    for (i, (key, value)) in map.iter().enumerate() {
        w.newline();
        w.write_str(key);
        w.write_str(" = ");
        write_value(value, w);
        if i + 1 < map.len() {
            w.write_str(",");
        }
    }
    w.dedent();
    if !map.is_empty() {
        w.newline();
    }
    w.write_char('}');
}

fn parse_value(r: &mut StringReader) -> Blueprint {
    r.skip_whitespace();
    match r.peek_char() {
        Some('{') => parse_object(r),
        Some('[') => parse_array(r),
        Some('"') => Blueprint::String(r.read_quoted_string()),
        _ => parse_scalar(r),
    }
}

fn parse_scalar(r: &mut StringReader) -> Blueprint {
    let word = r.read_word();
    match word.as_str() {
        "null" => Blueprint::Null,
        "true" => Blueprint::Boolean(true),
        "false" => Blueprint::Boolean(false),
        _ => {
            if let Ok(i) = word.parse::<i64>() {
                Blueprint::Integer(i)
            } else if let Ok(f) = word.parse::<f64>() {
                Blueprint::FloatingPoint(f)
            } else {
                Blueprint::String(word)
            }
        }
    }
}

fn parse_object(r: &mut StringReader) -> Blueprint {
    r.expect_char('{');
    let mut map = IndexMap::new();

    loop {
        r.skip_whitespace();
        if r.peek_char() == Some('}') {
            r.expect_char('}');
            break;
        }
        if r.at_end() || r.has_failed() {
            break;
        }

        let key = if r.peek_char() == Some('"') { r.read_quoted_string() } else { r.read_word() };
        r.expect_char('=');
        let value = parse_value(r);
        map.insert(key, value);

        r.skip_whitespace();
        if r.peek_char() == Some(',') {
            r.expect_char(',');
        }
    }

    Blueprint::Object(map)
}

fn parse_array(r: &mut StringReader) -> Blueprint {
    r.expect_char('[');
    let mut items = Vec::new();

    loop {
        r.skip_whitespace();
        if r.peek_char() == Some(']') {
            r.expect_char(']');
            break;
        }
        if r.at_end() || r.has_failed() {
            break;
        }

        items.push(parse_value(r));

        r.skip_whitespace();
        if r.peek_char() == Some(',') {
            r.expect_char(',');
        }
    }

    Blueprint::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_print_example() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Blueprint::Integer(1));
        map.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
        let tree = Blueprint::Object(map);

        let text = to_pon(&tree, PonStyle::Pretty);
        assert_eq!(text, "{\n  a = 1,\n  b = [\n    true, \n    null\n  ]\n}");
    }

    #[test]
    fn compact_roundtrip() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), Blueprint::Integer(1));
        map.insert("b".to_string(), Blueprint::Array(vec![Blueprint::Boolean(true), Blueprint::Null]));
        let tree = Blueprint::Object(map);

        let text = to_pon(&tree, PonStyle::Compact);
        let parsed = from_pon(&text).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn bare_word_falls_back_to_string() {
        let parsed = from_pon("hello").unwrap();
        assert_eq!(parsed, Blueprint::String("hello".to_string()));
    }
}
