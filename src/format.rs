//! The format-string mini-language `StringWriter`/`StringReader` use to drive text output: a
//! run of literal text interrupted by `{ID|SPEC}` replacement fields, where `ID` is empty
//! (auto-numbered), a bare number (positional), a bare word (named), or `-` (a literal field
//! boundary with no argument), and `SPEC` is an opaque per-type specification string.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterRef {
    /// `{}` or `{|spec}` — takes the next unconsumed positional argument.
    Auto,
    /// `{3}` — an explicit positional argument.
    Positional(usize),
    /// `{name}` — a named argument.
    Named(String),
    /// `{-}` — a field with no argument, used purely to anchor a specification.
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatToken {
    pub literal: String,
    pub parameter: Option<ParameterRef>,
    pub specification: String,
}

/// Parses a format string into literal/replacement-field tokens. Never fails: unmatched `{`
/// with no closing `}` is treated as a literal run to the end of the string, matching the
/// original's tolerant behavior.
pub fn parse_format_string(format: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::new();
    let mut chars = format.char_indices().peekable();
    let mut literal = String::new();
    let mut auto_index = 0usize;

    while let Some((i, c)) = chars.next() {
        if c == '{' {
            if matches!(chars.peek(), Some((_, '{'))) {
                chars.next();
                literal.push('{');
                continue;
            }

            let field_start = i + 1;
            let mut depth = 1usize;
            let mut end = format.len();
            let mut cursor = field_start;

            for (j, fc) in format[field_start..].char_indices() {
                let pos = field_start + j;
                match fc {
                    '{' => depth += 1,
                    '}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = pos;
                            break;
                        }
                    }
                    _ => {}
                }
                cursor = pos + fc.len_utf8();
            }

            if depth != 0 {
                literal.push_str(&format[i..]);
                break;
            }

            let body = &format[field_start..end];
            let (id, spec) = match body.find('|') {
                Some(p) => (&body[..p], body[p + 1..].to_string()),
                None => (body, String::new()),
            };

            let parameter = if id.is_empty() {
                let p = ParameterRef::Positional(auto_index);
                auto_index += 1;
                Some(p)
            } else if id == "-" {
                None
            } else if let Ok(n) = id.parse::<usize>() {
                Some(ParameterRef::Positional(n))
            } else {
                Some(ParameterRef::Named(id.to_string()))
            };

            tokens.push(FormatToken { literal: std::mem::take(&mut literal), parameter, specification: spec });

            // advance past the closing brace
            let consumed = cursor.max(end + 1);
            while chars.peek().map(|&(p, _)| p < consumed).unwrap_or(false) {
                chars.next();
            }
        } else if c == '}' && matches!(chars.peek(), Some((_, '}'))) {
            chars.next();
            literal.push('}');
        } else {
            literal.push(c);
        }
    }

    if !literal.is_empty() || tokens.is_empty() {
        tokens.push(FormatToken { literal, parameter: None, specification: String::new() });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_and_named_fields() {
        let tokens = parse_format_string("hello {0}, you are {age}");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].literal, "hello ");
        assert_eq!(tokens[0].parameter, Some(ParameterRef::Positional(0)));
        assert_eq!(tokens[1].literal, ", you are ");
        assert_eq!(tokens[1].parameter, Some(ParameterRef::Named("age".to_string())));
        assert_eq!(tokens[2].parameter, None);
        assert_eq!(tokens[2].literal, "");
    }

    #[test]
    fn literal_braces_are_escaped_doubled() {
        let tokens = parse_format_string("{{literal}}");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].literal, "{literal}");
    }

    #[test]
    fn specification_after_pipe() {
        let tokens = parse_format_string("{0|04x}");
        assert_eq!(tokens[0].specification, "04x");
    }

    #[test]
    fn dash_field_has_no_parameter() {
        let tokens = parse_format_string("plain {-|bold} text");
        assert_eq!(tokens[0].parameter, None);
        assert_eq!(tokens[0].specification, "bold");
    }
}
