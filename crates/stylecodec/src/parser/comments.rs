//! Block comment removal.

/// Blanks out every `/* ... */` comment in `source`.
///
/// Each byte of a comment becomes a space (newlines are kept), so byte
/// offsets into the result are byte offsets into `source`. An unterminated
/// comment runs to the end of the input. `/*` inside a quoted string is
/// string content, not a comment.
pub fn strip_comments(source: &str) -> String {
    let mut output = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut in_comment = false;
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(open) = quote {
            if c == open {
                quote = None;
            }
            output.push(c);
        } else if in_comment {
            if c == '*' && chars.peek() == Some(&'/') {
                chars.next();
                output.push_str("  ");
                in_comment = false;
            } else if c == '\n' {
                output.push('\n');
            } else {
                output.extend(std::iter::repeat_n(' ', c.len_utf8()));
            }
        } else if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            output.push_str("  ");
            in_comment = true;
        } else {
            if c == '"' || c == '\'' {
                quote = Some(c);
            }
            output.push(c);
        }
    }

    output
}
