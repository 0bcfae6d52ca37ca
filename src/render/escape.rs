//! Text escaping for the output formats.

/// Escape text for use in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape special Markdown characters.
/// Only escape characters that could be misinterpreted as inline syntax.
pub fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            // Emphasis, code and strikethrough
            '\\' | '`' | '*' | '_' | '~' |
            // Brackets for links
            '[' | ']' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}

/// Escape syntax that Markdown only recognizes at the start of a line:
/// headings, block quotes, list markers and setext underlines.
pub fn escape_line_start(line: &str) -> String {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 {
        let mut rest = line[digits..].chars();
        let marker = matches!(rest.next(), Some('.' | ')'));
        let terminated = rest.next().map_or(true, char::is_whitespace);
        if marker && terminated {
            return format!("{}\\{}", &line[..digits], &line[digits..]);
        }
        return line.to_string();
    }

    match line.chars().next() {
        Some('#' | '>' | '-' | '+' | '=') => format!("\\{}", line),
        _ => line.to_string(),
    }
}

/// Escape a link target for use inside Markdown `(...)`.
pub fn escape_link_target(href: &str) -> String {
    let mut result = String::with_capacity(href.len());
    for c in href.chars() {
        match c {
            ' ' => result.push_str("%20"),
            '(' => result.push_str("%28"),
            ')' => result.push_str("%29"),
            _ => result.push(c),
        }
    }
    result
}
