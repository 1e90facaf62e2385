//! # Structural Scanning
//!
//! Bracket- and string-aware helpers behind [`ExtractionMode::Structural`].
//!
//! [`ExtractionMode::Structural`]: crate::parser::ExtractionMode::Structural

/// A line break does not end a statement when the text before it ends with one of these.
const TRAILING_CONTINUATION: [char; 5] = ['|', '&', ':', '=', '?'];

/// A line break does not end a statement when the next line starts with one of these.
const LEADING_CONTINUATION: [char; 3] = ['|', '&', '='];

/// Tracks bracket depth and string literal state one character at a time.
#[derive(Debug, Default)]
struct Scanner {
    depth: usize,
    quote: Option<char>,
    escaped: bool,
    prev: char,
}

impl Scanner {
    fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Consumes `c`. Returns `true` when `c` lies outside every bracket and
    /// string literal.
    fn advance(&mut self, c: char) -> bool {
        let prev = std::mem::replace(&mut self.prev, c);

        if let Some(quote) = self.quote {
            if self.escaped {
                self.escaped = false;
            } else if c == '\\' {
                self.escaped = true;
            } else if c == quote {
                self.quote = None;
            } else if c == '\n' && quote != '`' {
                // unterminated literal, the line break still counts
                self.quote = None;
                return self.depth == 0;
            }
            return false;
        }

        let top_level = self.depth == 0;
        match c {
            '"' | '\'' | '`' => {
                self.quote = Some(c);
                return false;
            }
            '{' | '[' | '(' | '<' => self.depth += 1,
            // arrow, not a closing angle bracket
            '>' if prev == '=' => {}
            '}' | ']' | ')' | '>' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        top_level
    }
}

/// Removes `//` line comments and `/* */` block comments.
///
/// String literals are copied untouched. Line breaks inside block comments are
/// kept so line-sensitive splitting still sees them.
pub fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q || (c == '\n' && q != '`') {
                quote = None;
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"' | '\'' | '`', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    prev = skipped;
                }
                out.push(' ');
            }
            _ => out.push(c),
        }
    }

    out
}

/// Finds the `}` closing a brace opened just before `rest` and returns its
/// byte offset in `rest`.
pub fn closing_brace(rest: &str) -> Option<usize> {
    let mut scanner = Scanner::with_depth(1);

    for (idx, c) in rest.char_indices() {
        scanner.advance(c);
        if c == '}' && scanner.depth == 0 && scanner.quote.is_none() {
            return Some(idx);
        }
    }

    None
}

/// Splits `text` at `separators` and at terminating line breaks, looking only
/// at positions outside brackets and string literals.
///
/// Always returns at least one (possibly empty) piece.
pub fn split_top_level<'a>(text: &'a str, separators: &[char]) -> Vec<&'a str> {
    let mut scanner = Scanner::default();
    let mut pieces = Vec::new();
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        if !scanner.advance(c) {
            continue;
        }

        let splits = separators.contains(&c)
            || (c == '\n' && line_break_terminates(&text[start..idx], &text[idx + 1..]));

        if splits {
            pieces.push(&text[start..idx]);
            start = idx + c.len_utf8();
        }
    }

    pieces.push(&text[start..]);
    pieces
}

/// Byte length of the first statement in `text`: everything before the first
/// top-level `;` or terminating line break.
pub fn statement_end(text: &str) -> usize {
    split_top_level(text, &[';'])
        .first()
        .map_or(text.len(), |piece| piece.len())
}

fn line_break_terminates(before: &str, after: &str) -> bool {
    let before = before.trim();
    if before.is_empty() || before.ends_with(|c: char| TRAILING_CONTINUATION.contains(&c)) {
        return false;
    }
    !after
        .trim_start()
        .starts_with(|c: char| LEADING_CONTINUATION.contains(&c))
}
