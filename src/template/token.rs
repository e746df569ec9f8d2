//! Placeholder tokenizer.
//!
//! Splits instruction text into literal runs and `{{kind: payload}}`
//! placeholders in a single lazy pass. Anything that does not form a
//! well-formed placeholder of a known kind stays literal text.

/// The kinds of placeholder understood by the template engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `{{variable: <name>}}`
    Variable,
    /// `{{include: <relativePath>}}`
    Include,
    /// `{{previousOutput: <stepId>[.<property>]}}`
    PreviousOutput,
}

impl PlaceholderKind {
    /// Parse the keyword that precedes the colon.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "variable" => Some(Self::Variable),
            "include" => Some(Self::Include),
            "previousOutput" => Some(Self::PreviousOutput),
            _ => None,
        }
    }

    /// The keyword as written in templates.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Include => "include",
            Self::PreviousOutput => "previousOutput",
        }
    }
}

/// A piece of tokenized template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied through unchanged.
    Literal(&'a str),
    /// A well-formed placeholder.
    Placeholder {
        kind: PlaceholderKind,
        /// Trimmed text after the colon.
        payload: &'a str,
        /// The full placeholder text including braces.
        raw: &'a str,
    },
}

impl<'a> Token<'a> {
    /// The original source text of this token.
    pub fn as_source(&self) -> &'a str {
        match self {
            Token::Literal(text) => text,
            Token::Placeholder { raw, .. } => raw,
        }
    }
}

/// Lazy iterator over the tokens of a template.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

/// Tokenize `text` into literals and placeholders.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }

        let mut search = self.pos;
        while let Some(offset) = self.text[search..].find("{{") {
            let start = search + offset;
            let Some(close_offset) = self.text[start + 2..].find("}}") else {
                break;
            };
            let close = start + 2 + close_offset;

            // A body never contains '{', so only the last `{{` before the
            // closing braces can open a placeholder.
            let open = self.text[start..close]
                .rfind("{{")
                .map_or(start, |i| start + i);

            if let Some(token) = parse_placeholder(self.text, open, close) {
                if open > self.pos {
                    let literal = &self.text[self.pos..open];
                    self.pos = open;
                    return Some(Token::Literal(literal));
                }
                self.pos = close + 2;
                return Some(token);
            }
            search = close;
        }

        let literal = &self.text[self.pos..];
        self.pos = self.text.len();
        Some(Token::Literal(literal))
    }
}

/// Try to read the placeholder between `start` (pointing at `{{`) and
/// `close` (pointing at the first `}}` after it).
fn parse_placeholder(text: &str, start: usize, close: usize) -> Option<Token<'_>> {
    let body = &text[start + 2..close];

    let colon = body.find(':')?;
    let keyword = &body[..colon];
    if keyword.is_empty() || !keyword.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    let kind = PlaceholderKind::from_keyword(keyword)?;

    let raw_payload = &body[colon + 1..];
    let payload = raw_payload.trim();
    if payload.is_empty() || raw_payload.contains(['{', '}']) {
        return None;
    }

    Some(Token::Placeholder {
        kind,
        payload,
        raw: &text[start..close + 2],
    })
}
