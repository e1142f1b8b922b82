//! Tolerant parser for the bracketed-list query syntax.
//!
//! Accepts strings such as `"[1,2],[3,4]"`, `"40,60,30"` or
//! `"[Mon,40],['Tue',60]"`. The input is the interior of an outer list: a
//! comma-separated sequence of elements, where each element is a scalar or a
//! bracketed sub-list of scalars.
//!
//! ```text
//! list    := element (',' element)*
//! element := scalar | '[' (scalar (',' scalar)*)? ']'
//! scalar  := number | bare-word | '...' | "..."
//! ```
//!
//! There is no escaping. Anything outside this grammar is rejected by
//! [`parse_literal`] and turned into "no data" by [`parse_encoded_list`].

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ListParseError, ListParseResult};
use crate::point::{DataPoint, FieldValue};

/// One element of a parsed list.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A bare scalar.
    Scalar(FieldValue),
    /// A bracketed sub-list of scalars.
    List(Vec<FieldValue>),
}

#[derive(Debug, Clone, PartialEq)]
enum TokenKind {
    Open,
    Close,
    Comma,
    Scalar(FieldValue),
}

impl TokenKind {
    fn describe(&self) -> String {
        match self {
            Self::Open => "'['".to_string(),
            Self::Close => "']'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Scalar(v) => format!("value {v:?}"),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    pos: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '+' | ':' | '/')
}

/// Numbers must look like numbers; `inf` and `NaN` stay text.
fn classify_word(word: &str) -> FieldValue {
    let numeric_start = word
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
    match word.parse::<f64>() {
        Ok(n) if numeric_start && n.is_finite() => FieldValue::Number(n),
        _ => FieldValue::Text(word.to_string()),
    }
}

struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn tokenize(mut self) -> ListParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some((pos, ch)) = self.chars.next() {
            let kind = match ch {
                c if c.is_whitespace() => continue,
                '[' => TokenKind::Open,
                ']' => TokenKind::Close,
                ',' => TokenKind::Comma,
                '\'' | '"' => TokenKind::Scalar(FieldValue::Text(self.quoted(pos, ch)?)),
                c if is_word_char(c) => TokenKind::Scalar(classify_word(self.word(pos))),
                c => return Err(ListParseError::UnexpectedChar { ch: c, pos }),
            };
            tokens.push(Token { kind, pos });
        }
        Ok(tokens)
    }

    fn quoted(&mut self, start: usize, quote: char) -> ListParseResult<String> {
        let body_start = start + quote.len_utf8();
        for (pos, ch) in self.chars.by_ref() {
            if ch == quote {
                return Ok(self.source[body_start..pos].to_string());
            }
        }
        Err(ListParseError::UnterminatedString { pos: start })
    }

    fn word(&mut self, start: usize) -> &'a str {
        let mut end = self.source.len();
        while let Some(&(pos, ch)) = self.chars.peek() {
            if !is_word_char(ch) {
                end = pos;
                break;
            }
            self.chars.next();
        }
        &self.source[start..end]
    }
}

struct Parser {
    tokens: std::vec::IntoIter<Token>,
}

impl Parser {
    fn parse_list(mut self) -> ListParseResult<Vec<Literal>> {
        let mut elements = Vec::new();
        if self.tokens.as_slice().is_empty() {
            return Ok(elements);
        }
        loop {
            elements.push(self.parse_element()?);
            match self.tokens.next() {
                None => return Ok(elements),
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => {}
                Some(tok) => return Err(unexpected(&tok)),
            }
        }
    }

    fn parse_element(&mut self) -> ListParseResult<Literal> {
        let tok = self.tokens.next().ok_or(ListParseError::UnexpectedEnd)?;
        match tok.kind {
            TokenKind::Scalar(value) => Ok(Literal::Scalar(value)),
            TokenKind::Open => self.parse_sublist(),
            _ => Err(unexpected(&tok)),
        }
    }

    /// Parse the remainder of a sub-list after its opening bracket.
    fn parse_sublist(&mut self) -> ListParseResult<Literal> {
        let mut values = Vec::new();
        let mut expect_value = true;
        loop {
            let tok = self.tokens.next().ok_or(ListParseError::UnexpectedEnd)?;
            match (tok.kind, expect_value) {
                (TokenKind::Close, _) if !expect_value || values.is_empty() => {
                    return Ok(Literal::List(values));
                }
                (TokenKind::Scalar(value), true) => {
                    values.push(value);
                    expect_value = false;
                }
                (TokenKind::Comma, false) => expect_value = true,
                (TokenKind::Open, _) => return Err(ListParseError::NestedList { pos: tok.pos }),
                (kind, _) => {
                    return Err(ListParseError::UnexpectedToken {
                        found: kind.describe(),
                        pos: tok.pos,
                    })
                }
            }
        }
    }
}

fn unexpected(tok: &Token) -> ListParseError {
    ListParseError::UnexpectedToken {
        found: tok.kind.describe(),
        pos: tok.pos,
    }
}

/// Parse `raw` as the interior of a list literal.
///
/// Whitespace-only input yields an empty list.
///
/// # Errors
///
/// Returns a [`ListParseError`] for anything outside the list syntax:
/// unknown characters, unterminated strings, nested sub-lists, empty or
/// trailing elements and unbalanced brackets.
pub fn parse_literal(raw: &str) -> ListParseResult<Vec<Literal>> {
    let tokens = Lexer::new(raw).tokenize()?;
    Parser {
        tokens: tokens.into_iter(),
    }
    .parse_list()
}

/// Parse an encoded list into data points with the given field names.
///
/// The first field of each point defaults to the point's index and every
/// other field to `0`. Bare scalars and single-value sub-lists fill the second
/// field; two- and three-value sub-lists fill fields positionally. Sub-lists of
/// any other length leave the defaults untouched.
///
/// Missing input, no field names and malformed input all yield an empty
/// vector. This function never fails.
#[must_use]
pub fn parse_encoded_list(raw: Option<&str>, field_names: &[&str]) -> Vec<DataPoint> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };
    if field_names.is_empty() {
        return Vec::new();
    }

    match parse_literal(raw) {
        Ok(literals) => literals
            .iter()
            .enumerate()
            .map(|(index, literal)| literal_to_point(index, literal, field_names))
            .collect(),
        Err(err) => {
            tracing::debug!(%err, raw, "Discarding malformed encoded list");
            Vec::new()
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn literal_to_point(index: usize, literal: &Literal, field_names: &[&str]) -> DataPoint {
    let mut point = DataPoint::new();
    for (pos, name) in field_names.iter().enumerate() {
        let default = if pos == 0 { index as f64 } else { 0.0 };
        point.set(name, default);
    }

    match literal {
        Literal::Scalar(value) => {
            if let Some(name) = field_names.get(1) {
                point.set(name, value.clone());
            }
        }
        Literal::List(values) => match values.len() {
            1 => {
                if let Some(name) = field_names.get(1) {
                    point.set(name, values[0].clone());
                }
            }
            2 | 3 => {
                for (name, value) in field_names.iter().zip(values) {
                    point.set(name, value.clone());
                }
            }
            _ => {}
        },
    }
    point
}
