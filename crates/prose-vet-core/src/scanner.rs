//! Line scanner and tokenizer.
//!
//! Decomposes raw text into an immutable [`Document`]: an ordered sequence
//! of 1-indexed [`Line`]s, each carrying its tokens with line/column
//! positions preserved for reporting. Any input is valid — the empty
//! string yields an empty document.

use crate::markdown::{self, CodeMask};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Alphanumeric run, including internal apostrophes and hyphens.
    Word,
    /// Run of non-whitespace, non-word characters.
    Punctuation,
    /// Run of whitespace characters.
    Whitespace,
}

/// A single token within a line.
#[derive(Debug, Clone)]
pub struct Token {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The token text.
    pub text: String,
    /// 1-indexed column (character based) within the line.
    pub column: usize,
    /// Byte offset of the token start within the whole document.
    pub offset: usize,
}

impl Token {
    /// Whether this is a word token.
    pub const fn is_word(&self) -> bool {
        matches!(self.kind, TokenKind::Word)
    }
}

/// One line of the document.
#[derive(Debug, Clone)]
pub struct Line {
    /// 1-indexed line number.
    pub number: usize,
    /// The raw line text, without the trailing newline.
    pub text: String,
    /// Byte offset of the line start within the whole document.
    pub offset: usize,
    /// Tokens in left-to-right order.
    pub tokens: Vec<Token>,
}

impl Line {
    /// Iterate over word tokens only.
    pub fn words(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| t.is_word())
    }
}

/// An immutable, fully tokenized input document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The original input text.
    pub text: String,
    /// Ordered lines, 1-indexed via [`Line::number`].
    pub lines: Vec<Line>,
    /// Byte ranges covered by Markdown code blocks and inline code spans.
    pub code_mask: CodeMask,
}

impl Document {
    /// Tokenize `text` into a document.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn parse(text: &str) -> Self {
        let code_mask = markdown::code_mask(text);
        let mut lines = Vec::new();
        let mut offset = 0;

        for (idx, raw) in text.split('\n').enumerate() {
            // split('\n') on "" yields one empty line; treat truly empty
            // input as the empty document instead.
            if text.is_empty() {
                break;
            }
            let segment_len = raw.len();
            let raw = raw.strip_suffix('\r').unwrap_or(raw);
            lines.push(Line {
                number: idx + 1,
                text: raw.to_string(),
                offset,
                tokens: tokenize_line(raw, offset),
            });
            offset += segment_len + 1;
        }

        // A trailing newline produces a phantom empty final line; drop it so
        // line count matches what an editor shows.
        if text.ends_with('\n') {
            lines.pop();
        }

        Self {
            text: text.to_string(),
            lines,
            code_mask,
        }
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Whether `ch` can appear inside a word unconditionally.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

/// Whether `ch` joins two word characters (don't, well-known).
const fn is_word_joiner(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}' | '-')
}

/// Split one line into word, punctuation, and whitespace tokens.
fn tokenize_line(line: &str, line_offset: usize) -> Vec<Token> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (byte_start, ch) = chars[i];
        let column = i + 1;
        let start = i;

        if is_word_char(ch) {
            i += 1;
            while i < chars.len() {
                let c = chars[i].1;
                if is_word_char(c) {
                    i += 1;
                } else if is_word_joiner(c)
                    && i + 1 < chars.len()
                    && is_word_char(chars[i + 1].1)
                {
                    i += 2;
                } else {
                    break;
                }
            }
            tokens.push(Token {
                kind: TokenKind::Word,
                text: chars[start..i].iter().map(|(_, c)| *c).collect(),
                column,
                offset: line_offset + byte_start,
            });
        } else if ch.is_whitespace() {
            while i < chars.len() && chars[i].1.is_whitespace() {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Whitespace,
                text: chars[start..i].iter().map(|(_, c)| *c).collect(),
                column,
                offset: line_offset + byte_start,
            });
        } else {
            while i < chars.len() && !chars[i].1.is_whitespace() && !is_word_char(chars[i].1) {
                i += 1;
            }
            tokens.push(Token {
                kind: TokenKind::Punctuation,
                text: chars[start..i].iter().map(|(_, c)| *c).collect(),
                column,
                offset: line_offset + byte_start,
            });
        }
    }

    tokens
}
