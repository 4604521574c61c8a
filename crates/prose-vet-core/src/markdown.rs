//! Markdown processing utilities.
//!
//! Uses pulldown-cmark for proper CommonMark parsing rather than regex-based
//! scanning. Checkers need original line/column positions, so instead of
//! stripping markup this module records which byte ranges of the input are
//! code (fenced blocks, indented blocks, inline spans) and therefore not
//! prose to validate.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Byte ranges of the input covered by code blocks and inline code spans.
#[derive(Debug, Clone, Default)]
pub struct CodeMask {
    ranges: Vec<std::ops::Range<usize>>,
}

impl CodeMask {
    /// Whether the byte at `offset` falls inside code.
    pub fn contains(&self, offset: usize) -> bool {
        self.ranges.iter().any(|r| r.contains(&offset))
    }

    /// Number of masked ranges (for diagnostics/tests).
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether no code regions were found.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

/// Compute the code mask for `text`.
///
/// Fenced and indented code blocks mask their full source range (including
/// the fence lines); inline code spans mask the span source including the
/// backticks.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn code_mask(text: &str) -> CodeMask {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(text, options);

    let mut ranges = Vec::new();
    let mut block_start: Option<usize> = None;

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                // Remember the start; the End event's range covers the whole
                // block, but tracking both keeps nested oddities safe.
                block_start = Some(range.start);
            }
            Event::End(TagEnd::CodeBlock) => {
                let start = block_start.take().unwrap_or(range.start);
                ranges.push(start..range.end);
            }
            Event::Code(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                ranges.push(range);
            }
            _ => {}
        }
    }

    CodeMask { ranges }
}
