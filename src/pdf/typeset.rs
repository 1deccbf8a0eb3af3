//! Greedy line breaking.
//!
//! Lines break after whitespace. A word that doesn't fit on a line of its
//! own is split between characters, so text never overflows horizontally.
//! `\n`, `\r` and `\r\n` force a break; tabs are as wide as four spaces.

use crate::Pt;
use std::ops::Range;

/// Number of spaces a tab advances by
pub const TABSIZE: usize = 4;

/// One wrapped line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Byte range of the line within the wrapped text, line breaks excluded
    pub range: Range<usize>,
    /// Width of the line, trailing whitespace excluded
    pub width: Pt,
}

/// A position in the current line where we can safely break to a new line
#[derive(Copy, Clone)]
struct BreakPoint {
    /// byte index the next line starts at
    at: usize,
    /// width of the line up to and including the whitespace
    width: Pt,
    /// width of the line before the whitespace run
    ink_width: Pt,
}

/// Wrap `text` into lines no wider than `max_width`, measuring every
/// character with `advance`
pub fn wrap<A>(text: &str, max_width: Pt, advance: A) -> Vec<Line>
where
    A: Fn(char) -> Pt,
{
    let mut lines: Vec<Line> = Vec::default();

    let mut line_start = 0usize;
    let mut width = Pt(0.0);
    let mut ink_width = Pt(0.0);
    let mut last_break: Option<BreakPoint> = None;

    let mut chars = text.char_indices().peekable();
    while let Some((ci, ch)) = chars.next() {
        if ch == '\n' || ch == '\r' {
            lines.push(Line {
                range: line_start..ci,
                width: ink_width,
            });

            line_start = ci + ch.len_utf8();
            if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                chars.next();
                line_start += 1;
            }
            width = Pt(0.0);
            ink_width = Pt(0.0);
            last_break = None;
            continue;
        }

        let hadv = if ch == '\t' {
            advance(' ') * TABSIZE as f32
        } else {
            advance(ch)
        };

        // whitespace never overflows, it hangs past the edge instead
        if ch.is_whitespace() {
            width += hadv;
            last_break = Some(BreakPoint {
                at: ci + ch.len_utf8(),
                width,
                ink_width,
            });
            continue;
        }

        if width + hadv > max_width && ci > line_start {
            match last_break.take() {
                Some(bp) => {
                    // rewind to the whitespace and carry the current word over
                    lines.push(Line {
                        range: line_start..bp.at,
                        width: bp.ink_width,
                    });
                    line_start = bp.at;
                    width -= bp.width;
                }
                None => {
                    // no break point - force a character break
                    lines.push(Line {
                        range: line_start..ci,
                        width,
                    });
                    line_start = ci;
                    width = Pt(0.0);
                }
            }
        }

        width += hadv;
        ink_width = width;
    }

    if line_start < text.len() {
        lines.push(Line {
            range: line_start..text.len(),
            width: ink_width,
        });
    }

    lines
}
