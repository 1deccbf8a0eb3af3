#![allow(dead_code)]

use pdf_grid::pdf::{FontMetrics, PdfCanvas};
use pdf_grid::pagesize::{self, PageOrientation};
use pdf_grid::{Canvas, Pt};

/// Every character half an em wide, 0.8em ascent, -0.2em descent and 0.7em
/// capitals.
pub struct FixedFont;

impl FontMetrics for FixedFont {
    fn ascent(&self, size: Pt) -> Pt {
        size * 8.0 / 10.0
    }

    fn descent(&self, size: Pt) -> Pt {
        -(size * 2.0 / 10.0)
    }

    fn leading(&self, _size: Pt) -> Pt {
        Pt(0.0)
    }

    fn cap_height(&self, size: Pt) -> Pt {
        size * 7.0 / 10.0
    }

    fn advance(&self, _ch: char, size: Pt) -> Pt {
        size / 2.0
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        u16::try_from(u32::from(ch)).ok()
    }
}

/// A landscape A4 page with [`FixedFont`] selected at 10pt
pub fn landscape_page() -> PdfCanvas<FixedFont> {
    let mut canvas = PdfCanvas::new(pagesize::A4.landscape());
    let font = canvas.add_font(FixedFont);
    canvas.set_font(font);
    canvas.set_font_size(Pt(10.0));
    canvas
}

pub fn operations(content: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(content)
        .lines()
        .map(str::to_string)
        .collect()
}

/// The `(x, y)` operands of every `Td` in the stream
pub fn text_positions(content: &[u8]) -> Vec<(f32, f32)> {
    operations(content)
        .iter()
        .filter_map(|op| {
            let mut parts = op.strip_suffix(" Td")?.split_whitespace();
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            Some((x, y))
        })
        .collect()
}

pub fn assert_close(actual: Pt, expected: f32) {
    assert!(
        (actual.0 - expected).abs() < 1e-3,
        "expected {expected}, got {}",
        actual.0
    );
}
