use crate::pdf::FontMetrics;
use crate::Pt;

/// A fixed-pitch font with round metrics: every character is half an em
/// wide, the ascent is 0.8em, the descent -0.2em and capitals are 0.7em
/// tall. At 10pt lines are 10pt apart.
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
