use crate::{GridError, Pt};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// Metrics a [`PdfCanvas`](super::PdfCanvas) needs to lay text out.
///
/// All lengths are returned for a given font size. Descent is usually
/// negative.
pub trait FontMetrics {
    /// Distance from the baseline to the top of the font
    fn ascent(&self, size: Pt) -> Pt;

    /// Distance from the baseline to the bottom of the font, usually negative
    fn descent(&self, size: Pt) -> Pt;

    /// Extra space between lines
    fn leading(&self, size: Pt) -> Pt;

    /// Height of capital letters above the baseline
    fn cap_height(&self, size: Pt) -> Pt;

    /// Horizontal advance of `ch`
    fn advance(&self, ch: char, size: Pt) -> Pt;

    /// The glyph drawn for `ch`, if the font has one
    fn glyph_id(&self, ch: char) -> Option<u16>;

    /// How much to vertically offset a second row of text below a first row
    fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }
}

/// A parsed TTF or OTF font.
///
/// Fonts are only used to measure text and pick glyph ids; the content
/// stream refers to them as `/F{index}` and embedding them is up to whoever
/// assembles the final document.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be
    /// parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, GridError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, GridError> {
        Font::load(std::fs::read(path)?)
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if it has one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    /// Obtain the weight of the font. Numerical values generally map as follows:
    ///
    /// * 100: Thin (Hairline)
    /// * 400: Normal
    /// * 700: Bold
    /// * 900: Black (Heavy)
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Glyph for `ch`, falling back on the replacement character and then on
    /// `?`
    fn glyph_or_replacement(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }
}

impl FontMetrics for Font {
    fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Falls back on the ascent for faces without a cap height
    fn cap_height(&self, size: Pt) -> Pt {
        match self.face.as_face_ref().capital_height() {
            Some(height) => self.scaling(size) * height as f32,
            None => self.ascent(size),
        }
    }

    fn advance(&self, ch: char, size: Pt) -> Pt {
        let advance = self
            .glyph_or_replacement(ch)
            .and_then(|gid| self.face.as_face_ref().glyph_hor_advance(gid))
            .unwrap_or_default();
        self.scaling(size) * advance as f32
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }
}
