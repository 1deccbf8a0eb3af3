/// A fill or stroke colour in one of the PDF device colour spaces. Every
/// component ranges from 0.0 to 1.0.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    RGB { r: f32, g: f32, b: f32 },
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    Grey { g: f32 },
}

impl Colour {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    pub const fn cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    pub const fn grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// An RGB colour from 8 bit components, as found in hex codes
    pub fn rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        let unit = |v: u8| f32::from(v) / 255.0;
        Colour::rgb(unit(r), unit(g), unit(b))
    }
}

/// A single value is a grey level: `0.0` is black
impl From<f32> for Colour {
    fn from(g: f32) -> Self {
        Colour::grey(g)
    }
}

impl From<(f32, f32, f32)> for Colour {
    fn from((r, g, b): (f32, f32, f32)) -> Self {
        Colour::rgb(r, g, b)
    }
}

impl From<(f32, f32, f32, f32)> for Colour {
    fn from((c, m, y, k): (f32, f32, f32, f32)) -> Self {
        Colour::cmyk(c, m, y, k)
    }
}

/// Colours used by the crate itself
pub mod colours {
    use super::Colour;

    pub const BLACK: Colour = Colour::grey(0.0);
    pub const WHITE: Colour = Colour::grey(1.0);

    /// Column, row and composite grid guides
    pub const GRID_GUIDE: Colour = Colour::rgb(1.0, 0.0, 1.0);

    /// Baseline grid guides
    pub const BASELINE_GUIDE: Colour = Colour::rgb(0.0, 1.0, 1.0);

    /// Text flow overlay of column text boxes
    pub const TEXT_FLOW_GUIDE: Colour = Colour::rgb(0.5, 0.0, 0.8);
}
