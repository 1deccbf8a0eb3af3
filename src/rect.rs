use crate::units::*;

/// A rectangle, specified by two opposite corners.
///
/// Rectangles built from an origin and a negative extent are "flipped": their
/// second corner lies below or left of the first one. Use [`Rect::normalized`]
/// before doing anything that depends on direction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: Pt,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: Pt,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: Pt,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: Pt,
}

impl Rect {
    /// Build a rectangle from an origin and an extent. Either extent may be
    /// negative.
    pub fn from_xywh<X, Y, W, H>(x: X, y: Y, width: W, height: H) -> Rect
    where
        X: Into<Pt>,
        Y: Into<Pt>,
        W: Into<Pt>,
        H: Into<Pt>,
    {
        let (x, y) = (x.into(), y.into());
        Rect {
            x1: x,
            y1: y,
            x2: x + width.into(),
            y2: y + height.into(),
        }
    }

    pub fn x(&self) -> Pt {
        self.x1
    }

    pub fn y(&self) -> Pt {
        self.y1
    }

    /// Signed width, negative for horizontally flipped rectangles
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    /// Signed height, negative for vertically flipped rectangles
    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }

    /// The same rectangle with its first corner at the lower left
    pub fn normalized(&self) -> Rect {
        Rect {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Move the rectangle without resizing it
    pub fn translated(&self, dx: Pt, dy: Pt) -> Rect {
        Rect {
            x1: self.x1 + dx,
            y1: self.y1 + dy,
            x2: self.x2 + dx,
            y2: self.y2 + dy,
        }
    }

    /// Grow (positive) or shrink (negative) every side of a normalized
    /// rectangle
    pub fn outset(&self, horizontal: Pt, vertical: Pt) -> Rect {
        let r = self.normalized();
        Rect {
            x1: r.x1 - horizontal,
            y1: r.y1 - vertical,
            x2: r.x2 + horizontal,
            y2: r.y2 + vertical,
        }
    }
}

impl<X, Y, W, H> From<(X, Y, W, H)> for Rect
where
    X: Into<Pt>,
    Y: Into<Pt>,
    W: Into<Pt>,
    H: Into<Pt>,
{
    fn from((x, y, w, h): (X, Y, W, H)) -> Self {
        Rect::from_xywh(x, y, w, h)
    }
}
