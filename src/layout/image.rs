//! Placing images inside boxes.

use crate::canvas::Canvas;
use crate::colour::colours;
use crate::rect::Rect;
use crate::units::Pt;
use crate::GridError;
use log::debug;
use std::str::FromStr;

/// How an image is scaled into its box
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Fitting {
    /// Scale the image so it is entirely visible
    #[default]
    Fit,
    /// Scale the image so it covers the whole box, clipping the excess
    Fill,
    /// Use an explicit scale, clipping whatever falls outside the box
    Crop,
}

impl FromStr for Fitting {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(Fitting::Fit),
            "fill" => Ok(Fitting::Fill),
            "crop" => Ok(Fitting::Crop),
            _ => Err(GridError::InvalidFitting(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    #[default]
    Center,
    Right,
}

impl HorizontalAnchor {
    /// Offset from the left edge of the box, given the horizontal space left
    /// over by the image
    fn offset(self, free: Pt) -> Pt {
        match self {
            HorizontalAnchor::Left => Pt(0.0),
            HorizontalAnchor::Center => free / 2.0,
            HorizontalAnchor::Right => free,
        }
    }
}

impl FromStr for HorizontalAnchor {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(HorizontalAnchor::Left),
            "center" => Ok(HorizontalAnchor::Center),
            "right" => Ok(HorizontalAnchor::Right),
            _ => Err(GridError::InvalidAnchor(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VerticalAnchor {
    Bottom,
    #[default]
    Center,
    Top,
}

impl VerticalAnchor {
    /// Offset from the bottom edge of the box, given the vertical space left
    /// over by the image
    fn offset(self, free: Pt) -> Pt {
        match self {
            VerticalAnchor::Bottom => Pt(0.0),
            VerticalAnchor::Center => free / 2.0,
            VerticalAnchor::Top => free,
        }
    }
}

impl FromStr for VerticalAnchor {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bottom" => Ok(VerticalAnchor::Bottom),
            "center" => Ok(VerticalAnchor::Center),
            "top" => Ok(VerticalAnchor::Top),
            _ => Err(GridError::InvalidAnchor(s.to_string())),
        }
    }
}

/// The point of the box an image sticks to
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl Anchor {
    pub fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Anchor {
        Anchor {
            horizontal,
            vertical,
        }
    }

    /// Parse a pair of keywords such as `("left", "top")`. Keywords are case
    /// sensitive.
    pub fn parse(horizontal: &str, vertical: &str) -> Result<Anchor, GridError> {
        Ok(Anchor {
            horizontal: horizontal.parse()?,
            vertical: vertical.parse()?,
        })
    }
}

/// Options for [`image_box`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageBoxOptions {
    pub fitting: Fitting,
    pub anchor: Anchor,
    /// Scale of the image when cropping, ignored otherwise
    pub scale: f32,
    /// Stroke the box the image was placed in
    pub draw_box_frame: bool,
}

impl Default for ImageBoxOptions {
    fn default() -> Self {
        ImageBoxOptions {
            fitting: Fitting::default(),
            anchor: Anchor::default(),
            scale: 1.0,
            draw_box_frame: false,
        }
    }
}

impl ImageBoxOptions {
    pub fn new() -> ImageBoxOptions {
        ImageBoxOptions::default()
    }

    pub fn fitting(&mut self, fitting: Fitting) -> &mut Self {
        self.fitting = fitting;
        self
    }

    pub fn anchor(&mut self, anchor: Anchor) -> &mut Self {
        self.anchor = anchor;
        self
    }

    pub fn scale(&mut self, scale: f32) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn draw_box_frame(&mut self, draw_box_frame: bool) -> &mut Self {
        self.draw_box_frame = draw_box_frame;
        self
    }
}

/// Draw `image` inside `rect`, scaled according to `options.fitting` and
/// stuck to `options.anchor`. Filled and cropped images are clipped to the
/// box.
///
/// Returns where the image itself was placed, which may extend past `rect`.
pub fn image_box<C: Canvas>(
    canvas: &mut C,
    image: &C::Image,
    rect: Rect,
    options: &ImageBoxOptions,
) -> Rect {
    let rect = rect.normalized();
    let (image_width, image_height) = canvas.image_info(image).size();
    let horizontal_scale = rect.width() / image_width;
    let vertical_scale = rect.height() / image_height;

    let scale = match options.fitting {
        Fitting::Fit => horizontal_scale.min(vertical_scale),
        Fitting::Fill => horizontal_scale.max(vertical_scale),
        Fitting::Crop => options.scale,
    };

    let (width, height) = (image_width * scale, image_height * scale);
    let placed = Rect::from_xywh(
        rect.x1 + options.anchor.horizontal.offset(rect.width() - width),
        rect.y1 + options.anchor.vertical.offset(rect.height() - height),
        width,
        height,
    );
    debug!("image placed at {placed:?} with a scale of {scale}");

    canvas.save_state();
    if options.fitting != Fitting::Fit {
        canvas.clip(rect);
    }
    canvas.image(image, placed);
    canvas.restore_state();

    if options.draw_box_frame {
        canvas.save_state();
        canvas.set_fill(None);
        canvas.set_stroke(Some(colours::BLACK));
        canvas.rect(rect);
        canvas.restore_state();
    }

    placed
}

/// Draw `image` at the size of `rect`, from its lower left corner.
///
/// A zero width or height is worked out from the other one and the aspect
/// ratio of the image; with both zero the image is drawn at its own size.
/// Otherwise the image is stretched to the box, unless
/// `preserve_proportions` is set, in which case it is scaled to fit.
///
/// Returns where the image was placed.
pub fn image_at_size<C: Canvas>(
    canvas: &mut C,
    image: &C::Image,
    rect: Rect,
    preserve_proportions: bool,
) -> Rect {
    let rect = rect.normalized();
    let (image_width, image_height) = canvas.image_info(image).size();
    let (width, height) = (rect.width(), rect.height());

    let (width, height) = match (width == Pt(0.0), height == Pt(0.0)) {
        (true, true) => (image_width, image_height),
        (true, false) => (height * (image_width / image_height), height),
        (false, true) => (width, width * (image_height / image_width)),
        (false, false) if preserve_proportions => {
            let scale = (width / image_width).min(height / image_height);
            (image_width * scale, image_height * scale)
        }
        (false, false) => (width, height),
    };

    let placed = Rect::from_xywh(rect.x1, rect.y1, width, height);
    debug!("image placed at {placed:?}");
    canvas.image(image, placed);
    placed
}
