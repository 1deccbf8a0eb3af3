use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::units::Pt;

/// Anything that can draw itself as a visual guide: grids draw their slots,
/// baseline grids their lines.
pub trait Guides {
    /// Stroke the outline of every slot
    fn draw_frame<C: Canvas>(&self, canvas: &mut C);

    /// Label every slot with its index
    fn draw_indexes<C: Canvas>(&self, canvas: &mut C);

    fn guide_colour(&self) -> Colour {
        colours::GRID_GUIDE
    }

    /// Draw the guides with a thin stroke, optionally labelling every slot
    fn draw<C: Canvas>(&self, canvas: &mut C, show_index: bool) {
        let colour = self.guide_colour();

        canvas.save_state();
        canvas.set_stroke(Some(colour));
        canvas.set_fill(None);
        canvas.set_stroke_width(Pt(0.5));
        self.draw_frame(canvas);
        canvas.restore_state();

        if show_index {
            canvas.save_state();
            canvas.set_stroke(None);
            canvas.set_fill(Some(colour));
            canvas.set_font_size(Pt(5.0));
            self.draw_indexes(canvas);
            canvas.restore_state();
        }
    }
}
