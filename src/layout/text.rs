//! Text boxes aligned to baseline grids, and text poured through columns.
//!
//! The canvas wraps and draws the text; everything here only decides where
//! the box goes. Each function measures the baselines the canvas would
//! produce, works out how far the box has to move so those baselines land
//! where they should, then draws the text in the shifted box and returns
//! whatever did not fit.

use crate::area::Area;
use crate::axis::ColumnGrid;
use crate::baseline::BaselineGrid;
use crate::canvas::{Canvas, HorizontalAlign};
use crate::colour::colours;
use crate::rect::Rect;
use crate::units::Pt;
use crate::GridError;
use log::{debug, trace};
use std::str::FromStr;

/// Where the lines of a text box sit vertically
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VerticalAlign {
    #[default]
    Top,
    Bottom,
    Center,
}

impl FromStr for VerticalAlign {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(VerticalAlign::Top),
            "bottom" => Ok(VerticalAlign::Bottom),
            "center" => Ok(VerticalAlign::Center),
            _ => Err(GridError::InvalidVerticalAlign(s.to_string())),
        }
    }
}

/// Whether text boxes are drawn, or only measured for their overflow
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum DrawMode {
    #[default]
    Draw,
    MeasureOnly,
}

impl DrawMode {
    /// Draw `text` into `rect` (or pretend to), returning the overflow
    pub fn text_box<C: Canvas>(
        self,
        canvas: &mut C,
        text: &str,
        rect: Rect,
        align: HorizontalAlign,
    ) -> String {
        match self {
            DrawMode::Draw => canvas.text_box(text, rect, align),
            DrawMode::MeasureOnly => canvas.text_overflow(text, rect, align),
        }
    }
}

/// Options for [`baseline_grid_text_box`] and [`vertical_align_text_box`]
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TextBoxOptions {
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    /// Only snap the aligned line to the grid, keep the font's own line
    /// height for the others
    pub align_first_line_only: bool,
    pub mode: DrawMode,
}

impl TextBoxOptions {
    pub fn new() -> TextBoxOptions {
        TextBoxOptions::default()
    }

    pub fn align(&mut self, align: HorizontalAlign) -> &mut Self {
        self.align = align;
        self
    }

    pub fn vertical_align(&mut self, vertical_align: VerticalAlign) -> &mut Self {
        self.vertical_align = vertical_align;
        self
    }

    pub fn align_first_line_only(&mut self, align_first_line_only: bool) -> &mut Self {
        self.align_first_line_only = align_first_line_only;
        self
    }

    pub fn mode(&mut self, mode: DrawMode) -> &mut Self {
        self.mode = mode;
        self
    }
}

/// Options for [`column_text_box`] and [`column_baseline_grid_text_box`]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnOptions {
    pub subdivisions: usize,
    pub gutter: Pt,
    pub align: HorizontalAlign,
    pub align_first_line_only: bool,
    /// Draw the columns and the path the text takes between them
    pub draw_grid: bool,
    pub mode: DrawMode,
}

impl Default for ColumnOptions {
    fn default() -> Self {
        ColumnOptions {
            subdivisions: 2,
            gutter: Pt(10.0),
            align: HorizontalAlign::default(),
            align_first_line_only: false,
            draw_grid: false,
            mode: DrawMode::default(),
        }
    }
}

impl ColumnOptions {
    pub fn new() -> ColumnOptions {
        ColumnOptions::default()
    }

    pub fn subdivisions(&mut self, subdivisions: usize) -> &mut Self {
        self.subdivisions = subdivisions;
        self
    }

    pub fn gutter(&mut self, gutter: Pt) -> &mut Self {
        self.gutter = gutter;
        self
    }

    pub fn align(&mut self, align: HorizontalAlign) -> &mut Self {
        self.align = align;
        self
    }

    pub fn align_first_line_only(&mut self, align_first_line_only: bool) -> &mut Self {
        self.align_first_line_only = align_first_line_only;
        self
    }

    pub fn draw_grid(&mut self, draw_grid: bool) -> &mut Self {
        self.draw_grid = draw_grid;
        self
    }

    pub fn mode(&mut self, mode: DrawMode) -> &mut Self {
        self.mode = mode;
        self
    }
}

/// Install a line height that puts consecutive baselines exactly
/// `baseline_height` apart, and return it.
///
/// Fonts with unusual vertical metrics don't space baselines by the line
/// height they were given, so the spacing is measured once and corrected.
pub fn set_baseline_height<C: Canvas>(canvas: &mut C, baseline_height: Pt) -> Pt {
    canvas.save_state();
    canvas.set_line_height(baseline_height);
    let lines = canvas.text_box_baselines(
        "H\nH",
        Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(10000.0), Pt(10000.0)),
    );
    canvas.restore_state();

    let measured = match lines.as_slice() {
        [first, second, ..] => first.1 - second.1,
        _ => baseline_height,
    };
    let required = baseline_height * 2.0 - measured;
    debug!("baseline height {baseline_height} needs a line height of {required}");

    canvas.set_line_height(required);
    required
}

/// Vertical distance that moves the baselines of `text` in `rect` onto `grid`
fn baseline_grid_shift<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    grid: &BaselineGrid,
    vertical_align: VerticalAlign,
) -> Pt {
    let baselines = canvas.text_box_baselines(text, rect);
    let (Some(first), Some(last)) = (baselines.first(), baselines.last()) else {
        return Pt(0.0);
    };
    let cap_height = canvas.cap_height();

    let (target, current) = match vertical_align {
        VerticalAlign::Top => (grid.closest_line_below_coordinate(rect.y2 - cap_height), first.1),
        VerticalAlign::Bottom => (grid.closest_line_above_coordinate(rect.y1), last.1),
        VerticalAlign::Center => (
            grid.closest_line_below_coordinate(
                rect.y1 + rect.height() / 2.0 - cap_height / 2.0,
            ),
            baselines[baselines.len() / 2].1,
        ),
    };

    match target {
        Some(target) => target - current,
        None => {
            debug!("no baseline to align {vertical_align:?} to, leaving text in place");
            Pt(0.0)
        }
    }
}

/// Draw `text` in `rect` so its lines sit on the lines of `grid`.
///
/// Unless `align_first_line_only` is set, the line height is rounded up to a
/// whole number of grid lines first, so every line lands on the grid. The
/// line height change is undone before returning.
///
/// Returns the text that did not fit.
pub fn baseline_grid_text_box<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    grid: &BaselineGrid,
    options: &TextBoxOptions,
) -> String {
    let rect = rect.normalized();
    canvas.save_state();

    if !options.align_first_line_only {
        let pitch = grid.line_height();
        let target = pitch * (canvas.font_line_height() / pitch).ceil();
        set_baseline_height(canvas, target);
    }

    let shift = baseline_grid_shift(canvas, text, rect, grid, options.vertical_align);
    trace!("shifting text box by {shift} to align it on the baseline grid");

    let overflow = options
        .mode
        .text_box(canvas, text, rect.translated(Pt(0.0), shift), options.align);
    canvas.restore_state();
    overflow
}

/// Draw `text` in `rect` with its first line's capitals touching the top,
/// its last baseline on the bottom, or its lines centred in between.
///
/// Returns the text that did not fit.
pub fn vertical_align_text_box<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    options: &TextBoxOptions,
) -> String {
    let rect = rect.normalized();
    let baselines = canvas.text_box_baselines(text, rect);
    let cap_height = canvas.cap_height();

    let shift = match (baselines.first(), baselines.last()) {
        (Some(first), Some(last)) => match options.vertical_align {
            VerticalAlign::Top => rect.y2 - cap_height - first.1,
            VerticalAlign::Bottom => rect.y1 - last.1,
            VerticalAlign::Center => {
                let text_top = first.1 + cap_height;
                let text_bottom = last.1;
                let margin = (rect.height() - (text_top - text_bottom)) / 2.0;
                rect.y1 + margin - text_bottom
            }
        },
        _ => Pt(0.0),
    };
    trace!("shifting text box by {shift}");

    options
        .mode
        .text_box(canvas, text, rect.translated(Pt(0.0), shift), options.align)
}

/// Pour `text` through the columns of `rect`: whatever overflows a column
/// continues at the top of the next one.
///
/// Returns the text that did not fit in the last column.
pub fn column_text_box<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    options: &ColumnOptions,
) -> String {
    column_flow(canvas, text, rect, None, options)
}

/// Same as [`column_text_box`], with the text of every column top aligned on
/// `grid` like [`baseline_grid_text_box`] does
pub fn column_baseline_grid_text_box<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    grid: &BaselineGrid,
    options: &ColumnOptions,
) -> String {
    column_flow(canvas, text, rect, Some(grid), options)
}

fn column_flow<C: Canvas>(
    canvas: &mut C,
    text: &str,
    rect: Rect,
    grid: Option<&BaselineGrid>,
    options: &ColumnOptions,
) -> String {
    let rect = rect.normalized();
    let columns = ColumnGrid::new(Area::from_rect(rect), options.subdivisions, options.gutter);
    let text_options = TextBoxOptions {
        align: options.align,
        vertical_align: VerticalAlign::Top,
        align_first_line_only: options.align_first_line_only,
        mode: options.mode,
    };

    let mut overflow = text.to_string();
    for (i, x) in columns.iter().enumerate() {
        if overflow.is_empty() {
            break;
        }
        trace!("pouring {} bytes of text into column {i}", overflow.len());

        let slot = Rect::from_xywh(x, columns.bottom(), columns.column_width(), columns.height());
        overflow = match grid {
            Some(grid) => baseline_grid_text_box(canvas, &overflow, slot, grid, &text_options),
            None => options.mode.text_box(canvas, &overflow, slot, options.align),
        };
    }

    if options.draw_grid {
        draw_text_flow(canvas, rect, &columns);
    }

    overflow
}

/// Length of the handles of the curves linking two columns
const FLOW_HANDLE: Pt = Pt(100.0);

/// Frame the columns and link the bottom of each column to the top of the
/// next one
fn draw_text_flow<C: Canvas>(canvas: &mut C, rect: Rect, columns: &ColumnGrid) {
    let colour = colours::TEXT_FLOW_GUIDE;
    let gutter = columns.gutter();
    let (bottom, top) = (columns.bottom(), columns.top());

    canvas.save_state();
    canvas.set_stroke_width(Pt(0.5));
    canvas.set_fill(None);
    canvas.set_stroke(Some(colour));
    canvas.rect(rect);

    for x in columns.iter().skip(1) {
        canvas.line((x - gutter, bottom), (x - gutter, top));
        canvas.line((x, bottom), (x, top));
    }

    for x in columns.iter().skip(1) {
        let start = (x - gutter, bottom);
        let end = (x, top);

        canvas.set_fill(None);
        canvas.set_stroke(Some(colour));
        canvas.curve(
            start,
            (start.0 + FLOW_HANDLE, start.1),
            (end.0 - FLOW_HANDLE, end.1),
            end,
        );

        canvas.set_stroke(None);
        canvas.set_fill(Some(colour));
        draw_point(canvas, start, Pt(4.0));
        draw_point(canvas, end, Pt(4.0));
    }
    canvas.restore_state();
}

fn draw_point<C: Canvas>(canvas: &mut C, (x, y): (Pt, Pt), radius: Pt) {
    canvas.oval(Rect::from_xywh(x - radius, y - radius, radius * 2.0, radius * 2.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::PdfCanvas;
    use crate::testing::FixedFont;

    fn new_canvas() -> PdfCanvas<FixedFont> {
        let mut canvas = PdfCanvas::new((Pt(300.0), Pt(300.0)));
        let font = canvas.add_font(FixedFont);
        canvas.set_font(font);
        canvas
    }

    fn stream(canvas: PdfCanvas<FixedFont>) -> String {
        String::from_utf8_lossy(&canvas.finish()).into_owned()
    }

    fn grid() -> BaselineGrid {
        BaselineGrid::new(Area::new(Pt(0.0), Pt(0.0), Pt(200.0), Pt(200.0)), Pt(12.0))
    }

    fn rect() -> Rect {
        Rect::from_xywh(Pt(10.0), Pt(20.0), Pt(100.0), Pt(150.0))
    }

    fn numbered_lines(count: usize) -> String {
        (0..count)
            .map(|i| format!("l{i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn vertical_alignment_keywords() {
        assert_eq!("bottom".parse::<VerticalAlign>().ok(), Some(VerticalAlign::Bottom));
        assert!(matches!(
            "middle".parse::<VerticalAlign>(),
            Err(GridError::InvalidVerticalAlign(k)) if k == "middle"
        ));
    }

    #[test]
    fn baseline_height_is_calibrated() {
        let mut canvas = new_canvas();
        assert_eq!(set_baseline_height(&mut canvas, Pt(12.0)), Pt(12.0));

        let baselines = canvas.text_box_baselines("H\nH", rect());
        assert_eq!(baselines[0].1 - baselines[1].1, Pt(12.0));
    }

    #[test]
    fn top_alignment_snaps_below_the_cap_height() {
        let mut canvas = new_canvas();
        // cap height 7 below the top at 170 is 163, the grid line below is 152
        let overflow =
            baseline_grid_text_box(&mut canvas, "Hello\nWorld", rect(), &grid(), &TextBoxOptions::new());
        assert!(overflow.is_empty());

        let content = stream(canvas);
        assert!(content.contains("10 152 Td"));
        assert!(content.contains("10 140 Td"));
    }

    #[test]
    fn bottom_alignment_sits_on_the_box_bottom() {
        let mut canvas = new_canvas();
        baseline_grid_text_box(
            &mut canvas,
            "Hello\nWorld",
            rect(),
            &grid(),
            TextBoxOptions::new().vertical_align(VerticalAlign::Bottom),
        );

        let content = stream(canvas);
        assert!(content.contains("10 32 Td"));
        assert!(content.contains("10 20 Td"));
    }

    #[test]
    fn center_alignment_puts_the_middle_line_on_the_grid() {
        let mut canvas = new_canvas();
        baseline_grid_text_box(
            &mut canvas,
            "Hello\nWorld\nAgain",
            rect(),
            &grid(),
            TextBoxOptions::new().vertical_align(VerticalAlign::Center),
        );

        let content = stream(canvas);
        assert!(content.contains("10 92 Td"));
        assert!(content.contains("10 80 Td"));
        assert!(content.contains("10 68 Td"));
    }

    #[test]
    fn first_line_only_keeps_the_font_line_height() {
        let mut canvas = new_canvas();
        baseline_grid_text_box(
            &mut canvas,
            "Hello\nWorld",
            rect(),
            &grid(),
            TextBoxOptions::new().align_first_line_only(true),
        );

        let content = stream(canvas);
        assert!(content.contains("10 152 Td"));
        assert!(content.contains("10 142 Td"));
    }

    #[test]
    fn line_height_change_does_not_leak() {
        let mut canvas = new_canvas();
        baseline_grid_text_box(&mut canvas, "Hello", rect(), &grid(), &TextBoxOptions::new());

        let baselines = canvas.text_box_baselines("H\nH", rect());
        assert_eq!(baselines[0].1 - baselines[1].1, Pt(10.0));
    }

    #[test]
    fn empty_text_is_left_alone() {
        let mut canvas = new_canvas();
        let overflow = baseline_grid_text_box(&mut canvas, "", rect(), &grid(), &TextBoxOptions::new());
        assert!(overflow.is_empty());
        assert!(!stream(canvas).contains("Td"));
    }

    #[test]
    fn plain_vertical_alignment() {
        let mut canvas = new_canvas();
        vertical_align_text_box(&mut canvas, "Hello\nWorld", rect(), &TextBoxOptions::new());
        let content = stream(canvas);
        assert!(content.contains("10 163 Td"));
        assert!(content.contains("10 153 Td"));

        let mut canvas = new_canvas();
        vertical_align_text_box(
            &mut canvas,
            "Hello\nWorld",
            rect(),
            TextBoxOptions::new().vertical_align(VerticalAlign::Bottom),
        );
        let content = stream(canvas);
        assert!(content.contains("10 30 Td"));
        assert!(content.contains("10 20 Td"));

        let mut canvas = new_canvas();
        vertical_align_text_box(
            &mut canvas,
            "Hello\nWorld",
            rect(),
            TextBoxOptions::new().vertical_align(VerticalAlign::Center),
        );
        let content = stream(canvas);
        assert!(content.contains("10 96.5 Td"));
        assert!(content.contains("10 86.5 Td"));
    }

    #[test]
    fn measuring_draws_nothing() {
        let mut canvas = new_canvas();
        let short = Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(100.0), Pt(20.0));
        let overflow = vertical_align_text_box(
            &mut canvas,
            "one\ntwo\nthree",
            short,
            TextBoxOptions::new().mode(DrawMode::MeasureOnly),
        );
        assert_eq!(overflow, "three");
        assert!(!stream(canvas).contains("Td"));
    }

    #[test]
    fn columns_chain_their_overflow() {
        let mut canvas = new_canvas();
        // two 100pt columns, 10 lines each
        let rect = Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(210.0), Pt(100.0));

        let overflow = column_text_box(&mut canvas, &numbered_lines(15), rect, &ColumnOptions::new());
        assert!(overflow.is_empty());

        let overflow = column_text_box(&mut canvas, &numbered_lines(25), rect, &ColumnOptions::new());
        assert_eq!(overflow, "l20\nl21\nl22\nl23\nl24");

        let content = stream(canvas);
        assert!(content.contains("0 92 Td"));
        assert!(content.contains("110 92 Td"));
    }

    #[test]
    fn empty_text_pours_nowhere() {
        let mut canvas = new_canvas();
        let rect = Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(210.0), Pt(100.0));
        assert!(column_text_box(&mut canvas, "", rect, &ColumnOptions::new()).is_empty());
        assert!(!stream(canvas).contains("Td"));
    }

    #[test]
    fn baseline_columns_align_every_column() {
        let mut canvas = new_canvas();
        let rect = Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(210.0), Pt(100.0));
        let grid = BaselineGrid::new(Area::from_rect(rect), Pt(12.0));

        // 12pt lines shifted down to 88 leave room for 8 lines per column
        let overflow = column_baseline_grid_text_box(
            &mut canvas,
            &numbered_lines(20),
            rect,
            &grid,
            &ColumnOptions::new(),
        );
        assert_eq!(overflow, "l16\nl17\nl18\nl19");

        let content = stream(canvas);
        assert!(content.contains("0 88 Td"));
        assert!(content.contains("110 88 Td"));
    }

    #[test]
    fn text_flow_overlay() {
        let mut canvas = new_canvas();
        let rect = Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(210.0), Pt(100.0));
        column_text_box(
            &mut canvas,
            "text",
            rect,
            ColumnOptions::new().draw_grid(true).mode(DrawMode::MeasureOnly),
        );

        let content = stream(canvas);
        assert!(content.contains("0.5 0 0.8 RG"));
        // the curve leaves the bottom of the first column for the top of the second
        assert!(content.contains("100 0 m"));
        assert!(content.contains("200 0 10 100 110 100 c"));
    }
}
