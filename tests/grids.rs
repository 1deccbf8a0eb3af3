mod common;

use common::{landscape_page, operations, text_positions};
use pdf_grid::layout::Margins;
use pdf_grid::pagesize::{self, PageOrientation};
use pdf_grid::{Area, BaselineGrid, Canvas, ColumnGrid, Grid, Guides, Pt, RowGrid, Slice};

fn landscape() -> (Pt, Pt) {
    pagesize::A4.landscape()
}

#[test]
fn columns_on_a_landscape_page() {
    let columns = ColumnGrid::new(Area::new(Pt(50.0), Pt(50.0), Pt(742.0), Pt(495.0)), 8, Pt(10.0));
    assert_eq!(columns.column_width(), Pt(84.0));

    // spans counted forward from the first column
    assert_eq!(columns.slot(0), Pt(50.0));
    assert_eq!(&columns * 1.0, Pt(84.0));
    assert_eq!(&columns * 3.0, Pt(272.0));
    assert_eq!(&columns * 7.0, Pt(648.0));
    assert_eq!(&columns * 8.0, Pt(742.0));

    // and backward from the far edge
    assert_eq!(columns.slot(-1), Pt(792.0));
    assert_eq!(&columns * -3.0, Pt(-272.0));
    assert_eq!(columns.slot(-1) + (&columns * -1.0), columns.slot(7));
}

#[test]
fn axes_from_page_margins() {
    let columns = ColumnGrid::from_margins(
        Margins::lbrt(Pt(-20.0), Pt(-100.0), Pt(-20.0), Pt(-50.0)),
        landscape(),
        6,
        Pt(20.0),
    );
    assert_eq!(columns.left(), Pt(20.0));
    assert_eq!(columns.column_width(), Pt(117.0));
    assert_eq!(columns.slot(5) + columns.column_width(), columns.right());

    let rows = RowGrid::from_margins(
        Margins::lbrt(Pt(-50.0), Pt(-150.0), Pt(-50.0), Pt(-50.0)),
        landscape(),
        4,
        Pt(5.0),
    );
    assert_eq!(rows.bottom(), Pt(150.0));
    assert_eq!(rows.row_height(), Pt(95.0));
    assert_eq!(rows.slots(..).unwrap(), vec![Pt(150.0), Pt(250.0), Pt(350.0), Pt(450.0)]);
    assert_eq!(
        rows.slots(Slice::reversed()).unwrap(),
        vec![Pt(450.0), Pt(350.0), Pt(250.0), Pt(150.0)]
    );
}

#[test]
fn zero_margins_cover_the_page() {
    let area = Area::from_margins(Margins::empty(), (Pt(1000.0), Pt(1000.0)));
    assert_eq!(area, Area::new(Pt(0.0), Pt(0.0), Pt(1000.0), Pt(1000.0)));
}

#[test]
fn grid_cells_and_spans() {
    let grid = Grid::from_margins(Margins::inset(Pt(50.0)), landscape(), 12, 4, Pt(5.0), Pt(5.0));
    assert_eq!(grid.len(), 48);
    assert_eq!(grid.iter().count(), 48);
    assert_eq!(grid.columns.column_width(), Pt(57.25));
    assert_eq!(grid.rows.row_height(), Pt(120.0));

    assert_eq!(grid.point(0, 0), (Pt(50.0), Pt(50.0)));
    assert_eq!(grid.point(3, -2), (Pt(236.75), Pt(420.0)));
    assert_eq!(&grid * (6.0, -3.0), (Pt(368.5), Pt(-370.0)));

    // row by row from the bottom
    let cells: Vec<(Pt, Pt)> = grid.iter().take(2).collect();
    assert_eq!(cells, vec![(Pt(50.0), Pt(50.0)), (Pt(112.25), Pt(50.0))]);
}

#[test]
fn nested_grid_inside_a_cell() {
    let main = Grid::from_margins(Margins::inset(Pt(50.0)), landscape(), 3, 2, Pt(5.0), Pt(5.0));
    let (x, y) = main.point(2, 1);
    let (width, height) = &main * (1.0, 1.0);

    let sub = Grid::new(Area::new(x, y, width, height), 4, 6, Pt(5.0), Pt(5.0));
    assert_eq!(sub.left(), x);
    assert_eq!(sub.right(), main.right());
    assert_eq!(sub.top(), main.top());
    assert_eq!(sub.len(), 24);
}

#[test]
fn baselines_from_page_margins() {
    let baselines = BaselineGrid::from_margins(Margins::inset(Pt(50.0)), landscape(), Pt(12.0));
    assert_eq!(baselines.len(), 42);
    assert_eq!(baselines.line(0), Pt(545.0));
    assert_eq!(baselines.line(-1), Pt(53.0));
    assert_eq!(baselines.bottom(), Pt(53.0));
    assert_eq!(baselines.height(), Pt(492.0));
    assert_eq!(&baselines * 2.0, Pt(-24.0));

    assert_eq!(baselines.closest_line_below_coordinate(Pt(540.0)), Some(Pt(533.0)));
    assert_eq!(baselines.closest_line_above_coordinate(Pt(540.0)), Some(Pt(545.0)));
    assert_eq!(baselines.baseline_index_from_coordinate(Pt(540.0)), Some(1));
    assert_eq!(baselines.closest_line_below_coordinate(Pt(40.0)), None);
}

#[test]
fn column_guides_are_stroked_rectangles() {
    let mut canvas = landscape_page();
    let columns = ColumnGrid::new(Area::new(Pt(50.0), Pt(50.0), Pt(742.0), Pt(495.0)), 8, Pt(10.0));
    columns.draw(&mut canvas, false);

    let ops = operations(&canvas.finish());
    assert_eq!(ops.iter().filter(|op| op.ends_with(" re")).count(), 8);
    assert!(ops.contains(&"50 50 84 495 re".to_string()));
    assert!(ops.contains(&"708 50 84 495 re".to_string()));
    assert_eq!(ops.iter().filter(|op| *op == "S").count(), 8);
    assert_eq!(ops.first().map(String::as_str), Some("q"));
    assert_eq!(ops.last().map(String::as_str), Some("Q"));
}

#[test]
fn guide_labels_sit_inside_their_slot() {
    let mut canvas = landscape_page();
    let rows = RowGrid::new(Area::new(Pt(50.0), Pt(50.0), Pt(742.0), Pt(495.0)), 4, Pt(5.0));
    rows.draw(&mut canvas, true);

    let content = canvas.finish();
    assert_eq!(
        text_positions(&content),
        vec![(52.0, 52.0), (52.0, 177.0), (52.0, 302.0), (52.0, 427.0)]
    );
    assert!(operations(&content).contains(&"/F0 5 Tf".to_string()));
}

#[test]
fn baseline_guides_draw_every_line() {
    let mut canvas = landscape_page();
    let baselines = BaselineGrid::from_margins(Margins::inset(Pt(50.0)), landscape(), Pt(12.0));
    baselines.draw(&mut canvas, false);

    let ops = operations(&canvas.finish());
    assert_eq!(ops.iter().filter(|op| op.ends_with(" m")).count(), 42);
    assert!(ops.contains(&"50 545 m".to_string()));
    assert!(ops.contains(&"792 53 l".to_string()));
}

#[test]
fn guides_without_a_font_only_draw_lines() {
    let mut canvas: pdf_grid::pdf::PdfCanvas<common::FixedFont> =
        pdf_grid::pdf::PdfCanvas::new(landscape());
    let grid = Grid::default_for(Area::new(Pt(0.0), Pt(0.0), Pt(800.0), Pt(800.0)));
    grid.draw(&mut canvas, true);
    assert_eq!(canvas.page_size(), landscape());

    let content = canvas.finish();
    assert!(text_positions(&content).is_empty());
    assert!(!operations(&content).is_empty());
}
