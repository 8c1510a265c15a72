use crate::config::{Rgba, BORDER, BORDER_RADIUS, GRID_LINE};
use crate::grid::Grid;
use crate::rules::Cell;
use egui::{Color32, Pos2, Rect, Shape, Stroke, Vec2};

pub const LINE_WIDTH: f32 = 1.0;

pub fn color(rgba: Rgba) -> Color32 {
    let [r, g, b, a] = rgba;
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Colour of a cell: transparent when dead, bright and mostly opaque when alive.
pub fn cell_color(cell: Cell) -> Color32 {
    let v = cell.value();
    Color32::from_rgba_unmultiplied(v * 255, v * 255, v * 255, v * 155)
}

/// Maps between window pixels and grid indices.
///
/// The grid sits one cell in from the window's top-left corner and leaves a
/// one-cell margin on the far sides, so a window of `w` pixels holds
/// `w / cell_size - 2` cells along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            width,
            height,
            cell_size,
            rows: (width / cell_size).saturating_sub(2) as usize,
            cols: (height / cell_size).saturating_sub(2) as usize,
        }
    }

    /// Cell under the pixel `(x, y)`, or `None` outside the grid.
    ///
    /// Uses `(p - cell_size) / cell_size` with floor division, matching the
    /// one-cell offset used by [`Layout::cell_rect`].
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let cs = i64::from(self.cell_size);
        let to_index = |p: f64, limit: usize| -> Option<usize> {
            if !p.is_finite() {
                return None;
            }
            // `as` saturates huge coordinates, so the offset must saturate too.
            let idx = (p.floor() as i64).saturating_sub(cs).div_euclid(cs);
            usize::try_from(idx).ok().filter(|&idx| idx < limit)
        };
        Some((to_index(x, self.rows)?, to_index(y, self.cols)?))
    }

    /// Screen rectangle of cell `(i, j)`, inset by one pixel on every side.
    pub fn cell_rect(&self, i: usize, j: usize) -> Rect {
        let cs = self.cell_size as f32;
        Rect::from_min_size(
            Pos2::new(cs + cs * i as f32 + 1.0, cs + cs * j as f32 + 1.0),
            Vec2::splat(cs - 2.0),
        )
    }
}

/// Static grid lines plus the rounded window border. Depends only on the layout.
pub fn grid_shapes(layout: &Layout) -> Vec<Shape> {
    let cs = layout.cell_size as f32;
    let (w, h) = (layout.width as f32, layout.height as f32);
    let stroke = Stroke::new(LINE_WIDTH, color(GRID_LINE));
    let mut shapes = Vec::new();

    for k in 1..layout.height / layout.cell_size {
        let y = cs * k as f32;
        shapes.push(Shape::line_segment([Pos2::new(cs, y), Pos2::new(w - cs, y)], stroke));
    }
    for k in 1..layout.width / layout.cell_size {
        let x = cs * k as f32;
        shapes.push(Shape::line_segment([Pos2::new(x, cs), Pos2::new(x, h - cs)], stroke));
    }

    let border = Rect::from_min_max(Pos2::ZERO, Pos2::new(w - 2.0, h - 2.0));
    shapes.push(Shape::rect_stroke(border, BORDER_RADIUS, Stroke::new(LINE_WIDTH, color(BORDER))));
    shapes
}

/// One filled rectangle per cell, dead cells included.
pub fn cell_shapes(layout: &Layout, grid: &Grid) -> Vec<Shape> {
    grid.iter()
        .map(|(i, j, cell)| Shape::rect_filled(layout.cell_rect(i, j), 0.0, cell_color(cell)))
        .collect()
}

/// Full draw list for one frame, in paint order.
pub fn frame_shapes(layout: &Layout, grid: &Grid) -> Vec<Shape> {
    let mut shapes = grid_shapes(layout);
    shapes.extend(cell_shapes(layout, grid));
    shapes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_leave_a_cell_margin() {
        let layout = Layout::new(1200, 1000, 20);
        assert_eq!((layout.rows, layout.cols), (58, 48));
    }

    #[test]
    fn tiny_window_has_no_cells() {
        let layout = Layout::new(30, 30, 20);
        assert_eq!((layout.rows, layout.cols), (0, 0));
        assert_eq!(layout.cell_at(25.0, 25.0), None);
    }

    #[test]
    fn click_maps_through_cell_offset() {
        let layout = Layout::new(1200, 1200, 20);
        assert_eq!(layout.cell_at(20.0, 20.0), Some((0, 0)));
        assert_eq!(layout.cell_at(39.9, 59.0), Some((0, 1)));
        assert_eq!(layout.cell_at(125.0, 47.0), Some((5, 1)));
        assert_eq!(layout.cell_at(1179.0, 1179.0), Some((57, 57)));
    }

    #[test]
    fn clicks_in_margin_are_outside() {
        let layout = Layout::new(1200, 1200, 20);
        assert_eq!(layout.cell_at(10.0, 100.0), None);
        assert_eq!(layout.cell_at(100.0, 0.0), None);
        assert_eq!(layout.cell_at(1180.0, 100.0), None);
        assert_eq!(layout.cell_at(-5.0, -5.0), None);
        assert_eq!(layout.cell_at(f64::NAN, 100.0), None);
        assert_eq!(layout.cell_at(f64::MIN, 100.0), None);
        assert_eq!(layout.cell_at(-1e300, 100.0), None);
        assert_eq!(layout.cell_at(100.0, f64::MAX), None);
    }

    #[test]
    fn click_lands_inside_drawn_rect() {
        let layout = Layout::new(400, 300, 20);
        for (i, j) in [(0, 0), (3, 7), (17, 12)] {
            let center = layout.cell_rect(i, j).center();
            assert_eq!(layout.cell_at(center.x as f64, center.y as f64), Some((i, j)));
        }
    }

    #[test]
    fn cell_colors() {
        assert_eq!(cell_color(Cell::Dead), Color32::TRANSPARENT);
        assert_eq!(cell_color(Cell::Alive), Color32::from_rgba_unmultiplied(255, 255, 255, 155));
    }
}
