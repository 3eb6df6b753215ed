use raylib::prelude::*;

/// Drawing surface the projectors render into.
///
/// Coordinates are integer pixels and colors are opaque RGB. The surface size
/// is read once at startup and never changes afterwards.
pub trait Canvas {
    /// Fill the whole surface with black
    fn clear(&mut self);

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color);

    /// Outline of a rectangle
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color);
}

/// Raylib presents the frame when the draw handle is dropped
impl Canvas for RaylibDrawHandle<'_> {
    fn clear(&mut self) {
        RaylibDraw::clear_background(self, Color::BLACK);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        RaylibDraw::draw_line(self, x1, y1, x2, y2, color);
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        RaylibDraw::draw_rectangle_lines(self, x, y, w, h, color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        RaylibDraw::draw_rectangle(self, x, y, w, h, color);
    }
}

/// Canvas that records every call, for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub enum DrawOp {
    Clear,
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Color },
    Rect { x: i32, y: i32, w: i32, h: i32, color: Color },
    FillRect { x: i32, y: i32, w: i32, h: i32, color: Color },
}

#[cfg(test)]
impl RecordingCanvas {
    pub fn lines(&self) -> Vec<(i32, i32, i32, i32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Line { x1, y1, x2, y2, color } => Some((x1, y1, x2, y2, color)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(i32, i32, i32, i32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::Rect { x, y, w, h, color } => Some((x, y, w, h, color)),
                _ => None,
            })
            .collect()
    }

    pub fn filled(&self) -> Vec<(i32, i32, i32, i32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                DrawOp::FillRect { x, y, w, h, color } => Some((x, y, w, h, color)),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
impl Canvas for RecordingCanvas {
    fn clear(&mut self) {
        self.ops.push(DrawOp::Clear);
    }

    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.ops.push(DrawOp::Line { x1, y1, x2, y2, color });
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ops.push(DrawOp::Rect { x, y, w, h, color });
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }
}
