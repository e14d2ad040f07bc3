//! Stroke recording onto the grayscale raster canvas.
//!
//! Pointer events arrive in logical coordinates. Each drag segment is stamped
//! onto the raster as a round-capped line of fixed width, so consecutive
//! segments join without gaps.

use image::{GrayImage, Luma};

use crate::constants::stroke::{BACKGROUND, FOREGROUND, LINE_WIDTH};

/// A pointer position in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub struct StrokeRecorder {
    raster: GrayImage,
    origin: Option<Point>,
}

impl StrokeRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            raster: blank_raster(width, height),
            origin: None,
        }
    }

    pub fn raster(&self) -> &GrayImage {
        &self.raster
    }

    pub fn has_origin(&self) -> bool {
        self.origin.is_some()
    }

    pub fn pointer_down(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// Draws a segment from the current origin to `pos` and moves the origin.
    ///
    /// Returns `false` without touching the raster when no stroke is active.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(origin) = self.origin else {
            return false;
        };

        stamp_segment(&mut self.raster, origin, pos, LINE_WIDTH);
        self.origin = Some(pos);
        true
    }

    pub fn pointer_up(&mut self) {
        self.origin = None;
    }

    /// Replaces the raster with a blank one and drops any active stroke.
    pub fn reset(&mut self) {
        self.raster = blank_raster(self.raster.width(), self.raster.height());
        self.origin = None;
    }

    /// Swaps in a blank raster of a new size. Returns `true` if the size changed.
    pub fn fit(&mut self, width: u32, height: u32) -> bool {
        let (width, height) = (width.max(1), height.max(1));
        if self.raster.dimensions() == (width, height) {
            return false;
        }

        tracing::debug!(
            "Canvas resized from {}x{} to {}x{}",
            self.raster.width(),
            self.raster.height(),
            width,
            height
        );
        self.raster = blank_raster(width, height);
        self.origin = None;
        true
    }
}

fn blank_raster(width: u32, height: u32) -> GrayImage {
    GrayImage::from_pixel(width.max(1), height.max(1), Luma([BACKGROUND]))
}

/// Paints every pixel whose center lies within `width / 2` of the segment.
fn stamp_segment(raster: &mut GrayImage, from: Point, to: Point, width: f32) {
    let radius = width / 2.0;
    let (raster_w, raster_h) = raster.dimensions();

    let min_x = (from.x.min(to.x) - radius).floor().max(0.0);
    let min_y = (from.y.min(to.y) - radius).floor().max(0.0);
    let max_x = (from.x.max(to.x) + radius).ceil().min(raster_w as f32);
    let max_y = (from.y.max(to.y) + radius).ceil().min(raster_h as f32);

    if min_x >= max_x || min_y >= max_y {
        return;
    }

    let radius_sq = radius * radius;
    for y in min_y as u32..max_y as u32 {
        for x in min_x as u32..max_x as u32 {
            let center = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if distance_sq_to_segment(center, from, to) <= radius_sq {
                raster.put_pixel(x, y, Luma([FOREGROUND]));
            }
        }
    }
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    };

    let (cx, cy) = (a.x + t * dx, a.y + t * dy);
    (p.x - cx) * (p.x - cx) + (p.y - cy) * (p.y - cy)
}
