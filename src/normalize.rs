//! MNIST-style normalization of the raster canvas.
//!
//! # Processing Pipeline
//! 1. Find the bounding box of all non-background pixels
//! 2. Crop to that box
//! 3. Center the crop on a square side of `max(width, height)`
//! 4. Add a background margin of 20% of the side on every edge
//! 5. Resize to 28x28 with Lanczos3
//! 6. Scale intensities into `[0.0, 1.0]`

use image::{GrayImage, Luma, imageops};

use crate::constants::digit::{MARGIN_RATIO, MAX_INTENSITY, SIZE};
use crate::constants::stroke::BACKGROUND;

/// Smallest rectangle enclosing every non-background pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A captured digit, row-major, intensities in `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DigitMatrix {
    values: [[f32; SIZE]; SIZE],
}

impl DigitMatrix {
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.values[row][col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32; SIZE]> {
        self.values.iter()
    }

    pub fn as_array(&self) -> &[[f32; SIZE]; SIZE] {
        &self.values
    }
}

pub fn bounding_box(raster: &GrayImage) -> Option<BoundingBox> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;

    for (x, y, pixel) in raster.enumerate_pixels() {
        if pixel[0] == BACKGROUND {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }

    bounds.map(|(x0, y0, x1, y1)| BoundingBox {
        x: x0,
        y: y0,
        width: x1 - x0 + 1,
        height: y1 - y0 + 1,
    })
}

/// Normalizes the drawing on `raster` into a 28x28 matrix.
///
/// Returns `None` when nothing has been drawn.
pub fn normalize(raster: &GrayImage) -> Option<DigitMatrix> {
    let bbox = bounding_box(raster)?;
    let cropped = imageops::crop_imm(raster, bbox.x, bbox.y, bbox.width, bbox.height).to_image();

    let side = bbox.width.max(bbox.height);
    let mut square = GrayImage::from_pixel(side, side, Luma([BACKGROUND]));
    imageops::replace(
        &mut square,
        &cropped,
        i64::from((side - bbox.width) / 2),
        i64::from((side - bbox.height) / 2),
    );

    let margin = (f64::from(side) * MARGIN_RATIO) as u32;
    let padded_side = side + 2 * margin;
    let mut padded = GrayImage::from_pixel(padded_side, padded_side, Luma([BACKGROUND]));
    imageops::replace(&mut padded, &square, i64::from(margin), i64::from(margin));

    let resized = imageops::resize(
        &padded,
        SIZE as u32,
        SIZE as u32,
        imageops::FilterType::Lanczos3,
    );
    debug_assert_eq!(resized.dimensions(), (SIZE as u32, SIZE as u32));

    let mut values = [[0.0f32; SIZE]; SIZE];
    for (x, y, pixel) in resized.enumerate_pixels() {
        values[y as usize][x as usize] = f32::from(pixel[0]) / MAX_INTENSITY;
    }

    Some(DigitMatrix { values })
}
