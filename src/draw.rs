//! Raster primitives for small pixel-art canvases
//!
//! A [`Painter`] wraps an [`RgbaImage`] and draws hard-edged shapes onto it.
//! Bounding boxes are `[x0, y0, x1, y1]` and inclusive on both ends, so
//! `[4, 4, 11, 11]` covers an 8×8 block. Drawing replaces pixels outright,
//! alpha included; nothing is blended with what was underneath. Anything
//! that falls outside the canvas is clipped.

use crate::glyphs::GlyphSource;
use image::{Rgba, RgbaImage};

/// Inclusive bounding box `[x0, y0, x1, y1]`
pub type BBox = [i32; 4];

/// A single drawing instruction, so artwork can be described as static data
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle {
        bbox: BBox,
        fill: Option<Rgba<u8>>,
        outline: Option<Rgba<u8>>,
        width: u32,
    },
    Ellipse {
        bbox: BBox,
        fill: Option<Rgba<u8>>,
        outline: Option<Rgba<u8>>,
        width: u32,
    },
    Polygon {
        points: &'static [(i32, i32)],
        fill: Rgba<u8>,
    },
    Line {
        points: &'static [(i32, i32)],
        ink: Rgba<u8>,
        width: u32,
    },
    Point {
        at: (i32, i32),
        ink: Rgba<u8>,
    },
    Text {
        at: (i32, i32),
        text: &'static str,
        ink: Rgba<u8>,
    },
}

pub struct Painter<'a> {
    canvas: &'a mut RgbaImage,
}

impl<'a> Painter<'a> {
    pub fn new(canvas: &'a mut RgbaImage) -> Self {
        Self { canvas }
    }

    /// Create a fully transparent canvas of the given size
    pub fn blank(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
    }

    pub fn point(&mut self, x: i32, y: i32, ink: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.canvas.width() && y < self.canvas.height() {
            self.canvas.put_pixel(x, y, ink);
        }
    }

    pub fn rectangle(
        &mut self,
        bbox: BBox,
        fill: Option<Rgba<u8>>,
        outline: Option<Rgba<u8>>,
        width: u32,
    ) {
        let [x0, y0, x1, y1] = normalize(bbox);
        let inside = |x: i32, y: i32| x >= x0 && x <= x1 && y >= y0 && y <= y1;
        self.paint_region(bbox, inside, fill, outline, width);
    }

    pub fn ellipse(
        &mut self,
        bbox: BBox,
        fill: Option<Rgba<u8>>,
        outline: Option<Rgba<u8>>,
        width: u32,
    ) {
        let [x0, y0, x1, y1] = normalize(bbox);
        let cx = (x0 + x1 + 1) as f32 / 2.0;
        let cy = (y0 + y1 + 1) as f32 / 2.0;
        let rx = (x1 - x0 + 1) as f32 / 2.0;
        let ry = (y1 - y0 + 1) as f32 / 2.0;

        // Sample at pixel centres
        let inside = |x: i32, y: i32| {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            dx * dx + dy * dy <= 1.0
        };
        self.paint_region(bbox, inside, fill, outline, width);
    }

    /// Fill a closed polygon. Edges count as part of the shape.
    pub fn polygon(&mut self, points: &[(i32, i32)], fill: Rgba<u8>) {
        if points.is_empty() {
            return;
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

        for y in min_y..=max_y {
            let yc = y as f32;
            let mut crossings: Vec<f32> = Vec::new();

            for (i, &(ax, ay)) in points.iter().enumerate() {
                let (bx, by) = points[(i + 1) % points.len()];
                let (ayf, byf) = (ay as f32, by as f32);
                if (ayf <= yc) != (byf <= yc) {
                    let t = (yc - ayf) / (byf - ayf);
                    crossings.push(ax as f32 + t * (bx - ax) as f32);
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let start = span[0].ceil() as i32;
                let end = span[1].floor() as i32;
                for x in start..=end {
                    self.point(x, y, fill);
                }
            }
        }

        for (i, &a) in points.iter().enumerate() {
            let b = points[(i + 1) % points.len()];
            self.segment(a, b, fill, 1);
        }
    }

    /// Draw a polyline through `points`
    pub fn line(&mut self, points: &[(i32, i32)], ink: Rgba<u8>, width: u32) {
        match points {
            [] => {}
            [only] => self.point(only.0, only.1, ink),
            _ => {
                for pair in points.windows(2) {
                    self.segment(pair[0], pair[1], ink, width);
                }
            }
        }
    }

    pub fn text(&mut self, at: (i32, i32), text: &str, ink: Rgba<u8>, glyphs: &GlyphSource) {
        for (x, y, coverage) in glyphs.rasterize(text) {
            if coverage <= 0.0 {
                continue;
            }
            let alpha = (ink[3] as f32 * coverage.min(1.0)).round() as u8;
            if alpha == 0 {
                continue;
            }
            self.point(at.0 + x, at.1 + y, Rgba([ink[0], ink[1], ink[2], alpha]));
        }
    }

    pub fn shape(&mut self, shape: &Shape, glyphs: &GlyphSource) {
        match *shape {
            Shape::Rectangle {
                bbox,
                fill,
                outline,
                width,
            } => self.rectangle(bbox, fill, outline, width),
            Shape::Ellipse {
                bbox,
                fill,
                outline,
                width,
            } => self.ellipse(bbox, fill, outline, width),
            Shape::Polygon { points, fill } => self.polygon(points, fill),
            Shape::Line { points, ink, width } => self.line(points, ink, width),
            Shape::Point { at, ink } => self.point(at.0, at.1, ink),
            Shape::Text { at, text, ink } => self.text(at, text, ink, glyphs),
        }
    }

    /// Bresenham segment, thickened across the minor axis when `width > 1`
    fn segment(&mut self, from: (i32, i32), to: (i32, i32), ink: Rgba<u8>, width: u32) {
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let x_major = dx >= -dy;

        let width = width.max(1) as i32;
        let spread = -((width - 1) / 2)..=(width / 2);

        let mut err = dx + dy;
        loop {
            for k in spread.clone() {
                if x_major {
                    self.point(x, y + k, ink);
                } else {
                    self.point(x + k, y, ink);
                }
            }

            if x == to.0 && y == to.1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill and stroke the pixels of `bbox` selected by `inside`.
    ///
    /// The outline is every inside pixel that is at most `width` 4-neighbour
    /// steps away from an outside pixel.
    fn paint_region<F>(
        &mut self,
        bbox: BBox,
        inside: F,
        fill: Option<Rgba<u8>>,
        outline: Option<Rgba<u8>>,
        width: u32,
    ) where
        F: Fn(i32, i32) -> bool,
    {
        let [x0, y0, x1, y1] = normalize(bbox);
        let w = width as i32;

        for y in y0..=y1 {
            for x in x0..=x1 {
                if !inside(x, y) {
                    continue;
                }

                let on_edge = w > 0 && outline.is_some() && near_outside(&inside, x, y, w);
                match (on_edge, outline, fill) {
                    (true, Some(ink), _) => self.point(x, y, ink),
                    (_, _, Some(ink)) => self.point(x, y, ink),
                    _ => {}
                }
            }
        }
    }
}

fn near_outside<F>(inside: &F, x: i32, y: i32, reach: i32) -> bool
where
    F: Fn(i32, i32) -> bool,
{
    for dy in -reach..=reach {
        let span = reach - dy.abs();
        for dx in -span..=span {
            if !inside(x + dx, y + dy) {
                return true;
            }
        }
    }
    false
}

fn normalize([x0, y0, x1, y1]: BBox) -> BBox {
    [x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)]
}
