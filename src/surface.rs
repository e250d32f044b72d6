//! Software rendering of a drawing into an RGBA raster.
//!
//! Rendering is a pure function of the strokes and the surface size: every
//! redraw starts from a white background and replays all strokes in order.

use egui::{Color32, ColorImage, Pos2, Rect, Vec2, pos2};
use image::{Rgba, RgbaImage};

use crate::error::SurfaceError;
use crate::stroke::Stroke;

pub const BACKGROUND: Color32 = Color32::WHITE;

/// Largest side accepted for a surface, in pixels.
///
/// Stroke points may lie anywhere; segments are clipped to the surface
/// before rasterizing and stay sub-pixel accurate for endpoints within
/// about 1e12 of it. Non-finite points are skipped.
pub const MAX_SURFACE_SIDE: u32 = 16_384;

/// Surface dimensions in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        for side in [width, height] {
            if side > MAX_SURFACE_SIDE {
                return Err(SurfaceError::TooLarge {
                    side,
                    max: MAX_SURFACE_SIDE,
                });
            }
        }
        Ok(Self { width, height })
    }

    /// Converts a UI size in points to pixels, rounding up partial pixels
    pub fn from_vec2(size: Vec2) -> Result<Self, SurfaceError> {
        if !size.x.is_finite() || !size.y.is_finite() || size.x < 0.0 || size.y < 0.0 {
            return Err(SurfaceError::InvalidDimensions {
                width: size.x,
                height: size.y,
            });
        }
        let side = |v: f32| {
            if v > MAX_SURFACE_SIDE as f32 {
                MAX_SURFACE_SIDE + 1
            } else {
                v.ceil() as u32
            }
        };
        Self::new(side(size.x), side(size.y))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn rect(&self) -> Rect {
        Rect::from_min_max(Pos2::ZERO, pos2(self.width as f32, self.height as f32))
    }
}

/// Paints `strokes` oldest first onto a blank surface of `size`
pub fn render(strokes: &[Stroke], size: SurfaceSize) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(size.width, size.height, Rgba(BACKGROUND.to_srgba_unmultiplied()));
    for stroke in strokes {
        paint_stroke(&mut image, stroke);
    }
    image
}

/// Converts a rendered raster for upload as an egui texture
pub fn to_color_image(image: &RgbaImage) -> ColorImage {
    let size = [image.width() as usize, image.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, image.as_raw())
}

/// Composites one stroke: a polyline with round caps and joins.
///
/// Coverage is the maximum over the stroke's segments, so a stroke never
/// blends with itself where its segments overlap.
fn paint_stroke(image: &mut RgbaImage, stroke: &Stroke) {
    let points = stroke.points();
    if points.is_empty() || stroke.width() <= 0.0 {
        return;
    }
    let size = SurfaceSize {
        width: image.width(),
        height: image.height(),
    };
    let Some(area) = PixelArea::clip(stroke.bounds().expand(1.0), size) else {
        return;
    };

    let radius = stroke.width() / 2.0;
    // Beyond this rect a segment cannot mark any pixel of the surface.
    let reach = size.rect().expand(radius + 1.0);
    let mut coverage = vec![0.0f32; area.len()];

    // A single point is a zero-length segment, which rasterizes as a dot.
    let segments = points
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain((points.len() == 1).then(|| (points[0], points[0])));

    for (a, b) in segments {
        let Some(segment) = Segment::clipped(a, b, reach) else {
            continue;
        };
        let Some(segment_area) = PixelArea::clip(segment.bounds().expand(radius + 1.0), size)
            .and_then(|segment_area| segment_area.intersect(&area))
        else {
            continue;
        };
        for y in segment_area.y0..segment_area.y1 {
            for x in segment_area.x0..segment_area.x1 {
                let distance = segment.distance_to(x as f64 + 0.5, y as f64 + 0.5);
                let cover = (radius as f64 + 0.5 - distance).clamp(0.0, 1.0) as f32;
                let slot = &mut coverage[area.index(x, y)];
                if cover > *slot {
                    *slot = cover;
                }
            }
        }
    }

    let color = stroke.color();
    for y in area.y0..area.y1 {
        for x in area.x0..area.x1 {
            let cover = coverage[area.index(x, y)];
            if cover > 0.0 {
                let pixel = image.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color, cover);
            }
        }
    }
}

/// Source-over of `color` scaled by `cover` onto an unmultiplied pixel
fn blend(dst: Rgba<u8>, color: Color32, cover: f32) -> Rgba<u8> {
    let [sr, sg, sb, sa] = color.to_srgba_unmultiplied();
    let src_a = (sa as f32 / 255.0) * cover;
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |s: u8, d: u8| {
        let value = (s as f32 * src_a + d as f32 * dst_a * (1.0 - src_a)) / out_a;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(sr, dst[0]),
        channel(sg, dst[1]),
        channel(sb, dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// A stroke segment in f64, clipped to the part that can reach the surface.
///
/// Clipping keeps coordinates near the surface, so distances stay accurate
/// to a fraction of a pixel for endpoints up to about 1e12 away.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Segment {
    a: [f64; 2],
    b: [f64; 2],
}

impl Segment {
    /// Liang-Barsky clip of `a`..`b` to `rect`; `None` if nothing is left
    fn clipped(a: Pos2, b: Pos2, rect: Rect) -> Option<Self> {
        if ![a.x, a.y, b.x, b.y].iter().all(|v| v.is_finite()) {
            return None;
        }
        let (ax, ay) = (a.x as f64, a.y as f64);
        let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
        let (mut t0, mut t1) = (0.0f64, 1.0f64);
        let edges = [
            (-dx, ax - rect.min.x as f64),
            (dx, rect.max.x as f64 - ax),
            (-dy, ay - rect.min.y as f64),
            (dy, rect.max.y as f64 - ay),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }
        Some(Self {
            a: [ax + t0 * dx, ay + t0 * dy],
            b: [ax + t1 * dx, ay + t1 * dy],
        })
    }

    fn bounds(&self) -> Rect {
        Rect::from_two_pos(
            pos2(self.a[0] as f32, self.a[1] as f32),
            pos2(self.b[0] as f32, self.b[1] as f32),
        )
    }

    fn distance_to(&self, x: f64, y: f64) -> f64 {
        let (dx, dy) = (self.b[0] - self.a[0], self.b[1] - self.a[1]);
        let (px, py) = (x - self.a[0], y - self.a[1]);
        let length_sq = dx * dx + dy * dy;
        let t = if length_sq > 0.0 {
            ((px * dx + py * dy) / length_sq).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (px - t * dx).hypot(py - t * dy)
    }
}

/// Half-open pixel rectangle inside the surface
#[derive(Debug, Clone, Copy)]
struct PixelArea {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelArea {
    fn clip(rect: Rect, size: SurfaceSize) -> Option<Self> {
        let rect = rect.intersect(size.rect());
        if !rect.is_positive() {
            return None;
        }
        Some(Self {
            x0: rect.min.x.floor() as u32,
            y0: rect.min.y.floor() as u32,
            x1: (rect.max.x.ceil() as u32).min(size.width),
            y1: (rect.max.y.ceil() as u32).min(size.height),
        })
    }

    fn intersect(&self, other: &Self) -> Option<Self> {
        let area = Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        (area.x0 < area.x1 && area.y0 < area.y1).then_some(area)
    }

    fn len(&self) -> usize {
        ((self.x1 - self.x0) * (self.y1 - self.y0)) as usize
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y - self.y0) * (self.x1 - self.x0) + (x - self.x0)) as usize
    }
}
