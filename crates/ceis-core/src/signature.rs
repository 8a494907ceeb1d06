//! Freehand signature capture
//!
//! Pointer samples become connected line segments; on stroke end the pad is
//! rasterized to a PNG at 2x scale (crisp on high-DPI displays) and encoded
//! as a data URI for the answer store. Only the final raster is persisted,
//! never the vector path.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{RegResult, RegistrationError};

/// Raster scale factor relative to the pad's logical size.
const SCALE: f32 = 2.0;

/// Half-width of the drawn line, in logical pixels.
const STROKE_RADIUS: f32 = 1.5;

/// Capture state machine: idle -> drawing (on press) -> idle (on release).
#[derive(Debug, Clone, PartialEq)]
pub struct SignaturePad {
    width: f32,
    height: f32,
    strokes: Vec<Vec<(f32, f32)>>,
    drawing: bool,
}

impl SignaturePad {
    /// New blank pad with the given logical size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            strokes: Vec::new(),
            drawing: false,
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Completed strokes, for live preview rendering.
    pub fn strokes(&self) -> &[Vec<(f32, f32)>] {
        &self.strokes
    }

    /// True until at least one stroke has produced a drawable segment.
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.len() < 2)
    }

    /// Press: start a new stroke at the given pad coordinates.
    pub fn begin(&mut self, x: f32, y: f32) {
        self.drawing = true;
        self.strokes.push(vec![(x, y)]);
    }

    /// Move while pressed: append a segment from the last sample.
    pub fn sample(&mut self, x: f32, y: f32) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push((x, y));
        }
    }

    /// Release: end the active stroke. Returns true when a stroke was in
    /// progress, i.e. the caller should persist the pad.
    pub fn finish(&mut self) -> bool {
        let was_drawing = self.drawing;
        self.drawing = false;
        was_drawing
    }

    /// Blank the pad and forget all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Rasterize to a white-background PNG and encode as a data URI.
    pub fn encode_png_data_uri(&self) -> RegResult<String> {
        let w = (self.width * SCALE) as u32;
        let h = (self.height * SCALE) as u32;
        let mut img = RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]));

        let ink = Rgba([0, 0, 0, 255]);
        for stroke in &self.strokes {
            for pair in stroke.windows(2) {
                stamp_segment(&mut img, pair[0], pair[1], ink);
            }
        }

        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| RegistrationError::ImageEncoding(e.to_string()))?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buffer)))
    }
}

/// Stamp a thick line segment by sampling discs along it.
fn stamp_segment(img: &mut RgbaImage, from: (f32, f32), to: (f32, f32), ink: Rgba<u8>) {
    let (x0, y0) = (from.0 * SCALE, from.1 * SCALE);
    let (x1, y1) = (to.0 * SCALE, to.1 * SCALE);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let length = (dx * dx + dy * dy).sqrt();
    let steps = length.ceil().max(1.0) as u32;
    let radius = STROKE_RADIUS * SCALE;

    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        stamp_disc(img, x0 + dx * t, y0 + dy * t, radius, ink);
    }
}

fn stamp_disc(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, ink: Rgba<u8>) {
    let r = radius.ceil() as i64;
    for oy in -r..=r {
        for ox in -r..=r {
            if (ox * ox + oy * oy) as f32 > radius * radius {
                continue;
            }
            let px = cx as i64 + ox;
            let py = cy as i64 + oy;
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, ink);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_pad_is_empty_and_idle() {
        let pad = SignaturePad::new(600.0, 200.0);
        assert!(pad.is_empty());
        assert!(!pad.is_drawing());
    }

    #[test]
    fn press_move_release_produces_a_stroke() {
        let mut pad = SignaturePad::new(600.0, 200.0);
        pad.begin(10.0, 10.0);
        assert!(pad.is_drawing());
        pad.sample(50.0, 40.0);
        pad.sample(90.0, 60.0);
        assert!(pad.finish());
        assert!(!pad.is_drawing());
        assert!(!pad.is_empty());
        assert_eq!(pad.strokes().len(), 1);
        assert_eq!(pad.strokes()[0].len(), 3);
    }

    #[test]
    fn samples_without_press_are_ignored() {
        let mut pad = SignaturePad::new(600.0, 200.0);
        pad.sample(50.0, 40.0);
        assert!(pad.is_empty());
        assert!(!pad.finish());
    }

    #[test]
    fn a_lone_tap_leaves_the_pad_empty() {
        let mut pad = SignaturePad::new(600.0, 200.0);
        pad.begin(10.0, 10.0);
        pad.finish();
        assert!(pad.is_empty());
    }

    #[test]
    fn clear_blanks_everything() {
        let mut pad = SignaturePad::new(600.0, 200.0);
        pad.begin(10.0, 10.0);
        pad.sample(50.0, 40.0);
        pad.finish();
        pad.clear();
        assert!(pad.is_empty());
        assert!(pad.strokes().is_empty());
    }

    #[test]
    fn encoding_yields_a_png_data_uri() {
        let mut pad = SignaturePad::new(100.0, 50.0);
        pad.begin(10.0, 10.0);
        pad.sample(80.0, 40.0);
        pad.finish();
        let uri = pad.encode_png_data_uri().unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > 30);
    }

    #[test]
    fn ink_lands_on_the_raster() {
        let mut pad = SignaturePad::new(100.0, 50.0);
        pad.begin(20.0, 20.0);
        pad.sample(60.0, 20.0);
        pad.finish();
        let uri = pad.encode_png_data_uri().unwrap();
        let b64 = uri.trim_start_matches("data:image/png;base64,");
        let bytes = STANDARD.decode(b64).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        // the midpoint of the stroke, scaled
        let px = img.get_pixel((40.0 * SCALE) as u32, (20.0 * SCALE) as u32);
        assert_eq!(px[0], 0);
    }
}
