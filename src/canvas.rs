//! # Canvas
//!
//! The drawing surface a label is painted on. [`Canvas`] is the small set of
//! operations the layout engine needs; [`RasterCanvas`] implements it over an
//! in-memory RGBA image and encodes the result as PNG.
//!
//! Text is positioned by its baseline: `draw_string(text, x, y)` puts the left
//! edge of the first glyph's origin at `x` and the baseline at `y`.

use crate::fonts::FontFace;
use image::{ImageEncoder, Rgba, RgbaImage};
use rusttype::point;
use thiserror::Error;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("No font face selected before drawing text")]
    NoFontSelected,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// A mutable 2-D drawing surface of fixed size.
pub trait Canvas {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgba<u8>);

    /// Sets the color used by subsequent text draws.
    fn set_color(&mut self, color: Rgba<u8>);

    /// Selects the face used by subsequent text draws.
    fn set_font(&mut self, face: &FontFace);

    /// Draws `text` with its baseline origin at `(x, y)`.
    fn draw_string(&mut self, text: &str, x: i32, y: i32) -> Result<(), CanvasError>;
}

/// A [`Canvas`] backed by an [`RgbaImage`].
pub struct RasterCanvas {
    image: RgbaImage,
    color: Rgba<u8>,
    face: Option<FontFace>,
}

impl RasterCanvas {
    /// Creates a transparent canvas of the given size with black ink and no face.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            color: BLACK,
            face: None,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encodes the current pixels as a PNG file body.
    pub fn encode_png(&self) -> Result<Vec<u8>, CanvasError> {
        encode_png(&self.image)
    }
}

impl Canvas for RasterCanvas {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    fn set_color(&mut self, color: Rgba<u8>) {
        self.color = color;
    }

    fn set_font(&mut self, face: &FontFace) {
        self.face = Some(face.clone());
    }

    fn draw_string(&mut self, text: &str, x: i32, y: i32) -> Result<(), CanvasError> {
        let face = self.face.as_ref().ok_or(CanvasError::NoFontSelected)?;
        let scale = face.scale;
        let color = self.color;
        let (width, height) = self.image.dimensions();

        for glyph in face.font.layout(text, scale, point(x as f32, y as f32)) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= width || py >= height {
                    return;
                }
                let alpha = (coverage * 255.0) as u8;
                if alpha == 0 {
                    return;
                }
                let dst = self.image.get_pixel_mut(px, py);
                blend(dst, color, alpha);
            });
        }
        Ok(())
    }
}

fn blend(dst: &mut Rgba<u8>, color: Rgba<u8>, alpha: u8) {
    let sa = alpha as f32 / 255.0;
    let inv = 1.0 - sa;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * sa + dst.0[c] as f32 * inv).round() as u8;
    }
    dst.0[3] = 255;
}

/// Encodes an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CanvasError> {
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(bytes)
}
