//! RGBA surfaces and blitting.
use ansi_term::Colour as TermRGB;
use ansi_term::Style;
use euclid::{point2, size2, vec2};
use image::{Rgba, RgbaImage};
use rect_iter::RectRange;
use std::fmt;
use tuple_map::TupleMap2;

use crate::geom::{PixelPoint, PixelRect, PixelSize};

/// We don't support alpha blending, so just rgb is enough.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }
    pub fn black() -> Color {
        Color::new(0, 0, 0)
    }
    pub fn white() -> Color {
        Color::new(255, 255, 255)
    }
    pub fn red() -> Color {
        Color::new(255, 0, 0)
    }
    pub fn green() -> Color {
        Color::new(0, 255, 0)
    }
    pub fn blue() -> Color {
        Color::new(0, 0, 255)
    }
    pub fn yellow() -> Color {
        Color::new(255, 255, 0)
    }
    fn from_rgba(rgba: &Rgba<u8>) -> Dot {
        if is_trans(rgba) {
            return None;
        }
        Some(Color::new(rgba[0], rgba[1], rgba[2]))
    }
    fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, u8::MAX])
    }
    fn to_term(self) -> TermRGB {
        TermRGB::RGB(self.r, self.g, self.b)
    }
}

fn is_trans(rgba: &Rgba<u8>) -> bool {
    rgba[3] == 0
}

/// A pixel is either a solid color or fully transparent.
pub type Dot = Option<Color>;

/// Owned RGBA buffer with SDL-style blitting.
///
/// Blit sources are clipped against the source surface and the clipped
/// amount shifts the destination offset; fully transparent source pixels
/// are skipped.
#[derive(Clone)]
pub struct Surface {
    buf: RgbaImage,
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(width: u32, height: u32) -> Surface {
        Surface {
            buf: RgbaImage::new(width, height),
        }
    }
    pub fn filled(width: u32, height: u32, color: Color) -> Surface {
        let mut s = Surface::new(width, height);
        s.fill(color);
        s
    }
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for p in self.buf.pixels_mut() {
            *p = rgba;
        }
    }
    pub fn width(&self) -> u32 {
        self.buf.width()
    }
    pub fn height(&self) -> u32 {
        self.buf.height()
    }
    pub fn size(&self) -> PixelSize {
        let (w, h) = (self.buf.width(), self.buf.height()).map(|v| v as i32);
        size2(w, h)
    }
    /// The composed frame, for the shell to upload/present.
    pub fn rgba(&self) -> &RgbaImage {
        &self.buf
    }
    pub fn get(&self, p: PixelPoint) -> Dot {
        if !self.contains(p) {
            return None;
        }
        Color::from_rgba(self.buf.get_pixel(p.x as u32, p.y as u32))
    }
    /// Out-of-bounds writes are dropped silently.
    pub fn put(&mut self, p: PixelPoint, color: Color) {
        if !self.contains(p) {
            return;
        }
        self.buf.put_pixel(p.x as u32, p.y as u32, color.to_rgba());
    }
    fn contains(&self, p: PixelPoint) -> bool {
        0 <= p.x && 0 <= p.y && (p.x as u32) < self.buf.width() && (p.y as u32) < self.buf.height()
    }
    pub fn blit(&mut self, src: &Surface, at: PixelPoint) {
        self.blit_area(src, PixelRect::new(point2(0, 0), src.size()), at);
    }
    /// Blit `area` of `src` to `at`. The part of `area` falling outside
    /// `src` is clipped off and the destination shifts by the same amount.
    pub fn blit_area(&mut self, src: &Surface, area: PixelRect, at: PixelPoint) {
        let src_bounds = PixelRect::new(point2(0, 0), src.size());
        let clipped = match area.intersection(&src_bounds) {
            Some(c) => c,
            None => return,
        };
        let at = at + (clipped.origin - area.origin);
        let range = match RectRange::zero_start(clipped.size.width, clipped.size.height) {
            Some(r) => r,
            None => return,
        };
        for (x, y) in range {
            let s = clipped.origin + vec2(x, y);
            if let Some(color) = Color::from_rgba(src.buf.get_pixel(s.x as u32, s.y as u32)) {
                self.put(at + vec2(x, y), color);
            }
        }
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "surface: {{")?;
        for y in 0..self.buf.height() {
            for x in 0..self.buf.width() {
                match Color::from_rgba(self.buf.get_pixel(x, y)) {
                    Some(rgb) => write!(f, "{}", Style::new().on(rgb.to_term()).paint("  "))?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "}}")
    }
}
