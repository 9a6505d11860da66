use euclid::point2;
use rusttype::{Font, Scale};
use std::error::Error;
use std::fmt;

use crate::surface::{Color, Surface};

#[derive(Clone, Copy, Debug)]
pub enum FontError {
    BadFontData,
    NoGlyph(char),
}

impl Error for FontError {}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            FontError::BadFontData => write!(f, "BadFontData"),
            FontError::NoGlyph(c) => write!(f, "NoGlyph: {}", c),
        }
    }
}

pub struct FontHandle {
    font: Font<'static>,
}

impl FontHandle {
    /// Coverage below this renders nothing (no antialias).
    const COVERAGE: f32 = 0.5;

    pub fn new(data: Vec<u8>) -> Result<FontHandle, FontError> {
        let font = Font::try_from_vec(data).ok_or(FontError::BadFontData)?;
        Ok(FontHandle { font })
    }

    /// Draw `s` onto `buf`. Glyph pixels falling outside the surface clip
    /// silently.
    pub fn draw_str(
        &self,
        buf: &mut Surface,
        s: &str,
        setting: &FontSetting,
    ) -> Result<(), FontError> {
        let scale = Scale::uniform(setting.scale as f32);
        let ascent = self.font.v_metrics(scale).ascent;
        let (start_x, start_y) = setting.start;
        let mut caret = rusttype::point(start_x, start_y + ascent);
        for c in s.chars() {
            let glyph = self.font.glyph(c);
            if glyph.id().0 == 0 {
                return Err(FontError::NoGlyph(c));
            }
            let glyph = glyph.scaled(scale);
            let advance = glyph.h_metrics().advance_width;
            let glyph = glyph.positioned(caret);
            if let Some(bbox) = glyph.pixel_bounding_box() {
                glyph.draw(|x, y, v| {
                    if v < Self::COVERAGE {
                        return;
                    }
                    let p = point2(bbox.min.x + x as i32, bbox.min.y + y as i32);
                    buf.put(p, setting.color);
                });
            }
            caret.x += advance;
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct FontSetting {
    color: Color,
    scale: u32,
    start: (f32, f32),
}

impl FontSetting {
    const DEFAULT_SCALE: u32 = 16;
    pub fn new() -> FontSetting {
        FontSetting {
            color: Color::black(),
            scale: Self::DEFAULT_SCALE,
            start: (0.0, 0.0),
        }
    }
    pub fn color(&mut self, c: Color) -> &mut Self {
        self.color = c;
        self
    }
    pub fn scale(&mut self, s: u32) -> &mut Self {
        self.scale = s;
        self
    }
    pub fn start(&mut self, x: f32, y: f32) -> &mut Self {
        self.start = (x, y);
        self
    }
}

impl Default for FontSetting {
    fn default() -> FontSetting {
        FontSetting::new()
    }
}
