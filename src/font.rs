//! TrueType/OpenType text backend built on `ttf-parser`.
//!
//! Pass a bold face to get the usual look; no synthetic emboldening is
//! applied.

use crate::error::FieldError;
use crate::mask::TextureMask;
use crate::raster::PathBuilder;
use crate::text::{TextBackend, TextLayout};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Draws text with glyph outlines from a parsed font face.
pub struct TtfBackend<'a> {
    face: Face<'a>,
}

impl<'a> TtfBackend<'a> {
    pub fn new(face: Face<'a>) -> Self {
        TtfBackend { face }
    }

    /// Parse the first face in `data`.
    pub fn from_bytes(data: &'a [u8]) -> Result<Self, FieldError> {
        Face::parse(data, 0)
            .map(TtfBackend::new)
            .map_err(|_| FieldError::FontParse)
    }

    fn scale(&self, font_size: f32) -> f32 {
        font_size / f32::from(self.face.units_per_em())
    }

    /// Missing characters fall back to `.notdef`, like browsers do.
    fn glyph(&self, c: char) -> GlyphId {
        self.face.glyph_index(c).unwrap_or(GlyphId(0))
    }

    fn advance(&self, glyph: GlyphId) -> f32 {
        f32::from(self.face.glyph_hor_advance(glyph).unwrap_or(0))
    }
}

impl TextBackend for TtfBackend<'_> {
    fn measure(&mut self, line: &str, font_size: f32) -> f32 {
        let units: f32 = line.chars().map(|c| self.advance(self.glyph(c))).sum();
        units * self.scale(font_size)
    }

    fn rasterize(&mut self, layout: &TextLayout) -> Result<TextureMask, FieldError> {
        let scale = self.scale(layout.font_size);
        let ascent = f32::from(self.face.ascender()) * scale;
        let mut path = PathBuilder::new();

        for (index, line) in layout.lines.iter().enumerate() {
            // The line's top edge is the top of the em box.
            let baseline = layout.line_top(index) + ascent;
            let mut pen_x = 0.0;
            for c in line.chars() {
                let glyph = self.glyph(c);
                let mut pen = GlyphPen { path: &mut path, scale, origin_x: pen_x, baseline };
                self.face.outline_glyph(glyph, &mut pen);
                pen_x += self.advance(glyph) * scale;
            }
        }

        let coverage = path.fill_nonzero(layout.width, layout.height);
        TextureMask::from_coverage(layout.width, layout.height, &coverage).ok_or(
            FieldError::MaskSize {
                expected: layout.width * layout.height,
                actual: coverage.len(),
            },
        )
    }
}

/// Maps font units (y up) onto mask pixels (y down).
struct GlyphPen<'p> {
    path: &'p mut PathBuilder,
    scale: f32,
    origin_x: f32,
    baseline: f32,
}

impl GlyphPen<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.origin_x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.path.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.path.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.path.curve_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.path.close();
    }
}
