#![allow(dead_code)]

use springtext::{Background, FieldError, Rgb, Surface, TextBackend, TextLayout, TextureMask, Vec2};

/// Monospace block font: every character advances half the font size and
/// every non-whitespace character is a solid box inset by 1/8 em
/// horizontally, from 1/4 em below the line top down to one em.
pub struct BlockFont {
    pub measure_calls: usize,
    pub rasterize_calls: usize,
}

impl BlockFont {
    pub fn new() -> Self {
        BlockFont { measure_calls: 0, rasterize_calls: 0 }
    }
}

impl TextBackend for BlockFont {
    fn measure(&mut self, line: &str, font_size: f32) -> f32 {
        self.measure_calls += 1;
        line.chars().count() as f32 * font_size / 2.0
    }

    fn rasterize(&mut self, layout: &TextLayout) -> Result<TextureMask, FieldError> {
        self.rasterize_calls += 1;
        let (w, h) = (layout.width, layout.height);
        let fs = layout.font_size;
        let advance = fs / 2.0;
        let mut coverage = vec![0u8; w * h];

        for (index, line) in layout.lines.iter().enumerate() {
            let top = layout.line_top(index);
            for (k, c) in line.chars().enumerate() {
                if c.is_whitespace() {
                    continue;
                }
                let x0 = k as f32 * advance + fs / 8.0;
                let x1 = (k + 1) as f32 * advance - fs / 8.0;
                let y0 = top + fs / 4.0;
                let y1 = top + fs;
                for y in (y0 as usize)..(y1 as usize).min(h) {
                    for x in (x0 as usize)..(x1 as usize).min(w) {
                        coverage[y * w + x] = 255;
                    }
                }
            }
        }

        TextureMask::from_coverage(w, h, &coverage).ok_or(FieldError::Backend("bad coverage"))
    }
}

/// Records draw calls instead of painting.
#[derive(Default)]
pub struct RecordingSurface {
    pub backgrounds: Vec<(f32, f32, Rgb)>,
    pub circles: Vec<(Vec2<f32>, f32, Rgb)>,
}

impl Surface<f32> for RecordingSurface {
    fn fill_background(&mut self, width: f32, height: f32, background: &Background<f32>) {
        self.backgrounds.push((width, height, background.solid()));
    }

    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Rgb) {
        self.circles.push((center, radius, color));
    }
}
