//! Turning a (possibly multi-line) string into a [`TextureMask`].

use crate::error::FieldError;
use crate::mask::TextureMask;
use alloc::string::{String, ToString};
use alloc::vec::Vec as AllocVec;

/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Where every line of a text block goes.
///
/// Lines are left aligned; line `i` has its top edge at `i * line_height`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLayout {
    pub lines: AllocVec<String>,
    pub font_size: f32,
    pub line_height: f32,
    /// `ceil` of the widest measured line.
    pub width: usize,
    /// `ceil(lines * line_height)`.
    pub height: usize,
}

impl TextLayout {
    pub fn line_top(&self, index: usize) -> f32 {
        index as f32 * self.line_height
    }
}

/// Something that can measure and draw bold text at a pixel size.
pub trait TextBackend {
    /// Advance width of `line` in pixels.
    fn measure(&mut self, line: &str, font_size: f32) -> f32;

    /// Draw every line of `layout` into a `layout.width x layout.height`
    /// mask, glyph pixels opaque and the rest transparent.
    fn rasterize(&mut self, layout: &TextLayout) -> Result<TextureMask, FieldError>;
}

/// Split `text` on `\n` and measure it.
pub fn layout_text<B: TextBackend + ?Sized>(
    text: &str,
    font_size: f32,
    backend: &mut B,
) -> Result<TextLayout, FieldError> {
    if !(font_size.is_finite() && font_size > 0.0) {
        return Err(FieldError::InvalidFontSize);
    }

    let lines: AllocVec<String> = text.split('\n').map(|l| l.to_string()).collect();
    let max_width = lines
        .iter()
        .map(|line| backend.measure(line, font_size))
        .fold(0.0f32, |acc, w| if w > acc { w } else { acc });
    let line_height = f64::from(font_size) * LINE_HEIGHT_FACTOR;
    let total_height = lines.len() as f64 * line_height;

    Ok(TextLayout {
        width: libm::ceil(f64::from(max_width)) as usize,
        height: libm::ceil(total_height) as usize,
        line_height: line_height as f32,
        font_size,
        lines,
    })
}

/// Rasterize `text` into a presence mask.
///
/// Empty text yields the 0x0 mask without calling the backend at all, whatever
/// the font size. Text whose lines all measure zero wide also yields it, but
/// is never rasterized.
pub fn sample_text<B: TextBackend + ?Sized>(
    text: &str,
    font_size: f32,
    backend: &mut B,
) -> Result<TextureMask, FieldError> {
    if text.is_empty() {
        return Ok(TextureMask::empty());
    }

    let layout = layout_text(text, font_size, backend)?;
    if layout.width == 0 || layout.height == 0 {
        return Ok(TextureMask::empty());
    }

    let mask = backend.rasterize(&layout)?;
    if mask.width() != layout.width || mask.height() != layout.height {
        return Err(FieldError::MaskSize {
            expected: layout.width * layout.height * crate::mask::BYTES_PER_PIXEL,
            actual: mask.data().len(),
        });
    }
    Ok(mask)
}
