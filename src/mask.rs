//! Rasterized presence maps used to decide where particles are seeded.

use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Immutable RGBA pixel buffer, row-major, `width * height * 4` bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureMask {
    width: usize,
    height: usize,
    data: AllocVec<u8>,
}

impl TextureMask {
    /// Wrap raw RGBA bytes. Returns `None` when the length does not match.
    pub fn from_rgba(width: usize, height: usize, data: AllocVec<u8>) -> Option<Self> {
        if data.len() != width * height * BYTES_PER_PIXEL {
            return None;
        }
        Some(TextureMask { width, height, data })
    }

    /// Build a mask from a coverage map (one byte per pixel).
    ///
    /// Covered pixels become white with the coverage as alpha, matching
    /// white text drawn on a transparent surface.
    pub fn from_coverage(width: usize, height: usize, coverage: &[u8]) -> Option<Self> {
        if coverage.len() != width * height {
            return None;
        }
        let mut data = vec![0u8; coverage.len() * BYTES_PER_PIXEL];
        for (pixel, &alpha) in data.chunks_exact_mut(BYTES_PER_PIXEL).zip(coverage) {
            if alpha > 0 {
                pixel.copy_from_slice(&[255, 255, 255, alpha]);
            }
        }
        Some(TextureMask { width, height, data })
    }

    /// The 0x0 mask produced by empty text.
    pub fn empty() -> Self {
        TextureMask { width: 0, height: 0, data: AllocVec::new() }
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn data(&self) -> &[u8] { &self.data }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// RGBA at `(x, y)`, or `None` outside the mask.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixel_at_index(y * self.width + x)
    }

    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        self.pixel(x, y).map_or(0, |p| p[3])
    }

    /// Presence test on a row-major pixel index.
    ///
    /// Indices past the end of a row continue on the next row; indices past
    /// the end of the buffer are absent.
    pub fn is_present_at(&self, index: usize) -> bool {
        self.pixel_at_index(index).is_some_and(|p| p[3] != 0)
    }

    /// Number of pixels with non-zero alpha.
    pub fn coverage(&self) -> usize {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .filter(|p| p[3] != 0)
            .count()
    }

    fn pixel_at_index(&self, index: usize) -> Option<[u8; 4]> {
        let start = index.checked_mul(BYTES_PER_PIXEL)?;
        let end = start.checked_add(BYTES_PER_PIXEL)?;
        let bytes = self.data.get(start..end)?;
        Some([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}
