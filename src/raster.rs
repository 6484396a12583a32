//! Scanline polygon filling for glyph outlines.

use alloc::vec;
use alloc::vec::Vec as AllocVec;

/// Upper bound on line segments per curve.
const MAX_CURVE_SEGMENTS: usize = 16;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Edge {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl Edge {
    /// +1 for downward edges, -1 for upward ones.
    fn winding(&self) -> i32 {
        if self.y1 > self.y0 { 1 } else { -1 }
    }

    /// x where the edge crosses the horizontal line `y`, if it does.
    ///
    /// Half-open in y so a vertex shared by two edges is counted once.
    fn crossing(&self, y: f32) -> Option<f32> {
        let (top, bottom) = if self.y0 < self.y1 { (self.y0, self.y1) } else { (self.y1, self.y0) };
        if y < top || y >= bottom {
            return None;
        }
        let t = (y - self.y0) / (self.y1 - self.y0);
        Some(self.x0 + (self.x1 - self.x0) * t)
    }
}

/// Collects closed contours in pixel space, flattening curves to lines.
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    edges: AllocVec<Edge>,
    start: (f32, f32),
    current: (f32, f32),
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.close();
        self.start = (x, y);
        self.current = (x, y);
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        let (x0, y0) = self.current;
        // Horizontal edges never cross a scanline.
        if y0 != y {
            self.edges.push(Edge { x0, y0, x1: x, y1: y });
        }
        self.current = (x, y);
    }

    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        let (x0, y0) = self.current;
        let n = segments_for(&[(x0, y0), (cx, cy), (x, y)]);
        for i in 1..=n {
            let t = i as f32 / n as f32;
            let mt = 1.0 - t;
            let px = mt * mt * x0 + 2.0 * mt * t * cx + t * t * x;
            let py = mt * mt * y0 + 2.0 * mt * t * cy + t * t * y;
            self.line_to(px, py);
        }
    }

    pub fn curve_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        let (x0, y0) = self.current;
        let n = segments_for(&[(x0, y0), (c1x, c1y), (c2x, c2y), (x, y)]);
        for i in 1..=n {
            let t = i as f32 / n as f32;
            let mt = 1.0 - t;
            let a = mt * mt * mt;
            let b = 3.0 * mt * mt * t;
            let c = 3.0 * mt * t * t;
            let d = t * t * t;
            self.line_to(
                a * x0 + b * c1x + c * c2x + d * x,
                a * y0 + b * c1y + c * c2y + d * y,
            );
        }
    }

    /// Close the current contour back to its start point.
    pub fn close(&mut self) {
        if self.current != self.start {
            let (x, y) = self.start;
            self.line_to(x, y);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Fill everything inside the contours under the non-zero rule,
    /// sampling each pixel at its centre. Returns one coverage byte per
    /// pixel (0 or 255), row-major.
    pub fn fill_nonzero(mut self, width: usize, height: usize) -> AllocVec<u8> {
        self.close();
        let mut coverage = vec![0u8; width * height];
        let mut crossings: AllocVec<(f32, i32)> = AllocVec::new();

        for row in 0..height {
            let y = row as f32 + 0.5;
            crossings.clear();
            crossings.extend(
                self.edges
                    .iter()
                    .filter_map(|e| e.crossing(y).map(|x| (x, e.winding()))),
            );
            crossings.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

            let mut winding = 0;
            for pair in crossings.windows(2) {
                winding += pair[0].1;
                if winding == 0 {
                    continue;
                }
                let line = &mut coverage[row * width..(row + 1) * width];
                fill_span(line, pair[0].0, pair[1].0);
            }
        }
        coverage
    }
}

/// Mark pixels whose centre lies in `[from, to)`.
fn fill_span(line: &mut [u8], from: f32, to: f32) {
    let first = libm::ceilf(from - 0.5).max(0.0) as usize;
    let last = libm::ceilf(to - 0.5).max(0.0) as usize;
    for px in line.iter_mut().take(last).skip(first) {
        *px = 255;
    }
}

/// Subdivision count from the control polygon's length (~2px per segment).
fn segments_for(points: &[(f32, f32)]) -> usize {
    let length: f32 = points
        .windows(2)
        .map(|w| {
            let (dx, dy) = (w[1].0 - w[0].0, w[1].1 - w[0].1);
            libm::sqrtf(dx * dx + dy * dy)
        })
        .sum();
    (libm::ceilf(length / 2.0) as usize).clamp(1, MAX_CURVE_SEGMENTS)
}
