use rand::rngs::SmallRng;
use rand::SeedableRng;
use springtext::{
    Background, FieldConfig, FieldError, Rgb, Simulation, Surface, TextBackend, TextLayout,
    TextureMask, Vec2,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    console, CanvasGradient, CanvasRenderingContext2d, OffscreenCanvas,
    OffscreenCanvasRenderingContext2d,
};

const DEFAULT_TEXT: &str = "Нейросеть\nвнутри вашей\nкомпании";
const DEFAULT_FONT_SIZE: f32 = 80.0;

fn css(color: Rgb) -> String {
    format!("rgb({}, {}, {})", color.r, color.g, color.b)
}

fn to_js(err: FieldError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ---- Text backend ----

/// Renders bold Arial through an off-screen canvas and reads the pixels back.
struct CanvasText {
    canvas: OffscreenCanvas,
    ctx: OffscreenCanvasRenderingContext2d,
}

impl CanvasText {
    fn new() -> Result<Self, JsValue> {
        let canvas = OffscreenCanvas::new(1024, 768)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("off-screen 2d context unavailable"))?
            .dyn_into::<OffscreenCanvasRenderingContext2d>()?;
        Ok(CanvasText { canvas, ctx })
    }

    fn set_font(&self, font_size: f32) {
        self.ctx.set_font(&format!("bold {}px Arial", font_size));
    }
}

impl TextBackend for CanvasText {
    fn measure(&mut self, line: &str, font_size: f32) -> f32 {
        self.set_font(font_size);
        self.ctx
            .measure_text(line)
            .map(|m| m.width() as f32)
            .unwrap_or(0.0)
    }

    fn rasterize(&mut self, layout: &TextLayout) -> Result<TextureMask, FieldError> {
        let (width, height) = (layout.width, layout.height);
        // Resizing wipes the context state, so style after it.
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.set_font(layout.font_size);
        self.ctx.set_fill_style_str("#FFFFFF");
        self.ctx.set_text_align("left");
        self.ctx.set_text_baseline("top");

        for (index, line) in layout.lines.iter().enumerate() {
            self.ctx
                .fill_text(line, 0.0, f64::from(layout.line_top(index)))
                .map_err(|_| FieldError::Backend("fillText failed"))?;
        }

        let image = self
            .ctx
            .get_image_data(0.0, 0.0, width as f64, height as f64)
            .map_err(|_| FieldError::Backend("getImageData failed"))?;
        let data = image.data().0;
        let actual = data.len();
        TextureMask::from_rgba(width, height, data).ok_or(FieldError::MaskSize {
            expected: width * height * 4,
            actual,
        })
    }
}

// ---- Drawing surface ----

struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    gradient: &'a mut Option<(Background<f32>, CanvasGradient)>,
}

impl CanvasSurface<'_> {
    fn gradient_for(&mut self, background: &Background<f32>) -> Option<CanvasGradient> {
        if let Some((cached, gradient)) = self.gradient.as_ref() {
            if cached == background {
                return Some(gradient.clone());
            }
        }
        let c = background.center;
        let gradient = self
            .ctx
            .create_radial_gradient(
                c.x as f64,
                c.y as f64,
                background.inner_radius as f64,
                c.x as f64,
                c.y as f64,
                background.outer_radius as f64,
            )
            .ok()?;
        for &(offset, color) in &background.stops {
            gradient.add_color_stop(offset, &css(color)).ok()?;
        }
        *self.gradient = Some((background.clone(), gradient.clone()));
        Some(gradient)
    }
}

impl Surface<f32> for CanvasSurface<'_> {
    fn fill_background(&mut self, width: f32, height: f32, background: &Background<f32>) {
        match self.gradient_for(background) {
            Some(gradient) => self.ctx.set_fill_style_canvas_gradient(&gradient),
            None => self.ctx.set_fill_style_str(&css(background.solid())),
        }
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Rgb) {
        self.ctx.set_fill_style_str(&css(color));
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

// ---- Text Particles Demo ----

/// Text traced by spring particles that flee the pointer.
///
/// JavaScript owns the animation loop and DOM events: call `frame` from
/// `requestAnimationFrame`, `set_pointer` from `mousemove` and `resize`
/// from the window's resize handler.
#[wasm_bindgen]
pub struct TextParticlesDemo {
    sim: Simulation<f32>,
    gradient: Option<(Background<f32>, CanvasGradient)>,
}

#[wasm_bindgen]
impl TextParticlesDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        text: Option<String>,
        font_size: Option<f32>,
    ) -> Result<TextParticlesDemo, JsValue> {
        console_error_panic_hook::set_once();

        let text = text.unwrap_or_else(|| DEFAULT_TEXT.to_string());
        let font_size = font_size.unwrap_or(DEFAULT_FONT_SIZE);
        let mut backend = CanvasText::new()?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
        let mut rng = SmallRng::seed_from_u64(seed);

        let sim = Simulation::from_text(
            &text,
            font_size,
            &mut backend,
            width,
            height,
            FieldConfig::new(),
            &mut rng,
        )
        .map_err(to_js)?;

        console::log_1(
            &format!(
                "springtext: {} particles on a {}x{} surface",
                sim.particle_count(),
                width,
                height
            )
            .into(),
        );

        Ok(TextParticlesDemo { sim, gradient: None })
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.sim.set_pointer(x, y);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.sim.resize(width, height);
    }

    /// Clear, step and paint one frame.
    pub fn frame(&mut self, ctx: &CanvasRenderingContext2d) {
        let mut surface = CanvasSurface { ctx, gradient: &mut self.gradient };
        self.sim.frame(&mut surface);
    }

    pub fn particle_count(&self) -> usize {
        self.sim.particle_count()
    }

    /// Returns flat [x0, y0, x1, y1, ...] positions
    pub fn positions(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.sim.particle_count() * 2);
        for p in self.sim.particles() {
            out.push(p.position.x);
            out.push(p.position.y);
        }
        out
    }

    /// Returns particle radii in the same order as `positions`.
    pub fn radii(&self) -> Vec<f32> {
        self.sim.particles().map(|p| p.radius).collect()
    }
}
