use springfield::{
    ring, FieldConfig, GridLayout, NoOpStepObserver, PointerMode, SpringPointField, Vec2,
};
use wasm_bindgen::prelude::*;

fn flatten(positions: &[Vec2<f32>]) -> Vec<f32> {
    let mut out = Vec::with_capacity(positions.len() * 2);
    for p in positions {
        out.push(p.x);
        out.push(p.y);
    }
    out
}

// ---- Mesh Ripple Demo ----

#[wasm_bindgen]
pub struct MeshRippleDemo {
    field: SpringPointField<f32>,
    pointer: Option<Vec2<f32>>,
    origin: Vec2<f32>,
    layout: GridLayout<f32>,
}

#[wasm_bindgen]
impl MeshRippleDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(cols: usize, rows: usize, spacing: f32) -> Result<MeshRippleDemo, JsError> {
        let origin = Vec2::new(40.0f32, 40.0);
        let layout = GridLayout::new(cols, rows, spacing).with_pinned_boundary();
        let field = SpringPointField::new(layout.points(origin), FieldConfig::new())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(MeshRippleDemo { field, pointer: None, origin, layout })
    }

    pub fn update(&mut self, dt: f32) {
        self.field.step(dt, self.pointer, &mut NoOpStepObserver);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    /// Releasing the pointer drops a ripple where it was lifted.
    pub fn pointer_end(&mut self) {
        if let Some(p) = self.pointer.take() {
            self.field.trigger_impulse_now(p);
        }
    }

    pub fn tap(&mut self, x: f32, y: f32) {
        self.field.trigger_impulse_now(Vec2::new(x, y));
    }

    /// Rebuild the mesh for a new viewport size. Ripples in flight keep going.
    pub fn resize(&mut self, cols: usize, rows: usize, spacing: f32) {
        self.layout = GridLayout::new(cols, rows, spacing).with_pinned_boundary();
        self.field.relayout(self.layout.points(self.origin));
    }

    /// Returns flat [x0, y0, x1, y1, ...] in row-major order
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.field.positions())
    }

    pub fn cols(&self) -> usize {
        self.layout.cols
    }

    pub fn rows(&self) -> usize {
        self.layout.rows
    }

    pub fn active_ripples(&self) -> usize {
        self.field.active_impulses().len()
    }
}

// ---- Liquid Ring Demo ----

#[wasm_bindgen]
pub struct LiquidRingDemo {
    field: SpringPointField<f32>,
    pointer: Option<Vec2<f32>>,
}

#[wasm_bindgen]
impl LiquidRingDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(segments: usize, radius: f32, attract: bool) -> Result<LiquidRingDemo, JsError> {
        let mode = if attract { PointerMode::Attract } else { PointerMode::Repel };
        let config = FieldConfig::new()
            .with_stiffness(0.05)
            .with_damping(0.94)
            .with_pointer_mode(mode)
            .with_influence_radius(radius * 0.8);
        let field = SpringPointField::new(ring(Vec2::new(300.0f32, 300.0), radius, segments), config)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(LiquidRingDemo { field, pointer: None })
    }

    pub fn update(&mut self, dt: f32) {
        self.field.step(dt, self.pointer, &mut NoOpStepObserver);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer = Some(Vec2::new(x, y));
    }

    pub fn pointer_end(&mut self) {
        self.pointer = None;
    }

    pub fn poke(&mut self, x: f32, y: f32) {
        self.field.trigger_impulse_now(Vec2::new(x, y));
    }

    pub fn is_settled(&self) -> bool {
        self.field.is_settled(0.05)
    }

    /// Returns flat [x0, y0, x1, y1, ...] around the ring
    pub fn positions(&self) -> Vec<f32> {
        flatten(&self.field.positions())
    }

    pub fn point_count(&self) -> usize {
        self.field.len()
    }
}
