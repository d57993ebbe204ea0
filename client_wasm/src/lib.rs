//! Browser bindings for the conversion calculator
//!
//! The page renders the pitch on a canvas and forwards clicks here. Each
//! click is converted to pitch coordinates and measured against the nearer
//! goal; the latest result is kept for the page to display.

pub mod display;
pub mod input;
pub mod logger;
pub mod state;

use input::Bounds;
use pitch_core::{
    compute_result, pitch_to_screen, CalculationResult, ConfigError, Goal, PitchConfig,
    ScreenPoint,
};
use state::ResultCell;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlCanvasElement;

/// Goal a result was measured against
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSide {
    Near,
    Far,
}

impl From<Goal> for GoalSide {
    fn from(goal: Goal) -> Self {
        match goal {
            Goal::Near => GoalSide::Near,
            Goal::Far => GoalSide::Far,
        }
    }
}

/// Result of one click, as handed to the page
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultView {
    inner: CalculationResult,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ResultView {
    /// Pitch x in meters, 0 at the center of the field
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn x(&self) -> f64 {
        self.inner.selected_point.x()
    }

    /// Pitch y in meters, 0 at the near try line
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn y(&self) -> f64 {
        self.inner.selected_point.y()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn goal(&self) -> GoalSide {
        self.inner.nearest_goal.into()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn distance(&self) -> f64 {
        self.inner.distance_to_nearest_goal
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn angle_degrees(&self) -> f64 {
        self.inner.angle_width_degrees
    }
}

impl From<CalculationResult> for ResultView {
    fn from(inner: CalculationResult) -> Self {
        Self { inner }
    }
}

/// Canvas-side state: pitch dimensions and the last click's result
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct ConversionSurface {
    config: PitchConfig,
    results: ResultCell,
    #[cfg(target_arch = "wasm32")]
    canvas: Option<HtmlCanvasElement>,
}

impl ConversionSurface {
    /// Surface for a custom pitch
    pub fn with_config(config: PitchConfig) -> Self {
        Self {
            config,
            results: ResultCell::new(),
            #[cfg(target_arch = "wasm32")]
            canvas: None,
        }
    }

    pub fn custom(
        length: f64,
        width: f64,
        goal_post_width: f64,
        in_goal_depth: f64,
        scale: f64,
    ) -> Result<Self, ConfigError> {
        PitchConfig::new(length, width, goal_post_width, in_goal_depth, scale)
            .map(Self::with_config)
    }

    pub fn config(&self) -> &PitchConfig {
        &self.config
    }

    /// Handle a click given the canvas bounding box, if known
    pub fn handle_click_in(
        &mut self,
        client_x: f64,
        client_y: f64,
        bounds: Option<Bounds>,
    ) -> ResultView {
        let bounds = input::usable_bounds(bounds);
        if bounds.is_none() {
            log::warn!("canvas has no usable bounding box, measuring from the zero point");
        }
        let origin = input::origin_offset(bounds);
        let result = compute_result(input::click_point(client_x, client_y), origin, &self.config);
        self.results.set_current(result);
        result.into()
    }

    fn current(&self) -> Option<&CalculationResult> {
        self.results.current()
    }

    #[cfg(target_arch = "wasm32")]
    fn bounds(&self) -> Option<Bounds> {
        input::canvas_bounds(self.canvas.as_ref())
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn bounds(&self) -> Option<Bounds> {
        None
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl ConversionSurface {
    /// Handle a pointer event at client coordinates
    pub fn handle_click(&mut self, client_x: f64, client_y: f64) -> ResultView {
        let bounds = self.bounds();
        self.handle_click_in(client_x, client_y, bounds)
    }

    pub fn last_result(&self) -> Option<ResultView> {
        self.current().copied().map(ResultView::from)
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Canvas width in pixels needed for the whole pitch
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn canvas_width(&self) -> f64 {
        self.config.rendered_size().0
    }

    /// Canvas height in pixels, both in-goal areas included
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn canvas_height(&self) -> f64 {
        self.config.rendered_size().1
    }

    /// Canvas-local post positions for the near or far goal: `[left_x, left_y, right_x, right_y]`
    pub fn post_positions(&self, far: bool) -> Vec<f64> {
        let goal = if far { Goal::Far } else { Goal::Near };
        let (left, right) = self.config.posts(goal);
        let left = pitch_to_screen(left, ScreenPoint::ZERO, &self.config);
        let right = pitch_to_screen(right, ScreenPoint::ZERO, &self.config);
        vec![left.x(), left.y(), right.x(), right.y()]
    }

    pub fn distance_label(&self) -> Option<String> {
        self.current().map(display::distance_label)
    }

    pub fn angle_label(&self) -> Option<String> {
        self.current().map(display::angle_label)
    }

    pub fn position_label(&self) -> Option<String> {
        self.current().map(display::position_label)
    }

    pub fn region_label(&self) -> Option<String> {
        self.current()
            .map(|result| display::region_label(result, &self.config).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
impl ConversionSurface {
    /// Surface for the standard pitch, measuring clicks against `canvas`
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: Option<HtmlCanvasElement>) -> Self {
        Self {
            canvas,
            ..Self::with_config(PitchConfig::default())
        }
    }

    /// Surface for a custom pitch; fails on dimensions the geometry can't use
    pub fn with_dimensions(
        canvas: Option<HtmlCanvasElement>,
        length: f64,
        width: f64,
        goal_post_width: f64,
        in_goal_depth: f64,
        scale: f64,
    ) -> Result<ConversionSurface, JsValue> {
        let surface = Self::custom(length, width, goal_post_width, in_goal_depth, scale)
            .map_err(|e| JsValue::from_str(&format!("Invalid pitch: {}", e)))?;
        Ok(Self { canvas, ..surface })
    }

    pub fn set_canvas(&mut self, canvas: Option<HtmlCanvasElement>) {
        self.canvas = canvas;
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ConversionSurface {
    pub fn new() -> Self {
        Self::with_config(PitchConfig::default())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for ConversionSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
}
