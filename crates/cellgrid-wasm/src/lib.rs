//! WebAssembly bindings for the cellgrid layout engine.
//!
//! A JavaScript UI host owns the container and its children; it hands the
//! engine their geometry on each layout pass and writes the results back.
//!
//! ## Example
//!
//! ```js
//! import { GridEngine } from 'cellgrid';
//!
//! const grid = new GridEngine();
//! grid.setConfig({ cellsPerLine: 4, spacing: 8, direction: 'vertical' });
//!
//! const result = grid.layout(
//!   { parentSize: { x: 400, y: 800 }, anchorMin: { x: 0, y: 1 }, anchorMax: { x: 1, y: 1 } },
//!   children.map(() => ({ x: 0.5, y: 0.5 })),
//! );
//! result.cells.forEach((cell, i) => place(children[i], cell));
//!
//! grid.disable();
//! if (grid.takeRelayoutRequest()) scheduleLayout();
//! ```

use cellgrid_core::GridConfig;
use cellgrid_layout::{Cell, GridLayoutEngine, LayoutHost};
use tracing::debug;
use wasm_bindgen::prelude::*;

mod types;

pub use types::*;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Records relayout requests until JavaScript collects them.
#[derive(Debug, Default)]
struct PendingRelayout {
    requested: bool,
}

impl LayoutHost for PendingRelayout {
    fn request_relayout(&mut self) {
        self.requested = true;
    }
}

/// The grid layout engine interface for JavaScript.
#[wasm_bindgen]
pub struct GridEngine {
    engine: GridLayoutEngine,
    host: PendingRelayout,
}

#[wasm_bindgen]
impl GridEngine {
    /// Create an engine with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: GridLayoutEngine::default(),
            host: PendingRelayout::default(),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Set the configuration from a JS object. Missing fields take defaults.
    #[wasm_bindgen(js_name = setConfig)]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsError> {
        let config: GridConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsError::new(&format!("Invalid grid config: {}", e)))?;
        self.engine.set_config(config);
        Ok(())
    }

    /// Set the configuration from a JSON string.
    #[wasm_bindgen(js_name = setConfigJson)]
    pub fn set_config_json(&mut self, json: &str) -> Result<(), JsError> {
        let config = GridConfig::from_json(json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.engine.set_config(config);
        Ok(())
    }

    /// Get the current configuration as a JS object.
    #[wasm_bindgen(js_name = getConfig)]
    pub fn get_config(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.engine.config())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Lay out one cell per pivot inside the given container.
    #[wasm_bindgen]
    pub fn layout(&mut self, container: JsValue, cell_pivots: JsValue) -> Result<JsValue, JsError> {
        let container: ContainerJs = serde_wasm_bindgen::from_value(container)
            .map_err(|e| JsError::new(&format!("Invalid container: {}", e)))?;
        let pivots: Vec<Vec2Js> = serde_wasm_bindgen::from_value(cell_pivots)
            .map_err(|e| JsError::new(&format!("Invalid cell pivots: {}", e)))?;

        let result = self.run_layout(container, &pivots);

        serde_wasm_bindgen::to_value(&result)
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Teardown: release the driven container axis and request a relayout.
    #[wasm_bindgen]
    pub fn disable(&mut self) {
        self.engine.disable(&mut self.host);
    }

    /// Whether the engine asked for another layout pass since the last call.
    #[wasm_bindgen(js_name = takeRelayoutRequest)]
    pub fn take_relayout_request(&mut self) -> bool {
        std::mem::take(&mut self.host.requested)
    }
}

impl GridEngine {
    fn run_layout(&mut self, container: ContainerJs, pivots: &[Vec2Js]) -> LayoutResultJs {
        let mut container = container.into_core();
        let mut cells: Vec<Cell> = pivots.iter().map(|&p| Cell::with_pivot(p.into())).collect();

        let pass = self.engine.compute_along_primary_axis(&mut container, &mut cells);
        debug!(cells = cells.len(), lines = pass.layout.lines_count, "wasm layout pass");

        LayoutResultJs::from_pass(&pass, &container)
    }
}

impl Default for GridEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the engine version.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
