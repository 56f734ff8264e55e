pub mod app;
pub mod canvas;
pub mod runner;

pub use canvas::CanvasSurface;
pub use runner::GameRunner;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use orbit_engine::GameConfig;

use app::{App, Controls};

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
}

/// Attach the scene to the page and start the animation loop.
///
/// `config_json` is an optional partial `GameConfig`; the canvas size
/// always overrides the configured world size.
#[wasm_bindgen]
pub fn mount(
    canvas_id: &str,
    spawn_button_id: &str,
    file_input_id: &str,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = match config_json {
        Some(json) => GameConfig::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?,
        None => GameConfig::default(),
    };

    let controls = Controls {
        canvas: canvas_id,
        spawn_button: spawn_button_id,
        file_input: file_input_id,
    };
    let app = App::mount(&controls, config)?;
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    log::info!("orbit-web: mounted on #{canvas_id}");
    Ok(())
}

/// Events from the most recent frame as a flat array, 4 floats per event
/// (kind, a, b, c). Empty before `mount`.
#[wasm_bindgen]
pub fn frame_events() -> Vec<f32> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.events()).unwrap_or_default())
}
