pub mod bindings;
pub mod canvas;
pub mod panels;
pub mod runner;

pub use canvas::CanvasSurface;
pub use panels::DomPanels;
pub use runner::GameRunner;

use std::cell::RefCell;

use bindings::{AnimationLoop, Listener};
use matariki_engine::{Catalog, ConstellationGame, GameConfig, InputEvent, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

/// Run `f` against the live runner. `None` before start or after stop.
fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

fn push(event: InputEvent) {
    if with_runner(|r| r.push_input(event)).is_none() {
        log::warn!("input before matariki_start ignored");
    }
}

/// Start the game on `<canvas id=canvas_id>`.
///
/// `catalog_json` and `config_json` are optional overrides. Either one that
/// fails to parse is logged and replaced by the built-in default.
#[wasm_bindgen]
pub fn matariki_start(
    canvas_id: &str,
    catalog_json: Option<String>,
    config_json: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    matariki_stop();

    let window = web_sys::window().ok_or_else(|| js_error("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| js_error("no document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| js_error(&format!("missing canvas #{}", canvas_id)))?
        .dyn_into()?;

    let config = load_config(config_json.as_deref());
    let catalog = load_catalog(catalog_json.as_deref())?;
    let viewport = window_viewport(&window);

    let surface = CanvasSurface::new(canvas.clone())?;
    surface.resize(viewport);
    let game = ConstellationGame::new(catalog, config, viewport);
    let mut runner = GameRunner::new(game, surface, DomPanels::new(document.clone()));
    runner.present();

    let listeners = bind_page(&window, &document, &canvas)?;
    let frame_loop = AnimationLoop::start(window, |ts| {
        with_runner(|r| r.frame(ts));
    })?;
    runner.attach(frame_loop, listeners);
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    log::info!("matariki: initialized");
    Ok(())
}

/// Stop the frame loop and release every browser callback.
#[wasm_bindgen]
pub fn matariki_stop() {
    let runner = RUNNER.with(|cell| cell.borrow_mut().take());
    if let Some(mut runner) = runner {
        runner.stop();
    }
}

/// Click at canvas-local coordinates.
#[wasm_bindgen]
pub fn matariki_click(x: f32, y: f32) {
    push(InputEvent::Click { x, y, touch: false });
}

/// Touch release at canvas-local coordinates.
#[wasm_bindgen]
pub fn matariki_touch(x: f32, y: f32) {
    push(InputEvent::Click { x, y, touch: true });
}

#[wasm_bindgen]
pub fn matariki_resize(width: f32, height: f32) {
    let viewport = Viewport::new(width, height);
    if with_runner(|r| r.resize(viewport)).is_none() {
        log::warn!("resize before matariki_start ignored");
    }
}

#[wasm_bindgen]
pub fn matariki_reset() {
    push(InputEvent::Reset);
}

#[wasm_bindgen]
pub fn matariki_hint() {
    push(InputEvent::Hint);
}

#[wasm_bindgen]
pub fn matariki_close_info() {
    push(InputEvent::CloseInfo);
}

/// Stars discovered so far, for page scripts.
#[wasm_bindgen]
pub fn matariki_discovered() -> u32 {
    with_runner(|r| r.game().session().current_index() as u32).unwrap_or(0)
}

#[wasm_bindgen]
pub fn matariki_is_complete() -> bool {
    with_runner(|r| r.game().session().is_completed()).unwrap_or(false)
}

fn load_config(json: Option<&str>) -> GameConfig {
    match json.map(GameConfig::from_json) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            log::error!("config rejected, using defaults: {}", err);
            GameConfig::default()
        }
        None => GameConfig::default(),
    }
}

fn load_catalog(json: Option<&str>) -> Result<Catalog, JsValue> {
    if let Some(json) = json {
        match Catalog::from_json(json) {
            Ok(catalog) => return Ok(catalog),
            Err(err) => log::error!("catalog rejected, using built-in: {}", err),
        }
    }
    Catalog::builtin().map_err(|err| js_error(&err.to_string()))
}

fn window_viewport(window: &Window) -> Viewport {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Canvas-local point of a client-space position.
fn canvas_point(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}

/// Wire the canvas, the window and the page buttons into the input queue.
fn bind_page(
    window: &Window,
    document: &Document,
    canvas: &HtmlCanvasElement,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(5);

    let target = canvas.clone();
    listeners.push(Listener::bind(canvas, "click", move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            let (x, y) = canvas_point(&target, mouse.client_x(), mouse.client_y());
            matariki_click(x, y);
        }
    })?);

    let target = canvas.clone();
    listeners.push(Listener::bind(canvas, "touchend", move |event: Event| {
        event.prevent_default();
        let touch = event
            .dyn_ref::<TouchEvent>()
            .and_then(|t| t.changed_touches().get(0));
        if let Some(touch) = touch {
            let (x, y) = canvas_point(&target, touch.client_x(), touch.client_y());
            matariki_touch(x, y);
        }
    })?);

    let source = window.clone();
    listeners.push(Listener::bind(window, "resize", move |_: Event| {
        let viewport = window_viewport(&source);
        matariki_resize(viewport.width, viewport.height);
    })?);

    for (id, action) in [
        ("resetBtn", matariki_reset as fn()),
        ("hintBtn", matariki_hint as fn()),
    ] {
        match document.get_element_by_id(id) {
            Some(button) => listeners.push(Listener::bind(&button, "click", move |_: Event| action())?),
            None => log::warn!("no #{} on page", id),
        }
    }

    Ok(listeners)
}
