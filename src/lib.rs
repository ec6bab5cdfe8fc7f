//! Browser front-end for a 2048 engine: draws the board on a canvas, turns
//! arrow keys and swipes into moves, and keeps score and best score on the
//! page.
//!
//! ```js
//! import init, { Frontend } from "web-2048";
//! await init();
//! const frontend = new Frontend(canvas, Game.new(), JSON.stringify({ cell_size: 96 }));
//! frontend.addEventListeners();
//! frontend.run();
//! ```

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use lib_2048::{FrameLoop, FrontendConfig, HighScore, PageController, Renderer};
use log::{info, warn};
use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{Document, HtmlCanvasElement, Window};

mod canvas;
mod dom;
mod engine;
mod frame;
mod listeners;
mod storage;

use canvas::CanvasSurface;
use dom::Scoreboard;
use engine::JsEngine;
pub use engine::Game;
use storage::PageStore;

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return err.message().into();
    }

    format!("{value:?}")
}

fn to_js(err: lib_2048::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

type Controller = PageController<CanvasSurface, JsEngine, PageStore, Scoreboard>;

#[wasm_bindgen]
pub struct Frontend {
    window: Window,
    document: Document,
    canvas: HtmlCanvasElement,
    config: FrontendConfig,
    controller: Rc<Controller>,
    running: Cell<bool>,
}

#[wasm_bindgen]
impl Frontend {
    /// `config` is an optional JSON object; see `FrontendConfig` for keys.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: HtmlCanvasElement,
        game: Game,
        config: Option<String>,
    ) -> Result<Frontend, JsValue> {
        let config = match config.as_deref() {
            Some(json) => FrontendConfig::from_json(json).map_err(to_js)?,
            None => FrontendConfig::default(),
        };

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let engine = Rc::new(RefCell::new(JsEngine::new(game)));
        let surface = CanvasSurface::new(canvas.clone())?;
        let renderer = Rc::new(RefCell::new(
            Renderer::new(surface, engine.clone(), &config).map_err(to_js)?,
        ));
        let high = HighScore::load(PageStore::open(), config.high_score_key.clone());
        let scoreboard = Scoreboard::new(&document, &config);

        let controller = Rc::new(PageController::new(engine, renderer, high, scoreboard));

        Ok(Self {
            window,
            document,
            canvas,
            config,
            controller,
            running: Cell::new(false),
        })
    }

    /// Wires touch input on the canvas, arrow keys on the document and the
    /// new-game button, if the page has one.
    #[wasm_bindgen(js_name = addEventListeners)]
    pub fn add_event_listeners(&self) -> Result<(), JsValue> {
        listeners::add_event_listeners(
            &self.canvas,
            &self.document,
            self.controller.dispatcher().clone(),
        )?;

        let Some(button) = self.document.get_element_by_id(&self.config.reset_button) else {
            return Ok(());
        };

        let controller = self.controller.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || controller.new_game());

        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();

        Ok(())
    }

    /// Starts the frame loop. Later calls do nothing.
    pub fn run(&self) -> Result<(), JsValue> {
        if self.running.replace(true) {
            warn!("frame loop already running");
            return Ok(());
        }

        info!("starting frame loop");
        frame::run(
            self.window.clone(),
            FrameLoop::new(self.controller.renderer().clone()),
        )
    }

    pub fn reset(&self) {
        self.controller.new_game();
    }
}
