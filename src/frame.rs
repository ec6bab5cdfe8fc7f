use std::{cell::RefCell, rc::Rc};

use lib_2048::{surface::Surface, Engine, FrameLoop};
use log::error;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    let callback = callback.borrow();
    let closure = callback.as_ref().ok_or("frame callback missing")?;

    window.request_animation_frame(closure.as_ref().unchecked_ref())
}

/// Drives `frames` from `requestAnimationFrame` for the rest of the page's
/// life. Each frame reschedules the next one first, so a panicking or
/// failing frame cannot stop the loop.
pub fn run<S, E>(window: Window, mut frames: FrameLoop<S, E>) -> Result<(), JsValue>
where
    S: Surface + 'static,
    E: Engine + 'static,
{
    let callback: FrameCallback = Rc::new(RefCell::new(None));

    let handle = callback.clone();
    let loop_window = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move |now: f64| {
        if let Err(err) = request(&loop_window, &handle) {
            error!("could not schedule next frame: {err:?}");
        }

        frames.frame(now);
    }));

    request(&window, &callback)?;

    Ok(())
}
