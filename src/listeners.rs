//! DOM event wiring. Listeners live as long as the page, so their closures
//! are leaked.

use std::{cell::RefCell, rc::Rc};

use js_sys::Function;
use lib_2048::{gesture::Point, Direction, Engine, InputDispatcher};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, EventTarget, HtmlCanvasElement, KeyboardEvent, TouchEvent,
};

fn first_touch(event: &TouchEvent) -> Option<Point> {
    let touch = event.touches().item(0)?;

    Some(Point::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

fn listen(
    target: &EventTarget,
    kind: &str,
    passive: bool,
    callback: &Function,
) -> Result<(), JsValue> {
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);

    target.add_event_listener_with_callback_and_add_event_listener_options(kind, callback, &options)
}

pub fn add_event_listeners<E>(
    canvas: &HtmlCanvasElement,
    document: &Document,
    dispatcher: Rc<RefCell<InputDispatcher<E>>>,
) -> Result<(), JsValue>
where
    E: Engine + 'static,
{
    let touch_start = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            if let Some(point) = first_touch(&event) {
                dispatcher.borrow_mut().touch_start(point);
            }
        })
    };
    listen(canvas, "touchstart", true, touch_start.as_ref().unchecked_ref())?;
    touch_start.forget();

    let touch_move = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |event: TouchEvent| {
            let Some(point) = first_touch(&event) else {
                return;
            };

            if dispatcher.borrow_mut().touch_move(point).is_some() {
                event.prevent_default();
            }
        })
    };
    listen(canvas, "touchmove", false, touch_move.as_ref().unchecked_ref())?;
    touch_move.forget();

    let touch_cancel = {
        let dispatcher = dispatcher.clone();
        Closure::<dyn FnMut(TouchEvent)>::new(move |_: TouchEvent| {
            dispatcher.borrow_mut().touch_cancel();
        })
    };
    listen(canvas, "touchcancel", true, touch_cancel.as_ref().unchecked_ref())?;
    touch_cancel.forget();

    // Arrow keys scroll the page on keydown; the move itself happens on keyup.
    let key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(|event: KeyboardEvent| {
        if Direction::from_key_code(&event.code()).is_some() {
            event.prevent_default();
        }
    });
    listen(document, "keydown", false, key_down.as_ref().unchecked_ref())?;
    key_down.forget();

    let key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        dispatcher.borrow_mut().key_up(&event.code());
    });
    listen(document, "keyup", true, key_up.as_ref().unchecked_ref())?;
    key_up.forget();

    Ok(())
}
