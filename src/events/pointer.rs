use crate::dom::WindowLinkOpener;
use crate::input;
use bedbug_core::App;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub app: Rc<RefCell<App>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_touch(&w);
    wire_click(&w);
}

// Touch input is handled by the touch listeners below
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        if w.app.borrow_mut().pointer_down(input::client_pos(&ev)) {
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        w.app.borrow_mut().pointer_move(input::client_pos(&ev));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        w.app.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Single-finger drags look around; a second finger cancels the drag.
fn wire_touch(w: &InputWiring) {
    {
        let w2 = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            match input::single_touch_pos(&ev) {
                Some(pos) => {
                    w2.app.borrow_mut().pointer_down(pos);
                }
                None => {
                    w2.app.borrow_mut().pointer_up();
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let w2 = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(pos) = input::single_touch_pos(&ev) {
                w2.app.borrow_mut().pointer_move(pos);
                // keep the page from scrolling while looking around
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = w
            .canvas
            .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let w2 = w.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            w2.app.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(_)>);
        for kind in ["touchend", "touchcancel"] {
            _ = w
                .canvas
                .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Clicks and taps pick sprites on the active page.
fn wire_click(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(ndc) = input::canvas_ndc(&w.canvas, input::client_pos(&ev)) else {
            return;
        };
        let dispatched = w.app.borrow_mut().click(ndc, &mut WindowLinkOpener);
        if dispatched.is_none() {
            log::debug!("[click] nothing at ({:.2},{:.2})", ndc.x, ndc.y);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
