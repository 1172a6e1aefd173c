use crate::constants::{direction_button_id, GAME_OVER_RESTART_ID, RESTART_BUTTON_ID};
use crate::dom;
use bedbug_core::{App, Direction};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// On-screen arrows for touch devices; each one holds a direction key.
pub fn wire_direction_buttons(document: &web::Document, app: &Rc<RefCell<App>>) {
    for dir in Direction::ALL {
        let id = direction_button_id(dir.name());
        let Some(el) = document.get_element_by_id(&id) else {
            continue;
        };
        {
            let app = app.clone();
            let closure =
                wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
                    app.borrow_mut().press(dir);
                    ev.prevent_default();
                }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        for kind in ["pointerup", "pointerleave", "pointercancel"] {
            let app = app.clone();
            let closure =
                wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
                    app.borrow_mut().release(dir);
                }) as Box<dyn FnMut(_)>);
            _ = el.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

pub fn wire_restart_buttons(document: &web::Document, app: &Rc<RefCell<App>>) {
    for id in [RESTART_BUTTON_ID, GAME_OVER_RESTART_ID] {
        let app = app.clone();
        dom::add_click_listener(document, id, move || {
            app.borrow_mut().restart();
        });
    }
}
