use bedbug_core::{App, Page};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_keydown(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    let key = ev.key();
    let mut app = app.borrow_mut();
    if app.key_down(&key) {
        // arrows would otherwise scroll the page
        ev.prevent_default();
        return;
    }
    if key == "Enter" && app.page() == Page::Hell {
        app.restart();
        ev.prevent_default();
    }
}

pub fn handle_keyup(ev: &web::KeyboardEvent, app: &Rc<RefCell<App>>) {
    if app.borrow_mut().key_up(&ev.key()) {
        ev.prevent_default();
    }
}

pub fn wire_keyboard(app: Rc<RefCell<App>>) {
    let Some(window) = web::window() else {
        return;
    };
    {
        let app = app.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keydown(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_keyup(&ev, &app);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

// Keys released while the window is unfocused never send keyup
pub fn wire_blur(app: Rc<RefCell<App>>) {
    if let Some(window) = web::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            app.borrow_mut().release_all();
        }) as Box<dyn FnMut()>);
        _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
