#![cfg(target_arch = "wasm32")]
use bedbug_core::{App, TimedDescent, WorldConfig};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

use constants::{CANVAS_ID, ENTER_3D_BUTTON_ID};

fn sync_canvas_and_app(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    dom::sync_canvas_backing_size(canvas);
    app.borrow_mut().resize(canvas.width(), canvas.height());
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, app: &Rc<RefCell<App>>) {
    sync_canvas_and_app(canvas, app);
    let canvas_resize = canvas.clone();
    let app_resize = app.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_and_app(&canvas_resize, &app_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("bedbug-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // The HTML fallback stays up until the visitor opts into 3D
    overlay::show_fallback(&document, &canvas);

    let app = Rc::new(RefCell::new(
        App::new(WorldConfig::default()).with_policy(Box::new(TimedDescent::default())),
    ));

    wire_canvas_resize(&canvas, &app);
    events::wire_keyboard(app.clone());
    events::wire_blur(app.clone());
    events::wire_direction_buttons(&document, &app);
    events::wire_restart_buttons(&document, &app);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        app: app.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app: app.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        gpu,
        last_instant: Instant::now(),
        ui_page: None,
    }));

    let started = Rc::new(RefCell::new(false));
    let doc_enter = document.clone();
    dom::add_click_listener(&document, ENTER_3D_BUTTON_ID, move || {
        overlay::enter_3d(&doc_enter, &canvas);
        sync_canvas_and_app(&canvas, &app);
        app.borrow_mut().restart();
        let mut started = started.borrow_mut();
        if !*started {
            *started = true;
            log::info!("entering 3D");
            frame::start_loop(frame_ctx.clone());
        }
    });

    Ok(())
}
