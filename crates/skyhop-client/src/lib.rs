mod app;
mod assets;
mod diag;
pub mod input;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use skyhop_core::config::GameConfig;

use app::App;
use renderer::CanvasRenderer;

/// WASM entry point: build the session, wire keyboard events, start the
/// frame loop. A missing canvas or context is fatal and the session does
/// not start; everything after this point degrades per-feature instead.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(target_family = "wasm")]
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document object"))?;

    let config = GameConfig::load();
    let renderer = CanvasRenderer::new(
        &document,
        "game-canvas",
        config.canvas_width,
        config.canvas_height,
    )
    .inspect_err(|e| diag::console_error!("startup failed: {e:?}"))?;

    let app = Rc::new(RefCell::new(App::new(renderer, config)));
    attach_key_listeners(&document, &app)?;
    run_frame_loop(&window, app)
}

/// Keyboard events update the held-key set between frames; the simulation
/// reads a snapshot of it at the start of each update.
fn attach_key_listeners(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let down_app = Rc::clone(app);
    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            down_app.borrow_mut().input.on_key_down(event.code());
        },
    );
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();

    let up_app = Rc::clone(app);
    let on_keyup = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            up_app.borrow_mut().input.on_key_up(&event.code());
        },
    );
    document.add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())?;
    on_keyup.forget();

    Ok(())
}

/// Self-rescheduling requestAnimationFrame loop. Each callback checks the
/// running flag first, so stopping the app lets the in-flight callback
/// lapse without being cancelled explicitly.
fn run_frame_loop(window: &Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
    app.borrow_mut().start(now);

    let handle: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let scheduler = Rc::clone(&handle);
    let frame_app = Rc::clone(&app);

    *handle.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        {
            let mut app = frame_app.borrow_mut();
            if !app.is_running() {
                return;
            }
            app.frame(timestamp);
        }

        let Some(win) = web_sys::window() else {
            return;
        };
        if let Some(cb) = scheduler.borrow().as_ref()
            && win
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .is_err()
        {
            diag::console_error!("failed to schedule the next frame");
        }
    }));

    if let Some(cb) = handle.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}
