use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlImageElement;

use crate::diag;

/// A sprite image plus its load status. The browser fills the element in
/// its own time; `ready` flips when decoding finishes, and every draw
/// before that is a no-op.
pub struct ImageAsset {
    pub element: HtmlImageElement,
    ready: Rc<Cell<bool>>,
}

impl ImageAsset {
    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }
}

/// Image cache keyed by source path. Owned by the app and handed to the
/// renderer at draw time, so nothing reaches for sprites through a global.
#[derive(Default)]
pub struct AssetCache {
    images: HashMap<String, ImageAsset>,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin loading `src` unless it is already cached. Fire-and-forget:
    /// a failed load is logged once and the asset stays unready for the
    /// rest of the session, which degrades rendering only.
    pub fn load(&mut self, src: &str) -> Result<(), JsValue> {
        if self.images.contains_key(src) {
            return Ok(());
        }

        let element = HtmlImageElement::new()?;
        let ready = Rc::new(Cell::new(false));

        let flag = Rc::clone(&ready);
        let onload = Closure::<dyn FnMut()>::new(move || flag.set(true));
        element.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let failed_src = src.to_string();
        let onerror = Closure::<dyn FnMut()>::new(move || {
            diag::console_warn!("failed to load image: {failed_src}");
        });
        element.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        element.set_src(src);
        self.images.insert(src.to_string(), ImageAsset { element, ready });
        Ok(())
    }

    pub fn get(&self, src: &str) -> Option<&ImageAsset> {
        self.images.get(src)
    }
}
