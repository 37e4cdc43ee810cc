use crate::Result;
use crate::utils::query_selector_all;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element};

pub const TOOLTIP_TRIGGER_SELECTOR: &str = r#"[data-bs-toggle="tooltip"]"#;

/// Attach a Bootstrap tooltip to every marked trigger, independently and
/// unconditionally. Bootstrap only wires tooltips up on demand.
pub fn init_tooltips(document: &Document) -> Result<()> {
    for trigger in query_selector_all(document, TOOLTIP_TRIGGER_SELECTOR)? {
        Tooltip::new(&trigger);
    }
    Ok(())
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Tooltip)]
    type Tooltip;

    #[wasm_bindgen(constructor)]
    fn new(element: &Element) -> Tooltip;
}
