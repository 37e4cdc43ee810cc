use crate::Result;
use crate::utils::{get_window, query_selector_all, set_timeout};
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element};

pub const ALERT_SELECTOR: &str = ".alert";
const ALERT_DISMISS_DELAY_MS: i32 = 5_000;

/// Schedule the automatic dismissal of every notification banner present at
/// load time, 5 seconds after page-ready, whatever the user does in between.
/// Banners added to the page afterwards are not watched.
pub fn init_alert_auto_dismiss(document: &Document) -> Result<()> {
    let window = get_window()?;
    for banner in query_selector_all(document, ALERT_SELECTOR)? {
        set_timeout(&window, ALERT_DISMISS_DELAY_MS, move || {
            Alert::new(&banner).close();
        })?;
    }
    Ok(())
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type Alert;

    #[wasm_bindgen(constructor)]
    fn new(element: &Element) -> Alert;

    #[wasm_bindgen(method)]
    fn close(this: &Alert);
}
