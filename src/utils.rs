use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "no global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?.document().ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            "should have a document on the window",
        )
    })
}

/// Optional lookup, for the elements whose absence deactivates a whole behavior.
pub fn try_get_element_by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    try_get_element_by_id(document, id).ok_or_else(|| {
        Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("`{id}` element does not exist"),
        )
    })
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    get_element_by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|element| {
            Error::new(
                DEFAULT_ERROR_MESSAGE,
                &format!("`{id}` element has an unexpected type: {element:?}"),
            )
        })
}

pub fn query_selector_all(document: &Document, selector: &str) -> Result<Vec<Element>> {
    let node_list = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(node_list.length() as usize);
    for index in 0..node_list.length() {
        if let Some(node) = node_list.item(index) {
            elements.push(node.dyn_into::<Element>()?);
        }
    }
    Ok(elements)
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().add_1(class)?;
    Ok(())
}

pub fn remove_class(element: &Element, class: &str) -> Result<()> {
    element.class_list().remove_1(class)?;
    Ok(())
}

pub fn set_display(element: &HtmlElement, display: &str) -> Result<()> {
    element.style().set_property("display", display)?;
    Ok(())
}

/// Attach a handler to `target` for the page's lifetime.
/// The closure is leaked on purpose: listeners are never torn down.
pub fn add_listener<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: Fn(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn(Event)>);
    target.add_event_listener_with_event_listener(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Schedule `handler` to run every `interval_ms` milliseconds, forever.
/// The browser timer id is returned but nothing in this crate cancels it:
/// every repeating task here is scoped to the page's lifetime.
pub fn set_interval<F>(window: &Window, interval_ms: i32, handler: F) -> Result<i32>
where
    F: Fn() + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn Fn()>);
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        interval_ms,
    )?;
    closure.forget();
    Ok(id)
}

/// Schedule `handler` to run once, `delay_ms` milliseconds from now.
pub fn set_timeout<F>(window: &Window, delay_ms: i32, handler: F) -> Result<i32>
where
    F: FnOnce() + 'static,
{
    let closure = Closure::once(handler);
    let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    )?;
    closure.forget();
    Ok(id)
}
