use crate::Result;
use crate::utils::{add_listener, get_window, query_selector_all};
use web_sys::{Document, Event};

pub const DELETE_BUTTON_SELECTOR: &str = ".btn-excluir";
pub const DEFAULT_CONFIRM_MESSAGE: &str = "Tem certeza que deseja excluir este item?";
const CONFIRM_MESSAGE_ATTRIBUTE: &str = "data-confirm-message";

/// Guard every destructive action behind a blocking confirmation prompt.
/// The per-button `data-confirm-message` overrides the default wording.
pub fn init_delete_confirmation(document: &Document) -> Result<()> {
    for button in query_selector_all(document, DELETE_BUTTON_SELECTOR)? {
        let message = button.get_attribute(CONFIRM_MESSAGE_ATTRIBUTE);
        add_listener(&button, "click", move |event| {
            handle_delete_click(&event, message.as_deref(), confirm_with_window);
        })?;
    }
    Ok(())
}

/// Ask for confirmation and cancel the pending default action on refusal.
/// Returns whether the action may proceed.
pub fn handle_delete_click<F>(event: &Event, custom_message: Option<&str>, confirm: F) -> bool
where
    F: Fn(&str) -> bool,
{
    let confirmed = should_proceed(custom_message, confirm);
    if !confirmed {
        event.prevent_default();
    }
    confirmed
}

pub fn should_proceed<F>(custom_message: Option<&str>, confirm: F) -> bool
where
    F: Fn(&str) -> bool,
{
    confirm(custom_message.unwrap_or(DEFAULT_CONFIRM_MESSAGE))
}

/// The host window's `confirm`, which blocks until the user answers.
/// A window we can't reach counts as a refusal.
fn confirm_with_window(message: &str) -> bool {
    get_window()
        .ok()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn should_prompt_with_default_message_when_no_custom_one() {
        let prompted = RefCell::new(None);
        should_proceed(None, |message| {
            *prompted.borrow_mut() = Some(message.to_owned());
            true
        });
        assert_eq!(
            Some(DEFAULT_CONFIRM_MESSAGE.to_owned()),
            prompted.take()
        );
    }

    #[test]
    fn should_prompt_with_custom_message_when_present() {
        let prompted = RefCell::new(None);
        should_proceed(Some("Excluir o registro de 01/02/2024?"), |message| {
            *prompted.borrow_mut() = Some(message.to_owned());
            false
        });
        assert_eq!(
            Some("Excluir o registro de 01/02/2024?".to_owned()),
            prompted.take()
        );
    }

    #[test]
    fn should_report_user_decision() {
        assert!(should_proceed(None, |_| true));
        assert!(!should_proceed(None, |_| false));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::EventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn cancelable_click() -> Event {
        let init = EventInit::new();
        init.set_cancelable(true);
        Event::new_with_event_init_dict("click", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn should_cancel_default_action_on_refusal() {
        let event = cancelable_click();
        let proceed = handle_delete_click(&event, None, |_| false);
        assert!(!proceed);
        assert!(event.default_prevented());
    }

    #[wasm_bindgen_test]
    fn should_leave_default_action_alone_on_acceptance() {
        let event = cancelable_click();
        let proceed = handle_delete_click(&event, Some("Excluir?"), |_| true);
        assert!(proceed);
        assert!(!event.default_prevented());
    }
}
