use crate::Result;
use crate::clock::current_time_hm;
use crate::error::log_if_error;
use crate::utils::{
    add_class, add_listener, get_element_by_id_dyn, query_selector_all, remove_class, set_display,
    try_get_element_by_id,
};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

const ABSENCE_CHECKBOX_ID: &str = "check_afastamento";
const ABSENCE_REASON_CONTAINER_ID: &str = "div_tipo_afastamento";
const TIME_FIELDS_CONTAINER_ID: &str = "div_horarios";
const TIME_FIELD_IDS: [&str; 4] = [
    "hora_entrada_input",
    "hora_saida_almoco_input",
    "hora_retorno_almoco_input",
    "hora_saida_input",
];
pub const CURRENT_TIME_BUTTON_SELECTOR: &str = ".btn-hora-atual";
const TARGET_FIELD_ATTRIBUTE: &str = "data-target";
const DISABLED_CLASS: &str = "disabled";

/// The two states of the time-entry form, decided by the absence checkbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// The user records actual clock-in/out times.
    Attendance,
    /// The user records a leave reason instead of times.
    Absence,
}

impl Mode {
    pub fn from_checkbox(checked: bool) -> Self {
        if checked { Mode::Absence } else { Mode::Attendance }
    }
}

/// The time-entry form, with every element it drives resolved once at
/// activation. Time fields missing from the page are simply not driven.
pub struct TimeEntryForm {
    checkbox: HtmlInputElement,
    absence_reason_container: HtmlElement,
    time_fields_container: HtmlElement,
    time_fields: Vec<HtmlInputElement>,
    current_time_buttons: Vec<HtmlButtonElement>,
}

impl TimeEntryForm {
    /// Resolve the form's elements. `Ok(None)` means the page has no absence
    /// checkbox and therefore no time-entry form to drive.
    pub fn try_new(document: &Document) -> Result<Option<Self>> {
        let Some(checkbox) = try_get_element_by_id(document, ABSENCE_CHECKBOX_ID) else {
            return Ok(None);
        };
        let checkbox = checkbox.dyn_into::<HtmlInputElement>()?;
        let absence_reason_container =
            get_element_by_id_dyn::<HtmlElement>(document, ABSENCE_REASON_CONTAINER_ID)?;
        let time_fields_container =
            get_element_by_id_dyn::<HtmlElement>(document, TIME_FIELDS_CONTAINER_ID)?;

        let time_fields = TIME_FIELD_IDS
            .iter()
            .filter_map(|id| try_get_element_by_id(document, id))
            .filter_map(|element| element.dyn_into::<HtmlInputElement>().ok())
            .collect();

        let current_time_buttons = query_selector_all(document, CURRENT_TIME_BUTTON_SELECTOR)?
            .into_iter()
            .filter_map(|element| element.dyn_into::<HtmlButtonElement>().ok())
            .collect();

        Ok(Some(Self {
            checkbox,
            absence_reason_container,
            time_fields_container,
            time_fields,
            current_time_buttons,
        }))
    }

    pub fn mode(&self) -> Mode {
        Mode::from_checkbox(self.checkbox.checked())
    }

    /// Render the whole form for the current mode in one synchronous pass.
    pub fn apply_mode(&self) -> Result<()> {
        match self.mode() {
            Mode::Absence => {
                set_display(&self.absence_reason_container, "block")?;
                set_display(&self.time_fields_container, "none")?;
                for field in &self.time_fields {
                    field.set_disabled(true);
                    field.set_value("");
                }
                for button in &self.current_time_buttons {
                    button.set_disabled(true);
                    add_class(button, DISABLED_CLASS)?;
                }
            }
            Mode::Attendance => {
                set_display(&self.absence_reason_container, "none")?;
                set_display(&self.time_fields_container, "flex")?;
                // Cleared values are not restored, only the fields themselves.
                for field in &self.time_fields {
                    field.set_disabled(false);
                }
                for button in &self.current_time_buttons {
                    button.set_disabled(false);
                    remove_class(button, DISABLED_CLASS)?;
                }
            }
        }
        Ok(())
    }
}

/// Activate the time-entry form controller: render the initial mode (the form
/// may arrive pre-rendered as already absent), re-render on every checkbox
/// change, and wire the "use current time" shortcut buttons.
pub fn init_time_entry_form(document: &Document) -> Result<()> {
    let Some(form) = TimeEntryForm::try_new(document)? else {
        log::debug!(
            "no `{ABSENCE_CHECKBOX_ID}` checkbox on this page, time-entry controller stays inactive"
        );
        return Ok(());
    };

    form.apply_mode()?;

    let checkbox = form.checkbox.clone();
    add_listener(&checkbox, "change", move |_event| {
        log_if_error(form.apply_mode());
    })?;

    init_current_time_buttons(document)?;

    Ok(())
}

fn init_current_time_buttons(document: &Document) -> Result<()> {
    for button in query_selector_all(document, CURRENT_TIME_BUTTON_SELECTOR)? {
        let document = document.clone();
        let clicked_button = button.clone();
        add_listener(&button, "click", move |_event| {
            fill_with_current_time(&document, &clicked_button);
        })?;
    }
    Ok(())
}

/// Overwrite the button's target field with the current `HH:MM`.
/// A dangling target id only disables this one shortcut, not the others.
fn fill_with_current_time(document: &Document, button: &Element) {
    let Some(target_id) = button.get_attribute(TARGET_FIELD_ATTRIBUTE) else {
        log::debug!("`{TARGET_FIELD_ATTRIBUTE}` attribute is missing, nothing to fill");
        return;
    };
    let Some(target) = try_get_element_by_id(document, &target_id) else {
        log::debug!("`{target_id}` target field does not exist, nothing to fill");
        return;
    };
    if let Ok(field) = target.dyn_into::<HtmlInputElement>() {
        field.set_value(&current_time_hm());
    }
}
