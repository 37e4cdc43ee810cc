mod alert;
mod clock;
mod confirm;
mod error;
mod time_entry;
mod tooltip;
mod utils;

use crate::error::log_if_error;
use wasm_bindgen::prelude::*;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());

    let document = match utils::get_document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("{error:?}");
            return;
        }
    };

    log_if_error(tooltip::init_tooltips(&document));
    log_if_error(alert::init_alert_auto_dismiss(&document));
    log_if_error(confirm::init_delete_confirmation(&document));
    log_if_error(clock::init_clock(&document));
    log_if_error(time_entry::init_time_entry_form(&document));
}
