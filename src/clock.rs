use crate::Result;
use crate::utils::{get_window, set_interval, try_get_element_by_id};
use chrono::{Local, NaiveTime, Timelike};
use web_sys::{Document, Element};

const CLOCK_ELEMENT_ID: &str = "relogio";
const CLOCK_REFRESH_INTERVAL_MS: i32 = 1_000;

/// Render a wall-clock time as zero-padded 24-hour `HH:MM:SS`.
pub fn format_hms(time: &NaiveTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Render a wall-clock time as zero-padded 24-hour `HH:MM`, without seconds.
pub fn format_hm(time: &NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

pub fn current_time_hms() -> String {
    format_hms(&Local::now().time())
}

pub fn current_time_hm() -> String {
    format_hm(&Local::now().time())
}

/// Start the live clock: render immediately, then every second, for as long
/// as the page lives. Pages without a clock display skip this entirely.
pub fn init_clock(document: &Document) -> Result<()> {
    let Some(clock) = try_get_element_by_id(document, CLOCK_ELEMENT_ID) else {
        log::debug!("no `{CLOCK_ELEMENT_ID}` element on this page, clock stays inactive");
        return Ok(());
    };

    render_time(&clock);

    let window = get_window()?;
    set_interval(&window, CLOCK_REFRESH_INTERVAL_MS, move || {
        render_time(&clock)
    })?;

    Ok(())
}

fn render_time(clock: &Element) {
    clock.set_text_content(Some(&current_time_hms()));
}
