#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> i64 {
    js_sys::Date::now().round() as i64
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_default()
}

/// Run `f` once after `ms` on the browser event loop. Returns the timer handle.
pub(crate) fn set_timeout(f: impl FnOnce() + 'static, ms: i32) -> Option<i32> {
    use wasm_bindgen::JsCast;

    let win = web_sys::window()?;
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        wasm_bindgen::closure::Closure::once_into_js(f)
            .as_ref()
            .unchecked_ref(),
        ms,
    )
    .ok()
}

pub(crate) fn clear_timeout(handle: i32) {
    if let Some(win) = web_sys::window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// Trim an ISO-8601 timestamp to `YYYY-MM-DD HH:MM` for display.
pub(crate) fn short_timestamp(ts: &str) -> String {
    let ts = ts.trim();
    match (ts.get(0..10), ts.get(11..16)) {
        (Some(date), Some(time)) if ts.as_bytes().get(10) == Some(&b'T') => {
            format!("{date} {time}")
        }
        _ => ts.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_timestamp() {
        assert_eq!(short_timestamp("2024-03-13T10:05:00.000Z"), "2024-03-13 10:05");
        assert_eq!(short_timestamp("yesterday"), "yesterday");
        assert_eq!(short_timestamp(""), "");
    }

    #[test]
    fn test_now_ms_is_positive() {
        assert!(now_ms() > 0);
    }
}
