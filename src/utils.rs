use std::borrow::Cow;
use std::time::Duration;

use encoding_rs::WINDOWS_1252;

/// Decodes a line for display: UTF-8 when valid, Windows-1252 otherwise.
pub fn decode_best_effort(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Cow::Borrowed(s),
        Err(_) => {
            let (res, _, _) = WINDOWS_1252.decode(bytes);
            res
        }
    }
}

/// `1h 2m 3s 4ms`, dropping leading units that are zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_ms = elapsed.as_millis();
    let ms = total_ms % 1000;
    let s = (total_ms / 1000) % 60;
    let m = (total_ms / (1000 * 60)) % 60;
    let h = total_ms / (1000 * 60 * 60);

    let mut out = String::new();
    if h > 0 {
        out.push_str(&format!("{h}h "));
    }
    if m > 0 || h > 0 {
        out.push_str(&format!("{m}m "));
    }
    if s > 0 || m > 0 || h > 0 {
        out.push_str(&format!("{s}s "));
    }
    out.push_str(&format!("{ms}ms"));
    out
}

pub fn lines_noun(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}
