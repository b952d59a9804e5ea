//! Display formatting for timestamps and amounts

use wasm_bindgen::JsValue;

/// Turn a SQLite `CURRENT_TIMESTAMP` (UTC, space separated) into ISO 8601.
/// RFC 3339 input passes through.
pub fn normalize_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let bytes = raw.as_bytes();
    if raw.len() == 19 && bytes.get(10) == Some(&b' ') {
        format!("{}T{}Z", &raw[..10], &raw[11..])
    } else {
        raw.to_string()
    }
}

/// Local date and time, or the raw value if it does not parse.
pub fn timestamp(raw: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(&normalize_timestamp(raw)));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_string("en-US", &JsValue::UNDEFINED).into()
}

pub fn money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (whole, frac) = (cents.abs() / 100, cents.abs() % 100);

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}
