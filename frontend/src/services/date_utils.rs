use js_sys::Date;

/// Current time as an RFC 3339 string from the browser clock
pub fn now_rfc3339() -> String {
    String::from(Date::new_0().to_iso_string())
}
