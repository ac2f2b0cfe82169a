use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::model::PropertySet;

/// Format a Unix timestamp as an RFC 3339 UTC string
pub fn format_timestamp(timestamp: i64) -> String {
    OffsetDateTime::from_unix_timestamp(timestamp)
        .ok()
        .and_then(|dt| dt.format(&Rfc3339).ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Render properties in Java `.properties` syntax, one `key=value` per line
pub fn to_properties_text(props: &PropertySet) -> String {
    let mut out = String::new();
    for (key, value) in props.iter() {
        out.push_str(&escape_property(key, true));
        out.push('=');
        out.push_str(&escape_property(value, false));
        out.push('\n');
    }
    out
}

fn escape_property(s: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '=' | ':' => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' ' if is_key => escaped.push_str("\\ "),
            _ => escaped.push(c),
        }
    }
    escaped
}
