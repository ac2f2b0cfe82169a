mod format;

pub use format::{format_timestamp, to_properties_text};
