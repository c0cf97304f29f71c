use std::collections::{BTreeMap, HashMap};

use crate::constants::{DATE_FORMAT_KEYWORD, DATE_LAYOUT_KEYWORD};
use crate::time_format::layout::to_layout;

/// A source of string settings that may carry a date layout or pattern
pub trait LayoutSettings {
    /// Look up a setting by key
    fn setting(&self, key: &str) -> Option<String>;
}

impl LayoutSettings for HashMap<String, String> {
    fn setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl LayoutSettings for BTreeMap<String, String> {
    fn setting(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Resolve the layout configured in `settings`.
///
/// An explicit `dateLayout` wins over a `dateFormat` pattern; with neither
/// present the result is empty.
pub fn get_layout<S: LayoutSettings + ?Sized>(settings: &S) -> String {
    if let Some(layout) = settings.setting(DATE_LAYOUT_KEYWORD) {
        return layout;
    }
    settings
        .setting(DATE_FORMAT_KEYWORD)
        .map(|pattern| to_layout(&pattern))
        .unwrap_or_default()
}

/// Check whether `settings` carries either a layout or a date pattern
pub fn has_layout<S: LayoutSettings + ?Sized>(settings: &S) -> bool {
    settings.setting(DATE_LAYOUT_KEYWORD).is_some() || settings.setting(DATE_FORMAT_KEYWORD).is_some()
}
