//! Document metadata helpers.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

pub const APP_NAME: &str = "Cosplanner";

/// `"<page> | Cosplanner"`, or just the app name for an empty page label.
#[must_use]
pub fn page_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() { APP_NAME.to_owned() } else { format!("{page} | {APP_NAME}") }
}
