use super::*;

#[test]
fn page_title_appends_app_name() {
    assert_eq!(page_title("Projects"), "Projects | Cosplanner");
}

#[test]
fn page_title_trims_label() {
    assert_eq!(page_title("  Gallery "), "Gallery | Cosplanner");
}

#[test]
fn page_title_empty_label_is_app_name() {
    assert_eq!(page_title(""), APP_NAME);
}
