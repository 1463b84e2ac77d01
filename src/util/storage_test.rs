use super::*;

// Without a browser environment every helper degrades to the anonymous/no-op
// path; these tests pin that contract for the SSR build.

#[test]
fn load_raw_returns_none_off_browser() {
    assert_eq!(load_raw("anything"), None);
}

#[test]
fn save_and_remove_are_noops_off_browser() {
    save_json("k", &serde_json::json!({"v": 1}));
    remove("k");
    assert_eq!(load_raw("k"), None);
}
