use super::*;

#[test]
fn toggle_adds_then_removes() {
    let mut saved = SavedJobs::default();
    assert!(saved.toggle(4));
    assert!(saved.contains(4));
    assert!(!saved.toggle(4));
    assert!(!saved.contains(4));
}

#[test]
fn double_toggle_restores_original_set() {
    let original: SavedJobs = [1, 5, 9].into_iter().collect();
    for id in [1, 2, 5, 100] {
        let mut saved = original.clone();
        saved.toggle(id);
        saved.toggle(id);
        assert_eq!(saved, original);
    }
}

#[test]
fn serializes_as_plain_integer_array() {
    let saved: SavedJobs = [3, 1].into_iter().collect();
    assert_eq!(serde_json::to_string(&saved).unwrap(), "[1,3]");
}

#[test]
fn deserializes_stored_array_with_duplicates() {
    let saved: SavedJobs = serde_json::from_str("[2,2,7]").unwrap();
    assert_eq!(saved.len(), 2);
    assert!(saved.contains(2));
    assert!(saved.contains(7));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_is_empty_outside_browser() {
    assert!(SavedJobs::load().is_empty());
}
