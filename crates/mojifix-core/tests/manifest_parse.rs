use mojifix_core::error::MojifixError;
use mojifix_core::manifest;

#[test]
fn filenames_are_deduped_and_sorted() {
    let json = r#"[
        {"filename": "b.html", "title": "B"},
        {"filename": "a.html"},
        {"filename": "b.html"},
        {"filename": "c.html"}
    ]"#;
    let names = manifest::parse(json).unwrap();
    assert_eq!(names, vec!["a.html", "b.html", "c.html"]);
}

#[test]
fn entries_without_filename_are_skipped() {
    let json = r#"[
        {"title": "no filename"},
        {"filename": null},
        {"filename": ""},
        {"filename": "keep.html"}
    ]"#;
    let names = manifest::parse(json).unwrap();
    assert_eq!(names, vec!["keep.html"]);
}

#[test]
fn empty_array_yields_empty_set() {
    assert!(manifest::parse("[]").unwrap().is_empty());
}

#[test]
fn top_level_must_be_an_array() {
    let err = manifest::parse(r#"{"filename": "a.html"}"#).unwrap_err();
    assert!(matches!(err, MojifixError::ManifestFormat(_)));
}

#[test]
fn non_object_entry_is_fatal() {
    let err = manifest::parse(r#"["a.html"]"#).unwrap_err();
    assert!(matches!(err, MojifixError::ManifestFormat(_)));
}

#[test]
fn non_string_filename_is_fatal() {
    let err = manifest::parse(r#"[{"filename": 42}]"#).unwrap_err();
    assert!(matches!(err, MojifixError::ManifestFormat(_)));
}

#[test]
fn malformed_json_is_fatal() {
    let err = manifest::parse("[{").unwrap_err();
    assert!(matches!(err, MojifixError::ManifestJson(_)));
}
