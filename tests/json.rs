#[test]
fn test_nested_union_in_struct() {
    // Union-typed fields serialize as their own tagged object; nested payloads sit under a key
    // named after the tag.
    let value = dropbox_sdk::files::CommitInfo::new("/a.txt".to_owned())
        .with_mode(dropbox_sdk::files::WriteMode::Update("0123456789".to_owned()))
        .with_autorename(true);

    let expected = serde_json::json!({
        "path": "/a.txt",
        "mode": {".tag": "update", "update": "0123456789"},
        "autorename": true,
        "mute": false,
        "strict_conflict": false,
    });

    let s = serde_json::to_string(&value).unwrap();
    let deser = serde_json::from_str::<serde_json::Value>(&s).unwrap();
    assert_eq!(expected, deser);

    let roundtrip = serde_json::from_str::<dropbox_sdk::files::CommitInfo>(&s).unwrap();
    assert_eq!(roundtrip, value);
}

#[test]
fn test_missing_null_and_default() {
    use dropbox_sdk::files::Metadata;

    let a = r#"{
        ".tag": "file",
        "name": "name",
        "id": "id",
        "client_modified": "client_modified",
        "server_modified": "server_modified",
        "rev": "rev",
        "size": 1337
    }"#;

    // Same as above, but add two more fields
    // path_lower, set to null
    // is_downloadable, set to the default value specified for this field
    let b = r#"{
        ".tag": "file",
        "name": "name",
        "id": "id",
        "client_modified": "client_modified",
        "server_modified": "server_modified",
        "rev": "rev",
        "size": 1337,
        "path_lower": null,
        "is_downloadable": true
    }"#;

    // These should both deserialize to the same value.
    let a_de = serde_json::from_str::<Metadata>(a).unwrap();
    let b_de = serde_json::from_str::<Metadata>(b).unwrap();
    assert_eq!(a_de, b_de);
}

#[test]
fn test_other_is_not_encodable() {
    // `Other` only stands in for a variant this crate doesn't know; there's nothing to send.
    let err = serde_json::to_string(&dropbox_sdk::common::PathRoot::Other).unwrap_err();
    assert!(err.to_string().contains("PathRoot"), "{err}");
}

#[test]
fn test_union_display_is_tag() {
    use dropbox_sdk::files::{LookupError, WriteMode};
    assert_eq!("not_found", LookupError::NotFound.to_string());
    assert_eq!("update", WriteMode::Update("rev".to_owned()).to_string());
}
