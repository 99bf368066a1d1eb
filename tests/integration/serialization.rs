//! Integration tests for the serialized tree shape consumed by renderers

use serde_json::json;
use strata::entry::{FileInfo, FileKind};
use strata::tree::FileTree;

/// Test that a populated tree serializes to the nested node object
#[test]
fn test_tree_serializes_to_nested_shape() {
    let mut tree = FileTree::new("layer1");
    tree.add_path("bin/busybox", 42u64);
    tree.add_path("bin/sh", 10u64);
    tree.add_path("etc/passwd", 5u64);
    tree.add_file_size(57);

    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "layer1",
            "file_size": 57,
            "root": {
                "name": "/",
                "children": {
                    "bin": {
                        "name": "bin",
                        "children": {
                            "busybox": { "name": "busybox", "data": 42 },
                            "sh": { "name": "sh", "data": 10 },
                        }
                    },
                    "etc": {
                        "name": "etc",
                        "children": {
                            "passwd": { "name": "passwd", "data": 5 },
                        }
                    },
                }
            }
        })
    );
}

/// Test that an empty tree serializes as a bare root
#[test]
fn test_empty_tree_serializes_as_bare_root() {
    let tree: FileTree<u64> = FileTree::new("layer1");
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "layer1",
            "file_size": 0,
            "root": { "name": "/" }
        })
    );
}

/// Test that leaves omit the children key and directories omit the data key
#[test]
fn test_optional_keys_are_omitted() {
    let mut tree = FileTree::new("layer1");
    tree.add_path("bin/busybox", 42u64);

    let value = serde_json::to_value(&tree).unwrap();
    let bin = &value["root"]["children"]["bin"];
    assert!(bin.get("data").is_none());
    assert!(bin.get("children").is_some());

    let busybox = &bin["children"]["busybox"];
    assert!(busybox.get("children").is_none());
    assert_eq!(busybox["data"], json!(42));
}

/// Test that sibling order in the serialized map follows insertion order
#[test]
fn test_children_serialize_in_insertion_order() {
    let mut tree = FileTree::new("layer1");
    tree.add_path("zeta", 1u64);
    tree.add_path("alpha", 2u64);
    tree.add_path("mid", 3u64);

    // Value comparison ignores map order, so check positions in the text
    let text = serde_json::to_string(&tree).unwrap();
    let zeta = text.find("\"zeta\"").unwrap();
    let alpha = text.find("\"alpha\"").unwrap();
    let mid = text.find("\"mid\"").unwrap();
    assert!(zeta < alpha && alpha < mid);
}

/// Test that sorting children reorders the serialized map
#[test]
fn test_sorted_tree_serializes_alphabetically() {
    let mut tree = FileTree::new("layer1");
    tree.add_path("zeta", 1u64);
    tree.add_path("alpha", 2u64);
    tree.sort_children();

    let text = serde_json::to_string(&tree).unwrap();
    let alpha = text.find("\"alpha\"").unwrap();
    let zeta = text.find("\"zeta\"").unwrap();
    assert!(alpha < zeta);
}

/// Test that an entry payload serializes as a structured object
#[test]
fn test_entry_payload_serializes_structured() {
    let mut tree = FileTree::new("layer1");
    tree.add_path("bin/busybox", FileInfo::file(42).with_mode(0o755));

    let value = serde_json::to_value(&tree).unwrap();
    let data = &value["root"]["children"]["bin"]["children"]["busybox"]["data"];
    assert_eq!(data["kind"], json!("File"));
    assert_eq!(data["size"], json!(42));
    assert_eq!(data["mode"], json!(0o755));
    assert!(data.get("modified").is_none());
}

/// Test that FileInfo survives a serialize/deserialize round trip
#[test]
fn test_file_info_round_trip() {
    let modified = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let info = FileInfo::file(42).with_mode(0o644).with_modified(modified);

    let value = serde_json::to_value(&info).unwrap();
    let back: FileInfo = serde_json::from_value(value).unwrap();
    assert_eq!(back, info);
}

/// Test that absent optional fields deserialize to None
#[test]
fn test_file_info_optional_fields_default() {
    let info: FileInfo = serde_json::from_value(json!({
        "kind": "Symlink",
        "size": 0
    }))
    .unwrap();

    assert_eq!(info.kind, FileKind::Symlink);
    assert!(info.mode.is_none());
    assert!(info.modified.is_none());
}
