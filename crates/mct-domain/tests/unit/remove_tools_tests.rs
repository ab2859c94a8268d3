//! Unit tests for the node remove-tools request

use mct_domain::requests::NodeRemoveToolsRequest;
use mct_domain::transport::{StreamInput, StreamOutput, Writeable, from_bytes, to_bytes};
use mct_domain::{Readable, ToolNames};

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn test_new_with_none_is_absent() {
    let request = NodeRemoveToolsRequest::new(None);
    assert_eq!(request.tool_names(), &ToolNames::Absent);
}

#[test]
fn test_builder_without_names_is_absent() {
    let request = NodeRemoveToolsRequest::builder().build();
    assert_eq!(request, NodeRemoveToolsRequest::new(None));
}

#[test]
fn test_builder_empty_is_present() {
    let request = NodeRemoveToolsRequest::builder().empty().build();
    assert_eq!(request.tool_names(), &ToolNames::Present(Vec::new()));
}

#[test]
fn test_builder_appends_in_order() {
    let request = NodeRemoveToolsRequest::builder()
        .tool_name("first")
        .tool_names(["second", "third"])
        .empty()
        .build();

    assert_eq!(
        request.into_tool_names().into_option(),
        Some(names(&["first", "second", "third"]))
    );
}

#[test]
fn test_search_reindex_wire_bytes() {
    let request = NodeRemoveToolsRequest::new(Some(names(&["search", "reindex"])));
    let bytes = to_bytes(&request).unwrap();

    let mut expected = vec![1, 2, 6];
    expected.extend_from_slice(b"search");
    expected.push(7);
    expected.extend_from_slice(b"reindex");
    assert_eq!(bytes, expected);

    let decoded: NodeRemoveToolsRequest = from_bytes(&bytes).unwrap();
    assert_eq!(
        decoded.tool_names().as_slice(),
        Some(names(&["search", "reindex"]).as_slice())
    );
}

#[test]
fn test_absent_round_trip() {
    let request = NodeRemoveToolsRequest::new(None);
    let bytes = to_bytes(&request).unwrap();

    assert_eq!(bytes, vec![0]);
    let decoded: NodeRemoveToolsRequest = from_bytes(&bytes).unwrap();
    assert!(!decoded.tool_names().is_present());
}

#[test]
fn test_empty_round_trip() {
    let request = NodeRemoveToolsRequest::new(Some(Vec::new()));
    let decoded: NodeRemoveToolsRequest = from_bytes(&to_bytes(&request).unwrap()).unwrap();

    assert_eq!(decoded.tool_names(), &ToolNames::Present(Vec::new()));
}

#[test]
fn test_decode_leaves_cursor_after_payload() {
    let mut out = StreamOutput::new(Vec::new());
    NodeRemoveToolsRequest::new(Some(names(&["a"])))
        .write_to(&mut out)
        .unwrap();
    out.write_string("next").unwrap();
    let bytes = out.into_inner();

    let mut input = StreamInput::new(bytes.as_slice());
    let request = NodeRemoveToolsRequest::read_from(&mut input).unwrap();
    assert_eq!(request.tool_names().len(), 1);
    assert_eq!(input.position(), 4);
    assert_eq!(input.read_string().unwrap(), "next");
}

#[test]
fn test_independent_decodes_are_equal() {
    let bytes = to_bytes(&NodeRemoveToolsRequest::new(Some(names(&["x", "y"])))).unwrap();
    let copy = bytes.clone();

    let first: NodeRemoveToolsRequest = from_bytes(&bytes).unwrap();
    let second: NodeRemoveToolsRequest = from_bytes(&copy).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_trailing_bytes_are_rejected() {
    let err = from_bytes::<NodeRemoveToolsRequest>(&[0, 0]).unwrap_err();
    assert!(err.is_stream_corrupted());
}

#[test]
fn test_truncated_count_fails() {
    // Presence flag set, count missing.
    let err = from_bytes::<NodeRemoveToolsRequest>(&[1]).unwrap_err();
    assert!(err.is_stream_corrupted());
}

#[test]
fn test_declared_count_larger_than_payload_fails() {
    let err = from_bytes::<NodeRemoveToolsRequest>(&[1, 3, 1, b'a']).unwrap_err();
    assert!(err.is_stream_corrupted());
}

#[test]
fn test_requests_deduplicate_in_hash_set() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    assert!(seen.insert(NodeRemoveToolsRequest::new(None)));
    assert!(seen.insert(NodeRemoveToolsRequest::new(Some(Vec::new()))));
    assert!(seen.insert(NodeRemoveToolsRequest::new(Some(names(&["search"])))));
    assert!(!seen.insert(NodeRemoveToolsRequest::new(Some(names(&["search"])))));
    assert!(!seen.insert(NodeRemoveToolsRequest::builder().tool_name("search").build()));
    assert_eq!(seen.len(), 3);
}

#[test]
fn test_request_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<NodeRemoveToolsRequest>();
}
