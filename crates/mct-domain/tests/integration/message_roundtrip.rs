//! Full message round trips: transport header followed by the request payload

use mct_domain::requests::{NodeRemoveToolsMessage, NodeRemoveToolsRequest};
use mct_domain::transport::{TaskId, from_bytes, to_bytes};
use mct_domain::{Envelope, ToolNames};

#[test]
fn test_message_with_parent_task_round_trip() {
    let message = NodeRemoveToolsRequest::builder()
        .tool_names(["search", "reindex"])
        .build()
        .into_message()
        .with_parent_task(TaskId::new("coordinator", 7));

    let bytes = to_bytes(&message).unwrap();
    let decoded: NodeRemoveToolsMessage = from_bytes(&bytes).unwrap();

    assert_eq!(decoded, message);
    assert_eq!(decoded.header.parent_task.to_string(), "coordinator:7");
}

#[test]
fn test_message_without_parent_task_layout() {
    let message = NodeRemoveToolsRequest::new(Some(Vec::new())).into_message();
    let bytes = to_bytes(&message).unwrap();

    // Empty node id, then presence flag and zero count.
    assert_eq!(bytes, vec![0, 1, 0]);
}

#[test]
fn test_payload_decodes_independently_of_header() {
    let message = Envelope::new(NodeRemoveToolsRequest::new(None))
        .with_parent_task(TaskId::new("n1", 3));
    let bytes = to_bytes(&message).unwrap();
    let header_len = to_bytes(&message.header).unwrap().len();

    let body: NodeRemoveToolsRequest = from_bytes(&bytes[header_len..]).unwrap();
    assert_eq!(body.tool_names(), &ToolNames::Absent);
}

#[test]
fn test_truncated_message_fails() {
    let message = NodeRemoveToolsRequest::new(Some(vec!["search".into()]))
        .into_message()
        .with_parent_task(TaskId::new("n1", 3));
    let bytes = to_bytes(&message).unwrap();

    for cut in 0..bytes.len() {
        let err = from_bytes::<NodeRemoveToolsMessage>(&bytes[..cut]).unwrap_err();
        assert!(err.is_stream_corrupted(), "cut at {cut}: {err}");
    }
}

#[test]
fn test_message_json_view() {
    let message = NodeRemoveToolsRequest::new(None)
        .into_message()
        .with_parent_task(TaskId::new("n", 1));
    let json = serde_json::to_value(&message).unwrap();

    assert_eq!(json["body"]["tool_names"], serde_json::Value::Null);
    assert_eq!(json["header"]["parent_task"]["node_id"], "n");
}
