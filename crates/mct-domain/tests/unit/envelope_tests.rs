//! Unit tests for the transport envelope

use mct_domain::transport::{Envelope, TaskId, TransportHeader, from_bytes, to_bytes};

#[test]
fn test_empty_task_id_is_unset() {
    let task = TaskId::empty();
    assert!(!task.is_set());
    assert_eq!(task.to_string(), "unset");
}

#[test]
fn test_empty_task_id_writes_only_empty_string() {
    assert_eq!(to_bytes(&TaskId::empty()).unwrap(), vec![0]);
}

#[test]
fn test_empty_node_id_normalises_to_unset() {
    let task = TaskId::new("", 5);
    assert_eq!(task, TaskId::empty());
    assert_eq!(task.id(), 0);
    assert_eq!(task.node_id(), "");
}

#[test]
fn test_empty_node_id_message_round_trips() {
    let message = Envelope::new(TaskId::new("n1", 1)).with_parent_task(TaskId::new("", 5));
    let decoded: Envelope<TaskId> = from_bytes(&to_bytes(&message).unwrap()).unwrap();
    assert_eq!(decoded, message);
    assert!(!decoded.header.parent_task.is_set());
}

#[test]
fn test_deserialized_empty_node_id_is_unset() {
    let task: TaskId = serde_json::from_str(r#"{"node_id":"","id":9}"#).unwrap();
    assert_eq!(task, TaskId::empty());
}

#[test]
fn test_task_id_wire_layout() {
    let bytes = to_bytes(&TaskId::new("n1", 42)).unwrap();
    assert_eq!(bytes, vec![2, b'n', b'1', 0, 0, 0, 0, 0, 0, 0, 42]);

    let decoded: TaskId = from_bytes(&bytes).unwrap();
    assert_eq!(decoded, TaskId::new("n1", 42));
}

#[test]
fn test_task_id_parse() {
    let task: TaskId = "node-a:17".parse().unwrap();
    assert_eq!(task, TaskId::new("node-a", 17));
    assert_eq!(task.to_string(), "node-a:17");

    let task: TaskId = "unset".parse().unwrap();
    assert!(!task.is_set());
}

#[test]
fn test_task_id_parse_rejects_malformed() {
    assert!("no-separator".parse::<TaskId>().is_err());
    assert!(":5".parse::<TaskId>().is_err());
    assert!("node:abc".parse::<TaskId>().is_err());
}

#[test]
fn test_header_precedes_body() {
    let envelope = Envelope::new(TaskId::new("body", 1)).with_parent_task(TaskId::new("p", 9));
    let bytes = to_bytes(&envelope).unwrap();

    // Header: "p" + long 9; body: "body" + long 1.
    assert_eq!(&bytes[..2], &[1, b'p']);
    assert_eq!(bytes[9], 9);
    assert_eq!(bytes[10], 4);

    let decoded: Envelope<TaskId> = from_bytes(&bytes).unwrap();
    assert_eq!(decoded, envelope);
}

#[test]
fn test_header_default_has_no_parent() {
    let header = TransportHeader::default();
    assert!(!header.parent_task.is_set());
    assert_eq!(
        TransportHeader::with_parent_task(TaskId::new("n", 1)).parent_task,
        TaskId::new("n", 1)
    );
}
