//! Unit tests for domain constants

use mct_domain::constants::{
    MAX_ARRAY_LENGTH, PREALLOC_LIMIT, TASK_ID_SEPARATOR, VINT_MAX_BYTES, WIRE_FALSE, WIRE_TRUE,
};

#[test]
fn test_boolean_bytes() {
    assert_eq!(WIRE_FALSE, 0);
    assert_eq!(WIRE_TRUE, 1);
}

#[test]
fn test_length_limits() {
    assert_eq!(VINT_MAX_BYTES, 5);
    assert_eq!(MAX_ARRAY_LENGTH, 2_147_483_647);
    assert!(PREALLOC_LIMIT > 0);
    assert!((PREALLOC_LIMIT as u64) < u64::from(MAX_ARRAY_LENGTH));
}

#[test]
fn test_task_id_separator() {
    assert_eq!(TASK_ID_SEPARATOR, ':');
}
