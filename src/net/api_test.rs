use super::*;

// =============================================================
// Header and query helpers
// =============================================================

#[test]
fn bearer_formats_authorization_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn students_query_is_empty_when_unfiltered() {
    assert_eq!(students_query(None, None), "");
}

#[test]
fn students_query_includes_only_set_filters() {
    assert_eq!(students_query(Some(2), None), "?batchId=2");
    assert_eq!(students_query(None, Some(7)), "?subjectId=7");
    assert_eq!(students_query(Some(2), Some(7)), "?batchId=2&subjectId=7");
}

#[test]
fn report_query_includes_all_parameters() {
    assert_eq!(
        report_query(3, 1, "2026-08-30"),
        "?subjectId=3&batchId=1&date=2026-08-30"
    );
}

// =============================================================
// Error-message extraction
// =============================================================

#[test]
fn error_message_prefers_error_then_message() {
    assert_eq!(
        error_message(400, r#"{"error":"m1","message":"m2"}"#),
        "m1"
    );
    assert_eq!(error_message(400, r#"{"message":"m2"}"#), "m2");
}

#[test]
fn error_message_passes_plain_text_through() {
    assert_eq!(error_message(404, "Student not found"), "Student not found");
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, ""), "server returned 502");
    assert_eq!(error_message(502, "   "), "server returned 502");
}

#[test]
fn error_message_ignores_non_string_fields() {
    assert_eq!(
        error_message(500, r#"{"error":{"nested":true}}"#),
        r#"{"error":{"nested":true}}"#
    );
}
