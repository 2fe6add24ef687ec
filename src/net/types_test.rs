use super::*;
use serde_json::json;

// =============================================================
// Request serialization: exact wire field names
// =============================================================

#[test]
fn preview_request_serializes_wire_fields() {
    let request = PreviewRequest { pdf_path: "/tmp/panel.pdf".to_owned(), page: 3 };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value, json!({"pdf_path": "/tmp/panel.pdf", "page": 3}));
}

#[test]
fn trace_request_serializes_wire_fields() {
    let request = TraceRequest {
        pdf_path: "/tmp/panel.pdf".to_owned(),
        api_key: "key".to_owned(),
        page: 1,
        model: "gemini-2.0-flash-lite".to_owned(),
        from_token: "X1".to_owned(),
        to_token: "K2".to_owned(),
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "pdf_path": "/tmp/panel.pdf",
            "api_key": "key",
            "page": 1,
            "model": "gemini-2.0-flash-lite",
            "from_token": "X1",
            "to_token": "K2",
        })
    );
}

// =============================================================
// Response decoding: tolerant of missing fields
// =============================================================

#[test]
fn trace_response_decodes_success_body() {
    let body: TraceResponse = serde_json::from_value(json!({
        "success": true,
        "connections": [
            {"from": "X1-1", "to": "Q00", "description": "Q00 GCB OPEN"},
        ],
    }))
    .unwrap();
    assert!(body.success);
    assert_eq!(body.connections.len(), 1);
    assert_eq!(body.connections[0].from, "X1-1");
    assert_eq!(body.connections[0].description, "Q00 GCB OPEN");
    assert!(body.error.is_none());
}

#[test]
fn trace_response_decodes_error_body_without_success_flag() {
    let body: TraceResponse =
        serde_json::from_value(json!({"error": "Label mismatch - check FROM/TO tokens"})).unwrap();
    assert!(!body.success);
    assert!(body.connections.is_empty());
    assert_eq!(body.error.as_deref(), Some("Label mismatch - check FROM/TO tokens"));
}

#[test]
fn trace_response_decodes_empty_object() {
    let body: TraceResponse = serde_json::from_value(json!({})).unwrap();
    assert!(!body.success);
    assert!(body.connections.is_empty());
    assert!(body.error.is_none());
}

#[test]
fn connection_missing_fields_read_as_empty() {
    let connection: Connection = serde_json::from_value(json!({"from": "X1"})).unwrap();
    assert_eq!(connection.from, "X1");
    assert_eq!(connection.to, "");
    assert_eq!(connection.description, "");
}

#[test]
fn preview_response_decodes_success_body() {
    let body: PreviewResponse =
        serde_json::from_value(json!({"success": true, "image": "aGVsbG8="})).unwrap();
    assert!(body.success);
    assert_eq!(body.image.as_deref(), Some("aGVsbG8="));
}

#[test]
fn preview_response_decodes_error_body() {
    let body: PreviewResponse = serde_json::from_value(json!({"error": "PDF not found"})).unwrap();
    assert!(!body.success);
    assert!(body.image.is_none());
    assert_eq!(body.error.as_deref(), Some("PDF not found"));
}
