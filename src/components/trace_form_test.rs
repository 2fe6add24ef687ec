use super::*;

fn conn(from: &str, to: &str, description: &str) -> Connection {
    Connection {
        from: from.to_owned(),
        to: to.to_owned(),
        description: description.to_owned(),
    }
}

// =============================================================
// trace_success_message
// =============================================================

#[test]
fn success_message_includes_count() {
    assert_eq!(trace_success_message(0), "Found 0 connection(s)");
    assert_eq!(trace_success_message(1), "Found 1 connection(s)");
    assert_eq!(trace_success_message(12), "Found 12 connection(s)");
}

// =============================================================
// apply_trace_outcome
// =============================================================

#[test]
fn trace_success_installs_list_and_reports_count() {
    let mut connections = ConnectionsState::default();
    let (level, message) =
        apply_trace_outcome(&mut connections, Ok(vec![conn("A", "B", "wired")]));
    assert_eq!(level, StatusLevel::Ok);
    assert!(message.contains('1'));
    assert_eq!(connections.total(), 1);
    assert_eq!(connections.visible().len(), 1);
    assert_eq!(connections.snapshot()[0].from, "A");
}

#[test]
fn trace_success_with_zero_connections_reports_zero() {
    let mut connections = ConnectionsState::default();
    connections.replace(vec![conn("old", "old", "old")]);
    let (level, message) = apply_trace_outcome(&mut connections, Ok(vec![]));
    assert_eq!(level, StatusLevel::Ok);
    assert_eq!(message, "Found 0 connection(s)");
    assert!(connections.is_empty());
}

#[test]
fn trace_backend_failure_clears_prior_results() {
    let mut connections = ConnectionsState::default();
    connections.replace(vec![conn("A", "B", "stale"), conn("C", "D", "stale")]);
    let (level, message) = apply_trace_outcome(
        &mut connections,
        Err(ApiError::Backend("No text found on page".to_owned())),
    );
    assert_eq!(level, StatusLevel::Error);
    assert_eq!(message, "No text found on page");
    assert!(connections.is_empty());
}

#[test]
fn trace_network_failure_clears_prior_results_and_prefixes_message() {
    let mut connections = ConnectionsState::default();
    connections.replace(vec![conn("A", "B", "stale")]);
    let (level, message) = apply_trace_outcome(
        &mut connections,
        Err(ApiError::Network("connection refused".to_owned())),
    );
    assert_eq!(level, StatusLevel::Error);
    assert_eq!(message, "Network error: connection refused");
    assert!(connections.is_empty());
}

#[test]
fn trace_success_replaces_previous_results_wholesale() {
    let mut connections = ConnectionsState::default();
    connections.replace(vec![conn("old1", "old1", "x"), conn("old2", "old2", "y")]);
    let (_, _) = apply_trace_outcome(&mut connections, Ok(vec![conn("new", "new", "z")]));
    assert_eq!(connections.total(), 1);
    assert_eq!(connections.snapshot()[0].from, "new");
}

// =============================================================
// apply_preview_outcome
// =============================================================

#[test]
fn preview_success_stores_image_and_reports_ok() {
    let mut ui = UiState::default();
    apply_preview_outcome(&mut ui, Ok("aGVsbG8=".to_owned()));
    assert_eq!(ui.preview_image.as_deref(), Some("aGVsbG8="));
    assert_eq!(ui.status_level, StatusLevel::Ok);
    assert_eq!(ui.status_text, "Preview loaded");
}

#[test]
fn preview_failure_keeps_previous_image() {
    let mut ui = UiState::default();
    apply_preview_outcome(&mut ui, Ok("Zmlyc3Q=".to_owned()));
    apply_preview_outcome(&mut ui, Err(ApiError::Backend("PDF not found".to_owned())));
    // The earlier successful preview stays visible; only the banner changes.
    assert_eq!(ui.preview_image.as_deref(), Some("Zmlyc3Q="));
    assert_eq!(ui.status_level, StatusLevel::Error);
    assert_eq!(ui.status_text, "PDF not found");
}

#[test]
fn preview_network_failure_prefixes_message() {
    let mut ui = UiState::default();
    apply_preview_outcome(&mut ui, Err(ApiError::Network("timeout".to_owned())));
    assert_eq!(ui.status_text, "Network error: timeout");
    assert!(ui.preview_image.is_none());
}
