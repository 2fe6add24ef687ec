use super::*;

#[test]
fn default_form_has_page_one_and_default_model() {
    let form = TraceForm::default();
    assert_eq!(form.page, "1");
    assert_eq!(form.model, DEFAULT_MODEL);
    assert!(form.pdf_path.is_empty());
    assert!(form.api_key.is_empty());
    assert!(form.from_token.is_empty());
    assert!(form.to_token.is_empty());
}

#[test]
fn model_choices_lead_with_the_default() {
    assert_eq!(MODEL_CHOICES[0], DEFAULT_MODEL);
}

#[test]
fn reset_restores_all_defaults() {
    let mut form = TraceForm {
        pdf_path: "/tmp/panel.pdf".to_owned(),
        api_key: "key".to_owned(),
        page: "7".to_owned(),
        model: "gemini-2.0-flash".to_owned(),
        from_token: "X1".to_owned(),
        to_token: "K2".to_owned(),
    };
    form.reset();
    assert_eq!(form, TraceForm::default());
}

// =============================================================
// parse_page
// =============================================================

#[test]
fn parse_page_accepts_positive_numbers() {
    assert_eq!(parse_page("3"), 3);
    assert_eq!(parse_page(" 12 "), 12);
}

#[test]
fn parse_page_falls_back_to_one() {
    assert_eq!(parse_page(""), 1);
    assert_eq!(parse_page("   "), 1);
    assert_eq!(parse_page("abc"), 1);
    assert_eq!(parse_page("0"), 1);
    assert_eq!(parse_page("-2"), 1);
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn preview_request_trims_path_and_parses_page() {
    let form = TraceForm {
        pdf_path: "  /tmp/panel.pdf  ".to_owned(),
        page: "4".to_owned(),
        ..TraceForm::default()
    };
    let request = form.preview_request();
    assert_eq!(request.pdf_path, "/tmp/panel.pdf");
    assert_eq!(request.page, 4);
}

#[test]
fn trace_request_trims_fields_and_keeps_model() {
    let form = TraceForm {
        pdf_path: " /tmp/panel.pdf ".to_owned(),
        api_key: " key ".to_owned(),
        page: "".to_owned(),
        model: "gemini-2.0-flash".to_owned(),
        from_token: " X1 ".to_owned(),
        to_token: " K2 ".to_owned(),
    };
    let request = form.trace_request();
    assert_eq!(request.pdf_path, "/tmp/panel.pdf");
    assert_eq!(request.api_key, "key");
    assert_eq!(request.page, 1);
    assert_eq!(request.model, "gemini-2.0-flash");
    assert_eq!(request.from_token, "X1");
    assert_eq!(request.to_token, "K2");
}
