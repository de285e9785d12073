use super::*;

#[test]
fn typed_inputs_are_fields() {
    for input_type in ["text", "email", "tel", "url", "search", "password", "number"] {
        assert!(is_text_type(input_type), "{input_type} should be a field");
    }
}

#[test]
fn hidden_and_choice_inputs_are_left_alone() {
    for input_type in ["hidden", "checkbox", "radio", "file", "submit", "button", "reset", "image"] {
        assert!(!is_text_type(input_type), "{input_type} should not be a field");
    }
}
