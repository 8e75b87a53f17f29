use super::*;

fn filled() -> ContactForm {
    ContactForm {
        name: " Ada ".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "Hello there".to_owned(),
        status: SubmitStatus::Idle,
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn full_cycle_returns_to_idle() {
    let mut form = filled();
    let payload = form.begin_submit().expect("valid form");
    assert_eq!(payload.name, "Ada");
    assert_eq!(form.status, SubmitStatus::Sending);

    form.complete().expect("sending form completes");
    assert_eq!(form.status, SubmitStatus::Sent);
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.message.is_empty());

    form.reset();
    assert!(form.is_idle());
}

#[test]
fn double_submit_is_rejected() {
    let mut form = filled();
    form.begin_submit().expect("valid form");
    assert_eq!(form.begin_submit(), Err(ContactError::Busy));
}

#[test]
fn complete_requires_sending() {
    let mut form = filled();
    assert_eq!(form.complete(), Err(ContactError::NotSending));
    assert_eq!(form.name, " Ada ");
}

#[test]
fn reset_only_leaves_sent() {
    let mut form = filled();
    form.begin_submit().expect("valid form");
    form.reset();
    assert_eq!(form.status, SubmitStatus::Sending);
}

#[test]
fn failed_validation_keeps_idle_and_fields() {
    let mut form = filled();
    form.message = "   ".to_owned();
    assert_eq!(form.begin_submit(), Err(ContactError::MissingMessage));
    assert!(form.is_idle());
    assert_eq!(form.email, "ada@example.com");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_name_rejected_first() {
    let mut form = ContactForm::default();
    assert_eq!(form.begin_submit(), Err(ContactError::MissingName));
}

#[test]
fn bad_email_rejected() {
    let mut form = filled();
    form.email = "ada.example.com".to_owned();
    assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail));
}

#[test]
fn email_shapes() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("first.last@sub.example.org"));
    assert!(!is_plausible_email("@b.co"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("a@.co"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("a@@b.co"));
    assert!(!is_plausible_email("a b@c.co"));
}

#[test]
fn payload_serializes_as_json_object() {
    let mut form = filled();
    let payload = form.begin_submit().expect("valid form");
    let json = serde_json::to_value(&payload).expect("serializable");
    assert_eq!(json["email"], "ada@example.com");
    assert_eq!(json["message"], "Hello there");
}

#[test]
fn button_label_follows_status() {
    let mut form = filled();
    assert_eq!(form.button_label(), "Send Message");
    form.begin_submit().expect("valid form");
    assert_eq!(form.button_label(), "Sending...");
    form.complete().expect("completes");
    assert_eq!(form.button_label(), "Sent Successfully!");
}
