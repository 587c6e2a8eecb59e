use portfolio_core::{copy_toast_message, ToastState, COPY_FAILED_MESSAGE, MESSAGE_SENT};

#[test]
fn show_sets_message() {
    let mut toast = ToastState::new();
    assert_eq!(toast.message(), None);
    toast.show(MESSAGE_SENT);
    assert_eq!(toast.message(), Some("Message sent"));
}

#[test]
fn second_show_replaces_and_only_its_timer_clears() {
    let mut toast = ToastState::new();
    let first = toast.show("Email copied");
    let second = toast.show("Copy failed");
    assert_eq!(toast.message(), Some("Copy failed"));
    assert!(!toast.expire(first));
    assert_eq!(toast.message(), Some("Copy failed"));
    assert!(toast.expire(second));
    assert_eq!(toast.message(), None);
}

#[test]
fn dismiss_clears_and_disarms() {
    let mut toast = ToastState::new();
    let ticket = toast.show("Email copied");
    toast.dismiss();
    assert_eq!(toast.message(), None);
    assert!(!toast.expire(ticket));
}

#[test]
fn expire_after_expire_is_noop() {
    let mut toast = ToastState::new();
    let ticket = toast.show("Email copied");
    assert!(toast.expire(ticket));
    assert!(!toast.expire(ticket));
}

#[test]
fn copy_messages() {
    assert_eq!(copy_toast_message::<()>("Email", &Ok(())), "Email copied");
    assert_eq!(copy_toast_message("Email", &Err("NotAllowedError")), COPY_FAILED_MESSAGE);
    assert_eq!(copy_toast_message("Email", &Err(())), "Copy failed");
}
