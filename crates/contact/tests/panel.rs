use std::time::Duration;

use portfolio_contact::{ContactFormState, ContactPanel, Handoff, Mailbox, SUCCESS_WINDOW};

fn filled() -> ContactPanel {
    ContactPanel::new(ContactFormState {
        name: "Alice".to_owned(),
        subject: "Hello".to_owned(),
        message: "Hi there".to_owned(),
    })
}

#[tokio::test(start_paused = true)]
async fn submit_clears_fields_and_raises_confirmation() {
    let mut panel = filled();
    assert!(!panel.is_submitted());

    let handoff = panel.submit("Mozilla/5.0 (X11; Linux x86_64)", &Mailbox::default());

    assert!(matches!(handoff, Handoff::OpenNew(_)));
    assert_eq!(panel.form, ContactFormState::default());
    assert!(panel.is_submitted());
    assert_eq!(panel.remaining_ms(), SUCCESS_WINDOW.as_millis() as u64);
}

#[tokio::test(start_paused = true)]
async fn confirmation_clears_after_five_seconds_and_not_before() {
    let mut panel = filled();
    panel.submit("Android", &Mailbox::default());

    tokio::time::advance(Duration::from_millis(4_999)).await;
    assert!(panel.is_submitted());
    assert_eq!(panel.remaining_ms(), 1);

    tokio::time::advance(Duration::from_millis(1)).await;
    assert!(!panel.is_submitted());
    assert_eq!(panel.remaining_ms(), 0);

    tokio::time::advance(Duration::from_secs(60)).await;
    assert!(!panel.is_submitted());
}

#[tokio::test(start_paused = true)]
async fn resubmit_restarts_the_window() {
    let mut panel = filled();
    panel.submit("", &Mailbox::default());

    tokio::time::advance(Duration::from_secs(4)).await;
    panel.form = ContactFormState {
        name: "Bob".to_owned(),
        subject: "Again".to_owned(),
        message: "Second note".to_owned(),
    };
    panel.submit("", &Mailbox::default());

    tokio::time::advance(Duration::from_secs(4)).await;
    assert!(panel.is_submitted());
}

#[tokio::test(start_paused = true)]
async fn remaining_time_rounds_up_to_the_next_millisecond() {
    let mut panel = filled();
    panel.submit("", &Mailbox::default());

    tokio::time::advance(Duration::from_micros(1)).await;
    assert_eq!(panel.remaining_ms(), 5_000);

    tokio::time::advance(Duration::from_micros(999)).await;
    assert_eq!(panel.remaining_ms(), 4_999);

    tokio::time::advance(Duration::from_millis(4_998) + Duration::from_micros(500)).await;
    assert!(panel.is_submitted());
    assert_eq!(panel.remaining_ms(), 1);
}
