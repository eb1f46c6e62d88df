use super::*;
use crate::fake::FakeElement;

// =============================================================
// recalculate
// =============================================================

#[test]
fn recalculate_resets_before_measuring() {
    let el = FakeElement::new(54);
    recalculate(&el);
    assert_eq!(el.height_writes(), vec!["auto".to_string(), "54px".to_string()]);
}

#[test]
fn recalculate_is_idempotent() {
    let el = FakeElement::new(72);
    recalculate(&el);
    let first = el.height();
    recalculate(&el);
    assert_eq!(el.height(), first);
    assert_eq!(first, "72px");
}

#[test]
fn recalculate_shrinks_after_deleting_text() {
    let el = FakeElement::new(120);
    recalculate(&el);
    assert_eq!(el.height(), "120px");

    el.set_content_height(40);
    recalculate(&el);
    assert_eq!(el.height(), "40px");
}

#[test]
fn measuring_without_reset_would_stick() {
    let el = FakeElement::new(120);
    recalculate(&el);
    el.set_content_height(40);
    assert_eq!(el.scroll_height(), 120);
}

// =============================================================
// attach
// =============================================================

#[test]
fn attach_without_element_is_a_noop() {
    let attached = attach(None::<FakeElement>).unwrap();
    assert!(attached.is_none());
}

#[test]
fn attach_marks_empty_and_sizes_immediately() {
    let el = FakeElement::new(38);
    let attached = attach(Some(el.clone())).unwrap();
    assert!(attached.is_some());
    assert!(el.is_marked_empty());
    assert_eq!(el.height(), "38px");
    assert_eq!(el.listener_count(), 1);
}

#[test]
fn input_event_resizes_to_scroll_height() {
    let el = FakeElement::new(20);
    let _attached = attach(Some(el.clone())).unwrap();

    // "hello" typed; the harness reports 54px of content.
    el.set_content_height(54);
    el.fire("input");

    assert_eq!(el.height(), "54px");
}

#[test]
fn unrelated_events_do_not_resize() {
    let el = FakeElement::new(20);
    let _attached = attach(Some(el.clone())).unwrap();

    el.set_content_height(54);
    el.fire("click");

    assert_eq!(el.height(), "20px");
}

#[test]
fn detach_stops_resizing() {
    let el = FakeElement::new(20);
    let attached = attach(Some(el.clone())).unwrap();
    if let Some(autogrow) = attached {
        autogrow.detach();
    }

    el.set_content_height(90);
    el.fire("input");

    assert_eq!(el.height(), "20px");
    assert_eq!(el.listener_count(), 0);
}
