#![forbid(unsafe_code)]

//! End-to-end interaction scenarios against a recording host.
//!
//! Each test drives the picker the way a rendering layer would: forwarding
//! native events, advancing the focus clock, and checking the focus moves
//! and notifications that came back.
//!
//! Run:
//!   cargo test -p calpick-widgets --test picker_interaction

use calpick_core::event::{KeyCode, KeyEvent, Modifiers, TouchEvent, TouchPhase};
use calpick_core::geometry::{Position, Rect};
use calpick_core::CalendarDate;
use calpick_runtime::{Phase, Propagation, Subscriptions};
use calpick_widgets::{
    ChangeEvent, DatePicker, FocusTarget, Handling, OpenState, PickerConfig, PickerEvent,
    RecordingHost, SelectOutcome, TextOutcome,
};
use web_time::Duration;

const FOCUS_DELAY: Duration = Duration::from_millis(400);

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

fn picker_with(config: PickerConfig) -> DatePicker {
    DatePicker::new(&config).with_today(d(2024, 1, 15))
}

fn open_picker(config: PickerConfig, host: &mut RecordingHost) -> DatePicker {
    let mut picker = picker_with(config);
    picker.show();
    picker.advance(FOCUS_DELAY, host);
    host.clear();
    picker
}

fn press(picker: &mut DatePicker, code: KeyCode, host: &mut RecordingHost) -> Handling {
    picker.handle_key(&KeyEvent::new(code), FocusTarget::DayGrid, host)
}

fn swipe(picker: &mut DatePicker, from: (f32, f32), to: (f32, f32)) {
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::Start, from.0, from.1));
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::End, to.0, to.1));
}

// ============================================================================
// Open / close lifecycle
// ============================================================================

#[test]
fn open_focuses_month_select_after_delay() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default());
    picker.handle_toggle_click();
    assert_eq!(picker.state(), OpenState::Open);
    assert!(picker.pending_focus_timer().is_some());

    picker.advance(Duration::from_millis(399), &mut host);
    assert!(host.focus_moves.is_empty());

    picker.advance(Duration::from_millis(1), &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::MonthSelect]);
    assert!(picker.pending_focus_timer().is_none());
}

#[test]
fn rapid_show_then_hide_never_focuses_month_select() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default());
    picker.show();
    picker.advance(Duration::from_millis(100), &mut host);
    picker.hide(true);
    picker.advance(Duration::from_secs(2), &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::Toggle]);
    assert_eq!(picker.pending_timer_count(), 0);
}

#[test]
fn repeated_show_keeps_a_single_timer() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default());
    picker.show();
    picker.show();
    picker.show();
    assert_eq!(picker.pending_timer_count(), 1);
    picker.advance(FOCUS_DELAY, &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::MonthSelect]);
}

#[test]
fn hide_without_button_focus_schedules_nothing() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    picker.hide(false);
    assert_eq!(picker.state(), OpenState::Closed);
    assert_eq!(picker.pending_timer_count(), 0);
    picker.advance(Duration::from_secs(1), &mut host);
    assert!(host.focus_moves.is_empty());
}

#[test]
fn escape_closes_and_returns_focus_to_toggle() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let handling = picker.handle_key(&KeyEvent::new(KeyCode::Escape), FocusTarget::YearSelect, &mut host);
    assert_eq!(handling, Handling::Suppress);
    assert!(!picker.is_open());
    picker.advance(FOCUS_DELAY, &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::Toggle]);
}

#[test]
fn escape_cancels_pending_grid_focus() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let _ = press(&mut picker, KeyCode::Right, &mut host);
    let _ = press(&mut picker, KeyCode::Escape, &mut host);
    picker.advance(FOCUS_DELAY, &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::Toggle]);
}

#[test]
fn reopening_starts_from_value_without_active_focus() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default().value("2024-05-10"), &mut host);
    let _ = press(&mut picker, KeyCode::PageDown, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 6, 10));
    assert!(picker.active_focus());
    picker.hide(false);

    picker.show();
    assert_eq!(picker.focused_day(), d(2024, 5, 10));
    assert!(!picker.active_focus());
}

// ============================================================================
// Keyboard navigation
// ============================================================================

#[test]
fn arrow_keys_move_by_day_and_week() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default().value("2024-01-15"), &mut host);
    let _ = press(&mut picker, KeyCode::Left, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 14));
    let _ = press(&mut picker, KeyCode::Down, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 21));
    let _ = press(&mut picker, KeyCode::Up, &mut host);
    let _ = press(&mut picker, KeyCode::Up, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 7));
}

#[test]
fn home_end_follow_first_day_of_week() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default().value("2024-01-17"), &mut host);
    let _ = press(&mut picker, KeyCode::Home, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 15));
    let _ = press(&mut picker, KeyCode::End, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 21));

    let mut picker = open_picker(
        PickerConfig::default().value("2024-01-17").first_day_of_week("sunday"),
        &mut host,
    );
    let _ = press(&mut picker, KeyCode::Home, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 14));
}

#[test]
fn page_keys_clamp_to_month_end() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default().value("2024-01-31"), &mut host);
    let _ = press(&mut picker, KeyCode::PageDown, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 2, 29));

    let mut picker = open_picker(PickerConfig::default().value("2024-02-29"), &mut host);
    let shifted = KeyEvent::new(KeyCode::PageDown).with_modifiers(Modifiers::SHIFT);
    let _ = picker.handle_key(&shifted, FocusTarget::DayGrid, &mut host);
    assert_eq!(picker.focused_day(), d(2025, 2, 28));
}

#[test]
fn navigation_clamps_to_range() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(
        PickerConfig::default()
            .value("2024-01-03")
            .min("2024-01-01")
            .max("2024-01-31"),
        &mut host,
    );
    let _ = press(&mut picker, KeyCode::Up, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 1));
    let _ = press(&mut picker, KeyCode::PageDown, &mut host);
    assert_eq!(picker.focused_day(), d(2024, 1, 31));
}

#[test]
fn navigation_moves_grid_focus_on_next_tick() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    assert_eq!(press(&mut picker, KeyCode::Right, &mut host), Handling::Suppress);
    assert!(host.focus_moves.is_empty());
    picker.advance(Duration::ZERO, &mut host);
    assert_eq!(host.focus_moves, vec![FocusTarget::DayGrid]);
}

#[test]
fn key_release_is_ignored() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let release = KeyEvent::new(KeyCode::Right).with_kind(calpick_core::event::KeyEventKind::Release);
    let handling = picker.handle_key(&release, FocusTarget::DayGrid, &mut host);
    assert_eq!(handling, Handling::PassThrough);
    assert_eq!(picker.focused_day(), d(2024, 1, 15));
}

// ============================================================================
// Focus trap
// ============================================================================

#[test]
fn forward_tab_from_last_element_jumps_to_first() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let handling = picker.handle_key(&KeyEvent::new(KeyCode::Tab), FocusTarget::DayGrid, &mut host);
    assert_eq!(handling, Handling::Suppress);
    assert_eq!(host.focused(), Some(FocusTarget::Close));
}

#[test]
fn forward_tab_from_middle_element_also_jumps_to_first() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let handling = picker.handle_key(&KeyEvent::new(KeyCode::Tab), FocusTarget::YearSelect, &mut host);
    assert_eq!(handling, Handling::Suppress);
    assert_eq!(host.focused(), Some(FocusTarget::Close));
}

#[test]
fn backward_tab_wraps_only_from_first_element() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);

    let handling = picker.handle_key(&KeyEvent::new(KeyCode::BackTab), FocusTarget::Close, &mut host);
    assert_eq!(handling, Handling::Suppress);
    assert_eq!(host.focused(), Some(FocusTarget::DayGrid));

    host.clear();
    let handling = picker.handle_key(&KeyEvent::new(KeyCode::BackTab), FocusTarget::NextMonth, &mut host);
    assert_eq!(handling, Handling::PassThrough);
    assert!(host.focus_moves.is_empty());
}

// ============================================================================
// Selection and text entry
// ============================================================================

#[test]
fn selecting_a_day_commits_and_closes() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let outcome = picker.select_day(d(2024, 1, 20), &mut host);
    let expected = ChangeEvent::new(Some(d(2024, 1, 20)));
    assert_eq!(outcome, SelectOutcome::Committed(expected.clone()));
    assert_eq!(host.events, vec![PickerEvent::Change(expected)]);
    assert_eq!(picker.value_iso(), "2024-01-20");
    assert!(!picker.is_open());

    picker.advance(FOCUS_DELAY, &mut host);
    assert_eq!(host.focused(), Some(FocusTarget::Toggle));
}

#[test]
fn selecting_out_of_range_is_a_no_op() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(
        PickerConfig::default().value("2024-01-15").min("2024-01-10"),
        &mut host,
    );
    let outcome = picker.select_day(d(2024, 1, 5), &mut host);
    assert_eq!(outcome, SelectOutcome::Ignored);
    assert!(host.events.is_empty());
    assert_eq!(picker.value(), Some(d(2024, 1, 15)));
    assert!(picker.is_open());
}

#[test]
fn selecting_adjacent_month_day_browses() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let outcome = picker.select_day(d(2024, 2, 2), &mut host);
    assert_eq!(outcome, SelectOutcome::Navigated(d(2024, 2, 2)));
    assert_eq!(picker.focused_day(), d(2024, 2, 2));
    assert!(picker.is_open());
    assert!(host.events.is_empty());
}

#[test]
fn enter_on_grid_selects_focused_day() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let _ = press(&mut picker, KeyCode::Right, &mut host);
    let outcome = picker.select_focused_day(&mut host);
    assert!(matches!(outcome, SelectOutcome::Committed(ref c) if c.value == "2024-01-16"));
}

#[test]
fn typed_text_commits_in_locale_format() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default().language("fi"));
    let outcome = picker.handle_input_text("5.2.2024", &mut host);
    assert!(matches!(outcome, TextOutcome::Committed(_)));
    assert_eq!(picker.value_iso(), "2024-02-05");
    assert_eq!(picker.input_display(), "5.2.2024");

    let mut picker = picker_with(PickerConfig::default());
    let _ = picker.handle_input_text("2/5/2024", &mut host);
    assert_eq!(picker.value_iso(), "2024-02-05");
}

#[test]
fn clearing_text_emits_empty_value() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default().value("2024-01-15"));
    let outcome = picker.handle_input_text("", &mut host);
    assert_eq!(outcome, TextOutcome::Committed(ChangeEvent::new(None)));
    assert_eq!(host.changes()[0].value, "");
    assert_eq!(picker.value(), None);
    assert_eq!(picker.selected_date_message(), None);
}

#[test]
fn unparseable_text_keeps_previous_value() {
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default().value("2024-01-15"));
    let outcome = picker.handle_input_text("31/31/2024", &mut host);
    assert_eq!(outcome, TextOutcome::Unchanged);
    assert!(host.events.is_empty());
    assert_eq!(picker.value(), Some(d(2024, 1, 15)));
}

// ============================================================================
// Touch gestures
// ============================================================================

#[test]
fn horizontal_swipes_change_month() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    swipe(&mut picker, (100.0, 50.0), (180.0, 55.0));
    assert_eq!(picker.focused_day(), d(2023, 12, 15));
    swipe(&mut picker, (180.0, 50.0), (100.0, 50.0));
    swipe(&mut picker, (180.0, 50.0), (100.0, 50.0));
    assert_eq!(picker.focused_day(), d(2024, 2, 15));
    assert!(!picker.active_focus());
}

#[test]
fn short_swipe_is_ignored() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    swipe(&mut picker, (100.0, 50.0), (169.0, 50.0));
    assert_eq!(picker.focused_day(), d(2024, 1, 15));
}

#[test]
fn downward_swipe_closes_without_focus_move() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::Start, 100.0, 10.0));
    let handling = picker.handle_touch(&TouchEvent::new(TouchPhase::Move, 105.0, 90.0));
    assert_eq!(handling, Handling::Suppress);
    assert!(picker.is_open());
    let handling = picker.handle_touch(&TouchEvent::new(TouchPhase::End, 105.0, 90.0));
    assert_eq!(handling, Handling::Suppress);
    assert!(!picker.is_open());
    picker.advance(FOCUS_DELAY, &mut host);
    assert!(host.focus_moves.is_empty());
}

#[test]
fn downward_swipe_without_move_suppresses_default() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::Start, 0.0, 0.0));
    let handling = picker.handle_touch(&TouchEvent::new(TouchPhase::End, 0.0, 100.0));
    assert_eq!(handling, Handling::Suppress);
    assert!(!picker.is_open());
}

#[test]
fn downward_dip_then_horizontal_end_browses_instead_of_closing() {
    let mut host = RecordingHost::new();
    let mut picker = open_picker(PickerConfig::default(), &mut host);
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::Start, 200.0, 0.0));
    let _ = picker.handle_touch(&TouchEvent::new(TouchPhase::Move, 200.0, 80.0));
    assert!(picker.is_open());
    let handling = picker.handle_touch(&TouchEvent::new(TouchPhase::End, 100.0, 0.0));
    assert_eq!(handling, Handling::PassThrough);
    assert!(picker.is_open());
    assert_eq!(picker.focused_day(), d(2024, 2, 15));
}

// ============================================================================
// Outside interaction
// ============================================================================

fn attached_picker(subs: &mut Subscriptions, host: &mut RecordingHost) -> DatePicker {
    let mut picker = open_picker(PickerConfig::default(), host);
    picker.attach(subs);
    picker.set_regions(Rect::new(10.0, 10.0, 40.0, 20.0), Rect::new(0.0, 0.0, 10.0, 2.0));
    picker
}

#[test]
fn pointer_down_outside_closes_without_focus_move() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let mut picker = attached_picker(&mut subs, &mut host);
    picker.handle_document_pointer_down(Position::new(100.0, 100.0));
    assert!(!picker.is_open());
    picker.advance(FOCUS_DELAY, &mut host);
    assert!(host.focus_moves.is_empty());
}

#[test]
fn pointer_down_inside_dialog_or_trigger_is_ignored() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let mut picker = attached_picker(&mut subs, &mut host);
    picker.handle_document_pointer_down(Position::new(15.0, 15.0));
    assert!(picker.is_open());
    picker.handle_document_pointer_down(Position::new(2.0, 1.0));
    assert!(picker.is_open());
}

#[test]
fn detached_picker_ignores_pointer_down() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let mut picker = attached_picker(&mut subs, &mut host);
    picker.detach(&mut subs);
    assert!(subs.is_empty());
    assert_eq!(picker.subscription(), None);
    picker.handle_document_pointer_down(Position::new(100.0, 100.0));
    assert!(picker.is_open());
}

#[test]
fn capture_listener_closes_even_when_target_stops_propagation() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let target_listener = subs.subscribe(Phase::Bubble, "target");
    let mut picker = attached_picker(&mut subs, &mut host);
    let mut seen = Vec::new();
    let ran = picker.dispatch_document_pointer_down(
        &subs,
        Position::new(100.0, 100.0),
        |id, phase| {
            seen.push((id, phase));
            Propagation::Stop
        },
    );
    assert_eq!(ran, 2);
    assert_eq!(seen, vec![(target_listener, Phase::Bubble)]);
    assert!(!picker.is_open());
}

#[test]
fn earlier_capture_listener_stopping_propagation_shields_picker() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let _blocker = subs.subscribe(Phase::Capture, "modal-shield");
    let mut picker = attached_picker(&mut subs, &mut host);
    let ran = picker.dispatch_document_pointer_down(
        &subs,
        Position::new(100.0, 100.0),
        |_, _| Propagation::Stop,
    );
    assert_eq!(ran, 1);
    assert!(picker.is_open());
}

#[test]
fn dispatch_inside_dialog_keeps_picker_open() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let mut picker = attached_picker(&mut subs, &mut host);
    let ran = picker.dispatch_document_pointer_down(
        &subs,
        Position::new(15.0, 15.0),
        |_, _| Propagation::Continue,
    );
    assert_eq!(ran, 1);
    assert!(picker.is_open());
}

#[test]
fn attach_is_idempotent_and_uses_capture_phase() {
    let mut subs = Subscriptions::new();
    let mut picker = picker_with(PickerConfig::default());
    let first = picker.attach(&mut subs);
    let second = picker.attach(&mut subs);
    assert_eq!(first, second);
    assert_eq!(subs.len(), 1);
    assert_eq!(subs.dispatch_order(), vec![first]);
}

// ============================================================================
// Disabled
// ============================================================================

#[test]
fn disabled_picker_is_inert() {
    let mut subs = Subscriptions::new();
    let mut host = RecordingHost::new();
    let mut picker = picker_with(PickerConfig::default().value("2024-01-15").disabled(true));
    picker.attach(&mut subs);

    picker.handle_toggle_click();
    assert!(!picker.is_open());
    assert_eq!(picker.pending_timer_count(), 0);

    assert_eq!(picker.select_day(d(2024, 1, 20), &mut host), SelectOutcome::Ignored);
    assert_eq!(picker.handle_input_text("", &mut host), TextOutcome::Unchanged);
    picker.handle_input_focus(&mut host);
    picker.next_month();
    picker.select_year(2030);

    assert!(host.events.is_empty());
    assert_eq!(picker.value(), Some(d(2024, 1, 15)));
    assert_eq!(picker.focused_day(), d(2024, 1, 15));
}
