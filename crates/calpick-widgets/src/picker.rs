#![forbid(unsafe_code)]

//! The composed date picker engine.
//!
//! [`DatePicker`] wires the cursor, open state machine, focus trap, value
//! controller, gesture recognizer and outside-interaction detector into one
//! widget instance. The host forwards native events to the `handle_*`
//! methods and drives deferred focus with [`DatePicker::advance`].
//!
//! # Invariants
//!
//! 1. The focused day always lies inside the configured range.
//! 2. At most one lifecycle focus timer is pending; show/hide cancel it
//!    before scheduling.
//! 3. Hiding cancels both the lifecycle timer and any pending day-grid
//!    focus, so no deferred focus lands in a closed dialog.
//! 4. While `disabled`, every handler is inert and `show()` does nothing.
//!
//! # Example
//!
//! ```
//! use calpick_core::event::{KeyCode, KeyEvent};
//! use calpick_widgets::config::PickerConfig;
//! use calpick_widgets::focus_trap::FocusTarget;
//! use calpick_widgets::host::RecordingHost;
//! use calpick_widgets::picker::DatePicker;
//! use web_time::Duration;
//!
//! let mut host = RecordingHost::new();
//! let mut picker = DatePicker::new(&PickerConfig::default().value("2024-01-15"));
//!
//! picker.show();
//! picker.advance(Duration::from_millis(400), &mut host);
//! assert_eq!(host.focused(), Some(FocusTarget::MonthSelect));
//!
//! let _ = picker.handle_key(&KeyEvent::new(KeyCode::Right), FocusTarget::DayGrid, &mut host);
//! assert_eq!(picker.focused_day().day(), 16);
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use calpick_core::date::{CalendarDate, DateRange};
use calpick_core::event::{KeyEvent, TouchEvent};
use calpick_core::geometry::{Position, Rect};
use calpick_core::gesture::{GestureConfig, GestureRecognizer, SwipeCommand};
use calpick_core::keymap::{KeyCommand, KeyCommandMapper};
use calpick_i18n::{DateAdapter, Locale};
use calpick_runtime::{Phase, Propagation, SubId, Subscriptions, TimerHandle, TimerQueue};
use web_time::Duration;

use crate::calendar::{self, MonthOption, MonthView, ViewContext};
use crate::config::{PickerConfig, ResolvedConfig};
use crate::cursor::FocusedDayCursor;
use crate::focus_trap::{FocusTarget, FocusTrap, TrapDecision};
use crate::host::{Handling, PickerEvent, PickerHost};
use crate::open_state::{DeferredFocus, OpenState, OpenStateMachine};
use crate::outside::OutsideInteractionDetector;
use crate::value::{SelectOutcome, TextOutcome, ValueController};

type DatePredicate = Box<dyn Fn(CalendarDate) -> bool>;

/// One date picker widget instance.
pub struct DatePicker {
    config: ResolvedConfig,
    today: CalendarDate,
    cursor: FocusedDayCursor,
    value: ValueController,
    open: OpenStateMachine,
    timers: TimerQueue<DeferredFocus>,
    grid_focus: Option<TimerHandle>,
    trap: FocusTrap,
    keymap: KeyCommandMapper,
    gestures: GestureRecognizer,
    outside: OutsideInteractionDetector,
    subscription: Option<SubId>,
    is_date_disabled: Option<DatePredicate>,
}

impl fmt::Debug for DatePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePicker")
            .field("state", &self.open.state())
            .field("value", &self.value.value())
            .field("focused_day", &self.cursor.focused_day())
            .field("active_focus", &self.cursor.active_focus())
            .field("pending_timers", &self.timers.len())
            .field("subscribed", &self.subscription.is_some())
            .finish()
    }
}

impl DatePicker {
    /// Create a picker from host configuration. Never fails: malformed
    /// configuration degrades to defaults.
    #[must_use]
    pub fn new(config: &PickerConfig) -> Self {
        Self::from_resolved(config.resolve())
    }

    #[must_use]
    pub fn from_resolved(config: ResolvedConfig) -> Self {
        let today = CalendarDate::today();
        let start = config.value.unwrap_or(today);
        Self {
            cursor: FocusedDayCursor::new(start, config.range, config.first_day_of_week),
            value: ValueController::new(config.value),
            open: OpenStateMachine::new(config.focus_delay),
            timers: TimerQueue::new(),
            grid_focus: None,
            trap: FocusTrap::default(),
            keymap: KeyCommandMapper::new(),
            gestures: GestureRecognizer::new(GestureConfig::default()),
            outside: OutsideInteractionDetector::default(),
            subscription: None,
            is_date_disabled: None,
            today,
            config,
        }
    }

    /// Override "today", which seeds the cursor when there is no value.
    #[must_use]
    pub fn with_today(mut self, today: CalendarDate) -> Self {
        self.today = today;
        if self.value.value().is_none() {
            self.cursor.set_focused_day(today);
        }
        self
    }

    /// Install a predicate marking dates that cannot be selected.
    #[must_use]
    pub fn with_date_disabled(mut self, predicate: impl Fn(CalendarDate) -> bool + 'static) -> Self {
        self.is_date_disabled = Some(Box::new(predicate));
        self
    }

    /// Replace the dialog's focus trap membership.
    #[must_use]
    pub fn with_focus_trap(mut self, trap: FocusTrap) -> Self {
        self.trap = trap;
        self
    }

    #[must_use]
    pub fn with_gesture_config(mut self, config: GestureConfig) -> Self {
        self.gestures = GestureRecognizer::new(config);
        self
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    #[must_use]
    pub fn locale(&self) -> &'static Locale {
        self.config.locale
    }

    #[must_use]
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    #[must_use]
    pub fn value(&self) -> Option<CalendarDate> {
        self.value.value()
    }

    /// The committed value as `YYYY-MM-DD`, or empty.
    #[must_use]
    pub fn value_iso(&self) -> String {
        self.value.iso()
    }

    #[must_use]
    pub fn focused_day(&self) -> CalendarDate {
        self.cursor.focused_day()
    }

    #[must_use]
    pub fn active_focus(&self) -> bool {
        self.cursor.active_focus()
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.cursor.range()
    }

    #[must_use]
    pub fn state(&self) -> OpenState {
        self.open.state()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.is_open()
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }

    /// The pending open/close focus timer, if any.
    #[must_use]
    pub fn pending_focus_timer(&self) -> Option<TimerHandle> {
        self.open.pending()
    }

    /// Number of deferred focus moves waiting to fire.
    #[must_use]
    pub fn pending_timer_count(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn focus_trap(&self) -> &FocusTrap {
        &self.trap
    }

    /// Whether `day` passes the host's availability predicate.
    #[must_use]
    pub fn is_date_available(&self, day: CalendarDate) -> bool {
        self.is_date_disabled.as_ref().is_none_or(|f| !f(day))
    }

    // --- Public operations ---

    /// Move focus to the text input. No state change.
    pub fn set_focus(&self, host: &mut dyn PickerHost) {
        host.focus(FocusTarget::Input);
    }

    /// Open the dialog. Re-entrant: calling while open re-runs the side
    /// effects and replaces the pending focus timer.
    pub fn show(&mut self) {
        if self.config.disabled {
            return;
        }
        let start = self.value.value().unwrap_or(self.today);
        self.cursor.set_focused_day(start);
        self.cursor.set_active_focus(false);
        self.cancel_grid_focus();
        self.open.show(&mut self.timers);
    }

    /// Close the dialog, optionally returning focus to the trigger once the
    /// exit transition has had time to finish.
    pub fn hide(&mut self, move_focus_to_button: bool) {
        self.cancel_grid_focus();
        self.gestures.reset();
        self.open.hide(&mut self.timers, move_focus_to_button);
    }

    /// Advance the deferred-focus clock and perform every focus move that
    /// came due.
    pub fn advance(&mut self, elapsed: Duration, host: &mut dyn PickerHost) {
        for (handle, task) in self.timers.advance(elapsed) {
            self.open.timer_fired(handle);
            if self.grid_focus == Some(handle) {
                self.grid_focus = None;
            }
            match task {
                DeferredFocus::MonthSelect => host.focus(FocusTarget::MonthSelect),
                DeferredFocus::Toggle => host.focus(FocusTarget::Toggle),
                DeferredFocus::DayGrid => {
                    if self.open.is_open() && self.cursor.active_focus() {
                        host.focus(FocusTarget::DayGrid);
                    }
                }
            }
        }
    }

    // --- Event handlers ---

    /// The trigger button was activated.
    pub fn handle_toggle_click(&mut self) {
        self.show();
    }

    /// A key was pressed while `origin` had focus inside the dialog.
    ///
    /// Navigation keys act only on the day grid; Escape and Tab act anywhere
    /// in the dialog. Keys are ignored while closed.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        origin: FocusTarget,
        host: &mut dyn PickerHost,
    ) -> Handling {
        if self.config.disabled || !self.open.is_open() {
            return Handling::PassThrough;
        }
        let Some(command) = self.keymap.map(event) else {
            return Handling::PassThrough;
        };
        tracing::trace!(?command, ?origin, "Key command");

        if command.is_tab() {
            let backward = command == KeyCommand::TabBackward;
            return match self.trap.on_tab(origin, backward) {
                TrapDecision::MoveTo(target) => {
                    host.focus(target);
                    Handling::Suppress
                }
                TrapDecision::PassThrough => Handling::PassThrough,
            };
        }
        if command.is_cursor_move() && origin != FocusTarget::DayGrid {
            return Handling::PassThrough;
        }
        if command.activates_focus() {
            self.cursor.set_active_focus(true);
        }

        match command {
            KeyCommand::MoveDays(n) => self.cursor.move_by_days(i64::from(n)),
            KeyCommand::MoveWeeks(n) => self.cursor.move_by_weeks(i64::from(n)),
            KeyCommand::MoveMonths(n) => self.cursor.move_by_months(n),
            KeyCommand::MoveYears(n) => self.cursor.move_by_years(n),
            KeyCommand::StartOfWeek => self.cursor.move_to_start_of_week(),
            KeyCommand::EndOfWeek => self.cursor.move_to_end_of_week(),
            KeyCommand::Close => self.hide(true),
            KeyCommand::TabForward | KeyCommand::TabBackward => {}
        }
        if command.is_cursor_move() {
            self.schedule_grid_focus();
        }

        if command.suppresses_default() {
            Handling::Suppress
        } else {
            Handling::PassThrough
        }
    }

    /// A touch event inside the dialog.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> Handling {
        if self.config.disabled || !self.open.is_open() {
            return Handling::PassThrough;
        }
        let outcome = self.gestures.process(event);
        match outcome.command {
            SwipeCommand::PreviousMonth => self.browse_months(-1),
            SwipeCommand::NextMonth => self.browse_months(1),
            SwipeCommand::Close => self.hide(false),
            SwipeCommand::None => {}
        }
        if outcome.suppress_default {
            Handling::Suppress
        } else {
            Handling::PassThrough
        }
    }

    /// A day in the grid was clicked (or activated).
    pub fn select_day(&mut self, day: CalendarDate, host: &mut dyn PickerHost) -> SelectOutcome {
        if self.config.disabled {
            return SelectOutcome::Ignored;
        }
        let predicate = self.is_date_disabled.as_deref();
        let outcome = self
            .value
            .select(day, &mut self.cursor, |d| predicate.is_none_or(|f| !f(d)));
        match &outcome {
            SelectOutcome::Committed(change) => {
                host.emit(PickerEvent::Change(change.clone()));
                self.hide(true);
            }
            SelectOutcome::Navigated(_) => self.cursor.set_active_focus(false),
            SelectOutcome::Ignored => {}
        }
        outcome
    }

    /// Activate the day under the cursor (Enter/Space on the grid).
    pub fn select_focused_day(&mut self, host: &mut dyn PickerHost) -> SelectOutcome {
        self.select_day(self.cursor.focused_day(), host)
    }

    /// The text input's content changed.
    pub fn handle_input_text(&mut self, raw: &str, host: &mut dyn PickerHost) -> TextOutcome {
        if self.config.disabled {
            return TextOutcome::Unchanged;
        }
        let adapter = self.config.locale.date_adapter();
        let outcome = self.value.set_from_text(raw, &adapter);
        if let TextOutcome::Committed(change) = &outcome {
            host.emit(PickerEvent::Change(change.clone()));
        }
        outcome
    }

    pub fn handle_input_focus(&self, host: &mut dyn PickerHost) {
        if !self.config.disabled {
            host.emit(PickerEvent::Focus);
        }
    }

    pub fn handle_input_blur(&self, host: &mut dyn PickerHost) {
        if !self.config.disabled {
            host.emit(PickerEvent::Blur);
        }
    }

    /// The previous-month button was clicked.
    pub fn prev_month(&mut self) {
        if !self.config.disabled && !self.is_prev_month_disabled() {
            self.browse_months(-1);
        }
    }

    /// The next-month button was clicked.
    pub fn next_month(&mut self) {
        if !self.config.disabled && !self.is_next_month_disabled() {
            self.browse_months(1);
        }
    }

    /// The month selector changed to `month` (1-based).
    pub fn select_month(&mut self, month: u32) {
        if self.config.disabled {
            return;
        }
        self.cursor.select_month(month);
        self.cursor.set_active_focus(false);
    }

    /// The year selector changed to `year`.
    pub fn select_year(&mut self, year: i32) {
        if self.config.disabled {
            return;
        }
        self.cursor.select_year(year);
        self.cursor.set_active_focus(false);
    }

    fn browse_months(&mut self, n: i32) {
        self.cursor.move_by_months(n);
        self.cursor.set_active_focus(false);
    }

    // --- Outside interaction ---

    /// Register the document-level capture listener. Idempotent.
    pub fn attach(&mut self, subscriptions: &mut Subscriptions) -> SubId {
        if let Some(id) = self.subscription.filter(|&id| subscriptions.is_active(id)) {
            return id;
        }
        let id = subscriptions.subscribe(Phase::Capture, "calpick-outside-pointer");
        self.subscription = Some(id);
        id
    }

    /// Deregister the document-level listener on teardown.
    pub fn detach(&mut self, subscriptions: &mut Subscriptions) {
        if let Some(id) = self.subscription.take() {
            subscriptions.unsubscribe(id);
        }
    }

    /// The id of the active document listener, if attached.
    #[must_use]
    pub fn subscription(&self) -> Option<SubId> {
        self.subscription
    }

    /// Update the owned regions after layout.
    pub fn set_regions(&mut self, dialog: Rect, trigger: Rect) {
        self.outside.set_regions(dialog, trigger);
    }

    /// A pointer-down reached the document capture listener. Closes the
    /// dialog, without returning focus, when the target is outside the
    /// dialog and trigger. Ignored unless attached.
    pub fn handle_document_pointer_down(&mut self, target: Position) {
        if self.subscription.is_none() || self.config.disabled {
            return;
        }
        if self.outside.should_close(target, self.open.is_open()) {
            tracing::debug!(x = target.x, y = target.y, "Pointer down outside picker");
            self.hide(false);
        }
    }

    /// Deliver a document pointer-down through `subscriptions`. This
    /// picker's listener runs in its capture slot and never stops
    /// propagation; `other` handles every other listener. Returns the number
    /// of listeners that ran.
    pub fn dispatch_document_pointer_down<F>(
        &mut self,
        subscriptions: &Subscriptions,
        target: Position,
        mut other: F,
    ) -> usize
    where
        F: FnMut(SubId, Phase) -> Propagation,
    {
        let own = self.subscription;
        subscriptions.dispatch(|id, phase| {
            if Some(id) == own {
                self.handle_document_pointer_down(target);
                Propagation::Continue
            } else {
                other(id, phase)
            }
        })
    }

    // --- View model ---

    /// The grid for the focused month.
    #[must_use]
    pub fn month_view(&self) -> MonthView {
        let ctx = ViewContext {
            focused: self.cursor.focused_day(),
            first_day_of_week: self.cursor.first_day_of_week(),
            range: self.cursor.range(),
            today: self.today,
            selected: self.value.value(),
        };
        calendar::month_view(&ctx, |d| self.is_date_available(d))
    }

    #[must_use]
    pub fn month_options(&self) -> Vec<MonthOption> {
        calendar::month_options(self.cursor.focused_day().year(), self.cursor.range(), self.locale())
    }

    #[must_use]
    pub fn year_options(&self) -> RangeInclusive<i32> {
        calendar::year_options(self.cursor.focused_day(), self.cursor.range())
    }

    #[must_use]
    pub fn is_prev_month_disabled(&self) -> bool {
        calendar::is_prev_month_disabled(self.cursor.focused_day(), self.cursor.range())
    }

    #[must_use]
    pub fn is_next_month_disabled(&self) -> bool {
        calendar::is_next_month_disabled(self.cursor.focused_day(), self.cursor.range())
    }

    /// Short weekday names in grid column order.
    #[must_use]
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        self.locale().weekday_headers(self.cursor.first_day_of_week())
    }

    /// Dialog heading, e.g. "January 2024".
    #[must_use]
    pub fn heading(&self) -> String {
        let focused = self.cursor.focused_day();
        format!("{} {}", self.locale().month_name(focused.month()), focused.year())
    }

    /// The committed value in the locale's text format, or empty.
    #[must_use]
    pub fn input_display(&self) -> String {
        let adapter = self.locale().date_adapter();
        self.value.value().map(|d| adapter.format(d)).unwrap_or_default()
    }

    /// Assistive text announcing the committed value, if any.
    #[must_use]
    pub fn selected_date_message(&self) -> Option<String> {
        let day = self.value.value()?;
        let adapter = self.locale().date_adapter();
        Some(format!(
            "{} {}",
            self.locale().selected_date_message,
            adapter.format(day)
        ))
    }

    // --- Deferred grid focus ---

    fn schedule_grid_focus(&mut self) {
        if !(self.open.is_open() && self.cursor.active_focus()) {
            return;
        }
        self.cancel_grid_focus();
        self.grid_focus = Some(self.timers.schedule(Duration::ZERO, DeferredFocus::DayGrid));
    }

    fn cancel_grid_focus(&mut self) {
        if let Some(handle) = self.grid_focus.take() {
            self.timers.cancel(handle);
        }
    }
}
