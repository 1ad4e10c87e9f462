// ============================================================================
// ALERT SESSION - finite-state machine of the panic flow
// ============================================================================
// Pure state, no DOM or wasm types. Events arrive as AlertAction dispatches;
// anything invalid for the current phase is a silent no-op, which is what
// makes a stray timer tick against an already-settled session harmless.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::config::CONFIRM_WINDOW_SECS;

/// Current mode of the widget. Selects which of the three views is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Confirming,
    Activated,
}

/// Events that may mutate the session. Timer ticks, user actions and the
/// settling of the outbound request all go through here.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertAction {
    /// User pressed the panic control.
    Press,
    /// One second of the confirm window elapsed.
    Tick,
    /// User backed out of the confirm screen.
    Cancel,
    /// User confirmed; the caller fires the request alongside this.
    Confirm,
    /// The outbound request (or its preflight config check) finished.
    Settled(Result<(), String>),
    /// User dismissed the activated screen.
    Reset,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AlertSession {
    pub phase: Phase,
    pub seconds_remaining: u32,
    pub is_sending: bool,
    pub last_error: Option<String>,
}

impl Default for AlertSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            seconds_remaining: 0,
            is_sending: false,
            last_error: None,
        }
    }

    /// Idle → Confirming. Opens the confirm window and clears any stale error.
    fn press(&mut self) {
        if self.phase == Phase::Idle && !self.is_sending {
            self.phase = Phase::Confirming;
            self.seconds_remaining = CONFIRM_WINDOW_SECS;
            self.last_error = None;
        }
    }

    /// One countdown step. Reaching zero abandons the alert silently.
    fn tick(&mut self) {
        if self.phase != Phase::Confirming || self.is_sending {
            return;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        if self.seconds_remaining == 0 {
            self.phase = Phase::Idle;
        }
    }

    /// Confirming → Idle without sending anything.
    fn cancel(&mut self) {
        if self.phase == Phase::Confirming {
            self.phase = Phase::Idle;
            self.seconds_remaining = 0;
        }
    }

    /// Confirming → sending. Leaving Confirming drops the countdown interval,
    /// so no tick can fire between confirm and settle.
    fn confirm(&mut self) {
        if self.phase == Phase::Confirming && !self.is_sending {
            self.phase = Phase::Idle;
            self.seconds_remaining = 0;
            self.is_sending = true;
            self.last_error = None;
        }
    }

    /// Request finished: Activated on success, Idle + message on any failure
    /// (config, HTTP or network — the caller already collapsed them to one
    /// string).
    fn settle(&mut self, result: Result<(), String>) {
        if !self.is_sending {
            return;
        }
        self.is_sending = false;
        self.seconds_remaining = 0;
        match result {
            Ok(()) => {
                self.phase = Phase::Activated;
                self.last_error = None;
            }
            Err(message) => {
                self.phase = Phase::Idle;
                self.last_error = Some(message);
            }
        }
    }

    /// Activated → Idle, ready for a fresh flow.
    fn reset(&mut self) {
        if self.phase == Phase::Activated {
            self.phase = Phase::Idle;
            self.seconds_remaining = 0;
            self.last_error = None;
        }
    }

    /// Applies one event of the transition table.
    pub fn apply(&mut self, action: AlertAction) {
        match action {
            AlertAction::Press => self.press(),
            AlertAction::Tick => self.tick(),
            AlertAction::Cancel => self.cancel(),
            AlertAction::Confirm => self.confirm(),
            AlertAction::Settled(result) => self.settle(result),
            AlertAction::Reset => self.reset(),
        }
    }
}

impl Reducible for AlertSession {
    type Action = AlertAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirming() -> AlertSession {
        let mut session = AlertSession::new();
        session.apply(AlertAction::Press);
        session
    }

    fn sending() -> AlertSession {
        let mut session = confirming();
        session.apply(AlertAction::Confirm);
        session
    }

    #[test]
    fn press_opens_confirm_window() {
        let session = confirming();
        assert_eq!(session.phase, Phase::Confirming);
        assert_eq!(session.seconds_remaining, CONFIRM_WINDOW_SECS);
        assert!(!session.is_sending);
    }

    #[test]
    fn press_clears_previous_error() {
        let mut session = AlertSession::new();
        session.last_error = Some("server down".to_string());
        session.apply(AlertAction::Press);
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn ticks_decrease_by_exactly_one() {
        let mut session = confirming();
        for expected in (0..CONFIRM_WINDOW_SECS).rev() {
            session.apply(AlertAction::Tick);
            assert_eq!(session.seconds_remaining, expected);
        }
    }

    #[test]
    fn countdown_never_goes_below_zero() {
        let mut session = confirming();
        for _ in 0..CONFIRM_WINDOW_SECS + 5 {
            session.apply(AlertAction::Tick);
        }
        assert_eq!(session.seconds_remaining, 0);
    }

    #[test]
    fn expiry_abandons_silently() {
        let mut session = confirming();
        for _ in 0..CONFIRM_WINDOW_SECS {
            session.apply(AlertAction::Tick);
        }
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut session = confirming();
        session.apply(AlertAction::Cancel);
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.seconds_remaining, 0);
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn confirm_stops_the_countdown_before_settling() {
        let session = sending();
        assert_ne!(session.phase, Phase::Confirming);
        assert_eq!(session.seconds_remaining, 0);
        assert!(session.is_sending);

        // A tick that was already queued when confirm happened must not land
        let mut stale = session.clone();
        stale.apply(AlertAction::Tick);
        assert_eq!(stale, session);
    }

    #[test]
    fn success_activates_with_no_error() {
        let mut session = sending();
        session.apply(AlertAction::Settled(Ok(())));
        assert_eq!(session.phase, Phase::Activated);
        assert_eq!(session.last_error, None);
        assert!(!session.is_sending);
        assert_eq!(session.seconds_remaining, 0);
    }

    #[test]
    fn failure_returns_to_idle_with_message() {
        let mut session = sending();
        session.apply(AlertAction::Settled(Err("server down".to_string())));
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.last_error, Some("server down".to_string()));
        assert!(!session.is_sending);
        assert_eq!(session.seconds_remaining, 0);
    }

    #[test]
    fn press_is_ignored_while_sending() {
        let mut session = sending();
        session.apply(AlertAction::Press);
        assert_eq!(session.phase, Phase::Idle);
        assert!(session.is_sending);
    }

    #[test]
    fn settle_without_a_request_in_flight_is_a_no_op() {
        let mut session = AlertSession::new();
        session.apply(AlertAction::Settled(Err("late".to_string())));
        assert_eq!(session, AlertSession::new());
    }

    #[test]
    fn error_is_never_set_while_activated() {
        let mut session = sending();
        session.apply(AlertAction::Settled(Ok(())));
        session.apply(AlertAction::Settled(Err("late".to_string())));
        assert_eq!(session.phase, Phase::Activated);
        assert_eq!(session.last_error, None);
    }

    #[test]
    fn reset_from_activated_clears_everything() {
        let mut session = sending();
        session.apply(AlertAction::Settled(Ok(())));
        session.apply(AlertAction::Reset);
        assert_eq!(session, AlertSession::new());
    }

    #[test]
    fn reducer_dispatch_path_matches_apply() {
        let session = Rc::new(AlertSession::new());
        let session = session.reduce(AlertAction::Press);
        assert_eq!(session.phase, Phase::Confirming);
        let session = session.reduce(AlertAction::Tick);
        assert_eq!(session.seconds_remaining, CONFIRM_WINDOW_SECS - 1);
    }

    #[test]
    fn full_panic_flow_scenario() {
        let mut session = AlertSession::new();

        // Press, then let the window expire untouched
        session.apply(AlertAction::Press);
        assert_eq!(session.phase, Phase::Confirming);
        assert_eq!(session.seconds_remaining, 10);
        for _ in 0..10 {
            session.apply(AlertAction::Tick);
        }
        assert_eq!(session.phase, Phase::Idle);

        // Press again, confirm, backend answers 201
        session.apply(AlertAction::Press);
        session.apply(AlertAction::Confirm);
        session.apply(AlertAction::Settled(Ok(())));
        assert_eq!(session.phase, Phase::Activated);

        // Reset back to idle
        session.apply(AlertAction::Reset);
        assert_eq!(session.phase, Phase::Idle);
        assert_eq!(session.last_error, None);
    }
}
