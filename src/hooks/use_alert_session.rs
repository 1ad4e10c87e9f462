use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::services::AlertClient;
use crate::models::TriggerAlertRequest;
use crate::state::{AlertAction, AlertSession, Phase};

/// Everything the panic button view needs: the session plus one callback per
/// user event. All mutation goes through the session reducer.
#[derive(Clone)]
pub struct UseAlertSessionHandle {
    pub session: UseReducerHandle<AlertSession>,
    pub press_panic: Callback<()>,
    pub confirm: Callback<()>,
    pub cancel: Callback<()>,
    pub reset: Callback<()>,
}

#[hook]
pub fn use_alert_session(user_id: String, location: String) -> UseAlertSessionHandle {
    let session = use_reducer(AlertSession::new);

    // Countdown interval, alive only while the confirm window is open.
    // Leaving Confirming for any reason re-runs the effect and drops the
    // interval, which also discards any tick already queued. Ticks go through
    // the dispatcher, so a tick always applies against the latest session.
    {
        let dispatcher = session.dispatcher();
        use_effect_with(session.phase, move |phase| {
            let interval = (*phase == Phase::Confirming).then(|| {
                Interval::new(1_000, move || dispatcher.dispatch(AlertAction::Tick))
            });
            move || drop(interval)
        });
    }

    let press_panic = {
        let session = session.clone();
        Callback::from(move |_| {
            log::info!("🔴 Panic pressed, opening confirm window");
            session.dispatch(AlertAction::Press);
        })
    };

    let cancel = {
        let session = session.clone();
        Callback::from(move |_| {
            log::info!("↩️ Confirm window cancelled by user");
            session.dispatch(AlertAction::Cancel);
        })
    };

    let reset = {
        let session = session.clone();
        Callback::from(move |_| {
            log::info!("🔄 Widget reset to idle");
            session.dispatch(AlertAction::Reset);
        })
    };

    let confirm = {
        let session = session.clone();

        Callback::from(move |_| {
            // Only one request in flight; the reducer guards this too
            if session.phase != Phase::Confirming || session.is_sending {
                return;
            }

            session.dispatch(AlertAction::Confirm);

            let dispatcher = session.dispatcher();
            let client = AlertClient::from_env();
            let request = TriggerAlertRequest {
                user_id: user_id.clone(),
                location: location.clone(),
            };

            wasm_bindgen_futures::spawn_local(async move {
                let result = client.trigger_alert(&request).await;
                dispatcher.dispatch(AlertAction::Settled(result));
            });
        })
    };

    UseAlertSessionHandle {
        session,
        press_panic,
        confirm,
        cancel,
        reset,
    }
}
