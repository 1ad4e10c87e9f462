use yew::prelude::*;

use crate::hooks::use_alert_session;
use crate::state::Phase;

#[derive(Properties, PartialEq, Clone)]
pub struct PanicButtonProps {
    /// Identity sent with the alert.
    pub user_id: String,
    /// Location sent with the alert.
    pub location: String,
}

/// The panic button widget. Renders exactly one of three views, selected by
/// the session phase; every action control is disabled while a request is in
/// flight.
#[function_component(PanicButton)]
pub fn panic_button(props: &PanicButtonProps) -> Html {
    let handle = use_alert_session(props.user_id.clone(), props.location.clone());
    let session = &handle.session;

    let press_click = {
        let cb = handle.press_panic.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let confirm_click = {
        let cb = handle.confirm.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let cancel_click = {
        let cb = handle.cancel.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let reset_click = {
        let cb = handle.reset.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };

    match session.phase {
        Phase::Activated => html! {
            <div class="panic-screen activated">
                <div class="panic-card">
                    <h2>{"🚨 Alert Activated"}</h2>
                    <p>{"Emergency services have been notified. Help is on the way."}</p>
                    <button
                        class="btn-reset"
                        onclick={reset_click}
                        disabled={session.is_sending}
                    >
                        {"Reset System"}
                    </button>
                </div>
            </div>
        },

        Phase::Confirming => html! {
            <div class="panic-screen confirming">
                <div class="panic-card">
                    <h2>{"🔥 Confirm Emergency"}</h2>
                    <p>{"Are you sure you want to send an alert?"}</p>
                    <div class="countdown">{session.seconds_remaining}</div>
                    <button
                        class="btn-confirm"
                        onclick={confirm_click}
                        disabled={session.is_sending}
                    >
                        {if session.is_sending { "Sending…" } else { "📞 Confirm" }}
                    </button>
                    <button
                        class="btn-cancel"
                        onclick={cancel_click}
                        disabled={session.is_sending}
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        },

        Phase::Idle => html! {
            <div class="panic-screen idle">
                <div class="panic-card">
                    {
                        if let Some(error) = &session.last_error {
                            html! { <p class="panic-error">{format!("Error: {}", error)}</p> }
                        } else {
                            html! {}
                        }
                    }
                    <h1>{"Emergency Alert System"}</h1>
                    <p>{"Press only in a real emergency."}</p>
                    <button
                        class="btn-panic"
                        onclick={press_click}
                        disabled={session.is_sending}
                    >
                        <span class="panic-icon">{"⚠️"}</span>
                        {"PANIC"}
                    </button>
                </div>
            </div>
        },
    }
}
