pub mod use_alert_session;

pub use use_alert_session::{use_alert_session, UseAlertSessionHandle};
