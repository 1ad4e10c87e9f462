pub mod alert_session;

pub use alert_session::{AlertAction, AlertSession, Phase};
