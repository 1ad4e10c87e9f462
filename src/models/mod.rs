pub mod alert;

pub use alert::TriggerAlertRequest;
