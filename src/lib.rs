// ============================================================================
// PANIC BUTTON PWA - Emergency alert widget
// ============================================================================
// - components: Yew views (one view per phase)
// - hooks: countdown timer + send wiring around the session reducer
// - services: SOLO HTTP communication with the alert backend
// - state: AlertSession finite-state machine (pure, natively testable)
// - models: wire types shared with the backend
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;

pub use components::PanicButton;
pub use state::{AlertAction, AlertSession, Phase};
