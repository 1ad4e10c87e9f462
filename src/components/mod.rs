pub mod app;
pub mod panic_button;

pub use app::App;
pub use panic_button::PanicButton;
