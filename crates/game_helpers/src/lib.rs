mod app;
pub use app::*;

pub mod input;
pub mod welcome_screen;

mod window_resizing;
