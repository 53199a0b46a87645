#![warn(clippy::all, rust_2018_idioms)]

mod app;
mod data;

pub use app::config::Config;
pub use app::EguiApp;
