#![warn(clippy::all, rust_2018_idioms)]

pub mod picker;
#[cfg(not(target_arch = "wasm32"))]
mod app;
#[cfg(not(target_arch = "wasm32"))]
pub mod ui;

#[cfg(not(target_arch = "wasm32"))]
pub use app::PickerApp;
pub use picker::{FilePickerWidget, PickerConfig, PickerError, PickerSurface};
