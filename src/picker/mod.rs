//! Drag-and-drop audio file picker.
//!
//! The widget core is host-agnostic: it talks to a [`PickerSurface`] that the
//! browser binding (`web`, wasm only) or the egui panel implements.

pub mod config;
pub mod error;
pub mod extension;
pub mod surface;
pub mod widget;
#[cfg(target_arch = "wasm32")]
pub mod web;


// Re-export main types
pub use config::{ElementIds, IntakeMode, PickerConfig};
pub use error::PickerError;
pub use extension::{AllowedExtensionSet, SelectedFile, file_extension};
pub use surface::PickerSurface;
pub use widget::{FilePickerWidget, IntakeOutcome};
