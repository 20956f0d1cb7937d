// UI component modules
mod alert_modal;
mod drop_zone;
mod panel_surface;
mod top_panel;

pub use alert_modal::AlertModal;
pub use drop_zone::DropZone;
pub use panel_surface::PanelSurface;
pub use top_panel::{TopPanel, TopPanelAction};
