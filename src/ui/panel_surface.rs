use std::collections::BTreeSet;

use crate::picker::{PickerSurface, SelectedFile};

/// In-memory surface the egui drop zone renders from each frame
#[derive(Debug, Default)]
pub struct PanelSurface {
    file_name_text: String,
    drop_text: String,
    classes: BTreeSet<String>,
    /// File currently held by the (virtual) file input
    staged_file: Option<SelectedFile>,
    dialog_requested: bool,
    pending_alert: Option<String>,
}

impl PanelSurface {
    /// Create a surface showing the given placeholder texts
    pub fn new(file_name_text: &str, drop_text: &str) -> Self {
        Self {
            file_name_text: file_name_text.to_string(),
            drop_text: drop_text.to_string(),
            ..Default::default()
        }
    }

    /// Put a file into the input ahead of intake, mirroring a browser drop
    pub fn stage_file(&mut self, file: SelectedFile) {
        self.staged_file = Some(file);
    }

    pub fn staged_file(&self) -> Option<&SelectedFile> {
        self.staged_file.as_ref()
    }

    pub fn dialog_requested(&self) -> bool {
        self.dialog_requested
    }

    /// Returns true once per click on the drop zone
    pub fn take_dialog_request(&mut self) -> bool {
        std::mem::take(&mut self.dialog_requested)
    }

    /// Alert raised since the last frame, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }
}

impl PickerSurface for PanelSurface {
    fn set_file_name_text(&mut self, text: &str) {
        self.file_name_text = text.to_string();
    }

    fn file_name_text(&self) -> String {
        self.file_name_text.clone()
    }

    fn set_drop_text(&mut self, text: &str) {
        self.drop_text = text.to_string();
    }

    fn drop_text(&self) -> String {
        self.drop_text.clone()
    }

    fn add_class(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn clear_input(&mut self) {
        self.staged_file = None;
    }

    fn open_file_dialog(&mut self) {
        self.dialog_requested = true;
    }

    fn alert(&mut self, message: &str) {
        self.pending_alert = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_consumed_once() {
        let mut surface = PanelSurface::new("", "Drop here");
        surface.open_file_dialog();
        surface.alert("nope");

        assert!(surface.take_dialog_request());
        assert!(!surface.take_dialog_request());
        assert_eq!(surface.take_alert().as_deref(), Some("nope"));
        assert!(surface.take_alert().is_none());
    }

    #[test]
    fn clear_input_drops_the_staged_file() {
        let mut surface = PanelSurface::new("", "Drop here");
        surface.stage_file(SelectedFile::new("a.wav"));
        assert_eq!(surface.staged_file().map(|f| f.name.as_str()), Some("a.wav"));

        surface.clear_input();
        assert!(surface.staged_file().is_none());
        assert_eq!(surface.drop_text(), "Drop here");
    }
}
