use egui::{Button, Color32, Context, RichText, Window};
use egui_phosphor::regular;

/// Modal message box with a single OK button.
/// Stands in for the browser's `alert()` on native builds.
pub struct AlertModal {
    pub open: bool,
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Default for AlertModal {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertModal {
    pub fn new() -> Self {
        Self {
            open: false,
            title: "Notice".to_string(),
            message: String::new(),
            is_error: false,
        }
    }

    /// Open the dialog
    pub fn open(&mut self, title: &str, message: &str, is_error: bool) {
        self.title = title.to_string();
        self.message = message.to_string();
        self.is_error = is_error;
        self.open = true;
    }

    /// Close the dialog
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Show the dialog
    pub fn show(&mut self, ctx: &Context) {
        if !self.open {
            return;
        }

        let mut should_close = false;

        Window::new(&self.title)
            .min_width(300.0)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    if self.is_error {
                        ui.label(
                            RichText::new(regular::WARNING)
                                .size(28.0)
                                .color(Color32::from_rgb(255, 100, 100)),
                        );
                        ui.add_space(6.0);
                    }
                    ui.label(&self.message);
                    ui.add_space(16.0);

                    if ui.add(Button::new("OK").min_size(egui::vec2(80.0, 0.0))).clicked() {
                        should_close = true;
                    }
                });
            });

        if should_close {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_close() {
        let mut modal = AlertModal::new();
        assert!(!modal.open);

        modal.open("Invalid file", "Please select a valid audio file.", true);
        assert!(modal.open);
        assert!(modal.is_error);
        assert_eq!(modal.message, "Please select a valid audio file.");

        modal.close();
        assert!(!modal.open);
    }
}
