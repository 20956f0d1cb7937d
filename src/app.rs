use crate::picker::PickerConfig;
use crate::ui::{AlertModal, DropZone, TopPanel, TopPanelAction};

/// Desktop window hosting the audio file picker
pub struct PickerApp {
    drop_zone: DropZone,
    alert_modal: AlertModal,
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::with_config(PickerConfig::default())
    }
}

impl PickerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PickerConfig) -> Self {
        // Set theme to dark
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_config(config)
    }

    pub fn with_config(config: PickerConfig) -> Self {
        Self {
            drop_zone: DropZone::new(config),
            alert_modal: AlertModal::new(),
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: TopPanelAction) {
        // The alert blocks everything until dismissed
        if self.alert_modal.open {
            log::debug!("Ignoring {:?} while the alert is open", action);
            return;
        }

        match action {
            TopPanelAction::SelectFile => self.drop_zone.open_dialog(),
            TopPanelAction::ClearSelection => self.drop_zone.clear(),
            TopPanelAction::About => self.alert_modal.open(
                "About Audio Drop Picker",
                "Audio Drop Picker\n\nDrop an audio file (mp3, wav, ogg, flac, aac, m4a)\nor click the drop zone to choose one.",
                false,
            ),
            TopPanelAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for PickerApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(action) = TopPanel::show(ctx) {
            self.handle_menu_action(ctx, action);
        }

        let input_enabled = !self.alert_modal.open;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(16.0);
            ui.heading("Audio file");
            ui.add_space(8.0);
            self.drop_zone.show(ui, input_enabled);
        });

        if let Some(message) = self.drop_zone.take_alert() {
            self.alert_modal.open("Invalid file", &message, true);
        }
        self.alert_modal.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{PickerSurface, SelectedFile};

    #[test]
    fn menu_actions_are_ignored_while_the_alert_is_open() {
        let ctx = egui::Context::default();
        let mut app = PickerApp::default();
        app.drop_zone.select(SelectedFile::new("kept.wav"));
        app.alert_modal
            .open("Invalid file", "Please select a valid audio file.", true);

        app.handle_menu_action(&ctx, TopPanelAction::SelectFile);
        app.handle_menu_action(&ctx, TopPanelAction::ClearSelection);
        app.handle_menu_action(&ctx, TopPanelAction::About);

        let surface = app.drop_zone.widget().surface();
        assert!(!surface.dialog_requested());
        assert_eq!(surface.file_name_text(), "Selected file: kept.wav");
        assert_eq!(app.alert_modal.title, "Invalid file");
    }

    #[test]
    fn menu_actions_run_once_the_alert_is_closed() {
        let ctx = egui::Context::default();
        let mut app = PickerApp::default();
        app.drop_zone.select(SelectedFile::new("kept.wav"));

        app.handle_menu_action(&ctx, TopPanelAction::SelectFile);
        assert!(app.drop_zone.widget().surface().dialog_requested());

        app.handle_menu_action(&ctx, TopPanelAction::ClearSelection);
        assert_eq!(app.drop_zone.widget().surface().file_name_text(), "");
    }
}
