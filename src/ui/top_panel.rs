use egui::Context;
use egui_phosphor::regular;

/// Action chosen from the top menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopPanelAction {
    SelectFile,
    ClearSelection,
    About,
    Quit,
}

/// Top menu panel component
pub struct TopPanel;

impl TopPanel {
    /// Display the top menu panel and return the clicked action, if any
    pub fn show(ctx: &Context) -> Option<TopPanelAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui
                        .button(format!("{} Select audio file...", regular::MUSIC_NOTES))
                        .clicked()
                    {
                        action = Some(TopPanelAction::SelectFile);
                    }
                    if ui
                        .button(format!("{} Clear selection", regular::TRASH))
                        .clicked()
                    {
                        action = Some(TopPanelAction::ClearSelection);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        action = Some(TopPanelAction::Quit);
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        action = Some(TopPanelAction::About);
                    }
                });
            });
        });

        action
    }
}
