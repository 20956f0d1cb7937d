use egui::{Color32, RichText, Sense, Stroke, Ui};
use egui_phosphor::regular;

use super::panel_surface::PanelSurface;
use crate::picker::{
    FilePickerWidget, IntakeMode, IntakeOutcome, PickerConfig, PickerSurface, SelectedFile,
};

/// Egui rendition of the drop zone.
///
/// Translates egui input into picker events and paints the panel surface.
pub struct DropZone {
    widget: FilePickerWidget<PanelSurface>,
    /// Whether files were hovering the window last frame
    drag_hovering: bool,
}

impl Default for DropZone {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl DropZone {
    pub fn new(config: PickerConfig) -> Self {
        let surface = PanelSurface::new(&config.empty_file_name_text, &config.placeholder_drop_text);
        Self {
            widget: FilePickerWidget::new(surface, config),
            drag_hovering: false,
        }
    }

    pub fn widget(&self) -> &FilePickerWidget<PanelSurface> {
        &self.widget
    }

    /// Same as clicking the drop zone
    pub fn open_dialog(&mut self) {
        self.widget.activate_picker();
    }

    /// Forget the current selection
    pub fn clear(&mut self) {
        self.widget.reset();
    }

    /// Alert raised by the last intake, if any
    pub fn take_alert(&mut self) -> Option<String> {
        self.widget.surface_mut().take_alert()
    }

    /// Display the drop zone.
    /// Input is ignored while `enabled` is false (e.g. an alert is open).
    pub fn show(&mut self, ui: &mut Ui, enabled: bool) {
        if enabled {
            let (hovering, dropped) = ui.ctx().input(|i| {
                (
                    !i.raw.hovered_files.is_empty(),
                    i.raw
                        .dropped_files
                        .iter()
                        .map(|f| SelectedFile::new(dropped_file_name(f)))
                        .collect::<Vec<_>>(),
                )
            });
            self.process_drag_input(hovering, &dropped);
        }

        let highlighted = self
            .widget
            .surface()
            .has_class(&self.widget.config().highlight_class);
        let drop_text = self.widget.surface().drop_text();
        let file_name_text = self.widget.surface().file_name_text();

        let stroke_color = if highlighted {
            ui.visuals().selection.stroke.color
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };
        let fill = if highlighted {
            ui.visuals().selection.bg_fill.gamma_multiply(0.3)
        } else {
            ui.visuals().extreme_bg_color
        };

        let response = ui
            .add_enabled_ui(enabled, |ui| {
                egui::Frame::new()
                    .fill(fill)
                    .stroke(Stroke::new(2.0, stroke_color))
                    .corner_radius(8.0)
                    .inner_margin(24.0)
                    .show(ui, |ui| {
                        ui.set_min_size(egui::vec2(ui.available_width(), 180.0));
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.label(RichText::new(regular::MUSIC_NOTES).size(40.0).weak());
                            ui.add_space(12.0);
                            ui.label(RichText::new(drop_text).size(16.0));
                        });
                    })
                    .response
                    .interact(Sense::click())
            })
            .inner;

        if enabled && response.clicked() {
            self.widget.activate_picker();
        }
        if enabled {
            response.on_hover_cursor(egui::CursorIcon::PointingHand);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if file_name_text.is_empty() {
                ui.label(RichText::new(regular::FILE_DASHED).weak());
            } else {
                ui.label(RichText::new(file_name_text).color(Color32::from_rgb(120, 200, 120)));
            }
        });

        if self.take_dialog_request(enabled) {
            self.pick_with_dialog();
        }
    }

    /// Consume a pending dialog request; requests made while disabled are dropped
    fn take_dialog_request(&mut self, enabled: bool) -> bool {
        let requested = self.widget.surface_mut().take_dialog_request();
        if requested && !enabled {
            log::debug!("Ignoring file dialog request while input is blocked");
        }
        requested && enabled
    }

    /// Turn one frame of drag state into dragover/dragleave/drop events
    fn process_drag_input(
        &mut self,
        hovering: bool,
        dropped: &[SelectedFile],
    ) -> Option<IntakeOutcome> {
        if let Some(first) = dropped.first() {
            self.drag_hovering = false;
            let first = first.clone();
            return self
                .widget
                .handle_drop_staged(dropped, |surface| surface.stage_file(first));
        }

        if hovering {
            self.drag_hovering = true;
            self.widget.highlight_on_dragover();
        } else if self.drag_hovering {
            self.drag_hovering = false;
            self.widget.unhighlight_on_dragleave();
        }
        None
    }

    /// Run the native file dialog and feed its result to the picker
    fn pick_with_dialog(&mut self) -> Option<IntakeOutcome> {
        let mut dialog = rfd::FileDialog::new().set_title("Select Audio File");
        if self.widget.config().intake_mode == IntakeMode::AudioOnly {
            let extensions: Vec<&str> = self.widget.allowed_extensions().iter().collect();
            dialog = dialog.add_filter("Audio Files", extensions.as_slice());
        }
        dialog = dialog.add_filter("All Files", &["*"]);

        let path = dialog.pick_file()?;
        let file = SelectedFile::new(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.to_string_lossy().to_string()),
        );
        self.select(file)
    }

    /// Route a file chosen outside drag-and-drop through the picker
    pub(crate) fn select(&mut self, file: SelectedFile) -> Option<IntakeOutcome> {
        self.widget.surface_mut().stage_file(file.clone());
        self.widget.handle_manual_selection(&[file])
    }
}

/// Name of a dropped file; web drops carry a name, native drops a path
fn dropped_file_name(file: &egui::DroppedFile) -> String {
    if !file.name.is_empty() {
        return file.name.clone();
    }
    file.path
        .as_ref()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("Unknown file")
        .to_string()
}
