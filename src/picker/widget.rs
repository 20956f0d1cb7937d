use super::config::{IntakeMode, PickerConfig};
use super::error::PickerError;
use super::extension::{AllowedExtensionSet, SelectedFile};
use super::surface::PickerSurface;

/// Result of handing a file to the picker
#[derive(Debug)]
pub enum IntakeOutcome {
    Accepted(SelectedFile),
    Rejected(PickerError),
}

impl IntakeOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, IntakeOutcome::Accepted(_))
    }
}

/// Drag-and-drop file picker.
///
/// Each handler maps to one UI event. The widget keeps no selection state of
/// its own: the surface's current texts are the only record of what was picked.
pub struct FilePickerWidget<S: PickerSurface> {
    surface: S,
    config: PickerConfig,
    allowed: AllowedExtensionSet,
}

impl<S: PickerSurface> FilePickerWidget<S> {
    pub fn new(surface: S, config: PickerConfig) -> Self {
        let allowed = config.allowed_set();
        Self {
            surface,
            config,
            allowed,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn allowed_extensions(&self) -> &AllowedExtensionSet {
        &self.allowed
    }

    /// Click on the drop zone
    pub fn activate_picker(&mut self) {
        log::debug!("Opening file dialog");
        self.surface.open_file_dialog();
    }

    /// A drag entered or moved over the drop zone
    pub fn highlight_on_dragover(&mut self) {
        log::trace!("dragover");
        self.surface.add_class(&self.config.highlight_class);
    }

    /// The drag left the drop zone
    pub fn unhighlight_on_dragleave(&mut self) {
        log::trace!("dragleave");
        self.surface.remove_class(&self.config.highlight_class);
    }

    /// Files were released over the drop zone.
    ///
    /// Only the first file is taken; the rest are ignored.
    pub fn handle_drop(&mut self, files: &[SelectedFile]) -> Option<IntakeOutcome> {
        self.surface.remove_class(&self.config.highlight_class);
        let first = files.first()?;
        if files.len() > 1 {
            log::debug!("Ignoring {} extra dropped file(s)", files.len() - 1);
        }
        Some(self.file_intake(first.clone()))
    }

    /// Same as [`Self::handle_drop`], but lets the host put the dropped files
    /// into its file input before intake. A rejection clears the input again.
    pub fn handle_drop_staged(
        &mut self,
        files: &[SelectedFile],
        stage: impl FnOnce(&mut S),
    ) -> Option<IntakeOutcome> {
        if !files.is_empty() {
            stage(&mut self.surface);
        }
        self.handle_drop(files)
    }

    /// The native dialog closed with a selection
    pub fn handle_manual_selection(&mut self, files: &[SelectedFile]) -> Option<IntakeOutcome> {
        let first = files.first()?;
        Some(self.file_intake(first.clone()))
    }

    /// Accept or reject a single file and update the surface accordingly
    pub fn file_intake(&mut self, file: SelectedFile) -> IntakeOutcome {
        if self.config.intake_mode == IntakeMode::AudioOnly && !self.allowed.accepts(&file) {
            let err = PickerError::InvalidExtension {
                extension: file.extension(),
                file_name: file.name,
            };
            log::warn!("{}", err);
            self.reject();
            return IntakeOutcome::Rejected(err);
        }

        log::info!("Selected file: {}", file.name);
        self.update_display(&file.name);
        IntakeOutcome::Accepted(file)
    }

    /// Show `name` as the current selection
    pub fn update_display(&mut self, name: &str) {
        let label = self.config.selected_file_text(name);
        let text = self.config.ready_text(name);
        self.surface.set_file_name_text(&label);
        self.surface.set_drop_text(&text);
    }

    /// Return to the empty state without alerting
    pub fn reset(&mut self) {
        self.surface.clear_input();
        self.surface
            .set_file_name_text(&self.config.empty_file_name_text);
        self.surface.set_drop_text(&self.config.placeholder_drop_text);
    }

    fn reject(&mut self) {
        self.surface.alert(&self.config.invalid_file_message);
        self.reset();
    }
}
