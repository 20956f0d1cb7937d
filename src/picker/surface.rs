/// UI surface the picker writes to.
/// Abstracts the drop zone, the file input and the two text elements so the
/// widget can run against the browser DOM, an egui panel or a test double.
pub trait PickerSurface {
    /// Set the text of the selected-file label
    fn set_file_name_text(&mut self, text: &str);

    /// Get the text of the selected-file label
    fn file_name_text(&self) -> String;

    /// Set the instructional text inside the drop zone
    fn set_drop_text(&mut self, text: &str);

    /// Get the instructional text inside the drop zone
    fn drop_text(&self) -> String;

    /// Add a class to the drop zone (no-op if present)
    fn add_class(&mut self, class: &str);

    /// Remove a class from the drop zone (no-op if absent)
    fn remove_class(&mut self, class: &str);

    /// Check whether the drop zone carries a class
    fn has_class(&self, class: &str) -> bool;

    /// Empty the file input so no file is considered selected
    fn clear_input(&mut self);

    /// Ask the host to open its native file-selection dialog
    fn open_file_dialog(&mut self);

    /// Show a blocking message to the user
    fn alert(&mut self, message: &str);
}
