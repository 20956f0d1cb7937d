use serde::{Deserialize, Serialize};

use super::error::PickerError;
use super::extension::{AllowedExtensionSet, DEFAULT_AUDIO_EXTENSIONS, normalize_extension};

/// How the picker treats a file handed to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeMode {
    /// Accept any file without looking at its name
    AcceptAll,
    /// Only accept names whose extension is in the allowed set
    #[default]
    AudioOnly,
}

/// Element ids the web host binds to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ElementIds {
    pub drop_area: String,
    pub file_input: String,
    pub file_name: String,
    pub drop_text: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            drop_area: "drop-area".to_string(),
            file_input: "fileInput".to_string(),
            file_name: "file-name".to_string(),
            drop_text: "drop-text".to_string(),
        }
    }
}

/// Picker configuration.
///
/// Every field has a default, so a JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    pub element_ids: ElementIds,
    /// Class toggled on the drop zone while a drag hovers it
    pub highlight_class: String,
    /// Label text when nothing is selected
    pub empty_file_name_text: String,
    /// Instructional text when nothing is selected
    pub placeholder_drop_text: String,
    /// Alert shown when a file is rejected
    pub invalid_file_message: String,
    pub allowed_extensions: Vec<String>,
    pub intake_mode: IntakeMode,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            element_ids: ElementIds::default(),
            highlight_class: "highlight".to_string(),
            empty_file_name_text: String::new(),
            placeholder_drop_text: "Drag your file here or click to select it".to_string(),
            invalid_file_message: "Please select a valid audio file.".to_string(),
            allowed_extensions: DEFAULT_AUDIO_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            intake_mode: IntakeMode::AudioOnly,
        }
    }
}

impl PickerConfig {
    /// Parse a JSON override, keeping defaults for missing keys
    pub fn from_json(json: &str) -> Result<Self, PickerError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.allowed_extensions = config
            .allowed_extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .filter(|ext| !ext.is_empty())
            .collect();
        Ok(config)
    }

    pub fn allowed_set(&self) -> AllowedExtensionSet {
        AllowedExtensionSet::new(&self.allowed_extensions)
    }

    /// Label text once `name` has been accepted
    pub fn selected_file_text(&self, name: &str) -> String {
        format!("Selected file: {name}")
    }

    /// Instructional text once `name` has been accepted
    pub fn ready_text(&self, name: &str) -> String {
        format!("{name} ready to upload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = PickerConfig::default();
        assert_eq!(config.element_ids.drop_area, "drop-area");
        assert_eq!(config.element_ids.file_input, "fileInput");
        assert_eq!(config.element_ids.file_name, "file-name");
        assert_eq!(config.element_ids.drop_text, "drop-text");
        assert_eq!(config.highlight_class, "highlight");
        assert_eq!(config.intake_mode, IntakeMode::AudioOnly);
        assert_eq!(config.allowed_set().len(), 6);
    }

    #[test]
    fn json_override_merges_with_defaults() {
        let config = PickerConfig::from_json(
            r#"{"allowed_extensions": [".MP3", "Opus", ""], "element_ids": {"drop_area": "zone"}}"#,
        )
        .unwrap();
        assert_eq!(config.allowed_extensions, vec!["mp3", "opus"]);
        assert_eq!(config.element_ids.drop_area, "zone");
        assert_eq!(config.element_ids.file_input, "fileInput");
        assert_eq!(config.invalid_file_message, "Please select a valid audio file.");
    }

    #[test]
    fn intake_mode_uses_snake_case() {
        let config = PickerConfig::from_json(r#"{"intake_mode": "accept_all"}"#).unwrap();
        assert_eq!(config.intake_mode, IntakeMode::AcceptAll);
    }

    #[test]
    fn malformed_json_is_an_invalid_config() {
        let err = PickerConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }

    #[test]
    fn display_templates() {
        let config = PickerConfig::default();
        assert_eq!(config.selected_file_text("a.wav"), "Selected file: a.wav");
        assert_eq!(config.ready_text("a.wav"), "a.wav ready to upload");
    }
}
