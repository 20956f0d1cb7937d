use std::collections::BTreeSet;

/// Extensions accepted when the picker validates audio files
pub const DEFAULT_AUDIO_EXTENSIONS: [&str; 6] = ["mp3", "wav", "ogg", "flac", "aac", "m4a"];

/// Lowercased substring after the last `.` of a file name.
///
/// Returns `None` when the name has no period at all. A trailing period yields
/// an empty extension, which no allowed set contains.
pub fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// A file chosen by drop or through the native dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn extension(&self) -> Option<String> {
        file_extension(&self.name)
    }
}

/// Set of accepted extensions, stored lowercase without a leading dot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedExtensionSet {
    extensions: BTreeSet<String>,
}

impl Default for AllowedExtensionSet {
    fn default() -> Self {
        Self::new(DEFAULT_AUDIO_EXTENSIONS)
    }
}

impl AllowedExtensionSet {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| normalize_extension(ext.as_ref()))
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_lowercase())
    }

    /// Whether the file's extension is in the set
    pub fn accepts(&self, file: &SelectedFile) -> bool {
        file.extension()
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Value for an `<input type="file" accept=...>` attribute, e.g. `.aac,.flac`
    pub fn accept_attribute(&self) -> String {
        self.iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

pub(crate) fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_taken_after_the_last_period() {
        assert_eq!(file_extension("track.flac").as_deref(), Some("flac"));
        assert_eq!(file_extension("mix.final.v2.WAV").as_deref(), Some("wav"));
        assert_eq!(file_extension(".mp3").as_deref(), Some("mp3"));
        assert_eq!(file_extension("trailing.").as_deref(), Some(""));
        assert_eq!(file_extension("README"), None);
    }

    #[test]
    fn default_set_matches_audio_extensions_case_insensitively() {
        let set = AllowedExtensionSet::default();
        assert_eq!(set.len(), 6);
        for name in ["a.mp3", "b.wav", "c.ogg", "d.flac", "e.aac", "f.m4a"] {
            assert!(set.accepts(&SelectedFile::new(name)), "{name} should be accepted");
        }
        assert!(set.accepts(&SelectedFile::new("SONG.MP3")));
        assert!(set.accepts(&SelectedFile::new("song.Mp3")));
        assert!(set.contains("FLAC"));
    }

    #[test]
    fn default_set_rejects_other_names() {
        let set = AllowedExtensionSet::default();
        for name in ["document.pdf", "README", "song.", "mp3", "song.mp3.zip"] {
            assert!(!set.accepts(&SelectedFile::new(name)), "{name} should be rejected");
        }
    }

    #[test]
    fn custom_sets_are_normalized() {
        let set = AllowedExtensionSet::new([".OPUS", " wav ", ""]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["opus", "wav"]);
        assert_eq!(set.accept_attribute(), ".opus,.wav");
    }
}
