use std::fmt;

/// Errors raised by the file picker and its hosts
#[derive(Debug)]
pub enum PickerError {
    /// The chosen file name does not carry an accepted audio extension
    InvalidExtension {
        file_name: String,
        extension: Option<String>,
    },
    /// A required element id is absent from the page
    MissingElement { id: String },
    /// An element exists but is not of the expected kind
    WrongElementType { id: String, expected: String },
    /// A browser API call failed
    Js { context: String, message: String },
    /// Picker configuration could not be parsed
    InvalidConfig(serde_json::Error),
}

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::InvalidExtension {
                file_name,
                extension: Some(ext),
            } => {
                write!(f, "Invalid audio extension '{}' for file {}", ext, file_name)
            }
            PickerError::InvalidExtension {
                file_name,
                extension: None,
            } => {
                write!(f, "File {} has no extension", file_name)
            }
            PickerError::MissingElement { id } => {
                write!(f, "Element not found: #{}", id)
            }
            PickerError::WrongElementType { id, expected } => {
                write!(f, "Element #{} is not a {}", id, expected)
            }
            PickerError::Js { context, message } => {
                write!(f, "Browser call failed ({}): {}", context, message)
            }
            PickerError::InvalidConfig(err) => write!(f, "Invalid picker config: {}", err),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickerError::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::InvalidConfig(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_extension_message_names_the_file() {
        let err = PickerError::InvalidExtension {
            file_name: "document.pdf".to_string(),
            extension: Some("pdf".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Invalid audio extension 'pdf' for file document.pdf"
        );

        let err = PickerError::InvalidExtension {
            file_name: "README".to_string(),
            extension: None,
        };
        assert_eq!(err.to_string(), "File README has no extension");
    }

    #[test]
    fn config_errors_keep_their_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = PickerError::from(json_err);
        assert!(std::error::Error::source(&err).is_some());
    }
}
