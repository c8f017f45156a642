use tessera_serde_support::DecodeError;

/// Error types for FHIR JSON reading and writing.
#[derive(Debug)]
pub enum SerdeError {
    /// Malformed JSON, or a JSON value of the wrong type for a field
    Json(serde_json::Error),

    /// Well-formed JSON that is not valid FHIR JSON for the target type
    Decode(DecodeError),

    /// IO error while reading input
    Io(std::io::Error),

    /// Custom error message
    Custom(String),
}

impl SerdeError {
    /// The codec error, if this is one.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            SerdeError::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for SerdeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerdeError::Json(e) => write!(f, "JSON error: {}", e),
            SerdeError::Decode(e) => write!(f, "FHIR decode error: {}", e),
            SerdeError::Io(e) => write!(f, "IO error: {}", e),
            SerdeError::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SerdeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerdeError::Json(e) => Some(e),
            SerdeError::Decode(e) => Some(e),
            SerdeError::Io(e) => Some(e),
            SerdeError::Custom(_) => None,
        }
    }
}

impl From<serde_json::Error> for SerdeError {
    fn from(err: serde_json::Error) -> Self {
        SerdeError::Json(err)
    }
}

// Parser errors surfacing through the codec keep their own variant.
impl From<DecodeError> for SerdeError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Json(e) => SerdeError::Json(e),
            other => SerdeError::Decode(other),
        }
    }
}

impl From<std::io::Error> for SerdeError {
    fn from(err: std::io::Error) -> Self {
        SerdeError::Io(err)
    }
}

impl From<String> for SerdeError {
    fn from(msg: String) -> Self {
        SerdeError::Custom(msg)
    }
}

impl From<&str> for SerdeError {
    fn from(msg: &str) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

impl serde::ser::Error for SerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

impl serde::de::Error for SerdeError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        SerdeError::Custom(msg.to_string())
    }
}

/// Result type alias for FHIR JSON operations
pub type Result<T> = std::result::Result<T, SerdeError>;
