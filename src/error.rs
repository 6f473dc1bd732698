// ============================================================================
// ERROR - Errores de inicialización del panel
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Error al resolver los elementos requeridos del DOM durante el setup.
/// Cualquier variante deja el panel sin wiring (fail-closed).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("required DOM element not found: #{0}")]
    MissingElement(&'static str),

    #[error("element #{0} is not an input")]
    NotAnInput(&'static str),

    #[error("no document available")]
    NoDocument,
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_names_the_id() {
        let err = SetupError::MissingElement("login-form");
        assert_eq!(err.to_string(), "required DOM element not found: #login-form");
    }

    #[test]
    fn test_not_an_input_names_the_id() {
        let err = SetupError::NotAnInput("password");
        assert_eq!(err.to_string(), "element #password is not an input");
    }

    #[test]
    fn test_no_document_message() {
        assert_eq!(SetupError::NoDocument.to_string(), "no document available");
    }
}
