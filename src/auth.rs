// ============================================================================
// AUTH - Verificación de credenciales
// ============================================================================

use crate::utils::{PANEL_PASSWORD, PANEL_USERNAME};

/// Resultado de la verificación de credenciales
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted,
    Denied,
}

/// Comparación exacta contra las credenciales configuradas.
/// Un intento fallido no recibe tratamiento distinto de cualquier otro.
pub fn verify_credentials(username: &str, password: &str) -> LoginOutcome {
    if username == PANEL_USERNAME && password == PANEL_PASSWORD {
        LoginOutcome::Granted
    } else {
        LoginOutcome::Denied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credentials_granted() {
        assert_eq!(verify_credentials("admin", "password"), LoginOutcome::Granted);
    }

    #[test]
    fn test_configured_pair_granted() {
        assert_eq!(
            verify_credentials(PANEL_USERNAME, PANEL_PASSWORD),
            LoginOutcome::Granted
        );
    }

    #[test]
    fn test_wrong_password_denied() {
        assert_eq!(verify_credentials("admin", "wrong"), LoginOutcome::Denied);
    }

    #[test]
    fn test_wrong_username_denied() {
        assert_eq!(verify_credentials("root", "password"), LoginOutcome::Denied);
    }

    #[test]
    fn test_swapped_fields_denied() {
        assert_eq!(verify_credentials("password", "admin"), LoginOutcome::Denied);
    }

    #[test]
    fn test_empty_fields_denied() {
        assert_eq!(verify_credentials("", ""), LoginOutcome::Denied);
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(verify_credentials("Admin", "password"), LoginOutcome::Denied);
        assert_eq!(verify_credentials("admin", "Password"), LoginOutcome::Denied);
    }

    #[test]
    fn test_whitespace_not_trimmed() {
        assert_eq!(verify_credentials(" admin", "password"), LoginOutcome::Denied);
        assert_eq!(verify_credentials("admin", "password "), LoginOutcome::Denied);
    }
}
