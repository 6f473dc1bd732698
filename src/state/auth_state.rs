// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado de autenticación del panel
#[derive(Clone)]
pub struct AuthState {
    pub is_logged_in: Rc<RefCell<bool>>,
    pub username: Rc<RefCell<Option<String>>>,
}

impl AuthState {
    /// Crear nuevo estado de autenticación
    pub fn new() -> Self {
        Self {
            is_logged_in: Rc::new(RefCell::new(false)),
            username: Rc::new(RefCell::new(None)),
        }
    }

    /// Marcar sesión iniciada con el usuario dado
    pub fn login(&self, username: String) {
        *self.is_logged_in.borrow_mut() = true;
        *self.username.borrow_mut() = Some(username);
    }

    /// Obtener logged in
    pub fn get_logged_in(&self) -> bool {
        *self.is_logged_in.borrow()
    }

    /// Obtener username
    pub fn get_username(&self) -> Option<String> {
        self.username.borrow().clone()
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        *self.is_logged_in.borrow_mut() = false;
        *self.username.borrow_mut() = None;
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let auth = AuthState::new();
        assert!(!auth.get_logged_in());
        assert_eq!(auth.get_username(), None);
    }

    #[test]
    fn test_login_sets_user() {
        let auth = AuthState::new();
        auth.login("admin".to_string());
        assert!(auth.get_logged_in());
        assert_eq!(auth.get_username(), Some("admin".to_string()));
    }

    #[test]
    fn test_logout_clears_everything() {
        let auth = AuthState::new();
        auth.login("admin".to_string());
        auth.logout();
        assert!(!auth.get_logged_in());
        assert_eq!(auth.get_username(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let auth = AuthState::new();
        let clone = auth.clone();
        auth.login("admin".to_string());
        assert!(clone.get_logged_in());
    }
}
