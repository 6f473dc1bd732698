// ============================================================================
// VIEW STATE - Modelo de visibilidad del panel
// ============================================================================

/// Vista activa del panel. Invariante: el login-container y el app container
/// nunca están visibles a la vez; ambos displays se derivan del mismo estado.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelView {
    /// Formulario de credenciales visible
    Login,
    /// Panel de aplicación visible
    App,
}

impl PanelView {
    /// display del login-container en esta vista
    pub fn login_display(self) -> &'static str {
        match self {
            PanelView::Login => "block",
            PanelView::App => "none",
        }
    }

    /// display del app container en esta vista
    pub fn app_display(self) -> &'static str {
        match self {
            PanelView::Login => "none",
            PanelView::App => "block",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_view_shows_only_login() {
        assert_eq!(PanelView::Login.login_display(), "block");
        assert_eq!(PanelView::Login.app_display(), "none");
    }

    #[test]
    fn test_app_view_shows_only_app() {
        assert_eq!(PanelView::App.login_display(), "none");
        assert_eq!(PanelView::App.app_display(), "block");
    }

    #[test]
    fn test_containers_never_visible_together() {
        for view in [PanelView::Login, PanelView::App] {
            assert_ne!(view.login_display(), view.app_display());
        }
    }
}
