// ============================================================================
// APP - Panel principal: resolución de elementos y wiring de handlers
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement};

use crate::auth::{verify_credentials, LoginOutcome};
use crate::dom::{document, get_element_by_id, on_click, on_submit, set_display, set_text_content};
use crate::error::SetupError;
use crate::state::{AuthState, PanelView};
use crate::utils::{
    APP_CONTAINER_ID, INVALID_CREDENTIALS_MESSAGE, LOGIN_CONTAINER_ID, LOGIN_FORM_ID,
    LOGIN_MESSAGE_ID, LOGOUT_BUTTON_ID, PASSWORD_INPUT_ID, USERNAME_INPUT_ID,
};

/// Elementos requeridos del DOM, resueltos una sola vez en el setup
#[derive(Clone)]
struct PanelElements {
    login_form: Element,
    login_message: Element,
    login_container: Element,
    app_container: Element,
    logout_button: Element,
    username_input: HtmlInputElement,
    password_input: HtmlInputElement,
}

impl PanelElements {
    /// Resolver todos los elementos requeridos. Si falta alguno, el primer
    /// error aborta la resolución completa.
    fn resolve() -> Result<Self, SetupError> {
        if document().is_none() {
            return Err(SetupError::NoDocument);
        }

        Ok(Self {
            login_form: Self::require(LOGIN_FORM_ID)?,
            login_message: Self::require(LOGIN_MESSAGE_ID)?,
            login_container: Self::require(LOGIN_CONTAINER_ID)?,
            app_container: Self::require(APP_CONTAINER_ID)?,
            logout_button: Self::require(LOGOUT_BUTTON_ID)?,
            username_input: Self::require_input(USERNAME_INPUT_ID)?,
            password_input: Self::require_input(PASSWORD_INPUT_ID)?,
        })
    }

    fn require(id: &'static str) -> Result<Element, SetupError> {
        get_element_by_id(id).ok_or(SetupError::MissingElement(id))
    }

    fn require_input(id: &'static str) -> Result<HtmlInputElement, SetupError> {
        Self::require(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| SetupError::NotAnInput(id))
    }
}

/// Aplicación principal
pub struct App {
    elements: PanelElements,
    auth: AuthState,
}

impl App {
    /// Crear la app resolviendo los elementos requeridos (fail-closed)
    pub fn new() -> Result<Self, SetupError> {
        let elements = PanelElements::resolve()?;

        Ok(Self {
            elements,
            auth: AuthState::new(),
        })
    }

    /// Registrar handlers y aplicar el estado inicial: login visible, app oculto
    pub fn wire(&self) -> Result<(), JsValue> {
        self.wire_login()?;
        self.wire_logout()?;
        apply_view(&self.elements, PanelView::Login)?;
        Ok(())
    }

    fn wire_login(&self) -> Result<(), JsValue> {
        let elements = self.elements.clone();
        let auth = self.auth.clone();

        on_submit(&self.elements.login_form, move |event: Event| {
            event.prevent_default();

            let username = elements.username_input.value();
            let password = elements.password_input.value();

            match verify_credentials(&username, &password) {
                LoginOutcome::Granted => {
                    set_text_content(&elements.login_message, "");
                    if let Err(e) = apply_view(&elements, PanelView::App) {
                        log::error!("❌ Error aplicando vista app: {:?}", e);
                        return;
                    }
                    auth.login(username);
                    log::info!("✅ Login successful");
                }
                LoginOutcome::Denied => {
                    set_text_content(&elements.login_message, INVALID_CREDENTIALS_MESSAGE);
                    log::info!("❌ Login failed");
                }
            }
        })
    }

    fn wire_logout(&self) -> Result<(), JsValue> {
        let elements = self.elements.clone();
        let auth = self.auth.clone();

        on_click(&self.elements.logout_button, move |_| {
            if let Err(e) = apply_view(&elements, PanelView::Login) {
                log::error!("❌ Error aplicando vista login: {:?}", e);
                return;
            }
            // Limpiar el campo de contraseña al salir
            elements.password_input.set_value("");
            match auth.get_username() {
                Some(user) => log::info!("👋 Logged out: {}", user),
                None => log::info!("👋 Logged out"),
            }
            auth.logout();
        })
    }
}

/// Aplicar la vista: ambos displays se escriben siempre juntos
fn apply_view(elements: &PanelElements, view: PanelView) -> Result<(), JsValue> {
    set_display(&elements.login_container, view.login_display())?;
    set_display(&elements.app_container, view.app_display())?;
    Ok(())
}
