/// Credenciales del panel
/// Configuradas en tiempo de compilación:
/// - Por defecto: admin / password
/// - Override via PANEL_USERNAME / PANEL_PASSWORD (build.rs + .env)
pub const PANEL_USERNAME: &str = match option_env!("PANEL_USERNAME") {
    Some(user) => user,
    None => "admin",
};

pub const PANEL_PASSWORD: &str = match option_env!("PANEL_PASSWORD") {
    Some(pass) => pass,
    None => "password",
};

// IDs que la página anfitriona debe proveer. Este es todo el contrato con el
// markup circundante.
pub const LOGIN_FORM_ID: &str = "login-form";
pub const LOGIN_MESSAGE_ID: &str = "login-message";
pub const LOGIN_CONTAINER_ID: &str = "login-container";
pub const APP_CONTAINER_ID: &str = "app";
pub const LOGOUT_BUTTON_ID: &str = "logout-button";
pub const USERNAME_INPUT_ID: &str = "username";
pub const PASSWORD_INPUT_ID: &str = "password";

/// Mensaje inline para credenciales inválidas
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password.";

/// Destinatario del saludo de arranque
pub const GREETING_NAME: &str = "IoT User";
