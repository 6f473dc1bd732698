// ============================================================================
// IOT WEB PANEL - Punto de entrada WASM
// ============================================================================
// - App: resolución de elementos + wiring de handlers
// - State: Rc<RefCell> para el estado de autenticación
// - DOM: helpers sobre web_sys
// ============================================================================

mod app;
mod auth;
mod dom;
mod error;
mod state;
mod utils;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::utils::{greet, GREETING_NAME};

// Instancia global de la app: mantiene vivos los handlers registrados
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(Config::default());
    log::info!("🚀 IoT Web Panel iniciando...");
    log::info!("{}", greet(GREETING_NAME));

    match App::new() {
        Ok(app) => {
            app.wire()?;
            APP.with(|cell| {
                *cell.borrow_mut() = Some(app);
            });
            log::info!("✅ Panel listo");
        }
        Err(e) => {
            // Fail-closed: sin los elementos requeridos no se registra ningún
            // handler y el panel queda inerte. Sin mensaje al usuario.
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
            log::error!("❌ {}", e);
        }
    }

    Ok(())
}
