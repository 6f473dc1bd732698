// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Los listeners se registran UNA VEZ durante el setup, sobre elementos que
//   pertenecen a la página y no se destruyen. closure.forget() es seguro.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};

/// Helper para registrar un submit handler
pub fn on_submit<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Helper para registrar un click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
