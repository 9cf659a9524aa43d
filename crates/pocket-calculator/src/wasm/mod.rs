//! Browser frontend for the calculator widget
//!
//! The keypad and mock DOM are always compiled so the widget can be
//! driven and tested natively; the `wasm-bindgen` bindings need the
//! `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
pub mod dom;
mod driver;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use dom::{DomElement, DomEvent, MockDom};
pub use driver::WasmDriver;
pub use keypad::{ButtonKind, KeypadAction, KeypadButtonDef, MockDomKeypadExt, WasmKeypad};
