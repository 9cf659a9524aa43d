//! WASM driver: calculator wired to the mock DOM
//!
//! Every interaction goes through a button click on the mock DOM, and the
//! DOM is re-rendered from the calculator after each click, the same way
//! the browser widget re-renders after a state change.

use tracing::trace;

use super::dom::{DomElement, DomEvent, MockDom, DISPLAY_ID, HISTORY_ID, PENDING_ID};
use super::keypad::WasmKeypad;
use crate::core::{CalcError, CalcResult, Calculator, CalculatorConfig, Input};
use crate::driver::{CalculatorDriver, HistoryItem};

/// Calculator plus mock DOM
#[derive(Debug)]
pub struct WasmDriver {
    calculator: Calculator,
    keypad: WasmKeypad,
    dom: MockDom,
}

impl Default for WasmDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmDriver {
    /// Creates a driver with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a driver with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        let mut driver = Self {
            calculator: Calculator::with_config(config),
            keypad: WasmKeypad::new(),
            dom: MockDom::calculator(),
        };
        driver.sync_dom();
        driver
    }

    /// Returns a reference to the calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Returns a reference to the DOM
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        &self.dom
    }

    /// Returns a reference to the keypad
    #[must_use]
    pub fn keypad(&self) -> &WasmKeypad {
        &self.keypad
    }

    /// Simulates a click on the element with the given id
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.dom.dispatch_event(DomEvent::click(element_id));
        let action = self.keypad.handle_click(element_id)?;
        let result = self.calculator.press(action.input());
        self.sync_dom();
        result
    }

    /// Re-renders the DOM from the calculator state
    fn sync_dom(&mut self) {
        let text = self.calculator.display_text().to_string();
        let pending = self.calculator.pending_line();
        trace!(display = %text, ?pending, "syncing DOM");

        self.dom.set_element_text(DISPLAY_ID, &text);
        if let Some(elem) = self.dom.get_element_mut(DISPLAY_ID) {
            if self.calculator.last_error().is_some() {
                elem.add_class("error");
            } else {
                elem.remove_class("error");
            }
        }

        self.dom
            .set_element_text(PENDING_ID, pending.as_deref().unwrap_or_default());
        self.dom.set_element_visible(PENDING_ID, pending.is_some());

        self.dom.clear_children(HISTORY_ID);
        let items: Vec<DomElement> = self
            .calculator
            .history()
            .iter_rev()
            .enumerate()
            .map(|(i, calc)| {
                DomElement::new("li")
                    .with_id(&format!("history-{i}"))
                    .with_text(&calc.to_string())
            })
            .collect();
        for item in items {
            self.dom.append_child(HISTORY_ID, item);
        }
    }

    /// Text of the display element
    #[must_use]
    pub fn display_element_text(&self) -> Option<&str> {
        self.dom.get_element_text(DISPLAY_ID)
    }

    /// Text of the pending line, if visible
    #[must_use]
    pub fn pending_element_text(&self) -> Option<&str> {
        if self.dom.is_element_visible(PENDING_ID) {
            self.dom.get_element_text(PENDING_ID)
        } else {
            None
        }
    }

    /// History list items, newest first
    #[must_use]
    pub fn history_list_items(&self) -> Vec<String> {
        (0..)
            .map_while(|i| self.dom.get_element(&format!("history-{i}")))
            .map(|elem| elem.text_content.clone())
            .collect()
    }
}

impl CalculatorDriver for WasmDriver {
    fn press(&mut self, input: Input) -> CalcResult<()> {
        let id = self
            .keypad
            .buttons()
            .iter()
            .find(|b| b.action.input() == input)
            .map(|b| b.id.clone())
            .ok_or_else(|| CalcError::UnknownButton(input.to_string()))?;
        self.click(&id)
    }

    fn display(&self) -> String {
        self.display_element_text().unwrap_or_default().to_string()
    }

    fn pending_line(&self) -> Option<String> {
        self.pending_element_text().map(ToString::to_string)
    }

    fn history(&self) -> Vec<HistoryItem> {
        self.calculator
            .history()
            .iter_rev()
            .map(|c| HistoryItem {
                expression: c.expression(),
                result: c.result.clone(),
            })
            .collect()
    }
}
