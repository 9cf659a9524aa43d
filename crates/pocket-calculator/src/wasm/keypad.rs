//! Keypad button grid
//!
//! Layout:
//! ```text
//! [ C ] [ ± ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ - ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [    0    ] [ . ] [ = ]
//! ```

use tracing::warn;

use super::dom::{DomElement, MockDom};
use crate::core::{CalcError, CalcResult, Digit, Input, Operator};

/// Actions that keypad buttons perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadAction {
    /// Enter a digit
    Digit(Digit),
    /// Enter the decimal point
    Decimal,
    /// Choose an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Clear all state
    Clear,
    /// Negate the display
    ToggleSign,
    /// Divide the display by 100
    Percent,
}

impl KeypadAction {
    /// Returns the button label
    #[must_use]
    pub fn label(&self) -> String {
        self.input().to_string()
    }

    /// Returns the calculator input this button produces
    #[must_use]
    pub const fn input(&self) -> Input {
        match *self {
            Self::Digit(d) => Input::Digit(d),
            Self::Decimal => Input::DecimalPoint,
            Self::Operator(op) => Input::Operator(op),
            Self::Equals => Input::Equals,
            Self::Clear => Input::Clear,
            Self::ToggleSign => Input::ToggleSign,
            Self::Percent => Input::Percent,
        }
    }

    /// Returns the element id of the button
    #[must_use]
    pub fn element_id(&self) -> String {
        match self {
            Self::Digit(d) => format!("btn-{d}"),
            Self::Decimal => "btn-decimal".to_string(),
            Self::Operator(op) => format!("btn-{}", op.name()),
            Self::Equals => "btn-equals".to_string(),
            Self::Clear => "btn-clear".to_string(),
            Self::ToggleSign => "btn-sign".to_string(),
            Self::Percent => "btn-percent".to_string(),
        }
    }

    /// Returns the styling group of the button
    #[must_use]
    pub const fn kind(&self) -> ButtonKind {
        match self {
            Self::Digit(_) | Self::Decimal => ButtonKind::Digit,
            Self::Operator(_) | Self::Equals => ButtonKind::Operator,
            Self::Clear | Self::ToggleSign | Self::Percent => ButtonKind::Function,
        }
    }
}

/// Visual group of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point
    Digit,
    /// Operators and `=`
    Operator,
    /// `C`, `±` and `%`
    Function,
}

impl ButtonKind {
    /// CSS class for the group
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Digit => "btn-digit",
            Self::Operator => "btn-operator",
            Self::Function => "btn-function",
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button spans
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button spanning `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        Self {
            action,
            id: action.element_id(),
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Keypad layout
#[derive(Debug, Clone)]
pub struct WasmKeypad {
    buttons: Vec<KeypadButtonDef>,
    cols: usize,
    rows: usize,
}

impl Default for WasmKeypad {
    fn default() -> Self {
        Self::new()
    }
}

impl WasmKeypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: u8| Digit::ALL[usize::from(d)];
        let buttons = vec![
            // Row 0: C ± % ÷
            KeypadButtonDef::new(KeypadAction::Clear, 0, 0),
            KeypadButtonDef::new(KeypadAction::ToggleSign, 0, 1),
            KeypadButtonDef::new(KeypadAction::Percent, 0, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(KeypadAction::Digit(digit(7)), 1, 0),
            KeypadButtonDef::new(KeypadAction::Digit(digit(8)), 1, 1),
            KeypadButtonDef::new(KeypadAction::Digit(digit(9)), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButtonDef::new(KeypadAction::Digit(digit(4)), 2, 0),
            KeypadButtonDef::new(KeypadAction::Digit(digit(5)), 2, 1),
            KeypadButtonDef::new(KeypadAction::Digit(digit(6)), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(KeypadAction::Digit(digit(1)), 3, 0),
            KeypadButtonDef::new(KeypadAction::Digit(digit(2)), 3, 1),
            KeypadButtonDef::new(KeypadAction::Digit(digit(3)), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operator::Add), 3, 3),
            // Row 4: 0 (wide) . =
            KeypadButtonDef::spanning(KeypadAction::Digit(digit(0)), 4, 0, 2),
            KeypadButtonDef::new(KeypadAction::Decimal, 4, 2),
            KeypadButtonDef::new(KeypadAction::Equals, 4, 3),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_button_by_action(&self, action: KeypadAction) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action.label() == label)
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                let mut elem = DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad-btn")
                    .with_class(btn.action.kind().class())
                    .with_attr("data-row", &btn.row.to_string())
                    .with_attr("data-col", &btn.col.to_string());
                if btn.span > 1 {
                    elem = elem.with_class(&format!("col-span-{}", btn.span));
                }
                elem
            })
            .collect()
    }

    /// Creates the keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements().into_iter().fold(
            DomElement::new("div")
                .with_id("calc-keypad")
                .with_class("keypad"),
            DomElement::with_child,
        )
    }

    /// Resolves a click on an element to its action
    pub fn handle_click(&self, element_id: &str) -> CalcResult<KeypadAction> {
        self.find_button_by_id(element_id)
            .map(|btn| btn.action)
            .ok_or_else(|| {
                warn!(element_id, "click on unknown keypad element");
                CalcError::UnknownButton(element_id.to_string())
            })
    }
}

/// Extension trait for adding the keypad to a [`MockDom`]
pub trait MockDomKeypadExt {
    /// Registers the keypad container and every button
    fn add_keypad(&mut self, keypad: &WasmKeypad);
}

impl MockDomKeypadExt for MockDom {
    fn add_keypad(&mut self, keypad: &WasmKeypad) {
        let keypad_elem = keypad.create_keypad_element();
        for btn_elem in &keypad_elem.children {
            self.register_element(btn_elem.clone());
        }
        self.root.children.push(keypad_elem.clone());
        self.register_element(keypad_elem);
    }
}
