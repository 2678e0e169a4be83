use crate::ui::mvi::{FlowState, Intent, Reducer};

/// Which input owns the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Email,
    Amount,
}

/// Local state of the purchase form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseFormState {
    pub email: String,
    pub amount: String,
    pub focus: FormField,
    /// Client-side validation message; cleared on the next edit.
    pub error: Option<String>,
}

impl FlowState for PurchaseFormState {}

impl PurchaseFormState {
    /// Validate the form the way the submit control would.
    ///
    /// Email must look like an address and the amount must be a number
    /// of at least 1. Failures never reach the network.
    pub fn validate(&self) -> Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("Email is required".to_string());
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err("Enter a valid email address".to_string());
        }

        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err("Amount is required".to_string());
        }
        match amount.parse::<f64>() {
            Ok(value) if value >= 1.0 => Ok(()),
            Ok(_) => Err("Amount must be at least 1".to_string()),
            Err(_) => Err("Amount must be a number".to_string()),
        }
    }
}

/// Edits applied to the purchase form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Append a character to the focused field. The amount field only
    /// accepts digits and a decimal point.
    Type(char),
    Backspace,
    /// Move the cursor to the other field. With two fields, next and
    /// previous coincide.
    FocusNext,
    /// Record a validation failure for inline display.
    Invalid { message: String },
    /// Wipe the form back to its initial state.
    Clear,
}

impl Intent for FormIntent {}

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = PurchaseFormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Type(ch) => {
                match state.focus {
                    FormField::Email => {
                        if !ch.is_whitespace() && !ch.is_control() {
                            state.email.push(ch);
                        }
                    }
                    FormField::Amount => {
                        if ch.is_ascii_digit() || ch == '.' {
                            state.amount.push(ch);
                        }
                    }
                }
                state.error = None;
                state
            }
            FormIntent::Backspace => {
                match state.focus {
                    FormField::Email => {
                        state.email.pop();
                    }
                    FormField::Amount => {
                        state.amount.pop();
                    }
                }
                state.error = None;
                state
            }
            FormIntent::FocusNext => {
                state.focus = match state.focus {
                    FormField::Email => FormField::Amount,
                    FormField::Amount => FormField::Email,
                };
                state
            }
            FormIntent::Invalid { message } => {
                state.error = Some(message);
                state
            }
            FormIntent::Clear => PurchaseFormState::default(),
        }
    }
}
