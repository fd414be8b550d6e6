//! Terminal rendition of the registration form
//!
//! [`SignupScreen`] holds the state the views draw from (inputs, error
//! lines, active step and indicator markers, focus) and implements
//! [`FormSurface`] so the wizard can drive it directly.

use crate::validation::Field;
use crate::wizard::{FormStep, FormSurface, FORM_ID};

use super::widgets::TextInput;

/// Elements of the terminal form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRef {
    Form,
    Step(FormStep),
    Indicator(FormStep),
    Input(Field),
    Error(Field),
}

/// State of the two-step signup form
#[derive(Debug, Clone)]
pub struct SignupScreen {
    inputs: [TextInput; 7],
    errors: [String; 7],
    steps_active: [bool; 2],
    indicators_active: [bool; 2],
    focused: Field,
    acknowledgments: Vec<String>,
    submitted: bool,
}

fn step_index(step: FormStep) -> usize {
    step.number() as usize - 1
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::FirstName => "Your first name",
        Field::LastName => "Your last name",
        Field::Email => "you@example.com",
        Field::Phone => "(00) 00000-0000",
        Field::Username => "Pick a unique username",
        Field::Password => "At least 8 characters",
        Field::ConfirmPassword => "Repeat the password",
    }
}

impl SignupScreen {
    /// Create an empty form; password inputs start masked when `mask_passwords`
    pub fn new(mask_passwords: bool) -> Self {
        let inputs = Field::ALL.map(|field| {
            TextInput::new()
                .label(field.label())
                .placeholder(placeholder(field))
                .masked(field.is_secret() && mask_passwords)
        });

        Self {
            inputs,
            errors: Default::default(),
            steps_active: [false; 2],
            indicators_active: [false; 2],
            focused: Field::FirstName,
            acknowledgments: Vec::new(),
            submitted: false,
        }
    }

    /// Input widget state for a field
    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    /// Error text currently shown under a field
    pub fn error(&self, field: Field) -> &str {
        &self.errors[field.index()]
    }

    /// Whether a step container is shown
    pub fn is_step_active(&self, step: FormStep) -> bool {
        self.steps_active[step_index(step)]
    }

    /// Whether a step indicator is highlighted
    pub fn is_indicator_active(&self, step: FormStep) -> bool {
        self.indicators_active[step_index(step)]
    }

    /// The step whose container is shown
    pub fn visible_step(&self) -> FormStep {
        FormStep::ALL
            .into_iter()
            .find(|s| self.is_step_active(*s))
            .unwrap_or_default()
    }

    /// The field that receives typed input
    pub fn focused_field(&self) -> Field {
        self.focused
    }

    /// The focused input, for editing
    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[self.focused.index()]
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: Field, value: &str) {
        self.inputs[field.index()].set_value(value);
    }

    /// Move focus to the next field on the visible step, wrapping
    pub fn next_field(&mut self) {
        self.cycle_focus(1);
    }

    /// Move focus to the previous field on the visible step, wrapping
    pub fn prev_field(&mut self) {
        let len = Field::for_step(self.visible_step()).len();
        self.cycle_focus(len - 1);
    }

    fn cycle_focus(&mut self, offset: usize) {
        let fields = Field::for_step(self.visible_step());
        let current = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(current + offset) % fields.len()];
    }

    /// Show or hide the focused password; returns the new masked state,
    /// or None when the focused field is not a password
    pub fn toggle_reveal(&mut self) -> Option<bool> {
        if !self.focused.is_secret() {
            return None;
        }
        let input = self.focused_input_mut();
        input.toggle_masked();
        Some(input.masked)
    }

    /// Drain acknowledgments presented since the last call
    pub fn take_acknowledgments(&mut self) -> Vec<String> {
        std::mem::take(&mut self.acknowledgments)
    }

    /// Whether the wizard let the submission through
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

impl FormSurface for SignupScreen {
    type Handle = ElementRef;

    fn element(&self, id: &str) -> Option<ElementRef> {
        if id == FORM_ID {
            return Some(ElementRef::Form);
        }
        if let Some(step) = FormStep::ALL.into_iter().find(|s| s.container_id() == id) {
            return Some(ElementRef::Step(step));
        }
        Field::from_id(id)
            .map(ElementRef::Input)
            .or_else(|| Field::from_error_id(id).map(ElementRef::Error))
    }

    fn step_indicators(&self) -> Vec<(u8, ElementRef)> {
        FormStep::ALL
            .into_iter()
            .map(|s| (s.number(), ElementRef::Indicator(s)))
            .collect()
    }

    fn value(&self, element: ElementRef) -> String {
        match element {
            ElementRef::Input(field) => self.input(field).value().to_string(),
            _ => String::new(),
        }
    }

    fn set_text(&mut self, element: ElementRef, text: &str) {
        if let ElementRef::Error(field) = element {
            self.errors[field.index()] = text.to_string();
        }
    }

    fn set_active(&mut self, element: ElementRef, active: bool) {
        match element {
            ElementRef::Step(step) => {
                self.steps_active[step_index(step)] = active;
                if active && self.focused.step() != step {
                    self.focused = Field::for_step(step)[0];
                }
            }
            ElementRef::Indicator(step) => {
                self.indicators_active[step_index(step)] = active;
            }
            _ => {}
        }
    }

    fn focus(&mut self, element: ElementRef) {
        if let ElementRef::Input(field) = element {
            self.focused = field;
        }
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }

    fn submit(&mut self, form: ElementRef) {
        if form == ElementRef::Form {
            self.submitted = true;
        }
    }
}
