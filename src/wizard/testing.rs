//! In-memory form surface for tests

use super::step::FormStep;
use super::surface::{FormSurface, FORM_ID};
use crate::validation::Field;

#[derive(Debug, Clone)]
struct Element {
    id: String,
    data_step: Option<u8>,
    value: String,
    text: String,
    active: bool,
}

impl Element {
    fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data_step: None,
            value: String::new(),
            text: String::new(),
            active: false,
        }
    }

    fn indicator(step: u8) -> Self {
        Self {
            data_step: Some(step),
            ..Self::new(format!("indicator-{}", step))
        }
    }
}

/// A flat list of elements with the registration form's ids
#[derive(Debug, Default)]
pub struct MemorySurface {
    elements: Vec<Element>,
    focused: Option<usize>,
    focus_calls: usize,
    acknowledgments: Vec<String>,
    submitted: bool,
}

impl MemorySurface {
    /// Every element the wizard needs, with empty values
    pub fn registration() -> Self {
        let mut elements = vec![Element::new(FORM_ID)];
        for step in FormStep::ALL {
            elements.push(Element::new(step.container_id()));
            elements.push(Element::indicator(step.number()));
        }
        for field in Field::ALL {
            elements.push(Element::new(field.id()));
            elements.push(Element::new(field.error_id()));
        }

        Self {
            elements,
            ..Self::default()
        }
    }

    /// Drop the element with the given id
    pub fn without(mut self, id: &str) -> Self {
        self.elements.retain(|e| e.id != id);
        self
    }

    /// Drop the indicator for a step number
    pub fn without_indicator(mut self, step: u8) -> Self {
        self.elements.retain(|e| e.data_step != Some(step));
        self
    }

    /// Add an extra indicator element
    pub fn add_indicator(&mut self, step: u8) {
        self.elements.push(Element::indicator(step));
    }

    pub fn with_value(mut self, field: Field, value: &str) -> Self {
        self.set_value(field, value);
        self
    }

    pub fn set_value(&mut self, field: Field, value: &str) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == field.id()) {
            element.value = value.to_string();
        }
    }

    fn by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn error_text(&self, field: Field) -> &str {
        self.by_id(field.error_id())
            .map(|e| e.text.as_str())
            .unwrap_or("")
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.by_id(id).is_some_and(|e| e.active)
    }

    pub fn indicator_active(&self, step: u8) -> bool {
        self.elements
            .iter()
            .any(|e| e.data_step == Some(step) && e.active)
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.map(|i| self.elements[i].id.as_str())
    }

    pub fn focus_calls(&self) -> usize {
        self.focus_calls
    }

    pub fn acknowledgments(&self) -> &[String] {
        &self.acknowledgments
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }
}

impl FormSurface for MemorySurface {
    type Handle = usize;

    fn element(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    fn step_indicators(&self) -> Vec<(u8, usize)> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.data_step.map(|n| (n, i)))
            .collect()
    }

    fn value(&self, element: usize) -> String {
        self.elements[element].value.clone()
    }

    fn set_text(&mut self, element: usize, text: &str) {
        self.elements[element].text = text.to_string();
    }

    fn set_active(&mut self, element: usize, active: bool) {
        self.elements[element].active = active;
    }

    fn focus(&mut self, element: usize) {
        self.focused = Some(element);
        self.focus_calls += 1;
    }

    fn acknowledge(&mut self, message: &str) {
        self.acknowledgments.push(message.to_string());
    }

    fn submit(&mut self, form: usize) {
        assert_eq!(self.elements[form].id, FORM_ID);
        self.submitted = true;
    }
}
