//! Wizard form validator
//!
//! Gates progression through the two-step registration form, and the final
//! submission, behind the field rules. Every call re-reads the form, runs a
//! pure evaluation, writes each field's error text, and only then decides
//! whether to switch step, move focus, or let the submission through.

use tracing::{debug, info};

use super::step::FormStep;
use super::surface::{FormSurface, FORM_ID};
use crate::config::FocusMode;
use crate::error::{SignupError, SignupResult};
use crate::validation::{evaluate_step, Field, FieldValues, ValidationResult, SUCCESS_MESSAGE};

/// Result of trying to advance a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepChange {
    /// Every rule passed and the target step is now active
    Advanced { from: FormStep, to: FormStep },
    /// At least one rule failed; the active step is unchanged
    Blocked(ValidationResult),
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; the surface was told to submit
    Submitted,
    /// Submission cancelled; `first_invalid` received focus
    Blocked {
        first_invalid: Field,
        result: ValidationResult,
    },
}

#[derive(Debug, Clone, Copy)]
struct FieldElements<H> {
    input: H,
    error: H,
}

/// Element handles located once at construction
#[derive(Debug)]
struct Elements<H> {
    form: H,
    steps: [H; 2],
    indicators: Vec<(FormStep, H)>,
    fields: Vec<FieldElements<H>>,
}

impl<H: Copy> Elements<H> {
    fn locate<S>(surface: &S) -> SignupResult<Self>
    where
        S: FormSurface<Handle = H>,
    {
        let find = |id: &str| {
            surface
                .element(id)
                .ok_or_else(|| SignupError::missing_element(id))
        };

        let form = find(FORM_ID)?;
        let steps = [
            find(FormStep::Personal.container_id())?,
            find(FormStep::Account.container_id())?,
        ];

        // Indicators with an unknown data-step are ignored
        let indicators: Vec<(FormStep, H)> = surface
            .step_indicators()
            .into_iter()
            .filter_map(|(n, handle)| FormStep::from_number(n).map(|step| (step, handle)))
            .collect();
        for step in FormStep::ALL {
            if !indicators.iter().any(|(s, _)| *s == step) {
                return Err(SignupError::missing_element(format!(
                    "[data-step=\"{}\"]",
                    step.number()
                )));
            }
        }

        let fields = Field::ALL
            .iter()
            .map(|field| {
                Ok(FieldElements {
                    input: find(field.id())?,
                    error: find(field.error_id())?,
                })
            })
            .collect::<SignupResult<Vec<_>>>()?;

        Ok(Self {
            form,
            steps,
            indicators,
            fields,
        })
    }

    fn field(&self, field: Field) -> FieldElements<H> {
        self.fields[field.index()]
    }

    fn step(&self, step: FormStep) -> H {
        match step {
            FormStep::Personal => self.steps[0],
            FormStep::Account => self.steps[1],
        }
    }
}

/// Two-step registration wizard bound to a form surface
#[derive(Debug)]
pub struct WizardFormValidator<S: FormSurface> {
    surface: S,
    elements: Elements<S::Handle>,
    active: FormStep,
    focus_mode: FocusMode,
}

impl<S: FormSurface> WizardFormValidator<S> {
    /// Bind to a surface, locating every required element
    ///
    /// Activates the first step.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::MissingElement`] naming the first element the
    /// surface does not provide.
    pub fn new(surface: S) -> SignupResult<Self> {
        let elements = Elements::locate(&surface)?;
        let mut wizard = Self {
            surface,
            elements,
            active: FormStep::Personal,
            focus_mode: FocusMode::default(),
        };
        wizard.show_step(FormStep::Personal);
        Ok(wizard)
    }

    /// Set how focus is chosen when the first step fails
    pub fn with_focus_mode(mut self, focus_mode: FocusMode) -> Self {
        self.focus_mode = focus_mode;
        self
    }

    /// The currently active step
    pub fn active_step(&self) -> FormStep {
        self.active
    }

    /// The bound surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The bound surface, mutably (for input editing)
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Release the surface
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Snapshot every field value
    pub fn values(&self) -> FieldValues {
        let mut values = FieldValues::new();
        for field in Field::ALL {
            let input = self.elements.field(field).input;
            values.set(field, self.surface.value(input));
        }
        values
    }

    /// Validate the active step and move to `target` if it passes
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::Transition`] unless `target` directly follows
    /// the active step.
    pub fn advance_to_step(&mut self, target: FormStep) -> SignupResult<StepChange> {
        let from = self.active;
        if target.previous() != Some(from) {
            return Err(SignupError::Transition { from, to: target });
        }

        let result = evaluate_step(from, &self.values());
        self.report(&result);

        if result.is_valid() {
            self.show_step(target);
            info!(from = %from, to = %target, "advanced wizard step");
            return Ok(StepChange::Advanced { from, to: target });
        }

        if let Some(field) = self.step_focus_target(from, &result) {
            self.focus(field);
        }
        Ok(StepChange::Blocked(result))
    }

    /// Go back to the first step without validating anything
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::Transition`] for any target other than the
    /// first step.
    pub fn return_to_step(&mut self, target: FormStep) -> SignupResult<()> {
        if target != FormStep::Personal {
            return Err(SignupError::Transition {
                from: self.active,
                to: target,
            });
        }

        let from = self.active;
        self.show_step(target);
        info!(from = %from, to = %target, "returned to wizard step");
        Ok(())
    }

    /// Validate both steps and submit if every rule passes
    ///
    /// The personal step is re-checked first since its inputs stay editable
    /// after advancing. If it fails, its errors are shown, the wizard goes
    /// back to it and its first failing field receives focus. Otherwise the
    /// account step is checked; on failure the submission is cancelled and
    /// the first failing field, in priority order, receives focus.
    ///
    /// # Errors
    ///
    /// Returns [`SignupError::SubmitOutsideFinalStep`] while the first step
    /// is active.
    pub fn submit(&mut self) -> SignupResult<SubmitOutcome> {
        if self.active != FormStep::Account {
            return Err(SignupError::SubmitOutsideFinalStep { step: self.active });
        }

        let values = self.values();

        let personal = evaluate_step(FormStep::Personal, &values);
        if let Some(first_invalid) = personal.first_invalid() {
            self.report(&personal);
            self.show_step(FormStep::Personal);
            self.focus(first_invalid);
            info!(
                from = %FormStep::Account,
                to = %FormStep::Personal,
                "submission sent back to wizard step"
            );
            return Ok(SubmitOutcome::Blocked {
                first_invalid,
                result: personal,
            });
        }

        let result = evaluate_step(FormStep::Account, &values);
        self.report(&result);

        match result.first_invalid() {
            Some(first_invalid) => {
                self.focus(first_invalid);
                Ok(SubmitOutcome::Blocked {
                    first_invalid,
                    result,
                })
            }
            None => {
                self.surface.acknowledge(SUCCESS_MESSAGE);
                self.surface.submit(self.elements.form);
                info!("registration submitted");
                Ok(SubmitOutcome::Submitted)
            }
        }
    }

    /// Field to focus after a failed step check
    fn step_focus_target(&self, step: FormStep, result: &ValidationResult) -> Option<Field> {
        match self.focus_mode {
            FocusMode::FirstInvalid => result.first_invalid(),
            FocusMode::LeadingField => {
                let leading = Field::for_step(step).first().copied()?;
                result.violation(leading).map(|_| leading)
            }
        }
    }

    fn report(&mut self, result: &ValidationResult) {
        for outcome in result.outcomes() {
            let error = self.elements.field(outcome.field).error;
            self.surface.set_text(error, outcome.message());
        }
    }

    fn focus(&mut self, field: Field) {
        let input = self.elements.field(field).input;
        self.surface.focus(input);
        debug!(field = %field, "focus moved");
    }

    /// Deactivate every step and indicator, then activate `target`'s
    fn show_step(&mut self, target: FormStep) {
        for step in FormStep::ALL {
            let container = self.elements.step(step);
            self.surface.set_active(container, false);
        }
        for (_, indicator) in &self.elements.indicators {
            self.surface.set_active(*indicator, false);
        }

        let container = self.elements.step(target);
        self.surface.set_active(container, true);
        for (step, indicator) in &self.elements.indicators {
            if *step == target {
                self.surface.set_active(*indicator, true);
            }
        }

        self.active = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Violation;
    use crate::wizard::testing::MemorySurface;

    fn wizard(surface: MemorySurface) -> WizardFormValidator<MemorySurface> {
        WizardFormValidator::new(surface).unwrap()
    }

    fn filled_personal() -> MemorySurface {
        MemorySurface::registration()
            .with_value(Field::FirstName, "Ana")
            .with_value(Field::LastName, "Lima")
            .with_value(Field::Email, "ana@vendas.com.br")
            .with_value(Field::Phone, "(11) 98765-4321")
    }

    fn on_account_step(username: &str, password: &str, confirm: &str) -> WizardFormValidator<MemorySurface> {
        let surface = filled_personal()
            .with_value(Field::Username, username)
            .with_value(Field::Password, password)
            .with_value(Field::ConfirmPassword, confirm);
        let mut wizard = wizard(surface);
        wizard.advance_to_step(FormStep::Account).unwrap();
        wizard
    }

    #[test]
    fn test_starts_on_first_step() {
        let wizard = wizard(MemorySurface::registration());
        assert_eq!(wizard.active_step(), FormStep::Personal);

        let surface = wizard.surface();
        assert!(surface.is_active("step-1"));
        assert!(!surface.is_active("step-2"));
        assert!(surface.indicator_active(1));
        assert!(!surface.indicator_active(2));
    }

    #[test]
    fn test_missing_element_fails_fast() {
        let err = WizardFormValidator::new(MemorySurface::registration().without("email_error"))
            .unwrap_err();
        assert!(err.is_missing_element());
        assert_eq!(err.to_string(), "Form is missing required element 'email_error'");

        let err = WizardFormValidator::new(MemorySurface::registration().without(FORM_ID))
            .unwrap_err();
        assert!(matches!(err, SignupError::MissingElement { id } if id == FORM_ID));
    }

    #[test]
    fn test_missing_indicator_fails_fast() {
        let err = WizardFormValidator::new(MemorySurface::registration().without_indicator(2))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Form is missing required element '[data-step=\"2\"]'"
        );
    }

    #[test]
    fn test_advance_with_valid_fields() {
        let mut wizard = wizard(filled_personal());

        let change = wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(
            change,
            StepChange::Advanced {
                from: FormStep::Personal,
                to: FormStep::Account
            }
        );
        assert_eq!(wizard.active_step(), FormStep::Account);

        let surface = wizard.surface();
        assert!(!surface.is_active("step-1"));
        assert!(surface.is_active("step-2"));
        assert!(!surface.indicator_active(1));
        assert!(surface.indicator_active(2));
        for field in Field::for_step(FormStep::Personal) {
            assert_eq!(surface.error_text(*field), "");
        }
    }

    #[test]
    fn test_advance_blocked_by_each_field() {
        for field in Field::for_step(FormStep::Personal) {
            let mut wizard = wizard(filled_personal().with_value(*field, ""));

            let change = wizard.advance_to_step(FormStep::Account).unwrap();
            assert!(matches!(change, StepChange::Blocked(_)));
            assert_eq!(wizard.active_step(), FormStep::Personal);
            assert!(wizard.surface().is_active("step-1"));
            assert_eq!(wizard.surface().focused(), Some(field.id()));
        }
    }

    #[test]
    fn test_email_error_texts() {
        let mut wizard = wizard(filled_personal().with_value(Field::Email, ""));
        wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(wizard.surface().error_text(Field::Email), "Please enter your email.");

        wizard.surface_mut().set_value(Field::Email, "not-an-email");
        wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(
            wizard.surface().error_text(Field::Email),
            "Please enter a valid email."
        );

        wizard.surface_mut().set_value(Field::Email, "a@b.co");
        let change = wizard.advance_to_step(FormStep::Account).unwrap();
        assert!(matches!(change, StepChange::Advanced { .. }));
        assert_eq!(wizard.surface().error_text(Field::Email), "");
    }

    #[test]
    fn test_advance_reports_every_failing_field() {
        let mut wizard = wizard(MemorySurface::registration());
        let change = wizard.advance_to_step(FormStep::Account).unwrap();

        let StepChange::Blocked(result) = change else {
            panic!("expected blocked step change");
        };
        assert_eq!(result.invalid_fields().count(), 4);

        let surface = wizard.surface();
        assert_eq!(surface.error_text(Field::FirstName), "Please enter your first name.");
        assert_eq!(surface.error_text(Field::LastName), "Please enter your last name.");
        assert_eq!(surface.error_text(Field::Email), "Please enter your email.");
        assert_eq!(surface.error_text(Field::Phone), "Please enter your phone number.");
        assert_eq!(surface.focused(), Some("first_name"));
        assert_eq!(surface.focus_calls(), 1);
    }

    #[test]
    fn test_focus_first_invalid_after_leading_field() {
        let mut wizard = wizard(
            filled_personal()
                .with_value(Field::Email, "bad")
                .with_value(Field::Phone, ""),
        );
        wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(wizard.surface().focused(), Some("email"));
    }

    #[test]
    fn test_leading_field_focus_mode() {
        let mut wizard = wizard(filled_personal().with_value(Field::Email, "bad"))
            .with_focus_mode(FocusMode::LeadingField);
        wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(wizard.surface().focused(), None);
        assert_eq!(
            wizard.surface().error_text(Field::Email),
            "Please enter a valid email."
        );

        wizard.surface_mut().set_value(Field::FirstName, "");
        wizard.advance_to_step(FormStep::Account).unwrap();
        assert_eq!(wizard.surface().focused(), Some("first_name"));
    }

    #[test]
    fn test_advance_only_from_preceding_step() {
        let mut wizard = wizard(filled_personal());
        let err = wizard.advance_to_step(FormStep::Personal).unwrap_err();
        assert!(err.is_transition());

        wizard.advance_to_step(FormStep::Account).unwrap();
        let err = wizard.advance_to_step(FormStep::Account).unwrap_err();
        assert!(err.is_transition());
        assert_eq!(wizard.active_step(), FormStep::Account);
    }

    #[test]
    fn test_return_is_unconditional_and_keeps_errors() {
        let mut wizard = on_account_step("", "abc", "abc");
        wizard.submit().unwrap();
        wizard.surface_mut().set_value(Field::FirstName, "");

        wizard.return_to_step(FormStep::Personal).unwrap();

        assert_eq!(wizard.active_step(), FormStep::Personal);
        let surface = wizard.surface();
        assert!(surface.is_active("step-1"));
        assert!(!surface.is_active("step-2"));
        assert!(surface.indicator_active(1));
        assert!(!surface.indicator_active(2));
        assert_eq!(surface.error_text(Field::FirstName), "");
        assert_eq!(surface.error_text(Field::Username), "Please enter a username.");
    }

    #[test]
    fn test_return_from_first_step_is_noop() {
        let mut wizard = wizard(MemorySurface::registration());
        wizard.return_to_step(FormStep::Personal).unwrap();
        assert_eq!(wizard.active_step(), FormStep::Personal);

        let err = wizard.return_to_step(FormStep::Account).unwrap_err();
        assert!(err.is_transition());
    }

    #[test]
    fn test_submit_requires_final_step() {
        let mut wizard = wizard(filled_personal());
        let err = wizard.submit().unwrap_err();
        assert!(err.is_premature_submit());
        assert!(!wizard.surface().submitted());
    }

    #[test]
    fn test_submit_blocked_on_empty_username() {
        let mut wizard = on_account_step("", "abc", "abc");

        let outcome = wizard.submit().unwrap();
        let SubmitOutcome::Blocked {
            first_invalid,
            result,
        } = outcome
        else {
            panic!("expected blocked submission");
        };

        assert_eq!(first_invalid, Field::Username);
        assert_eq!(result.violation(Field::Username), Some(Violation::Required));
        assert_eq!(result.violation(Field::Password), Some(Violation::TooShort));
        assert_eq!(result.violation(Field::ConfirmPassword), None);

        let surface = wizard.surface();
        assert_eq!(surface.focused(), Some("username"));
        assert_eq!(surface.error_text(Field::Username), "Please enter a username.");
        assert_eq!(
            surface.error_text(Field::Password),
            "Password must be at least 8 characters."
        );
        assert_eq!(surface.error_text(Field::ConfirmPassword), "");
        assert!(!surface.submitted());
        assert!(surface.acknowledgments().is_empty());
    }

    #[test]
    fn test_submit_blocked_on_mismatch() {
        let mut wizard = on_account_step("bob", "longenough1", "different");

        let outcome = wizard.submit().unwrap();
        assert!(matches!(
            outcome,
            SubmitOutcome::Blocked {
                first_invalid: Field::ConfirmPassword,
                ..
            }
        ));

        let surface = wizard.surface();
        assert_eq!(surface.error_text(Field::Password), "");
        assert_eq!(
            surface.error_text(Field::ConfirmPassword),
            "Passwords do not match."
        );
        assert_eq!(surface.focused(), Some("confirm_password"));
        assert!(!surface.submitted());
    }

    #[test]
    fn test_submit_passes() {
        let mut wizard = on_account_step("bob", "longenough1", "longenough1");

        let outcome = wizard.submit().unwrap();
        assert_eq!(outcome, SubmitOutcome::Submitted);

        let surface = wizard.surface();
        for field in Field::ALL {
            assert_eq!(surface.error_text(field), "");
        }
        assert!(surface.submitted());
        assert_eq!(surface.acknowledgments(), &[SUCCESS_MESSAGE.to_string()]);
    }

    #[test]
    fn test_submit_rechecks_personal_step() {
        let mut wizard = on_account_step("bob", "longenough1", "longenough1");
        wizard.surface_mut().set_value(Field::FirstName, "");
        wizard.surface_mut().set_value(Field::Email, "not-an-email");

        let outcome = wizard.submit().unwrap();
        let SubmitOutcome::Blocked {
            first_invalid,
            result,
        } = outcome
        else {
            panic!("expected blocked submission");
        };
        assert_eq!(first_invalid, Field::FirstName);
        assert_eq!(result.violation(Field::Email), Some(Violation::InvalidFormat));

        assert_eq!(wizard.active_step(), FormStep::Personal);
        let surface = wizard.surface();
        assert!(surface.is_active("step-1"));
        assert!(!surface.is_active("step-2"));
        assert!(surface.indicator_active(1));
        assert!(!surface.indicator_active(2));
        assert_eq!(surface.focused(), Some("first_name"));
        assert_eq!(surface.error_text(Field::FirstName), "Please enter your first name.");
        assert_eq!(surface.error_text(Field::Email), "Please enter a valid email.");
        assert!(!surface.submitted());
        assert!(surface.acknowledgments().is_empty());
    }

    #[test]
    fn test_resubmit_after_fixing_personal_step() {
        let mut wizard = on_account_step("bob", "longenough1", "longenough1");
        wizard.surface_mut().set_value(Field::Phone, "");
        wizard.submit().unwrap();
        assert_eq!(wizard.active_step(), FormStep::Personal);

        wizard.surface_mut().set_value(Field::Phone, "11 5555-0000");
        wizard.advance_to_step(FormStep::Account).unwrap();

        assert_eq!(wizard.submit().unwrap(), SubmitOutcome::Submitted);
        assert_eq!(wizard.surface().error_text(Field::Phone), "");
        assert!(wizard.surface().submitted());
    }

    #[test]
    fn test_unknown_indicator_is_ignored() {
        let mut surface = MemorySurface::registration();
        surface.add_indicator(7);
        let mut wizard = wizard(surface.with_value(Field::FirstName, "Ana"));
        assert!(wizard.surface().indicator_active(1));
        assert!(!wizard.surface().indicator_active(7));

        wizard.return_to_step(FormStep::Personal).unwrap();
        assert!(!wizard.surface().indicator_active(7));
    }

    #[test]
    fn test_submit_clears_previous_errors() {
        let mut wizard = on_account_step("", "short", "");
        wizard.submit().unwrap();
        assert_ne!(wizard.surface().error_text(Field::Password), "");

        wizard.surface_mut().set_value(Field::Username, "bob");
        wizard.surface_mut().set_value(Field::Password, "longenough1");
        wizard.surface_mut().set_value(Field::ConfirmPassword, "longenough1");

        assert_eq!(wizard.submit().unwrap(), SubmitOutcome::Submitted);
        assert_eq!(wizard.surface().error_text(Field::Password), "");
        assert_eq!(wizard.surface().error_text(Field::ConfirmPassword), "");
    }

    #[test]
    fn test_repeated_validation_is_idempotent() {
        let mut wizard = on_account_step("", "abc", "xyz");

        let first = wizard.submit().unwrap();
        let texts: Vec<String> = Field::ALL
            .iter()
            .map(|f| wizard.surface().error_text(*f).to_string())
            .collect();

        let second = wizard.submit().unwrap();
        let again: Vec<String> = Field::ALL
            .iter()
            .map(|f| wizard.surface().error_text(*f).to_string())
            .collect();

        assert_eq!(first, second);
        assert_eq!(texts, again);
    }
}
