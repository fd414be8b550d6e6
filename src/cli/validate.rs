//! Validate CLI commands
//!
//! Runs the form rules without the terminal UI, printing one line per field.

use clap::{Subcommand, ValueEnum};
use serde_json::json;

use crate::error::{SignupError, SignupResult};
use crate::validation::{
    evaluate_all, evaluate_step, Field, FieldValues, LoginField, LoginForm, ValidationResult,
};
use crate::wizard::FormStep;

/// Which rules to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StepScope {
    /// Step 1: name, email, phone
    Personal,
    /// Step 2: username and passwords
    Account,
    /// Both steps
    All,
}

/// Validate subcommands
#[derive(Subcommand)]
pub enum ValidateCommands {
    /// Check registration values against the wizard rules
    Signup {
        #[arg(long, default_value = "")]
        first_name: String,
        #[arg(long, default_value = "")]
        last_name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        username: String,
        /// Password (prefer the environment variable)
        #[arg(long, env = "SIGNUP_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
        /// Password confirmation (prefer the environment variable)
        #[arg(
            long,
            env = "SIGNUP_CONFIRM_PASSWORD",
            default_value = "",
            hide_env_values = true
        )]
        confirm_password: String,
        /// Rules to run
        #[arg(long, value_enum, default_value_t = StepScope::All)]
        step: StepScope,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check login values
    Login {
        #[arg(long, default_value = "")]
        username: String,
        /// Password (prefer the environment variable)
        #[arg(long, env = "SIGNUP_LOGIN_PASSWORD", default_value = "", hide_env_values = true)]
        password: String,
    },
}

/// Handle a validate command
pub fn handle_validate_command(cmd: ValidateCommands) -> SignupResult<()> {
    match cmd {
        ValidateCommands::Signup {
            first_name,
            last_name,
            email,
            phone,
            username,
            password,
            confirm_password,
            step,
            json,
        } => {
            let values = FieldValues::new()
                .with(Field::FirstName, first_name)
                .with(Field::LastName, last_name)
                .with(Field::Email, email)
                .with(Field::Phone, phone)
                .with(Field::Username, username)
                .with(Field::Password, password)
                .with(Field::ConfirmPassword, confirm_password);

            let result = match step {
                StepScope::Personal => evaluate_step(FormStep::Personal, &values),
                StepScope::Account => evaluate_step(FormStep::Account, &values),
                StepScope::All => evaluate_all(&values),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&result_json(&result))?);
            } else {
                print_result(&result);
            }

            let invalid = result.invalid_fields().count();
            if invalid > 0 {
                return Err(SignupError::Validation(format!(
                    "{} field(s) invalid",
                    invalid
                )));
            }
            Ok(())
        }
        ValidateCommands::Login { username, password } => {
            let mut form = LoginForm::new(username, password);
            let ok = form.validate();

            for field in [LoginField::Username, LoginField::Password] {
                let status = if form.is_invalid(field) { "invalid" } else { "ok" };
                println!("{:20} {}", field.id(), status);
            }

            if !ok {
                return Err(SignupError::Validation("login form incomplete".into()));
            }
            Ok(())
        }
    }
}

fn print_result(result: &ValidationResult) {
    for outcome in result.outcomes() {
        let status = if outcome.is_valid() {
            "ok"
        } else {
            outcome.message()
        };
        println!("{:20} {}", outcome.field.id(), status);
    }
}

/// JSON view of a validation result
pub fn result_json(result: &ValidationResult) -> serde_json::Value {
    let fields: Vec<_> = result
        .outcomes()
        .iter()
        .map(|o| {
            json!({
                "field": o.field,
                "violation": o.violation,
                "message": o.message(),
            })
        })
        .collect();

    json!({
        "valid": result.is_valid(),
        "first_invalid": result.first_invalid(),
        "fields": fields,
    })
}
