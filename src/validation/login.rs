//! Login form checks
//!
//! The login form marks inputs invalid instead of showing messages. The
//! username is trimmed before the emptiness check; the password is not.
//! A marker clears as soon as its input is edited.

use std::fmt;

use zeroize::Zeroize;

/// A field of the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

impl LoginField {
    fn index(self) -> usize {
        self as usize
    }

    /// Input element id
    pub fn id(self) -> &'static str {
        match self {
            Self::Username => "id_username",
            Self::Password => "id_password",
        }
    }
}

/// Login form state with per-input invalid markers
#[derive(Default)]
pub struct LoginForm {
    username: String,
    password: String,
    invalid: [bool; 2],
}

impl LoginForm {
    /// Create a form with the given values and no markers
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            invalid: [false; 2],
        }
    }

    /// Replace a value, clearing its invalid marker
    pub fn edit(&mut self, field: LoginField, value: impl Into<String>) {
        let slot = match field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        };
        slot.zeroize();
        *slot = value.into();
        self.invalid[field.index()] = false;
    }

    /// Mark empty inputs invalid; returns true when the form may be submitted
    ///
    /// Markers are only ever added here, never cleared.
    pub fn validate(&mut self) -> bool {
        let mut has_error = false;

        if self.username.trim().is_empty() {
            self.invalid[LoginField::Username.index()] = true;
            has_error = true;
        }

        if self.password.is_empty() {
            self.invalid[LoginField::Password.index()] = true;
            has_error = true;
        }

        !has_error
    }

    /// Whether an input currently carries the invalid marker
    pub fn is_invalid(&self, field: LoginField) -> bool {
        self.invalid[field.index()]
    }

    /// Username as it would be submitted
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

impl Drop for LoginForm {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .field("invalid", &self.invalid)
            .finish()
    }
}
