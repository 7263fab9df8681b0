//! Registration and login form descriptors.
//!
//! SYSTEM CONTEXT
//! ==============
//! The modals submit plain HTML forms to external endpoints, so the only
//! "validation" is the set of attributes the browser enforces before it lets
//! a submission through. Those attributes live here as data. The matchers
//! evaluate the same constraints in Rust so the contract is testable without
//! a browser; nothing calls them on the submit path.

#[cfg(test)]
#[path = "form_rules_test.rs"]
mod tests;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::modal::ModalTarget;

/// Non-alphanumeric characters a password may (and must) draw from.
pub const PASSWORD_SYMBOLS: &str = "@$!%*#?&";

/// HTML `pattern` attribute for the phone field.
pub const PHONE_PATTERN: &str = "[0-9]{10}";

/// HTML `pattern` attribute for the registration password field.
///
/// Digits are spelled `[0-9]` rather than `\d` so the class is ASCII-only in
/// both the browser and the Rust engines.
pub const PASSWORD_PATTERN: &str = r"^(?=.*[A-Za-z])(?=.*[0-9])(?=.*[@$!%*#?&])[A-Za-z0-9@$!%*#?&]{8,}$";

/// WHATWG "valid email address" production used by `type="email"` inputs.
pub const EMAIL_PATTERN: &str = concat!(
    r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@",
    r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?",
    r"(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
);

/// Form submission method for both forms.
pub const FORM_METHOD: &str = "POST";

/// HTML `type` attribute of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Password,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Password => "password",
        }
    }
}

/// Pattern constraint attached to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Phone,
    Password,
}

impl Constraint {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Phone => PHONE_PATTERN,
            Self::Password => PASSWORD_PATTERN,
        }
    }

    /// Message the browser shows when the pattern does not match.
    pub fn title(self) -> &'static str {
        match self {
            Self::Phone => "Please enter exactly 10 digits",
            Self::Password => "Must be at least 8 characters, include a letter, a number, and a symbol (@$!%*#?&)",
        }
    }

    pub fn matches(self, value: &str) -> bool {
        match self {
            Self::Phone => phone_matches(value),
            Self::Password => password_matches(value),
        }
    }
}

/// One `<input>` of a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub input_type: InputType,
    pub placeholder: &'static str,
    pub constraint: Option<Constraint>,
    pub required: bool,
}

impl FieldSpec {
    pub fn pattern(&self) -> Option<&'static str> {
        self.constraint.map(Constraint::pattern)
    }

    pub fn title(&self) -> Option<&'static str> {
        self.constraint.map(Constraint::title)
    }

    /// Whether the browser would let `value` through for this field.
    ///
    /// Follows HTML constraint validation: email values are sanitized by
    /// stripping surrounding ASCII whitespace, an empty value fails only when
    /// the field is required, and type/pattern checks apply to non-empty values.
    pub fn accepts(&self, value: &str) -> bool {
        let value = match self.input_type {
            InputType::Email => value.trim_matches(|c: char| c.is_ascii_whitespace()),
            _ => value,
        };
        if value.is_empty() {
            return !self.required;
        }
        if self.input_type == InputType::Email && !email_matches(value) {
            return false;
        }
        self.constraint.map_or(true, |c| c.matches(value))
    }
}

/// A modal form: where it posts, what it asks for, and how to switch away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSpec {
    pub target: ModalTarget,
    pub heading: &'static str,
    pub action: &'static str,
    pub method: &'static str,
    pub fields: &'static [FieldSpec],
    pub submit_label: &'static str,
    pub switch_prompt: &'static str,
    pub switch_label: &'static str,
}

impl FormSpec {
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The modal the switch link opens.
    pub fn switch_to(&self) -> ModalTarget {
        self.target.other()
    }
}

const REGISTRATION_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "name",
        input_type: InputType::Text,
        placeholder: "Full Name",
        constraint: None,
        required: true,
    },
    FieldSpec {
        name: "email",
        input_type: InputType::Email,
        placeholder: "Email Address",
        constraint: None,
        required: true,
    },
    FieldSpec {
        name: "phone",
        input_type: InputType::Tel,
        placeholder: "Phone Number (10 digits)",
        constraint: Some(Constraint::Phone),
        required: true,
    },
    FieldSpec {
        name: "password",
        input_type: InputType::Password,
        placeholder: "Password (Min 8 chars, 1 Num, 1 Symbol)",
        constraint: Some(Constraint::Password),
        required: true,
    },
];

const LOGIN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        name: "email",
        input_type: InputType::Email,
        placeholder: "Email Address",
        constraint: None,
        required: true,
    },
    FieldSpec {
        name: "password",
        input_type: InputType::Password,
        placeholder: "Password",
        constraint: None,
        required: true,
    },
];

pub const REGISTRATION_FORM: FormSpec = FormSpec {
    target: ModalTarget::Registration,
    heading: "Register",
    action: "/register",
    method: FORM_METHOD,
    fields: REGISTRATION_FIELDS,
    submit_label: "CREATE ACCOUNT",
    switch_prompt: "Already have an account? ",
    switch_label: "Login",
};

pub const LOGIN_FORM: FormSpec = FormSpec {
    target: ModalTarget::Login,
    heading: "Login",
    action: "/login",
    method: FORM_METHOD,
    fields: LOGIN_FIELDS,
    submit_label: "LOG IN",
    switch_prompt: "New user? ",
    switch_label: "Register",
};

pub fn form_for(target: ModalTarget) -> &'static FormSpec {
    match target {
        ModalTarget::Registration => &REGISTRATION_FORM,
        ModalTarget::Login => &LOGIN_FORM,
    }
}

/// Exactly ten ASCII digits.
pub fn phone_matches(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// At least eight characters from letters, digits and `PASSWORD_SYMBOLS`,
/// with at least one of each class.
pub fn password_matches(value: &str) -> bool {
    // Backtracking only fails on pathological input; treat that as a mismatch.
    PASSWORD_RE.is_match(value).unwrap_or(false)
}

/// The browser's `type="email"` check on an already sanitized value.
pub fn email_matches(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Anchor an HTML `pattern` the way the browser applies it: whole value only.
fn html_pattern(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&html_pattern(PHONE_PATTERN)).expect("PHONE_PATTERN is a valid regex"));

// Lookaheads need a backtracking engine.
static PASSWORD_RE: LazyLock<fancy_regex::Regex> = LazyLock::new(|| {
    fancy_regex::Regex::new(&html_pattern(PASSWORD_PATTERN)).expect("PASSWORD_PATTERN is a valid regex")
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));
