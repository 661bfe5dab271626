//! Login / Register form state

use super::types::ValidationError;
use crate::logic::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Email,
    Password,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Username => "Username",
            AuthField::Email => "Email",
            AuthField::Password => "Password",
        }
    }
}

const LOGIN_FIELDS: [AuthField; 2] = [AuthField::Email, AuthField::Password];
const REGISTER_FIELDS: [AuthField; 3] = [AuthField::Username, AuthField::Email, AuthField::Password];

/// Fields shown on an auth screen, top to bottom
pub fn fields_for(route: Route) -> &'static [AuthField] {
    match route {
        Route::Register => &REGISTER_FIELDS,
        _ => &LOGIN_FIELDS,
    }
}

#[derive(Clone, Debug, Default)]
pub struct AuthForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Index into `fields_for(route)`
    pub focus: usize,
    /// Inline error from validation or the backend
    pub error: Option<String>,
    pub submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field(&self, route: Route) -> AuthField {
        let fields = fields_for(route);
        fields[self.focus.min(fields.len() - 1)]
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Username => &mut self.username,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    /// Every field shown on the screen must be filled in
    pub fn validate(&self, route: Route) -> Result<(), ValidationError> {
        for field in fields_for(route) {
            if self.value(*field).trim().is_empty() {
                return Err(ValidationError::MissingField(field.label()));
            }
        }
        Ok(())
    }
}
