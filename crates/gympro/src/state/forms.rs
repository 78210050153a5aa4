//! Login and sign-up form state

use gympro_core::{Credentials, Registration, Role};

/// Single-line text input with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    /// Cursor position in characters
    pub cursor_pos: usize,
    pub masked: bool,
}

impl TextField {
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Default::default()
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_pos);
        self.value.insert(idx, c);
        self.cursor_pos += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let idx = self.byte_index(self.cursor_pos);
            self.value.remove(idx);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_pos < self.char_len() {
            let idx = self.byte_index(self.cursor_pos);
            self.value.remove(idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.char_len());
    }

    pub fn home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Text as shown on screen
    pub fn display_value(&self) -> String {
        if self.masked {
            crate::util::format::mask(&self.value)
        } else {
            self.value.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextField::default(),
            password: TextField::masked(),
            focus: LoginField::Email,
        }
    }
}

impl LoginForm {
    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value.trim(), self.password.value.as_str())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SignUpField {
    #[default]
    FirstName,
    LastName,
    Email,
    Password,
    Role,
}

impl SignUpField {
    pub const ALL: [SignUpField; 5] = [
        SignUpField::FirstName,
        SignUpField::LastName,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::Role,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SignUpField::FirstName => "First Name",
            SignUpField::LastName => "Last Name",
            SignUpField::Email => "Email",
            SignUpField::Password => "Password",
            SignUpField::Role => "Role",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }
}

/// Role choices in the order the selector shows them
pub const ROLE_CHOICES: [Role; 3] = [Role::Member, Role::Trainer, Role::Admin];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
    pub password: TextField,
    pub role: Role,
    pub focus: SignUpField,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            first_name: TextField::default(),
            last_name: TextField::default(),
            email: TextField::default(),
            password: TextField::masked(),
            role: Role::Member,
            focus: SignUpField::FirstName,
        }
    }
}

impl SignUpForm {
    /// The focused text input, or `None` when the role selector has focus
    pub fn focused_field(&mut self) -> Option<&mut TextField> {
        match self.focus {
            SignUpField::FirstName => Some(&mut self.first_name),
            SignUpField::LastName => Some(&mut self.last_name),
            SignUpField::Email => Some(&mut self.email),
            SignUpField::Password => Some(&mut self.password),
            SignUpField::Role => None,
        }
    }

    pub fn field(&self, field: SignUpField) -> Option<&TextField> {
        match field {
            SignUpField::FirstName => Some(&self.first_name),
            SignUpField::LastName => Some(&self.last_name),
            SignUpField::Email => Some(&self.email),
            SignUpField::Password => Some(&self.password),
            SignUpField::Role => None,
        }
    }

    pub fn next_field(&mut self) {
        let next = (self.focus.index() + 1) % SignUpField::ALL.len();
        self.focus = SignUpField::ALL[next];
    }

    pub fn previous_field(&mut self) {
        let len = SignUpField::ALL.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = SignUpField::ALL[prev];
    }

    /// Step through [`ROLE_CHOICES`], wrapping at either end.
    pub fn cycle_role(&mut self, forward: bool) {
        let len = ROLE_CHOICES.len();
        let current = ROLE_CHOICES
            .iter()
            .position(|r| *r == self.role)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.role = ROLE_CHOICES[next];
    }

    pub fn registration(&self) -> Registration {
        Registration {
            first_name: self.first_name.value.trim().to_string(),
            last_name: self.last_name.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
            role: self.role,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use gympro_core::AuthError;

    use super::*;

    #[test]
    fn test_text_field_editing_with_multibyte_chars() {
        let mut field = TextField::default();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        field.move_left();
        field.move_left();
        field.backspace();
        assert_eq!(field.value, "hélo");
        assert_eq!(field.cursor_pos, 2);

        field.home();
        field.delete();
        assert_eq!(field.value, "élo");
        field.end();
        field.move_right();
        assert_eq!(field.cursor_pos, 3);
    }

    #[test]
    fn test_password_is_masked() {
        let mut form = LoginForm::default();
        form.next_field();
        for c in "secret".chars() {
            form.focused_field().insert_char(c);
        }
        assert_eq!(form.password.display_value(), "••••••");
        assert_eq!(form.credentials().password, "secret");
    }

    #[test]
    fn test_blank_login_form_fails_validation() {
        let form = LoginForm::default();
        assert_eq!(form.credentials().validate(), Err(AuthError::MissingFields));
    }

    #[test]
    fn test_sign_up_role_defaults_to_member_and_cycles() {
        let mut form = SignUpForm::default();
        assert_eq!(form.role, Role::Member);
        form.cycle_role(true);
        assert_eq!(form.role, Role::Trainer);
        form.cycle_role(true);
        form.cycle_role(true);
        assert_eq!(form.role, Role::Member);
        form.cycle_role(false);
        assert_eq!(form.role, Role::Admin);
    }

    #[test]
    fn test_sign_up_focus_wraps() {
        let mut form = SignUpForm::default();
        form.previous_field();
        assert_eq!(form.focus, SignUpField::Role);
        assert!(form.focused_field().is_none());
        form.next_field();
        assert_eq!(form.focus, SignUpField::FirstName);
    }

    #[test]
    fn test_registration_trims_names() {
        let mut form = SignUpForm::default();
        form.first_name.value = "  Ada ".into();
        form.last_name.value = "Lovelace".into();
        form.email.value = "ada@example.com ".into();
        form.password.value = " pw ".into();

        let registration = form.registration();
        assert_eq!(registration.first_name, "Ada");
        assert_eq!(registration.email, "ada@example.com");
        assert_eq!(registration.password, " pw ");
        assert!(registration.validate().is_ok());
    }
}
