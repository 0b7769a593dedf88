//! Login form state. Validation is live on the email field.

use crate::model::{Credentials, Institution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focus: LoginField,
    pub email_error: Option<String>,
    /// A login is in flight; inputs are frozen.
    pub pending: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_focus(&mut self) {
        if self.pending {
            return;
        }
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }

    pub fn input_char(&mut self, c: char, institution: &Institution) {
        if self.pending {
            return;
        }
        match self.focus {
            LoginField::Email => {
                self.email.push(c);
                self.revalidate_email(institution);
            }
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self, institution: &Institution) {
        if self.pending {
            return;
        }
        match self.focus {
            LoginField::Email => {
                self.email.pop();
                self.revalidate_email(institution);
            }
            LoginField::Password => {
                self.password.pop();
            }
        }
    }

    /// Blank email clears the error instead of reporting one.
    fn revalidate_email(&mut self, institution: &Institution) {
        self.email_error = if self.email.trim().is_empty() {
            None
        } else {
            institution.validate_email(&self.email).err().map(|e| e.to_string())
        };
    }

    pub fn can_submit(&self) -> bool {
        self.email_error.is_none()
            && !self.email.is_empty()
            && !self.password.is_empty()
            && !self.pending
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending {
            "로그인 중..."
        } else {
            "로그인"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut LoginForm, s: &str) {
        let institution = Institution::default();
        for c in s.chars() {
            form.input_char(c, &institution);
        }
    }

    #[test]
    fn test_live_email_error() {
        let mut form = LoginForm::new();
        type_str(&mut form, "teacher@gmail.com");
        assert_eq!(
            form.email_error.as_deref(),
            Some("DGSW 이메일(@dgsw.hs.kr)만 사용 가능합니다.")
        );

        let mut form = LoginForm::new();
        type_str(&mut form, "teacher@dgsw.hs.kr");
        assert!(form.email_error.is_none());
    }

    #[test]
    fn test_clearing_email_clears_error() {
        let institution = Institution::default();
        let mut form = LoginForm::new();
        type_str(&mut form, "x");
        assert!(form.email_error.is_some());
        form.backspace(&institution);
        assert!(form.email_error.is_none());
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut form = LoginForm::new();
        type_str(&mut form, "teacher@dgsw.hs.kr");
        assert!(!form.can_submit());
        form.toggle_focus();
        type_str(&mut form, "pw");
        assert!(form.can_submit());
        form.pending = true;
        assert!(!form.can_submit());
        assert_eq!(form.submit_label(), "로그인 중...");
    }
}
