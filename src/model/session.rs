//! Session state and the pure parts of the login check.

/// Appended to the email's local part to form the display name.
pub const HONORIFIC: &str = "선생님";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    /// Collected but never checked.
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn from_email(email: &str) -> Self {
        Self {
            name: display_name(email),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user().map(|u| u.name.as_str())
    }
}

/// The organisation whose mail domain gates the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Institution {
    pub name: String,
    pub domain: String,
}

impl Institution {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        let domain: String = domain.into();
        Self {
            name: name.into(),
            domain: domain.trim_start_matches('@').to_string(),
        }
    }

    pub fn suffix(&self) -> String {
        format!("@{}", self.domain)
    }

    /// Pure suffix check; this is not authentication.
    pub fn validate_email(&self, email: &str) -> Result<(), LoginError> {
        if email.ends_with(&self.suffix()) {
            Ok(())
        } else {
            Err(LoginError::DomainMismatch {
                institution: self.name.clone(),
                domain: self.domain.clone(),
            })
        }
    }
}

impl Default for Institution {
    fn default() -> Self {
        Self::new("DGSW", "dgsw.hs.kr")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("{institution} 이메일(@{domain})만 사용 가능합니다.")]
    DomainMismatch { institution: String, domain: String },
}

/// `teacher@dgsw.hs.kr` → `teacher 선생님`.
pub fn display_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    format!("{local} {HONORIFIC}")
}
