//! # Registration validator
//!
//! Checks a [`RegistrationForm`] before anything is sent to `/register`. Rules run
//! in a fixed order and the first failure wins; the order is part of the
//! behaviour (users see the cheapest mistakes first) and must not change.
//!
//! | # | Rule | Error |
//! |---|------|-------|
//! | 1 | name, email, password, confirmation all non-empty | [`ValidationError::MissingFields`] |
//! | 2 | email has `local@domain.tld` shape | [`ValidationError::InvalidEmail`] |
//! | 3 | password at least 8 characters | [`ValidationError::PasswordTooShort`] |
//! | 4 | name has no digit | [`ValidationError::NameHasDigit`] |
//! | 5 | password has no whitespace | [`ValidationError::PasswordHasWhitespace`] |
//! | 6 | password does not contain the name (case-insensitive) | [`ValidationError::PasswordContainsName`] |
//! | 7 | password has a digit, a lowercase and an uppercase letter | [`ValidationError::PasswordComposition`] |
//! | 8 | password equals confirmation | [`ValidationError::PasswordMismatch`] |
//! | 9 | age is all digits and within 15..=99 | [`ValidationError::AgeOutOfRange`] |

use std::sync::LazyLock;

use api::{Gender, RegistrationPayload};
use regex::Regex;

/// Bio every new account starts with.
pub const DEFAULT_BIO: &str =
    "I'm a software developer passionate about creating user-friendly applications.";

/// Shown next to the password field.
pub const PASSWORD_HINT: &str = "The password must be at least 8 characters long, contain no spaces, and include at least one A-Z, one a-z, and one 0-9.";

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MIN_AGE: u8 = 15;
pub const MAX_AGE: u8 = 99;

// ASCII word characters only.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$")
        .expect("email pattern compiles")
});

/// Raw registration form fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    /// `None` while the selector still shows its placeholder.
    pub gender: Option<Gender>,
    pub location: String,
}

/// The first rule a form broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long.")]
    PasswordTooShort,
    #[error("Name should not contain numbers")]
    NameHasDigit,
    #[error("Password cannot contain spaces.")]
    PasswordHasWhitespace,
    #[error("Password cannot contain the user's name.")]
    PasswordContainsName,
    #[error("Password must contain at least one uppercase letter, one lowercase letter, and one number.")]
    PasswordComposition,
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Invalid age. Age must be between 15 and 99.")]
    AgeOutOfRange,
}

/// Result of validating a [`RegistrationForm`].
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Valid(RegistrationPayload),
    Invalid(ValidationError),
}

impl RegistrationForm {
    /// Run every rule in order, stopping at the first failure.
    pub fn validate(&self) -> Validation {
        match self.check() {
            Ok(age) => Validation::Valid(self.payload(age)),
            Err(e) => Validation::Invalid(e),
        }
    }

    fn check(&self) -> Result<u8, ValidationError> {
        let Self {
            name,
            email,
            password,
            confirm_password,
            ..
        } = self;

        if name.is_empty() || email.is_empty() || password.is_empty() || confirm_password.is_empty()
        {
            return Err(ValidationError::MissingFields);
        }
        if !EMAIL_RE.is_match(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if name.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::NameHasDigit);
        }
        if password.chars().any(char::is_whitespace) {
            return Err(ValidationError::PasswordHasWhitespace);
        }
        if password.to_lowercase().contains(&name.to_lowercase()) {
            return Err(ValidationError::PasswordContainsName);
        }
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        if !(has_digit && has_lower && has_upper) {
            return Err(ValidationError::PasswordComposition);
        }
        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        parse_age(&self.age).ok_or(ValidationError::AgeOutOfRange)
    }

    fn payload(&self, age: u8) -> RegistrationPayload {
        RegistrationPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            age,
            gender: self.gender,
            location: self.location.clone(),
            bio: DEFAULT_BIO.to_string(),
            twitter: String::new(),
            linkedin: String::new(),
            github: String::new(),
        }
    }
}

/// Digits only, value within `MIN_AGE..=MAX_AGE`.
fn parse_age(age: &str) -> Option<u8> {
    if age.is_empty() || !age.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Leading zeros are fine ("015" is 15); anything too long is out of range.
    let value: u64 = age.parse().ok()?;
    u8::try_from(value)
        .ok()
        .filter(|v| (MIN_AGE..=MAX_AGE).contains(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "Secret123".to_string(),
            confirm_password: "Secret123".to_string(),
            age: "30".to_string(),
            gender: Some(Gender::Female),
            location: "Paris".to_string(),
        }
    }

    fn error_of(form: &RegistrationForm) -> Option<ValidationError> {
        match form.validate() {
            Validation::Valid(_) => None,
            Validation::Invalid(e) => Some(e),
        }
    }

    #[test]
    fn test_valid_form_builds_payload_with_defaults() {
        let Validation::Valid(payload) = valid_form().validate() else {
            panic!("form should be valid");
        };
        assert_eq!(payload.name, "Alice");
        assert_eq!(payload.age, 30);
        assert_eq!(payload.gender, Some(Gender::Female));
        assert_eq!(payload.bio, DEFAULT_BIO);
        assert_eq!(payload.twitter, "");
        assert_eq!(payload.linkedin, "");
        assert_eq!(payload.github, "");
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let form = RegistrationForm {
            name: String::new(),
            email: "not-an-email".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::MissingFields));

        // Short password and digit in name: length is checked first.
        let form = RegistrationForm {
            name: "Al1ce".to_string(),
            password: "Ab1".to_string(),
            confirm_password: "Ab1".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::PasswordTooShort));

        // Mismatch and bad age: mismatch is checked first.
        let form = RegistrationForm {
            confirm_password: "Other123".to_string(),
            age: "7".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::PasswordMismatch));
    }

    #[test]
    fn test_each_required_field() {
        let clears: [fn(&mut RegistrationForm); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.password.clear(),
            |f| f.confirm_password.clear(),
        ];
        for clear in clears {
            let mut form = valid_form();
            clear(&mut form);
            assert_eq!(error_of(&form), Some(ValidationError::MissingFields));
        }
    }

    #[test]
    fn test_email_shapes() {
        for good in ["a@b.co", "first.last@mail.example.org", "x-y_z@sub-domain.io"] {
            let form = RegistrationForm {
                email: good.to_string(),
                ..valid_form()
            };
            assert_eq!(error_of(&form), None, "{good} should be accepted");
        }
        for bad in [
            "alice",
            "alice@",
            "@example.com",
            "alice@example",
            "alice@example.c",
            "alice@example.info",
            "al ice@example.com",
        ] {
            let form = RegistrationForm {
                email: bad.to_string(),
                ..valid_form()
            };
            assert_eq!(
                error_of(&form),
                Some(ValidationError::InvalidEmail),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_password_examples() {
        let with_password = |p: &str| RegistrationForm {
            password: p.to_string(),
            confirm_password: p.to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&with_password("bcdefg1")), Some(ValidationError::PasswordTooShort));
        // Eight characters, but no uppercase letter.
        assert_eq!(error_of(&with_password("abcdefg1")), Some(ValidationError::PasswordComposition));
        assert_eq!(error_of(&with_password("abcdefgh")), Some(ValidationError::PasswordComposition));
        assert_eq!(error_of(&with_password("Abcdefg1")), None);
        assert_eq!(error_of(&with_password("Abc defg1")), Some(ValidationError::PasswordHasWhitespace));
    }

    #[test]
    fn test_password_containing_name() {
        let form = RegistrationForm {
            password: "Alice123A".to_string(),
            confirm_password: "Alice123A".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::PasswordContainsName));

        let form = RegistrationForm {
            password: "xxALICExx1".to_string(),
            confirm_password: "xxALICExx1".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::PasswordContainsName));
    }

    #[test]
    fn test_name_with_digit() {
        let form = RegistrationForm {
            name: "R2D2".to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&form), Some(ValidationError::NameHasDigit));
    }

    #[test]
    fn test_age_boundaries() {
        let with_age = |a: &str| RegistrationForm {
            age: a.to_string(),
            ..valid_form()
        };
        assert_eq!(error_of(&with_age("14")), Some(ValidationError::AgeOutOfRange));
        assert_eq!(error_of(&with_age("100")), Some(ValidationError::AgeOutOfRange));
        assert_eq!(error_of(&with_age("15")), None);
        assert_eq!(error_of(&with_age("99")), None);
        assert_eq!(error_of(&with_age("015")), None);
        for bad in ["", "-20", "20.5", " 20", "twenty", "99999999999999999999999"] {
            assert_eq!(
                error_of(&with_age(bad)),
                Some(ValidationError::AgeOutOfRange),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_gender_is_optional() {
        let form = RegistrationForm {
            gender: None,
            ..valid_form()
        };
        let Validation::Valid(payload) = form.validate() else {
            panic!("placeholder gender should not block registration");
        };
        assert_eq!(payload.gender, None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::MissingFields.to_string(), "All fields are required.");
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email format.");
        assert_eq!(
            ValidationError::AgeOutOfRange.to_string(),
            "Invalid age. Age must be between 15 and 99."
        );
    }
}
