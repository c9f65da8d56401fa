//! Client-side form validation for the login and signup screens.
//!
//! Rules are checked per signup step so the wizard can block on the step the
//! user is looking at. Every failing field gets exactly one message.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());
static MOBILE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static PINCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

pub const MIN_PASSWORD_LEN: usize = 8;

pub const DEFAULT_COUNTRY: &str = "India";

pub const STATES: &[&str] = &[
    "Delhi",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "Uttar Pradesh",
];

pub const DISTRICTS: &[&str] = &["Central Delhi", "South Delhi", "North Delhi"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Gender,
    Address,
    State,
    District,
    Pincode,
    Password,
    ConfirmPassword,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.label() == label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-to-message map produced by a validation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, &'static str>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn add(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Everything the three signup steps collect.
#[derive(Debug, Clone, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub address: String,
    pub country: String,
    pub state: Option<String>,
    pub district: Option<String>,
    pub pincode: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            gender: None,
            address: String::new(),
            country: DEFAULT_COUNTRY.to_string(),
            state: None,
            district: None,
            pincode: String::new(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl SignupForm {
    /// Personal details: name, email, mobile, gender.
    pub fn validate_personal(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.name.trim().is_empty() {
            errors.add(Field::Name, "Please enter name");
        }
        if self.email.trim().is_empty() {
            errors.add(Field::Email, "Please enter email");
        } else if !is_valid_email(&self.email) {
            errors.add(Field::Email, "Please enter a valid email");
        }
        if self.mobile.trim().is_empty() {
            errors.add(Field::Mobile, "Please enter mobile number");
        } else if !MOBILE.is_match(&self.mobile) {
            errors.add(Field::Mobile, "Please enter a valid 10-digit mobile number");
        }
        if self.gender.is_none() {
            errors.add(Field::Gender, "Please select gender");
        }
        errors
    }

    /// Address: address line, state, district, optional pincode.
    pub fn validate_address(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.address.trim().is_empty() {
            errors.add(Field::Address, "Please enter address");
        }
        if self.state.as_deref().map_or(true, str::is_empty) {
            errors.add(Field::State, "Please select state");
        }
        if self.district.as_deref().map_or(true, str::is_empty) {
            errors.add(Field::District, "Please select district");
        }
        if !self.pincode.is_empty() && !PINCODE.is_match(&self.pincode) {
            errors.add(Field::Pincode, "Please enter a valid 6-digit pincode");
        }
        errors
    }

    /// Credentials: password and its confirmation.
    pub fn validate_credentials(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.password.is_empty() {
            errors.add(Field::Password, "Please enter password");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(Field::Password, "Password must be at least 8 characters");
        }
        if self.confirm_password.is_empty() {
            errors.add(Field::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, "Passwords do not match");
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        if self.email.trim().is_empty() {
            errors.add(Field::Email, "Please enter email");
        } else if !is_valid_email(self.email.trim()) {
            errors.add(Field::Email, "Please enter a valid email");
        }
        if self.password.is_empty() {
            errors.add(Field::Password, "Please enter password");
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> SignupForm {
        SignupForm {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            mobile: "9876543210".into(),
            gender: Some(Gender::Female),
            address: "12 MG Road".into(),
            state: Some("Delhi".into()),
            district: Some("South Delhi".into()),
            pincode: "110017".into(),
            password: "password123".into(),
            confirm_password: "password123".into(),
            ..SignupForm::default()
        }
    }

    #[test]
    fn test_complete_form_passes_every_step() {
        let form = complete_form();
        assert!(form.validate_personal().is_empty());
        assert!(form.validate_address().is_empty());
        assert!(form.validate_credentials().is_empty());
        assert_eq!(form.country, "India");
    }

    #[test]
    fn test_empty_personal_step() {
        let errors = SignupForm::default().validate_personal();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(Field::Name), Some("Please enter name"));
        assert_eq!(errors.get(Field::Email), Some("Please enter email"));
        assert_eq!(errors.get(Field::Mobile), Some("Please enter mobile number"));
        assert_eq!(errors.get(Field::Gender), Some("Please select gender"));
    }

    #[test]
    fn test_whitespace_name_is_missing() {
        let mut form = complete_form();
        form.name = "   ".into();
        assert_eq!(
            form.validate_personal().get(Field::Name),
            Some("Please enter name")
        );
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));

        let mut form = complete_form();
        form.email = "asha@example".into();
        assert_eq!(
            form.validate_personal().get(Field::Email),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        let mut form = complete_form();
        for bad in ["98765", "98765432101", "98765abcde", "+919876543"] {
            form.mobile = bad.into();
            assert_eq!(
                form.validate_personal().get(Field::Mobile),
                Some("Please enter a valid 10-digit mobile number"),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_address_step() {
        let errors = SignupForm::default().validate_address();
        assert_eq!(errors.get(Field::Address), Some("Please enter address"));
        assert_eq!(errors.get(Field::State), Some("Please select state"));
        assert_eq!(errors.get(Field::District), Some("Please select district"));
        // Empty pincode is allowed
        assert_eq!(errors.get(Field::Pincode), None);
    }

    #[test]
    fn test_pincode_when_present() {
        let mut form = complete_form();
        form.pincode = "1100".into();
        assert_eq!(
            form.validate_address().get(Field::Pincode),
            Some("Please enter a valid 6-digit pincode")
        );
        form.pincode = String::new();
        assert!(form.validate_address().is_empty());
    }

    #[test]
    fn test_credentials_step() {
        let mut form = complete_form();
        form.password = "short".into();
        form.confirm_password = "short".into();
        assert_eq!(
            form.validate_credentials().get(Field::Password),
            Some("Password must be at least 8 characters")
        );

        form.password = "password123".into();
        form.confirm_password = "password124".into();
        assert_eq!(
            form.validate_credentials().get(Field::ConfirmPassword),
            Some("Passwords do not match")
        );

        form.password = String::new();
        form.confirm_password = String::new();
        let errors = form.validate_credentials();
        assert_eq!(errors.get(Field::Password), Some("Please enter password"));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some("Please confirm your password")
        );
    }

    #[test]
    fn test_login_form() {
        assert_eq!(LoginForm::default().validate().len(), 2);

        let form = LoginForm {
            email: " a@b.com ".into(),
            password: "secret".into(),
        };
        assert!(form.validate().is_empty());

        let form = LoginForm {
            email: "nope".into(),
            password: "secret".into(),
        };
        assert_eq!(
            form.validate().get(Field::Email),
            Some("Please enter a valid email")
        );
    }

    #[test]
    fn test_gender_labels() {
        assert_eq!(Gender::from_label("Other"), Some(Gender::Other));
        assert_eq!(Gender::from_label("other"), None);
        assert_eq!(Gender::Male.to_string(), "Male");
    }
}
