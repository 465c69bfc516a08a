//! Checkout, login and registration form validation.

use luxe_api::Address;

/// A form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Street is empty.
    EmptyStreet,
    /// City is empty.
    EmptyCity,
    /// State is empty.
    EmptyState,
    /// Zip code is empty.
    EmptyZipCode,
    /// Country is empty.
    EmptyCountry,
    /// Name is empty.
    EmptyName,
    /// Email address is empty.
    EmptyEmail,
    /// Email address format is invalid.
    InvalidEmail,
    /// Password is empty.
    EmptyPassword,
}

impl ValidationError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::EmptyStreet => "Street address is required",
            Self::EmptyCity => "City is required",
            Self::EmptyState => "State is required",
            Self::EmptyZipCode => "Zip code is required",
            Self::EmptyCountry => "Country is required",
            Self::EmptyName => "Name is required",
            Self::EmptyEmail => "Email address is required",
            Self::InvalidEmail => "Invalid email address format",
            Self::EmptyPassword => "Password is required",
        }
    }

    /// Get the field name this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::EmptyStreet => "street",
            Self::EmptyCity => "city",
            Self::EmptyState => "state",
            Self::EmptyZipCode => "zip_code",
            Self::EmptyCountry => "country",
            Self::EmptyName => "name",
            Self::EmptyEmail | Self::InvalidEmail => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ValidationError {}

/// Result of validating a form.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

fn collect(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a shipping address. Every field is required.
///
/// # Errors
///
/// Returns every missing field.
pub fn validate_address(address: &Address) -> ValidationResult {
    let required = [
        (&address.street, ValidationError::EmptyStreet),
        (&address.city, ValidationError::EmptyCity),
        (&address.state, ValidationError::EmptyState),
        (&address.zip_code, ValidationError::EmptyZipCode),
        (&address.country, ValidationError::EmptyCountry),
    ];

    collect(
        required
            .into_iter()
            .filter(|(value, _)| value.trim().is_empty())
            .map(|(_, error)| error)
            .collect(),
    )
}

/// Validate login input before it is sent.
///
/// # Errors
///
/// Returns every invalid field.
pub fn validate_login(email: &str, password: &str) -> ValidationResult {
    collect(credential_errors(email, password))
}

/// Validate a new account before it is sent.
///
/// # Errors
///
/// Returns every invalid field.
pub fn validate_registration(name: &str, email: &str, password: &str) -> ValidationResult {
    let mut errors = Vec::new();
    if name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    errors.extend(credential_errors(email, password));
    collect(errors)
}

fn credential_errors(email: &str, password: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if email.trim().is_empty() {
        errors.push(ValidationError::EmptyEmail);
    } else if !is_valid_email(email) {
        errors.push(ValidationError::InvalidEmail);
    }
    if password.is_empty() {
        errors.push(ValidationError::EmptyPassword);
    }
    errors
}

/// Basic email validation.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs a dot and no empty labels
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address {
            street: "1 Rue de la Paix".into(),
            city: "Paris".into(),
            state: "IDF".into(),
            zip_code: "75002".into(),
            country: "France".into(),
        }
    }

    #[test]
    fn test_complete_address() {
        assert!(validate_address(&address()).is_ok());
    }

    #[test]
    fn test_blank_fields_reported_in_order() {
        let mut addr = address();
        addr.city = "   ".into();
        addr.country = String::new();

        let errors = validate_address(&addr).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyCity, ValidationError::EmptyCountry]
        );
        assert_eq!(errors[0].field(), "city");
        assert_eq!(errors[1].to_string(), "Country is required");
    }

    #[test]
    fn test_empty_address() {
        let errors = validate_address(&Address::default()).unwrap_err();
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ana.b@mail.example.com"));
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("ana"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana@"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana@example..com"));
    }

    #[test]
    fn test_validate_login() {
        assert!(validate_login("ana@example.com", "pw").is_ok());
        assert_eq!(
            validate_login("nope", "").unwrap_err(),
            vec![ValidationError::InvalidEmail, ValidationError::EmptyPassword]
        );
        assert_eq!(
            validate_login(" ", "pw").unwrap_err(),
            vec![ValidationError::EmptyEmail]
        );
    }

    #[test]
    fn test_validate_registration() {
        assert!(validate_registration("Ana", "ana@example.com", "pw").is_ok());

        let errors = validate_registration("  ", "ana@example", "pw").unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::EmptyName, ValidationError::InvalidEmail]
        );
        assert_eq!(errors[0].field(), "name");
        assert_eq!(errors[0].message(), "Name is required");
    }
}
