//! Values held by the sign-in and sign-up forms and their validation rules.
//!
//! Each form converts into its request by destructuring every field, so adding
//! or removing a field on either side stops the build until both agree.

use api::auth::MIN_PASSWORD_LENGTH;
use api::{SignInEmail, SignUpEmail, UserInfo};

use crate::client::{AuthClient, AuthError};
use crate::strings;
use crate::submit::AuthForm;
use crate::validation::{has_min_length, is_valid_email, Field, FieldErrors};

#[derive(Clone, PartialEq)]
pub struct SigninFormValues {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl Default for SigninFormValues {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            remember_me: true,
        }
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.add(Field::Email, strings::EMAIL_INVALID);
    }
}

fn check_password(errors: &mut FieldErrors, field: Field, password: &str) {
    if !has_min_length(password, MIN_PASSWORD_LENGTH) {
        errors.add(field, strings::PASSWORD_TOO_SHORT);
    }
}

impl AuthForm for SigninFormValues {
    type Request = SignInEmail;

    const SUCCESS_TITLE: &'static str = strings::SIGN_IN_SUCCESS;
    const FAILURE_TITLE: &'static str = strings::SIGN_IN_FAILURE;
    const FAILURE_FALLBACK: &'static str = strings::SIGN_IN_FALLBACK;

    fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_email(&mut errors, &self.email);
        check_password(&mut errors, Field::Password, &self.password);
        errors
    }

    fn into_request(self) -> SignInEmail {
        let SigninFormValues {
            email,
            password,
            remember_me,
        } = self;
        SignInEmail {
            email,
            password,
            remember_me,
        }
    }

    async fn send<C: AuthClient>(client: &C, request: SignInEmail) -> Result<UserInfo, AuthError> {
        client.sign_in_email(request).await
    }
}

#[derive(Clone, PartialEq, Default)]
pub struct SignupFormValues {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Part of the request shape; the form has no input for it.
    pub image: Option<String>,
}

impl AuthForm for SignupFormValues {
    type Request = SignUpEmail;

    const SUCCESS_TITLE: &'static str = strings::SIGN_UP_SUCCESS;
    const FAILURE_TITLE: &'static str = strings::SIGN_UP_FAILURE;
    const FAILURE_FALLBACK: &'static str = strings::SIGN_UP_FALLBACK;

    fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.name.trim().is_empty() {
            errors.add(Field::Name, strings::NAME_REQUIRED);
        }
        check_email(&mut errors, &self.email);
        check_password(&mut errors, Field::Password, &self.password);
        // A mismatch outranks the length rule on the confirmation field.
        if self.password != self.confirm_password {
            errors.add(Field::ConfirmPassword, strings::PASSWORD_MISMATCH);
        }
        check_password(&mut errors, Field::ConfirmPassword, &self.confirm_password);
        errors
    }

    fn into_request(self) -> SignUpEmail {
        let SignupFormValues {
            name,
            email,
            password,
            confirm_password: _,
            image,
        } = self;
        SignUpEmail {
            name,
            email,
            password,
            image,
        }
    }

    async fn send<C: AuthClient>(client: &C, request: SignUpEmail) -> Result<UserInfo, AuthError> {
        client.sign_up_email(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remember_me_defaults_on() {
        assert!(SigninFormValues::default().remember_me);
    }

    #[test]
    fn sign_in_request_carries_exactly_the_form_values() {
        let form = SigninFormValues {
            email: "m@example.com".into(),
            password: "password1".into(),
            remember_me: false,
        };
        let Ok(request) = form.validate() else {
            panic!("form should be valid");
        };
        assert_eq!(request.email, "m@example.com");
        assert_eq!(request.password, "password1");
        assert!(!request.remember_me);
    }

    #[test]
    fn empty_sign_up_reports_every_field() {
        let errors = SignupFormValues::default().errors();
        assert_eq!(errors.get(Field::Name), Some(strings::NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(strings::EMAIL_INVALID));
        assert_eq!(errors.get(Field::Password), Some(strings::PASSWORD_TOO_SHORT));
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(strings::PASSWORD_TOO_SHORT)
        );
    }

    #[test]
    fn mismatch_shows_even_when_other_fields_fail() {
        let form = SignupFormValues {
            password: "password1".into(),
            confirm_password: "pass".into(),
            ..SignupFormValues::default()
        };
        let errors = form.errors();
        assert_eq!(
            errors.get(Field::ConfirmPassword),
            Some(strings::PASSWORD_MISMATCH)
        );
        assert!(errors.get(Field::Name).is_some());
    }

    #[test]
    fn confirmation_is_dropped_from_the_request() {
        let form = SignupFormValues {
            name: "سینا تفنگ ساز".into(),
            email: "sina@example.com".into(),
            password: "رمزعبورقوی".into(),
            confirm_password: "رمزعبورقوی".into(),
            image: None,
        };
        let request = form.validate().unwrap_or_else(|errors| {
            panic!("form should be valid: {:?}", errors.fields().collect::<Vec<_>>())
        });
        assert_eq!(request.name, "سینا تفنگ ساز");
        assert_eq!(request.password, "رمزعبورقوی");
        assert_eq!(request.image, None);
    }
}
