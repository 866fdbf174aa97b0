use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  user@test.com  ", "Test1234"),
        Ok(UserLoginRequest { email: "user@test.com".to_owned(), password: "Test1234".to_owned() })
    );
}

#[test]
fn validate_login_input_rejects_empty_email() {
    let alert = validate_login_input("", "Test1234").unwrap_err();
    assert_eq!(alert.title, "로그인 오류");
    assert_eq!(alert.message, EMPTY_CREDENTIALS_MESSAGE);
}

#[test]
fn validate_login_input_rejects_empty_password() {
    let alert = validate_login_input("user@test.com", "").unwrap_err();
    assert_eq!(alert.title, "로그인 오류");
    assert_eq!(alert.message, EMPTY_CREDENTIALS_MESSAGE);
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    let alert = validate_login_input("Test1234", "Test1234").unwrap_err();
    assert_eq!(alert.title, LOGIN_ERROR_TITLE);
    assert_eq!(alert.message, FieldError::InvalidEmail.message());
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    let request = validate_login_input("user@test.com", " Test1234! ").unwrap();
    assert_eq!(request.password, " Test1234! ");
}

#[test]
fn rejected_credentials_alert_only_for_401() {
    let alert = rejected_credentials_alert(&ApiError::new(401, "INVALID_CREDENTIALS")).unwrap();
    assert_eq!(alert.message, INVALID_CREDENTIALS_MESSAGE);
    assert_eq!(alert.dismiss_route(), None);
    assert!(rejected_credentials_alert(&ApiError::new(500, "")).is_none());
    assert!(rejected_credentials_alert(&ApiError::new(0, "offline")).is_none());
}

#[test]
fn validate_login_input_rejects_whitespace_only_password() {
    let alert = validate_login_input("user@test.com", "   ").unwrap_err();
    assert_eq!(alert.message, EMPTY_CREDENTIALS_MESSAGE);
}
