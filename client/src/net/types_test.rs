use super::*;

#[test]
fn register_request_serializes_camel_case() {
    let req = UserRegisterRequest {
        name: "nameTest".to_owned(),
        email: "user@test.com".to_owned(),
        password: "Test1234!".to_owned(),
        phone_number: "01012345678".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "nameTest",
            "email": "user@test.com",
            "password": "Test1234!",
            "phoneNumber": "01012345678",
        })
    );
}

#[test]
fn login_request_serializes_email_and_password() {
    let req = UserLoginRequest { email: "a@b.com".to_owned(), password: "pw".to_owned() };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn user_response_tolerates_missing_optional_fields() {
    let user: UserResponse =
        serde_json::from_str(r#"{"name":"Alice","email":"alice@example.com"}"#).unwrap();
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.user_id, None);
    assert_eq!(user.role, None);
}

#[test]
fn user_response_reads_camel_case_fields() {
    let raw = r#"{
        "userId": 7,
        "name": "Bob",
        "email": "bob@example.com",
        "phoneNumber": "01000000000",
        "role": "USER",
        "createdDate": "2023-05-01T10:00:00",
        "modifiedDate": "2023-05-02T10:00:00"
    }"#;
    let user: UserResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(user.user_id, Some(7));
    assert_eq!(user.phone_number.as_deref(), Some("01000000000"));
    assert_eq!(user.role.as_deref(), Some("USER"));
}

#[test]
fn api_error_display_includes_status_and_body() {
    let err = ApiError::new(403, "권한이 없습니다.");
    assert_eq!(err.to_string(), "request failed with status 403: 권한이 없습니다.");
}

#[test]
fn api_error_transport_uses_status_zero() {
    let err = ApiError::transport("network down");
    assert_eq!(err.status, 0);
    assert_eq!(err.body, "network down");
}
