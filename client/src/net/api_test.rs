use super::*;

#[test]
fn endpoint_joins_prefix_and_path() {
    assert_eq!(endpoint("auth/login"), "/api/auth/login");
    assert_eq!(endpoint("/auth/register"), "/api/auth/register");
}

#[test]
fn unavailable_error_is_transport_failure() {
    let err = unavailable();
    assert_eq!(err.status, 0);
    assert_eq!(err.body, "not available on server");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn login_without_browser_reports_unavailable() {
    let request = UserLoginRequest { email: "a@b.com".to_owned(), password: "Test1234!".to_owned() };
    let result = futures::executor::block_on(login(&request));
    assert_eq!(result, Err(unavailable()));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn register_without_browser_reports_unavailable() {
    let request = UserRegisterRequest {
        name: "nameTest".to_owned(),
        email: "user@test.com".to_owned(),
        password: "Test1234!".to_owned(),
        phone_number: "01012345678".to_owned(),
    };
    let result = futures::executor::block_on(register(&request));
    assert_eq!(result, Err(unavailable()));
}
