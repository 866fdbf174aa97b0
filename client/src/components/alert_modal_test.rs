use super::*;
use crate::util::response_error::classify;

#[test]
fn info_alert_has_confirm_button_and_no_route() {
    let alert = Alert::info("회원가입 알림", "비밀번호가 일치합니다!");
    assert_eq!(alert.button_label(), CONFIRM_BUTTON);
    assert_eq!(alert.dismiss_route(), None);
}

#[test]
fn classified_alert_carries_button_and_route() {
    let alert = Alert::from_classification("로그인 오류", classify(403, "접근 권한이 없습니다."));
    assert_eq!(alert.title, "로그인 오류");
    assert_eq!(alert.message, "접근 권한이 없습니다.");
    assert_eq!(alert.button_label(), "설문 리스트로 돌아가기");
    assert_eq!(alert.dismiss_route(), Some("/survey"));
}

#[test]
fn server_error_alert_confirms_then_goes_home() {
    let alert = Alert::from_classification("오류", classify(500, ""));
    assert_eq!(alert.button_label(), CONFIRM_BUTTON);
    assert_eq!(alert.dismiss_route(), Some("/"));
}

#[test]
fn bad_request_alert_stays_on_page() {
    let alert = Alert::from_classification("회원가입 오류", classify(400, "이미 존재하는 이메일입니다."));
    assert_eq!(alert.dismiss_route(), None);
}
