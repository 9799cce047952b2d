//! OAuth 콜백 결과 페이지
//!
//! 페이지 본문은 `templates/`의 askama 템플릿입니다. 에러 메시지는 템플릿의 HTML 이스케이프를 거치고,
//! 스크립트에 들어가는 메시지는 [`script_safe_json`]으로 직렬화한 뒤 그대로 삽입합니다.

use askama::Template;

use crate::domain::dto::auth::AuthSuccessMessage;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::script_safe_json;

/// 성공 페이지가 스스로 닫히기까지의 지연 (밀리초)
pub const AUTO_CLOSE_DELAY_MS: u64 = 3000;

#[derive(Template)]
#[template(path = "auth_success.html")]
struct AuthSuccessTemplate {
    /// 이미 스크립트 안전하게 직렬화된 JSON
    payload: String,
    auto_close_delay_ms: u64,
}

#[derive(Template)]
#[template(path = "auth_error.html")]
struct AuthErrorTemplate<'a> {
    error_message: &'a str,
}

/// 로그인 성공 페이지
///
/// 임베드된 스크립트가 `window.postMessage`로 `AUTH_SUCCESS` 메시지를 전달하고
/// [`AUTO_CLOSE_DELAY_MS`] 후 창을 닫습니다.
pub fn render_auth_success_page(message: &AuthSuccessMessage) -> AppResult<String> {
    let payload = script_safe_json(message)
        .map_err(|e| AppError::InternalError(format!("성공 메시지 직렬화 실패: {}", e)))?;

    AuthSuccessTemplate {
        payload,
        auto_close_delay_ms: AUTO_CLOSE_DELAY_MS,
    }
    .render()
    .map_err(|e| AppError::InternalError(format!("성공 페이지 렌더링 실패: {}", e)))
}

/// 로그인 실패 페이지
///
/// 자동으로 닫히지 않고 닫기 버튼을 제공합니다.
pub fn render_auth_error_page(error_message: &str) -> askama::Result<String> {
    AuthErrorTemplate { error_message }.render()
}
