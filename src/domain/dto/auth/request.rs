//! 인증 요청 관련 DTO
//!
//! `/auth/*` 엔드포인트의 쿼리 파라미터를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 누락된 값도 HTML 에러 페이지로 응답해야 하므로 모든 필드를 `Option`으로 받습니다.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "Authorization code가 필요합니다"))]
    pub code: Option<String>,

    /// 불투명한 state 값. 로그에만 남기고 검증하지 않습니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

/// 세션 상태 확인 쿼리 파라미터
#[derive(Debug, Default, Deserialize)]
pub struct AuthStatusQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
}
