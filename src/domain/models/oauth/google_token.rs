//! Google OAuth 토큰 응답 모델

use serde::Deserialize;

/// Google OAuth 2.0 토큰 교환 응답
///
/// Authorization Code를 토큰 엔드포인트에서 교환했을 때 Google이 반환하는 데이터 중
/// UserInfo 조회와 만료 시간 전달에 쓰는 값만 받습니다.
/// Google 리프레시 토큰은 확장 프로그램에 전달하지 않으므로 읽지 않습니다.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleTokenSet {
    /// Google OAuth 액세스 토큰
    pub access_token: String,
    /// 토큰 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: i64,
}

/// Google OAuth 에러 응답
///
/// 토큰 엔드포인트는 `{"error": "invalid_grant", "error_description": "Bad Request"}`,
/// UserInfo 엔드포인트는 `{"error": {"code": 401, "message": "..."}}` 형태로 응답합니다.
#[derive(Debug, Default, Deserialize)]
pub struct GoogleErrorBody {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl GoogleErrorBody {
    /// 응답 본문에서 사람이 읽을 수 있는 에러 설명을 뽑아냅니다.
    ///
    /// `error_description` → `error.message` → `error` 문자열 → 원본 본문 순으로 사용합니다.
    pub fn describe(raw_body: &str) -> String {
        let parsed: GoogleErrorBody = serde_json::from_str(raw_body).unwrap_or_default();

        if let Some(description) = parsed.error_description.filter(|d| !d.is_empty()) {
            return description;
        }

        match parsed.error {
            Some(serde_json::Value::String(code)) if !code.is_empty() => code,
            Some(serde_json::Value::Object(obj)) => obj
                .get("message")
                .and_then(|m| m.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| raw_body.to_string()),
            _ => raw_body.to_string(),
        }
    }
}
