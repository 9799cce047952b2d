//! 아이덴티티 스토어 응답 본문

use serde::Deserialize;

/// 가입/로그인 성공 시 세션 응답
///
/// 이메일 인증이 켜진 프로젝트에서는 가입 응답에 토큰 없이 사용자 객체만 오므로
/// 모든 필드를 선택값으로 받습니다.
#[derive(Debug, Default, Deserialize)]
pub struct IdentitySessionResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub user: Option<IdentityUser>,
}

/// 세션 응답의 사용자 객체. 이메일은 항상 Google 프로필 값을 쓰므로 ID만 읽습니다.
#[derive(Debug, Default, Deserialize)]
pub struct IdentityUser {
    #[serde(default)]
    pub id: Option<String>,
}

/// 아이덴티티 스토어 에러 응답
///
/// GoTrue 버전에 따라 `error_description`, `msg`, `message` 중 하나에 설명이 담깁니다.
#[derive(Debug, Default, Deserialize)]
pub struct IdentityErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl IdentityErrorBody {
    pub fn parse(raw_body: &str) -> Self {
        serde_json::from_str(raw_body).unwrap_or_default()
    }

    /// 사람이 읽을 수 있는 설명
    pub fn describe(&self, raw_body: &str) -> String {
        [
            &self.error_description,
            &self.msg,
            &self.message,
            &self.error,
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| raw_body.to_string())
    }

    /// 이미 가입된 사용자라는 응답인지 여부
    pub fn is_user_already_exists(&self) -> bool {
        if self.error_code.as_deref() == Some("user_already_exists") {
            return true;
        }
        [&self.msg, &self.message, &self.error_description]
            .into_iter()
            .flatten()
            .any(|s| s.to_lowercase().contains("already registered"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_response_with_user() {
        let json = r#"{
            "access_token": "eyJhbGciOi",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "v1.refresh",
            "user": {"id": "8f2c-uuid", "email": "user@gmail.com", "aud": "authenticated"}
        }"#;
        let session: IdentitySessionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(session.access_token.as_deref(), Some("eyJhbGciOi"));
        assert_eq!(session.user.unwrap().id.as_deref(), Some("8f2c-uuid"));
    }

    #[test]
    fn test_error_description_order() {
        let body = r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#;
        let error = IdentityErrorBody::parse(body);

        assert_eq!(error.describe(body), "User already registered");
        assert!(error.is_user_already_exists());
    }

    #[test]
    fn test_legacy_already_registered_message() {
        let body = r#"{"code":400,"msg":"User already registered"}"#;
        assert!(IdentityErrorBody::parse(body).is_user_already_exists());

        let body = r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        let error = IdentityErrorBody::parse(body);
        assert!(!error.is_user_already_exists());
        assert_eq!(error.describe(body), "Invalid login credentials");
    }

    #[test]
    fn test_unparseable_body_is_described_raw() {
        let error = IdentityErrorBody::parse("<html>bad gateway</html>");
        assert_eq!(error.describe("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }
}
