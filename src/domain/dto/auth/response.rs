//! 인증 응답 관련 DTO

use serde::Serialize;

use crate::domain::models::session::{SessionCredential, SessionUser};

/// `/auth/status` 응답
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthStatusResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthStatusResponse {
    pub fn valid(user: serde_json::Value) -> Self {
        Self {
            valid: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            user: None,
            error: Some(error.into()),
        }
    }
}

/// 콜백 성공 페이지가 확장 프로그램에 `postMessage`로 전달하는 메시지
///
/// 확장 프로그램이 이 형태를 그대로 파싱하므로 필드 변경은 호환성을 깨뜨립니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthSuccessMessage {
    #[serde(rename = "type")]
    pub message_type: &'static str,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: SessionUser,
}

impl AuthSuccessMessage {
    pub const MESSAGE_TYPE: &'static str = "AUTH_SUCCESS";
}

impl From<SessionCredential> for AuthSuccessMessage {
    fn from(credential: SessionCredential) -> Self {
        Self {
            message_type: Self::MESSAGE_TYPE,
            access_token: credential.access_token,
            refresh_token: credential.refresh_token,
            expires_in: credential.expires_in,
            user: credential.user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_status_omits_user() {
        let json = serde_json::to_value(AuthStatusResponse::invalid("Invalid JWT")).unwrap();

        assert_eq!(json, serde_json::json!({"valid": false, "error": "Invalid JWT"}));
    }

    #[test]
    fn test_success_message_shape() {
        let message = AuthSuccessMessage {
            message_type: AuthSuccessMessage::MESSAGE_TYPE,
            access_token: "at".to_string(),
            refresh_token: "rt".to_string(),
            expires_in: 3599,
            user: SessionUser {
                id: "u1".to_string(),
                email: "user@gmail.com".to_string(),
                name: "User".to_string(),
                picture: None,
            },
        };
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["type"], "AUTH_SUCCESS");
        assert_eq!(json["expires_in"], 3599);
        assert_eq!(json["user"]["email"], "user@gmail.com");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }
}
