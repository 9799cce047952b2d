//! 확장 프로그램에 최종 전달되는 세션 자격 증명

use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::GoogleProfile;

/// 세션 자격 증명의 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOrigin {
    /// 아이덴티티 스토어가 발급한 실제 세션
    Upstream,
    /// 가입 충돌 후 로그인까지 실패하여 로컬에서 만든 임시 토큰
    ///
    /// 아이덴티티 스토어에서 검증되지 않습니다.
    Fallback,
}

impl SessionOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionOrigin::Upstream => "upstream",
            SessionOrigin::Fallback => "fallback",
        }
    }
}

/// 확장 프로그램에 노출되는 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// 아이덴티티 스토어 사용자 ID, 없으면 Google ID
    pub id: String,
    /// 항상 Google 프로필의 이메일
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
}

impl SessionUser {
    /// Google 프로필로부터 사용자 정보를 만듭니다.
    ///
    /// `upstream_id`가 주어지면 ID만 교체하고 이메일은 항상 프로필 값을 사용합니다.
    pub fn from_profile(profile: &GoogleProfile, upstream_id: Option<String>) -> Self {
        Self {
            id: upstream_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| profile.id.clone()),
            email: profile.email.clone(),
            name: profile.name.clone(),
            picture: profile.picture.clone(),
        }
    }
}

/// 세션 자격 증명
///
/// 토큰 형식은 출처에 따라 달라지므로 호출자는 형식에 의존하면 안 됩니다.
/// `user.email`은 이 자격 증명을 만든 Google 프로필의 이메일과 항상 같습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCredential {
    pub access_token: String,
    pub refresh_token: String,
    /// 만료 시간 (초). 콜백 응답에서는 Google 토큰의 값으로 채워집니다.
    pub expires_in: i64,
    pub user: SessionUser,
    #[serde(skip_serializing, default = "default_origin")]
    pub origin: SessionOrigin,
}

fn default_origin() -> SessionOrigin {
    SessionOrigin::Upstream
}

impl SessionCredential {
    /// 아이덴티티 스토어가 발급한 세션으로 자격 증명을 만듭니다.
    pub fn upstream(
        profile: &GoogleProfile,
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        upstream_user_id: Option<String>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            user: SessionUser::from_profile(profile, upstream_user_id),
            origin: SessionOrigin::Upstream,
        }
    }

    /// 로컬에서 임시 자격 증명을 만듭니다.
    ///
    /// 토큰 형식: `temp_<google_id>_<millis>`, `refresh_<google_id>_<millis>`
    pub fn fallback(profile: &GoogleProfile, timestamp_millis: i64) -> Self {
        Self {
            access_token: format!("temp_{}_{}", profile.id, timestamp_millis),
            refresh_token: format!("refresh_{}_{}", profile.id, timestamp_millis),
            expires_in: 0,
            user: SessionUser::from_profile(profile, None),
            origin: SessionOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == SessionOrigin::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> GoogleProfile {
        GoogleProfile {
            id: "1234567890".to_string(),
            email: "user@gmail.com".to_string(),
            name: "John Doe".to_string(),
            picture: Some("https://example.com/p.png".to_string()),
            verified_email: Some(true),
            given_name: None,
            family_name: None,
        }
    }

    #[test]
    fn test_upstream_user_id_replaces_google_id() {
        let credential = SessionCredential::upstream(
            &profile(),
            "at".to_string(),
            "rt".to_string(),
            3600,
            Some("0b1c-uuid".to_string()),
        );

        assert_eq!(credential.user.id, "0b1c-uuid");
        assert_eq!(credential.user.email, "user@gmail.com");
        assert!(!credential.is_fallback());
    }

    #[test]
    fn test_empty_upstream_id_falls_back_to_google_id() {
        let user = SessionUser::from_profile(&profile(), Some(String::new()));
        assert_eq!(user.id, "1234567890");
    }

    #[test]
    fn test_fallback_token_format() {
        let credential = SessionCredential::fallback(&profile(), 1_700_000_000_123);

        assert_eq!(credential.access_token, "temp_1234567890_1700000000123");
        assert_eq!(credential.refresh_token, "refresh_1234567890_1700000000123");
        assert_eq!(credential.user.email, "user@gmail.com");
        assert!(credential.is_fallback());
    }

    #[test]
    fn test_origin_is_not_serialized() {
        let credential = SessionCredential::fallback(&profile(), 1);
        let json = serde_json::to_value(&credential).unwrap();

        assert!(json.get("origin").is_none());
        assert_eq!(json["user"]["email"], "user@gmail.com");
    }
}
