//! Google 사용자 프로필 모델

use serde::{Deserialize, Serialize};

/// Google UserInfo API(`/oauth2/v2/userinfo`) 응답
///
/// 로그인 한 번에 한 번 조회되며 생성 이후에는 읽기 전용입니다.
/// `email profile` 스코프만 요청하므로 `name`, `picture`가 비어 있을 수 있습니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GoogleProfile {
    /// Google 사용자 고유 ID
    pub id: String,

    pub email: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub picture: Option<String>,

    #[serde(default)]
    pub verified_email: Option<bool>,

    #[serde(default)]
    pub given_name: Option<String>,

    #[serde(default)]
    pub family_name: Option<String>,
}
