//! 아이덴티티 스토어로 보내는 요청 본문

use serde::Serialize;

use crate::domain::models::oauth::GoogleProfile;

/// `POST /auth/v1/signup` 요청 본문
#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub data: SignupMetadata<'a>,
}

/// 가입 시 사용자 메타데이터로 저장되는 Google 프로필 정보
#[derive(Debug, Serialize)]
pub struct SignupMetadata<'a> {
    pub full_name: &'a str,
    pub avatar_url: Option<&'a str>,
    pub provider: &'static str,
    pub google_id: &'a str,
}

impl<'a> SignupRequest<'a> {
    pub fn for_profile(profile: &'a GoogleProfile, password: &'a str) -> Self {
        Self {
            email: &profile.email,
            password,
            data: SignupMetadata {
                full_name: &profile.name,
                avatar_url: profile.picture.as_deref(),
                provider: "google",
                google_id: &profile.id,
            },
        }
    }
}

/// `POST /auth/v1/token?grant_type=password` 요청 본문
#[derive(Debug, Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}
