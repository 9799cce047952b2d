//! # Authentication Configuration Module
//!
//! Google OAuth 2.0 클라이언트와 업스트림 아이덴티티 스토어(Supabase GoTrue) 연동 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### Google OAuth 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export OAUTH_REDIRECT_URI="http://localhost:8000/auth/google/callback"
//! ```
//!
//! ### 아이덴티티 스토어 설정
//! ```bash
//! export SUPABASE_URL="https://your-project.supabase.co"
//! export SUPABASE_ANON_KEY="your-anon-key"
//! ```
//!
//! 값이 없으면 개발용 기본값을 사용하고 경고 로그를 남깁니다.

use crate::config::data_config::EnvLookup;

/// Google OAuth 2.0 클라이언트 설정
///
/// Google Cloud Console 에서 생성한 OAuth 2.0 클라이언트 정보와 엔드포인트 URI를 담습니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 절대 클라이언트(확장 프로그램) 쪽에 노출되어서는 안 됩니다
/// - 이 값을 로그에 출력하지 마세요
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// 인증 완료 후 Google이 사용자를 돌려보낼 콜백 URI
    ///
    /// Google Cloud Console의 승인된 리디렉션 URI 목록에 등록되어 있어야 합니다.
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub userinfo_uri: String,
}

impl GoogleOAuthConfig {
    pub const DEFAULT_AUTH_URI: &'static str = "https://accounts.google.com/o/oauth2/v2/auth";
    pub const DEFAULT_TOKEN_URI: &'static str = "https://oauth2.googleapis.com/token";
    pub const DEFAULT_USERINFO_URI: &'static str = "https://www.googleapis.com/oauth2/v2/userinfo";
    /// `GOOGLE_CLIENT_SECRET`이 없을 때 쓰는 개발용 값. 운영 환경에서는 거부됩니다.
    pub const PLACEHOLDER_CLIENT_SECRET: &'static str = "dummy-secret";

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            client_id: lookup("GOOGLE_CLIENT_ID").unwrap_or_else(|| {
                log::warn!("GOOGLE_CLIENT_ID not set, using development client id");
                "707010851630-te3g8f2t9uacdn3rb0krro77c2rt5u06.apps.googleusercontent.com".to_string()
            }),
            client_secret: lookup("GOOGLE_CLIENT_SECRET").unwrap_or_else(|| {
                log::warn!("GOOGLE_CLIENT_SECRET not set, using default (not secure for production!)");
                Self::PLACEHOLDER_CLIENT_SECRET.to_string()
            }),
            redirect_uri: lookup("OAUTH_REDIRECT_URI")
                .unwrap_or_else(|| "http://localhost:8000/auth/google/callback".to_string()),
            auth_uri: lookup("GOOGLE_AUTH_URI")
                .unwrap_or_else(|| Self::DEFAULT_AUTH_URI.to_string()),
            token_uri: lookup("GOOGLE_TOKEN_URI")
                .unwrap_or_else(|| Self::DEFAULT_TOKEN_URI.to_string()),
            userinfo_uri: lookup("GOOGLE_USERINFO_URI")
                .unwrap_or_else(|| Self::DEFAULT_USERINFO_URI.to_string()),
        }
    }

    pub fn uses_placeholder_secret(&self) -> bool {
        self.client_secret == Self::PLACEHOLDER_CLIENT_SECRET
    }
}

impl std::fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .finish()
    }
}

/// 업스트림 아이덴티티 스토어 설정
///
/// Supabase 프로젝트 URL과 익명(anon) API 키입니다.
/// 모든 요청에 `apikey` 헤더로 익명 키가 실립니다.
#[derive(Clone)]
pub struct IdentityStoreConfig {
    pub base_url: String,
    pub anon_key: String,
}

impl IdentityStoreConfig {
    /// `SUPABASE_ANON_KEY`가 없을 때 쓰는 개발용 값. 운영 환경에서는 거부됩니다.
    pub const PLACEHOLDER_ANON_KEY: &'static str = "dummy-key";

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let base_url = lookup("SUPABASE_URL")
            .unwrap_or_else(|| "https://rfzfhlotsnxeyxnwhtpj.supabase.co".to_string());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: lookup("SUPABASE_ANON_KEY").unwrap_or_else(|| {
                log::warn!("SUPABASE_ANON_KEY not set, using default (not secure for production!)");
                Self::PLACEHOLDER_ANON_KEY.to_string()
            }),
        }
    }

    pub fn uses_placeholder_key(&self) -> bool {
        self.anon_key == Self::PLACEHOLDER_ANON_KEY
    }

    pub fn signup_url(&self) -> String {
        format!("{}/auth/v1/signup", self.base_url)
    }

    pub fn password_grant_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.base_url)
    }

    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }
}

impl std::fmt::Debug for IdentityStoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityStoreConfig")
            .field("base_url", &self.base_url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_google_config_defaults() {
        let empty = lookup_from(&[]);
        let config = GoogleOAuthConfig::from_lookup(&empty);

        assert_eq!(config.auth_uri, GoogleOAuthConfig::DEFAULT_AUTH_URI);
        assert_eq!(config.token_uri, GoogleOAuthConfig::DEFAULT_TOKEN_URI);
        assert_eq!(config.userinfo_uri, GoogleOAuthConfig::DEFAULT_USERINFO_URI);
        assert_eq!(config.redirect_uri, "http://localhost:8000/auth/google/callback");
    }

    #[test]
    fn test_google_config_overrides() {
        let lookup = lookup_from(&[
            ("GOOGLE_CLIENT_ID", "client-123"),
            ("GOOGLE_TOKEN_URI", "http://127.0.0.1:9999/token"),
        ]);
        let config = GoogleOAuthConfig::from_lookup(&lookup);

        assert_eq!(config.client_id, "client-123");
        assert_eq!(config.token_uri, "http://127.0.0.1:9999/token");
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let lookup = lookup_from(&[
            ("GOOGLE_CLIENT_SECRET", "super-secret"),
            ("SUPABASE_ANON_KEY", "anon-secret"),
        ]);

        let google = format!("{:?}", GoogleOAuthConfig::from_lookup(&lookup));
        let store = format!("{:?}", IdentityStoreConfig::from_lookup(&lookup));

        assert!(!google.contains("super-secret"));
        assert!(!store.contains("anon-secret"));
    }

    #[test]
    fn test_identity_store_urls() {
        let lookup = lookup_from(&[("SUPABASE_URL", "https://example.supabase.co/")]);
        let config = IdentityStoreConfig::from_lookup(&lookup);

        assert_eq!(config.signup_url(), "https://example.supabase.co/auth/v1/signup");
        assert_eq!(
            config.password_grant_url(),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(config.user_url(), "https://example.supabase.co/auth/v1/user");
    }
}
