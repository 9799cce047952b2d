//! # Google OAuth 2.0 인증 서비스
//!
//! 클라이언트 시크릿을 보관할 수 없는 브라우저 확장 프로그램을 대신하여
//! Google OAuth 2.0 Authorization Code 플로우를 중계합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌──────────────┐              ┌─────────────────┐             ┌───────────────┐    ┌──────────────┐
//! │ 확장 프로그램 탭 │              │    우리 서버      │             │  Google OAuth │    │   Supabase   │
//! └──────────────┘              └─────────────────┘             └───────────────┘    └──────────────┘
//!        │ 1. GET /auth/google             │                              │                   │
//!        ├────────────────────────────────►│                              │                   │
//!        │ 2. 302 Redirect (consent URL)   │                              │                   │
//!        │◄────────────────────────────────┤                              │                   │
//!        │ 3. 사용자 동의                    │                              │                   │
//!        ├───────────────────────────────────────────────────────────────►│                   │
//!        │ 4. GET /auth/google/callback?code=...                          │                   │
//!        ├────────────────────────────────►│ 5. POST token (code)         │                   │
//!        │                                 ├─────────────────────────────►│                   │
//!        │                                 │ 6. GET userinfo (Bearer)     │                   │
//!        │                                 ├─────────────────────────────►│                   │
//!        │                                 │ 7. signup / password login   │                   │
//!        │                                 ├─────────────────────────────────────────────────►│
//!        │ 8. HTML + postMessage(AUTH_SUCCESS)                            │                   │
//!        │◄────────────────────────────────┤                              │                   │
//! ```
//!
//! ## 사용하는 Google API 엔드포인트
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v2/userinfo` | GET |
//!
//! 실패 시 자동 재시도는 하지 않습니다. 브라우저가 동의 URL을 다시 열어 플로우를 재시작합니다.

use std::sync::Arc;

use crate::config::GoogleOAuthConfig;
use crate::domain::models::oauth::{GoogleErrorBody, GoogleProfile, GoogleTokenSet};
use crate::domain::models::session::SessionCredential;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::identity_bridge::IdentityBridge;

/// 요청할 OAuth 스코프
pub const GOOGLE_OAUTH_SCOPE: &str = "email profile";

/// Google OAuth 2.0 오케스트레이터
///
/// Authorization Code → Google 토큰 → Google 프로필 → 아이덴티티 스토어 세션 순서로
/// 세 외부 시스템을 순차 호출합니다. 요청 간 상태를 공유하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let url = google_auth.build_authorization_url();
/// // ... 콜백에서
/// let credential = google_auth.exchange_code_for_session(&code).await?;
/// ```
pub struct GoogleAuthService {
    client: reqwest::Client,
    config: GoogleOAuthConfig,
    identity_bridge: Arc<IdentityBridge>,
}

impl GoogleAuthService {
    pub fn new(
        config: &GoogleOAuthConfig,
        client: reqwest::Client,
        identity_bridge: Arc<IdentityBridge>,
    ) -> Self {
        Self {
            client,
            config: config.clone(),
            identity_bridge,
        }
    }

    /// Google OAuth 동의 화면 URL 생성
    ///
    /// 부수 효과가 없고 같은 설정에 대해 항상 같은 URL을 반환합니다.
    ///
    /// # 생성되는 URL 구조
    ///
    /// ```text
    /// https://accounts.google.com/o/oauth2/v2/auth?
    ///   client_id=YOUR_CLIENT_ID&
    ///   redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Fauth%2Fgoogle%2Fcallback&
    ///   response_type=code&
    ///   scope=email%20profile&
    ///   access_type=offline&
    ///   prompt=consent
    /// ```
    pub fn build_authorization_url(&self) -> String {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", GOOGLE_OAUTH_SCOPE),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.config.auth_uri, query_string)
    }

    /// Authorization Code를 세션 자격 증명으로 교환
    ///
    /// # 처리 단계
    ///
    /// 1. **토큰 교환**: Authorization Code → Google 토큰
    /// 2. **사용자 정보 조회**: Google UserInfo API로 프로필 획득
    /// 3. **세션 연결**: Identity Bridge로 아이덴티티 스토어 세션 생성/조회
    ///
    /// 반환되는 자격 증명의 `expires_in`은 Google 토큰의 값이며,
    /// `user.email`은 항상 Google 프로필의 이메일입니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(SessionCredential)` - 확장 프로그램에 전달할 자격 증명
    /// * `Err(AppError::ValidationError)` - 빈 Authorization Code
    /// * `Err(AppError::UpstreamAuthError)` - 1, 2단계 실패 (프로바이더 에러 설명 포함)
    /// * `Err(AppError::IdentityBridgeError)` - 3단계 실패
    pub async fn exchange_code_for_session(&self, code: &str) -> AppResult<SessionCredential> {
        let code = code.trim();
        if code.is_empty() {
            return Err(AppError::ValidationError("Authorization code가 필요합니다".to_string()));
        }

        let tokens = self.exchange_code_for_token(code).await?;
        let profile = self.get_user_info(&tokens.access_token).await?;

        let mut credential = self.identity_bridge.create_or_login_session(&profile).await?;
        credential.expires_in = tokens.expires_in;
        credential.user.email = profile.email.clone();

        log::info!(
            "Google OAuth 로그인 성공: {} (세션 출처: {})",
            profile.email,
            credential.origin.as_str()
        );
        Ok(credential)
    }

    /// Authorization Code를 Google 토큰으로 교환
    ///
    /// ```text
    /// POST https://oauth2.googleapis.com/token
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// code=...&client_id=...&client_secret=...&redirect_uri=...&grant_type=authorization_code
    /// ```
    ///
    /// Google이 반환할 수 있는 주요 에러:
    ///
    /// | 에러 코드 | 설명 |
    /// |-----------|------|
    /// | `invalid_grant` | 코드 만료/이미 사용됨 |
    /// | `invalid_client` | 클라이언트 설정 오류 |
    /// | `redirect_uri_mismatch` | 등록되지 않은 리디렉션 URI |
    async fn exchange_code_for_token(&self, code: &str) -> AppResult<GoogleTokenSet> {
        let params = [
            ("code", code),
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .client
            .post(&self.config.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = GoogleErrorBody::describe(&error_text);
            log::warn!("Google 토큰 교환 실패 ({}): {}", status, detail);
            return Err(AppError::UpstreamAuthError(detail));
        }

        response
            .json::<GoogleTokenSet>()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    /// 액세스 토큰으로 Google 사용자 정보 조회
    ///
    /// ```text
    /// GET https://www.googleapis.com/oauth2/v2/userinfo
    /// Authorization: Bearer ACCESS_TOKEN
    /// ```
    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleProfile> {
        let response = self
            .client
            .get(&self.config.userinfo_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            let detail = GoogleErrorBody::describe(&error_text);
            log::warn!("Google 사용자 정보 조회 실패 ({}): {}", status, detail);
            return Err(AppError::UpstreamAuthError(detail));
        }

        response
            .json::<GoogleProfile>()
            .await
            .map_err(|e| AppError::UpstreamAuthError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}
