//! # Identity Bridge
//!
//! Google 프로필을 업스트림 아이덴티티 스토어(Supabase GoTrue) 세션으로 연결합니다.
//!
//! ## 가입/로그인 플로우
//!
//! ```text
//! Google 프로필
//!      │
//!      ▼
//! POST /auth/v1/signup (email, 생성 비밀번호)
//!      │
//!      ├─ 2xx ─────────────► 업스트림 세션 반환
//!      │
//!      ├─ 이미 가입된 사용자 ─► POST /auth/v1/token?grant_type=password
//!      │                          │
//!      │                          ├─ 2xx ──► 업스트림 세션 반환
//!      │                          └─ 실패 ──► 임시 토큰 temp_<id>_<millis>
//!      │
//!      └─ 그 외 실패 ─────────► IdentityBridgeError
//! ```
//!
//! ## 알려진 한계
//!
//! 생성 비밀번호는 `google_oauth_<id>_<millis>` 형식으로 호출마다 새로 만들어지므로,
//! 이미 가입된 사용자의 로그인 재시도는 거의 항상 실패합니다.
//! 그 결과 재방문 사용자는 아이덴티티 스토어에서 검증되지 않는 임시 토큰을 받게 됩니다.
//! 재방문 사용자에게 Google ID에서 재현 가능한 자격 증명을 줄지는 아직 정해지지 않았습니다.
//! 정해지면 `generate_password`를 그 방식으로 교체해야 합니다.

use reqwest::StatusCode;

use crate::config::IdentityStoreConfig;
use crate::domain::dto::auth::AuthStatusResponse;
use crate::domain::dto::identity::{
    IdentityErrorBody, IdentitySessionResponse, PasswordGrantRequest, SignupRequest,
};
use crate::domain::models::oauth::GoogleProfile;
use crate::domain::models::session::SessionCredential;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::time_utils::now_millis;

/// 가입 요청 결과
#[derive(Debug)]
enum SignupOutcome {
    Created(IdentitySessionResponse),
    AlreadyExists(String),
}

/// 아이덴티티 스토어 연동 서비스
pub struct IdentityBridge {
    client: reqwest::Client,
    config: IdentityStoreConfig,
}

impl IdentityBridge {
    pub fn new(config: &IdentityStoreConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            config: config.clone(),
        }
    }

    /// Google 프로필로 업스트림 세션을 만들거나 가져옵니다.
    ///
    /// 가입 충돌 후 로그인이 실패하면 에러 대신 임시 자격 증명을 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(SessionCredential)` - 업스트림 세션 또는 임시 자격 증명
    /// * `Err(AppError::IdentityBridgeError)` - 아이덴티티 스토어에 도달할 수 없거나 가입이 거부됨
    pub async fn create_or_login_session(&self, profile: &GoogleProfile) -> AppResult<SessionCredential> {
        let password = Self::generate_password(profile);

        match self.signup(profile, &password).await? {
            SignupOutcome::Created(session) => {
                log::info!("Supabase 신규 사용자 등록: {}", profile.email);
                Self::into_credential(profile, session).ok_or_else(|| {
                    AppError::IdentityBridgeError(
                        "가입 응답에 세션 토큰이 없습니다 (이메일 인증 대기 중일 수 있습니다)".to_string(),
                    )
                })
            }
            SignupOutcome::AlreadyExists(detail) => {
                log::info!("Supabase 기존 사용자 ({}): {}, 로그인 시도", detail, profile.email);

                let retry_password = Self::generate_password(profile);
                match self.login_with_password(&profile.email, &retry_password).await {
                    Ok(session) => match Self::into_credential(profile, session) {
                        Some(credential) => Ok(credential),
                        None => Ok(self.fallback_credential(profile, "로그인 응답에 토큰 없음")),
                    },
                    Err(reason) => Ok(self.fallback_credential(profile, &reason)),
                }
            }
        }
    }

    /// 아이덴티티 스토어에 토큰을 조회하여 세션 유효성을 확인합니다.
    ///
    /// 전송 오류나 인증 오류를 포함한 모든 실패는 `valid: false`로 보고하며 에러를 던지지 않습니다.
    pub async fn validate_session(&self, token: &str) -> AuthStatusResponse {
        let token = token.trim();
        if token.is_empty() {
            return AuthStatusResponse::invalid("token query parameter is required");
        }

        let response = match self
            .client
            .get(self.config.user_url())
            .bearer_auth(token)
            .header("apikey", &self.config.anon_key)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Supabase 사용자 조회 요청 실패: {}", e);
                return AuthStatusResponse::invalid(e.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = IdentityErrorBody::parse(&body).describe(&body);
            log::debug!("세션 검증 실패 ({}): {}", status, detail);
            return AuthStatusResponse::invalid(detail);
        }

        match response.json::<serde_json::Value>().await {
            Ok(user) => AuthStatusResponse::valid(user),
            Err(e) => AuthStatusResponse::invalid(format!("사용자 응답 파싱 실패: {}", e)),
        }
    }

    /// 가입용 비밀번호 생성: `google_oauth_<google_id>_<millis>`
    fn generate_password(profile: &GoogleProfile) -> String {
        format!("google_oauth_{}_{}", profile.id, now_millis())
    }

    async fn signup(&self, profile: &GoogleProfile, password: &str) -> AppResult<SignupOutcome> {
        let response = self
            .client
            .post(self.config.signup_url())
            .header("apikey", &self.config.anon_key)
            .json(&SignupRequest::for_profile(profile, password))
            .send()
            .await
            .map_err(|e| AppError::IdentityBridgeError(format!("가입 요청 실패: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let session = response
                .json::<IdentitySessionResponse>()
                .await
                .map_err(|e| AppError::IdentityBridgeError(format!("가입 응답 파싱 실패: {}", e)))?;
            return Ok(SignupOutcome::Created(session));
        }

        let body = response.text().await.unwrap_or_default();
        let error = IdentityErrorBody::parse(&body);
        let detail = error.describe(&body);

        if status == StatusCode::UNPROCESSABLE_ENTITY || error.is_user_already_exists() {
            return Ok(SignupOutcome::AlreadyExists(detail));
        }

        log::error!("Supabase 가입 실패 ({}): {}", status, detail);
        Err(AppError::IdentityBridgeError(detail))
    }

    async fn login_with_password(&self, email: &str, password: &str) -> Result<IdentitySessionResponse, String> {
        let response = self
            .client
            .post(self.config.password_grant_url())
            .header("apikey", &self.config.anon_key)
            .json(&PasswordGrantRequest { email, password })
            .send()
            .await
            .map_err(|e| format!("로그인 요청 실패: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityErrorBody::parse(&body).describe(&body));
        }

        response
            .json::<IdentitySessionResponse>()
            .await
            .map_err(|e| format!("로그인 응답 파싱 실패: {}", e))
    }

    fn into_credential(profile: &GoogleProfile, session: IdentitySessionResponse) -> Option<SessionCredential> {
        let access_token = session.access_token.filter(|t| !t.is_empty())?;
        let upstream_id = session.user.and_then(|u| u.id);

        Some(SessionCredential::upstream(
            profile,
            access_token,
            session.refresh_token.unwrap_or_default(),
            session.expires_in.unwrap_or_default(),
            upstream_id,
        ))
    }

    fn fallback_credential(&self, profile: &GoogleProfile, reason: &str) -> SessionCredential {
        log::warn!(
            "Supabase 로그인 실패 ({}): {} 에게 검증 불가능한 임시 토큰 발급",
            reason,
            profile.email
        );
        SessionCredential::fallback(profile, now_millis())
    }
}
