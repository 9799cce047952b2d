//! # Configuration Module
//!
//! 서버 설정을 담당하는 모듈입니다.
//! 모든 환경 변수는 프로세스 시작 시 [`AppConfig::from_env`]에서 한 번만 읽고,
//! 이후에는 구조체를 참조로 각 서비스 생성자에 전달합니다.
//! 요청 처리 코드에서는 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, 아웃바운드 HTTP 설정
//! - [`auth_config`] - Google OAuth, 아이덴티티 스토어(Supabase) 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use lincclip_proxy_server::config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! println!("Server will bind to {}", config.server.bind_address());
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8000"
//!
//! # Google OAuth
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export OAUTH_REDIRECT_URI="https://yourdomain.com/auth/google/callback"
//!
//! # 아이덴티티 스토어
//! export SUPABASE_URL="https://your-project.supabase.co"
//! export SUPABASE_ANON_KEY="your-anon-key"
//!
//! # 아웃바운드 호출 타임아웃 (초)
//! export OUTBOUND_TIMEOUT_SECS="10"
//! ```
//!
//! `ENVIRONMENT=production`에서는 `GOOGLE_CLIENT_SECRET`, `SUPABASE_ANON_KEY`가 반드시 설정되어야 합니다.

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use crate::errors::errors::{AppError, AppResult};

/// 애플리케이션 전체 설정
///
/// 시작 시 한 번 생성되어 서비스들에게 참조로 전달됩니다.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub http_client: HttpClientConfig,
    pub google: GoogleOAuthConfig,
    pub identity_store: IdentityStoreConfig,
}

impl AppConfig {
    /// 환경 변수에서 전체 설정을 로드합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 운영 환경에서 시크릿이 개발용 기본값으로 남아 있음
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&process_env)
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> AppResult<Self> {
        let config = Self {
            environment: Environment::from_lookup(lookup),
            server: ServerConfig::from_lookup(lookup),
            http_client: HttpClientConfig::from_lookup(lookup),
            google: GoogleOAuthConfig::from_lookup(lookup),
            identity_store: IdentityStoreConfig::from_lookup(lookup),
        };
        config.ensure_production_secrets()?;

        log::info!(
            "설정 로드 완료 - 환경: {:?}, 바인드: {}",
            config.environment,
            config.server.bind_address()
        );
        Ok(config)
    }

    /// 운영 환경에서는 개발용 시크릿으로 기동하지 않습니다.
    fn ensure_production_secrets(&self) -> AppResult<()> {
        if !self.environment.is_production() {
            return Ok(());
        }

        let mut missing = Vec::new();
        if self.google.uses_placeholder_secret() {
            missing.push("GOOGLE_CLIENT_SECRET");
        }
        if self.identity_store.uses_placeholder_key() {
            missing.push("SUPABASE_ANON_KEY");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::ConfigError(format!(
                "운영 환경에서 필수 환경 변수가 없습니다: {}",
                missing.join(", ")
            )))
        }
    }
}
