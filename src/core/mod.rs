//! # Application State
//!
//! 시작 시 [`AppConfig`]로부터 서비스들을 한 번 생성하고,
//! `web::Data<AppState>`로 모든 워커에 공유합니다.
//!
//! ```text
//! AppConfig ──► reqwest::Client (타임아웃 적용, 커넥션 풀 공유)
//!     │               │
//!     ├──────────────►├──► IdentityBridge ──┐
//!     │               │                     ▼
//!     ├──────────────►├──► GoogleAuthService
//!     │               │
//!     └──────────────►└──► ImageRelayService
//! ```
//!
//! 서비스는 요청 간 가변 상태를 갖지 않으므로 잠금이 필요 없습니다.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::errors::{AppResult, ErrorContext};
use crate::services::auth::{GoogleAuthService, IdentityBridge};
use crate::services::proxy::ImageRelayService;

/// 핸들러에 공유되는 서비스 묶음
#[derive(Clone)]
pub struct AppState {
    pub google_auth: Arc<GoogleAuthService>,
    pub identity_bridge: Arc<IdentityBridge>,
    pub image_relay: Arc<ImageRelayService>,
}

impl AppState {
    /// 설정으로부터 모든 서비스를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - HTTP 클라이언트 생성 실패 (TLS 백엔드 초기화 실패 등)
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let client = config
            .http_client
            .build_client()
            .context("HTTP 클라이언트 생성 실패")?;

        let identity_bridge = Arc::new(IdentityBridge::new(&config.identity_store, client.clone()));
        let google_auth = Arc::new(GoogleAuthService::new(
            &config.google,
            client.clone(),
            identity_bridge.clone(),
        ));
        let image_relay = Arc::new(ImageRelayService::new(client));

        log::info!(
            "서비스 초기화 완료 (아웃바운드 타임아웃 {}초)",
            config.http_client.timeout_secs
        );

        Ok(Self {
            google_auth,
            identity_bridge,
            image_relay,
        })
    }
}
