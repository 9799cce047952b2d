//! 인증 서비스 모듈
//!
//! Google OAuth 2.0 Authorization Code 플로우 중계와
//! 업스트림 아이덴티티 스토어 세션 연결을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{GoogleAuthService, IdentityBridge};
//!
//! let bridge = Arc::new(IdentityBridge::new(&config.identity_store, client.clone()));
//! let google_auth = GoogleAuthService::new(&config.google, client, bridge.clone());
//!
//! let consent_url = google_auth.build_authorization_url();
//! let credential = google_auth.exchange_code_for_session(&code).await?;
//! let status = bridge.validate_session(&credential.access_token).await;
//! ```

pub mod google_auth_service;
pub mod identity_bridge;

pub use google_auth_service::*;
pub use identity_bridge::*;
