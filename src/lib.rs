//! LincClip 프록시 서버 백엔드
//!
//! 클라이언트 시크릿을 보관할 수 없는 브라우저 확장 프로그램을 대신해
//! Google OAuth 2.0 Authorization Code 플로우를 중계하고,
//! 교차 출처 제한을 피하기 위한 이미지 프록시를 제공합니다.
//!
//! # Features
//!
//! - **OAuth 중계**: 코드 교환, 프로필 조회, 아이덴티티 스토어(Supabase) 세션 연결
//! - **가입 충돌 처리**: 기존 사용자는 로그인으로, 로그인 실패 시 임시 토큰으로 저하
//! - **결과 전달**: `postMessage` 스크립트를 담은 HTML 페이지
//! - **이미지 프록시**: 원본 바이트와 Content-Type을 그대로 전달
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/*, /proxy/*, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, HTML 페이지 렌더링
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← GoogleAuthService, IdentityBridge, ImageRelayService
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Upstreams    │ ← Google OAuth, Supabase GoTrue, 이미지 원본 서버
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use lincclip_proxy_server::config::AppConfig;
//! use lincclip_proxy_server::core::AppState;
//!
//! let config = AppConfig::from_env()?;
//! let state = AppState::from_config(&config)?;
//!
//! let credential = state.google_auth.exchange_code_for_session(&code).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod views;
pub mod routes;
pub mod handlers;
pub mod errors;
