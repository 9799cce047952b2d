//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 `web::Data<AppState>`로 서비스를 받아 호출하고 결과를 HTTP 응답으로 변환할 뿐,
//! 업스트림 호출 로직은 갖지 않습니다.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Browser Extension / Client App
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                           ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services (GoogleAuth, IdentityBridge, Relay) ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Google OAuth / Supabase / 이미지 원본 서버      ← Upstreams
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: OAuth 중계 (`/auth/google`, `/auth/google/callback`, `/auth/status`)
//! - **`proxy`**: 이미지 프록시 (`/proxy/image`)

pub mod auth;
pub mod proxy;
