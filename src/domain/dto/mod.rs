//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── auth/       # /auth/* 쿼리 파라미터와 응답
//! ├── proxy/      # /proxy/* 쿼리 파라미터
//! └── identity/   # 아이덴티티 스토어(Supabase GoTrue) 요청/응답
//! ```

pub mod auth;
pub mod proxy;
pub mod identity;

pub use auth::*;
pub use proxy::*;
pub use identity::*;
