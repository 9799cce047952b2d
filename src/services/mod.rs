//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 시작 시 [`crate::config::AppConfig`]로부터 한 번 생성되어
//! [`crate::core::AppState`]를 통해 핸들러에 공유됩니다.
//!
//! # Features
//!
//! - Google OAuth 2.0 중계와 아이덴티티 스토어 세션 연결
//! - 세션 토큰 유효성 확인
//! - 교차 출처 이미지 프록시

pub mod auth;
pub mod proxy;
