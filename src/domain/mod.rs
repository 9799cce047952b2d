//! # Domain Module
//!
//! OAuth 중계와 이미지 프록시에서 다루는 도메인 타입을 정의합니다.
//!
//! ## 모듈 구성
//!
//! - [`models`] - Google 토큰/프로필, 확장 프로그램에 전달되는 세션 자격 증명
//! - [`dto`] - HTTP 경계(쿼리 파라미터, JSON 응답)와 아이덴티티 스토어 와이어 포맷

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
