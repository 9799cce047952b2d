//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 쿼리 문자열 정리, 스크립트 안전 JSON
//! - [`time_utils`] - 밀리초 타임스탬프

pub mod string_utils;
pub mod time_utils;
