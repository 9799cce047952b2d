//! 이미지 프록시 서비스 모듈
//!
//! 클라이언트 애플리케이션의 교차 출처(CORS) 제한을 우회하기 위해
//! 원격 이미지를 대신 가져와 원본 Content-Type 그대로 돌려줍니다.

pub mod image_relay_service;

pub use image_relay_service::*;
