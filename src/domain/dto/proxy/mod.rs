//! 이미지 프록시 DTO

pub mod request;

pub use request::*;
