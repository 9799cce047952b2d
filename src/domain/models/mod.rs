//! 도메인 모델 모듈

pub mod oauth;
pub mod session;

pub use oauth::*;
pub use session::*;
