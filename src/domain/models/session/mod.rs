//! 세션 자격 증명 모델

pub mod session_credential;

pub use session_credential::*;
