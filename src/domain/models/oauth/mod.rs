//! Google OAuth 2.0 모델
//!
//! Google 토큰 엔드포인트와 UserInfo 엔드포인트의 응답을 표현합니다.
//! 두 타입 모두 OAuth 오케스트레이터가 한 번의 콜백 처리 동안만 소유합니다.

pub mod google_token;
pub mod google_profile;

pub use google_token::*;
pub use google_profile::*;
