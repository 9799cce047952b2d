//! HTML 응답 페이지
//!
//! OAuth 콜백의 소비자는 프로그램이 아닌 브라우저 탭이므로 결과를 HTML로 돌려줍니다.
//! 성공 페이지의 스크립트가 전달하는 메시지 형태는 확장 프로그램과의 와이어 계약입니다.

pub mod callback_page;

pub use callback_page::*;
