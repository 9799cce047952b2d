//! 아이덴티티 스토어(Supabase GoTrue) 와이어 포맷

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
