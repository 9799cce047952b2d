//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 각 변형은 HTTP 상태 코드로 결정적으로 매핑되며,
//! 업스트림 상태 코드를 그대로 전달해야 하는 경우 변형 안에 상태 코드를 담습니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 쿼리 파라미터 누락 |
//! | `UpstreamAuthError` | 400 Bad Request | Google 토큰/프로필 조회 실패 |
//! | `IdentityBridgeError` | 502 Bad Gateway | 아이덴티티 스토어 연동 실패 |
//! | `UpstreamFetchError` | 원본 상태 코드 | 이미지 원본 서버가 non-2xx 응답 |
//! | `RelayError` | 500 Internal Server Error | 이미지 원본 서버 네트워크 실패 |
//! | `ConfigError` | 500 Internal Server Error | 잘못된 설정 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! OAuth 콜백에서는 소비자가 브라우저 탭이므로 이 JSON 응답 대신
//! HTML 에러 페이지를 렌더링합니다 (`handlers::auth` 참고).
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! if url.trim().is_empty() {
//!     return Err(AppError::ValidationError("URL query parameter is required.".to_string()));
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Google 토큰 교환 또는 프로필 조회 실패 (400 Bad Request)
    ///
    /// 메시지에는 프로바이더가 돌려준 에러 설명이 포함됩니다.
    #[error("Google OAuth 처리 실패: {0}")]
    UpstreamAuthError(String),

    /// 아이덴티티 스토어에 도달할 수 없거나 등록이 거부됨 (502 Bad Gateway)
    #[error("Supabase 연동 실패: {0}")]
    IdentityBridgeError(String),

    /// 이미지 원본 서버가 non-2xx 상태로 응답함 (원본 상태 코드 그대로)
    #[error("Failed to fetch image: {detail}")]
    UpstreamFetchError { status: u16, detail: String },

    /// 이미지 원본 서버 네트워크 실패 (500 Internal Server Error)
    #[error("Failed to fetch image. {0}")]
    RelayError(String),

    /// 설정 오류 (500 Internal Server Error)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러 종류에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamAuthError(_) => StatusCode::BAD_REQUEST,
            AppError::IdentityBridgeError(_) => StatusCode::BAD_GATEWAY,
            AppError::UpstreamFetchError { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 프록시 계층 에러인지 여부
    ///
    /// 프록시 에러는 JSON 대신 평문 메시지로 응답합니다.
    pub fn is_relay_error(&self) -> bool {
        matches!(
            self,
            AppError::UpstreamFetchError { .. } | AppError::RelayError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 프록시 에러는 상태 코드와 평문 메시지, 그 외는 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut builder = actix_web::HttpResponse::build(AppError::status_code(self));

        if self.is_relay_error() {
            return builder
                .content_type("text/plain; charset=utf-8")
                .body(self.to_string());
        }

        builder.json(serde_json::json!({
            "error": self.to_string()
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
