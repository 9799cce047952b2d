//! API 라우트 설정 모듈
//!
//! 엔드포인트들을 기능별 스코프로 그룹화하여 등록합니다.
//! 모든 라우트는 공개 라우트이며 인증 미들웨어를 거치지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_proxy_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /auth/google` - Google 동의 화면으로 리다이렉트
/// - `GET /auth/google/callback` - 코드 교환 후 HTML 결과 페이지
/// - `GET /auth/status` - 세션 토큰 유효성 확인
///
/// # Examples
///
/// ```bash
/// # Google OAuth 시작 (브라우저 탭에서 열기)
/// curl -i http://localhost:8000/auth/google
///
/// # 세션 확인
/// curl "http://localhost:8000/auth/status?token=eyJhbGciOi..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_oauth_callback)
            .service(handlers::auth::auth_status),
    );
}

/// 이미지 프록시 라우트를 설정합니다
///
/// ```bash
/// curl -o logo.png "http://localhost:8000/proxy/image?url=https%3A%2F%2Fexample.com%2Flogo.png"
/// ```
fn configure_proxy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/proxy").service(handlers::proxy::proxy_image));
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "lincclip_proxy_server",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::state_for;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_all_routes_are_mounted() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_for("http://localhost")))
                .configure(configure_all_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");

        let req = test::TestRequest::get().uri("/auth/google").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 302);

        let req = test::TestRequest::get().uri("/auth/status").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["valid"], false);

        let req = test::TestRequest::get().uri("/proxy/image").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let req = test::TestRequest::get().uri("/unknown").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }
}
