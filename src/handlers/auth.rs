//! Authentication HTTP Handlers
//!
//! 브라우저 확장 프로그램을 대신해 Google OAuth 2.0 Authorization Code 플로우를 중계합니다.
//!
//! # Endpoints
//!
//! - `GET /auth/google` - Google 동의 화면으로 302 리다이렉트
//! - `GET /auth/google/callback` - 코드 교환 후 HTML 결과 페이지 (성공/실패 모두 HTML)
//! - `GET /auth/status` - 세션 토큰 유효성 JSON
//!
//! 콜백의 소비자는 브라우저 탭이므로 실패도 JSON이 아닌 400 HTML 에러 페이지로 응답합니다.
use actix_web::http::header;
use actix_web::{get, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::auth::{AuthStatusQuery, AuthSuccessMessage, OAuthCallbackQuery};
use crate::errors::errors::AppError;
use crate::views::{render_auth_error_page, render_auth_success_page};

/// Google OAuth 로그인 시작 핸들러
///
/// # Endpoint
/// `GET /auth/google`
#[get("/google")]
pub async fn google_login(state: web::Data<AppState>) -> HttpResponse {
    let consent_url = state.google_auth.build_authorization_url();

    HttpResponse::Found()
        .insert_header((header::LOCATION, consent_url))
        .finish()
}

/// Google OAuth 콜백 처리 핸들러
///
/// 코드 교환, 프로필 조회, 아이덴티티 스토어 연동을 거쳐 세션 자격 증명을
/// `postMessage`로 전달하는 페이지를 돌려줍니다.
///
/// # Endpoint
/// `GET /auth/google/callback?code={code}&state={state}`
#[get("/google/callback")]
pub async fn google_oauth_callback(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    // 추출기 대신 직접 파싱: 파싱 실패도 HTML 에러 페이지로 응답해야 함
    let query = match web::Query::<OAuthCallbackQuery>::from_query(req.query_string()) {
        Ok(query) => query.into_inner(),
        Err(e) => {
            log::warn!("OAuth 콜백 쿼리 파싱 실패: {}", e);
            return error_page(&AppError::ValidationError(e.to_string()));
        }
    };

    // 사용자가 거부했거나 프로바이더 에러
    if let Some(error) = &query.error {
        let detail = query.error_description.as_deref().unwrap_or(error.as_str());
        log::warn!("Google OAuth 에러: {} - {}", error, detail);
        return error_page(&AppError::UpstreamAuthError(detail.to_string()));
    }

    if let Err(e) = query.validate() {
        return error_page(&AppError::ValidationError(e.to_string()));
    }

    if let Some(oauth_state) = &query.state {
        log::debug!("OAuth 콜백 state: {}", oauth_state);
    }

    let code = query.code.as_deref().unwrap_or_default();
    let credential = match state.google_auth.exchange_code_for_session(code).await {
        Ok(credential) => credential,
        Err(e) => {
            log::error!("Google OAuth 콜백 처리 실패: {}", e);
            return error_page(&e);
        }
    };

    if credential.is_fallback() {
        log::warn!("임시 토큰 발급됨 - 사용자: {}", credential.user.email);
    }

    match render_auth_success_page(&AuthSuccessMessage::from(credential)) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            log::error!("{}", e);
            error_page(&e)
        }
    }
}

/// 세션 상태 확인 핸들러
///
/// 아이덴티티 스토어에 토큰을 조회합니다. 실패도 200 `{valid: false}`로 응답합니다.
///
/// # Endpoint
/// `GET /auth/status?token={token}`
#[get("/status")]
pub async fn auth_status(
    state: web::Data<AppState>,
    query: web::Query<AuthStatusQuery>,
) -> HttpResponse {
    let token = query.token.as_deref().unwrap_or_default();
    let status = state.identity_bridge.validate_session(token).await;

    HttpResponse::Ok().json(status)
}

/// 템플릿 렌더링까지 실패했을 때의 고정 페이지
const FALLBACK_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>로그인 실패</title></head>
<body><h1>로그인 실패</h1><button onclick="window.close()">창 닫기</button></body></html>
"#;

fn error_page(error: &AppError) -> HttpResponse {
    let html = render_auth_error_page(&error.to_string()).unwrap_or_else(|e| {
        log::error!("에러 페이지 렌더링 실패: {}", e);
        FALLBACK_ERROR_PAGE.to_string()
    });

    HttpResponse::BadRequest()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::state_for;
    use actix_web::{test, App};
    use mockito::Matcher;

    macro_rules! auth_app {
        ($base:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state_for($base)))
                    .service(
                        web::scope("/auth")
                            .service(google_login)
                            .service(google_oauth_callback)
                            .service(auth_status),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_google_login_redirects_to_consent_screen() {
        let app = auth_app!("http://localhost");

        let req = test::TestRequest::get().uri("/auth/google").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 302);
        let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
        assert!(location.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(location.contains("access_type=offline"));
        assert!(location.contains("prompt=consent"));
    }

    #[actix_web::test]
    async fn test_callback_success_renders_post_message_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"access_token":"ya29.google","expires_in":3599,"token_type":"Bearer"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/oauth2/v2/userinfo")
            .with_status(200)
            .with_body(r#"{"id":"1234567890","email":"user@gmail.com","name":"John Doe"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/auth/v1/signup")
            .with_status(200)
            .with_body(r#"{"access_token":"sb-access","refresh_token":"sb-refresh","expires_in":3600,"user":{"id":"uuid-1","email":"user@gmail.com"}}"#)
            .create_async()
            .await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?code=good-code&state=xyz")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#""type":"AUTH_SUCCESS""#));
        assert!(html.contains(r#""access_token":"sb-access""#));
        assert!(html.contains(r#""expires_in":3599"#));
        assert!(html.contains("window.postMessage"));
    }

    #[actix_web::test]
    async fn test_callback_rejected_code_renders_error_page() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant","error_description":"Malformed auth code."}"#)
            .create_async()
            .await;
        let signup = server
            .mock("POST", "/auth/v1/signup")
            .expect(0)
            .create_async()
            .await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?code=expired-code")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        assert!(resp
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Malformed auth code."));
        assert!(html.contains("window.close()"));
        signup.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_identity_store_failure_is_html_400() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/token")
            .with_status(200)
            .with_body(r#"{"access_token":"ya29.google","expires_in":3599}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/oauth2/v2/userinfo")
            .with_status(200)
            .with_body(r#"{"id":"1","email":"user@gmail.com"}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/auth/v1/signup")
            .with_status(500)
            .with_body(r#"{"msg":"database unavailable"}"#)
            .create_async()
            .await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?code=good-code")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Supabase 연동 실패"));
        assert!(!html.contains("AUTH_SUCCESS"));
    }

    #[actix_web::test]
    async fn test_callback_provider_error_and_missing_code() {
        let mut server = mockito::Server::new_async().await;
        let token = server.mock("POST", "/token").expect(0).create_async().await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?error=access_denied")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(html.contains("access_denied"));

        let req = test::TestRequest::get()
            .uri("/auth/google/callback?state=xyz")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        token.assert_async().await;
    }

    #[actix_web::test]
    async fn test_callback_unparseable_query_is_html_400() {
        let mut server = mockito::Server::new_async().await;
        let token = server.mock("POST", "/token").expect(0).create_async().await;
        let app = auth_app!(&server.url());

        for uri in [
            "/auth/google/callback?code=a&code=b",
            "/auth/google/callback?code=good-code&state=s1&state=s2",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), 400, "uri: {}", uri);
            let content_type = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
            assert!(content_type.starts_with("text/html"), "uri: {}", uri);
            let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(html.contains("로그인 실패"));
            assert!(html.contains("window.close()"));
        }

        token.assert_async().await;
    }

    #[actix_web::test]
    async fn test_auth_status_reports_invalid_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/v1/user")
            .match_header("authorization", "Bearer temp_1_2")
            .with_status(401)
            .with_body(r#"{"msg":"invalid JWT"}"#)
            .create_async()
            .await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/status?token=temp_1_2")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["valid"], false);
        assert!(body.get("user").is_none());
        assert!(body["error"].as_str().unwrap().contains("invalid JWT"));
    }

    #[actix_web::test]
    async fn test_auth_status_valid_token() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/auth/v1/user")
            .match_header("apikey", "anon-key")
            .match_header("authorization", Matcher::Exact("Bearer sb-access".to_string()))
            .with_status(200)
            .with_body(r#"{"id":"uuid-1","email":"user@gmail.com"}"#)
            .create_async()
            .await;
        let app = auth_app!(&server.url());

        let req = test::TestRequest::get()
            .uri("/auth/status?token=sb-access")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["valid"], true);
        assert_eq!(body["user"]["email"], "user@gmail.com");
    }
}
