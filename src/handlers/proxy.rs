//! Image Proxy HTTP Handlers
//!
//! 클라이언트의 교차 출처 제한을 피하기 위해 원격 이미지를 대신 가져옵니다.
//! 실패는 원본 상태 코드와 평문 메시지로 그대로 전달합니다.
use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::core::AppState;
use crate::domain::dto::proxy::ImageProxyQuery;
use crate::errors::errors::AppError;

/// 이미지 프록시 핸들러
///
/// # Endpoint
/// `GET /proxy/image?url={url}`
///
/// # Responses
///
/// * `200` - 원본 바이트, 원본 `Content-Type`
/// * `400` - `url` 누락 (아웃바운드 호출 없음)
/// * 원본 상태 코드 - 원본이 non-2xx 응답
/// * `500` - 네트워크 실패
#[get("/image")]
pub async fn proxy_image(
    state: web::Data<AppState>,
    query: web::Query<ImageProxyQuery>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = query.validate() {
        log::debug!("이미지 프록시 요청 거부: {}", e);
        return Ok(HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body("URL query parameter is required."));
    }

    let url = query.url.as_deref().unwrap_or_default();
    let image = state.image_relay.fetch_image(url).await?;

    let mut response = HttpResponse::Ok();
    if let Some(content_type) = image.content_type {
        response.content_type(content_type);
    }
    Ok(response.body(image.bytes))
}
