//! # Image Relay
//!
//! 원격 이미지 URL을 GET으로 가져와 본문 바이트와 `content-type` 헤더를 돌려줍니다.
//! 리다이렉트 루프 방지나 크기 제한은 없으며, 타임아웃은 공유 HTTP 클라이언트 설정을 따릅니다.

use actix_web::web::Bytes;

use crate::errors::errors::{AppError, AppResult};

/// 원본 서버에서 가져온 이미지
#[derive(Debug, Clone)]
pub struct RelayedImage {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// 이미지 프록시 서비스
pub struct ImageRelayService {
    client: reqwest::Client,
}

impl ImageRelayService {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// 원격 이미지를 가져옵니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(RelayedImage)` - 본문 바이트와 원본 Content-Type
    /// * `Err(AppError::UpstreamFetchError)` - 원본이 non-2xx 응답 (같은 상태 코드로 전달)
    /// * `Err(AppError::RelayError)` - 잘못된 URL, 연결 실패, 타임아웃 등 네트워크 수준 실패
    pub async fn fetch_image(&self, url: &str) -> AppResult<RelayedImage> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                log::warn!("이미지 요청 실패 - url: {}, 에러: {}", url, e);
                AppError::RelayError(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("이미지 원본 응답 {} - url: {}", status, url);
            return Err(AppError::UpstreamFetchError {
                status: status.as_u16(),
                detail: format!("Request failed with status code {}", status.as_u16()),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::RelayError(format!("이미지 본문 읽기 실패: {}", e)))?;

        Ok(RelayedImage {
            bytes,
            content_type,
        })
    }
}
