//! 이미지 프록시 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::utils::string_utils::deserialize_optional_string;

/// `/proxy/image` 쿼리 파라미터
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ImageProxyQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(required(message = "URL query parameter is required."))]
    pub url: Option<String>,
}
