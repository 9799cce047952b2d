//! # 문자열 유틸리티
//!
//! 쿼리 파라미터 정리와 콜백 페이지 스크립트에 넣을 JSON 직렬화 함수입니다.

use serde::Deserialize;

/// 선택적 문자열 값 정리
///
/// 빈 문자열이나 공백만 있는 문자열은 `None`, 그 외에는 앞뒤 공백을 제거한 값을 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  a  ".to_string())), Some("a".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 값은 `None`으로 변환합니다.
/// 쿼리 스트링의 `?url=` 처럼 값이 비어 있는 파라미터를 누락과 동일하게 취급할 때 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Query {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     url: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// `<script>` 블록 안에 그대로 넣을 수 있는 JSON 리터럴
///
/// `</script>` 조기 종료와 HTML 주석 시작을 막기 위해 `<`, `>`, `&`를 유니코드 이스케이프합니다.
/// 결과는 여전히 유효한 JSON이자 JavaScript 객체 리터럴입니다.
pub fn script_safe_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    Ok(json
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029"))
}
