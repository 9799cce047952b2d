//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, 아웃바운드 HTTP 클라이언트 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 환경 변수 조회 함수 타입
///
/// 테스트에서는 `HashMap` 기반 조회 함수를 주입하여 프로세스 환경을 건드리지 않습니다.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 프로세스 환경 변수 조회
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// 문자열 값을 파싱하고, 실패 시 경고 후 기본값을 사용합니다.
pub(crate) fn parse_or<T>(lookup: EnvLookup<'_>, key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Debug,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {:?} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let raw = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "development".to_string());
        Self::from_str(&raw)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 8000),
            workers: parse_or(lookup, "SERVER_WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Google, 아이덴티티 스토어, 이미지 원본 서버로 나가는 호출 설정
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// 아웃바운드 요청 하나당 타임아웃 (초)
    pub timeout_secs: u64,
}

impl HttpClientConfig {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            timeout_secs: parse_or(lookup, "OUTBOUND_TIMEOUT_SECS", 10),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 설정된 타임아웃을 적용한 reqwest 클라이언트를 생성합니다.
    pub fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .build()
    }
}
