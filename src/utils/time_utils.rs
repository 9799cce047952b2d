//! 시간 유틸리티

/// 현재 UNIX 시각 (밀리초)
///
/// 임시 토큰과 생성 비밀번호의 접미사로 사용됩니다.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        let first = now_millis();
        let second = now_millis();

        assert!(first > 1_600_000_000_000);
        assert!(second >= first);
    }
}
