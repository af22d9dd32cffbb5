//! 실행 환경 및 파일 경로 설정 관리 모듈
//!
//! 실행 환경 감지와 설정/스폰 파일 경로를 환경 변수에서 읽어옵니다.

use std::env;
use std::path::PathBuf;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 상세 로그
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우
    /// `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `name` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 기본 로그 필터
    ///
    /// - Development: `debug` (레지스트리 초기화, 바인딩 로그 포함)
    /// - Test: `warn`
    /// - Staging/Production: `info`
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}

/// 입력 파일 경로 설정
pub struct PathConfig;

impl PathConfig {
    /// `key=value` 설정 파일 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `SETTINGS_PATH`: 커스텀 경로 (기본값: `settings.cfg`)
    pub fn settings_path() -> PathBuf {
        env::var("SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("settings.cfg"))
    }

    /// 역할 이름 목록(스폰 파일) 경로를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `SPAWN_LIST_PATH`: 커스텀 경로 (기본값: `spawn.txt`)
    pub fn spawn_list_path() -> PathBuf {
        env::var("SPAWN_LIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("spawn.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("DEV"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("stage"), Environment::Staging);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_default_log_filter_for_each_environment() {
        assert_eq!(Environment::Development.default_log_filter(), "debug");
        assert_eq!(Environment::Test.default_log_filter(), "warn");
        assert_eq!(Environment::Staging.default_log_filter(), "info");
        assert_eq!(Environment::Production.default_log_filter(), "info");
    }

    #[test]
    fn test_path_config_defaults() {
        if env::var("SETTINGS_PATH").is_err() {
            assert_eq!(PathConfig::settings_path(), PathBuf::from("settings.cfg"));
        }

        if env::var("SPAWN_LIST_PATH").is_err() {
            assert_eq!(PathConfig::spawn_list_path(), PathBuf::from("spawn.txt"));
        }
    }
}
