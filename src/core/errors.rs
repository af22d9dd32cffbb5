//! # Application Error Handling System
//!
//! 레지스트리와 속성 컨테이너, 설정 로더가 공유하는 통합 에러 타입입니다.
//! `thiserror`로 `Error` trait을 구현하며, 에러를 두 부류로 나눕니다.
//!
//! ## 에러 분류
//!
//! ### 1. 구조적 에러 (Fail-Fast)
//! - `DuplicateRegistration`: 같은 이름의 팩토리를 두 번 등록한 프로그래머 실수.
//!   `Registry::register`는 이 에러로 즉시 패닉하고, `try_register`만 값으로 돌려줍니다.
//!
//! ### 2. 데이터 기반 에러 (복구 가능)
//! - `UnknownRegistryName`: 등록되지 않은 역할 이름 (데이터 파일 오타 등)
//! - `UnknownAttributeKey`: 바인딩되지 않은 설정 키
//! - `MalformedValue`: 숫자 등으로 해석할 수 없는 설정 값
//!
//! 데이터 기반 에러는 호출자가 로그를 남기고 다음 항목으로 넘어갈 수 있도록
//! 항상 `Result`로 전달되며, 컴포넌트 경계를 넘어 패닉으로 번지지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use factory_config::core::errors::{AppError, ErrorContext};
//!
//! let text = std::fs::read_to_string(path)
//!     .with_context(|| format!("failed to read {}", path.display()))?;
//!
//! match container.set_from_text("windowWidth", "abc") {
//!     Err(AppError::MalformedValue { key, reason }) => log::warn!("{key}: {reason}"),
//!     _ => {}
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// 이미 등록된 이름으로 팩토리를 다시 등록하려 한 경우
    ///
    /// 등록은 프로그램 시작 시점의 구조적 작업이므로 이 에러는 복구 대상이 아닙니다.
    #[error("Duplicate registration: '{0}' is already registered")]
    DuplicateRegistration(String),

    /// 레지스트리에 없는 이름으로 인스턴스 생성을 요청한 경우
    #[error("Unknown registry name: '{0}'")]
    UnknownRegistryName(String),

    /// 컨테이너에 바인딩되지 않은 키에 값을 설정하려 한 경우
    #[error("Unknown attribute key: '{0}'")]
    UnknownAttributeKey(String),

    /// 값 텍스트를 대상 타입으로 해석하지 못한 경우
    ///
    /// 대상 저장소는 이전 값을 그대로 유지합니다.
    #[error("Malformed value for '{key}': {reason}")]
    MalformedValue { key: String, reason: String },

    /// 파일 I/O 등 예상하지 못한 오류
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 로그를 남기고 계속 진행해도 되는 데이터 기반 에러인지 확인합니다.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::DuplicateRegistration(_))
    }
}

/// 애플리케이션 전역 Result 타입
pub type AppResult<T> = Result<T, AppError>;

/// 에러에 컨텍스트 정보를 덧붙여 `AppError::InternalError`로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = AppError::DuplicateRegistration("zombie".to_string());
        assert_eq!(
            error.to_string(),
            "Duplicate registration: 'zombie' is already registered"
        );

        let error = AppError::MalformedValue {
            key: "ticksPerSecond".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert!(error.to_string().contains("ticksPerSecond"));
    }

    #[test]
    fn test_recoverable_classification() {
        assert!(!AppError::DuplicateRegistration("a".into()).is_recoverable());
        assert!(AppError::UnknownRegistryName("a".into()).is_recoverable());
        assert!(AppError::UnknownAttributeKey("a".into()).is_recoverable());
        assert!(AppError::InternalError("a".into()).is_recoverable());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }

    #[test]
    fn test_error_with_context_is_lazy() {
        let ok: Result<u32, &str> = Ok(7);
        let value = ok
            .with_context(|| panic!("context must not be built on success"))
            .unwrap();
        assert_eq!(value, 7);
    }
}
