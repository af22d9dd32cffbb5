//! 자기 등록 팩토리와 텍스트 설정 컨테이너
//!
//! 이름으로 객체를 생성하는 자기 등록 레지스트리와, 문자열 키로 서로 다른 타입의
//! 설정 필드에 텍스트 값을 적용하는 속성 컨테이너를 제공합니다.
//!
//! # Features
//!
//! - **자기 등록 레지스트리**: 각 variant가 자기 모듈에서 등록, 중앙 목록 없음
//! - **지연 초기화**: 전역 레지스트리는 접근자 뒤의 `Lazy`로 첫 사용 시 구성
//! - **타입 소거 setter**: 키 하나로 `bool`, 정수, 실수, 문자열 필드를 텍스트로 설정
//! - **선언형 설정**: 필드 선언 한 번으로 구조체, 기본값, 바인딩 테이블 생성
//! - **Thread-safe 설정**: 값마다 독립된 읽기/쓰기 락과 스코프 핸들
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐        ┌──────────────────────┐
//! │    entities     │        │        config        │
//! │ (role variants) │        │ (GameConfig, loader) │
//! └─────────────────┘        └──────────────────────┘
//!          │                            │
//!          ▼                            ▼
//! ┌─────────────────┐        ┌──────────────────────┐
//! │ core::registry  │        │      attributes      │
//! │  name → factory │        │   key → typed setter │
//! └─────────────────┘        └──────────────────────┘
//! ```
//!
//! 두 컴포넌트는 서로 의존하지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use factory_config::config::GameConfig;
//! use factory_config::entities::entities;
//!
//! let mut config = GameConfig::default();
//! config.apply_text("useSteam=true\nwindowWidth=2560\n");
//!
//! let zombie = entities().create("zombie");
//! assert!(entities().create("dragon").is_none());
//! ```

pub mod attributes;
pub mod config;
pub mod core;
pub mod entities;
pub mod utils;

#[doc(hidden)]
pub mod __private {
    pub use inventory;
    pub use log;
    pub use once_cell;
}
