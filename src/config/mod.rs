//! # Configuration Module
//!
//! 실행 환경 감지, 입력 파일 경로, 텍스트 설정 파일 적용을 담당하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경과 파일 경로 (환경 변수 기반)
//! - [`loader`] - `key=value` 텍스트 일괄 적용
//! - [`game_config`] - 선언형 필드 테이블로 만든 게임 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use factory_config::config::{GameConfig, PathConfig};
//!
//! let (config, report) = GameConfig::load(&PathConfig::settings_path())?;
//! for key in &report.unknown_keys {
//!     log::warn!("unknown setting: {}", key);
//! }
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="development"     # development, test, staging, production
//! export SETTINGS_PATH="settings.cfg"  # key=value 설정 파일
//! export SPAWN_LIST_PATH="spawn.txt"   # 역할 이름 목록
//! ```

pub mod data_config;
pub mod game_config;
pub mod loader;

pub use data_config::*;
pub use game_config::*;
pub use loader::*;
