//! # Spawn
//!
//! 역할 이름 목록(한 줄에 하나)으로 엔티티를 생성합니다. 등록되지 않은 이름은
//! `warn` 로그를 남기고 건너뛰며, 나머지 줄은 계속 처리됩니다.
//!
//! ```text
//! zombie
//! zombie
//! skeleton
//! turret
//! ```

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};

use crate::core::errors::{AppResult, ErrorContext};
use crate::core::registry::Registry;
use crate::entities::{entities, Entity};

/// 생성 결과
#[derive(Default)]
pub struct SpawnReport {
    /// 목록 순서대로 생성된 엔티티
    pub spawned: Vec<Box<dyn Entity>>,
    /// 등록되지 않은 역할 이름 (등장 순서)
    pub unknown: Vec<String>,
}

impl SpawnReport {
    /// 생성된 엔티티의 역할 이름 목록
    pub fn roles(&self) -> Vec<&'static str> {
        self.spawned.iter().map(|entity| entity.role()).collect()
    }
}

impl fmt::Debug for SpawnReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpawnReport")
            .field("spawned", &self.roles())
            .field("unknown", &self.unknown)
            .finish()
    }
}

/// 주어진 레지스트리로 목록의 엔티티를 생성합니다.
///
/// 이름은 앞뒤 공백을 제거하고 사용하며 빈 줄은 건너뜁니다.
pub fn spawn_from_text_with(registry: &Registry<dyn Entity>, text: &str) -> SpawnReport {
    let mut report = SpawnReport::default();

    for role in text.lines().map(str::trim).filter(|role| !role.is_empty()) {
        match registry.create(role) {
            Some(entity) => report.spawned.push(entity),
            None => {
                warn!("unknown entity role '{}' skipped", role);
                report.unknown.push(role.to_string());
            }
        }
    }

    report
}

/// 전역 엔티티 레지스트리로 목록의 엔티티를 생성합니다.
pub fn spawn_from_text(text: &str) -> SpawnReport {
    spawn_from_text_with(entities(), text)
}

/// 스폰 파일을 읽어 엔티티를 생성합니다. 파일이 없으면 빈 결과입니다.
pub fn load_spawn_file(path: &Path) -> AppResult<SpawnReport> {
    let text = match fs::read_to_string(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("no spawn list at {}, nothing to spawn", path.display());
            return Ok(SpawnReport::default());
        }
        result => result.with_context(|| format!("failed to read {}", path.display()))?,
    };

    let report = spawn_from_text(&text);
    info!(
        "spawned {} entities from {} ({} unknown roles)",
        report.spawned.len(),
        path.display(),
        report.unknown.len()
    );

    Ok(report)
}
