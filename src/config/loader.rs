//! # Settings Loader
//!
//! `key=value` 형식의 텍스트를 속성 컨테이너에 일괄 적용합니다.
//!
//! ## 파일 형식
//!
//! ```text
//! useSteam=true
//! windowWidth=2560
//! windowHeight=1440
//! ticksPerSecond=30
//! ```
//!
//! - 한 줄에 설정 하나, 이스케이프/주석/따옴표 없음
//! - 첫 번째 `=`에서 분리하며 키는 공백까지 그대로 사용
//! - 값은 다음 `=` 또는 줄 끝까지
//! - `=`가 없는 줄은 값이 빈 문자열인 키로 취급
//! - 빈 줄은 건너뜀
//!
//! ## 에러 처리
//!
//! 알 수 없는 키와 잘못된 값은 `warn` 로그를 남기고 [`ApplyReport`]에 기록한 뒤
//! 나머지 줄을 계속 처리합니다. 파일이 없으면 기본값을 유지하며 에러가 아닙니다.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{info, warn};

use crate::attributes::{AttributeContainer, SharedAttributeContainer};
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 텍스트 설정을 받을 수 있는 대상
pub trait SettingsTarget {
    fn apply_setting(&mut self, key: &str, value: &str) -> AppResult<()>;
}

impl SettingsTarget for AttributeContainer<'_> {
    fn apply_setting(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.set_from_text(key, value)
    }
}

/// 일괄 적용 결과
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ApplyReport {
    /// 성공적으로 적용된 줄 수
    pub applied: usize,
    /// 바인딩되지 않은 키 (등장 순서)
    pub unknown_keys: Vec<String>,
    /// 파싱에 실패한 항목
    pub malformed: Vec<AppError>,
}

impl ApplyReport {
    /// 모든 줄이 문제없이 적용되었는지 확인합니다.
    pub fn is_clean(&self) -> bool {
        self.unknown_keys.is_empty() && self.malformed.is_empty()
    }
}

/// 한 줄을 키와 값으로 분리합니다.
///
/// 첫 번째 `=` 앞이 키, 그 뒤부터 다음 `=` 또는 줄 끝까지가 값입니다.
pub fn split_setting(line: &str) -> (&str, &str) {
    match line.split_once('=') {
        Some((key, rest)) => (key, rest.split_once('=').map_or(rest, |(value, _)| value)),
        None => (line, ""),
    }
}

/// 텍스트 전체를 대상에 적용합니다.
pub fn apply_settings<T>(target: &mut T, text: &str) -> ApplyReport
where
    T: SettingsTarget + ?Sized,
{
    apply_lines(text, |key, value| target.apply_setting(key, value))
}

/// 텍스트 전체를 공유 컨테이너에 적용합니다.
///
/// `&self`로 설정하므로 같은 컨테이너에 여러 스레드가 동시에 적용할 수 있습니다.
pub fn apply_shared_settings(target: &SharedAttributeContainer<'_>, text: &str) -> ApplyReport {
    apply_lines(text, |key, value| target.set_from_text(key, value))
}

fn apply_lines<F>(text: &str, mut apply: F) -> ApplyReport
where
    F: FnMut(&str, &str) -> AppResult<()>,
{
    let mut report = ApplyReport::default();

    for line in text.lines().filter(|line| !line.is_empty()) {
        let (key, value) = split_setting(line);

        match apply(key, value) {
            Ok(()) => report.applied += 1,
            Err(AppError::UnknownAttributeKey(key)) => {
                warn!("unknown setting '{}' ignored", key);
                report.unknown_keys.push(key);
            }
            Err(e) => {
                warn!("setting skipped: {}", e);
                report.malformed.push(e);
            }
        }
    }

    report
}

/// 설정 파일을 읽어 대상에 적용합니다.
///
/// 파일이 없으면 빈 [`ApplyReport`]를 반환합니다 (모든 값은 기본값 유지).
///
/// # Errors
///
/// 파일이 존재하지만 읽을 수 없는 경우 `InternalError`
pub fn load_settings_file<T>(path: &Path, target: &mut T) -> AppResult<ApplyReport>
where
    T: SettingsTarget + ?Sized,
{
    let Some(text) = read_settings_file(path)? else {
        return Ok(ApplyReport::default());
    };

    let report = apply_settings(target, &text);
    log_loaded(path, &report);
    Ok(report)
}

/// [`load_settings_file`]의 공유 컨테이너 버전
pub fn load_shared_settings_file(
    path: &Path,
    target: &SharedAttributeContainer<'_>,
) -> AppResult<ApplyReport> {
    let Some(text) = read_settings_file(path)? else {
        return Ok(ApplyReport::default());
    };

    let report = apply_shared_settings(target, &text);
    log_loaded(path, &report);
    Ok(report)
}

/// 파일이 없으면 `None`
fn read_settings_file(path: &Path) -> AppResult<Option<String>> {
    match fs::read_to_string(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("no settings file at {}, using defaults", path.display());
            Ok(None)
        }
        result => result
            .map(Some)
            .with_context(|| format!("failed to read {}", path.display())),
    }
}

fn log_loaded(path: &Path, report: &ApplyReport) {
    info!(
        "loaded {}: {} applied, {} unknown, {} malformed",
        path.display(),
        report.applied,
        report.unknown_keys.len(),
        report.malformed.len()
    );
}
