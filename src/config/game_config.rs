//! # Game Configuration
//!
//! 텍스트 설정 파일로 덮어쓸 수 있는 게임 설정입니다. 필드 선언은
//! [`define_config!`](crate::define_config) 한 곳에만 있으며, 구조체와 키 바인딩이
//! 모두 그 선언에서 생성됩니다.
//!
//! | 키 | 타입 | 기본값 |
//! |----|------|--------|
//! | `useSteam` | `bool` | `false` |
//! | `windowWidth` | `u32` | `1920` |
//! | `windowHeight` | `u32` | `1080` |
//! | `ticksPerSecond` | `u32` | `60` |
//! | `playerName` | `String` | `"player"` |
//! | `masterVolume` | `f32` | `1.0` |

use std::path::Path;

use serde::Serialize;

use crate::config::loader::{
    apply_settings, apply_shared_settings, load_settings_file, load_shared_settings_file,
    ApplyReport,
};
use crate::core::errors::AppResult;
use crate::{define_config, define_shared_config};

define_config! {
    /// 단일 스레드용 게임 설정
    #[derive(Debug, Clone, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct GameConfig {
        pub use_steam: bool = false => "useSteam",
        pub window_width: u32 = 1920 => "windowWidth",
        pub window_height: u32 = 1080 => "windowHeight",
        pub ticks_per_second: u32 = 60 => "ticksPerSecond",
        pub player_name: String = String::from("player") => "playerName",
        pub master_volume: f32 = 1.0 => "masterVolume",
    }
}

define_shared_config! {
    /// 스레드 간에 읽고 쓰는 게임 설정. 값마다 독립된 락을 가집니다.
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SharedGameConfig {
        pub use_steam: bool = false => "useSteam",
        pub window_width: u32 = 1920 => "windowWidth",
        pub window_height: u32 = 1080 => "windowHeight",
        pub ticks_per_second: u32 = 60 => "ticksPerSecond",
        pub player_name: String = String::from("player") => "playerName",
        pub master_volume: f32 = 1.0 => "masterVolume",
    }
}

impl GameConfig {
    /// 기본값에서 시작해 설정 파일을 적용한 결과를 반환합니다.
    ///
    /// 파일이 없으면 기본값 그대로입니다.
    pub fn load(path: &Path) -> AppResult<(Self, ApplyReport)> {
        let mut config = Self::default();
        let report = config.apply_file(path)?;
        Ok((config, report))
    }

    pub fn apply_text(&mut self, text: &str) -> ApplyReport {
        apply_settings(&mut self.attributes(), text)
    }

    pub fn apply_file(&mut self, path: &Path) -> AppResult<ApplyReport> {
        load_settings_file(path, &mut self.attributes())
    }
}

impl SharedGameConfig {
    /// 여러 번 적용할 때는 `attributes()`를 한 번 만들어
    /// [`apply_shared_settings`]에 넘기면 됩니다.
    pub fn apply_text(&self, text: &str) -> ApplyReport {
        apply_shared_settings(&self.attributes(), text)
    }

    pub fn apply_file(&self, path: &Path) -> AppResult<ApplyReport> {
        load_shared_settings_file(path, &self.attributes())
    }

    /// 현재 값들의 일관되지 않을 수 있는 스냅샷 (값마다 따로 읽음)
    pub fn snapshot(&self) -> GameConfig {
        GameConfig {
            use_steam: self.use_steam.get(),
            window_width: self.window_width.get(),
            window_height: self.window_height.get(),
            ticks_per_second: self.ticks_per_second.get(),
            player_name: self.player_name.get(),
            master_volume: self.master_volume.get(),
        }
    }
}
