//! # Entities Module
//!
//! 역할 이름으로 생성되는 게임 엔티티입니다. 각 variant는 자기 파일 안에서
//! [`register_variant!`](crate::register_variant)로 스스로 등록하며, 이 모듈에는
//! variant 목록이 없습니다.
//!
//! ## 구성
//!
//! - [`Entity`] - 모든 variant의 공통 trait
//! - [`entities()`] - 전역 엔티티 레지스트리 접근자 (첫 접근 시 구성)
//! - [`spawn`] - 역할 이름 목록으로 엔티티 생성
//!
//! ## 등록된 역할
//!
//! | 역할 | 타입 |
//! |------|------|
//! | `zombie` | [`Zombie`] |
//! | `skeleton` | [`Skeleton`] |
//! | `turret` | [`Turret`] |

use std::any::Any;

use crate::declare_registry;

pub mod skeleton;
pub mod spawn;
pub mod turret;
pub mod zombie;

pub use skeleton::Skeleton;
pub use spawn::{load_spawn_file, spawn_from_text, spawn_from_text_with, SpawnReport};
pub use turret::Turret;
pub use zombie::Zombie;

/// 역할 이름으로 생성 가능한 게임 엔티티
pub trait Entity: Any + Send {
    /// 등록된 역할 이름
    fn role(&self) -> &'static str;

    fn health(&self) -> u32;

    /// 한 틱 진행하고 수행한 행동을 설명합니다.
    fn update(&mut self, tick: u64) -> String;

    fn as_any(&self) -> &dyn Any;
}

declare_registry!(
    /// [`Entity`] variant 등록 레코드
    pub EntityRegistration, Entity, entities
);
