//! 화살을 쏘는 원거리 엔티티

use std::any::Any;

use crate::entities::{Entity, EntityRegistration};
use crate::register_variant;

const QUIVER_SIZE: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Skeleton {
    health: u32,
    arrows: u32,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            health: 60,
            arrows: QUIVER_SIZE,
        }
    }
}

impl Skeleton {
    pub fn arrows(&self) -> u32 {
        self.arrows
    }
}

impl Entity for Skeleton {
    fn role(&self) -> &'static str {
        "skeleton"
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn update(&mut self, _tick: u64) -> String {
        if self.arrows == 0 {
            self.arrows = QUIVER_SIZE;
            return "skeleton restocks its quiver".to_string();
        }

        self.arrows -= 1;
        format!("skeleton fires an arrow ({} left)", self.arrows)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

register_variant!(EntityRegistration, "skeleton", Skeleton);
