//! 느리게 움직이며 체력이 높은 근접 엔티티

use std::any::Any;

use crate::entities::{Entity, EntityRegistration};
use crate::register_variant;

#[derive(Debug, Clone, PartialEq)]
pub struct Zombie {
    health: u32,
    distance_walked: u32,
}

impl Default for Zombie {
    fn default() -> Self {
        Self {
            health: 120,
            distance_walked: 0,
        }
    }
}

impl Entity for Zombie {
    fn role(&self) -> &'static str {
        "zombie"
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn update(&mut self, tick: u64) -> String {
        // 두 틱에 한 칸
        if tick % 2 == 0 {
            self.distance_walked += 1;
            format!("zombie shambles forward ({} tiles)", self.distance_walked)
        } else {
            "zombie groans".to_string()
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

register_variant!(EntityRegistration, "zombie", Zombie);
