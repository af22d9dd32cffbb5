//! 고정된 위치에서 회전하며 감시하는 엔티티
//!
//! `Default` 대신 별도 생성 함수로 등록됩니다.

use std::any::Any;

use crate::entities::{Entity, EntityRegistration};
use crate::register_variant;

const SWEEP_DEGREES: u16 = 45;

#[derive(Debug, Clone, PartialEq)]
pub struct Turret {
    health: u32,
    heading: u16,
}

impl Turret {
    pub fn with_heading(heading: u16) -> Self {
        Self {
            health: 200,
            heading: heading % 360,
        }
    }

    pub fn heading(&self) -> u16 {
        self.heading
    }
}

fn build_turret() -> Box<dyn Entity> {
    Box::new(Turret::with_heading(0))
}

impl Entity for Turret {
    fn role(&self) -> &'static str {
        "turret"
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn update(&mut self, _tick: u64) -> String {
        self.heading = (self.heading + SWEEP_DEGREES) % 360;
        format!("turret sweeps to {} degrees", self.heading)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

register_variant!(EntityRegistration, "turret", constructor = build_turret);
