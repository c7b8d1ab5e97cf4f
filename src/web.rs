//! WASM entry point - a ticking creature for a JS canvas renderer
//!
//! The page forwards pointer coordinates and frame timestamps; the creature is
//! stepped on a fixed clock and its pose read back as flat float arrays.

use crate::config::CreatureConfig;
use crate::input::Pointer;
use crate::locomotion::{Creature, FrameClock};
use crate::pose::FLAT_STRIDE;
use glam::Vec2;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebCreature {
    creature: Creature,
    pointer: Pointer,
    clock: FrameClock,
    last_time: f64,
}

#[wasm_bindgen]
impl WebCreature {
    /// The default snake centered at `(x, y)`.
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Result<WebCreature, JsError> {
        let position = Vec2::new(x, y);
        let creature = CreatureConfig::snake(position).build()?;
        Ok(Self::wrap(creature, position))
    }

    /// Builds a creature from a RON description.
    #[wasm_bindgen(js_name = fromRon)]
    pub fn from_ron(source: &str) -> Result<WebCreature, JsError> {
        let config = CreatureConfig::from_ron_str(source)?;
        let creature = config.build()?;
        Ok(Self::wrap(creature, config.position))
    }

    fn wrap(creature: Creature, position: Vec2) -> Self {
        Self {
            creature,
            pointer: Pointer::new(position),
            clock: FrameClock::default(),
            last_time: 0.0,
        }
    }

    #[wasm_bindgen(js_name = pointerMoved)]
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(x, y);
    }

    /// Steps for the time elapsed since the previous frame; `now` is in milliseconds.
    /// Returns the number of ticks run.
    pub fn frame(&mut self, now: f64) -> u32 {
        let elapsed = if self.last_time > 0.0 {
            (now - self.last_time) / 1000.0
        } else {
            self.clock.period()
        };
        self.last_time = now;

        let ticks = self.clock.advance(elapsed);
        for _ in 0..ticks {
            self.creature.tick(&mut self.pointer);
        }
        ticks
    }

    /// `[x, y, heading]` of the head.
    pub fn head(&self) -> Vec<f32> {
        let head = self.creature.head();
        vec![head.position.x, head.position.y, head.angle]
    }

    /// Bones as consecutive `[start x, start y, end x, end y, size]` records.
    pub fn bones(&self) -> Vec<f32> {
        self.creature.pose().to_flat()
    }

    #[wasm_bindgen(js_name = boneStride)]
    pub fn bone_stride() -> usize {
        FLAT_STRIDE
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Warn).expect("Failed to init logger");
}
