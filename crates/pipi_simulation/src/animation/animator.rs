//! Animator — встроенная state machine по именам состояний
//!
//! Граф:
//! ```text
//!            Attack (trigger, из любого состояния)
//!   ┌──────────────────────────────────────────┐
//!   ↓                                          │
//! Madrazo ──(normalized ≥ 1)──→ Idle ←──(!isWalking)── Walk
//!                               │  ↑                    ↑
//!          idleTime ≥ stand_after  (normalized ≥ 1)     │ isWalking
//!                               ↓  │                    │
//!                               Stand ──────────────────┘
//! ```
//!
//! Параметры пишутся контроллером через `AnimationParameterSink`,
//! переходы считаются в `advance()` (раз в кадр, после записи).

use bevy::prelude::*;
use std::collections::{HashMap, HashSet};

use super::{
    AnimationParameterSink, AnimationStateQuery, PARAM_IDLE_TIME, PARAM_IS_WALKING,
    TRIGGER_ATTACK,
};
use crate::controller::{COMBAT_STATE, STAND_STATE};

pub const IDLE_STATE: &str = "Idle";
pub const WALK_STATE: &str = "Walk";

/// Описание состояния: имя + длина клипа
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatorStateDef {
    pub name: &'static str,
    /// Длина клипа (секунды)
    pub length: f32,
    /// Loop клипа (normalized time растёт дальше 1.0 в обоих случаях)
    pub looping: bool,
}

#[derive(Component, Debug, Clone)]
pub struct Animator {
    states: Vec<AnimatorStateDef>,
    current: usize,
    elapsed: f32,
    /// Порог idleTime для перехода Idle → Stand
    stand_after_idle: f32,
    floats: HashMap<String, f32>,
    bools: HashMap<String, bool>,
    triggers: HashSet<String>,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(5.0)
    }
}

impl Animator {
    pub fn new(stand_after_idle: f32) -> Self {
        Self {
            states: vec![
                AnimatorStateDef { name: IDLE_STATE, length: 2.0, looping: true },
                AnimatorStateDef { name: WALK_STATE, length: 1.0, looping: true },
                AnimatorStateDef { name: COMBAT_STATE, length: 0.9, looping: false },
                AnimatorStateDef { name: STAND_STATE, length: 3.0, looping: false },
            ],
            current: 0,
            elapsed: 0.0,
            stand_after_idle,
            floats: HashMap::new(),
            bools: HashMap::new(),
            triggers: HashSet::new(),
        }
    }

    /// Заменить длину клипа (тесты, тюнинг)
    pub fn with_clip_length(mut self, name: &str, length: f32) -> Self {
        if let Some(state) = self.states.iter_mut().find(|s| s.name == name) {
            state.length = length;
        }
        self
    }

    pub fn current_state(&self) -> &AnimatorStateDef {
        &self.states[self.current]
    }

    pub fn float(&self, name: &str) -> f32 {
        self.floats.get(name).copied().unwrap_or(0.0)
    }

    pub fn bool(&self, name: &str) -> bool {
        self.bools.get(name).copied().unwrap_or(false)
    }

    pub fn is_trigger_set(&self, name: &str) -> bool {
        self.triggers.contains(name)
    }

    /// Переходы по текущим параметрам, потом продвижение playback на `delta`
    ///
    /// Возвращает имя нового состояния если был переход.
    pub fn advance(&mut self, delta: f32) -> Option<&'static str> {
        let next = self.evaluate_transition();
        if let Some(name) = next {
            self.enter(name);
        }
        self.elapsed += delta.max(0.0);
        next
    }

    fn evaluate_transition(&mut self) -> Option<&'static str> {
        if self.triggers.remove(TRIGGER_ATTACK) {
            return Some(COMBAT_STATE);
        }

        let current = self.current_state().name;
        let finished = !self.current_state().looping && self.normalized_time() >= 1.0;
        let walking = self.bool(PARAM_IS_WALKING);

        match current {
            IDLE_STATE if walking => Some(WALK_STATE),
            IDLE_STATE if self.float(PARAM_IDLE_TIME) >= self.stand_after_idle => {
                Some(STAND_STATE)
            }
            WALK_STATE if !walking => Some(IDLE_STATE),
            STAND_STATE if walking => Some(WALK_STATE),
            STAND_STATE | COMBAT_STATE if finished => Some(IDLE_STATE),
            _ => None,
        }
    }

    fn enter(&mut self, name: &str) {
        if let Some(index) = self.states.iter().position(|s| s.name == name) {
            self.current = index;
            self.elapsed = 0.0;
        }
    }
}

impl AnimationStateQuery for Animator {
    fn current_state_name(&self) -> &str {
        self.current_state().name
    }

    fn normalized_time(&self) -> f32 {
        let length = self.current_state().length;
        if length > 0.0 {
            self.elapsed / length
        } else {
            1.0
        }
    }
}

impl AnimationParameterSink for Animator {
    fn set_float(&mut self, name: &str, value: f32) {
        self.floats.insert(name.to_string(), value);
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.bools.insert(name.to_string(), value);
    }

    fn set_trigger(&mut self, name: &str) {
        self.triggers.insert(name.to_string());
    }
}
