//! Discrete care actions and their effect on needs.
//!
//! Each [`ActionKind`] maps to an [`ActionRule`] in the configurable
//! [`ActionTable`]: a signed delta per need plus optional gates.  Gates
//! are checked against the state *after* decay has been brought up to
//! the action's timestamp.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{CharacterState, Mood, NeedKind, PerNeed};
use crate::config::GameConfig;
use crate::error::{ActionError, ActionRefusal, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// A full meal (kibble).
    Feed,
    /// A small snack.
    Treat,
    /// Play with a toy or win/lose a minigame.
    Play,
    Pet,
    Kiss,
    Rest,
    Clean,
    /// Watch birds together outdoors.
    Watch,
}

impl ActionKind {
    pub const ALL: [ActionKind; 8] = [
        Self::Feed,
        Self::Treat,
        Self::Play,
        Self::Pet,
        Self::Kiss,
        Self::Rest,
        Self::Clean,
        Self::Watch,
    ];
}

/// A threshold on a single need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeedGate {
    pub need: NeedKind,
    pub level: u8,
}

/// Effect of one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ActionRule {
    /// Whole-point change per need; results are clamped to `[0, 100]`.
    pub deltas: PerNeed<i16>,
    /// Refuse unless `need >= level`.
    pub requires: Option<NeedGate>,
    /// Refuse when `need >= level` (nothing left to gain).
    pub rejects_at: Option<NeedGate>,
}

/// One [`ActionRule`] per [`ActionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionTable {
    pub feed: ActionRule,
    pub treat: ActionRule,
    pub play: ActionRule,
    pub pet: ActionRule,
    pub kiss: ActionRule,
    pub rest: ActionRule,
    pub clean: ActionRule,
    pub watch: ActionRule,
}

impl ActionTable {
    pub fn rule(&self, action: ActionKind) -> &ActionRule {
        match action {
            ActionKind::Feed => &self.feed,
            ActionKind::Treat => &self.treat,
            ActionKind::Play => &self.play,
            ActionKind::Pet => &self.pet,
            ActionKind::Kiss => &self.kiss,
            ActionKind::Rest => &self.rest,
            ActionKind::Clean => &self.clean,
            ActionKind::Watch => &self.watch,
        }
    }
}

const fn deltas(hunger: i16, energy: i16, affection: i16, fun: i16, hygiene: i16) -> PerNeed<i16> {
    PerNeed {
        hunger,
        energy,
        affection,
        fun,
        hygiene,
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        Self {
            feed: ActionRule {
                deltas: deltas(25, 2, 0, 0, 0),
                ..ActionRule::default()
            },
            treat: ActionRule {
                deltas: deltas(10, 0, 3, 0, 0),
                ..ActionRule::default()
            },
            play: ActionRule {
                deltas: deltas(-3, -10, 0, 15, -2),
                requires: Some(NeedGate {
                    need: NeedKind::Energy,
                    level: 10,
                }),
                rejects_at: None,
            },
            pet: ActionRule {
                deltas: deltas(0, 0, 5, 0, 0),
                ..ActionRule::default()
            },
            kiss: ActionRule {
                deltas: deltas(0, 0, 10, 0, 0),
                ..ActionRule::default()
            },
            rest: ActionRule {
                deltas: deltas(0, 30, 0, -2, 0),
                requires: None,
                rejects_at: Some(NeedGate {
                    need: NeedKind::Energy,
                    level: 95,
                }),
            },
            clean: ActionRule {
                deltas: deltas(0, 0, 0, -3, 40),
                ..ActionRule::default()
            },
            watch: ActionRule {
                deltas: deltas(0, -2, 2, 8, 0),
                ..ActionRule::default()
            },
        }
    }
}

/// What an accepted action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionReport {
    pub action: ActionKind,
    pub mood_before: Mood,
    pub mood_after: Mood,
}

impl CharacterState {
    /// Decay up to `now_ms`, then apply `action`.
    ///
    /// On refusal the decay still happened but no delta is applied.
    pub fn apply_action(
        &mut self,
        action: ActionKind,
        config: &GameConfig,
        now_ms: u64,
    ) -> Result<ActionReport> {
        self.tick(now_ms, config);
        let mood_before = self.mood(&config.mood);
        let rule = config.actions.rule(action);

        if let Some(gate) = rule.requires.filter(|g| self.need(g.need) < g.level) {
            return Err(ActionError {
                action,
                reason: ActionRefusal::NeedTooLow {
                    need: gate.need,
                    required: gate.level,
                },
            }
            .into());
        }
        if let Some(gate) = rule.rejects_at.filter(|g| self.need(g.need) >= g.level) {
            return Err(ActionError {
                action,
                reason: ActionRefusal::NeedTooHigh {
                    need: gate.need,
                    ceiling: gate.level,
                },
            }
            .into());
        }

        for (kind, delta) in rule.deltas.iter() {
            if delta != 0 {
                self.adjust(kind, delta);
            }
        }
        debug!("Action {:?} applied", action);

        Ok(ActionReport {
            action,
            mood_before,
            mood_after: self.mood(&config.mood),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_action() -> impl Strategy<Value = ActionKind> {
        proptest::sample::select(ActionKind::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn needs_stay_in_range(
            actions in proptest::collection::vec((any_action(), 0u64..600_000), 1..80),
        ) {
            let config = GameConfig::default();
            let mut c = CharacterState::new(&config, 0);
            let mut now = 0;
            for (action, gap) in actions {
                now += gap;
                let _ = c.apply_action(action, &config, now);
                for kind in NeedKind::ALL {
                    prop_assert!(c.need(kind) <= 100);
                }
            }
        }
    }
}
