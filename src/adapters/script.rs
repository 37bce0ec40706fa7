//! Scripted button input for the simulator and tests.
//!
//! A script is a JSON list of level changes:
//!
//! ```json
//! [
//!   { "at_ms": 100, "button": "Menu", "pressed": true },
//!   { "at_ms": 200, "button": "Menu", "pressed": false }
//! ]
//! ```
//!
//! A button keeps its level until the next step that names it.  Steps
//! need not be sorted.

use serde::{Deserialize, Serialize};

use crate::app::ports::InputPort;
use crate::input::{ButtonId, RawLevels};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_ms: u64,
    pub button: ButtonId,
    pub pressed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    steps: Vec<ScriptStep>,
    next: usize,
    levels: RawLevels,
}

impl ScriptedInput {
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|s| s.at_ms);
        Self {
            steps,
            next: 0,
            levels: RawLevels::released(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Timestamp of the last step, if any.
    pub fn end_ms(&self) -> Option<u64> {
        self.steps.last().map(|s| s.at_ms)
    }

    /// Every step has been applied.
    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}

impl InputPort for ScriptedInput {
    fn read_levels(&mut self, now_ms: u64) -> RawLevels {
        while let Some(step) = self.steps.get(self.next) {
            if step.at_ms > now_ms {
                break;
            }
            self.levels.set(step.button, step.pressed);
            self.next += 1;
        }
        self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_follow_the_script() {
        let mut input = ScriptedInput::from_json(
            r#"[
                {"at_ms": 200, "button": "A", "pressed": false},
                {"at_ms": 100, "button": "A", "pressed": true},
                {"at_ms": 150, "button": "Up", "pressed": true}
            ]"#,
        )
        .unwrap();
        assert_eq!(input.end_ms(), Some(200));

        assert_eq!(input.read_levels(50), RawLevels::released());
        assert_eq!(input.read_levels(100), RawLevels::pressed(&[ButtonId::A]));
        assert_eq!(
            input.read_levels(199),
            RawLevels::pressed(&[ButtonId::A, ButtonId::Up])
        );
        assert_eq!(input.read_levels(250), RawLevels::pressed(&[ButtonId::Up]));
        assert!(input.is_finished());
    }

    #[test]
    fn rejects_unknown_buttons() {
        assert!(ScriptedInput::from_json(r#"[{"at_ms": 0, "button": "Start", "pressed": true}]"#).is_err());
    }
}
