// Character movement states and intent-driven transitions

use crate::engine::input::{Action, InputState};

/// Direction the character is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// What the player wants the character to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Stop,
}

impl Intent {
    /// Resolve raw direction flags. Left wins when both are held.
    pub fn from_flags(move_left: bool, move_right: bool) -> Self {
        if move_left {
            Self::MoveLeft
        } else if move_right {
            Self::MoveRight
        } else {
            Self::Stop
        }
    }

    /// Sample the intent from the current input state
    pub fn from_input(input: &InputState) -> Self {
        Self::from_flags(
            input.is_pressed(Action::MoveLeft),
            input.is_pressed(Action::MoveRight),
        )
    }
}

/// Represents the current state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterState {
    RunningLeft,
    RunningRight,
    StandingLeft,
    StandingRight,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::StandingRight
    }
}

impl CharacterState {
    /// All states, in clip table order
    pub const ALL: [CharacterState; 4] = [
        Self::RunningLeft,
        Self::RunningRight,
        Self::StandingLeft,
        Self::StandingRight,
    ];

    /// State selected by `intent` for a character currently facing `facing`
    pub fn target(intent: Intent, facing: Facing) -> Self {
        match intent {
            Intent::MoveLeft => Self::RunningLeft,
            Intent::MoveRight => Self::RunningRight,
            Intent::Stop => match facing {
                Facing::Left => Self::StandingLeft,
                Facing::Right => Self::StandingRight,
            },
        }
    }

    /// Check if the character is moving
    pub fn is_running(&self) -> bool {
        matches!(self, Self::RunningLeft | Self::RunningRight)
    }

    /// Direction the character looks while in this state
    pub fn facing(&self) -> Facing {
        match self {
            Self::RunningLeft | Self::StandingLeft => Facing::Left,
            Self::RunningRight | Self::StandingRight => Facing::Right,
        }
    }

    /// Position of this state in [`CharacterState::ALL`]
    pub fn slot(&self) -> usize {
        match self {
            Self::RunningLeft => 0,
            Self::RunningRight => 1,
            Self::StandingLeft => 2,
            Self::StandingRight => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(CharacterState::default(), CharacterState::StandingRight);
        assert_eq!(Facing::default(), Facing::Right);
    }

    #[test]
    fn test_intent_priority() {
        assert_eq!(Intent::from_flags(true, true), Intent::MoveLeft);
        assert_eq!(Intent::from_flags(true, false), Intent::MoveLeft);
        assert_eq!(Intent::from_flags(false, true), Intent::MoveRight);
        assert_eq!(Intent::from_flags(false, false), Intent::Stop);
    }

    #[test]
    fn test_intent_from_input() {
        let mut input = InputState::new();
        assert_eq!(Intent::from_input(&input), Intent::Stop);

        input.press(Action::MoveRight);
        assert_eq!(Intent::from_input(&input), Intent::MoveRight);

        input.press(Action::MoveLeft);
        assert_eq!(Intent::from_input(&input), Intent::MoveLeft);
    }

    #[test]
    fn test_target_state() {
        assert_eq!(
            CharacterState::target(Intent::MoveLeft, Facing::Right),
            CharacterState::RunningLeft
        );
        assert_eq!(
            CharacterState::target(Intent::MoveRight, Facing::Left),
            CharacterState::RunningRight
        );
        assert_eq!(
            CharacterState::target(Intent::Stop, Facing::Left),
            CharacterState::StandingLeft
        );
        assert_eq!(
            CharacterState::target(Intent::Stop, Facing::Right),
            CharacterState::StandingRight
        );
    }

    #[test]
    fn test_state_facing() {
        assert_eq!(CharacterState::RunningLeft.facing(), Facing::Left);
        assert_eq!(CharacterState::StandingRight.facing(), Facing::Right);
        assert!(CharacterState::RunningRight.is_running());
        assert!(!CharacterState::StandingLeft.is_running());
    }

    #[test]
    fn test_slots_match_table_order() {
        for (i, state) in CharacterState::ALL.iter().enumerate() {
            assert_eq!(state.slot(), i);
        }
    }
}
