//! Turn-order record of an active fight.
//!
//! Participants are stored by name and re-resolved on every access, so the
//! record stays valid when characters move or leave the world mid-fight.

/// Ordered initiative list plus turn pointer.
///
/// # Invariants
///
/// - `0 <= turn_index <= participants.len()`
/// - `turn_index == participants.len()` means the round is complete
/// - `roster` only grows; it records every name that ever took part
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub participants: Vec<String>,
    pub turn_index: usize,
    pub round: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub roster: Vec<String>,
}

impl CombatState {
    /// Starts round 1 with the pointer on the first participant.
    pub fn new(participants: Vec<String>) -> Self {
        Self {
            roster: participants.clone(),
            participants,
            turn_index: 0,
            round: 1,
        }
    }

    /// Name of the participant whose turn it is, if the round is not over.
    pub fn current(&self) -> Option<&str> {
        self.participants.get(self.turn_index).map(String::as_str)
    }

    pub fn is_round_complete(&self) -> bool {
        self.turn_index >= self.participants.len()
    }

    /// Moves the pointer one slot forward, stopping at the round boundary.
    pub fn advance(&mut self) {
        if self.turn_index < self.participants.len() {
            self.turn_index += 1;
        }
    }

    /// Resets the pointer and starts the next round. Returns the new round.
    pub fn wrap_round(&mut self) -> u32 {
        self.turn_index = 0;
        self.round += 1;
        self.round
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|p| p == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Drops `name` from the initiative order.
    ///
    /// A removal before the pointer shifts it back by one so nobody is
    /// skipped or acts twice. Removing an absent name does nothing.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(position) = self.position(name) else {
            return false;
        };
        self.participants.remove(position);
        if position < self.turn_index {
            self.turn_index -= 1;
        }
        true
    }
}

/// How a fight ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombatResult {
    Victory,
    Defeat,
}

/// What remains of a fight once its `CombatState` is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatSummary {
    pub result: CombatResult,
    pub roster: Vec<String>,
    pub rounds: u32,
}

impl CombatSummary {
    pub fn involved(&self, name: &str) -> bool {
        self.roster.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fight(names: &[&str], turn_index: usize) -> CombatState {
        let mut state = CombatState::new(names.iter().map(|n| n.to_string()).collect());
        state.turn_index = turn_index;
        state
    }

    #[test]
    fn removal_before_pointer_shifts_it_back() {
        let mut state = fight(&["Hero", "Goblin", "Orc", "Wolf"], 2);
        assert_eq!(state.current(), Some("Orc"));
        assert!(state.remove("Hero"));
        assert_eq!(state.turn_index, 1);
        assert_eq!(state.current(), Some("Orc"));
    }

    #[test]
    fn removal_at_or_after_pointer_keeps_it() {
        let mut state = fight(&["Hero", "Goblin", "Orc", "Wolf"], 1);
        assert!(state.remove("Goblin"));
        assert_eq!(state.turn_index, 1);
        assert_eq!(state.current(), Some("Orc"));

        assert!(state.remove("Wolf"));
        assert_eq!(state.turn_index, 1);
    }

    #[test]
    fn removing_absent_name_is_a_no_op() {
        let mut state = fight(&["Hero", "Goblin"], 1);
        assert!(!state.remove("Dragon"));
        assert_eq!(state.participants.len(), 2);
        assert_eq!(state.turn_index, 1);
    }

    #[test]
    fn removing_last_slot_at_round_end_stays_in_bounds() {
        let mut state = fight(&["Hero", "Goblin"], 2);
        assert!(state.is_round_complete());
        assert!(state.remove("Goblin"));
        assert_eq!(state.turn_index, 1);
        assert!(state.turn_index <= state.participants.len());
        assert_eq!(state.roster.len(), 2);
    }

    #[test]
    fn wrap_starts_next_round() {
        let mut state = fight(&["Hero", "Goblin"], 0);
        state.advance();
        state.advance();
        state.advance();
        assert_eq!(state.turn_index, 2);
        assert_eq!(state.wrap_round(), 2);
        assert_eq!(state.current(), Some("Hero"));
    }
}
