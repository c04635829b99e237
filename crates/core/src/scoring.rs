//! Scoring module - points for correct and incorrect guesses
//!
//! Rules:
//! - A correct guess earns `reward * occurrences * coefficient`.
//! - An incorrect guess costs `penalty * coefficient`.
//! - The total never drops below zero.

use crate::types::{DEFAULT_PENALTY, DEFAULT_REWARD};

/// Points earned by a correct guess
pub fn calculate_reward(reward: u32, occurrences: usize, coefficient: u32) -> u64 {
    u64::from(reward)
        .saturating_mul(occurrences as u64)
        .saturating_mul(u64::from(coefficient))
}

/// Points lost on an incorrect guess
pub fn calculate_penalty(penalty: u32, coefficient: u32) -> u64 {
    u64::from(penalty).saturating_mul(u64::from(coefficient))
}

/// Running total for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    points: u64,
    reward: u32,
    penalty: u32,
}

impl Scoreboard {
    pub fn new(reward: u32, penalty: u32) -> Self {
        Self {
            points: 0,
            reward,
            penalty,
        }
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn reward(&self) -> u32 {
        self.reward
    }

    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Add the reward for `occurrences` revealed letters; returns the points gained
    pub fn reward_correct_guess(&mut self, occurrences: usize, coefficient: u32) -> u64 {
        let gained = calculate_reward(self.reward, occurrences, coefficient);
        self.points = self.points.saturating_add(gained);
        gained
    }

    /// Subtract the penalty, never going below zero; returns the points actually lost
    pub fn penalize_incorrect_guess(&mut self, coefficient: u32) -> u64 {
        let lost = calculate_penalty(self.penalty, coefficient).min(self.points);
        self.points -= lost;
        lost
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new(DEFAULT_REWARD, DEFAULT_PENALTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_scales_with_count_and_coefficient() {
        assert_eq!(calculate_reward(2, 1, 1), 2);
        assert_eq!(calculate_reward(2, 3, 1), 6);
        assert_eq!(calculate_reward(2, 3, 4), 24);
        assert_eq!(calculate_reward(2, 0, 4), 0);
    }

    #[test]
    fn test_penalty_scales_with_coefficient() {
        assert_eq!(calculate_penalty(1, 1), 1);
        assert_eq!(calculate_penalty(1, 3), 3);
        assert_eq!(calculate_penalty(5, 2), 10);
    }

    #[test]
    fn test_points_never_negative() {
        let mut board = Scoreboard::default();
        assert_eq!(board.penalize_incorrect_guess(4), 0);
        assert_eq!(board.points(), 0);

        board.reward_correct_guess(1, 1);
        assert_eq!(board.points(), 2);
        assert_eq!(board.penalize_incorrect_guess(3), 2);
        assert_eq!(board.points(), 0);
    }

    #[test]
    fn test_default_units() {
        let board = Scoreboard::default();
        assert_eq!(board.reward(), DEFAULT_REWARD);
        assert_eq!(board.penalty(), DEFAULT_PENALTY);
    }
}
