//! Dice roll results.

/// The result of throwing a [`DiceSpec`](super::DiceSpec).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollResult {
    /// Sides on each die thrown.
    pub sides: u32,
    /// Individual die faces, in throw order.
    pub values: Vec<u32>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u32 {
        self.values.iter().sum()
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// The total a roll must reach to stir an awakening aura: one
    /// maximum face for every two dice, rounded up, and at least one.
    pub fn aura_threshold(&self) -> u32 {
        let half = u32::try_from(self.count().div_ceil(2)).unwrap_or(u32::MAX);
        self.sides.saturating_mul(half.max(1))
    }

    /// Whether the roll is high enough to stir an awakening aura.
    pub fn stirs_aura(&self) -> bool {
        self.total() >= self.aura_threshold()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.values.iter().map(ToString::to_string).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(sides: u32, values: &[u32]) -> RollResult {
        RollResult {
            sides,
            values: values.to_vec(),
        }
    }

    #[test]
    fn total_and_count() {
        let r = make_result(20, &[15, 8]);
        assert_eq!(r.total(), 23);
        assert_eq!(r.count(), 2);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn aura_threshold_rounds_half_up() {
        assert_eq!(make_result(20, &[1]).aura_threshold(), 20);
        assert_eq!(make_result(6, &[1, 1]).aura_threshold(), 6);
        assert_eq!(make_result(6, &[1, 1, 1]).aura_threshold(), 12);
        assert_eq!(make_result(6, &[1, 1, 1, 1]).aura_threshold(), 12);
    }

    #[test]
    fn natural_max_stirs_aura() {
        assert!(make_result(20, &[20]).stirs_aura());
        assert!(!make_result(20, &[19]).stirs_aura());
        assert!(make_result(6, &[6, 1, 5]).stirs_aura());
        assert!(!make_result(6, &[6, 1, 4]).stirs_aura());
    }

    #[test]
    fn display() {
        assert_eq!(make_result(6, &[3, 5]).to_string(), "[3, 5] = 8");
    }
}
