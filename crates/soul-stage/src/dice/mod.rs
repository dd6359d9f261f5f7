//! Dice specs and rolling.
//!
//! Specs use the familiar `NdS` notation (`d20`, `3d6`). Parsing is
//! forgiving: a missing or zero count means one die, a missing or zero
//! side count means a d20, and anything after the digits of a component is
//! ignored. Only negative or oversized components are rejected.

pub mod roll;

pub use roll::RollResult;

use crate::error::{StageError, StageResult};
use crate::random::RandomSource;

/// Largest number of dice a single roll may throw.
pub const MAX_DICE: u32 = 100;

/// Largest number of sides a die may have.
pub const MAX_SIDES: u32 = 1000;

/// Spec used when a roll names none.
pub const DEFAULT_SPEC: &str = "d20";

/// A parsed `NdS` dice spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    /// How many dice to throw.
    pub count: u32,
    /// Sides on each die.
    pub sides: u32,
}

impl Default for DiceSpec {
    fn default() -> Self {
        Self { count: 1, sides: 20 }
    }
}

impl DiceSpec {
    /// Parse a spec like `"d20"`, `"3d6"` or `" 2D8 "`.
    pub fn parse(spec: &str) -> StageResult<Self> {
        let lower = spec.trim().to_lowercase();
        let mut parts = lower.split('d');
        let count = component(spec, parts.next(), 1, MAX_DICE)?;
        let sides = component(spec, parts.next(), 20, MAX_SIDES)?;
        Ok(Self { count, sides })
    }

    /// Throw every die in the spec.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> RollResult {
        let values = (0..self.count).map(|_| rng.roll_die(self.sides)).collect();
        RollResult {
            sides: self.sides,
            values,
        }
    }
}

impl std::fmt::Display for DiceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

fn component(spec: &str, raw: Option<&str>, default: u32, cap: u32) -> StageResult<u32> {
    match raw.and_then(leading_int) {
        None | Some(0) => Ok(default),
        Some(n) if n < 0 => Err(StageError::DiceParse(format!(
            "'{spec}' has a negative component"
        ))),
        Some(n) if n > i64::from(cap) => Err(StageError::DiceParse(format!(
            "'{spec}' exceeds the limit of {cap}"
        ))),
        Some(n) => u32::try_from(n)
            .map_err(|_| StageError::DiceParse(format!("'{spec}' is out of range"))),
    }
}

/// Read an optionally signed integer from the start of `s`, ignoring
/// whatever follows the digits. Returns `None` if there are no digits.
///
/// Digit runs too long for an `i64` saturate rather than fail.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
