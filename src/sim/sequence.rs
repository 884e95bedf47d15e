//! Cyclic throw-height sequence
//!
//! A siteswap is a string of digits, each the height of one throw in beats.
//! The pattern repeats forever: beat `b` uses `heights[b mod period]`.

use serde::{Deserialize, Serialize};

use crate::error::{PatternFault, SimError, SimResult};

/// Loaded, non-empty throw sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceStore {
    heights: Vec<u32>,
}

impl SequenceStore {
    /// Parse a digit string. Surrounding whitespace is ignored.
    pub fn load(text: &str) -> SimResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SimError::InvalidSequence {
                text: text.to_string(),
                reason: "sequence is empty",
            });
        }

        let heights = trimmed
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| SimError::InvalidSequence {
                text: text.to_string(),
                reason: "only decimal digits are allowed",
            })?;

        Ok(Self { heights })
    }

    /// Throw height for `beat`
    #[inline]
    pub fn height_at(&self, beat: i64) -> u32 {
        let period = self.heights.len() as i64;
        self.heights[beat.rem_euclid(period) as usize]
    }

    #[inline]
    pub fn period(&self) -> usize {
        self.heights.len()
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Average throw height, which for a valid pattern is its object count
    pub fn average(&self) -> f64 {
        self.heights.iter().sum::<u32>() as f64 / self.period() as f64
    }

    /// Objects needed to juggle the pattern, if it is valid
    pub fn object_count(&self) -> Option<u32> {
        self.validate().ok()?;
        Some(self.heights.iter().sum::<u32>() / self.period() as u32)
    }

    /// Check the pattern can be juggled forever.
    ///
    /// The average height must be whole, and throw `i` landing on
    /// `(i + h_i) mod period` must hit every position exactly once. When two
    /// throws share a landing position, that collision happens in every
    /// rotation of the cycle.
    pub fn validate(&self) -> SimResult<()> {
        self.fault().map_or(Ok(()), |fault| {
            Err(SimError::UnjugglableSequence {
                sequence: self.to_string(),
                fault,
            })
        })
    }

    fn fault(&self) -> Option<PatternFault> {
        let period = self.period();
        let sum: u32 = self.heights.iter().sum();
        if sum as usize % period != 0 {
            return Some(PatternFault::NonIntegerAverage { sum, period });
        }

        let mut landed_from: Vec<Option<usize>> = vec![None; period];
        for (i, &h) in self.heights.iter().enumerate() {
            let landing = (i + h as usize) % period;
            if let Some(first) = landed_from[landing] {
                return Some(PatternFault::Collision {
                    first,
                    second: i,
                    landing,
                });
            }
            landed_from[landing] = Some(i);
        }
        None
    }
}

impl std::fmt::Display for SequenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for h in &self.heights {
            write!(f, "{h}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_digits() {
        let seq = SequenceStore::load("531").unwrap();
        assert_eq!(seq.heights(), &[5, 3, 1]);
        assert_eq!(seq.period(), 3);
        assert_eq!(seq.to_string(), "531");
    }

    #[test]
    fn test_load_trims_whitespace() {
        let seq = SequenceStore::load("  441\n").unwrap();
        assert_eq!(seq.heights(), &[4, 4, 1]);
    }

    #[test]
    fn test_load_rejects_bad_text() {
        assert!(matches!(
            SequenceStore::load(""),
            Err(SimError::InvalidSequence { .. })
        ));
        assert!(matches!(
            SequenceStore::load("   "),
            Err(SimError::InvalidSequence { .. })
        ));
        assert!(matches!(
            SequenceStore::load("5a1"),
            Err(SimError::InvalidSequence { .. })
        ));
        assert!(matches!(
            SequenceStore::load("4 4 1"),
            Err(SimError::InvalidSequence { .. })
        ));
        assert!(matches!(
            SequenceStore::load("-3"),
            Err(SimError::InvalidSequence { .. })
        ));
    }

    #[test]
    fn test_height_at_wraps() {
        let seq = SequenceStore::load("531").unwrap();
        assert_eq!(seq.height_at(0), 5);
        assert_eq!(seq.height_at(1), 3);
        assert_eq!(seq.height_at(2), 1);
        assert_eq!(seq.height_at(3), 5);
        assert_eq!(seq.height_at(301), 3);
    }

    #[test]
    fn test_valid_patterns() {
        for text in ["3", "0", "531", "441", "423", "51", "40", "531531441423423"] {
            let seq = SequenceStore::load(text).unwrap();
            assert!(seq.validate().is_ok(), "{text} should be valid");
        }
        assert_eq!(SequenceStore::load("531").unwrap().object_count(), Some(3));
        assert_eq!(SequenceStore::load("441").unwrap().object_count(), Some(3));
        assert_eq!(SequenceStore::load("0").unwrap().object_count(), Some(0));
    }

    #[test]
    fn test_non_integer_average() {
        let seq = SequenceStore::load("21").unwrap();
        match seq.validate() {
            Err(SimError::UnjugglableSequence { fault, .. }) => {
                assert_eq!(fault, PatternFault::NonIntegerAverage { sum: 3, period: 2 });
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(seq.object_count(), None);
    }

    #[test]
    fn test_collision_with_integer_average() {
        // Average is 4 but the 5 and the 4 both land on position 2
        let seq = SequenceStore::load("543").unwrap();
        match seq.validate() {
            Err(SimError::UnjugglableSequence { fault, .. }) => {
                assert!(matches!(fault, PatternFault::Collision { landing: 2, .. }));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
