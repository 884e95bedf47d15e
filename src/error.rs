//! Error types for the simulator

use thiserror::Error;

/// Why a digit string is not a juggleable pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternFault {
    /// Sum of heights is not a multiple of the period
    NonIntegerAverage { sum: u32, period: usize },
    /// Two throws land on the same beat of the cycle
    Collision { first: usize, second: usize, landing: usize },
}

impl std::fmt::Display for PatternFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternFault::NonIntegerAverage { sum, period } => {
                write!(f, "height sum {sum} is not divisible by period {period}")
            }
            PatternFault::Collision {
                first,
                second,
                landing,
            } => write!(
                f,
                "throws at positions {first} and {second} both land on position {landing}"
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid sequence {text:?}: {reason}")]
    InvalidSequence { text: String, reason: &'static str },

    #[error("sequence {sequence} cannot be juggled: {fault}")]
    UnjugglableSequence { sequence: String, fault: PatternFault },

    #[error("flight must arrive after launch (launch beat {launch}, arrival beat {arrival})")]
    InvalidFlight { launch: i64, arrival: i64 },

    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("could not read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
