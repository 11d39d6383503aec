use swarm_core::{GridPoint, RobotId};
use swarm_policy::PolicyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match robot count {expected}")]
    RobotCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("robot {robot} placed on blocked or out-of-field cell {at}")]
    InvalidPlacement { robot: RobotId, at: GridPoint },

    #[error("policy error: {0}")]
    Policy(#[from] PolicyError),
}

pub type SimResult<T> = Result<T, SimError>;
