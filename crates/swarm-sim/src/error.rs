use swarm_core::RobotId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("world configuration error: {0}")]
    Config(String),

    #[error("robot {0} not found")]
    RobotNotFound(RobotId),
}

pub type WorldResult<T> = Result<T, WorldError>;
