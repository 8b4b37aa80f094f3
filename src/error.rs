/*
 * Error type for the attach protocol. Each variant wraps exactly one platform
 * status code, so converting back with `status()` yields the code the platform
 * reported. The export layer relies on this to keep failures bit-identical.
 */

use crate::status::Status;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropError {
    /// The panel handle was null, so no capability query was attempted.
    NullPanel,
    /// The panel did not hand out the swap-chain attachment interface.
    CapabilityUnavailable(Status),
    /// The attachment interface rejected the swap chain.
    AttachRejected(Status),
}

impl InteropError {
    pub fn status(self) -> Status {
        match self {
            InteropError::NullPanel => Status::POINTER,
            InteropError::CapabilityUnavailable(status) | InteropError::AttachRejected(status) => {
                status
            }
        }
    }
}

impl fmt::Display for InteropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteropError::NullPanel => write!(f, "panel handle is null"),
            InteropError::CapabilityUnavailable(status) => {
                write!(f, "panel does not support swap chain attachment ({status})")
            }
            InteropError::AttachRejected(status) => {
                write!(f, "panel rejected the swap chain ({status})")
            }
        }
    }
}

impl std::error::Error for InteropError {}

impl From<InteropError> for Status {
    fn from(err: InteropError) -> Self {
        err.status()
    }
}

pub type Result<T> = std::result::Result<T, InteropError>;
