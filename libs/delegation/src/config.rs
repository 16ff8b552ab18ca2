use core::fmt::Debug;

use alloy_primitives::{aliases::B32, Address};

use crate::selector::UNIVERSAL_INITIALIZE_SELECTOR;

/// Deployment parameters of a delegator. Fixed for the lifetime of the
/// deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelegatorConfig {
    initial_implementation: Address,
    guarded_initializer: B32,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroImplementation,
    /// The guarded initializer collides with `initialize(bytes,bytes)`, which
    /// would leave the gate unreachable.
    ReservedSelector,
    MalformedImplementation,
    MalformedSelector,
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroImplementation => write!(f, "ZeroImplementation"),
            Self::ReservedSelector => write!(f, "ReservedSelector"),
            Self::MalformedImplementation => write!(f, "MalformedImplementation"),
            Self::MalformedSelector => write!(f, "MalformedSelector"),
        }
    }
}

impl DelegatorConfig {
    pub fn new(initial_implementation: Address, guarded_initializer: B32) -> Result<Self, ConfigError> {
        if initial_implementation.is_zero() {
            return Err(ConfigError::ZeroImplementation);
        }
        if guarded_initializer == UNIVERSAL_INITIALIZE_SELECTOR {
            return Err(ConfigError::ReservedSelector);
        }
        Ok(Self {
            initial_implementation,
            guarded_initializer,
        })
    }

    /// Parse hex-encoded parameters, with or without the `0x` prefix.
    pub fn parse(initial_implementation: &str, guarded_initializer: &str) -> Result<Self, ConfigError> {
        let initial_implementation = initial_implementation
            .trim()
            .parse::<Address>()
            .map_err(|_| ConfigError::MalformedImplementation)?;
        let guarded_initializer = guarded_initializer
            .trim()
            .parse::<B32>()
            .map_err(|_| ConfigError::MalformedSelector)?;
        Self::new(initial_implementation, guarded_initializer)
    }

    pub fn initial_implementation(&self) -> Address {
        self.initial_implementation
    }

    pub fn guarded_initializer(&self) -> B32 {
        self.guarded_initializer
    }
}
