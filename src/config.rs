use std::num::NonZeroU64;

use crate::sim::InvalidInput;

pub const DEFAULT_QUANTUM: u64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub quantum: NonZeroU64,
}

impl SimConfig {
    pub fn new(quantum: u64) -> Result<Self, InvalidInput> {
        let quantum = NonZeroU64::new(quantum).ok_or(InvalidInput::ZeroQuantum)?;
        Ok(Self { quantum })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            quantum: NonZeroU64::new(DEFAULT_QUANTUM).expect("default quantum is non-zero"),
        }
    }
}
