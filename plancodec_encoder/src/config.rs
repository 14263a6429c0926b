use anyhow::{anyhow, Result};
use std::env::{self, VarError};

pub const ENV_VAR_INITIAL_CAPACITY: &str = "PLANCODEC_INITIAL_CAPACITY";

pub const DEFAULT_INITIAL_CAPACITY: usize = 4096;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct EncoderConfig {
    /// Bytes reserved for the output buffer before the walk starts.
    pub initial_capacity: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl EncoderConfig {
    /// Reads [`ENV_VAR_INITIAL_CAPACITY`], falling back to the default when unset.
    pub fn from_env() -> Result<Self> {
        match env::var(ENV_VAR_INITIAL_CAPACITY) {
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(e) => Err(anyhow!(e)),
            Ok(s) => Self::from_capacity_str(&s),
        }
    }

    fn from_capacity_str(s: &str) -> Result<Self> {
        let initial_capacity = s
            .trim()
            .parse::<usize>()
            .map_err(|e| anyhow!("{ENV_VAR_INITIAL_CAPACITY}={s:?}: {e}"))?;
        Ok(Self { initial_capacity })
    }
}
