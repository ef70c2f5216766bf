use crate::error::ConfigError;

/// The largest trigger bank a core may be configured with
pub const MAX_TRIGGERS: usize = 4;

/// Deployment-time parameters of a trigger unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of trigger slots. Zero removes the trigger unit entirely.
    pub triggers: usize,
}
impl Config {
    pub fn new(triggers: usize) -> Result<Self, ConfigError> {
        let config = Self { triggers };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.triggers > MAX_TRIGGERS {
            return Err(ConfigError::TooManyTriggers {
                requested: self.triggers,
                max: MAX_TRIGGERS,
            });
        }
        Ok(())
    }
}
impl Default for Config {
    fn default() -> Self {
        Self { triggers: 1 }
    }
}
