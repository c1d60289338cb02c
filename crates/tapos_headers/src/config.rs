use serde::{Deserialize, Serialize};
use tapos_error::TaposError;

pub const DEFAULT_EXPIRE_SECONDS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Seconds between the head block time and the transaction expiration.
    pub expire_in_seconds: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            expire_in_seconds: DEFAULT_EXPIRE_SECONDS,
        }
    }
}

impl HeaderConfig {
    pub const EXPIRE_SECONDS_ENV: &'static str = "TAPOS_EXPIRE_SECONDS";

    pub fn new(expire_in_seconds: u32) -> Result<Self, TaposError> {
        let config = Self { expire_in_seconds };
        config.validate()?;
        Ok(config)
    }

    /// Reads `TAPOS_EXPIRE_SECONDS`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, TaposError> {
        match std::env::var(Self::EXPIRE_SECONDS_ENV) {
            Ok(value) => Self::from_env_value(Some(&value)),
            Err(std::env::VarError::NotPresent) => Self::from_env_value(None),
            Err(e) => Err(TaposError::InvalidArgument(format!(
                "{}: {e}",
                Self::EXPIRE_SECONDS_ENV
            ))),
        }
    }

    fn from_env_value(value: Option<&str>) -> Result<Self, TaposError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };
        let expire_in_seconds = value.trim().parse::<u32>().map_err(|e| {
            TaposError::InvalidArgument(format!(
                "{}={value:?} is not a number of seconds: {e}",
                Self::EXPIRE_SECONDS_ENV
            ))
        })?;
        Self::new(expire_in_seconds)
    }

    pub fn validate(&self) -> Result<(), TaposError> {
        validate_expiration(self.expire_in_seconds)
    }
}

pub(crate) fn validate_expiration(expire_in_seconds: u32) -> Result<(), TaposError> {
    if expire_in_seconds == 0 {
        return Err(TaposError::InvalidArgument(
            "expire_in_seconds must be greater than zero".into(),
        ));
    }
    Ok(())
}
