use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use crate::config::diagnostics::Diagnostics;
use crate::config::load_error::{read_failed, LoadError};
use crate::config::source::ConfigSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalField {
    Interval,
    PublishTimeout,
    DisconnectTimeout,
}

impl GlobalField {
    pub fn key(self) -> &'static str {
        match self {
            GlobalField::Interval => "interval",
            GlobalField::PublishTimeout => "publishtimeout",
            GlobalField::DisconnectTimeout => "disconnecttimeout",
        }
    }

    fn label(self) -> &'static str {
        match self {
            GlobalField::Interval => "Interval",
            GlobalField::PublishTimeout => "Publish timeout",
            GlobalField::DisconnectTimeout => "Disconnect timeout",
        }
    }
}

impl Display for GlobalField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// All in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    pub interval: u64,
    pub publish_timeout: u64,
    pub disconnect_timeout: u64,
}

impl GlobalConfig {
    pub fn interval_duration(&self) -> Duration {
        Duration::from_secs(self.interval)
    }

    pub fn publish_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.publish_timeout)
    }

    pub fn disconnect_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.disconnect_timeout)
    }
}

pub fn load_global_config<S, D>(source: &S, diagnostics: &D) -> Result<GlobalConfig, LoadError>
where
    S: ConfigSource + ?Sized,
    D: Diagnostics + ?Sized,
{
    Ok(GlobalConfig {
        interval: read_positive(source, diagnostics, GlobalField::Interval)?,
        publish_timeout: read_positive(source, diagnostics, GlobalField::PublishTimeout)?,
        disconnect_timeout: read_positive(source, diagnostics, GlobalField::DisconnectTimeout)?,
    })
}

fn read_positive<S, D>(source: &S, diagnostics: &D, field: GlobalField) -> Result<u64, LoadError>
where
    S: ConfigSource + ?Sized,
    D: Diagnostics + ?Sized,
{
    let key = field.key();

    if !source
        .is_set(key)
        .map_err(|cause| read_failed(diagnostics, key, cause))?
    {
        diagnostics.error(format_args!("{} not configured", field.label()));
        return Err(LoadError::MissingField { field });
    }

    let value = source
        .get_int(key)
        .map_err(|cause| read_failed(diagnostics, key, cause))?;

    if value <= 0 {
        diagnostics.error(format_args!(
            "{} set to invalid value: {}",
            field.label(),
            value
        ));
        return Err(LoadError::InvalidValue { field, value });
    }

    diagnostics.debug(format_args!("{} set to: {}", field.label(), value));

    Ok(value as u64)
}
