use conf::ConfigError;
use failure::Fail;

use crate::config::diagnostics::Diagnostics;
use crate::config::global::GlobalField;

#[derive(Debug, Fail)]
pub enum LoadError {
    #[fail(display = "No servers set in config")]
    MissingSection,

    #[fail(display = "Server configuration is not a table of hosts, found a {}", found)]
    MalformedSection { found: &'static str },

    #[fail(display = "No topics set for host \"{}\"", host)]
    MissingTopics { host: String },

    #[fail(display = "{} not set", field)]
    MissingField { field: GlobalField },

    #[fail(display = "{} set to invalid value {}", field, value)]
    InvalidValue { field: GlobalField, value: i64 },

    /// The source could not decode or coerce the value stored at `key`.
    #[fail(display = "Could not read \"{}\": {}", key, cause)]
    Source {
        key: String,
        #[cause]
        cause: ConfigError,
    },
}

pub(crate) fn read_failed<D>(diagnostics: &D, key: &str, cause: ConfigError) -> LoadError
where
    D: Diagnostics + ?Sized,
{
    diagnostics.error(format_args!("Could not read \"{}\": {}", key, cause));

    LoadError::Source {
        key: String::from(key),
        cause,
    }
}
