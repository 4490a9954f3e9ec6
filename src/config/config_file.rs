use conf::{Config, ConfigError, Environment, File};

pub const ENV_PREFIX: &str = "MQTT_BRIDGE";

pub fn read(path: &str) -> Result<Config, ConfigError> {
    read_with_prefix(path, ENV_PREFIX)
}

/// Variables such as `<PREFIX>_INTERVAL` override the matching key from the file.
pub fn read_with_prefix(path: &str, prefix: &str) -> Result<Config, ConfigError> {
    let mut s = Config::new();

    s.merge(File::with_name(path))?;
    s.merge(Environment::with_prefix(prefix))?;

    Ok(s)
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;
    use crate::config::destinations::load_destinations;
    use crate::config::diagnostics::recorder::Recorder;
    use crate::config::global::load_global_config;

    const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/bridge");

    #[test]
    fn test_sample_config() {
        let source = read(SAMPLE).unwrap();

        let destinations = load_destinations(&source, &Recorder::new()).unwrap();
        let global = load_global_config(&source, &Recorder::new()).unwrap();

        assert_eq!(destinations.len(), 2);
        assert_eq!(destinations[0].host, "broker1.example.com");
        assert_eq!(destinations[1].topics, vec!["alerts/#"]);
        assert_eq!(global.interval, 30);
        assert_eq!(global.publish_timeout, 5);
        assert_eq!(global.disconnect_timeout, 10);
    }

    #[test]
    fn test_environment_overrides_file() {
        // Own prefix so other tests reading the sample file are unaffected.
        env::set_var("BRIDGE_OVERRIDE_TEST_INTERVAL", "15");

        let source = read_with_prefix(SAMPLE, "BRIDGE_OVERRIDE_TEST").unwrap();
        let global = load_global_config(&source, &Recorder::new()).unwrap();

        env::remove_var("BRIDGE_OVERRIDE_TEST_INTERVAL");

        assert_eq!(global.interval, 15);
        assert_eq!(global.publish_timeout, 5);
    }

    #[test]
    fn test_missing_file() {
        assert!(read(concat!(env!("CARGO_MANIFEST_DIR"), "/config/missing")).is_err());
    }
}
