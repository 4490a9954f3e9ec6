use crate::config::diagnostics::Diagnostics;
use crate::config::load_error::{read_failed, LoadError};
use crate::config::source::{ConfigSource, ConfigValue};

const SERVERS: &str = "servers";
const TOPICS: &str = "topics";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MqttDestination {
    pub host: String,
    pub topics: Vec<String>,
}

/// Hosts come back sorted by name. Every host must have a `topics` key, but the list itself may
/// be empty.
pub fn load_destinations<S, D>(
    source: &S,
    diagnostics: &D,
) -> Result<Vec<MqttDestination>, LoadError>
where
    S: ConfigSource + ?Sized,
    D: Diagnostics + ?Sized,
{
    let servers = match source
        .get(SERVERS)
        .map_err(|cause| read_failed(diagnostics, SERVERS, cause))?
    {
        ConfigValue::Mapping(servers) => servers,
        ConfigValue::Absent => {
            diagnostics.error(format_args!("No servers configured"));
            return Err(LoadError::MissingSection);
        }
        other => {
            diagnostics.error(format_args!(
                "Server config is not formatted correctly, expected a mapping of hosts but found a {}",
                other.kind()
            ));
            return Err(LoadError::MalformedSection {
                found: other.kind(),
            });
        }
    };

    let mut destinations = Vec::with_capacity(servers.len());

    // Host names may contain dots, so topics are looked up in the decoded table rather than
    // through a dotted key.
    for (host, host_config) in servers {
        diagnostics.debug(format_args!("Server: {}", host));

        let mut topics = match host_config.entry(TOPICS) {
            Some(topics) if !topics.is_absent() => topics.to_string_sequence().map_err(|cause| {
                read_failed(
                    diagnostics,
                    &format!("{}.{}.{}", SERVERS, host, TOPICS),
                    cause,
                )
            })?,
            _ => {
                diagnostics.error(format_args!("No topics configured for host {}", host));
                return Err(LoadError::MissingTopics { host });
            }
        };

        topics.retain(|topic| !topic.is_empty());

        for topic in &topics {
            diagnostics.debug(format_args!("Topic: {}", topic));
        }

        destinations.push(MqttDestination { host, topics });
    }

    Ok(destinations)
}
