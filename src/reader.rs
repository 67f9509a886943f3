use std::io::Read;
use tracing::debug;
use crate::document::SpecDocument;
use crate::models::ClusterSpec;
use crate::{Result, SpecError};

/// Something that can build a cluster spec from a document.
pub trait ClusterSpecReader {
    fn read(&self, source: &mut dyn Read) -> Result<ClusterSpec>;
}

/// Reads the YAML documents produced by [`crate::YamlClusterSpecWriter`].
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlClusterSpecReader;

impl YamlClusterSpecReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_str(&self, input: &str) -> Result<ClusterSpec> {
        let document: SpecDocument = serde_yaml::from_str(input).map_err(SpecError::Parse)?;
        let spec = document.into_spec();
        debug!(
            brokers = spec.brokers().len(),
            topics = spec.topic_count(),
            acl_users = spec.acl_users().len(),
            "cluster spec read"
        );
        Ok(spec)
    }
}

impl ClusterSpecReader for YamlClusterSpecReader {
    fn read(&self, source: &mut dyn Read) -> Result<ClusterSpec> {
        let mut input = String::new();
        source.read_to_string(&mut input).map_err(SpecError::Read)?;
        self.read_str(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;
    use crate::writer::{ClusterSpecWriter, YamlClusterSpecWriter};
    use pretty_assertions::assert_eq;
    use std::io;

    fn sample_spec() -> ClusterSpec {
        ClusterSpec::new(
            vec![
                BrokerResource::new(0, "kafka-0", 9092, Some("rack-a".into())),
                BrokerResource::new(1, "kafka-1", 9092, None).with_configs(Configs::new().with("log.dirs", "/data")),
            ],
            vec![
                TopicResource::new("orders", 3, 2).with_configs(Configs::new().with("retention.ms", "60000")),
                TopicResource::new("payments", 12, 3),
            ],
            Vec::new(),
            vec![AclUserPolicy::new("User:alice")
                .with_group("consumers")
                .with_permission(AclResourcePermission::new(
                    "orders",
                    ResourceType::Topic,
                    vec![AclOperation::Read, AclOperation::Describe],
                ))],
        )
    }

    #[test]
    fn test_round_trip() {
        let spec = sample_spec();
        let yaml = YamlClusterSpecWriter.write_to_string(&spec).unwrap();
        let read = YamlClusterSpecReader.read(&mut yaml.as_bytes()).unwrap();

        assert_eq!(read, spec);
    }

    #[test]
    fn test_round_trip_stringifies_configs() {
        let topic = TopicResource::new("events", 6, 3)
            .with_configs(Configs::new().with("retention.ms", 60000i64).with("preallocate", true));
        let yaml = YamlClusterSpecWriter.write_to_string(&ClusterSpec::with_topics(vec![topic.clone()])).unwrap();
        let read = YamlClusterSpecReader.read_str(&yaml).unwrap();

        let read_topic = read.topic("events").unwrap();
        assert_eq!(read_topic.configs.as_string_map(), topic.configs.as_string_map());
        assert_eq!(read_topic.configs.get("retention.ms"), Some(&ConfigValue::String("60000".into())));
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let spec = YamlClusterSpecReader
            .read_str("topics:\n- name: orders\n  partitions: 3\n  replication-factor: 2\n")
            .unwrap();

        assert!(spec.brokers().is_empty());
        assert!(spec.acl_users().is_empty());
        assert!(spec.acl_group_policies().is_empty());
        assert_eq!(spec.topic("orders").map(|t| t.configs.is_empty()), Some(true));
    }

    #[test]
    fn test_duplicate_topics_last_wins() {
        let yaml = "\
topics:
- name: orders
  partitions: 1
  replication-factor: 1
- name: orders
  partitions: 6
  replication-factor: 3
";
        let spec = YamlClusterSpecReader.read_str(yaml).unwrap();
        assert_eq!(spec.topics().len(), 1);
        assert_eq!(spec.topic("orders").map(|t| t.partitions), Some(6));
    }

    #[test]
    fn test_invalid_document() {
        let result = YamlClusterSpecReader.read_str("topics:\n- name: orders\n  partitions: many\n");
        assert!(matches!(result, Err(SpecError::Parse(_))));

        let result = YamlClusterSpecReader.read_str(
            "acl:\n  access-policies:\n  - principal: User:bob\n    permissions:\n    - resource: {pattern: x, type: BOGUS}\n",
        );
        assert!(matches!(result, Err(SpecError::Parse(_))));
    }

    #[test]
    fn test_config_scalars_read_as_text() {
        let yaml = "\
topics:
- name: orders
  partitions: 3
  replication-factor: 2
  configs:
    max.value: 18446744073709551615
    min.value: -9223372036854775808
    unset: null
    enabled: true
    policy: compact
";
        let spec = YamlClusterSpecReader.read_str(yaml).unwrap();
        let configs = spec.topic("orders").unwrap().configs.as_string_map();

        assert_eq!(configs["max.value"], "18446744073709551615");
        assert_eq!(configs["min.value"], "-9223372036854775808");
        assert_eq!(configs["unset"], "");
        assert_eq!(configs["enabled"], "true");
        assert_eq!(configs["policy"], "compact");
    }

    #[test]
    fn test_nested_config_value_rejected() {
        let result = YamlClusterSpecReader.read_str(
            "brokers:\n- id: 0\n  host: kafka-0\n  port: 9092\n  configs:\n    log.dirs: [/a, /b]\n",
        );
        assert!(matches!(result, Err(SpecError::Parse(_))));
    }

    #[test]
    fn test_null_configs_section_is_empty() {
        let spec = YamlClusterSpecReader
            .read_str("topics:\n- name: orders\n  partitions: 3\n  replication-factor: 2\n  configs:\n")
            .unwrap();
        assert_eq!(spec.topic("orders").map(|t| t.configs.is_empty()), Some(true));
    }

    struct FailingSource;

    impl io::Read for FailingSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
        }
    }

    #[test]
    fn test_source_failure_is_reported() {
        let result = YamlClusterSpecReader.read(&mut FailingSource);
        assert!(matches!(result, Err(SpecError::Read(_))));
    }
}
