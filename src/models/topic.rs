use super::{Configs, Named, TopicName};

/// A topic the operator wants to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicResource {
    pub name: TopicName,
    pub partitions: i32,
    pub replication_factor: i16,
    pub configs: Configs,
}

impl TopicResource {
    pub fn new(name: impl Into<TopicName>, partitions: i32, replication_factor: i16) -> Self {
        Self {
            name: name.into(),
            partitions,
            replication_factor,
            configs: Configs::default(),
        }
    }

    pub fn with_configs(mut self, configs: Configs) -> Self {
        self.configs = configs;
        self
    }
}

impl Named for TopicResource {
    fn name(&self) -> &str {
        &self.name
    }
}
