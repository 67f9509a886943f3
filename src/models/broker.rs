use super::{BrokerId, Configs};

#[derive(Debug, Clone, PartialEq)]
pub struct BrokerResource {
    pub id: BrokerId,
    pub host: String,
    pub port: u16,
    pub rack: Option<String>,
    pub configs: Configs,
}

impl BrokerResource {
    pub fn new(id: BrokerId, host: impl Into<String>, port: u16, rack: Option<String>) -> Self {
        Self {
            id,
            host: host.into(),
            port,
            rack,
            configs: Configs::default(),
        }
    }

    pub fn with_configs(mut self, configs: Configs) -> Self {
        self.configs = configs;
        self
    }
}
