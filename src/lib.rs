// Kafka Cluster Specs Library
// Desired-state model of a Kafka cluster and its YAML projection

pub mod document;
pub mod export;
pub mod models;
pub mod reader;
pub mod writer;

pub use export::ExportOptions;
pub use models::{
    AclGroupPolicy, AclOperation, AclResourcePermission, AclUserPolicy, BrokerResource, ClusterSpec,
    ClusterSpecBuilder, ConfigValue, Configs, ResourceType, TopicResource,
};
pub use reader::{ClusterSpecReader, YamlClusterSpecReader};
pub use writer::{ClusterSpecWriter, YamlClusterSpecWriter};

pub type Result<T, E = SpecError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    #[error("Precondition violated: {0}")]
    Precondition(&'static str),

    #[error("Failed to render cluster spec: {0}")]
    Render(#[source] serde_yaml::Error),

    #[error("Failed to write cluster spec: {0}")]
    Write(#[source] std::io::Error),

    #[error("Failed to parse cluster spec: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("Failed to read cluster spec: {0}")]
    Read(#[source] std::io::Error),
}
