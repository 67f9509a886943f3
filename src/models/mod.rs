// Type aliases used across models
pub type BrokerId = i32;
pub type TopicName = String;
pub type Principal = String;

// Module declarations
mod acl;
mod broker;
mod cluster;
mod configs;
mod named;
mod topic;

// Re-exports
pub use acl::{AclGroupPolicy, AclOperation, AclResourcePermission, AclUserPolicy, ResourceType};
pub use broker::BrokerResource;
pub use cluster::{ClusterSpec, ClusterSpecBuilder};
pub use configs::{ConfigValue, Configs};
pub use named::{key_by_name, Named};
pub use topic::TopicResource;
