//! The on-disk shape of a cluster spec.
//!
//! ```yaml
//! acl:
//!   access-policies:
//!     - principal: User:alice
//!       groups: [consumers]
//!       permissions:
//!         - resource: { pattern: orders, type: TOPIC }
//!           allow-operations: [READ, DESCRIBE]
//! brokers:
//!   - id: 0
//!     host: kafka-0
//!     port: 9092
//!     rack: eu-west-1a
//!     configs: {}
//! topics:
//!   - name: orders
//!     partitions: 3
//!     replication-factor: 2
//!     configs:
//!       retention.ms: '60000'
//! ```
//!
//! Every top-level section is optional. The writer omits a section whose
//! collection is empty, and the reader treats a missing section as empty.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::collections::{BTreeMap, BTreeSet};
use crate::models::{
    AclOperation, AclResourcePermission, AclUserPolicy, BrokerId, BrokerResource, ClusterSpec, Configs,
    ResourceType, TopicResource,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acl: Option<AclDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokers: Option<Vec<BrokerDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<TopicDocument>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AclDocument {
    #[serde(default)]
    pub access_policies: Vec<UserPolicyDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPolicyDocument {
    pub principal: String,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<PermissionDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PermissionDocument {
    pub resource: ResourceDocument,
    #[serde(default)]
    pub allow_operations: Vec<AclOperation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDocument {
    pub pattern: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerDocument {
    pub id: BrokerId,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rack: Option<String>,
    #[serde(default, deserialize_with = "string_configs")]
    pub configs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TopicDocument {
    pub name: String,
    pub partitions: i32,
    pub replication_factor: i16,
    #[serde(default, deserialize_with = "string_configs")]
    pub configs: BTreeMap<String, String>,
}

/// Read config values as text, whatever scalar type the document used.
///
/// Integers anywhere in the signed or unsigned 64-bit range keep their exact
/// digits. A null value reads as an empty string. Sequences, mappings and
/// tagged values are rejected.
fn string_configs<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
    raw.into_iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                _ => return Err(D::Error::custom(format!("config `{}` must be a scalar value", key))),
            };
            Ok((key, text))
        })
        .collect()
}

fn into_configs(configs: BTreeMap<String, String>) -> Configs {
    configs.into_iter().collect()
}

impl SpecDocument {
    /// Project a spec, emitting only the sections whose collection is non-empty.
    pub fn from_spec(spec: &ClusterSpec) -> Self {
        let mut document = SpecDocument::default();

        let users = spec.acl_users();
        if !users.is_empty() {
            document.acl = Some(AclDocument {
                access_policies: users.iter().map(UserPolicyDocument::from).collect(),
            });
        }

        let brokers = spec.brokers();
        if !brokers.is_empty() {
            document.brokers = Some(brokers.iter().map(BrokerDocument::from).collect());
        }

        let topics = spec.topics();
        if !topics.is_empty() {
            document.topics = Some(topics.into_iter().map(TopicDocument::from).collect());
        }

        document
    }

    /// Build a spec from the document. Missing sections become empty collections.
    pub fn into_spec(self) -> ClusterSpec {
        let users = self.acl.map(|acl| acl.access_policies).unwrap_or_default();
        ClusterSpec::new(
            self.brokers.unwrap_or_default().into_iter().map(BrokerResource::from),
            self.topics.unwrap_or_default().into_iter().map(TopicResource::from),
            Vec::new(),
            users.into_iter().map(AclUserPolicy::from),
        )
    }
}

impl From<&AclUserPolicy> for UserPolicyDocument {
    fn from(policy: &AclUserPolicy) -> Self {
        Self {
            principal: policy.principal.clone(),
            groups: policy.groups.iter().cloned().collect(),
            permissions: policy.permissions.iter().map(PermissionDocument::from).collect(),
        }
    }
}

impl From<UserPolicyDocument> for AclUserPolicy {
    fn from(doc: UserPolicyDocument) -> Self {
        Self {
            principal: doc.principal,
            groups: doc.groups.into_iter().collect::<BTreeSet<_>>(),
            permissions: doc.permissions.into_iter().map(AclResourcePermission::from).collect(),
        }
    }
}

impl From<&AclResourcePermission> for PermissionDocument {
    fn from(permission: &AclResourcePermission) -> Self {
        Self {
            resource: ResourceDocument {
                pattern: permission.pattern.clone(),
                resource_type: permission.resource_type,
            },
            allow_operations: permission.operations.clone(),
        }
    }
}

impl From<PermissionDocument> for AclResourcePermission {
    fn from(doc: PermissionDocument) -> Self {
        AclResourcePermission::new(doc.resource.pattern, doc.resource.resource_type, doc.allow_operations)
    }
}

impl From<&BrokerResource> for BrokerDocument {
    fn from(broker: &BrokerResource) -> Self {
        Self {
            id: broker.id,
            host: broker.host.clone(),
            port: broker.port,
            rack: broker.rack.clone(),
            configs: broker.configs.as_string_map(),
        }
    }
}

impl From<BrokerDocument> for BrokerResource {
    fn from(doc: BrokerDocument) -> Self {
        BrokerResource::new(doc.id, doc.host, doc.port, doc.rack).with_configs(into_configs(doc.configs))
    }
}

impl From<&TopicResource> for TopicDocument {
    fn from(topic: &TopicResource) -> Self {
        Self {
            name: topic.name.clone(),
            partitions: topic.partitions,
            replication_factor: topic.replication_factor,
            configs: topic.configs.as_string_map(),
        }
    }
}

impl From<TopicDocument> for TopicResource {
    fn from(doc: TopicDocument) -> Self {
        TopicResource::new(doc.name, doc.partitions, doc.replication_factor).with_configs(into_configs(doc.configs))
    }
}
