use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use super::{Named, Principal};

/// Kind of resource an ACL rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Topic,
    Group,
    Cluster,
    TransactionalId,
}

/// An operation an ACL rule allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclOperation {
    All,
    Read,
    Write,
    Create,
    Delete,
    Alter,
    Describe,
    ClusterAction,
    DescribeConfigs,
    AlterConfigs,
    IdempotentWrite,
}

/// A grant of operations over the resources matching a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct AclResourcePermission {
    pub pattern: String,
    pub resource_type: ResourceType,
    pub operations: Vec<AclOperation>,
}

impl AclResourcePermission {
    pub fn new(pattern: impl Into<String>, resource_type: ResourceType, operations: Vec<AclOperation>) -> Self {
        Self {
            pattern: pattern.into(),
            resource_type,
            operations,
        }
    }
}

/// Permissions granted to a single principal.
#[derive(Debug, Clone, PartialEq)]
pub struct AclUserPolicy {
    pub principal: Principal,
    pub groups: BTreeSet<String>,
    pub permissions: Vec<AclResourcePermission>,
}

impl AclUserPolicy {
    pub fn new(principal: impl Into<Principal>) -> Self {
        Self {
            principal: principal.into(),
            groups: BTreeSet::new(),
            permissions: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }

    pub fn with_permission(mut self, permission: AclResourcePermission) -> Self {
        self.permissions.push(permission);
        self
    }
}

/// A named set of permissions that user policies join through `groups`.
#[derive(Debug, Clone, PartialEq)]
pub struct AclGroupPolicy {
    pub name: String,
    pub permissions: Vec<AclResourcePermission>,
}

impl AclGroupPolicy {
    pub fn new(name: impl Into<String>, permissions: Vec<AclResourcePermission>) -> Self {
        Self {
            name: name.into(),
            permissions,
        }
    }
}

impl Named for AclGroupPolicy {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_literals() {
        let yaml = serde_yaml::to_string(&ResourceType::TransactionalId).unwrap();
        assert_eq!(yaml.trim(), "TRANSACTIONAL_ID");
        let yaml = serde_yaml::to_string(&AclOperation::DescribeConfigs).unwrap();
        assert_eq!(yaml.trim(), "DESCRIBE_CONFIGS");

        let ops: Vec<AclOperation> = serde_yaml::from_str("[IDEMPOTENT_WRITE, CLUSTER_ACTION, ALL]").unwrap();
        assert_eq!(ops, vec![AclOperation::IdempotentWrite, AclOperation::ClusterAction, AclOperation::All]);
    }

    #[test]
    fn test_user_policy_builder_keeps_order() {
        let read = AclResourcePermission::new("orders", ResourceType::Topic, vec![AclOperation::Read]);
        let all = AclResourcePermission::new("app-*", ResourceType::Group, vec![AclOperation::All]);
        let policy = AclUserPolicy::new("User:alice")
            .with_group("producers")
            .with_group("consumers")
            .with_group("consumers")
            .with_permission(read.clone())
            .with_permission(all.clone());

        assert_eq!(policy.groups.len(), 2);
        assert_eq!(policy.permissions, vec![read, all]);
    }
}
