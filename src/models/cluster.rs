use std::borrow::Borrow;
use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;
use super::{key_by_name, AclGroupPolicy, AclUserPolicy, BrokerResource, TopicName, TopicResource};
use crate::{Result, SpecError};

/// Desired state of a Kafka cluster: brokers, topics and ACL policies.
///
/// Topics and ACL group policies are unique by name. When two entries share a
/// name the later one in input order replaces the earlier one. Brokers and
/// user policies are kept exactly as given, duplicates included.
///
/// Only the topics can be replaced after construction, see [`ClusterSpec::set_topics`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSpec {
    brokers: Vec<BrokerResource>,
    topics: BTreeMap<TopicName, TopicResource>,
    acl_group_policies: BTreeMap<String, AclGroupPolicy>,
    acl_users: Vec<AclUserPolicy>,
}

impl ClusterSpec {
    pub fn new<B, T, G, U>(brokers: B, topics: T, acl_group_policies: G, acl_users: U) -> Self
    where
        B: IntoIterator<Item = BrokerResource>,
        T: IntoIterator<Item = TopicResource>,
        G: IntoIterator<Item = AclGroupPolicy>,
        U: IntoIterator<Item = AclUserPolicy>,
    {
        Self {
            brokers: brokers.into_iter().collect(),
            topics: key_by_name(topics),
            acl_group_policies: key_by_name(acl_group_policies),
            acl_users: acl_users.into_iter().collect(),
        }
    }

    /// Start a spec whose collections must each be supplied before `build`.
    pub fn builder() -> ClusterSpecBuilder {
        ClusterSpecBuilder::default()
    }

    /// A spec holding only topics.
    pub fn with_topics(topics: impl IntoIterator<Item = TopicResource>) -> Self {
        Self::new(Vec::new(), topics, Vec::new(), Vec::new())
    }

    /// A spec holding only brokers.
    pub fn with_brokers(brokers: impl IntoIterator<Item = BrokerResource>) -> Self {
        Self::new(brokers, Vec::new(), Vec::new(), Vec::new())
    }

    /// A spec holding only ACL user policies.
    pub fn with_user_policies(acl_users: impl IntoIterator<Item = AclUserPolicy>) -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), acl_users)
    }

    /// A spec holding only ACL group policies.
    pub fn with_group_policies(acl_group_policies: impl IntoIterator<Item = AclGroupPolicy>) -> Self {
        Self::new(Vec::new(), Vec::new(), acl_group_policies, Vec::new())
    }

    /// All topics, in no guaranteed order.
    pub fn topics(&self) -> Vec<&TopicResource> {
        self.topics.values().collect()
    }

    /// Topics accepted by `predicate`. `None` applies no filter.
    pub fn topics_matching(&self, predicate: Option<&dyn Fn(&TopicResource) -> bool>) -> Vec<&TopicResource> {
        match predicate {
            None => self.topics(),
            Some(predicate) => self.topics.values().filter(|t| predicate(t)).collect(),
        }
    }

    /// Topics whose name is in `names`. An empty set applies no filter.
    pub fn topics_named<S>(&self, names: &HashSet<S>) -> Vec<&TopicResource>
    where
        S: Borrow<str> + Hash + Eq,
    {
        if names.is_empty() {
            return self.topics();
        }
        self.topics
            .values()
            .filter(|t| names.contains(t.name.as_str()))
            .collect()
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn topic(&self, name: &str) -> Option<&TopicResource> {
        self.topics.get(name)
    }

    /// Replace every topic. Duplicate names in `topics` collapse to the last one.
    pub fn set_topics(&mut self, topics: impl IntoIterator<Item = TopicResource>) {
        self.topics = key_by_name(topics);
    }

    pub fn brokers(&self) -> &[BrokerResource] {
        &self.brokers
    }

    pub fn acl_group_policies(&self) -> &BTreeMap<String, AclGroupPolicy> {
        &self.acl_group_policies
    }

    pub fn acl_users(&self) -> &[AclUserPolicy] {
        &self.acl_users
    }

    pub fn is_empty(&self) -> bool {
        self.brokers.is_empty()
            && self.topics.is_empty()
            && self.acl_group_policies.is_empty()
            && self.acl_users.is_empty()
    }
}

/// Assembles a [`ClusterSpec`] from collections that may not have been provided.
///
/// An empty collection is valid. A collection that was never set is an error.
#[derive(Debug, Default)]
pub struct ClusterSpecBuilder {
    brokers: Option<Vec<BrokerResource>>,
    topics: Option<Vec<TopicResource>>,
    acl_group_policies: Option<Vec<AclGroupPolicy>>,
    acl_users: Option<Vec<AclUserPolicy>>,
}

impl ClusterSpecBuilder {
    pub fn brokers(mut self, brokers: impl IntoIterator<Item = BrokerResource>) -> Self {
        self.brokers = Some(brokers.into_iter().collect());
        self
    }

    pub fn topics(mut self, topics: impl IntoIterator<Item = TopicResource>) -> Self {
        self.topics = Some(topics.into_iter().collect());
        self
    }

    pub fn acl_group_policies(mut self, policies: impl IntoIterator<Item = AclGroupPolicy>) -> Self {
        self.acl_group_policies = Some(policies.into_iter().collect());
        self
    }

    pub fn acl_users(mut self, policies: impl IntoIterator<Item = AclUserPolicy>) -> Self {
        self.acl_users = Some(policies.into_iter().collect());
        self
    }

    pub fn build(self) -> Result<ClusterSpec> {
        let brokers = self.brokers.ok_or(SpecError::Precondition("brokers cannot be absent"))?;
        let topics = self.topics.ok_or(SpecError::Precondition("topics cannot be absent"))?;
        let acl_group_policies = self
            .acl_group_policies
            .ok_or(SpecError::Precondition("aclGroupPolicies cannot be absent"))?;
        let acl_users = self.acl_users.ok_or(SpecError::Precondition("aclUsers cannot be absent"))?;
        Ok(ClusterSpec::new(brokers, topics, acl_group_policies, acl_users))
    }
}
