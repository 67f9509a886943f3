use std::collections::HashSet;
use crate::models::{AclGroupPolicy, AclUserPolicy, ClusterSpec, TopicName, TopicResource};

/// Options that control which parts of a spec are exported
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Topics to export. Empty means every topic.
    pub topics: HashSet<TopicName>,

    /// Whether to export brokers
    pub include_brokers: bool,

    /// Whether to export topics
    pub include_topics: bool,

    /// Whether to export ACL group and user policies
    pub include_acls: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            topics: HashSet::new(),
            include_brokers: true,
            include_topics: true,
            include_acls: true,
        }
    }
}

impl ExportOptions {
    /// Export only the named topics, or every topic when `names` is empty
    pub fn topics_only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TopicName>,
    {
        Self {
            topics: names.into_iter().map(Into::into).collect(),
            include_brokers: false,
            include_acls: false,
            ..Default::default()
        }
    }

    pub fn brokers_only() -> Self {
        Self {
            include_topics: false,
            include_acls: false,
            ..Default::default()
        }
    }

    pub fn acls_only() -> Self {
        Self {
            include_brokers: false,
            include_topics: false,
            ..Default::default()
        }
    }
}

impl ClusterSpec {
    /// A new spec holding only what `options` selects.
    pub fn project(&self, options: &ExportOptions) -> ClusterSpec {
        let brokers = if options.include_brokers {
            self.brokers().to_vec()
        } else {
            Vec::new()
        };

        let topics: Vec<TopicResource> = if options.include_topics {
            self.topics_named(&options.topics).into_iter().cloned().collect()
        } else {
            Vec::new()
        };

        let (groups, users): (Vec<AclGroupPolicy>, Vec<AclUserPolicy>) = if options.include_acls {
            (
                self.acl_group_policies().values().cloned().collect(),
                self.acl_users().to_vec(),
            )
        } else {
            (Vec::new(), Vec::new())
        };

        ClusterSpec::new(brokers, topics, groups, users)
    }
}
