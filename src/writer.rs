use std::io::Write;
use tracing::{debug, trace};
use crate::document::SpecDocument;
use crate::models::ClusterSpec;
use crate::{Result, SpecError};

/// Something that can render a cluster spec into an output sink.
///
/// The caller owns the sink: implementations write to it but never close it.
pub trait ClusterSpecWriter {
    fn write(&self, spec: &ClusterSpec, sink: &mut dyn Write) -> Result<()>;

    /// Render into an owned string instead of a sink.
    fn write_to_string(&self, spec: &ClusterSpec) -> Result<String> {
        let mut buf = Vec::new();
        self.write(spec, &mut buf)?;
        String::from_utf8(buf).map_err(|e| SpecError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }
}

/// Writes a cluster spec as a block-style YAML document.
///
/// Holds no state, so one value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlClusterSpecWriter;

impl YamlClusterSpecWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole document in memory. Nothing is written on failure.
    pub fn render(&self, spec: &ClusterSpec) -> Result<String> {
        let document = SpecDocument::from_spec(spec);
        trace!(
            acl = document.acl.is_some(),
            brokers = document.brokers.is_some(),
            topics = document.topics.is_some(),
            "sections selected for output"
        );
        serde_yaml::to_string(&document).map_err(SpecError::Render)
    }
}

impl ClusterSpecWriter for YamlClusterSpecWriter {
    fn write(&self, spec: &ClusterSpec, sink: &mut dyn Write) -> Result<()> {
        let rendered = self.render(spec)?;
        sink.write_all(rendered.as_bytes()).map_err(SpecError::Write)?;
        sink.flush().map_err(SpecError::Write)?;

        debug!(
            brokers = spec.brokers().len(),
            topics = spec.topic_count(),
            acl_users = spec.acl_users().len(),
            bytes = rendered.len(),
            "cluster spec written"
        );
        Ok(())
    }
}
