use kafka_specs::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Topic names given on the command line narrow the export
    let names: Vec<String> = std::env::args().skip(1).collect();
    let options = if names.is_empty() {
        ExportOptions::default()
    } else {
        ExportOptions::topics_only(names)
    };

    let spec = create_sample_spec().project(&options);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = YamlClusterSpecWriter.write(&spec, &mut out) {
        eprintln!("Failed to write cluster spec: {}", e);
        std::process::exit(1);
    }
}

fn create_sample_spec() -> ClusterSpec {
    let brokers = (0..3).map(|id| {
        BrokerResource::new(id, format!("kafka-{}", id), 9092, Some(format!("rack-{}", id % 2)))
            .with_configs(Configs::new().with("num.io.threads", 8).with("auto.create.topics.enable", false))
    });

    let topics = vec![
        TopicResource::new("orders", 12, 3).with_configs(
            Configs::new()
                .with("retention.ms", 604_800_000i64)
                .with("cleanup.policy", "delete"),
        ),
        TopicResource::new("payments", 6, 3).with_configs(Configs::new().with("min.insync.replicas", 2)),
        TopicResource::new("customers", 3, 3).with_configs(Configs::new().with("cleanup.policy", "compact")),
    ];

    let consumers = AclGroupPolicy::new(
        "order-consumers",
        vec![AclResourcePermission::new("orders", ResourceType::Topic, vec![AclOperation::Read])],
    );

    let users = vec![
        AclUserPolicy::new("User:billing")
            .with_group("order-consumers")
            .with_permission(AclResourcePermission::new(
                "payments",
                ResourceType::Topic,
                vec![AclOperation::Write, AclOperation::Describe],
            ))
            .with_permission(AclResourcePermission::new(
                "billing-*",
                ResourceType::Group,
                vec![AclOperation::Read],
            )),
    ];

    ClusterSpec::new(brokers, topics, vec![consumers], users)
}
