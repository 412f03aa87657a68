use core_nodl::{Action, Node, Service, ServerRole, Topic, TopicRole};
use core_policy::{convert, qualify, PolicyBuilder, PolicyDocument};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn create_test_nodes(num_nodes: usize, endpoints_per_node: usize) -> Vec<Node> {
    (0..num_nodes)
        .map(|n| {
            let name = format!("node{}", n);
            let mut node = Node::new(name.clone());
            for i in 0..endpoints_per_node {
                node.insert_topic(Topic::new(format!("/topic{}", i), TopicRole::Both));
                node.insert_topic(Topic::new(format!("{}/private{}", name, i), TopicRole::Publisher));
                node.insert_service(Service::new(format!("srv{}", i), ServerRole::Server));
                node.insert_action(Action::new(format!("/act{}", i), ServerRole::Client));
            }
            node
        })
        .collect()
}

fn benchmark_conversion(c: &mut Criterion) {
    let nodes_10 = create_test_nodes(10, 10);
    let nodes_100 = create_test_nodes(100, 10);

    c.bench_function("convert_10_nodes", |b| {
        b.iter(|| convert(PolicyDocument::new(), black_box(&nodes_10)));
    });

    c.bench_function("convert_100_nodes", |b| {
        b.iter(|| convert(PolicyDocument::new(), black_box(&nodes_100)));
    });

    c.bench_function("merge_into_existing_100_nodes", |b| {
        let existing = PolicyBuilder::new().with_nodes(&nodes_100).build();
        b.iter(|| convert(existing.clone(), black_box(&nodes_100)));
    });
}

fn benchmark_qualify(c: &mut Criterion) {
    c.bench_function("qualify_private", |b| {
        b.iter(|| qualify(black_box("listener/status"), black_box("listener")));
    });

    c.bench_function("qualify_absolute", |b| {
        b.iter(|| qualify(black_box("/chatter"), black_box("listener")));
    });
}

criterion_group!(benches, benchmark_conversion, benchmark_qualify);
criterion_main!(benches);
