//! # Talker / Listener Example
//!
//! Builds the permission tree for the classic ROS 2 demo pair and walks it.
//!
//! ## Run
//!
//! ```bash
//! cargo run -p core-policy --example talker_listener
//! ```

use core_nodl::{Node, Service, ServerRole, Topic, TopicRole};
use core_policy::PolicyBuilder;

fn main() {
    let talker = Node::new("talker")
        .with_executable("talker")
        .with_topic(Topic::new("/chatter", TopicRole::Publisher).with_type("std_msgs/msg/String"))
        .with_topic(Topic::new("/rosout", TopicRole::Publisher));

    let listener = Node::new("listener")
        .with_executable("listener")
        .with_topic(Topic::new("/chatter", TopicRole::Subscriber).with_type("std_msgs/msg/String"))
        .with_topic(Topic::new("listener/status", TopicRole::Both))
        .with_service(Service::new("listener/reset", ServerRole::Server));

    let policy = PolicyBuilder::new()
        .with_node(&talker)
        .with_node(&listener)
        .build();

    println!("policy version {}", policy.version());
    for enclave in policy.enclaves() {
        println!("enclave path={:?}", enclave.path());
        for profile in enclave.profiles() {
            println!("  profile ns={:?} node={:?}", profile.namespace(), profile.node());
            for category in profile.categories() {
                let grants: Vec<String> = category
                    .grants()
                    .iter()
                    .map(|g| format!("{}={}", g.rule, g.expression))
                    .collect();
                println!("    {} [{}]", category.kind(), grants.join(" "));
                for entry in category.entries() {
                    println!("      {}", entry);
                }
            }
        }
    }
}
