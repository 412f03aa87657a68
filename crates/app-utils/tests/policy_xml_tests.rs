//! Integration tests for the policy XML codec

use app_utils::{dump_policy, parse_nodl, parse_policy, policy_to_string, Error};
use core_nodl::{Node, Service, ServerRole, Topic, TopicRole};
use core_policy::{
    CategoryKind, Grant, PolicyBuilder, PolicyDocument, RuleExpression, RuleKind,
};

const EMPTY_POLICY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<policy version="0.2.0">
  <enclaves/>
</policy>
"#;

const TALKER_POLICY: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<policy version="0.2.0">
  <enclaves>
    <enclave path="">
      <profiles>
        <profile ns="" node="talker">
          <topics publish="ALLOW">
            <topic>chatter</topic>
          </topics>
        </profile>
      </profiles>
    </enclave>
  </enclaves>
</policy>
"#;

const HAND_WRITTEN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- maintained by hand -->
<policy version="0.2.0">
  <enclaves>
    <enclave path="/robot">
      <profiles>
        <profile ns="/" node="camera">
          <topics publish="ALLOW" subscribe="ALLOW">
            <topic>rosout</topic>
            <topic>parameter_events</topic>
          </topics>
          <services reply="DENY">
            <service>~/shutdown</service>
          </services>
        </profile>
      </profiles>
    </enclave>
  </enclaves>
</policy>
"#;

fn talker() -> Node {
    Node::new("talker").with_topic(Topic::new("/chatter", TopicRole::Publisher))
}

#[test]
fn test_dump_empty_document() {
    let xml = policy_to_string(&PolicyDocument::new()).unwrap();
    assert_eq!(xml, EMPTY_POLICY);
}

#[test]
fn test_dump_talker() {
    let policy = PolicyBuilder::new().with_node(&talker()).build();

    let xml = policy_to_string(&policy).unwrap();
    assert_eq!(xml, TALKER_POLICY);
}

#[test]
fn test_dump_to_writer_matches_string() {
    let policy = PolicyBuilder::new().with_node(&talker()).build();

    let mut buffer = Vec::new();
    dump_policy(&policy, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), TALKER_POLICY);
}

#[test]
fn test_parse_talker() {
    let policy = parse_policy(TALKER_POLICY).unwrap();
    let expected = PolicyBuilder::new().with_node(&talker()).build();

    assert_eq!(policy, expected);
}

#[test]
fn test_parse_empty_document() {
    let policy = parse_policy(EMPTY_POLICY).unwrap();

    assert_eq!(policy.version(), "0.2.0");
    assert!(policy.enclaves().is_empty());
}

#[test]
fn test_round_trip_generated_policy() {
    let server = Node::new("server")
        .with_topic(Topic::new("server/state", TopicRole::Both))
        .with_service(Service::new("/add", ServerRole::Server));
    let policy = PolicyBuilder::new()
        .with_node(&talker())
        .with_node(&server)
        .build();

    let reloaded = parse_policy(&policy_to_string(&policy).unwrap()).unwrap();
    assert_eq!(reloaded, policy);
}

#[test]
fn test_parse_preserves_multi_grant_and_deny() {
    let policy = parse_policy(HAND_WRITTEN).unwrap();
    let profile = policy.enclave("/robot").unwrap().profile("/", "camera").unwrap();

    assert_eq!(profile.categories().len(), 2);

    let topics = &profile.categories()[0];
    assert_eq!(topics.kind(), CategoryKind::Topic);
    assert_eq!(
        topics.grants(),
        [Grant::allow(RuleKind::Publish), Grant::allow(RuleKind::Subscribe)]
    );
    assert_eq!(topics.entries(), ["rosout", "parameter_events"]);

    let deny = Grant::new(RuleKind::Reply, RuleExpression::Deny);
    let services = profile.permission_category(deny).unwrap();
    assert_eq!(services.entries(), ["~/shutdown"]);
    assert!(profile.permission_category(Grant::allow(RuleKind::Reply)).is_none());
}

#[test]
fn test_multi_grant_category_serves_both_lookups() {
    let policy = parse_policy(HAND_WRITTEN).unwrap();
    let profile = policy.enclave("/robot").unwrap().profile("/", "camera").unwrap();

    let publish = profile.permission_category(Grant::allow(RuleKind::Publish)).unwrap();
    let subscribe = profile.permission_category(Grant::allow(RuleKind::Subscribe)).unwrap();
    assert!(std::ptr::eq(publish, subscribe));
}

#[test]
fn test_hand_written_survives_round_trip() {
    let policy = parse_policy(HAND_WRITTEN).unwrap();
    let xml = policy_to_string(&policy).unwrap();

    assert!(xml.contains(r#"<topics publish="ALLOW" subscribe="ALLOW">"#));
    assert!(xml.contains(r#"<services reply="DENY">"#));
    assert_eq!(parse_policy(&xml).unwrap(), policy);
}

#[test]
fn test_duplicate_profiles_are_merged() {
    let xml = r#"<policy version="0.2.0">
      <enclaves>
        <enclave path="">
          <profiles>
            <profile ns="" node="a"><topics publish="ALLOW"><topic>x</topic></topics></profile>
            <profile ns="" node="b"/>
          </profiles>
        </enclave>
        <enclave path="">
          <profiles>
            <profile ns="" node="a"><topics subscribe="ALLOW"><topic>y</topic></topics></profile>
          </profiles>
        </enclave>
      </enclaves>
    </policy>"#;

    let policy = parse_policy(xml).unwrap();
    assert_eq!(policy.enclaves().len(), 1);
    assert_eq!(policy.profile_count(), 2);

    let profile = policy.enclave("").unwrap().profile("", "a").unwrap();
    assert_eq!(profile.categories().len(), 2);
    assert_eq!(
        profile.permission_category(Grant::allow(RuleKind::Subscribe)).unwrap().entries(),
        ["y"]
    );
}

#[test]
fn test_escaped_text_round_trips() {
    let xml = r#"<policy version="0.2.0"><enclaves><enclave path="a&amp;b"><profiles>
        <profile ns="" node="n"><topics publish="ALLOW"><topic>x&lt;y</topic></topics></profile>
        </profiles></enclave></enclaves></policy>"#;

    let policy = parse_policy(xml).unwrap();
    let profile = policy.enclave("a&b").unwrap().profile("", "n").unwrap();
    assert_eq!(profile.categories()[0].entries(), ["x<y"]);

    let reloaded = parse_policy(&policy_to_string(&policy).unwrap()).unwrap();
    assert_eq!(reloaded, policy);
}

#[test]
fn test_reject_unsupported_version() {
    let err = parse_policy(r#"<policy version="0.1.0"><enclaves/></policy>"#).unwrap_err();

    match err {
        Error::UnsupportedPolicyVersion { found, expected } => {
            assert_eq!(found, "0.1.0");
            assert_eq!(expected, "0.2.0");
        }
        other => panic!("Expected UnsupportedPolicyVersion, got {other:?}"),
    }
}

#[test]
fn test_reject_missing_version() {
    let err = parse_policy("<policy><enclaves/></policy>").unwrap_err();
    assert!(matches!(err, Error::InvalidPolicy(ref msg) if msg.contains("version")));
}

#[test]
fn test_reject_wrong_root() {
    let err = parse_policy(r#"<permissions version="0.2.0"/>"#).unwrap_err();
    assert!(matches!(err, Error::InvalidPolicy(_)));
}

#[test]
fn test_reject_invalid_content() {
    let wrap = |category: &str| {
        format!(
            r#"<policy version="0.2.0"><enclaves><enclave path=""><profiles>
               <profile ns="" node="n">{category}</profile>
               </profiles></enclave></enclaves></policy>"#
        )
    };

    let cases = [
        r#"<messages publish="ALLOW"><message>x</message></messages>"#,
        r#"<topics reply="ALLOW"><topic>x</topic></topics>"#,
        r#"<topics publish="MAYBE"><topic>x</topic></topics>"#,
        r#"<topics listen="ALLOW"><topic>x</topic></topics>"#,
        r#"<topics><topic>x</topic></topics>"#,
        r#"<topics publish="ALLOW"><service>x</service></topics>"#,
        r#"<topics publish="ALLOW"><topic><nested/></topic></topics>"#,
    ];

    for case in cases {
        let result = parse_policy(&wrap(case));
        assert!(
            matches!(result, Err(Error::InvalidPolicy(_))),
            "Expected InvalidPolicy for {case}, got {result:?}"
        );
    }
}

#[test]
fn test_reject_profile_without_node() {
    let xml = r#"<policy version="0.2.0"><enclaves><enclave path=""><profiles>
        <profile ns=""/></profiles></enclave></enclaves></policy>"#;

    assert!(matches!(parse_policy(xml), Err(Error::InvalidPolicy(_))));
}

#[test]
fn test_reject_malformed_xml() {
    let err = parse_policy(r#"<policy version="0.2.0"><enclaves>"#).unwrap_err();
    assert!(matches!(err, Error::Xml(_)));
}

#[test]
fn test_entry_whitespace_survives_round_trip() {
    let xml = r#"<policy version="0.2.0">
      <enclaves>
        <enclave path="">
          <profiles>
            <profile ns="" node="n">
              <topics publish="ALLOW">
                <topic>&#32;a</topic>
                <topic><![CDATA[ b ]]></topic>
                <topic> c </topic>
              </topics>
            </profile>
          </profiles>
        </enclave>
      </enclaves>
    </policy>"#;

    let policy = parse_policy(xml).unwrap();
    let profile = policy.enclave("").unwrap().profile("", "n").unwrap();
    assert_eq!(profile.categories()[0].entries(), [" a", " b ", " c "]);

    let reloaded = parse_policy(&policy_to_string(&policy).unwrap()).unwrap();
    assert_eq!(reloaded, policy);
}

#[test]
fn test_converted_spaced_name_survives_round_trip() {
    let nodes = parse_nodl(
        r#"<interface version="1">
             <node name="n"><topic name="/ x" publisher="true"/></node>
           </interface>"#,
    )
    .unwrap();
    let policy = PolicyBuilder::new().with_nodes(&nodes).build();

    let profile = policy.enclave("").unwrap().profile("", "n").unwrap();
    assert_eq!(profile.categories()[0].entries(), [" x"]);

    let reloaded = parse_policy(&policy_to_string(&policy).unwrap()).unwrap();
    assert_eq!(reloaded, policy);
}

#[test]
fn test_indentation_is_not_entry_text() {
    let policy = parse_policy(TALKER_POLICY).unwrap();
    let profile = policy.enclave("").unwrap().profile("", "talker").unwrap();

    assert_eq!(profile.categories()[0].entries(), ["chatter"]);
}
