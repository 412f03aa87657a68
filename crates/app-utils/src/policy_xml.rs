//! Policy document XML codec
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <policy version="0.2.0">
//!   <enclaves>
//!     <enclave path="">
//!       <profiles>
//!         <profile ns="" node="talker">
//!           <topics publish="ALLOW">
//!             <topic>chatter</topic>
//!           </topics>
//!         </profile>
//!       </profiles>
//!     </enclave>
//!   </enclaves>
//! </policy>
//! ```

use crate::error::{Error, Result};
use crate::xml::{parse_element_tree, Element};
use core_policy::{
    CategoryKind, Enclave, Grant, PermissionCategory, PolicyDocument, Profile, RuleExpression,
    RuleKind, POLICY_VERSION,
};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::Path;

/// Parse a policy document from a string
///
/// Duplicate enclaves and profiles are merged into their first occurrence.
///
/// # Errors
///
/// - `Error::Xml` for malformed XML
/// - `Error::UnsupportedPolicyVersion` if `version` is not `0.2.0`
/// - `Error::InvalidPolicy` for unknown elements, rules or expressions
pub fn parse_policy(input: &str) -> Result<PolicyDocument> {
    let root = parse_element_tree(input)?;
    if root.name != "policy" {
        return Err(invalid(format!(
            "root element must be <policy>, found <{}>",
            root.name
        )));
    }
    let version = required_attribute(&root, "version")?;
    if version != POLICY_VERSION {
        return Err(Error::UnsupportedPolicyVersion {
            found: version.to_string(),
            expected: POLICY_VERSION,
        });
    }

    let mut document = PolicyDocument::with_version(version);
    for section in &root.children {
        expect_name(section, "enclaves", "policy")?;
        for enclave in &section.children {
            expect_name(enclave, "enclave", "enclaves")?;
            document.merge_enclave(parse_enclave(enclave)?);
        }
    }
    Ok(document)
}

/// Read and parse a policy file
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, otherwise see [`parse_policy`].
pub fn load_policy(path: &Path) -> Result<PolicyDocument> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_policy(&content)
}

fn parse_enclave(element: &Element) -> Result<Enclave> {
    let mut enclave = Enclave::new(required_attribute(element, "path")?);
    for section in &element.children {
        expect_name(section, "profiles", "enclave")?;
        for profile in &section.children {
            expect_name(profile, "profile", "profiles")?;
            enclave.merge_profile(parse_profile(profile)?);
        }
    }
    Ok(enclave)
}

fn parse_profile(element: &Element) -> Result<Profile> {
    let namespace = required_attribute(element, "ns")?;
    let node = required_attribute(element, "node")?;
    let mut profile = Profile::new(namespace, node);
    for category in &element.children {
        let category = parse_category(category)
            .map_err(|e| invalid(format!("profile ns='{}' node='{}': {}", namespace, node, e)))?;
        profile.push_category(category);
    }
    Ok(profile)
}

fn parse_category(element: &Element) -> std::result::Result<PermissionCategory, String> {
    let kind = CategoryKind::from_container(&element.name).map_err(|e| e.to_string())?;

    let mut grants = Vec::with_capacity(element.attributes.len());
    for (key, value) in &element.attributes {
        let rule = key.parse::<RuleKind>().map_err(|e| e.to_string())?;
        let expression = value.parse::<RuleExpression>().map_err(|e| e.to_string())?;
        grants.push(Grant::new(rule, expression));
    }
    let mut category = PermissionCategory::with_grants(kind, grants).map_err(|e| e.to_string())?;

    for entry in &element.children {
        if entry.name != kind.element() {
            return Err(format!(
                "unexpected <{}> inside <{}>",
                entry.name,
                kind.container()
            ));
        }
        if !entry.children.is_empty() || !entry.attributes.is_empty() {
            return Err(format!("<{}> must only hold an expression", entry.name));
        }
        category.push_entry(entry.text.as_str());
    }
    Ok(category)
}

fn required_attribute<'a>(element: &'a Element, key: &str) -> Result<&'a str> {
    element
        .attribute(key)
        .ok_or_else(|| invalid(format!("<{}> is missing the '{}' attribute", element.name, key)))
}

fn expect_name(element: &Element, expected: &str, parent: &str) -> Result<()> {
    if element.name != expected {
        return Err(invalid(format!(
            "unexpected <{}> inside <{}>",
            element.name, parent
        )));
    }
    Ok(())
}

fn invalid(message: String) -> Error {
    Error::InvalidPolicy(message)
}

// ===== Serialization =====

/// Serialize `document` as indented XML into `out`
///
/// # Errors
///
/// Returns `Error::Xml` if writing fails.
pub fn dump_policy<W: Write>(document: &PolicyDocument, out: W) -> Result<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    write_event(
        &mut writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
    )?;
    write_event(
        &mut writer,
        Event::Start(BytesStart::new("policy").with_attributes([("version", document.version())])),
    )?;

    if document.enclaves().is_empty() {
        write_event(&mut writer, Event::Empty(BytesStart::new("enclaves")))?;
    } else {
        write_event(&mut writer, Event::Start(BytesStart::new("enclaves")))?;
        for enclave in document.enclaves() {
            write_enclave(&mut writer, enclave)?;
        }
        write_event(&mut writer, Event::End(BytesEnd::new("enclaves")))?;
    }

    write_event(&mut writer, Event::End(BytesEnd::new("policy")))?;
    writer.get_mut().write_all(b"\n").map_err(Error::xml)
}

/// Serialize `document` into a string
///
/// # Errors
///
/// Returns `Error::Xml` if serialization fails.
pub fn policy_to_string(document: &PolicyDocument) -> Result<String> {
    let mut buffer = Vec::new();
    dump_policy(document, &mut buffer)?;
    String::from_utf8(buffer).map_err(Error::xml)
}

fn write_enclave<W: Write>(writer: &mut Writer<W>, enclave: &Enclave) -> Result<()> {
    write_event(
        writer,
        Event::Start(BytesStart::new("enclave").with_attributes([("path", enclave.path())])),
    )?;
    if enclave.profiles().is_empty() {
        write_event(writer, Event::Empty(BytesStart::new("profiles")))?;
    } else {
        write_event(writer, Event::Start(BytesStart::new("profiles")))?;
        for profile in enclave.profiles() {
            write_profile(writer, profile)?;
        }
        write_event(writer, Event::End(BytesEnd::new("profiles")))?;
    }
    write_event(writer, Event::End(BytesEnd::new("enclave")))
}

fn write_profile<W: Write>(writer: &mut Writer<W>, profile: &Profile) -> Result<()> {
    let start = BytesStart::new("profile")
        .with_attributes([("ns", profile.namespace()), ("node", profile.node())]);
    if profile.categories().is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for category in profile.categories() {
        write_category(writer, category)?;
    }
    write_event(writer, Event::End(BytesEnd::new("profile")))
}

fn write_category<W: Write>(writer: &mut Writer<W>, category: &PermissionCategory) -> Result<()> {
    let kind = category.kind();
    let mut start = BytesStart::new(kind.container());
    for grant in category.grants() {
        start.push_attribute((grant.rule.as_str(), grant.expression.as_str()));
    }
    if category.entries().is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for entry in category.entries() {
        writer
            .create_element(kind.element())
            .write_text_content(BytesText::new(entry))
            .map_err(Error::xml)?;
    }
    write_event(writer, Event::End(BytesEnd::new(kind.container())))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(Error::xml)
}
