//! Fuzz target for `parse_policy`
//!
//! Arbitrary strings must never panic the loader. Whatever it accepts must
//! survive a dump and reload unchanged.

#![no_main]

use app_utils::{parse_policy, policy_to_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(document) = parse_policy(data) else {
        return;
    };

    assert_eq!(document.version(), core_policy::POLICY_VERSION);

    let xml = policy_to_string(&document).expect("dump of a loaded document");
    let reloaded = parse_policy(&xml).expect("reload of a dumped document");
    assert_eq!(reloaded, document, "dump/reload changed the document");
});
