use anyhow::Context;
use app_utils::load_policy;
use colored::*;
use std::collections::HashSet;
use std::path::Path;

pub fn check(file_path: &Path) -> anyhow::Result<()> {
    println!("{} {}", "Checking policy:".bold(), file_path.display());

    let policy = load_policy(file_path)
        .with_context(|| format!("Failed to load `{}`", file_path.display()))?;

    println!("  {} Version: {}", "✓".green(), policy.version());
    println!("  {} Enclaves: {}", "✓".green(), policy.enclaves().len());
    println!("  {} Profiles: {}", "✓".green(), policy.profile_count());

    let mut warnings = 0;

    for enclave in policy.enclaves() {
        println!("  {} enclave \"{}\"", "•".cyan(), enclave.path());
        for profile in enclave.profiles() {
            println!(
                "    {} profile ns=\"{}\" node=\"{}\"",
                "•".cyan(),
                profile.namespace(),
                profile.node()
            );
            for category in profile.categories() {
                let grants: Vec<String> = category
                    .grants()
                    .iter()
                    .map(|g| format!("{}={}", g.rule, g.expression))
                    .collect();
                println!(
                    "      {} {} [{}]: {} entries",
                    "•".cyan(),
                    category.kind().container(),
                    grants.join(" "),
                    category.entries().len()
                );

                // Check for duplicate entries
                let mut seen = HashSet::new();
                for entry in category.entries() {
                    if !seen.insert(entry.as_str()) {
                        println!(
                            "        {} '{}' is listed more than once",
                            "⚠".yellow(),
                            entry
                        );
                        warnings += 1;
                    }
                }
            }
        }
    }

    println!();
    if warnings == 0 {
        println!("{} Policy is valid!", "✓".green().bold());
    } else {
        println!(
            "{} Policy is valid with {} warning(s)",
            "⚠".yellow().bold(),
            warnings
        );
    }

    Ok(())
}
