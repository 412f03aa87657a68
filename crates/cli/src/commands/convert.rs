use anyhow::{bail, Context};
use app_utils::{ensure_policy_extension, parse_nodl_file, PolicyConverter};
use std::path::{Path, PathBuf};

/// Fold every input into the policy at `output`, then write it once.
///
/// Nothing is written if any input fails.
pub fn run(inputs: &[PathBuf], output: &Path, print: bool) -> anyhow::Result<()> {
    ensure_policy_extension(output)?;

    let mut converter = PolicyConverter::open(output)
        .with_context(|| format!("Failed to load `{}`", output.display()))?;

    for input in inputs {
        if !input.is_file() {
            bail!("`{}` is not a file", input.display());
        }
        let nodes = parse_nodl_file(input)
            .with_context(|| format!("Failed to parse `{}`", input.display()))?;
        tracing::info!(input = %input.display(), nodes = nodes.len(), "Converting");
        converter.convert(&nodes);
    }

    converter
        .write(print)
        .with_context(|| format!("Failed to write `{}`", output.display()))?;
    Ok(())
}
