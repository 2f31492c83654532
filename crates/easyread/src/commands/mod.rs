//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod simplify;
pub mod vocab;

/// Read the command input and validate its size against the configured limit.
///
/// `None` or `-` reads standard input.
pub fn read_input(path: Option<&Utf8Path>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => read_input_file(path, max_bytes),
        _ => read_stdin(max_bytes),
    }
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    let mut stdin = std::io::stdin().lock();
    if let Some(max) = max_bytes {
        // One byte past the limit is enough to know it was exceeded.
        stdin
            .take(max as u64 + 1)
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
        if content.len() > max {
            anyhow::bail!("input too large: standard input exceeds {max} bytes");
        }
    } else {
        stdin
            .read_to_string(&mut content)
            .context("failed to read standard input")?;
    }
    Ok(content)
}

/// Display name for the input source.
pub(crate) fn source_name(path: Option<&Utf8Path>) -> &str {
    match path {
        Some(path) if path.as_str() != "-" => path.as_str(),
        _ => "<stdin>",
    }
}
