//! The work behind each subcommand, kept free of printing so it can be
//! tested directly.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde_json::Value;
use tessera_fhir::Resource;
use tessera_serde::{JsonDifference, from_json_str, json_differences, to_json_value};
use tracing::{debug, info, warn};

/// Outcome of `check` for one file.
#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub result: anyhow::Result<&'static str>,
}

/// Decodes every file as a [`Resource`]. Failures are collected rather than
/// returned early so one bad file does not hide the rest.
pub fn check_files(paths: &[PathBuf]) -> Vec<CheckOutcome> {
    paths
        .iter()
        .map(|path| {
            let result = load_resource(path).map(|resource| {
                info!(
                    path = %path.display(),
                    resource_type = resource.resource_type(),
                    id = resource.id().unwrap_or(""),
                    "decoded"
                );
                resource.resource_type()
            });
            if let Err(e) = &result {
                warn!(path = %path.display(), error = %format!("{e:#}"), "failed to decode");
            }
            CheckOutcome {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

/// A decoded and re-encoded document.
#[derive(Debug)]
pub struct RoundTrip {
    pub resource_type: &'static str,
    pub output: Value,
    /// Empty unless verification was requested.
    pub differences: Vec<JsonDifference>,
}

pub fn round_trip(path: &Path, verify: bool) -> anyhow::Result<RoundTrip> {
    let content = read(path)?;
    let resource: Resource = from_json_str(&content)
        .with_context(|| format!("failed to decode {}", path.display()))?;
    let output = to_json_value(&resource)
        .with_context(|| format!("failed to encode {}", path.display()))?;

    let differences = if verify {
        let original: Value = serde_json::from_str(&content)?;
        json_differences(&original, &output)
    } else {
        Vec::new()
    };
    debug!(
        path = %path.display(),
        resource_type = resource.resource_type(),
        differences = differences.len(),
        "round trip complete"
    );

    Ok(RoundTrip {
        resource_type: resource.resource_type(),
        output,
        differences,
    })
}

/// Registered resource types in sorted order.
pub fn resource_types() -> Vec<&'static str> {
    tessera_fhir::resource_registry().resource_types()
}

pub fn render(value: &Value, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_resource(path: &Path) -> anyhow::Result<Resource> {
    let content = read(path)?;
    from_json_str(&content).with_context(|| format!("failed to decode {}", path.display()))
}
