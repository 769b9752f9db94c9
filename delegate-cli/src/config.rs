//! Scenario loading and parsing
//!
//! Scenarios are TOML files describing a delegate to assemble: which registry
//! functions to subscribe, which bound arguments to capture, what to invoke
//! with, and how to render the results.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::View;

/// A complete scenario (loaded from scenario.toml)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioInfo,
    #[serde(default, rename = "subscription")]
    pub subscriptions: Vec<SubscriptionConfig>,
}

/// The `[scenario]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioInfo {
    pub name: Option<String>,
    pub args: i64,
    #[serde(default)]
    pub view: View,
}

/// One `[[subscription]]` entry: a function name plus optional bound arguments
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubscriptionConfig {
    pub function: String,
    pub bind: Option<i64>,
}

/// Load a scenario from a TOML file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file: {:?}", path))?;

    let config: ScenarioConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse scenario file: {:?}", path))?;

    Ok(config)
}
