//! Versioned YAML configuration for an evaluation run.

use crate::errors::ConfigError;
use crate::eval::dataset::DatasetFormat;
use crate::eval::driver::FailurePolicy;
use crate::providers::Backend;
use crate::strategy::{Granularity, StrategyKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    pub version: u32,
    pub dataset: DatasetConfig,
    /// Number of dataset rows to evaluate; each row yields two cases.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Seed for the deterministic dataset shuffle.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub backends: BackendsConfig,
    pub strategies: Vec<StrategyConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub on_row_failure: FailurePolicy,
}

fn default_rows() -> usize {
    25
}

fn default_seed() -> u64 {
    42
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    #[serde(default)]
    pub format: DatasetFormat,
    /// Single-file layout: document + right and hallucinated summaries per row.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Paired layout: one file of faithful rows, one of corrupted rows.
    #[serde(default)]
    pub correct_path: Option<PathBuf>,
    #[serde(default)]
    pub hallucinated_path: Option<PathBuf>,
    /// Leading rows to drop, e.g. rows reserved for few-shot exemplars.
    #[serde(default)]
    pub skip_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendsConfig {
    pub local_base_url: String,
    pub local_model: String,
    pub hosted_mini_model: String,
    pub hosted_full_model: String,
    /// Environment variable holding the hosted API key.
    pub api_key_env: String,
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            local_base_url: crate::providers::openai::LOCAL_BASE_URL.to_string(),
            local_model: "phi3:14b-instruct".to_string(),
            hosted_mini_model: "gpt-4o-mini".to_string(),
            hosted_full_model: "gpt-4o".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub kind: StrategyKind,
    /// Backend emitting verdicts.
    #[serde(default = "default_judge")]
    pub judge: Backend,
    /// Backend generating debate arguments and analyses.
    #[serde(default = "default_debater")]
    pub debater: Backend,
    /// Backend performing sentence/statement extraction.
    #[serde(default = "default_extractor")]
    pub extractor: Backend,
    #[serde(default)]
    pub granularity: Option<Granularity>,
    /// Counterfactual debate only: show the judge the document as well.
    #[serde(default)]
    pub extended: bool,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            kind: StrategyKind::Baseline,
            judge: default_judge(),
            debater: default_debater(),
            extractor: default_extractor(),
            granularity: None,
            extended: false,
        }
    }
}

fn default_judge() -> Backend {
    Backend::HostedFull
}

fn default_debater() -> Backend {
    Backend::HostedMini
}

fn default_extractor() -> Backend {
    Backend::HostedMini
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Per-case results, appended as the run progresses.
    pub results_path: PathBuf,
    /// One aggregate row per run.
    pub summary_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from("results.csv"),
            summary_path: PathBuf::from("summary.csv"),
        }
    }
}

pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let cfg: EvalConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }
    if cfg.strategies.is_empty() {
        return Err(ConfigError("config has no strategies".into()));
    }
    let single = cfg.dataset.path.is_some();
    let paired = cfg.dataset.correct_path.is_some() && cfg.dataset.hallucinated_path.is_some();
    if single == paired {
        return Err(ConfigError(
            "dataset needs either 'path' or both 'correct_path' and 'hallucinated_path'".into(),
        ));
    }
    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, include_str!("../../../eval.yaml"))
        .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
