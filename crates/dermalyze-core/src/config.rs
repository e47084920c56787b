use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::category::LabelStyle;

/// What a scan shows when the keyword matches no product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyMatchPolicy {
    /// Report the empty result and show nothing else.
    #[default]
    Warn,
    /// Report the empty result and show the first `preview_rows` dataset rows unfiltered.
    Preview,
}

/// Global configuration loaded from `~/.config/dermalyze/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DermalyzeConfig {
    /// Product dataset (CSV with a header row). Relative paths resolve against the working directory.
    pub dataset_path: PathBuf,
    /// Activity log CSV. If missing, `user_data_logs.csv` under the XDG data dir is used.
    #[serde(default)]
    pub log_path: Option<PathBuf>,
    /// Maximum number of recommendations returned per scan.
    pub max_results: usize,
    /// Category label wording: "short" (Oily/Dry) or "compound" (Sensitive/Oily, Normal/Dry).
    #[serde(default)]
    pub label_style: LabelStyle,
    /// Behaviour when no product matches: "warn" (default) or "preview".
    #[serde(default)]
    pub empty_match: EmptyMatchPolicy,
    /// Rows shown by the "preview" empty-match policy.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    /// Base URL for product search links; the display name is sent as the `q` parameter.
    #[serde(default = "default_search_base_url")]
    pub search_base_url: String,
}

fn default_preview_rows() -> usize {
    5
}

fn default_search_base_url() -> String {
    "https://www.google.com/search".to_string()
}

impl Default for DermalyzeConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("skincare_data.csv"),
            log_path: None,
            max_results: 6,
            label_style: LabelStyle::default(),
            empty_match: EmptyMatchPolicy::default(),
            preview_rows: default_preview_rows(),
            search_base_url: default_search_base_url(),
        }
    }
}

impl DermalyzeConfig {
    /// Activity log location: the configured path, else `~/.local/share/dermalyze/user_data_logs.csv`.
    pub fn resolved_log_path(&self) -> Result<PathBuf> {
        match &self.log_path {
            Some(p) => Ok(p.clone()),
            None => {
                let xdg_dirs = xdg::BaseDirectories::with_prefix("dermalyze")?;
                Ok(xdg_dirs.place_data_file("user_data_logs.csv")?)
            }
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dermalyze")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DermalyzeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DermalyzeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DermalyzeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
