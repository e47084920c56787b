//! One scan, end to end.
//!
//! A submission moves through
//! `NoInput -> CategoryDerived -> {SchemaResolved | SchemaUnresolved} -> {MatchesFound | NoMatches}`.
//! An incomplete submission stops at `NoInput` with [`ScanError::IncompleteInput`];
//! every other terminal state is a [`RecommendationOutcome`] variant. Nothing is
//! retried.

mod input;

pub use input::{ScanInput, UserSession};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::activity_log::{ActivityLog, LogEntry};
use crate::catalog::{ProductCatalog, ProductRecord};
use crate::category::{derive_category, DetectedCategory, LabelStyle};
use crate::config::{DermalyzeConfig, EmptyMatchPolicy};
use crate::error::{CatalogError, ScanError};
use crate::fields::{BRAND, DISPLAY_NAME, PRICE};
use crate::filter::{filter_products, FilterOutcome};
use crate::schema::resolve_label_column;
use crate::search::SearchLinker;

/// Display-ready product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub name: String,
    pub brand: String,
    pub price: String,
    pub search_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    /// Dataset missing or unreadable; the recommendation section is suppressed.
    DatasetUnavailable { reason: String },
    /// No label column; the column list is kept for diagnostics.
    SchemaUnresolved { columns: Vec<String> },
    MatchesFound {
        column: String,
        products: Vec<Recommendation>,
    },
    /// Informational. `preview` holds unfiltered top rows under the preview policy.
    NoMatches {
        column: String,
        preview: Option<Vec<Recommendation>>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub name: String,
    pub category: DetectedCategory,
    pub keyword: String,
    pub outcome: RecommendationOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderSettings {
    pub max_results: usize,
    pub label_style: LabelStyle,
    pub empty_match: EmptyMatchPolicy,
    pub preview_rows: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self::from(&DermalyzeConfig::default())
    }
}

impl From<&DermalyzeConfig> for RecommenderSettings {
    fn from(cfg: &DermalyzeConfig) -> Self {
        Self {
            max_results: cfg.max_results,
            label_style: cfg.label_style,
            empty_match: cfg.empty_match,
            preview_rows: cfg.preview_rows,
        }
    }
}

/// Holds the read-only catalog and the activity log for the life of the process.
#[derive(Debug)]
pub struct Recommender {
    settings: RecommenderSettings,
    catalog: Result<ProductCatalog, CatalogError>,
    linker: SearchLinker,
    log: ActivityLog,
}

impl Recommender {
    pub fn new(
        settings: RecommenderSettings,
        catalog: Result<ProductCatalog, CatalogError>,
        linker: SearchLinker,
        log: ActivityLog,
    ) -> Self {
        Self {
            settings,
            catalog,
            linker,
            log,
        }
    }

    /// Load the dataset once and wire everything from config. A missing or
    /// malformed dataset is kept as a state, not returned as an error.
    pub fn from_config(cfg: &DermalyzeConfig) -> Result<Self> {
        let catalog = ProductCatalog::load(&cfg.dataset_path);
        if let Err(e) = &catalog {
            tracing::warn!("product dataset unavailable: {e}");
        }
        let linker = SearchLinker::new(&cfg.search_base_url)
            .with_context(|| format!("invalid search_base_url {:?}", cfg.search_base_url))?;
        let log = ActivityLog::new(cfg.resolved_log_path()?);
        Ok(Self::new(cfg.into(), catalog, linker, log))
    }

    pub fn catalog(&self) -> Result<&ProductCatalog, &CatalogError> {
        self.catalog.as_ref()
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Run one submission: derive the category, log it, then look up products.
    pub fn scan(&self, input: &ScanInput) -> Result<ScanReport, ScanError> {
        let session = input.session()?;
        let category = derive_category(session.health, self.settings.label_style);
        tracing::info!(
            "scan for {}: health={} category={}",
            session.email,
            session.health.as_str(),
            category
        );

        let entry = LogEntry::new(
            Local::now(),
            &session.name,
            &session.email,
            &category,
            session.health,
        );
        self.log.append(&entry)?;

        Ok(ScanReport {
            name: session.name,
            category,
            keyword: category.keyword().to_string(),
            outcome: self.recommend(&category),
        })
    }

    /// Product lookup for a category. No side effects.
    pub fn recommend(&self, category: &DetectedCategory) -> RecommendationOutcome {
        let catalog = match &self.catalog {
            Ok(c) => c,
            Err(e) => {
                return RecommendationOutcome::DatasetUnavailable {
                    reason: e.to_string(),
                }
            }
        };

        let resolution = resolve_label_column(catalog.columns());
        let column = resolution.column().unwrap_or_default().to_string();
        match filter_products(
            catalog,
            &resolution,
            category.keyword(),
            self.settings.max_results,
        ) {
            FilterOutcome::Unresolved { columns } => {
                RecommendationOutcome::SchemaUnresolved { columns }
            }
            FilterOutcome::Matches(rows) => RecommendationOutcome::MatchesFound {
                column,
                products: rows.into_iter().map(|r| self.display(r)).collect(),
            },
            FilterOutcome::NoMatches => {
                let preview = match self.settings.empty_match {
                    EmptyMatchPolicy::Warn => None,
                    EmptyMatchPolicy::Preview => Some(
                        catalog
                            .rows()
                            .iter()
                            .take(self.settings.preview_rows)
                            .map(|r| self.display(r))
                            .collect(),
                    ),
                };
                tracing::info!("no products match {:?} in column {column:?}", category.keyword());
                RecommendationOutcome::NoMatches { column, preview }
            }
        }
    }

    fn display(&self, record: &ProductRecord) -> Recommendation {
        let name = DISPLAY_NAME.resolve(record);
        Recommendation {
            name: name.to_string(),
            brand: BRAND.resolve(record).to_string(),
            price: PRICE.resolve(record).to_string(),
            search_link: self.linker.link(name),
        }
    }
}

#[cfg(test)]
mod tests;
