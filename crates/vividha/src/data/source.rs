//! Data-source strategy: local flat files or a remote tabular database.
//!
//! The source is chosen once at startup. There is no runtime switch between
//! the two variants.

use std::env;
use std::path::{Path, PathBuf};

use super::catalog::Dataset;
use super::parser::{Parser, ParserConfig};
use super::table::{DataTable, SourceMetadata};
use crate::error::{Result, VividhaError};

/// A strategy for loading datasets.
///
/// Loads are read-only and repeatable; no caching is guaranteed beyond a
/// single call, so callers wanting memoization keep their own.
pub trait DataSource: Send + Sync {
    /// Load a dataset into memory.
    fn load(&self, dataset: Dataset) -> Result<(DataTable, SourceMetadata)>;

    /// Human-readable description for status output.
    fn describe(&self) -> String;
}

/// Loads datasets from flat files under a data directory.
pub struct LocalFiles {
    data_dir: PathBuf,
    parser: Parser,
}

impl LocalFiles {
    /// Create a source rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            parser: Parser::new(),
        }
    }

    /// Create a source with a custom parser configuration.
    pub fn with_parser_config(data_dir: impl Into<PathBuf>, config: ParserConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            parser: Parser::with_config(config),
        }
    }

    /// The directory holding the dataset files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl DataSource for LocalFiles {
    fn load(&self, dataset: Dataset) -> Result<(DataTable, SourceMetadata)> {
        self.parser.parse_file(dataset.path(&self.data_dir))
    }

    fn describe(&self) -> String {
        format!("local files in {}", self.data_dir.display())
    }
}

/// Connection settings for a remote tabular database, read from the
/// environment.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub account: String,
    pub user: String,
    pub password: String,
    pub warehouse: String,
    pub database: String,
    pub schema: String,
}

impl RemoteConfig {
    /// Read the `VIVIDHA_DB_*` environment variables. Account, user and
    /// password are required; warehouse, database and schema default to the
    /// standard deployment names.
    pub fn from_env() -> Result<Self> {
        let required = |name: &str| {
            env::var(name)
                .map_err(|_| VividhaError::Config(format!("{} is not set", name)))
        };

        Ok(Self {
            account: required("VIVIDHA_DB_ACCOUNT")?,
            user: required("VIVIDHA_DB_USER")?,
            password: required("VIVIDHA_DB_PASSWORD")?,
            warehouse: env::var("VIVIDHA_DB_WAREHOUSE").unwrap_or_else(|_| "vividha_wh".into()),
            database: env::var("VIVIDHA_DB_DATABASE").unwrap_or_else(|_| "vividha_db".into()),
            schema: env::var("VIVIDHA_DB_SCHEMA").unwrap_or_else(|_| "vividha_schema".into()),
        })
    }
}

/// A remote tabular database source.
///
/// The connection settings are honored so deployments can be validated, but
/// this build ships no database driver: every load reports a configuration
/// error directing the caller to local files.
pub struct RemoteDatabase {
    config: RemoteConfig,
}

impl RemoteDatabase {
    /// Create a source from explicit settings.
    pub fn new(config: RemoteConfig) -> Self {
        Self { config }
    }

    /// Create a source from the `VIVIDHA_DB_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(RemoteConfig::from_env()?))
    }
}

impl DataSource for RemoteDatabase {
    fn load(&self, dataset: Dataset) -> Result<(DataTable, SourceMetadata)> {
        Err(VividhaError::Config(format!(
            "remote database '{}' has no backend in this build; cannot load {}. \
             Run against local files instead.",
            self.config.database, dataset
        )))
    }

    fn describe(&self) -> String {
        format!(
            "remote database {}.{} (account {}, user {})",
            self.config.database, self.config.schema, self.config.account, self.config.user
        )
    }
}
