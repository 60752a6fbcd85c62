//! Shared configuration, errors, and domain types for ReadScout.

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    AppConfig, SearchConfig, ValidationConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{ReadScoutError, Result};
pub use types::{
    RankedUrl, Relevance, ResolveRequest, SubjectCategory, TechKeyword, has_keyword,
};
