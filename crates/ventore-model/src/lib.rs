//! # ventore-model
//!
//! Reconciles the master investor list, the per-project cap tables and the
//! compliance register into one [`DataModel`](ventore_core::entities::DataModel).
//!
//! - [`tokens`] parses free-text project/stage cells.
//! - [`identity`] derives stable keys and matches cap-table rows to master
//!   investors.
//! - [`builder`] fetches every sheet and assembles entities, the project
//!   index and the data-quality issue list.
//! - [`insights`] computes read-only views over a built model.

pub mod builder;
pub mod error;
pub mod identity;
pub mod index;
pub mod insights;
pub mod normalize;
pub mod tokens;

pub use builder::{SheetSet, build_data_model, build_from_sheets};
pub use error::BuildError;
pub use identity::{Homonym, InvestorIndex, stable_key};
pub use index::build_project_index;
pub use insights::{
    ActivityItem, ActivitySource, CountBucket, InvestorProfile, Overview, activity_feed,
    investor_profile, project_stage_counts, status_counts, stuck_entries,
};
pub use tokens::{normalize_stage, parse_project_token, parse_projects_list};
