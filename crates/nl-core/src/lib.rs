//! Node launch resolution orchestration.
//!
//! Wires the nl-config transformation components to the outside world:
//! - document loading with format detection ([`load`])
//! - the filesystem-backed ament package index ([`index`])
//! - launch plan assembly for the process launcher ([`plan`])

pub mod error;
pub mod index;
pub mod load;
pub mod plan;

pub use error::LaunchError;
pub use index::AmentPackageIndex;
pub use load::load_document;
pub use plan::{resolve_plan, resolve_plan_from_path, NodeLaunchPlan};
