//! High-level operations.

pub mod references;
pub mod resolve;
pub mod sync;

pub use resolve::{resolve_package, ResolvedDependency, ResolvedPackage};
pub use sync::{sync, SyncOptions, SyncReport};
