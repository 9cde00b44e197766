//! Resolution of catalog entities into build-tool-neutral records

mod build_items;

pub use build_items::{
    BuildItemResolver, DependencyScope, RepositoryCoordinates, ResolvedBomImport,
    ResolvedCoordinates,
};
