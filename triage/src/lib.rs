pub mod reconcile;
pub mod render;
pub mod scanner;

pub use reconcile::{
    reconcile, resolve_entry, Reconciliation, ReconcileError, ReconcileResult,
};
pub use render::render;
pub use scanner::{file_size, requires_root, scan, ScanError, ScanResult};
