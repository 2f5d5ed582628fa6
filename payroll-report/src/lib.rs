pub mod loader;
pub mod render;

pub use loader::{SnapshotLoader, SnapshotLoaderError};
pub use render::{render_payslip, render_summary};
