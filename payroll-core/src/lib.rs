pub mod calculations;
pub mod models;
pub mod store;

pub use models::*;
pub use store::repository::{PayrollStore, StoreError};
