pub mod find_by_key;
pub mod list_by_category;
pub mod load;
pub mod load_batch;
pub mod query_attributes;

// Re-exports
pub use find_by_key::*;
pub use list_by_category::*;
pub use load::*;
pub use load_batch::*;
pub use query_attributes::*;
