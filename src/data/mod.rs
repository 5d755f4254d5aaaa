mod loader;
pub mod permits;

pub use loader::{AttributeRow, attribute_rows, load_attribute_data};
pub use permits::PermitRecord;
