mod attribute;
mod catalog;
mod format;

pub use attribute::{Attribute, AttributeSpec, DisplayMeta, TRACT_ID_COLUMN};
pub use catalog::AttributeCatalog;
pub use format::{ColorScale, TooltipFormat};
