mod frame;
mod join;
mod pipeline;
mod session;
mod state;

pub use frame::RenderFrame;
pub use join::{MergedFeature, join};
pub use pipeline::Dashboard;
pub use session::{SelectionEvent, Session};
pub use state::{DEFAULT_CENTER, DEFAULT_ZOOM, ViewState};
