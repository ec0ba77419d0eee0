pub mod config;
pub mod coordinator;
pub mod error;
pub mod registry;
pub mod view;

pub use config::{Config, resolve_data_dir};
pub use coordinator::{Action, Coordinator, Mode};
pub use error::{Error, Result};
pub use registry::ItemRegistry;
pub use view::ListView;
