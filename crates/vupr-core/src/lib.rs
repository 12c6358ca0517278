pub mod config;
pub mod error;
pub mod launch;
pub mod logging;
pub mod picker;
pub mod router;
pub mod routing;
pub mod url_model;

pub use error::RouterError;
