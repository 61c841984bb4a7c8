pub mod config;
pub mod error;
pub mod db;
pub mod auth;
pub mod session;
pub mod middleware;
pub mod upload;
pub mod views;
pub mod handlers;
pub mod router;

pub use config::Config;
pub use db::SiteStorage;
pub use error::SiteError;
pub use router::{SiteState, site_router};
