//! Schema and loader for the docmd site descriptor.
//!
//! The descriptor (`docmd.yml`) is read once when a build starts. It is plain
//! data: site identity, theme options, navigation tree and plugin settings.

mod config;
mod nav;
mod plugins;
mod site;
mod theme;
mod validate;

pub mod path;

pub use self::config::*;
pub use self::nav::*;
pub use self::path::RelPath;
pub use self::path::SitePath;
pub use self::plugins::*;
pub use self::site::*;
pub use self::theme::*;
pub use self::validate::*;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
