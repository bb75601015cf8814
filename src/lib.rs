//! Generator-facing view of a docmd site descriptor.
//!
//! [`docmd_config`] owns the schema; this crate resolves it against the
//! filesystem: absolute directories, asset destinations, reading order.

pub use docmd_config as config;

pub mod assets;
pub mod nav;
pub mod source;

mod new;
mod site;

pub use crate::new::create_new_project;
pub use crate::site::Site;

type Status = status::Status;
type Result<T, E = Status> = std::result::Result<T, E>;
