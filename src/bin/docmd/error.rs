pub(crate) use anyhow::Context as _;
pub(crate) use anyhow::Error;

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
