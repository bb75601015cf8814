use std::path;

use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Target directory
    #[arg(default_value = ".")]
    directory: path::PathBuf,

    /// Overwrite an existing descriptor
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub(crate) fn run(&self) -> Result<()> {
        docmd::create_new_project(&self.directory, self.force).with_context(|| {
            format!("Could not create a new project at {}", self.directory.display())
        })?;
        log::info!("Created new project at {}", self.directory.display());

        Ok(())
    }
}
