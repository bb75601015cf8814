use crate::args;
use crate::error::*;

/// Print site debug information
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints post-processed config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the navigation tree
    Nav {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints referenced assets and where they are published
    Assets {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> Result<()> {
        match self {
            Self::Config { config } => {
                let site = docmd::Site::try_from(config.load_config()?)?;
                print!("{site}");
            }
            Self::Nav { config } => {
                let config = config.load_config()?;
                print!("{}", docmd::nav::render_tree(&config.navigation));
            }
            Self::Assets { config } => {
                let config = config.load_config()?;
                let site = docmd::Site::from_config(config)?;
                for asset in &site.assets {
                    match &asset.dest {
                        Some(dest) => {
                            println!("{}\t{}\t{}", asset.role, asset.path, dest.display());
                        }
                        None => println!("{}\t{}", asset.role, asset.path),
                    }
                }
            }
        }

        Ok(())
    }
}
