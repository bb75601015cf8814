use docmd_config::Format;

use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct DumpArgs {
    /// Output encoding: yaml, json or toml
    #[arg(long, default_value_t = Format::Yaml)]
    format: Format,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl DumpArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;
        config.validate()?;

        let text = config.to_string_as(self.format)?;
        if text.ends_with('\n') {
            print!("{text}");
        } else {
            println!("{text}");
        }

        Ok(())
    }
}
