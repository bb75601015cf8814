use docmd::nav;
use docmd::source::PageAudit;
use docmd::source::SourceTree;

use crate::args;
use crate::error::*;

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    /// Also match navigation routes against the Markdown files in `srcDir`
    #[arg(long)]
    pages: bool,

    #[command(flatten, next_help_heading = "Config")]
    config: args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> Result<()> {
        let config = self.config.load_config()?;

        let violations = config.check();
        for violation in &violations {
            println!("{violation}");
        }
        let mut problems = violations.len();

        let pages = nav::flatten(&config.navigation);
        if self.pages {
            let source = config.src_dir.to_path(&config.root);
            let tree = SourceTree::scan(&source)?;
            let audit = PageAudit::new(&pages, &tree);
            for page in &audit.missing {
                println!(
                    "navigation: `{}` ({}) has no source file in {}",
                    page.route, page.title, config.src_dir
                );
            }
            problems += audit.missing.len();
            for orphan in &audit.orphans {
                log::warn!("{}/{orphan} is not linked from navigation", config.src_dir);
            }
        }

        if problems != 0 {
            anyhow::bail!("{problems} problem(s) found in site descriptor");
        }

        log::info!(
            "Site descriptor is valid: {} navigation entries, {} pages",
            config.navigation.len(),
            pages.len()
        );
        Ok(())
    }
}
