mod args;
mod check;
mod debug;
mod dump;
mod error;
mod new;

use clap::Parser;

use crate::error::Result;

/// Site descriptor tooling for the docmd static site generator
#[derive(Clone, Debug, Parser)]
#[command(name = "docmd", about, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    /// Create a starter `docmd.yml`
    Init(new::InitArgs),

    /// Validate the site descriptor
    Check(check::CheckArgs),

    /// Print the descriptor with defaults applied
    Dump(dump::DumpArgs),

    /// Print site debug information
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Check(cmd) => cmd.run(),
            Self::Dump(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr =
        anstream::AutoStream::choice(&std::io::stderr()) != anstream::ColorChoice::Never;
    args::init_logging(cli.verbose.clone(), colored_stderr);

    cli.command.run().map_err(|err| {
        proc_exit::Exit::new(proc_exit::Code::FAILURE).with_message(format!("{err:#}"))
    })?;

    Ok(())
}
