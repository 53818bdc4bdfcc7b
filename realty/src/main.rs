use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use realty::commands::{
    contact::contact, countries::CountriesCommand, phone::PhoneCommand, submit::SubmitCommand,
};
use realty_utils::realty_version;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let config = realty_config::load().context("Failed to load config")?;

    match cli.command {
        Command::Submit(command) => command.invoke(config).await?,
        Command::Phone(command) => command.invoke(&config)?,
        Command::Countries(command) => command.invoke(),
        Command::Contact => contact(&config),
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version = realty_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in the contact form and submit the lead
    #[command(aliases(["s"]))]
    Submit(SubmitCommand),
    /// Normalize and validate a phone number as the phone input would
    #[command(aliases(["p"]))]
    Phone(PhoneCommand),
    /// List or search the countries offered by the country selector
    #[command(aliases(["c"]))]
    Countries(CountriesCommand),
    /// Show the contact details and the call and WhatsApp links
    Contact,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    #[cfg(tracing_pretty)]
    let fmt_layer = fmt_layer.pretty();

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
