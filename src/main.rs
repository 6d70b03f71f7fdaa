use anyhow::Context;
use clap::Parser;
use minipix::prelude::*;
use minipix::{print_help, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet unless RUST_LOG asks otherwise; the prompts are the interface.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if cli.help {
        print_help(&mut std::io::stdout()).context("failed to print help")?;
        return Ok(());
    }

    let formats = ImageFormats::from_registry();
    log::debug!("{} image extensions recognised", formats.iter().count());

    let sweeper = Sweeper::new(formats).with_progress();
    let mut session = Session::new(Prompter::stdio(), sweeper);

    let runs = session.run().context("image sweep aborted")?;
    log::info!("Finished after {} run(s)", runs);

    Ok(())
}
