use clap::Parser;
use demeter_pay::cli::DemoArgs;
use demeter_pay::coupled::{CoupledCustomer, CoupledStore};
use demeter_pay::interfaces::report::StateWriter;
use demeter_pay::logging::{LogConfig, init_logging};
use miette::{IntoDiagnostic, Result};
use std::io;

/// Store reaches through the customer into its wallet and debits it in place.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    demo: DemoArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::default());

    let mut customer =
        CoupledCustomer::new(cli.demo.name.clone(), cli.demo.balance).into_diagnostic()?;
    let amount = cli.demo.amount().into_diagnostic()?;
    let store = CoupledStore::new(cli.demo.store.clone());

    let updated = store.process_payment(&mut customer, amount);

    let stdout = io::stdout();
    let mut writer = StateWriter::new(stdout.lock(), cli.demo.format);
    writer.write_state("Final state", updated).into_diagnostic()?;

    Ok(())
}
