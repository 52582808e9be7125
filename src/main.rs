use clap::Parser;
use demeter_pay::application::store::Store;
use demeter_pay::cli::DemoArgs;
use demeter_pay::domain::customer::Customer;
use demeter_pay::interfaces::report::StateWriter;
use demeter_pay::logging::{LogConfig, init_logging};
use miette::{IntoDiagnostic, Result};
use std::io;

/// Store asks a customer to pay; the customer handles its own wallet.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    demo: DemoArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&LogConfig::default());

    let customer = Customer::new(cli.demo.name.clone(), cli.demo.balance).into_diagnostic()?;
    let amount = cli.demo.amount().into_diagnostic()?;
    let store = Store::new(cli.demo.store.clone());

    let final_customer = store.process_payment(&customer, amount).into_payer();

    let stdout = io::stdout();
    let mut writer = StateWriter::new(stdout.lock(), cli.demo.format);
    writer
        .write_state("Original state was not changed", &customer)
        .into_diagnostic()?;
    writer
        .write_state("Final state", &final_customer)
        .into_diagnostic()?;

    Ok(())
}
