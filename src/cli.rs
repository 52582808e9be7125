use crate::domain::money::Amount;
use crate::error::Result;
use crate::interfaces::report::ReportFormat;
use clap::Args;
use rust_decimal::Decimal;

/// Scenario shared by both demo binaries. Every flag is optional; running with
/// no arguments reproduces the Corner Shop example.
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Customer name
    #[arg(long, default_value = "Bob")]
    pub name: String,

    /// Customer's opening wallet balance
    #[arg(long, default_value = "100.0", allow_negative_numbers = true)]
    pub balance: Decimal,

    /// Amount the store asks for
    #[arg(long, default_value = "25.0", allow_negative_numbers = true)]
    pub amount: Decimal,

    /// Name of the store requesting payment
    #[arg(long, default_value = "The Corner Shop")]
    pub store: String,

    /// Format of the state dumps written to stdout
    #[arg(long, value_enum, default_value_t = ReportFormat::Json)]
    pub format: ReportFormat,
}

impl DemoArgs {
    pub fn amount(&self) -> Result<Amount> {
        Amount::new(self.amount)
    }
}
