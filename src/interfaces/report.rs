use crate::coupled::CoupledCustomer;
use crate::domain::customer::Customer;
use crate::domain::money::Balance;
use crate::domain::ports::Payer;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// The full nested record as a single JSON line.
    #[default]
    Json,
    /// A flat `name,balance` table.
    Csv,
}

/// Flat row written in CSV reports.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct StateRecord {
    pub name: String,
    pub balance: Balance,
}

/// A customer state that can be dumped to a report.
pub trait Snapshot: Serialize {
    fn record(&self) -> StateRecord;
}

impl Snapshot for Customer {
    fn record(&self) -> StateRecord {
        StateRecord {
            name: self.name().to_string(),
            balance: self.balance(),
        }
    }
}

impl Snapshot for CoupledCustomer {
    fn record(&self) -> StateRecord {
        StateRecord {
            name: self.name.clone(),
            balance: self.wallet.money,
        }
    }
}

/// Writes labelled customer states to any `Write` sink (e.g. Stdout).
pub struct StateWriter<W: Write> {
    writer: W,
    format: ReportFormat,
}

impl<W: Write> StateWriter<W> {
    pub fn new(writer: W, format: ReportFormat) -> Self {
        Self { writer, format }
    }

    pub fn write_state<S: Snapshot>(&mut self, label: &str, state: &S) -> Result<()> {
        match self.format {
            ReportFormat::Json => {
                let json = serde_json::to_string(state)?;
                writeln!(self.writer, "{label}: {json}")?;
            }
            ReportFormat::Csv => {
                writeln!(self.writer, "{label}:")?;
                let mut csv = csv::Writer::from_writer(&mut self.writer);
                csv.serialize(state.record())?;
                csv.flush()?;
            }
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
