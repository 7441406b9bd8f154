//! # Bank-accounts
//! Application runs fixed demonstration on a savings and a current account and prints account
//! details and results of every operation to output. Command line arguments are ignored.
//!
//! Diagnostic logs go to stderr and are filtered with `RUST_LOG` (default `warn`).

#![deny(missing_docs)]

use anyhow::Context;
use bank_accounts::{
    account::{BankAccount, Movement},
    errors::AccountErr,
    transfer,
};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(anyhow::Error::msg)
        .context("install log subscriber")
}

fn report(outcome: Result<Movement, AccountErr>) {
    match outcome {
        Ok(movement) => println!("{movement}"),
        Err(e) => println!("{e}"),
    }
}

fn run_demo() {
    let mut savings =
        BankAccount::savings("S123", "John Doe", Decimal::new(1000, 0), Decimal::new(2, 2));
    let mut current =
        BankAccount::current("C456", "Jane Doe", Decimal::new(2000, 0), Decimal::new(500, 0));

    print!("{savings}");
    print!("{current}");

    report(savings.deposit(Decimal::new(500, 0)));
    report(current.withdraw(Decimal::new(1000, 0)));

    print!("{savings}");
    print!("{current}");

    // transfer already moved the money, assigning the snapshot back replaces
    // identity and balance of `current` with the ones of `savings`
    match transfer::transfer(&mut current, &mut savings) {
        Ok(moved) => {
            println!("{moved}");
            current.assign_from(&moved.snapshot);
        }
        Err(e) => println!("{e}"),
    }

    print!("{savings}");
    print!("{current}");
}

fn main() {
    // demo output does not depend on logging, so a failed setup is only reported
    if let Err(e) = init_logging() {
        eprintln!("{e:#}");
    }

    run_demo();
}
