//! Console entry point running the canonical benchmark configuration:
//! dataset sizes 10^1 through 10^7, repeat count 1000, one table per access
//! pattern. Expect a multi-minute runtime at the largest sizes; the
//! list-kind filter table is quadratic.

use anyhow::Result;

use membench::{driver, report::TextTable, scenario};

/// Repeat count for the repeated-lookup tables.
const LOOKUPS: usize = 1000;

fn sizes() -> Vec<usize> {
    (1_u32..=7).map(|exponent| 10_usize.pow(exponent)).collect()
}

fn main() -> Result<()> {
    let sizes = sizes();
    let mut reporter = TextTable::stdout();

    driver::run(&sizes, scenario::creation, "creation", &mut reporter)?;

    driver::run(
        &sizes,
        |n| scenario::creation_and_lookup(n, 1),
        "creation and lookup | 1 times",
        &mut reporter,
    )?;
    driver::run(
        &sizes,
        |n| scenario::creation_and_lookup(n, LOOKUPS),
        &format!("creation and lookup | {LOOKUPS} times"),
        &mut reporter,
    )?;

    driver::run(
        &sizes,
        |n| scenario::lookup(n, 1),
        "lookup single item | 1 times",
        &mut reporter,
    )?;
    driver::run(
        &sizes,
        |n| scenario::lookup(n, LOOKUPS),
        &format!("lookup single item | {LOOKUPS} times"),
        &mut reporter,
    )?;

    driver::run(
        &sizes,
        |n| scenario::multi_lookup(n, 1),
        "lookup in filter",
        &mut reporter,
    )?;

    println!("done!");
    Ok(())
}
