//! Delegate CLI Application
//!
//! This is the command-line host program for the delegate engine.
//! It uses the delegate-core library and adds:
//! - A registry of named callback functions
//! - Scenario files (TOML) that assemble, bind and invoke a delegate
//! - Report generation (list/table/JSON views)

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod config;
mod registry;
mod report;

use report::View;

/// Delegate CLI - Assemble and invoke multicast delegates
#[derive(Parser, Debug)]
#[command(name = "delegate-cli")]
#[command(about = "Assemble, invoke and report on multicast delegates", long_about = None)]
#[command(version)]
struct Args {
    /// Path to a scenario file (scenario.toml)
    #[arg(short, long, value_name = "FILE")]
    scenario: Option<PathBuf>,

    /// Report view (overrides the scenario file)
    #[arg(long, value_enum)]
    view: Option<View>,

    /// Invocation arguments (overrides the scenario file)
    #[arg(short, long, value_name = "N")]
    args: Option<i64>,

    /// List the registered callback functions and exit
    #[arg(long)]
    list_functions: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Delegate CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using delegate library v{}", delegate_core::VERSION);

    if args.list_functions {
        println!("Registered callback functions:");
        for name in registry::names() {
            println!("  {}", name);
        }
        return Ok(());
    }

    if let Some(scenario_path) = &args.scenario {
        scenario_mode(scenario_path, &args)?;
    } else {
        demo_mode(&args)?;
    }

    Ok(())
}

/// Scenario mode - load a scenario file, assemble the delegate, report
fn scenario_mode(path: &PathBuf, args: &Args) -> Result<()> {
    use anyhow::Context;
    use delegate_core::RetDelegate;

    log::info!("Loading scenario from: {:?}", path);
    let scenario = config::load_scenario(path)?;
    log::debug!("Scenario loaded successfully");

    let mut delegate: RetDelegate<i64, i64> = RetDelegate::new();
    for subscription in &scenario.subscriptions {
        let handler = registry::resolve(&subscription.function)
            .with_context(|| format!("Scenario {:?}", path))?;
        match subscription.bind {
            Some(bound) => delegate.subscribe_with(handler, bound),
            None => delegate.subscribe(handler),
        }
    }

    let stats = delegate.stats();
    log::info!(
        "Assembled delegate: {} subscriber(s), {} bound",
        stats.subscribers,
        stats.bound
    );

    let invoke_args = args.args.unwrap_or(scenario.scenario.args);
    let view = args.view.unwrap_or(scenario.scenario.view);
    let name = scenario.scenario.name.as_deref().unwrap_or("scenario");

    let report = report::build_report(&delegate, name, invoke_args);
    println!("{}", report::render(&report, view)?);

    // Bound records replay on their own, independent of the report pass
    if stats.bound > 0 {
        println!("Deferred replay total: {}", delegate.invoke_bound());
    }

    Ok(())
}

/// Demo mode - a guided tour of the delegate engine
fn demo_mode(args: &Args) -> Result<()> {
    use delegate_core::{Delegate, MethodDelegate, RetDelegate};
    use std::cell::RefCell;
    use std::rc::Rc;

    println!("═══════════════════════════════════════════════");
    println!("  Delegate Engine - Demo Tour");
    println!("═══════════════════════════════════════════════\n");

    let invoke_args = args.args.unwrap_or(10);

    // Broadcast: one invocation reaches every subscriber, in order
    println!("Broadcast to all subscribers with {}:", invoke_args);
    let mut broadcast: Delegate<i64> = Delegate::new();
    broadcast.subscribe(print_value);
    broadcast.subscribe(print_parity);
    broadcast.invoke(invoke_args);

    // Deferred replay: arguments captured at subscription time
    println!("\nDeferred replay of bound arguments:");
    let mut bound: Delegate<i64> = Delegate::new();
    bound.subscribe_each(print_value, [1, 2, 3]);
    bound.invoke_bound();

    // Aggregation: subscriber returns folded into one total
    println!("\nAggregated invocation:\n");
    let mut totals: RetDelegate<i64, i64> = RetDelegate::new();
    totals.subscribe(registry::resolve("double")?);
    totals.subscribe(registry::resolve("square")?);
    totals.subscribe_with(registry::resolve("half")?, 9);

    let report = report::build_report(&totals, "demo tour", invoke_args);
    println!("{}", report::render(&report, args.view.unwrap_or_default())?);
    println!("Deferred replay total: {}", totals.invoke_bound());

    // Combine and transfer: delegates merge without re-subscribing
    println!("\nCombine and transfer:");
    let mut source: Delegate<i64> = Delegate::new();
    source.subscribe(print_value);
    source.subscribe(print_parity);
    let mut sink: Delegate<i64> = Delegate::new();
    sink.combine(&source);
    println!("  after combine:  source {} / sink {}", source.len(), sink.len());
    sink.transfer_from(&mut source);
    println!("  after transfer: source {} / sink {}", source.len(), sink.len());

    // Member-bound: methods run against an object the engine does not own
    println!("\nMember-bound replay into a tally:");
    let tally = Rc::new(RefCell::new(Tally { total: 0 }));
    let mut on_sample: MethodDelegate<Tally, i64> = MethodDelegate::new();
    on_sample.subscribe(&tally, Tally::add, 5);
    on_sample.subscribe(&tally, Tally::add, 7);
    on_sample.invoke_bound();
    println!("  tally total: {}", tally.borrow().total);

    Ok(())
}

/// Demo tally the member-bound section mutates
struct Tally {
    total: i64,
}

impl Tally {
    fn add(&mut self, by: i64) {
        self.total += by;
    }
}

fn print_value(x: i64) {
    println!("  value = {}", x);
}

fn print_parity(x: i64) {
    println!("  parity = {}", if x % 2 == 0 { "even" } else { "odd" });
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
