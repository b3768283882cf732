//! Interactive Candy Machine
//!
//! Drives the candy machine from the keyboard. Each keystroke maps to one
//! event; every settled snapshot is printed by an observer.
//!
//! Key concepts:
//! - The CLI only produces events and observes snapshots
//! - Automatic transitions classify coins without user input
//! - A contract violation (TAMPER, anything after SHUTDOWN) ends the session
//!
//! Run with: cargo run --example vending_cli [config.json]
//! Set RUST_LOG=debug to see every action the interpreter applies.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use vendchart::logging::init_logging;
use vendchart::vending::{VendingConfig, VendingEvent, VendingMachine};
use vendchart::State;

const MENU: &str = "\
  a) add coin
  b) half turn
  c) remove coin
  d) shutdown
  e) tamper";

fn main() -> ExitCode {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => match VendingConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => VendingConfig::default(),
    };

    let mut machine = match VendingMachine::interpreter(&config) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    machine.on_transition(|snapshot| {
        let ctx = snapshot.context();
        println!(
            "[{}] coin: {}  total: {}  sales: {}",
            snapshot.value.name(),
            format_cents(u64::from(ctx.current_coin_value)),
            format_cents(ctx.total_value),
            ctx.num_sales
        );
    });

    println!("=== Candy Machine ===");
    if let Err(e) = machine.start() {
        eprintln!("Machine failed to start: {e}");
        return ExitCode::FAILURE;
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !machine.is_final() {
        let Some(event) = prompt_event(&mut lines) else {
            println!("Input closed.");
            break;
        };

        if let Err(e) = machine.send(event) {
            println!(
                "Machine stopped in state {}: {e}",
                machine.state().value.name()
            );
            return ExitCode::FAILURE;
        }
    }

    println!("Goodbye.");
    ExitCode::SUCCESS
}

/// Read keystrokes until one maps to an event. `None` at end of input.
fn prompt_event<I>(lines: &mut I) -> Option<VendingEvent>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        println!("\n{MENU}");
        print!("> ");
        let _ = io::stdout().flush();

        let line = lines.next()?.ok()?;
        let event = match line.trim() {
            "a" => VendingEvent::AddCoin {
                value: prompt_cents(lines)?,
            },
            "b" => VendingEvent::HalfTurn,
            "c" => VendingEvent::RemoveCoin,
            "d" => VendingEvent::Shutdown,
            "e" => VendingEvent::Tamper,
            _ => continue,
        };
        return Some(event);
    }
}

fn prompt_cents<I>(lines: &mut I) -> Option<u32>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("Coin value in dollars: ");
        let _ = io::stdout().flush();

        let line = lines.next()?.ok()?;
        match dollars_to_cents(line.trim()) {
            Some(cents) => return Some(cents),
            None => println!("Enter a non-negative amount such as 0.25"),
        }
    }
}

fn dollars_to_cents(input: &str) -> Option<u32> {
    let dollars: f64 = input.parse().ok()?;
    if !dollars.is_finite() || dollars < 0.0 {
        return None;
    }
    let cents = (dollars * 100.0).round();
    if cents > f64::from(u32::MAX) {
        return None;
    }
    Some(cents as u32)
}

fn format_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
