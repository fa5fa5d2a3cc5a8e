/*!
 * Memory Simulator - Main Entry Point
 *
 * Interactive shell over one simulated address space:
 * - Allocation with first-fit, best-fit, or worst-fit placement
 * - Deallocation with coalescing of free blocks
 * - Address bar, block table, and fragmentation metrics
 */

use anyhow::Context;
use memsim::{init_tracing, Response, Session, SimulationConfig};
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = SimulationConfig::from_env().context("Invalid simulator configuration")?;

    init_tracing(config.trace_json);
    info!(
        capacity = config.capacity,
        strategy = %config.default_strategy,
        "Memory simulator starting"
    );

    let mut session = Session::new(config).context("Could not start simulation")?;
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(
        stdout,
        "Memory Management Simulation ({} KB). Type 'help' for commands.",
        session.config().capacity
    )?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read command")?;
        let Some(response) = session.handle_line(&line) else {
            continue;
        };

        match response {
            Response::Outcome(outcome) => writeln!(stdout, "{}", outcome.message)?,
            Response::Text(text) => writeln!(stdout, "{}", text)?,
            Response::Rejected(reason) => writeln!(stdout, "error: {}", reason)?,
            Response::Quit => break,
        }
        stdout.flush()?;
    }

    info!(session_id = %session.id(), "Memory simulator exiting");
    Ok(())
}
