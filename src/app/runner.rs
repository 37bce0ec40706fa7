//! Tick-driven main loop.
//!
//! The loop is paced by a [`ClockPort`]: each tick is scheduled one
//! `tick_period_ms` after the previous deadline.  A tick that overruns
//! its slot is not caught up; the schedule restarts from the current time.

use log::{error, info, warn};

use super::ports::{ClockPort, DisplayPort, EventSink, InputPort, SavePort};
use super::service::Engine;
use crate::error::Result;

/// Run until the engine powers off.
pub fn run(
    engine: &mut Engine,
    clock: &mut impl ClockPort,
    hw: &mut (impl InputPort + DisplayPort),
    store: &mut impl SavePort,
    sink: &mut impl EventSink,
) -> Result<()> {
    run_for(engine, clock, hw, store, sink, u64::MAX)
}

/// Run at most `max_ticks` ticks, then save and stop if the engine is
/// still running.  A stack invariant failure stops the loop immediately
/// and is returned.
pub fn run_for(
    engine: &mut Engine,
    clock: &mut impl ClockPort,
    hw: &mut (impl InputPort + DisplayPort),
    store: &mut impl SavePort,
    sink: &mut impl EventSink,
    max_ticks: u64,
) -> Result<()> {
    let period = u64::from(engine.config().tick_period_ms);
    let mut deadline = clock.now_ms();
    let mut ticks = 0u64;
    info!("Entering main loop ({} ms ticks)", period);

    while engine.is_running() && ticks < max_ticks {
        let now = clock.now_ms();
        if let Err(e) = engine.tick(now, hw, store, sink) {
            error!("Main loop halted: {}", e);
            return Err(e);
        }
        ticks += 1;

        deadline += period;
        let after = clock.now_ms();
        if after > deadline {
            warn!("Tick overran by {} ms", after - deadline);
            deadline = after;
        }
        clock.sleep_until(deadline);
    }

    if engine.is_running() {
        engine.shutdown(store, sink, clock.now_ms());
    }
    info!("Main loop exited after {} ticks", ticks);
    Ok(())
}
