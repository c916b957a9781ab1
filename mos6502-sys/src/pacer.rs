use mos6502_core::ClockPacer;
use std::time::{Duration, Instant};

/// Realizes a target clock rate by sleeping off whatever's left of each
/// cycle's time budget. Logs at `trace` when a step overran its budget so a
/// developer can distinguish "executing" from "falling behind" without
/// instrumenting the hot loop itself.
pub struct RealTimePacer {
    cycle_budget: Duration,
    last_tick: Instant,
}

impl RealTimePacer {
    pub fn new(clock_hz: u32) -> Self {
        RealTimePacer {
            cycle_budget: Duration::from_secs_f64(1.0 / clock_hz as f64),
            last_tick: Instant::now(),
        }
    }
}

impl ClockPacer for RealTimePacer {
    fn wait_next_cycle(&mut self) {
        let elapsed = self.last_tick.elapsed();
        if elapsed < self.cycle_budget {
            std::thread::sleep(self.cycle_budget - elapsed);
        } else if elapsed > self.cycle_budget {
            log::trace!(
                "pacer overran its budget by {:?} (budget {:?})",
                elapsed - self.cycle_budget,
                self.cycle_budget
            );
        }
        self.last_tick = Instant::now();
    }
}
