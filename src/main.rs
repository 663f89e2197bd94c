/*!
 * Stride Kernel - Main Entry Point
 *
 * Drives the stride scheduler from a simulated timer:
 * - Stride configuration from KERNEL_STRIDE_BITS / KERNEL_BIG_STRIDE
 * - One task per entry in KERNEL_SIM_PRIORITIES
 * - KERNEL_SIM_TICKS timer ticks, then a per-task share report
 */

use miette::{IntoDiagnostic, Result, WrapErr};
use stride_kernel::core::limits::{DEFAULT_SIM_PRIORITIES, DEFAULT_SIM_TICKS};
use stride_kernel::monitoring::span_ticks;
use stride_kernel::{init_tracing, KernelError, Pid, Priority, Scheduler, StrideConfig};
use tracing::{info, warn};

const SIM_PRIORITIES_ENV: &str = "KERNEL_SIM_PRIORITIES";
const SIM_TICKS_ENV: &str = "KERNEL_SIM_TICKS";

fn main() -> Result<()> {
    init_tracing();

    info!("Stride kernel starting...");

    let config = StrideConfig::from_env()?;
    let priorities = sim_priorities()?;
    let ticks = sim_ticks()?;

    let scheduler = Scheduler::new(config);
    for (index, &priority) in priorities.iter().enumerate() {
        let pid = index as Pid + 1;
        scheduler.add(pid, priority)?;
    }

    {
        let span = span_ticks(ticks, scheduler.len());
        let _entered = span.enter();
        for _ in 0..ticks {
            if let Err(e) = scheduler.tick() {
                if e.is_idle() {
                    warn!("Runnable set empty, idling");
                    break;
                }
                return Err(e.into());
            }
        }
    }

    for task in scheduler.all_task_stats() {
        let share = task.runs as f64 / ticks.max(1) as f64;
        let expected = expected_share(task.priority, &priorities);
        info!(
            pid = task.pid,
            priority = task.priority,
            runs = task.runs,
            share = %format!("{:.3}", share),
            expected = %format!("{:.3}", expected),
            "Task share"
        );
    }

    let stats = serde_json::to_string_pretty(&scheduler.stats())
        .map_err(KernelError::from)?;
    println!("{}", stats);

    info!(spread = scheduler.stride_spread(), "Stride kernel finished");
    Ok(())
}

/// Fraction of ticks a task of `priority` should receive among `priorities`
fn expected_share(priority: Priority, priorities: &[Priority]) -> f64 {
    // Priorities may each approach u64::MAX
    let total: u128 = priorities.iter().map(|&p| p as u128).sum();
    if total == 0 {
        return 0.0;
    }
    priority as f64 / total as f64
}

fn sim_priorities() -> Result<Vec<Priority>> {
    match std::env::var(SIM_PRIORITIES_ENV) {
        Ok(raw) => raw
            .split(',')
            .map(|p| p.trim().parse::<Priority>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .into_diagnostic()
            .wrap_err_with(|| format!("{}={:?}", SIM_PRIORITIES_ENV, raw)),
        Err(_) => Ok(DEFAULT_SIM_PRIORITIES.to_vec()),
    }
}

fn sim_ticks() -> Result<u64> {
    match std::env::var(SIM_TICKS_ENV) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .into_diagnostic()
            .wrap_err_with(|| format!("{}={:?}", SIM_TICKS_ENV, raw)),
        Err(_) => Ok(DEFAULT_SIM_TICKS),
    }
}
