/*!
 * Scheduler Tests
 * Stride selection, priority control and wraparound behavior
 */

use pretty_assertions::assert_eq;
use std::cmp::Ordering;
use std::sync::Arc;
use std::thread;
use stride_kernel::{
    KernelScheduler, Scheduler, SchedulerError, Stride, StrideConfig, StrideWidth,
};

fn byte_config() -> StrideConfig {
    StrideConfig::new(StrideWidth::Bits8, 255).unwrap()
}

#[test]
fn test_empty_returns_no_runnable_task() {
    let scheduler = Scheduler::default();
    assert_eq!(scheduler.pick_next(), Err(SchedulerError::NoRunnableTask));

    scheduler.add(7, 16).unwrap();
    assert_eq!(scheduler.pick_next(), Ok(7));
}

#[test]
fn test_wraparound_comparator_values() {
    let config = byte_config();
    let stride = |v| Stride::new(v, config);

    // difference 4: ahead
    assert_eq!(stride(4).partial_cmp(&stride(0)), Some(Ordering::Less));
    // difference 125: still within BIG_STRIDE / 2
    assert_eq!(stride(125).partial_cmp(&stride(0)), Some(Ordering::Less));
    // difference 200: the other stride is the one ahead
    assert_eq!(stride(200).partial_cmp(&stride(0)), Some(Ordering::Greater));
}

#[test]
fn test_wrapped_stride_does_not_jump_queue() {
    // A sits at 255. B sits at 250 and has pass 10, so one run takes it to 260,
    // stored as 4. A numeric comparison would keep picking B.
    let config = byte_config();
    let a = Stride::new(255, config);
    let mut b = Stride::new(250, config);
    assert!(b.advance(10));
    assert_eq!(b.value(), 4);
    assert!(b.value() < a.value());

    // Logically A (255) is behind B (260), so A runs next
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Greater));
    assert_eq!(b.partial_cmp(&a), Some(Ordering::Less));
}

#[test]
fn test_wrapped_task_waits_behind_unwrapped() {
    let scheduler = Scheduler::new(byte_config());
    scheduler.add(1, 25).unwrap();
    scheduler.add(2, 25).unwrap();

    // Both have pass 10; ties go to the lower pid, so after 50 ticks both sit at 250
    for _ in 0..50 {
        scheduler.tick().unwrap();
    }
    assert_eq!(scheduler.task_stats(1).unwrap().stride, 250);
    assert_eq!(scheduler.task_stats(2).unwrap().stride, 250);

    // A moves to pass 5 and runs to 255; B runs once and wraps from 250 to 4
    scheduler.set_priority(1, 51).unwrap();
    assert_eq!(scheduler.tick(), Ok(1));
    assert_eq!(scheduler.tick(), Ok(2));
    assert!(scheduler.stats().wraparounds >= 1);

    let a = scheduler.task_stats(1).unwrap();
    let b = scheduler.task_stats(2).unwrap();
    assert_eq!(a.stride, 255);
    assert_eq!(b.stride, 4);
    assert!(b.stride < a.stride);

    // A (255) is logically behind B (260)
    assert!(a.is_next);
    assert_eq!(scheduler.pick_next(), Ok(1));
    assert_eq!(scheduler.tick(), Ok(1));
}

#[test]
fn test_scheduler_across_wrap_matches_unbounded_strides() {
    // 8-bit strides wrap every few ticks; logical strides in u128 never do
    let config = byte_config();
    let scheduler = Scheduler::new(config);
    let priorities = [(1u32, 2u64), (2, 3), (3, 25)];
    let mut logical: Vec<(u32, u128, u128)> = Vec::new();
    for (pid, prio) in priorities {
        scheduler.add(pid, prio).unwrap();
        logical.push((pid, 0, config.pass_for(prio) as u128));
    }

    for _ in 0..2_000 {
        let expected = logical
            .iter()
            .min_by_key(|(pid, stride, _)| (*stride, *pid))
            .map(|(pid, _, _)| *pid)
            .unwrap();
        assert_eq!(scheduler.tick(), Ok(expected));

        let entry = logical.iter_mut().find(|(pid, _, _)| *pid == expected).unwrap();
        entry.1 += entry.2;
    }

    assert!(scheduler.stats().wraparounds > 0);
}

#[test]
fn test_set_priority_validation() {
    let scheduler = Scheduler::new(byte_config());
    scheduler.add(1, 2).unwrap();

    assert!(matches!(
        scheduler.set_priority(1, 0),
        Err(SchedulerError::InvalidPriority { priority: 0, .. })
    ));
    assert!(matches!(
        scheduler.set_priority(1, 1),
        Err(SchedulerError::InvalidPriority { priority: 1, .. })
    ));

    scheduler.set_priority(1, 7).unwrap();
    let stats = scheduler.task_stats(1).unwrap();
    assert_eq!(stats.priority, 7);
    assert_eq!(stats.pass, 255 / 7);
}

#[test]
fn test_set_priority_twice_same_value() {
    let scheduler = Scheduler::default();
    scheduler.add(1, 3).unwrap();
    scheduler.add(2, 3).unwrap();
    for _ in 0..5 {
        scheduler.tick().unwrap();
    }

    let before = scheduler.task_stats(1).unwrap();
    scheduler.set_priority(1, 9).unwrap();
    scheduler.set_priority(1, 9).unwrap();
    let after = scheduler.task_stats(1).unwrap();

    assert_eq!(after.stride, before.stride);
    assert_eq!(after.pass, StrideConfig::default().pass_for(9));
}

#[test]
fn test_proportional_share() {
    let scheduler = Scheduler::default();
    let priorities = [(1u32, 2u64), (2, 3), (3, 4), (4, 5)];
    for (pid, prio) in priorities {
        scheduler.add(pid, prio).unwrap();
    }

    let ticks = 14_000u64;
    for _ in 0..ticks {
        scheduler.tick().unwrap();
    }

    let total: u64 = priorities.iter().map(|(_, p)| p).sum();
    for task in scheduler.all_task_stats() {
        let expected = ticks * task.priority / total;
        let diff = task.runs.abs_diff(expected);
        assert!(
            diff <= 2,
            "pid {} ran {} times, expected about {}",
            task.pid,
            task.runs,
            expected
        );
    }
}

#[test]
fn test_blocked_task_rejoins_at_minimum() {
    let scheduler = Scheduler::new(byte_config());
    scheduler.add(1, 2).unwrap();
    scheduler.add(2, 2).unwrap();

    // pid 2 blocks while pid 1 keeps running through several wraps
    assert!(scheduler.remove(2));
    for _ in 0..10 {
        assert_eq!(scheduler.tick(), Ok(1));
    }

    scheduler.add(2, 2).unwrap();
    assert!(scheduler.stride_spread() <= byte_config().threshold());

    // Neither task is starved after the rejoin
    let picks: Vec<_> = (0..4).map(|_| scheduler.tick().unwrap()).collect();
    assert!(picks.contains(&1));
    assert!(picks.contains(&2));
}

#[test]
fn test_concurrent_ticks() {
    let scheduler = Arc::new(Scheduler::new(StrideConfig::new(StrideWidth::Bits16, 60_000).unwrap()));
    for pid in 1..=8 {
        scheduler.add(pid, pid as u64 + 1).unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let scheduler = Arc::clone(&scheduler);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    scheduler.tick().unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = scheduler.stats();
    assert_eq!(stats.total_scheduled, 4_000);
    assert_eq!(stats.advances, 4_000);
    assert_eq!(
        scheduler.all_task_stats().iter().map(|t| t.runs).sum::<u64>(),
        4_000
    );
    assert!(scheduler.stride_spread() <= scheduler.config().threshold());
}

#[test]
fn test_trait_object_interface() {
    let scheduler: Box<dyn KernelScheduler> = Box::new(Scheduler::default());
    scheduler.add(1, 2).unwrap();
    scheduler.add(2, 4).unwrap();
    scheduler.set_priority(2, 8).unwrap();
    assert_eq!(scheduler.priority(2), Ok(8));

    let pid = scheduler.pick_next().unwrap();
    scheduler.advance(pid).unwrap();
    assert!(scheduler.remove(pid));
    assert_eq!(scheduler.tick().map(|p| p != pid), Ok(true));
}

#[test]
fn test_stats_serialization() {
    let scheduler = Scheduler::default();
    scheduler.add(1, 2).unwrap();
    scheduler.tick().unwrap();

    let json = serde_json::to_value(scheduler.stats()).unwrap();
    assert_eq!(json["total_scheduled"], 1);
    assert_eq!(json["stride_bits"], 64);
    // Zero counters are skipped
    assert!(json.get("wraparounds").is_none());
}
