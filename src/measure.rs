//! Wall-clock and heap measurement primitives for the two report binaries.

use anyhow::Result;
use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub iterations: u32,
    pub total: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl Timing {
    pub fn from_samples(samples: &[Duration]) -> Timing {
        let total: Duration = samples.iter().sum();
        let mean = match samples.len() {
            0 => Duration::ZERO,
            n => total / n as u32,
        };
        Timing {
            iterations: samples.len() as u32,
            total,
            mean,
            min: samples.iter().min().copied().unwrap_or_default(),
            max: samples.iter().max().copied().unwrap_or_default(),
        }
    }

    pub fn ops_per_sec(&self) -> f64 {
        if self.total.is_zero() {
            return 0.0;
        }
        f64::from(self.iterations) / self.total.as_secs_f64()
    }
}

/// Runs `case` for `warmup` unrecorded rounds, then `iterations` timed ones.
/// Strictly sequential; overlapping cases would corrupt the timings.
pub fn measure<F>(warmup: u32, iterations: u32, mut case: F) -> Result<Timing>
where
    F: FnMut() -> Result<()>,
{
    for _ in 0..warmup {
        case()?;
    }
    let mut samples = Vec::with_capacity(iterations as usize);
    for _ in 0..iterations {
        let start = Instant::now();
        case()?;
        samples.push(start.elapsed());
    }
    Ok(Timing::from_samples(&samples))
}

pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{:.1}µs", duration.as_secs_f64() * 1e6)
    } else if duration < Duration::from_secs(1) {
        format!("{:.2}ms", duration.as_secs_f64() * 1e3)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

static HEAP_USED: AtomicUsize = AtomicUsize::new(0);
static HEAP_PEAK: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that counts live and peak heap bytes. Installed
/// as the global allocator by the memory binary; unit tests drive it
/// directly instead.
pub struct TrackingAllocator;

impl TrackingAllocator {
    fn record_alloc(size: usize) {
        let used = HEAP_USED.fetch_add(size, Ordering::Relaxed) + size;
        HEAP_PEAK.fetch_max(used, Ordering::Relaxed);
    }

    fn record_dealloc(size: usize) {
        HEAP_USED.fetch_sub(size, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            Self::record_alloc(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout);
        Self::record_dealloc(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            Self::record_dealloc(layout.size());
            Self::record_alloc(new_size);
        }
        new_ptr
    }
}

pub fn heap_used() -> usize {
    HEAP_USED.load(Ordering::Relaxed)
}

pub fn heap_peak() -> usize {
    HEAP_PEAK.load(Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy)]
pub struct MemorySnapshot {
    pub rss: usize,
    pub heap_used: usize,
    pub heap_peak: usize,
}

impl MemorySnapshot {
    pub fn capture() -> MemorySnapshot {
        MemorySnapshot {
            rss: resident_set_size(),
            heap_used: heap_used(),
            heap_peak: heap_peak(),
        }
    }

    pub fn delta(&self, earlier: &MemorySnapshot) -> MemoryDelta {
        MemoryDelta {
            rss: self.rss as i64 - earlier.rss as i64,
            heap_used: self.heap_used as i64 - earlier.heap_used as i64,
            heap_peak: self.heap_peak as i64 - earlier.heap_peak as i64,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MemoryDelta {
    pub rss: i64,
    pub heap_used: i64,
    pub heap_peak: i64,
}

/// Resident set size in bytes. VmRSS is reported in kB.
#[cfg(target_os = "linux")]
pub fn resident_set_size() -> usize {
    let Ok(status) = std::fs::read_to_string("/proc/self/status") else {
        return 0;
    };
    status
        .lines()
        .find_map(|line| line.strip_prefix("VmRSS:"))
        .and_then(|rest| rest.trim().strip_suffix("kB"))
        .and_then(|kb| kb.trim().parse::<usize>().ok())
        .map(|kb| kb * 1024)
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
pub fn resident_set_size() -> usize {
    0
}

pub fn format_bytes(bytes: i64) -> String {
    let sign = if bytes < 0 { "-" } else { "" };
    let magnitude = bytes.unsigned_abs();
    if magnitude >= 1024 * 1024 {
        format!("{sign}{:.2} MiB", magnitude as f64 / (1024.0 * 1024.0))
    } else if magnitude >= 1024 {
        format!("{sign}{:.1} KiB", magnitude as f64 / 1024.0)
    } else {
        format!("{sign}{magnitude} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_from_samples() {
        let samples = [
            Duration::from_millis(2),
            Duration::from_millis(4),
            Duration::from_millis(6),
        ];
        let timing = Timing::from_samples(&samples);
        assert_eq!(timing.iterations, 3);
        assert_eq!(timing.total, Duration::from_millis(12));
        assert_eq!(timing.mean, Duration::from_millis(4));
        assert_eq!(timing.min, Duration::from_millis(2));
        assert_eq!(timing.max, Duration::from_millis(6));
        assert!((timing.ops_per_sec() - 250.0).abs() < 1.0);
    }

    #[test]
    fn test_timing_empty() {
        let timing = Timing::from_samples(&[]);
        assert_eq!(timing.iterations, 0);
        assert_eq!(timing.mean, Duration::ZERO);
        assert_eq!(timing.ops_per_sec(), 0.0);
    }

    #[test]
    fn test_measure_runs_warmup_and_iterations() {
        let mut calls = 0;
        let timing = measure(2, 5, || {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 7);
        assert_eq!(timing.iterations, 5);
    }

    #[test]
    fn test_measure_propagates_errors() {
        let result = measure(0, 3, || anyhow::bail!("boom"));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(250)), "250.0µs");
        assert_eq!(format_duration(Duration::from_millis(12)), "12.00ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00s");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(-2048), "-2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.00 MiB");
    }

    #[test]
    fn test_snapshot_delta() {
        let before = MemorySnapshot {
            rss: 1000,
            heap_used: 500,
            heap_peak: 800,
        };
        let after = MemorySnapshot {
            rss: 900,
            heap_used: 700,
            heap_peak: 900,
        };
        let delta = after.delta(&before);
        assert_eq!(delta.rss, -100);
        assert_eq!(delta.heap_used, 200);
        assert_eq!(delta.heap_peak, 100);
    }

    #[test]
    fn test_tracking_allocator_counters() {
        let layout = Layout::from_size_align(4096, 8).unwrap();
        let before = heap_used();
        let ptr = unsafe { TrackingAllocator.alloc(layout) };
        assert!(!ptr.is_null());
        assert!(heap_used() >= before + 4096);
        assert!(heap_peak() >= heap_used());
        unsafe { TrackingAllocator.dealloc(ptr, layout) };
        assert_eq!(heap_used(), before);
    }
}
