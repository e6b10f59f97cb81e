// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — Power Probe Interface
// ─────────────────────────────────────────────────────────────────────
//! Best-effort host power gauges behind a narrow capability trait.
//!
//! A probe may fail partially (no battery on a desktop) or entirely
//! (unsupported platform); either way the router keeps its last-known
//! gauges and the pipeline never blocks on the host OS.

use parking_lot::Mutex;

/// One best-effort gauge reading. Absent fields mean the probe could
/// not observe that gauge this round.
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerSample {
    pub battery_percent: Option<f64>,
    pub power_draw_watts: Option<f64>,
}

/// Trait for host power probes.
///
/// `sample` is advisory: it must not block and must not fail — probes
/// return `None` (or a partially-filled sample) when the host cannot
/// be observed.
pub trait PowerProbe: Send + Sync {
    fn sample(&self) -> Option<PowerSample>;
}

/// Fixed-value probe for tests and embedded defaults.
pub struct StaticPowerProbe {
    battery_percent: f64,
    power_draw_watts: f64,
}

impl StaticPowerProbe {
    pub fn new(battery_percent: f64, power_draw_watts: f64) -> Self {
        Self {
            battery_percent,
            power_draw_watts,
        }
    }
}

impl PowerProbe for StaticPowerProbe {
    fn sample(&self) -> Option<PowerSample> {
        Some(PowerSample {
            battery_percent: Some(self.battery_percent),
            power_draw_watts: Some(self.power_draw_watts),
        })
    }
}

/// External probe that calls a sampling closure.
///
/// Lets embedding hosts supply their own platform gauge source without
/// implementing the trait on a new type.
type SampleFn = Box<dyn Fn() -> Option<PowerSample> + Send + Sync>;

pub struct ExternalPowerProbe {
    sample_fn: SampleFn,
}

impl ExternalPowerProbe {
    pub fn new(sample_fn: impl Fn() -> Option<PowerSample> + Send + Sync + 'static) -> Self {
        Self {
            sample_fn: Box::new(sample_fn),
        }
    }
}

impl PowerProbe for ExternalPowerProbe {
    fn sample(&self) -> Option<PowerSample> {
        (self.sample_fn)()
    }
}

/// Host probe: battery percent from the OS power supply class, power
/// draw estimated from CPU and memory pressure via sysinfo.
///
/// The `System` handle is cached so successive CPU readings are deltas
/// against the previous refresh; a freshly created handle reports 0.
pub struct HostPowerProbe {
    sys: Mutex<sysinfo::System>,
    max_estimated_watts: f64,
}

impl Default for HostPowerProbe {
    fn default() -> Self {
        Self {
            sys: Mutex::new(sysinfo::System::new()),
            max_estimated_watts: 5.0,
        }
    }
}

impl HostPowerProbe {
    pub fn new(max_estimated_watts: f64) -> Self {
        Self {
            sys: Mutex::new(sysinfo::System::new()),
            max_estimated_watts,
        }
    }
}

impl PowerProbe for HostPowerProbe {
    fn sample(&self) -> Option<PowerSample> {
        let mut sys = self.sys.lock();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let cpu_percent = f64::from(sys.global_cpu_usage());
        let mem_percent = if sys.total_memory() == 0 {
            0.0
        } else {
            sys.used_memory() as f64 / sys.total_memory() as f64 * 100.0
        };
        let power = (cpu_percent + mem_percent) / 100.0 * self.max_estimated_watts;

        Some(PowerSample {
            battery_percent: read_battery_percent(),
            power_draw_watts: Some(power),
        })
    }
}

/// Battery charge percent from `/sys/class/power_supply`, if any
/// supply of type `Battery` exposes a readable `capacity` file.
#[cfg(target_os = "linux")]
fn read_battery_percent() -> Option<f64> {
    let entries = std::fs::read_dir("/sys/class/power_supply").ok()?;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_battery = std::fs::read_to_string(path.join("type"))
            .map(|t| t.trim() == "Battery")
            .unwrap_or(false);
        if !is_battery {
            continue;
        }
        if let Some(percent) = std::fs::read_to_string(path.join("capacity"))
            .ok()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
        {
            return Some(percent);
        }
    }
    None
}

#[cfg(not(target_os = "linux"))]
fn read_battery_percent() -> Option<f64> {
    None
}
