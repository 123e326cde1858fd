use std::fmt;

pub mod evictors;
pub mod frames;

use evictors::Evictor;
pub use frames::FrameTable;

/// Page replacement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Policy {
    Fifo,
    Optimal,
    Lru,
}

impl Policy {
    /// Every policy, in report order.
    pub const ALL: [Policy; 3] = [Policy::Fifo, Policy::Optimal, Policy::Lru];
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Policy::Fifo => write!(f, "FIFO"),
            Policy::Optimal => write!(f, "Optimal"),
            Policy::Lru => write!(f, "LRU"),
        };
    }
}

/// What happened to a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEntry {
    /// The page was already resident.
    Hit { page: u32, frame: usize },
    /// Fault served by an empty frame.
    Loaded { page: u32, frame: usize },
    /// Fault that evicted `old_page` from `frame`.
    Replaced { old_page: u32, page: u32, frame: usize },
}

impl TraceEntry {
    pub fn is_fault(&self) -> bool {
        return !matches!(self, TraceEntry::Hit { .. });
    }
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            TraceEntry::Hit { page, frame } => write!(f, "Page {} already in frame {}", page, frame),
            TraceEntry::Loaded { page, frame } => {
                write!(f, "Page {} loaded into frame {}", page, frame)
            }
            TraceEntry::Replaced {
                old_page,
                page,
                frame,
            } => write!(
                f,
                "Page {} unloaded from frame {}, Page {} loaded into frame {}",
                old_page, frame, page, frame
            ),
        };
    }
}

/// Full trace and fault count of one policy over one request string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    pub policy: Policy,
    pub entries: Vec<TraceEntry>,
    pub faults: usize,
}

// one report block, newline terminated
impl fmt::Display for SimResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.policy)?;
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        return writeln!(f, "{} page faults", self.faults);
    }
}

/// Steps one policy through a request string, yielding a [`TraceEntry`] per
/// request.
///
/// Owns its frame table and victim-selection state; nothing is shared
/// between two `Sim`s. `num_frames` must be at least 1.
pub struct Sim<'a> {
    pub policy: Policy,
    pub debug: bool,
    requests: &'a [u32],
    frames: FrameTable,
    evictor: Evictor,
    step: usize,
    faults: usize,
}

impl<'a> Sim<'a> {
    pub fn new(policy: Policy, num_frames: usize, requests: &'a [u32], debug: bool) -> Self {
        debug_assert!(num_frames >= 1, "simulation needs at least one frame");

        return Self {
            policy,
            debug,
            requests,
            frames: FrameTable::new(num_frames),
            evictor: Evictor::new(policy, num_frames),
            step: 0,
            faults: 0,
        };
    }

    /// Faults so far.
    pub fn faults(&self) -> usize {
        return self.faults;
    }

    pub fn frames(&self) -> &FrameTable {
        return &self.frames;
    }

    /// Runs the remaining requests and collects the result.
    pub fn run(mut self) -> SimResult {
        let entries: Vec<TraceEntry> = self.by_ref().collect();
        return SimResult {
            policy: self.policy,
            entries,
            faults: self.faults,
        };
    }

    fn fault(&mut self, page: u32, clock: u64) -> TraceEntry {
        self.faults += 1;

        if let Some(frame) = self.frames.first_empty_slot() {
            self.frames.load(frame, page);
            self.evictor.loaded(frame, clock);
            return TraceEntry::Loaded { page, frame };
        }

        let upcoming = &self.requests[self.step..];
        let (frame, reason) = self
            .evictor
            .victim(&self.frames, upcoming)
            .expect("a full frame table has a resident page");

        if self.debug {
            eprintln!("[{}]   victim frame {} ({})", self.policy, frame, reason);
        }

        let entry = match self.frames.load(frame, page) {
            Some(old_page) => TraceEntry::Replaced {
                old_page,
                page,
                frame,
            },
            None => TraceEntry::Loaded { page, frame },
        };
        self.evictor.loaded(frame, clock);
        return entry;
    }
}

impl<'a> Iterator for Sim<'a> {
    type Item = TraceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let page = *self.requests.get(self.step)?;
        self.step += 1;
        // logical time ticks once per request, hits included
        let clock = self.step as u64;

        let entry = match self.frames.lookup(page) {
            Some(frame) => {
                self.evictor.touch(frame, clock);
                TraceEntry::Hit { page, frame }
            }
            None => self.fault(page, clock),
        };

        if self.debug {
            eprintln!("[{}] step {}: {}", self.policy, self.step, entry);
        }

        return Some(entry);
    }
}

/// Runs `policy` over `requests` with `num_frames` frames.
pub fn simulate(policy: Policy, num_frames: usize, requests: &[u32]) -> SimResult {
    return Sim::new(policy, num_frames, requests, false).run();
}

/// Runs every policy, in report order.
pub fn simulate_all(num_frames: usize, requests: &[u32]) -> Vec<SimResult> {
    return Policy::ALL
        .iter()
        .map(|&policy| simulate(policy, num_frames, requests))
        .collect();
}

/// Renders result blocks separated by a blank line.
pub fn render_report(results: &[SimResult]) -> String {
    return results
        .iter()
        .map(|result| result.to_string())
        .collect::<Vec<String>>()
        .join("\n");
}
