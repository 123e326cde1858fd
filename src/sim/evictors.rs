use std::fmt;

use super::frames::FrameTable;
use super::Policy;

/// Load-order ring buffer of frame indices for FIFO.
///
/// Capacity is fixed to the number of frames. The front is always the frame
/// whose page was loaded longest ago.
#[derive(Debug, Clone)]
pub struct EvictionQueue {
    slots: Box<[usize]>,
    head: usize,
    tail: usize,
    count: usize,
}

impl EvictionQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        return Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            tail: 0,
            count: 0,
        };
    }

    pub fn len(&self) -> usize {
        return self.count;
    }

    pub fn push(&mut self, frame: usize) {
        debug_assert!(self.count < self.slots.len(), "eviction queue overflow");
        self.slots[self.tail] = frame;
        self.tail = (self.tail + 1) % self.slots.len();
        self.count += 1;
    }

    pub fn pop(&mut self) -> Option<usize> {
        if self.count == 0 {
            return None;
        }
        let frame = self.slots[self.head];
        self.head = (self.head + 1) % self.slots.len();
        self.count -= 1;
        return Some(frame);
    }

    /// Queued frames, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        let capacity = self.slots.len();
        return (0..self.count).map(move |i| self.slots[(self.head + i) % capacity]);
    }
}

/// Why a frame was picked as the victim. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// Front of the FIFO load queue.
    OldestLoad,
    /// LRU timestamp of the victim.
    LastUsed(u64),
    /// Offset of the victim's next reference among the upcoming requests.
    NextUse(Option<usize>),
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Reason::OldestLoad => write!(f, "loaded first"),
            Reason::LastUsed(time) => write!(f, "last used at t={}", time),
            Reason::NextUse(Some(offset)) => write!(f, "next used in {} requests", offset + 1),
            Reason::NextUse(None) => write!(f, "never used again"),
        };
    }
}

/// Victim-selection state for one simulation run.
///
/// Each variant owns the bookkeeping its policy needs: FIFO the load queue,
/// LRU one logical timestamp per frame. Optimal only looks ahead.
#[derive(Debug, Clone)]
pub enum Evictor {
    Fifo(EvictionQueue),
    Optimal,
    Lru(Vec<u64>),
}

impl Evictor {
    pub fn new(policy: Policy, num_frames: usize) -> Self {
        return match policy {
            Policy::Fifo => Evictor::Fifo(EvictionQueue::with_capacity(num_frames)),
            Policy::Optimal => Evictor::Optimal,
            Policy::Lru => Evictor::Lru(vec![0; num_frames]),
        };
    }

    /// A resident page in `frame` was referenced at `clock`.
    pub fn touch(&mut self, frame: usize, clock: u64) {
        if let Evictor::Lru(timestamps) = self {
            timestamps[frame] = clock;
        }
    }

    /// A page was just loaded into `frame` at `clock`, either into an empty
    /// slot or over a victim.
    pub fn loaded(&mut self, frame: usize, clock: u64) {
        match self {
            Evictor::Fifo(queue) => queue.push(frame),
            Evictor::Optimal => {}
            Evictor::Lru(timestamps) => timestamps[frame] = clock,
        }
    }

    /// Picks the frame to evict from a full table. `upcoming` holds the
    /// requests after the current one.
    ///
    /// Ties go to the lowest frame index. Returns None only if nothing is
    /// resident.
    pub fn victim(&mut self, frames: &FrameTable, upcoming: &[u32]) -> Option<(usize, Reason)> {
        return match self {
            Evictor::Fifo(queue) => queue.pop().map(|frame| (frame, Reason::OldestLoad)),
            Evictor::Optimal => farthest_next_use(frames, upcoming),
            Evictor::Lru(timestamps) => least_recently_used(frames, timestamps),
        };
    }
}

fn farthest_next_use(frames: &FrameTable, upcoming: &[u32]) -> Option<(usize, Reason)> {
    let mut best: Option<(usize, Option<usize>)> = None;

    for (frame, page) in frames.resident() {
        let next_use = upcoming.iter().position(|&p| p == page);
        let farther = match best {
            None => true,
            // never-used-again beats any finite distance
            Some((_, best_use)) => match (next_use, best_use) {
                (None, Some(_)) => true,
                (Some(a), Some(b)) => a > b,
                (_, None) => false,
            },
        };
        if farther {
            best = Some((frame, next_use));
        }
    }

    return best.map(|(frame, next_use)| (frame, Reason::NextUse(next_use)));
}

fn least_recently_used(frames: &FrameTable, timestamps: &[u64]) -> Option<(usize, Reason)> {
    let mut best: Option<(usize, u64)> = None;

    for (frame, _) in frames.resident() {
        let time = timestamps[frame];
        if best.map_or(true, |(_, oldest)| time < oldest) {
            best = Some((frame, time));
        }
    }

    return best.map(|(frame, time)| (frame, Reason::LastUsed(time)));
}
