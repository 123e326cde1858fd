//! Page replacement simulation.
//!
//! Runs FIFO, Optimal and LRU over a fixed reference string and records,
//! for every request, whether it hit a resident page, filled an empty frame,
//! or evicted a victim.
//!
//! # Modules
//! - [`sim`] - frame table, victim selection and the step-by-step simulator
//! - [`input`] - workload file parsing
//! - [`sweep`] - fault counts across a range of frame counts
//! - [`generate`] - random workloads
//! - [`error`] - crate error type
//!
//! ```
//! use pager_sim::sim::{simulate, Policy};
//!
//! let result = simulate(Policy::Lru, 3, &[1, 2, 3, 1, 4]);
//! assert_eq!(result.faults, 4);
//! ```

pub mod error;
pub mod generate;
pub mod input;
pub mod sim;
pub mod sweep;

pub use error::{Error, Result};
pub use input::Workload;
pub use sim::{simulate, simulate_all, Policy, SimResult, TraceEntry};
