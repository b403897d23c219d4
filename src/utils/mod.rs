//! Utility modules: dominance analysis, iterate traces and statistics, progress events.

pub mod convergence;
pub mod dominance;
pub mod events;

pub use convergence::{SolveStats, Trace};
pub use dominance::{check_dominance, dominance_margins, first_violation, is_strictly_dominant, margin_at};
pub use events::SolveEvent;
