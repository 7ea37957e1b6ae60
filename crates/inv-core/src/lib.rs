pub mod allocator;
pub mod error;
pub mod pipeline;
pub mod snapshot;
pub mod table;
pub mod validate;

pub use allocator::{SlotPlan, TriggerSlot, allocate, reservation_count};
pub use error::{CorruptReason, GenerationError, Result};
pub use pipeline::{Generation, Preflight, check_budget, generate, preflight};
pub use snapshot::flatten;
pub use table::build_table;
pub use validate::validate_preset;
