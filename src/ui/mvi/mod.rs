//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to draw itself
//! - **Intent**: a user edit, a clock tick, or data restored from storage
//! - **Reducer**: pure function from (State, Intent) to the next State
//!
//! Side effects (persistence, clock reads) stay outside the reducer, in
//! whoever dispatches the intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
