//! Property-based tests for the campaign list
//!
//! Property tests verify invariants that should hold for every event
//! sequence, rather than for hand-picked cases.
//!
//! ## Test Modules
//!
//! - `list_state_props`: Tests for the list-state reducer
//!   - Selection matches an ordered model and never holds duplicates
//!   - Action button disabled iff bulk mode with an empty selection
//!   - Archive failure only clears `loading`
//!   - Status change always drops search and resets sort
//!   - Status and sort cycling is reversible
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod list_state_props;
