//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod analysis;

pub use analysis::{get_final_result, get_state, process_frame, reset_session};
