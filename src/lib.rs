//! Stackfall (workspace facade crate).
//!
//! Re-exports the engine, its shared types and the persistence layer under one
//! name, and adds the frontend-side screen shake.

pub mod shake;

pub use stackfall_core as core;
pub use stackfall_store as store;
pub use stackfall_types as types;

pub use shake::ScreenShake;
