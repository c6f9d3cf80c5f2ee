//! Utility helpers wrapping browser APIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page logic so
//! the submit flow can run against in-memory substitutes.

pub mod navigation;
pub mod storage;
