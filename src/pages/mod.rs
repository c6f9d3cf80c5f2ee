//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; browser side effects go through
//! the `net` and `util` seams.

pub mod login;
