//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is a plain value plus a pure transition function so the submit flow
//! can be exercised without a rendering environment; pages hold it in a
//! signal and feed events through `reduce`.

pub mod login;
