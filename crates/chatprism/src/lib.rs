//! Top-level facade crate for chatprism.
//!
//! Re-exports the component/envelope builders and the relay library so users
//! can depend on a single crate.

pub mod core {
    pub use chatprism_core::*;
}

pub mod relay {
    pub use chatprism_relay::*;
}
