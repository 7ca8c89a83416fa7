//! Domain types shared by the dispatcher and every provider plugin.

pub mod ports;
pub mod session;
pub mod webhook;
