//! Application core: game orchestration with no direct I/O.
//!
//! The [`Engine`](service::Engine) ties the input classifier, scene
//! navigator and pet simulation together.  Everything outside (buttons,
//! panel, clock, flash, logs) is reached through the **port traits** in
//! [`ports`], so this layer runs unchanged on the device, in the
//! simulator and under test.

pub mod commands;
pub mod events;
pub mod ports;
pub mod runner;
pub mod service;
