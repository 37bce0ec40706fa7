//! Integration test driver for the `tests/integration/` submodules.
//!
//! Each `mod` below maps to a file that drives the whole engine against
//! mock adapters.  All tests run on the host with no hardware required.

mod engine_tests;
mod minigame_tests;
mod mock_hw;
mod navigation_tests;
mod persistence_tests;
