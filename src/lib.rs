//! PocketPet game engine library.
//!
//! A tick-driven virtual pet for handhelds with seven buttons and a
//! 128×64 monochrome panel.  The core (input classification, scene
//! stack, pet simulation, rendering to draw primitives) is pure logic;
//! hardware and storage are reached through the port traits in
//! [`app::ports`] and implemented in [`adapters`].

#![deny(unused_must_use)]

pub mod app;
pub mod character;
pub mod config;
pub mod error;
pub mod input;
pub mod pins;
pub mod render;
pub mod save;
pub mod scene;

pub mod adapters;
