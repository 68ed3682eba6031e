// src/commands/mod.rs
// This file declares the existence of our command modules.

pub mod profile;
