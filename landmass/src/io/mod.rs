//! I/O helpers for landmass commands.

pub mod config;
