// Common test utilities
#![allow(dead_code)]

pub mod client;
pub mod fixtures;
pub mod harness;

pub use client::*;
pub use fixtures::*;
pub use harness::*;
