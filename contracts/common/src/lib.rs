//! Shared utilities for the Harvest contract suite.
//!
//! This crate provides the single-owner authorization helpers used by
//! every contract in the workspace. Helpers here only read and write
//! storage; callers are responsible for `require_auth()` and for
//! mapping a failed check onto their own error enum, so each contract
//! keeps full control of its error surface.

#![no_std]

pub mod ownable;

pub use ownable::*;
