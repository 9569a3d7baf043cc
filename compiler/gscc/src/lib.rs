//! GSC front-end CLI library.
//!
//! The binary is a thin dispatcher over [`commands`].

pub mod commands;
