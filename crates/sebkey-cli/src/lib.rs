//! # sebkey-cli — Config Key CLI
//!
//! Provides the `sebkey` command: reads a SEB configuration file obtained
//! from an exam webpage and prints the `X-SafeExamBrowser-ConfigKeyHash`
//! header value needed to access the exam from an unsupported platform.
//!
//! All decision logic lives in `sebkey-core`; this crate is file reading,
//! argument handling, and presentation.

pub mod hash;
