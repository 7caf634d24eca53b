// Copyright (c) 2026 The staffseq authors
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Program state tracking.
//!
//! This module provides:
//! - The enumerated top-level editor modes
//! - The shared state register every subsystem reads and writes
//!
//! The register is instance-based: the application root creates one and
//! hands it to collaborators (typically behind an `Arc`), which keeps a
//! single source of truth without hidden global coupling and lets tests
//! run against independent instances.

pub mod machine;
pub mod program_state;

pub use machine::StateMachine;
pub use program_state::ProgramState;
