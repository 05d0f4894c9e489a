//! Storage layer for portfolio content.
//!
//! This module provides the repository abstraction content views are fed from. An
//! explicit repository value replaces shared, module-level demo arrays: callers construct
//! one and pass it where it is needed.
//!
//! # Modules
//!
//! - `backend`: [`Repository`] trait
//! - `memory`: In-memory implementation
//! - `json`: JSON file implementation with atomic writes
//! - `store`: One JSON repository per content kind

pub mod backend;
pub mod json;
pub mod memory;
pub mod store;

pub use backend::Repository;
pub use json::JsonRepository;
pub use memory::MemoryRepository;
pub use store::ContentStore;
