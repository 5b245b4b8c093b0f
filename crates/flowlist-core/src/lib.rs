//! flowlist-core
//!
//! Core building blocks for the Flowlist task tracker.
//!
//! # Module layout
//! - **domain**: entities and value types (ids, priority, task, errors)
//! - **ports**: abstraction seams (Clock, Storage, IdGenerator)
//! - **impls**: storage adapters (MemoryStorage, FileStorage)
//! - **store**: TaskStore, the single writer with write-through persistence
//! - **views**: stateless readers (query filter, analytics, calendar grid)
//!
//! The store owns the collection; views borrow slices from it and are
//! recomputed per call. Time and identity come in through ports so tests
//! can pin both.

pub mod domain;
pub mod impls;
pub mod ports;
pub mod store;
pub mod views;

pub use domain::{
    Priority, PriorityFilter, StorageError, Task, TaskDraft, TaskId, TaskPatch, TaskStoreError,
};
pub use store::{STORAGE_KEY, TaskStore};
