//! TaskStore: the single writer over the task collection.
//!
//! The whole collection lives in memory in insertion order and is written
//! through to storage as one JSON payload after every successful mutation.
//! Views (`views::*`) read slices borrowed from here and never mutate.
//!
//! Write-failure semantics: the in-memory mutation is kept and the call
//! returns `StorageWrite`, so the caller knows the change may not survive a
//! restart but does not lose it in this session.

use tracing::{debug, info, warn};

use crate::domain::{StorageError, Task, TaskDraft, TaskId, TaskPatch, TaskStoreError};
use crate::ports::{Clock, IdGenerator, Storage};

/// Key the collection is persisted under.
pub const STORAGE_KEY: &str = "flowlist-tasks";

/// Authoritative task collection with write-through persistence.
///
/// Dependencies are injected at construction; the store never reaches for
/// wall-clock time or entropy on its own.
pub struct TaskStore<S, C, G> {
    storage: S,
    clock: C,
    ids: G,
    tasks: Vec<Task>,
}

impl<S: Storage, C: Clock, G: IdGenerator> TaskStore<S, C, G> {
    /// Create a store with an empty in-memory collection. Call [`load`]
    /// to pick up a previously persisted one.
    ///
    /// [`load`]: TaskStore::load
    pub fn new(storage: S, clock: C, ids: G) -> Self {
        Self {
            storage,
            clock,
            ids,
            tasks: Vec::new(),
        }
    }

    /// Read the persisted collection into memory.
    ///
    /// An absent payload is an empty collection. A present but unparseable
    /// payload is `CorruptPayload`: the error is surfaced and the stored
    /// bytes are left untouched rather than silently replaced.
    pub fn load(&mut self) -> Result<usize, TaskStoreError> {
        let payload = self
            .storage
            .get(STORAGE_KEY)
            .map_err(TaskStoreError::StorageRead)?;

        let Some(payload) = payload else {
            self.tasks = Vec::new();
            info!("no persisted tasks, starting empty");
            return Ok(0);
        };

        let mut tasks: Vec<Task> = serde_json::from_str(&payload).map_err(|err| {
            warn!(error = %err, "persisted payload is not a valid task collection");
            TaskStoreError::CorruptPayload(err)
        })?;
        for task in &mut tasks {
            task.normalize();
        }

        let count = tasks.len();
        self.tasks = tasks;
        info!(count, "tasks loaded");
        Ok(count)
    }

    /// Create a task from a draft, assign `id` and `created_at`, persist.
    pub fn add(&mut self, draft: TaskDraft) -> Result<Task, TaskStoreError> {
        if draft.title.trim().is_empty() {
            return Err(TaskStoreError::EmptyTitle);
        }

        let id = self.ids.generate_task_id();
        let task = Task::new(id, self.clock.now(), draft);
        self.tasks.push(task.clone());
        self.persist()?;

        debug!(%id, title = %task.title, "task added");
        Ok(task)
    }

    /// Apply a partial update to an existing task, persist.
    pub fn update(&mut self, id: TaskId, patch: TaskPatch) -> Result<Task, TaskStoreError> {
        if let Some(title) = &patch.title
            && title.trim().is_empty()
        {
            return Err(TaskStoreError::EmptyTitle);
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.apply(patch);
        let updated = task.clone();
        self.persist()?;

        debug!(%id, "task updated");
        Ok(updated)
    }

    /// Flip completion state, stamping `completed_at` from the clock on
    /// completion and clearing it on reopen. Persists.
    pub fn toggle(&mut self, id: TaskId) -> Result<Task, TaskStoreError> {
        let now = self.clock.now();
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        task.toggle(now);
        let toggled = task.clone();
        self.persist()?;

        debug!(%id, completed = toggled.completed, "task toggled");
        Ok(toggled)
    }

    /// Remove a task, persist, return the removed task.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, TaskStoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskStoreError::NotFound(id))?;
        let removed = self.tasks.remove(idx);
        self.persist()?;

        debug!(%id, "task deleted");
        Ok(removed)
    }

    /// The collection in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a single task.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Drop every task and delete the persisted payload, so the next
    /// `load` sees "absent", not "corrupt".
    pub fn clear(&mut self) -> Result<(), TaskStoreError> {
        self.tasks.clear();
        self.storage
            .remove(STORAGE_KEY)
            .map_err(TaskStoreError::StorageWrite)?;
        info!("all tasks cleared");
        Ok(())
    }

    /// Pretty-printed JSON of the full collection.
    pub fn export(&self) -> Result<String, TaskStoreError> {
        serde_json::to_string_pretty(&self.tasks)
            .map_err(|err| TaskStoreError::StorageWrite(StorageError::Backend(err.to_string())))
    }

    /// Replace the collection with a previously exported payload, persist.
    ///
    /// A malformed payload is `CorruptPayload` and leaves both the
    /// collection and storage unchanged.
    pub fn import(&mut self, payload: &str) -> Result<usize, TaskStoreError> {
        let mut tasks: Vec<Task> =
            serde_json::from_str(payload).map_err(TaskStoreError::CorruptPayload)?;
        for task in &mut tasks {
            task.normalize();
        }

        self.tasks = tasks;
        self.persist()?;

        let count = self.tasks.len();
        info!(count, "tasks imported");
        Ok(count)
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.len() - self.completed_count()
    }

    /// Write the whole collection through to storage.
    fn persist(&mut self) -> Result<(), TaskStoreError> {
        let payload = serde_json::to_string(&self.tasks)
            .map_err(|err| TaskStoreError::StorageWrite(StorageError::Backend(err.to_string())))?;
        self.storage
            .set(STORAGE_KEY, &payload)
            .map_err(TaskStoreError::StorageWrite)
    }
}
