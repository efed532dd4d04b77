use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Render counters for the result list and its rows.
///
/// Components look this up with `try_consume_context`, so it costs nothing
/// unless an ancestor provides it. Used by diagnostics and component tests.
#[derive(Clone, Default)]
pub struct RenderStats {
    list_renders: Rc<Cell<usize>>,
    row_renders: Rc<RefCell<HashMap<u64, usize>>>,
    mounted_rows: Rc<Cell<usize>>,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_list_render(&self) {
        self.list_renders.set(self.list_renders.get() + 1);
    }

    pub fn record_row_render(&self, product_id: u64) {
        *self.row_renders.borrow_mut().entry(product_id).or_default() += 1;
    }

    /// Counts a row as mounted until the returned guard is dropped.
    pub fn track_mount(&self) -> MountGuard {
        self.mounted_rows.set(self.mounted_rows.get() + 1);
        MountGuard {
            mounted_rows: self.mounted_rows.clone(),
        }
    }

    pub fn list_renders(&self) -> usize {
        self.list_renders.get()
    }

    pub fn row_renders(&self, product_id: u64) -> usize {
        self.row_renders.borrow().get(&product_id).copied().unwrap_or(0)
    }

    pub fn total_row_renders(&self) -> usize {
        self.row_renders.borrow().values().sum()
    }

    pub fn mounted_rows(&self) -> usize {
        self.mounted_rows.get()
    }
}

pub struct MountGuard {
    mounted_rows: Rc<Cell<usize>>,
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        self.mounted_rows.set(self.mounted_rows.get().saturating_sub(1));
    }
}
