//! Node id allocation

use crate::NodeId;

/// Hands out `"{prefix}-{n}"` ids with a monotonically increasing counter
#[derive(Debug, Clone)]
pub struct IdAllocator {
    prefix: String,
    next: u64,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Next id for which `taken` returns false
    pub fn allocate(&mut self, taken: impl Fn(&NodeId) -> bool) -> NodeId {
        loop {
            let id = NodeId(format!("{}-{}", self.prefix, self.next));
            self.next += 1;
            if !taken(&id) {
                return id;
            }
        }
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("node")
    }
}
