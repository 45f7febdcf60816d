use std::sync::atomic::{AtomicUsize, Ordering};

// Single static counter for all strokes
static NEXT_STROKE_ID: AtomicUsize = AtomicUsize::new(1);

/// Handle identifying one stroke for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(usize);

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub fn generate_id() -> StrokeId {
    StrokeId(NEXT_STROKE_ID.fetch_add(1, Ordering::Relaxed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let first = generate_id();
        let second = generate_id();
        assert_ne!(first, second);
        assert!(second > first);
    }
}
