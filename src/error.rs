use thiserror::Error;

/// Failure signalled by heap operations that need at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_message() {
        assert_eq!(HeapError::Empty.to_string(), "heap is empty");
    }

    #[test]
    fn boxes_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(HeapError::Empty);
        assert_eq!(err.to_string(), "heap is empty");
    }
}
