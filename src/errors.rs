use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum HeapError {
    #[error("Cannot extract from an empty heap")]
    EmptyHeap,

    #[error("Unknown heap ordering {0:?}, expected \"min\" or \"max\"")]
    UnknownOrdering(String),
}
