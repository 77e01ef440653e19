//! `strq` is an in-memory FIFO queue of strings backed by a singly-linked
//! chain of heap nodes.

pub mod queue;

pub use queue::Queue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("queue is empty")]
    Empty,
}
