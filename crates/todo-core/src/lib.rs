//! Todo Core
//!
//! Platform-free half of the to-do list:
//! - task: the task record and its identifier
//! - store: in-memory task collection and its mutations
//! - storage / cookie / persistence: the single persisted slot
//! - gesture: pointer drag to index pair translation

pub mod config;
mod error;
mod task;
mod store;
mod storage;
mod cookie;
mod persistence;
mod gesture;

pub use error::{StorageError, StorageResult};
pub use task::{Task, TaskId};
pub use store::{Partition, TaskList};
pub use storage::{MemoryStorage, SlotStorage};
pub use cookie::{encode_cookie, lookup_cookie, CookieAttributes, CookieJar, CookieStorage};
pub use persistence::TaskPersistence;
pub use gesture::{
    DragFeedback, DragGesture, GestureState, HitTest, NeighborShift, Point, PressTicket,
    ReorderIntent, RowExtent, RowLayout, Shift,
};
