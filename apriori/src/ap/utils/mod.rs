pub mod storage;

pub use storage::{FrequentItemsets, FrequentLevel, ItemsetStorage, StopReason};
