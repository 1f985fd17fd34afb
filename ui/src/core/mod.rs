//! Platform-agnostic plumbing: storage, timers, platform detection.

pub mod platform;
pub mod storage;
pub mod timing;
pub mod visit;
