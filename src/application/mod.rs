// src/application/mod.rs
//
// Application Layer - UI Boundary

pub mod notices;

pub use notices::{Notice, NoticeKind};
