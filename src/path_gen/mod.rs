//! Path generation module
//!
//! This module maps Jekyll source paths onto their Hugo destinations.

mod mapper;

pub use mapper::{map_path, map_path_buf, map_path_with, migrate_path};
