//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `WalkState`: lifecycle of one seed's frontier walk (idle, running, done)
//! - `PageState`: what happened to a single visited page

mod page_state;
mod walk_state;

// Re-export main types
pub use page_state::PageState;
pub use walk_state::WalkState;
