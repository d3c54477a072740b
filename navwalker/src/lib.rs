//! Expose navwalker's command line plumbing for use in tests and benchmarks.
//! Rendering itself lives in `navwalker-html`.
pub mod cli;
pub mod render;
