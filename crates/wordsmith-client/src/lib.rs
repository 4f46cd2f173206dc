//! # wordsmith-client
//!
//! Implementations of the [`RowSource`](wordsmith_core::traits::RowSource)
//! collaborator contract: [`ApiClient`] executes list queries against the
//! remote Wordsmith API with response caching and identical-request
//! coalescing, and [`MemorySource`] serves datasets held in memory for
//! tests and offline browsing.

mod eval;
pub mod http;
pub mod memory;

pub use http::ApiClient;
pub use memory::MemorySource;
