//! Process lifecycle.
//!
//! ```text
//! 1. Configuration loading
//! 2. Storage connection + schema creation
//! 3. Route table assembly
//! 4. Server start
//!    [running...]
//! 5. Shutdown signal (SIGTERM/SIGINT), in-flight requests drain
//! 6. Storage connection closed
//! ```

mod shutdown;

pub use shutdown::shutdown_signal;
