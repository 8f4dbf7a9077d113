// Shared client pieces for the GraphQL subscription smoke tester

pub mod client;
pub mod console;
pub mod error;
pub mod messages;
pub mod session;
pub mod subscription;

pub use client::{connect, run, ClientConfig};
pub use console::{Console, WriterConsole};
pub use error::ClientError;
pub use messages::{ConnectionInit, StartMessage};
pub use session::Outcome;
pub use subscription::Variant;
