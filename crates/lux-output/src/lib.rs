//! `lux-output` — recording simulation runs.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`row`]      | `AgentSnapshotRow`, `TickSummaryRow`                  |
//! | [`writer`]   | The `OutputWriter` trait                              |
//! | [`csv`]      | `CsvWriter` backend                                   |
//! | [`observer`] | `SimOutputObserver<W>` — bridges `SimObserver` to a writer |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                      |
//!
//! Nothing here feeds back into the simulation: output is strictly a read of
//! the committed per-tick state.  The summary stream carries the synchrony
//! measurements (lit count, Kuramoto order) that make a headless run
//! interpretable without rendering a single frame.

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
