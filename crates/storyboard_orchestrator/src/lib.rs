//! Storyboard run orchestration.
//!
//! [`StoryboardExecutor`] parses a script, then walks its scenes strictly in
//! order, asking the driver for an image prompt and then an image for each
//! one. Exactly one collaborator call is in flight at a time. The first
//! failure ends the run; everything finished before it is kept.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_orchestrator::{RunState, StoryboardExecutor};
//! # use storyboard_interface::StoryboardDriver;
//!
//! # async fn run<D: StoryboardDriver>(driver: D) {
//! let executor = StoryboardExecutor::new(driver);
//! let session = executor.execute("**1. A**\n[画面：cat]").await;
//!
//! match session.state() {
//!     RunState::Done { total } => println!("{} frames", total),
//!     RunState::Failed { message } => eprintln!("{}", message),
//!     _ => unreachable!("a finished run is Done or Failed"),
//! }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod observer;
mod session;
mod state;

pub use executor::StoryboardExecutor;
pub use observer::{RunObserver, TracingObserver};
pub use session::StoryboardSession;
pub use state::{GenerationPhase, RunState};
