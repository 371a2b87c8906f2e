//! README generation: the stream consumer core, cooperative cancellation,
//! and the single-writer generation controller.

mod cancel;
mod consumer;
mod controller;

pub use cancel::{cancel_pair, CancelHandle, CancelToken};
pub use consumer::stream_readme;
pub use controller::{GenerationController, GenerationState};
