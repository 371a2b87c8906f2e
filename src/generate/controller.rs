//! Generation controller: binds aggregator state and consumer outcome into
//! one state record. Single-writer: only the controller mutates the record;
//! everyone else gets snapshots.

use crate::config::ReadmeConfig;
use crate::error::ApiError;
use crate::generate::{consumer, CancelToken};
use crate::provider::GenerativeClient;
use crate::source::SourceFile;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

/// Observable state of the current (or last) generation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationState {
    pub is_generating: bool,
    pub error: Option<String>,
    pub output: String,
}

/// Owns the [`GenerationState`] record across attempts.
#[derive(Default)]
pub struct GenerationController {
    state: Arc<RwLock<GenerationState>>,
}

impl GenerationController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> GenerationState {
        self.state.read().clone()
    }

    /// Run one generation attempt.
    ///
    /// An empty file set records the precondition error and returns without
    /// touching the provider. Otherwise the state is reset to
    /// `{is_generating: true, error: None, output: ""}`, each fragment is
    /// appended to `output` (one state update per fragment), and
    /// `on_fragment` is notified after every append. On failure the
    /// accumulated partial output is preserved alongside the error.
    pub async fn run(
        &self,
        client: &dyn GenerativeClient,
        files: &[SourceFile],
        config: &ReadmeConfig,
        cancel: &CancelToken,
        mut on_fragment: impl FnMut(&str),
    ) -> GenerationState {
        if files.is_empty() {
            let mut state = self.state.write();
            state.error = Some(ApiError::NoSourceFiles.to_string());
            return state.clone();
        }

        *self.state.write() = GenerationState {
            is_generating: true,
            error: None,
            output: String::new(),
        };

        let result = consumer::stream_readme(
            client,
            files,
            config,
            |fragment| {
                // Release the write guard before notifying so the observer
                // can take its own snapshot.
                self.state.write().output.push_str(fragment);
                on_fragment(fragment);
            },
            cancel,
        )
        .await;

        let mut state = self.state.write();
        state.is_generating = false;
        match result {
            Ok(()) => info!(bytes = state.output.len(), "generation completed"),
            Err(err) => {
                warn!(error = %err, "generation failed");
                state.error = Some(err.to_string());
            }
        }
        state.clone()
    }
}
