//! End-to-end generation flows: controller + consumer against scripted
//! streaming clients.

use crate::integration::test_utils::MockStreamClient;
use quill::config::ReadmeConfig;
use quill::error::ApiError;
use quill::generate::{cancel_pair, GenerationController};
use quill::source::SourceFile;

fn files() -> Vec<SourceFile> {
    vec![SourceFile::new("a.ts", "x")]
}

#[tokio::test]
async fn empty_file_list_never_contacts_the_provider() {
    let controller = GenerationController::new();
    let client = MockStreamClient::new(vec![Ok("unused".to_string())]);
    let (_handle, token) = cancel_pair();

    let state = controller
        .run(&client, &[], &ReadmeConfig::default(), &token, |_| {})
        .await;

    assert_eq!(client.call_count(), 0);
    assert!(state.error.is_some());
    assert_eq!(state.output, "");
    assert!(!state.is_generating);
}

#[tokio::test]
async fn streamed_fragments_concatenate_exactly() {
    let controller = GenerationController::new();
    let client = MockStreamClient::new(vec![
        Ok("# Hi".to_string()),
        Ok("\nWorld".to_string()),
    ]);
    let (_handle, token) = cancel_pair();

    let mut observed = Vec::new();
    let state = controller
        .run(&client, &files(), &ReadmeConfig::default(), &token, |_| {
            observed.push(controller.state().output)
        })
        .await;

    assert_eq!(state.output, "# Hi\nWorld");
    assert_eq!(state.error, None);
    assert!(!state.is_generating);
    // Output grows monotonically by concatenation, never truncated or
    // reordered.
    assert_eq!(observed, vec!["# Hi".to_string(), "# Hi\nWorld".to_string()]);
    for pair in observed.windows(2) {
        assert!(pair[1].starts_with(&pair[0]));
    }
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn mid_stream_failure_preserves_partial_output() {
    let controller = GenerationController::new();
    let client = MockStreamClient::new(vec![
        Ok("partial".to_string()),
        Err(ApiError::ProviderRequestFailed("connection reset".to_string())),
    ]);
    let (_handle, token) = cancel_pair();

    let state = controller
        .run(&client, &files(), &ReadmeConfig::default(), &token, |_| {})
        .await;

    assert!(!state.is_generating);
    assert_eq!(state.output, "partial");
    let error = state.error.expect("error must be set");
    assert!(!error.is_empty());
}

#[tokio::test]
async fn retrigger_after_failure_starts_from_clean_state() {
    let controller = GenerationController::new();
    let (_handle, token) = cancel_pair();

    let failing = MockStreamClient::new(vec![Err(ApiError::ProviderError("boom".to_string()))]);
    controller
        .run(&failing, &files(), &ReadmeConfig::default(), &token, |_| {})
        .await;
    assert!(controller.state().error.is_some());

    let ok = MockStreamClient::new(vec![Ok("fresh".to_string())]);
    let state = controller
        .run(&ok, &files(), &ReadmeConfig::default(), &token, |_| {})
        .await;

    assert_eq!(state.error, None);
    assert_eq!(state.output, "fresh");
}

#[tokio::test]
async fn consumer_payload_embeds_files_in_order() {
    let controller = GenerationController::new();
    let client = MockStreamClient::new(vec![Ok("ok".to_string())]);
    let (_handle, token) = cancel_pair();

    let files = vec![
        SourceFile::new("zeta.rs", "z"),
        SourceFile::new("alpha.rs", "a"),
    ];
    controller
        .run(&client, &files, &ReadmeConfig::default(), &token, |_| {})
        .await;

    let prompt = client.last_prompt.lock().clone().expect("prompt captured");
    let zeta = prompt.find("File: zeta.rs").unwrap();
    let alpha = prompt.find("File: alpha.rs").unwrap();
    assert!(zeta < alpha, "payload must keep arrival order");
}

#[tokio::test]
async fn cancellation_mid_stream_keeps_streamed_output() {
    let controller = GenerationController::new();
    let client = MockStreamClient::pending_after(vec![Ok("partial".to_string())]);
    let (handle, token) = cancel_pair();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let files = files();
    let config = ReadmeConfig::default();
    let run = controller.run(
        &client,
        &files,
        &config,
        &token,
        move |fragment| {
            let _ = tx.send(fragment.to_string());
        },
    );
    let cancel_after_first_fragment = async {
        assert_eq!(rx.recv().await.as_deref(), Some("partial"));
        handle.cancel();
    };

    let (state, ()) = tokio::join!(run, cancel_after_first_fragment);

    assert!(!state.is_generating);
    assert_eq!(state.output, "partial");
    assert_eq!(state.error.as_deref(), Some("Generation cancelled"));
}
