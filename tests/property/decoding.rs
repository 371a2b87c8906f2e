//! Property-based tests for stream line decoding

use proptest::prelude::*;
use quill::provider::sse::LineDecoder;

/// The decoder yields every line exactly once, in order, no matter how the
/// byte stream is chunked.
#[test]
fn test_line_decoder_chunking_invariance_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let input = (
        proptest::collection::vec("[ -~]{0,40}", 0..12),
        proptest::collection::vec(any::<u16>(), 0..12),
    );
    runner
        .run(&input, |(lines, cuts)| {
            let joined: String = lines.iter().map(|line| format!("{line}\n")).collect();
            let bytes = joined.as_bytes();

            let mut positions: Vec<usize> = cuts
                .iter()
                .map(|cut| *cut as usize % (bytes.len() + 1))
                .collect();
            positions.sort_unstable();
            positions.dedup();

            let mut decoder = LineDecoder::new();
            let mut got = Vec::new();
            let mut prev = 0usize;
            for pos in positions {
                got.extend(decoder.feed(&bytes[prev..pos]));
                prev = pos;
            }
            got.extend(decoder.feed(&bytes[prev..]));
            if let Some(remainder) = decoder.take_remainder() {
                got.push(remainder);
            }

            assert_eq!(got, lines);
            Ok(())
        })
        .unwrap();
}

/// CRLF and LF terminated streams decode to the same lines.
#[test]
fn test_line_decoder_crlf_equivalence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    let lines = proptest::collection::vec("[ -~]{0,40}", 0..12);
    runner
        .run(&lines, |lines| {
            let lf: String = lines.iter().map(|line| format!("{line}\n")).collect();
            let crlf: String = lines.iter().map(|line| format!("{line}\r\n")).collect();

            let mut lf_decoder = LineDecoder::new();
            let mut crlf_decoder = LineDecoder::new();
            assert_eq!(
                lf_decoder.feed(lf.as_bytes()),
                crlf_decoder.feed(crlf.as_bytes())
            );
            Ok(())
        })
        .unwrap();
}
