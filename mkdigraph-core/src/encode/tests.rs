#![expect(clippy::expect_used, reason = "tests require contextual panics")]
//! Unit tests for the encoders and decoders.

use rstest::{fixture, rstest};

use super::{DecodedGraph, EncodeStats, OutputFormat, decode, decode_dot, decode_text, encode};
use crate::{VertexRecord, error::DecodeError};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn records() -> Vec<VertexRecord> {
    vec![
        VertexRecord::new(0, "0".into(), vec!["2".into(), "1".into(), "2".into()]),
        VertexRecord::new(1, "1".into(), vec![]),
        VertexRecord::new(2, "2".into(), vec!["2".into()]),
    ]
}

fn encode_to_string(
    format: OutputFormat,
    records: Vec<VertexRecord>,
) -> Result<String, Box<dyn std::error::Error>> {
    let mut buffer = Vec::new();
    encode(format, &mut buffer, records)?;
    Ok(String::from_utf8(buffer)?)
}

#[rstest]
fn text_encoding_writes_one_line_per_edge(records: Vec<VertexRecord>) -> TestResult {
    let text = encode_to_string(OutputFormat::Text, records)?;
    assert_eq!(text, "0 2\n0 1\n0 2\n1\n2 2\n");
    Ok(())
}

#[rstest]
fn dot_encoding_wraps_statements(records: Vec<VertexRecord>) -> TestResult {
    let dot = encode_to_string(OutputFormat::Dot, records)?;
    assert_eq!(
        dot,
        "digraph {\n  0 -> 2\n  0 -> 1\n  0 -> 2\n  1\n  2 -> 2\n}\n"
    );
    Ok(())
}

#[test]
fn empty_graph_encodings() -> TestResult {
    assert_eq!(encode_to_string(OutputFormat::Text, Vec::new())?, "");
    assert_eq!(encode_to_string(OutputFormat::Dot, Vec::new())?, "digraph {\n}\n");
    Ok(())
}

#[rstest]
#[case(OutputFormat::Text)]
#[case(OutputFormat::Dot)]
fn encoders_report_counts(records: Vec<VertexRecord>, #[case] format: OutputFormat) -> TestResult {
    let stats = encode(format, std::io::sink(), records)?;
    assert_eq!(
        stats,
        EncodeStats {
            vertices: 3,
            edges: 4
        }
    );
    Ok(())
}

#[rstest]
#[case(OutputFormat::Text)]
#[case(OutputFormat::Dot)]
fn decoding_recovers_edges_and_isolated_tails(
    records: Vec<VertexRecord>,
    #[case] format: OutputFormat,
) -> TestResult {
    let expected = DecodedGraph::from_records(records.clone());
    let encoded = encode_to_string(format, records)?;
    let decoded = decode(format, encoded.as_bytes())?;
    assert_eq!(decoded, expected);
    assert_eq!(
        decoded
            .edge_multiset()
            .get(&("0".to_owned(), "2".to_owned())),
        Some(&2)
    );
    Ok(())
}

#[rstest]
#[case::three_fields("a b c\n", 1)]
#[case::blank_line("a b\n\n", 2)]
#[case::double_space("a  b\n", 1)]
fn decode_text_rejects_malformed_lines(#[case] input: &str, #[case] expected_line: usize) {
    match decode_text(input.as_bytes()) {
        Err(DecodeError::MalformedLine { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected malformed line error, got {other:?}"),
    }
}

#[rstest]
#[case::empty("")]
#[case::wrong_header("graph {\n}\n")]
fn decode_dot_requires_header(#[case] input: &str) {
    let err = decode_dot(input.as_bytes()).expect_err("header is required");
    assert!(matches!(err, DecodeError::MissingHeader));
}

#[test]
fn decode_dot_requires_footer() {
    let err = decode_dot("digraph {\n  a -> b\n".as_bytes()).expect_err("footer is required");
    assert!(matches!(err, DecodeError::MissingFooter));
}

#[test]
fn decode_dot_rejects_trailing_content() {
    let err = decode_dot("digraph {\n}\n  a\n".as_bytes()).expect_err("trailing data is rejected");
    assert!(matches!(err, DecodeError::TrailingContent { line: 3 }));
}

#[test]
fn decode_dot_rejects_malformed_statement() {
    let err = decode_dot("digraph {\n  a -> \n}\n".as_bytes()).expect_err("edge needs a head");
    assert!(matches!(err, DecodeError::MalformedLine { line: 2, .. }));
}

#[rstest]
#[case(OutputFormat::Text, "text")]
#[case(OutputFormat::Dot, "dot")]
fn output_format_names(#[case] format: OutputFormat, #[case] expected: &str) {
    assert_eq!(format.to_string(), expected);
}
