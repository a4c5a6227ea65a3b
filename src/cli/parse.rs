use wayfinder_core::format::OutputFormat;
use wayfinder_core::graph::VertexId;
use wayfinder_core::queue::QueueKind;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse vertex id (`3` or `v3`) from string
pub fn parse_vertex(s: &str) -> std::result::Result<VertexId, String> {
    s.parse::<VertexId>().map_err(|e| e.to_string())
}

/// Parse frontier queue kind from string
pub fn parse_queue_kind(s: &str) -> std::result::Result<QueueKind, String> {
    s.parse::<QueueKind>().map_err(|e| e.to_string())
}
