mod error_coverage;
mod validation_edges;
