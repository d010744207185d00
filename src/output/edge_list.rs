use crate::core::edge::Edge;
use std::io::Write;

/// Write one `src dst weight` line per edge, in iteration order.
pub fn write_edges<W: Write>(
    writer: W,
    edges: impl IntoIterator<Item = Edge>,
) -> anyhow::Result<u64> {
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    let mut written = 0;
    for edge in edges {
        csv_writer.write_record([
            edge.src.to_string(),
            edge.dst.to_string(),
            edge.weight.to_string(),
        ])?;
        written += 1;
    }
    csv_writer.flush()?;

    anyhow::Ok(written)
}
