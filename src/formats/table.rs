use crate::models::NeighborRecord;
use std::io::{self, Write};

/// Header row of the fixed-width neighbor table.
///
/// Kept as a literal: `Prefixes` overflows its 6-wide column and sits one space further right than
/// the row layout would put it.
pub const TABLE_HEADER: &str =
    "Neighbor        VRF            ASN    State       Uptime   Prefixes";

fn format_columns(columns: [&str; 6]) -> String {
    let [neighbor, vrf, asn, state, uptime, prefixes] = columns;
    format!(
        "{:<15} {:<14} {:<6} {:<11} {:<7} {:>6}",
        neighbor, vrf, asn, state, uptime, prefixes
    )
}

/// One table row. Values wider than their column are printed in full, pushing later columns
/// right; missing values print as blanks.
pub fn format_row(record: &NeighborRecord) -> String {
    format_columns([
        record.address.as_str(),
        record.vrf.as_str(),
        record.remote_as.as_str(),
        record.state.as_deref().unwrap_or_default(),
        record.uptime.as_deref().unwrap_or_default(),
        record.prefix_count.as_deref().unwrap_or_default(),
    ])
}

/// Write the header and one row per record.
pub fn write_table<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a NeighborRecord>,
{
    writeln!(writer, "{}", TABLE_HEADER)?;
    for record in records {
        writeln!(writer, "{}", format_row(record))?;
    }
    Ok(())
}

/// Write the PSV header and one pipe-separated line per record.
pub fn write_psv<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a NeighborRecord>,
{
    writeln!(writer, "{}", NeighborRecord::get_psv_header())?;
    for record in records {
        writeln!(writer, "{}", record.to_psv())?;
    }
    Ok(())
}
