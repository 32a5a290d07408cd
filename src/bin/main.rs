use itertools::Itertools;
use log::{error, info};
use serde_json::json;
use std::io::Write;
use std::net::IpAddr;

use bgpkit_neighbors::formats::{write_psv, write_table};
use bgpkit_neighbors::io::STDIN_PATH;
use bgpkit_neighbors::{NeighborParser, NeighborRecord};
use clap::Parser;
use ipnet::IpNet;

/// bgpkit-neighbors summarizes `show bgp vpnv4 unicast all neighbors` output into a neighbor table.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Opts {
    /// File path to a saved command output, optionally .gz or .bz2 compressed. Reads standard
    /// input when omitted or `-`.
    #[clap(name = "FILE", default_value = STDIN_PATH)]
    file_path: String,

    /// Output as JSON objects
    #[clap(long)]
    json: bool,

    /// Pretty-print JSON output
    #[clap(long)]
    pretty: bool,

    /// Output as PSV entries with header
    #[clap(long)]
    psv: bool,

    /// Count neighbors per session state instead of printing them
    #[clap(short, long)]
    count: bool,

    /// Print nothing and exit with an error if the input has a malformed line
    #[clap(long)]
    strict: bool,

    #[clap(flatten)]
    filters: Filters,
}

#[derive(Parser, Debug)]
struct Filters {
    /// Filter by VRF name regex
    #[clap(short = 'v', long)]
    vrf: Option<String>,

    /// Filter by peer IP address
    #[clap(short = 'j', long)]
    peer_ip: Option<IpAddr>,

    /// Filter by peer IP prefix
    #[clap(short = 'p', long)]
    peer_prefix: Option<IpNet>,

    /// Filter by remote AS
    #[clap(short = 'J', long)]
    remote_as: Option<String>,

    /// Filter by session state, e.g. Established or Idle
    #[clap(short = 's', long)]
    state: Option<String>,
}

fn main() {
    let opts: Opts = Opts::parse();

    env_logger::init();

    let mut parser = match NeighborParser::new(opts.file_path.as_str()) {
        Ok(p) => p,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    let filters = [
        ("vrf", opts.filters.vrf),
        ("peer_ip", opts.filters.peer_ip.map(|v| v.to_string())),
        ("peer_prefix", opts.filters.peer_prefix.map(|v| v.to_string())),
        ("remote_as", opts.filters.remote_as),
        ("state", opts.filters.state),
    ];
    for (filter_type, value) in filters {
        let Some(v) = value else { continue };
        parser = match parser.add_filter(filter_type, v.as_str()) {
            Ok(p) => p,
            Err(err) => {
                eprintln!("Error: {}", err);
                std::process::exit(1);
            }
        };
    }

    let outcome = parser.parse();
    info!("consumed {} lines", outcome.lines);
    if let Some(err) = &outcome.error {
        error!("{}", err);
        if opts.strict {
            std::process::exit(1);
        }
    }

    let records: Vec<&NeighborRecord> = outcome.records().collect();
    info!("reporting {} of {} neighbors", records.len(), outcome.table.len());

    let mut stdout = std::io::stdout().lock();
    let result = if opts.count {
        write_counts(&mut stdout, &records)
    } else if opts.json {
        records.iter().try_for_each(|record| {
            let val = json!(record);
            let output_str = if opts.pretty {
                serde_json::to_string_pretty(&val).unwrap_or_default()
            } else {
                val.to_string()
            };
            writeln!(stdout, "{}", &output_str)
        })
    } else if opts.psv {
        write_psv(&mut stdout, records.iter().copied())
    } else {
        write_table(&mut stdout, records.iter().copied())
    };

    if let Err(e) = result.and_then(|_| stdout.flush()) {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}

/// Total neighbor count, then one line per session state in state order.
fn write_counts<W: Write>(writer: &mut W, records: &[&NeighborRecord]) -> std::io::Result<()> {
    writeln!(writer, "total neighbors: {}", records.len())?;
    let per_state = records
        .iter()
        .map(|r| r.state.as_deref().unwrap_or("unknown"))
        .counts();
    for (state, count) in per_state.into_iter().sorted() {
        writeln!(writer, "{:<15} {}", state, count)?;
    }
    Ok(())
}
