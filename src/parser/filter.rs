/*!
Filters for selecting neighbor records after a scan.

Filters are built from a type name and a value string so they can come straight from the command
line:

```
use bgpkit_neighbors::{Filter, Filterable, NeighborRecord};

let filter = Filter::new("vrf", "^CUST-").unwrap();
let mut record = NeighborRecord::new("10.0.0.1");
record.vrf = "CUST-A".to_string();
assert!(record.match_filter(&filter));
```

| type          | value                          | matches when                                  |
|---------------|--------------------------------|-----------------------------------------------|
| `vrf`         | regular expression             | the VRF name matches                          |
| `peer_ip`     | IP address                     | the neighbor address is that IP               |
| `peer_prefix` | IP prefix, e.g. `10.0.0.0/8`   | the neighbor address falls inside the prefix  |
| `remote_as`   | AS token                       | the remote AS text is identical               |
| `state`       | session state                  | the state matches, ignoring ASCII case        |

Neighbor addresses that are not IP addresses never match `peer_ip` or `peer_prefix`.
*/
use crate::error::ParserError;
use crate::error::ParserError::FilterError;
use crate::models::NeighborRecord;
use ipnet::IpNet;
use regex::Regex;
use std::net::IpAddr;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub enum Filter {
    Vrf(Regex),
    PeerIp(IpAddr),
    PeerPrefix(IpNet),
    RemoteAs(String),
    State(String),
}

impl Filter {
    pub fn new(filter_type: &str, filter_value: &str) -> Result<Filter, ParserError> {
        match filter_type {
            "vrf" => match Regex::new(filter_value) {
                Ok(v) => Ok(Filter::Vrf(v)),
                Err(_) => Err(FilterError(format!(
                    "cannot parse VRF regex from {}",
                    filter_value
                ))),
            },
            "peer_ip" => match IpAddr::from_str(filter_value) {
                Ok(v) => Ok(Filter::PeerIp(v)),
                Err(_) => Err(FilterError(format!(
                    "cannot parse peer IP from {}",
                    filter_value
                ))),
            },
            "peer_prefix" => match IpNet::from_str(filter_value) {
                Ok(v) => Ok(Filter::PeerPrefix(v)),
                Err(_) => Err(FilterError(format!(
                    "cannot parse peer prefix from {}",
                    filter_value
                ))),
            },
            "remote_as" => {
                if filter_value.is_empty() || filter_value.contains(char::is_whitespace) {
                    return Err(FilterError(format!(
                        "cannot parse remote AS from {:?}",
                        filter_value
                    )));
                }
                Ok(Filter::RemoteAs(filter_value.to_string()))
            }
            "state" => {
                if filter_value.is_empty() {
                    return Err(FilterError("empty session state filter".to_string()));
                }
                Ok(Filter::State(filter_value.to_string()))
            }
            _ => Err(FilterError(format!("unknown filter type: {}", filter_type))),
        }
    }
}

pub trait Filterable {
    fn match_filter(&self, filter: &Filter) -> bool;
    fn match_filters(&self, filters: &[Filter]) -> bool;
}

impl Filterable for NeighborRecord {
    fn match_filter(&self, filter: &Filter) -> bool {
        match filter {
            Filter::Vrf(v) => v.is_match(self.vrf.as_str()),
            Filter::PeerIp(v) => self.peer_ip().map(|ip| ip == *v).unwrap_or(false),
            Filter::PeerPrefix(v) => self.peer_ip().map(|ip| v.contains(&ip)).unwrap_or(false),
            Filter::RemoteAs(v) => self.remote_as == *v,
            Filter::State(v) => match &self.state {
                Some(state) => state.eq_ignore_ascii_case(v),
                None => false,
            },
        }
    }

    fn match_filters(&self, filters: &[Filter]) -> bool {
        filters.iter().all(|f| self.match_filter(f))
    }
}
