use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use std::str::FromStr;

/// VRF name used for neighbors in the global routing table.
pub const NO_VRF: &str = "--";

/// Composite key of a neighbor session: peer address plus VRF.
///
/// Keys order by address first, then VRF, which is the order reports are printed in.
///
/// ```
/// use bgpkit_neighbors::models::NeighborKey;
///
/// let key = NeighborKey::new("1.1.1.1", "VRFNAME");
/// assert_eq!(key.to_string(), "1.1.1.1:VRFNAME");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborKey {
    pub address: String,
    pub vrf: String,
}

impl NeighborKey {
    pub fn new(address: impl Into<String>, vrf: impl Into<String>) -> Self {
        NeighborKey {
            address: address.into(),
            vrf: vrf.into(),
        }
    }
}

impl Display for NeighborKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.address, self.vrf)
    }
}

/// # NeighborRecord
///
/// Summarized state of one BGP peering session, built up line by line from the neighbor block.
///
/// `address`, `vrf` and `remote_as` come from the block's header line and are always present.
/// The remaining fields stay `None` until the matching detail line is seen. All values are kept
/// as the exact text tokens found in the input; `remote_as` in particular is not parsed into a
/// number so unusual tokens (`65000.10`, leading zeros) survive unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborRecord {
    pub address: String,
    pub vrf: String,
    pub remote_as: String,
    pub state: Option<String>,
    pub uptime: Option<String>,
    pub prefix_count: Option<String>,
}

impl NeighborRecord {
    pub fn new(address: impl Into<String>) -> Self {
        NeighborRecord {
            address: address.into(),
            ..Default::default()
        }
    }

    pub fn key(&self) -> NeighborKey {
        NeighborKey::new(self.address.as_str(), self.vrf.as_str())
    }

    /// Returns true when the neighbor sits in the global routing table.
    pub fn is_global(&self) -> bool {
        self.vrf == NO_VRF
    }

    /// Peer address parsed as an IP address. `None` when the device printed something else.
    pub fn peer_ip(&self) -> Option<IpAddr> {
        IpAddr::from_str(self.address.as_str()).ok()
    }

    /// Returns true when the session state is `Established`, compared case-insensitively.
    pub fn is_established(&self) -> bool {
        matches!(&self.state, Some(s) if s.eq_ignore_ascii_case("established"))
    }

    /// Returns the PSV header as a string.
    ///
    /// ```
    /// use bgpkit_neighbors::models::NeighborRecord;
    ///
    /// assert_eq!(
    ///     NeighborRecord::get_psv_header(),
    ///     "neighbor|vrf|remote_as|state|uptime|prefix_count"
    /// );
    /// ```
    pub fn get_psv_header() -> String {
        let fields = [
            "neighbor",
            "vrf",
            "remote_as",
            "state",
            "uptime",
            "prefix_count",
        ];
        fields.join("|")
    }

    /// Converts the record to a pipe-separated line. Missing values are left empty.
    pub fn to_psv(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            &self.address,
            &self.vrf,
            &self.remote_as,
            OptionToStr(&self.state),
            OptionToStr(&self.uptime),
            OptionToStr(&self.prefix_count),
        )
    }
}

/// Helper struct to print an `Option` as its value, or nothing.
pub(crate) struct OptionToStr<'a, T>(pub &'a Option<T>);

impl<T: Display> Display for OptionToStr<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            None => Ok(()),
            Some(x) => write!(f, "{x}"),
        }
    }
}

impl Display for NeighborRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_psv())
    }
}
