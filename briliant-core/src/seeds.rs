//! Peer-discovery seeds.
//!
//! Fixed seeds are compiled in as compact `SeedSpec6` records (see
//! `seed_tables.rs`, written by the `generate_seeds` binary) and expanded
//! into `SeedAddress` values when a parameter set is built.

use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use serde::Serialize;

pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

/// Service bit advertised by full nodes.
pub const NODE_NETWORK: u64 = 1;

/// A compact fixed-seed record: an IPv6-layout address and a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4-mapped records (`::ffff:a.b.c.d`) come back as IPv4.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = Ipv6Addr::from(self.addr);
        let ip = match ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(ip),
        };
        SocketAddr::new(ip, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: &str, host: &str) -> Self {
        DnsSeed {
            name: name.to_string(),
            host: host.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: u64,
    pub last_seen: DateTime<Utc>,
}

/// Expands compiled seed records into addresses.
///
/// A node only needs one or two seeds: once connected it receives plenty of
/// addresses with newer timestamps. Seeds are therefore given a random
/// last-seen time between one and two weeks ago.
pub fn convert_seed6(table: &[SeedSpec6]) -> Vec<SeedAddress> {
    convert_seed6_with(table, Utc::now(), &mut rand::thread_rng())
}

pub fn convert_seed6_with<R: Rng>(
    table: &[SeedSpec6],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SeedAddress> {
    table
        .iter()
        .map(|spec| {
            let age = rng.gen_range(0..ONE_WEEK_SECS) + ONE_WEEK_SECS;
            SeedAddress {
                addr: spec.socket_addr(),
                services: NODE_NETWORK,
                last_seen: now - ChronoDuration::seconds(age),
            }
        })
        .collect()
}

/// Parses one seed-list entry: `a.b.c.d`, `a.b.c.d:port`, a bare IPv6
/// address or `[ipv6]:port`. Entries without a port use `default_port`.
pub fn parse_seed_spec(entry: &str, default_port: u16) -> Result<SeedSpec6> {
    let entry = entry.trim();
    let socket = match SocketAddr::from_str(entry) {
        Ok(socket) => socket,
        Err(_) => {
            let ip = IpAddr::from_str(entry)
                .with_context(|| format!("Unrecognised seed address '{}'", entry))?;
            SocketAddr::new(ip, default_port)
        }
    };

    if socket.port() == 0 {
        return Err(anyhow!("Seed address '{}' has port 0", entry));
    }

    let addr = match socket.ip() {
        IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
        IpAddr::V6(v6) => v6.octets(),
    };

    Ok(SeedSpec6 {
        addr,
        port: socket.port(),
    })
}

/// Parses a seed list, skipping blank lines and `#` comments.
pub fn parse_seed_list(contents: &str, default_port: u16) -> Result<Vec<SeedSpec6>> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.split('#').next().unwrap_or("").trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_number, line)| {
            parse_seed_spec(line, default_port).with_context(|| format!("line {}", line_number))
        })
        .collect()
}

/// Renders a table as Rust source for `seed_tables.rs`.
pub fn render_seed_table(name: &str, specs: &[SeedSpec6]) -> String {
    let mut out = format!("pub const {}: &[SeedSpec6] = &[\n", name);
    for spec in specs {
        let bytes = spec
            .addr
            .iter()
            .map(|b| format!("0x{:02x}", b))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "    SeedSpec6 {{ addr: [{}], port: {} }},\n",
            bytes, spec.port
        ));
    }
    out.push_str("];\n");
    out
}
