// src/engine/ports.rs

//! Port aggregates: the known-port list and per-port itinerary counts.

use std::collections::{HashMap, HashSet};

use crate::models::{Itinerary, KnownPort, PortWithCount, RawPort};

/// Destination-eligible ports from the API list, first occurrence wins.
pub fn known_ports(raw: &[RawPort]) -> Vec<KnownPort> {
    let mut seen = HashSet::new();
    raw.iter()
        .filter(|port| port.destination)
        .filter(|port| seen.insert(port.name.as_str()))
        .map(|port| KnownPort::new(port.name.clone()))
        .collect()
}

/// Number of itineraries touching each port name. An itinerary counts once
/// per port no matter how often the port appears in its route.
pub fn port_counts(itineraries: &[Itinerary]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for itinerary in itineraries {
        for name in itinerary.port_names() {
            *counts.entry(name).or_insert(0) += 1;
        }
    }
    counts
}

/// Known ports with live itinerary counts, in known-port order.
///
/// Ports missing from `known` are never surfaced, even when a route visits
/// them.
pub fn available_ports_with_counts(
    itineraries: &[Itinerary],
    known: &[KnownPort],
) -> Vec<PortWithCount> {
    let counts = port_counts(itineraries);
    known
        .iter()
        .map(|port| PortWithCount {
            name: port.name.clone(),
            id: port.id.clone(),
            count: counts.get(port.name.as_str()).copied().unwrap_or(0),
        })
        .collect()
}

/// Sort ports by count, busiest first. Ties keep their order.
pub fn sort_by_count_desc(ports: &mut [PortWithCount]) {
    ports.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Ports as the destination picker lists them: busiest first, unused hidden.
pub fn listed_ports(mut ports: Vec<PortWithCount>) -> Vec<PortWithCount> {
    ports.retain(|port| port.count > 0);
    sort_by_count_desc(&mut ports);
    ports
}
