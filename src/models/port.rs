// src/models/port.rs

//! Port entities: the raw API list, known ports and counted ports.

use serde::{Deserialize, Serialize};

use crate::models::payload::null_as_default;

/// A port entry as listed by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawPort {
    pub name: String,

    /// Whether the port may be offered as a destination
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: bool,
}

/// A destination-eligible port. The name doubles as the identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KnownPort {
    pub name: String,
    pub id: String,
}

impl KnownPort {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
        }
    }
}

/// A known port with the number of itineraries that touch it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortWithCount {
    pub name: String,
    pub id: String,
    pub count: usize,
}

impl PortWithCount {
    /// "1 cruise" / "N cruises".
    pub fn count_label(&self) -> String {
        match self.count {
            1 => "1 cruise".to_string(),
            n => format!("{n} cruises"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_port_uses_name_as_id() {
        let port = KnownPort::new("Goa");
        assert_eq!(port.id, "Goa");
        assert_eq!(port.name, "Goa");
    }

    #[test]
    fn count_label_pluralizes() {
        let mut port = PortWithCount {
            name: "Goa".to_string(),
            id: "Goa".to_string(),
            count: 1,
        };
        assert_eq!(port.count_label(), "1 cruise");
        port.count = 0;
        assert_eq!(port.count_label(), "0 cruises");
    }

    #[test]
    fn raw_port_destination_defaults_false() {
        let port: RawPort = serde_json::from_str(r#"{"name": "Kochi"}"#).unwrap();
        assert!(!port.destination);
    }
}
