//! Static catalog of city services shown on the home and services pages.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    Normal,
    Maintenance,
    InProgress,
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ServiceStatus::Normal => "Normal",
            ServiceStatus::Maintenance => "Maintenance",
            ServiceStatus::InProgress => "In Progress",
        })
    }
}

#[derive(Debug, Clone)]
pub struct Service {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub status: ServiceStatus,
}

const SERVICES: [Service; 4] = [
    Service {
        id: 1,
        name: "Water Supply",
        description: "Distribution schedule & updates.",
        status: ServiceStatus::Normal,
    },
    Service {
        id: 2,
        name: "Electricity",
        description: "Scheduled outages and notices.",
        status: ServiceStatus::Maintenance,
    },
    Service {
        id: 3,
        name: "Waste Management",
        description: "Pickup schedule & recycling.",
        status: ServiceStatus::Normal,
    },
    Service {
        id: 4,
        name: "Roads & Transport",
        description: "Roadworks and transit alerts.",
        status: ServiceStatus::InProgress,
    },
];

pub fn services() -> &'static [Service] {
    &SERVICES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_four_services() {
        let names: Vec<_> = services().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "Water Supply",
                "Electricity",
                "Waste Management",
                "Roads & Transport"
            ]
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(ServiceStatus::InProgress.to_string(), "In Progress");
        assert_eq!(services()[1].status, ServiceStatus::Maintenance);
    }

    #[test]
    fn test_every_status_label() {
        let labels: Vec<String> = services().iter().map(|s| s.status.to_string()).collect();
        assert_eq!(labels, vec!["Normal", "Maintenance", "Normal", "In Progress"]);
    }
}
