use anyhow::Result;

use smartcity::catalog::{self, Service};

pub fn home() -> Result<()> {
    println!("Welcome to SmartCity Portal");
    println!("Access public services, report issues and interact with city authorities.");
    println!();
    println!("  Public Services      Water, Electricity, Waste & Transit updates.");
    println!("  Infrastructure       Roads, Street-lights, Bridges: real-time status.");
    println!("  Citizen Interaction  Submit issues and track them end-to-end.");
    println!();
    println!("Featured Services:");
    for service in catalog::services() {
        println!("{}", service_line(service, true));
    }
    Ok(())
}

pub fn run() -> Result<()> {
    println!("All Services:");
    for service in catalog::services() {
        println!("{}", service_line(service, false));
    }
    Ok(())
}

fn service_line(service: &Service, with_status: bool) -> String {
    if with_status {
        format!(
            "  {:<20} {:<13} {}",
            service.name,
            format!("[{}]", service.status),
            service.description
        )
    } else {
        format!("  {:<20} {}", service.name, service.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_line_with_status() {
        let line = service_line(&catalog::services()[3], true);
        assert!(line.contains("Roads & Transport"));
        assert!(line.contains("[In Progress]"));
    }

    #[test]
    fn test_service_line_without_status() {
        let line = service_line(&catalog::services()[0], false);
        assert!(line.contains("Water Supply"));
        assert!(!line.contains('['));
    }

    #[test]
    fn test_pages_render() {
        assert!(home().is_ok());
        assert!(run().is_ok());
    }
}
