//! Demo data inserted at startup.
//!
//! Each table is seeded only while it is empty, so restarting against a
//! persistent store does not duplicate rows.
use tracing::{info, instrument};

use models::{home_service::NewService, provider::NewProvider};

use crate::{catalog::ServiceRepository, errors::ServiceError, providers::ProviderRepository};

/// Rows inserted by one seeding pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub services: usize,
    pub providers: usize,
}

pub fn default_services() -> Vec<NewService> {
    vec![
        NewService::new("AC Repair", "ac_unit", "Fix your AC"),
        NewService::new("Cleaner", "cleaning_services", "Home cleaning"),
        NewService::new("Plumber", "plumbing", "Fix leaks"),
        NewService::new("Electrician", "electrical_services", "Wiring help"),
        NewService::new("Maid", "cleaning_services", "Daily chores helper"),
        NewService::new("Painter", "format_paint", "House painting"),
        NewService::new("Carpenter", "handyman", "Woodwork & furniture"),
        NewService::new("Gardener", "grass", "Garden maintenance"),
        NewService::new("Pest Control", "bug_report", "Remove pests"),
    ]
}

pub fn default_providers() -> Vec<NewProvider> {
    let at = |name: &str, service_type: &str, price: &str, gender: &str, phone: &str, rating: f64, img: u8| NewProvider {
        name: name.into(),
        service_type: service_type.into(),
        price: Some(price.into()),
        gender: Some(gender.into()),
        phone: Some(phone.into()),
        rating: Some(rating),
        lat: Some(12.9716),
        lng: Some(77.5946),
        image: Some(format!("https://i.pravatar.cc/150?img={img}")),
    };
    vec![
        at("Asha", "Maid", "₹300/hr", "Female", "+91 90000 00001", 4.5, 1),
        at("Raju", "Plumber", "₹350/hr", "Male", "+91 90000 00002", 4.7, 2),
    ]
}

/// Insert the fixed catalog and providers into whichever tables are empty.
#[instrument(skip_all)]
pub async fn seed_defaults(
    services: &dyn ServiceRepository,
    providers: &dyn ProviderRepository,
) -> Result<SeedReport, ServiceError> {
    let mut report = SeedReport::default();

    if services.count().await? == 0 {
        for s in default_services() {
            services.save(s).await?;
            report.services += 1;
        }
    } else {
        info!(event = "seed_skipped", table = "service", "table not empty");
    }

    if providers.count().await? == 0 {
        for p in default_providers() {
            providers.save(p).await?;
            report.providers += 1;
        }
    } else {
        info!(event = "seed_skipped", table = "provider", "table not empty");
    }

    info!(event = "seed_done", services = report.services, providers = report.providers, "data seeding completed");
    Ok(report)
}
