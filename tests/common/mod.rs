#![allow(dead_code)]

use freight_dispatch::domain::{
    Cargo, CargoType, Destination, Driver, DriverLicense, DriverLicenseCategory, LicenseStatus,
    Order, OrderStatus, Vehicle, VehicleInspection,
};
use time::{macros::datetime, Duration, OffsetDateTime};

pub const NOW: OffsetDateTime = datetime!(2026-05-20 12:00 UTC);

pub fn now() -> OffsetDateTime {
    NOW
}

pub fn category(id: &str, notation: &str) -> DriverLicenseCategory {
    DriverLicenseCategory {
        id: id.to_string(),
        notation: notation.to_string(),
    }
}

pub fn cargo_type(id: &str, name: &str) -> CargoType {
    CargoType {
        id: id.to_string(),
        name: name.to_string(),
        description: String::new(),
    }
}

pub fn license(
    categories: Vec<DriverLicenseCategory>,
    status: LicenseStatus,
    expired_at: OffsetDateTime,
) -> DriverLicense {
    DriverLicense {
        id: format!("license-{}", categories.len()),
        driver_id: "driver-1".to_string(),
        series: "77".to_string(),
        number: "123456".to_string(),
        issued_at: datetime!(2016-01-01 0:00 UTC),
        expired_at,
        status,
        categories,
    }
}

pub fn driver(licenses: Vec<DriverLicense>) -> Driver {
    Driver {
        id: "driver-1".to_string(),
        first_name: "Ivan".to_string(),
        last_name: "Petrov".to_string(),
        licenses,
    }
}

pub fn vehicle(
    capacity_kg: u32,
    categories: Vec<DriverLicenseCategory>,
    cargo_types: Vec<CargoType>,
) -> Vehicle {
    Vehicle {
        id: "vehicle-1".to_string(),
        car_number: "A123BC77".to_string(),
        brand_id: "1".to_string(),
        load_capacity_kg: capacity_kg,
        allowable_categories: categories,
        allowable_cargo_types: cargo_types,
        inspections: Vec::new(),
    }
}

pub fn inspection(days_ago: i64, grade: u8) -> VehicleInspection {
    VehicleInspection {
        id: format!("inspection-{days_ago}"),
        passed_at: NOW - Duration::days(days_ago),
        grade,
        description: String::new(),
    }
}

pub fn destination() -> Destination {
    Destination {
        region: "Moscow Oblast".to_string(),
        city: "Khimki".to_string(),
        street: "Leningradskaya".to_string(),
        house: "1".to_string(),
        apartment: None,
    }
}

/// Order whose cargos are given as `(weight_kg, type_id)` pairs.
pub fn order(id: &str, cargos: &[(u32, &str)]) -> Order {
    Order {
        id: id.to_string(),
        client_id: "client-1".to_string(),
        destination: destination(),
        cargos: cargos
            .iter()
            .enumerate()
            .map(|(index, (weight_kg, type_id))| Cargo {
                id: format!("{id}-cargo-{index}"),
                name: format!("cargo {index}"),
                weight_kg: *weight_kg,
                type_id: type_id.to_string(),
                order_id: id.to_string(),
            })
            .collect(),
        status: OrderStatus::Pending,
        itinerary_id: None,
        deliver_by: NOW + Duration::days(7),
        created_at: NOW - Duration::days(1),
    }
}
