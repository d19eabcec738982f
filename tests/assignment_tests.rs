mod common;

use common::{destination, now, NOW};
use freight_dispatch::{
    app::{
        ContestedOrder, NewCargo, NewDriver, NewInspection, NewLicense, NewOrder, NewVehicle,
        RepairReport,
    },
    domain::{
        Driver, Itinerary, ItineraryDraft, LicenseStatus, Order, OrderStatus, Rejection, Session,
        Vehicle,
    },
    infra::{EntityStore, MemoryStore},
    AssignError, Dispatch, DispatchError,
};
use time::{Duration, OffsetDateTime};

// Seeded catalogue ids: categories 1=B 2=C 3=CE 4=D, cargo types 1=Food 2=Furniture 3=Electronics.

fn dispatch() -> Dispatch<MemoryStore> {
    let dispatch = Dispatch::new(MemoryStore::new()).with_clock(now);
    dispatch.seed_catalogue().unwrap();
    dispatch
}

fn license(categories: &[&str], expires: OffsetDateTime) -> NewLicense {
    NewLicense {
        series: "77".to_string(),
        number: "000111".to_string(),
        issued_at: NOW - Duration::days(3650),
        expired_at: expires,
        category_ids: categories.iter().map(|c| c.to_string()).collect(),
    }
}

fn add_driver(dispatch: &Dispatch<MemoryStore>, categories: &[&str]) -> Driver {
    dispatch
        .register_driver(
            &Session::admin(),
            NewDriver {
                first_name: "Ivan".to_string(),
                last_name: "Petrov".to_string(),
                license: license(categories, NOW + Duration::days(365)),
            },
        )
        .unwrap()
}

fn add_vehicle(dispatch: &Dispatch<MemoryStore>, capacity_kg: u32) -> Vehicle {
    dispatch
        .register_vehicle(
            &Session::admin(),
            NewVehicle {
                car_number: "A123BC77".to_string(),
                brand_id: "1".to_string(),
                load_capacity_kg: capacity_kg,
                category_ids: vec!["1".to_string(), "2".to_string()],
                cargo_type_ids: vec!["3".to_string()],
            },
        )
        .unwrap()
}

fn submit(dispatch: &Dispatch<MemoryStore>, client: &str, cargos: &[(u32, &str)]) -> Order {
    dispatch
        .submit_order(
            &Session::client(client),
            NewOrder {
                destination: destination(),
                deliver_by: NOW + Duration::days(5),
                cargos: cargos
                    .iter()
                    .map(|(weight_kg, type_id)| NewCargo {
                        name: "Monitors".to_string(),
                        weight_kg: *weight_kg,
                        type_id: type_id.to_string(),
                    })
                    .collect(),
            },
        )
        .unwrap()
}

fn draft(driver: &Driver, vehicle: &Vehicle, orders: &[&Order]) -> ItineraryDraft {
    let mut draft = ItineraryDraft::new();
    draft.select_driver(driver.id.clone()).select_vehicle(vehicle.id.clone());
    for order in orders {
        draft.add_order(order.id.clone());
    }
    draft
}

fn assert_untouched(dispatch: &Dispatch<MemoryStore>, expected_pending: usize) {
    assert!(dispatch.itineraries().unwrap().is_empty());
    assert_eq!(dispatch.pending_orders().unwrap().len(), expected_pending);
}

#[test]
fn assignment_moves_orders_in_transit_in_selected_sequence() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let first = submit(&dispatch, "client-1", &[(300, "3")]);
    let second = submit(&dispatch, "client-2", &[(200, "3"), (100, "3")]);

    let itinerary = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[&second, &first]))
        .unwrap();

    assert_eq!(itinerary.order_ids, vec![second.id.clone(), first.id.clone()]);
    assert_eq!(itinerary.driver_id, driver.id);
    assert_eq!(itinerary.vehicle_id, vehicle.id);
    assert_eq!(itinerary.created_at, NOW);
    assert_eq!(dispatch.itineraries().unwrap(), vec![itinerary.clone()]);

    for order in dispatch.orders().unwrap() {
        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.itinerary_id.as_deref(), Some(itinerary.id.as_str()));
    }
    assert!(dispatch.pending_orders().unwrap().is_empty());
}

#[test]
fn incompatible_driver_is_rejected_without_writes() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["3"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(100, "3")]);

    let err = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[&order]))
        .unwrap_err();

    assert!(matches!(err, AssignError::Rejected(Rejection::IncompatibleDriver)));
    assert_untouched(&dispatch, 1);
}

#[test]
fn overweight_selection_is_rejected_without_writes() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let orders: Vec<Order> = (0..3)
        .map(|i| submit(&dispatch, &format!("client-{i}"), &[(400, "3")]))
        .collect();
    let refs: Vec<&Order> = orders.iter().collect();

    let err = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &refs))
        .unwrap_err();

    match err {
        AssignError::Rejected(Rejection::IncompatibleCargo(verdict)) => {
            assert_eq!(verdict.total_weight_kg, 1200);
            assert_eq!(verdict.capacity_kg, 1000);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_untouched(&dispatch, 3);
}

#[test]
fn foreign_cargo_type_is_rejected() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(50, "2")]);

    let err = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[&order]))
        .unwrap_err();

    assert!(matches!(err, AssignError::Rejected(Rejection::IncompatibleCargo(_))));
    assert_untouched(&dispatch, 1);
}

#[test]
fn incomplete_selection_is_rejected() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);

    let err = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[]))
        .unwrap_err();
    assert!(matches!(err, AssignError::Rejected(Rejection::MissingSelection)));

    let err = dispatch
        .assign_itinerary(&Session::admin(), &ItineraryDraft::new())
        .unwrap_err();
    assert!(matches!(err, AssignError::Rejected(Rejection::MissingSelection)));
}

#[test]
fn clients_cannot_create_itineraries() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(100, "3")]);

    let err = dispatch
        .assign_itinerary(&Session::client("client-1"), &draft(&driver, &vehicle, &[&order]))
        .unwrap_err();
    assert!(matches!(err, AssignError::Forbidden));
    assert_untouched(&dispatch, 1);
}

#[test]
fn unknown_records_are_reported() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(100, "3")]);

    let mut ghost_driver = draft(&driver, &vehicle, &[&order]);
    ghost_driver.select_driver("driver-missing");
    assert!(matches!(
        dispatch.assign_itinerary(&Session::admin(), &ghost_driver),
        Err(AssignError::UnknownDriver(id)) if id == "driver-missing"
    ));

    let mut ghost_vehicle = draft(&driver, &vehicle, &[&order]);
    ghost_vehicle.select_vehicle("vehicle-missing");
    assert!(matches!(
        dispatch.assign_itinerary(&Session::admin(), &ghost_vehicle),
        Err(AssignError::UnknownVehicle(_))
    ));

    let mut ghost_order = draft(&driver, &vehicle, &[&order]);
    ghost_order.add_order("order-missing");
    assert!(matches!(
        dispatch.assign_itinerary(&Session::admin(), &ghost_order),
        Err(AssignError::OrderUnavailable(id)) if id == "order-missing"
    ));
    assert_untouched(&dispatch, 1);
}

#[test]
fn an_order_cannot_join_two_itineraries() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(100, "3")]);
    let selection = draft(&driver, &vehicle, &[&order]);

    dispatch.assign_itinerary(&Session::admin(), &selection).unwrap();
    let err = dispatch
        .assign_itinerary(&Session::admin(), &selection)
        .unwrap_err();

    assert!(matches!(err, AssignError::OrderUnavailable(id) if id == order.id));
    assert_eq!(dispatch.itineraries().unwrap().len(), 1);
}

#[test]
fn repair_finishes_an_interrupted_assignment_once() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let first = submit(&dispatch, "client-1", &[(100, "3")]);
    let second = submit(&dispatch, "client-1", &[(100, "3")]);

    // Itinerary written, order update lost.
    let itinerary = Itinerary {
        id: "itinerary-crashed".to_string(),
        driver_id: driver.id.clone(),
        vehicle_id: vehicle.id.clone(),
        order_ids: vec![first.id.clone(), second.id.clone()],
        created_at: NOW,
    };
    let revision = dispatch.store().load::<Itinerary>().unwrap().revision;
    dispatch.store().upsert(&[itinerary], revision).unwrap();
    assert_eq!(dispatch.pending_orders().unwrap().len(), 2);

    let report = dispatch.repair_assignments(&Session::admin()).unwrap();
    assert_eq!(report.repaired, 2);
    assert!(report.contested.is_empty());
    assert!(dispatch.pending_orders().unwrap().is_empty());
    for order in dispatch.orders().unwrap() {
        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.itinerary_id.as_deref(), Some("itinerary-crashed"));
    }

    let revision_after = dispatch.store().load::<Order>().unwrap().revision;
    assert_eq!(dispatch.repair_assignments(&Session::admin()).unwrap(), RepairReport::default());
    assert_eq!(dispatch.store().load::<Order>().unwrap().revision, revision_after);
}

fn write_itinerary(dispatch: &Dispatch<MemoryStore>, id: &str, driver: &Driver, vehicle: &Vehicle, orders: &[&Order]) {
    let itinerary = Itinerary {
        id: id.to_string(),
        driver_id: driver.id.clone(),
        vehicle_id: vehicle.id.clone(),
        order_ids: orders.iter().map(|order| order.id.clone()).collect(),
        created_at: NOW,
    };
    let revision = dispatch.store().load::<Itinerary>().unwrap().revision;
    dispatch.store().upsert(&[itinerary], revision).unwrap();
}

#[test]
fn orders_of_an_interrupted_assignment_cannot_be_reassigned() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let first = submit(&dispatch, "client-1", &[(100, "3")]);
    let second = submit(&dispatch, "client-1", &[(100, "3")]);
    write_itinerary(&dispatch, "itinerary-crashed", &driver, &vehicle, &[&first, &second]);

    let err = dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[&first, &second]))
        .unwrap_err();
    assert!(matches!(err, AssignError::OrderUnavailable(id) if id == first.id));
    assert_eq!(dispatch.itineraries().unwrap().len(), 1);

    let report = dispatch.repair_assignments(&Session::admin()).unwrap();
    assert_eq!(report.repaired, 2);
    let listing_first: Vec<_> = dispatch
        .itineraries()
        .unwrap()
        .into_iter()
        .filter(|itinerary| itinerary.order_ids.contains(&first.id))
        .map(|itinerary| itinerary.id)
        .collect();
    assert_eq!(listing_first, ["itinerary-crashed"]);
}

#[test]
fn repair_reports_orders_listed_by_two_itineraries() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let shared = submit(&dispatch, "client-1", &[(100, "3")]);
    let own = submit(&dispatch, "client-2", &[(100, "3")]);
    write_itinerary(&dispatch, "itinerary-a", &driver, &vehicle, &[&shared]);
    write_itinerary(&dispatch, "itinerary-b", &driver, &vehicle, &[&own, &shared]);

    let report = dispatch.repair_assignments(&Session::admin()).unwrap();

    assert_eq!(report.repaired, 2);
    assert_eq!(
        report.contested,
        vec![ContestedOrder {
            itinerary_id: "itinerary-b".to_string(),
            order_id: shared.id.clone(),
            owner_id: "itinerary-a".to_string(),
        }]
    );
    let orders = dispatch.orders().unwrap();
    let owner_of = |id: &str| {
        orders
            .iter()
            .find(|order| order.id == id)
            .and_then(|order| order.itinerary_id.clone())
    };
    assert_eq!(owner_of(&shared.id).as_deref(), Some("itinerary-a"));
    assert_eq!(owner_of(&own.id).as_deref(), Some("itinerary-b"));

    // Still reported once nothing is left to repair.
    let again = dispatch.repair_assignments(&Session::admin()).unwrap();
    assert_eq!(again.repaired, 0);
    assert_eq!(again.contested.len(), 1);
}

#[test]
fn delivery_only_follows_transit() {
    let dispatch = dispatch();
    let driver = add_driver(&dispatch, &["1"]);
    let vehicle = add_vehicle(&dispatch, 1000);
    let order = submit(&dispatch, "client-1", &[(100, "3")]);

    assert!(matches!(
        dispatch.mark_delivered(&Session::admin(), &order.id),
        Err(DispatchError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Delivered,
            ..
        })
    ));

    dispatch
        .assign_itinerary(&Session::admin(), &draft(&driver, &vehicle, &[&order]))
        .unwrap();
    assert!(matches!(
        dispatch.mark_delivered(&Session::client("client-1"), &order.id),
        Err(DispatchError::Forbidden { .. })
    ));

    let delivered = dispatch.mark_delivered(&Session::admin(), &order.id).unwrap();
    assert_eq!(delivered.status, OrderStatus::Delivered);
    assert!(dispatch.pending_orders().unwrap().is_empty());

    assert!(matches!(
        dispatch.mark_delivered(&Session::admin(), &order.id),
        Err(DispatchError::InvalidTransition { .. })
    ));
    assert!(matches!(
        dispatch.mark_delivered(&Session::admin(), "order-missing"),
        Err(DispatchError::UnknownOrder(_))
    ));
}

#[test]
fn license_status_is_snapshotted_at_registration() {
    let dispatch = dispatch();
    let expired = dispatch
        .register_driver(
            &Session::admin(),
            NewDriver {
                first_name: "Oleg".to_string(),
                last_name: "Sidorov".to_string(),
                license: license(&["1"], NOW - Duration::days(1)),
            },
        )
        .unwrap();
    assert_eq!(expired.licenses[0].status, LicenseStatus::Invalid);

    let valid = add_driver(&dispatch, &["1", "2"]);
    assert_eq!(valid.licenses[0].status, LicenseStatus::Valid);
    assert_eq!(valid.licenses[0].driver_id, valid.id);

    let added = dispatch
        .add_license(&Session::admin(), &expired.id, license(&["4"], NOW + Duration::days(90)))
        .unwrap();
    assert_eq!(added.status, LicenseStatus::Valid);
    let stored = dispatch.drivers().unwrap();
    let stored = stored.iter().find(|d| d.id == expired.id).unwrap();
    assert_eq!(stored.licenses.len(), 2);

    assert!(matches!(
        dispatch.register_driver(
            &Session::admin(),
            NewDriver {
                first_name: "X".to_string(),
                last_name: "Y".to_string(),
                license: license(&["99"], NOW + Duration::days(1)),
            },
        ),
        Err(DispatchError::UnknownCategory(id)) if id == "99"
    ));
}

#[test]
fn inspections_feed_the_vehicle_score() {
    let dispatch = dispatch();
    let vehicle = add_vehicle(&dispatch, 1000);

    assert_eq!(dispatch.vehicle_score(&vehicle.id).unwrap(), None);
    for (days_ago, grade) in [(3, 4), (10, 5), (45, 1)] {
        dispatch
            .record_inspection(
                &Session::admin(),
                &vehicle.id,
                NewInspection {
                    passed_at: NOW - Duration::days(days_ago),
                    grade,
                    description: "routine".to_string(),
                },
            )
            .unwrap();
    }

    let score = dispatch.vehicle_score(&vehicle.id).unwrap().unwrap();
    assert_eq!(score.average, 4.5);
    assert_eq!(score.inspections, 2);

    assert!(matches!(
        dispatch.record_inspection(
            &Session::admin(),
            &vehicle.id,
            NewInspection {
                passed_at: NOW,
                grade: 6,
                description: String::new(),
            },
        ),
        Err(DispatchError::GradeOutOfRange(6))
    ));
    assert!(matches!(
        dispatch.vehicle_score("vehicle-missing"),
        Err(DispatchError::UnknownVehicle(_))
    ));
}

#[test]
fn vehicle_options_flag_incompatible_vehicles_for_driver() {
    let dispatch = dispatch();
    let b_driver = add_driver(&dispatch, &["1"]);
    let d_driver = add_driver(&dispatch, &["4"]);
    let vehicle = add_vehicle(&dispatch, 1000);

    let unfiltered = dispatch.vehicle_options(None).unwrap();
    assert!(unfiltered.iter().all(|option| option.operable));

    let for_b = dispatch.vehicle_options(Some(&b_driver.id)).unwrap();
    assert!(for_b[0].operable);
    let for_d = dispatch.vehicle_options(Some(&d_driver.id)).unwrap();
    assert!(!for_d[0].operable);
    let for_ghost = dispatch.vehicle_options(Some("driver-missing")).unwrap();
    assert!(!for_ghost[0].operable);

    assert!(dispatch.check_driver_vehicle(&b_driver.id, &vehicle.id).unwrap());
    assert!(!dispatch.check_driver_vehicle(&d_driver.id, &vehicle.id).unwrap());
    assert!(!dispatch.check_driver_vehicle("driver-missing", &vehicle.id).unwrap());
}

#[test]
fn order_submission_is_validated() {
    let dispatch = dispatch();
    let order = |session: &Session, cargos: Vec<NewCargo>| {
        dispatch.submit_order(
            session,
            NewOrder {
                destination: destination(),
                deliver_by: NOW + Duration::days(2),
                cargos,
            },
        )
    };
    let cargo = |weight_kg: u32, type_id: &str| NewCargo {
        name: "Sofa".to_string(),
        weight_kg,
        type_id: type_id.to_string(),
    };
    let client = Session::client("client-9");

    assert!(matches!(
        order(&Session::admin(), vec![cargo(10, "2")]),
        Err(DispatchError::Forbidden { .. })
    ));
    assert!(matches!(order(&client, vec![]), Err(DispatchError::EmptyOrder)));
    assert!(matches!(
        order(&client, vec![cargo(0, "2")]),
        Err(DispatchError::NonPositiveWeight(_))
    ));
    assert!(matches!(
        order(&client, vec![cargo(10, "42")]),
        Err(DispatchError::UnknownCargoType(_))
    ));

    let created = order(&client, vec![cargo(10, "2"), cargo(15, "1")]).unwrap();
    assert_eq!(created.client_id, "client-9");
    assert_eq!(created.status, OrderStatus::Pending);
    assert_eq!(created.created_at, NOW);
    assert!(created.cargos.iter().all(|c| c.order_id == created.id));
    assert_eq!(created.total_weight_kg(), 25);
}

#[test]
fn clients_only_see_their_own_orders() {
    let dispatch = dispatch();
    submit(&dispatch, "client-1", &[(10, "3")]);
    submit(&dispatch, "client-2", &[(10, "3")]);
    submit(&dispatch, "client-1", &[(10, "3")]);

    assert_eq!(dispatch.orders_for_client(&Session::client("client-1")).unwrap().len(), 2);
    assert_eq!(dispatch.orders_for_client(&Session::client("client-3")).unwrap().len(), 0);
    assert_eq!(dispatch.orders_for_client(&Session::admin()).unwrap().len(), 3);
}

#[test]
fn vehicle_registration_is_validated_and_admin_only() {
    let dispatch = dispatch();
    let request = NewVehicle {
        car_number: "B777OP99".to_string(),
        brand_id: "3".to_string(),
        load_capacity_kg: 20000,
        category_ids: vec!["3".to_string()],
        cargo_type_ids: vec!["1".to_string(), "4".to_string()],
    };

    assert!(matches!(
        dispatch.register_vehicle(&Session::client("c"), request.clone()),
        Err(DispatchError::Forbidden { .. })
    ));
    assert!(matches!(
        dispatch.register_vehicle(
            &Session::admin(),
            NewVehicle {
                load_capacity_kg: 0,
                ..request.clone()
            }
        ),
        Err(DispatchError::NonPositiveCapacity)
    ));
    assert!(matches!(
        dispatch.register_vehicle(
            &Session::admin(),
            NewVehicle {
                brand_id: "9".to_string(),
                ..request.clone()
            }
        ),
        Err(DispatchError::UnknownBrand(_))
    ));

    let vehicle = dispatch.register_vehicle(&Session::admin(), request).unwrap();
    let notations: Vec<_> = vehicle
        .allowable_categories
        .iter()
        .map(|c| c.notation.as_str())
        .collect();
    assert_eq!(notations, ["CE"]);
    assert_eq!(vehicle.allowable_cargo_types.len(), 2);
    assert!(vehicle.inspections.is_empty());
}

#[test]
fn seeding_is_idempotent() {
    let dispatch = dispatch();
    assert_eq!(dispatch.seed_catalogue().unwrap(), 0);
    assert_eq!(dispatch.categories().unwrap().len(), 4);
    assert_eq!(dispatch.cargo_types().unwrap().len(), 4);
    assert_eq!(dispatch.brands().unwrap().len(), 4);
}

#[test]
fn admins_extend_the_catalogue() {
    let dispatch = dispatch();
    let admin = Session::admin();

    let category = dispatch.add_category(&admin, " BE ").unwrap();
    assert_eq!(category.notation, "BE");
    let cargo_type = dispatch
        .add_cargo_type(&admin, "Chemicals", "Hazardous liquids")
        .unwrap();
    let brand = dispatch.add_brand(&admin, "Scania").unwrap();

    assert_eq!(dispatch.categories().unwrap().len(), 5);
    assert!(dispatch.cargo_types().unwrap().contains(&cargo_type));
    assert_eq!(dispatch.brands().unwrap().last(), Some(&brand));

    let vehicle = dispatch
        .register_vehicle(
            &admin,
            NewVehicle {
                car_number: "T900XX77".to_string(),
                brand_id: brand.id.clone(),
                load_capacity_kg: 20000,
                category_ids: vec![category.id.clone()],
                cargo_type_ids: vec![cargo_type.id.clone()],
            },
        )
        .unwrap();
    assert_eq!(vehicle.allowable_categories, vec![category]);
}

#[test]
fn catalogue_rejects_blank_duplicate_and_client_entries() {
    let dispatch = dispatch();
    let admin = Session::admin();

    assert!(matches!(
        dispatch.add_brand(&admin, "   "),
        Err(DispatchError::EmptyName("brand"))
    ));
    assert!(matches!(
        dispatch.add_brand(&admin, "volvo"),
        Err(DispatchError::DuplicateName { kind: "brand", name }) if name == "volvo"
    ));
    assert!(matches!(
        dispatch.add_category(&admin, "CE"),
        Err(DispatchError::DuplicateName { kind: "license category", .. })
    ));
    assert!(matches!(
        dispatch.add_cargo_type(&admin, "Furniture", ""),
        Err(DispatchError::DuplicateName { kind: "cargo type", .. })
    ));
    assert!(matches!(
        dispatch.add_category(&Session::client("client-1"), "BE"),
        Err(DispatchError::Forbidden { .. })
    ));
    assert_eq!(dispatch.brands().unwrap().len(), 4);
    assert_eq!(dispatch.categories().unwrap().len(), 4);
}
