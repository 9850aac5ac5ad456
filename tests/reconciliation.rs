//! End-to-end reconciliation scenarios over the public API

use chrono::NaiveDate;

use kitbook::availability::available_units;
use kitbook::bundles::apply_bundle;
use kitbook::checkout::{plan_checkout, CheckoutRequest};
use kitbook::models::{
    Booking, BookingLine, BookingStatus, Bundle, BundleLine, Cart, EquipmentItem, EquipmentStatus,
    Shift,
};
use kitbook::returns::{process_return_batch, ReturnRequest};
use kitbook::AppError;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn catalog() -> Vec<EquipmentItem> {
    vec![
        EquipmentItem {
            id: 1,
            name: "FX6 body".to_string(),
            category: Some("camera".to_string()),
            total_quantity: 2,
            status: EquipmentStatus::Available,
        },
        EquipmentItem {
            id: 2,
            name: "24-70mm zoom".to_string(),
            category: Some("lens".to_string()),
            total_quantity: 4,
            status: EquipmentStatus::Available,
        },
        EquipmentItem {
            id: 3,
            name: "Shotgun mic".to_string(),
            category: Some("audio".to_string()),
            total_quantity: 1,
            status: EquipmentStatus::Maintenance,
        },
    ]
}

/// Turn checkout drafts into stored bookings with sequential ids.
fn persist(drafts: Vec<kitbook::models::BookingDraft>, next_id: &mut i32) -> Vec<Booking> {
    drafts
        .into_iter()
        .map(|draft| {
            *next_id += 1;
            Booking {
                id: *next_id,
                equipment_id: draft.equipment_id,
                quantity: draft.quantity,
                shift: draft.shift,
                dates: draft.dates,
                status: BookingStatus::Active,
            }
        })
        .collect()
}

#[test]
fn checkout_then_availability_then_return_flow() {
    let catalog = catalog();
    let mut next_id = 0;
    let mut bookings: Vec<Booking> = Vec::new();

    // Week-long shoot with a weekend gap: Mon-Wed plus Fri.
    let request = CheckoutRequest {
        equipment_id: 1,
        quantity: 1,
        dates: vec![
            "2024-03-04".to_string(),
            "2024-03-05".to_string(),
            "2024-03-06".to_string(),
            "2024-03-08".to_string(),
        ],
        shift: Shift::FullDay,
    };
    let drafts = plan_checkout(&request, &catalog, &bookings).unwrap();
    assert_eq!(drafts.len(), 2);
    bookings.extend(persist(drafts, &mut next_id));

    // One of two bodies is gone on the booked days.
    assert_eq!(
        available_units(&catalog[0], &bookings, &[d("2024-03-05")], Shift::Am),
        1
    );
    // The gap day is untouched.
    assert_eq!(
        available_units(&catalog[0], &bookings, &[d("2024-03-07")], Shift::FullDay),
        2
    );

    // A second full-quantity request on an overlapping day must fail.
    let request = CheckoutRequest {
        equipment_id: 1,
        quantity: 2,
        dates: vec!["2024-03-05".to_string()],
        shift: Shift::Pm,
    };
    assert!(matches!(
        plan_checkout(&request, &catalog, &bookings),
        Err(AppError::BusinessRule(_))
    ));

    // Returning both stored bookings frees the units again.
    for booking in &mut bookings {
        booking.status = BookingStatus::Returned;
    }
    assert_eq!(
        available_units(&catalog[0], &bookings, &[d("2024-03-05")], Shift::FullDay),
        2
    );
}

#[test]
fn am_and_pm_shoots_share_a_day() {
    let catalog = catalog();
    let mut next_id = 0;
    let mut bookings: Vec<Booking> = Vec::new();

    let morning = CheckoutRequest {
        equipment_id: 2,
        quantity: 4,
        dates: vec!["2024-03-04".to_string()],
        shift: Shift::Am,
    };
    bookings.extend(persist(
        plan_checkout(&morning, &catalog, &bookings).unwrap(),
        &mut next_id,
    ));

    // All four lenses are out in the morning, but the afternoon is free.
    let afternoon = CheckoutRequest {
        equipment_id: 2,
        quantity: 4,
        dates: vec!["2024-03-04".to_string()],
        shift: Shift::Pm,
    };
    assert!(plan_checkout(&afternoon, &catalog, &bookings).is_ok());

    // A full-day request that day is blocked.
    let full_day = CheckoutRequest {
        equipment_id: 2,
        quantity: 1,
        dates: vec!["2024-03-04".to_string()],
        shift: Shift::FullDay,
    };
    assert!(matches!(
        plan_checkout(&full_day, &catalog, &bookings),
        Err(AppError::BusinessRule(_))
    ));
}

#[test]
fn bundle_allocation_is_best_effort_against_live_bookings() {
    let catalog = catalog();
    let bookings = [Booking {
        id: 1,
        equipment_id: 2,
        quantity: 3,
        shift: Shift::FullDay,
        dates: vec![d("2024-03-04")],
        status: BookingStatus::Active,
    }];

    let bundle = Bundle {
        id: 1,
        name: "interview kit".to_string(),
        lines: vec![
            BundleLine {
                equipment_id: 1,
                quantity: 1,
            },
            BundleLine {
                equipment_id: 2,
                quantity: 2,
            },
            BundleLine {
                equipment_id: 3,
                quantity: 1,
            },
        ],
    };

    let mut cart = Cart::new();
    let report = apply_bundle(
        &bundle,
        &mut cart,
        &catalog,
        &bookings,
        &[d("2024-03-04")],
        Shift::FullDay,
    );

    // Camera fully added; only one of two lenses left; mic in maintenance.
    assert_eq!(report.added_lines, 1);
    assert_eq!(report.constrained_lines, 2);
    assert_eq!(cart.quantity_of(1), 1);
    assert_eq!(cart.quantity_of(2), 1);
    assert_eq!(cart.quantity_of(3), 0);
}

#[test]
fn damaged_return_closes_booking_and_flags_equipment() {
    let mut catalog = catalog();
    let booking = Booking {
        id: 1,
        equipment_id: 1,
        quantity: 1,
        shift: Shift::FullDay,
        dates: vec![d("2024-03-04")],
        status: BookingStatus::Active,
    };
    let lines = vec![
        BookingLine {
            id: 1,
            booking_id: 1,
            equipment_id: 1,
            quantity: 1,
            status: BookingStatus::Active,
            damaged: false,
            damage_note: None,
        },
        BookingLine {
            id: 2,
            booking_id: 1,
            equipment_id: 2,
            quantity: 2,
            status: BookingStatus::Active,
            damaged: false,
            damage_note: None,
        },
    ];

    let requests = vec![
        ReturnRequest {
            line_id: 2,
            damage: None,
        },
        ReturnRequest {
            line_id: 1,
            damage: Some(kitbook::returns::DamageReport {
                note: Some("sensor scratch".to_string()),
            }),
        },
    ];

    let outcome = process_return_batch(&booking, &lines, &requests).unwrap();
    assert_eq!(outcome.booking_status, BookingStatus::Returned);

    kitbook::returns::apply_maintenance_flags(&mut catalog, &outcome.outcomes);
    assert_eq!(catalog[0].status, EquipmentStatus::Maintenance);
    assert_eq!(catalog[1].status, EquipmentStatus::Available);
}

#[test]
fn booking_wire_format_normalizes_dates() {
    // Legacy producers send dd/MM/yyyy; malformed entries are dropped.
    let booking: Booking = serde_json::from_value(serde_json::json!({
        "id": 1,
        "equipment_id": 2,
        "quantity": 1,
        "shift": "full_day",
        "dates": ["04/03/2024", "2024-03-05", "someday"],
        "status": "active"
    }))
    .unwrap();

    assert_eq!(booking.dates, vec![d("2024-03-04"), d("2024-03-05")]);

    // Serialization is always canonical ISO.
    let value = serde_json::to_value(&booking).unwrap();
    assert_eq!(
        value["dates"],
        serde_json::json!(["2024-03-04", "2024-03-05"])
    );
    assert_eq!(value["shift"], "full_day");
}
