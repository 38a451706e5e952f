//! Projection of raw hourly records into available slots.

use crate::booking::models::{
    AvailableSlot, HourlyRecord, ResourceCatalog, ScheduleMap, Timetable,
};
use serde_json::Number;
use tracing::debug;

/// Returns the slot for `record` when it is open and unbooked.
///
/// A record is available iff `isUnitBusinessDay` is `true` and
/// `unitBookingCount` is zero. Missing or mistyped fields take their zero
/// value, so an open hour without a count is free and a record without a
/// business-day flag is closed. The price is the first price option's, or zero.
pub fn project_available(record: &HourlyRecord) -> Option<AvailableSlot> {
    let open = record.is_unit_business_day.unwrap_or(false);
    let unbooked = record.unit_booking_count.unwrap_or(0.0) == 0.0;
    if !(open && unbooked) {
        return None;
    }

    Some(AvailableSlot {
        unit_start_time: record.unit_start_time.clone().unwrap_or_default(),
        available: true,
        price: record
            .first_price()
            .cloned()
            .unwrap_or_else(|| Number::from(0)),
    })
}

/// Re-keys fetched schedules by display name and keeps only available slots.
///
/// Every fetched resource gets a key, even with no free slot. Resources are
/// visited in ascending id order; ids sharing a display name append to the
/// same list. Ids missing from the catalog are skipped.
pub fn build_timetable(catalog: &ResourceCatalog, schedules: &ScheduleMap) -> Timetable {
    let mut timetable = Timetable::new();

    for (id, records) in schedules {
        let Some(name) = catalog.get(id) else {
            debug!("Skipping resource {} that is not in the catalog", id);
            continue;
        };
        let slots = timetable.entry(name.clone()).or_default();
        slots.extend(records.iter().filter_map(project_available));
    }

    timetable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::models::ResourceId;
    use serde_json::{Value, json};

    fn record(value: Value) -> HourlyRecord {
        HourlyRecord::from_value(value)
    }

    #[test]
    fn test_open_unbooked_record_is_available() {
        let slot = project_available(&record(json!({
            "isUnitBusinessDay": true,
            "unitBookingCount": 0,
            "unitStartTime": "09:00",
            "prices": [{"price": 10000}, {"price": 15000}]
        })))
        .unwrap();

        assert_eq!(slot.unit_start_time, "09:00");
        assert!(slot.available);
        assert_eq!(slot.price, Number::from(10000));
    }

    #[test]
    fn test_booked_or_closed_records_are_dropped() {
        let booked = record(json!({"isUnitBusinessDay": true, "unitBookingCount": 2}));
        let closed = record(json!({"isUnitBusinessDay": false, "unitBookingCount": 0}));
        assert_eq!(project_available(&booked), None);
        assert_eq!(project_available(&closed), None);
    }

    #[test]
    fn test_records_without_open_flag_are_unavailable() {
        let cases = [
            json!({}),
            json!({"unitBookingCount": 0}),
            json!({"isUnitBusinessDay": "true", "unitBookingCount": 0}),
            json!({"isUnitBusinessDay": null, "unitBookingCount": 0}),
            json!([1, 2, 3]),
            json!(null),
        ];
        for case in cases {
            assert_eq!(project_available(&record(case.clone())), None, "{case}");
        }
    }

    #[test]
    fn test_missing_booking_count_counts_as_zero() {
        let cases = [
            json!({"isUnitBusinessDay": true, "unitStartTime": "09:00"}),
            json!({"isUnitBusinessDay": true, "unitStartTime": "09:00", "unitBookingCount": null}),
            json!({"isUnitBusinessDay": true, "unitStartTime": "09:00", "unitBookingCount": "2"}),
        ];
        for case in cases {
            let slot = project_available(&record(case.clone()))
                .unwrap_or_else(|| panic!("{case} should be available"));
            assert_eq!(slot.unit_start_time, "09:00");
            assert_eq!(slot.price, Number::from(0));
        }
    }

    #[test]
    fn test_first_price_survives_bad_trailing_entries() {
        let slot = project_available(&record(json!({
            "isUnitBusinessDay": true,
            "unitBookingCount": 0,
            "unitStartTime": "09:00",
            "prices": [{"price": 10000}, null]
        })))
        .unwrap();
        assert_eq!(slot.price, Number::from(10000));
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        for prices in [json!(null), json!([]), json!([{"name": "weekday"}]), json!("x")] {
            let slot = project_available(&record(json!({
                "isUnitBusinessDay": true,
                "unitBookingCount": 0,
                "unitStartTime": "07:00",
                "prices": prices
            })))
            .unwrap();
            assert_eq!(slot.price, Number::from(0));
        }
    }

    #[test]
    fn test_fractional_zero_booking_count_is_available() {
        let slot = project_available(&record(json!({
            "isUnitBusinessDay": true,
            "unitBookingCount": 0.0
        })))
        .unwrap();
        assert_eq!(slot.unit_start_time, "");
    }

    #[test]
    fn test_projection_is_pure() {
        let input = record(json!({
            "isUnitBusinessDay": true,
            "unitBookingCount": 0,
            "unitStartTime": "09:00",
            "prices": [{"price": 5000.5}]
        }));
        let before = input.clone();
        assert_eq!(project_available(&input), project_available(&input));
        assert_eq!(input, before);
    }

    #[test]
    fn test_projects_booked_second_record_away() {
        let records = vec![
            record(json!({"isUnitBusinessDay": true, "unitBookingCount": 0,
                          "unitStartTime": "09:00", "prices": [{"price": 10000}]})),
            record(json!({"isUnitBusinessDay": true, "unitBookingCount": 2,
                          "unitStartTime": "10:00"})),
        ];
        let slots: Vec<AvailableSlot> = records.iter().filter_map(project_available).collect();

        assert_eq!(
            serde_json::to_string(&slots).unwrap(),
            r#"[{"unitStartTime":"09:00","available":true,"price":10000}]"#
        );
    }

    #[test]
    fn test_build_timetable_rekeys_by_name() {
        let catalog = ResourceCatalog::from([
            (ResourceId(1), "4월 A코트".to_string()),
            (ResourceId(2), "4월 B코트".to_string()),
        ]);
        let schedules = ScheduleMap::from([
            (
                ResourceId(1),
                vec![record(json!({"isUnitBusinessDay": true, "unitBookingCount": 0,
                                   "unitStartTime": "09:00"}))],
            ),
            (
                ResourceId(2),
                vec![record(json!({"isUnitBusinessDay": true, "unitBookingCount": 1}))],
            ),
        ]);

        let timetable = build_timetable(&catalog, &schedules);
        assert_eq!(timetable.len(), 2);
        assert_eq!(timetable["4월 A코트"].len(), 1);
        assert!(timetable["4월 B코트"].is_empty());
    }

    #[test]
    fn test_build_timetable_merges_shared_names_in_id_order() {
        let catalog = ResourceCatalog::from([
            (ResourceId(5), "4월 A코트".to_string()),
            (ResourceId(3), "4월 A코트".to_string()),
        ]);
        let open = |time: &str| {
            record(json!({"isUnitBusinessDay": true, "unitBookingCount": 0,
                          "unitStartTime": time}))
        };
        let schedules = ScheduleMap::from([
            (ResourceId(5), vec![open("late")]),
            (ResourceId(3), vec![open("early")]),
        ]);

        let timetable = build_timetable(&catalog, &schedules);
        let times: Vec<&str> = timetable["4월 A코트"]
            .iter()
            .map(|slot| slot.unit_start_time.as_str())
            .collect();
        assert_eq!(times, vec!["early", "late"]);
    }

    #[test]
    fn test_build_timetable_skips_unknown_ids() {
        let catalog = ResourceCatalog::new();
        let schedules = ScheduleMap::from([(ResourceId(9), vec![HourlyRecord::default()])]);
        assert!(build_timetable(&catalog, &schedules).is_empty());
    }
}
