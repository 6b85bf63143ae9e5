use std::collections::HashSet;

use super::{
    group_by, route_stop_join::resolve_trips, EnrichedTrip, GroupingIndex, JoinError,
    JoinOptions, JoinOutput, JoinWarning, JoinedTrip,
};
use crate::model::{Calendar, GroupField, Route, StopTime, Trip};

/// builds a new record combining a joined trip with the calendar of `service_id`.
///
/// the first calendar listed for the service is used. when the service has no
/// calendar the calendar fields are left empty and a [`JoinWarning::MissingCalendar`]
/// is returned. neither input is modified.
///
/// # Result
/// the merged record and, if the lookup was anomalous, a warning describing it
pub fn enrich_with_calendar(
    joined: &JoinedTrip,
    service_id: &str,
    calendar_by_service_id: &GroupingIndex<'_, Calendar>,
) -> (EnrichedTrip, Option<JoinWarning>) {
    let (calendar, warning) = find_calendar(service_id, calendar_by_service_id);
    let enriched = EnrichedTrip {
        calendar,
        joined: joined.clone(),
    };
    (enriched, warning)
}

/// joins trips as in [`super::join_routes_stops`] and overlays each result on the
/// calendar of its trip's service_id. a service with no calendar.txt entry keeps
/// empty calendar fields. calendar warnings are recorded once per service_id.
pub fn join_routes_stops_with_calendar(
    routes: &[Route],
    stop_times: &[StopTime],
    trips: &[Trip],
    calendars: &[Calendar],
    options: &JoinOptions,
) -> Result<JoinOutput<EnrichedTrip>, JoinError> {
    let resolved = resolve_trips(routes, stop_times, trips, options)?;
    let calendar_by_service_id = group_by(GroupField::ServiceId, calendars);

    let mut warnings = resolved.warnings;
    let mut warned_services: HashSet<&str> = HashSet::new();
    let mut records = Vec::with_capacity(resolved.records.len());
    for (trip, joined) in resolved.records {
        let (calendar, warning) = find_calendar(&trip.service_id, &calendar_by_service_id);
        if let Some(w) = warning {
            if warned_services.insert(trip.service_id.as_str()) {
                log::warn!("{w}");
                warnings.push(w);
            }
        }
        records.push(EnrichedTrip { calendar, joined });
    }
    Ok(JoinOutput { records, warnings })
}

/// the first calendar of a service, with a warning when it has none or several.
fn find_calendar(
    service_id: &str,
    calendar_by_service_id: &GroupingIndex<'_, Calendar>,
) -> (Option<Calendar>, Option<JoinWarning>) {
    let calendars = calendar_by_service_id
        .get(service_id)
        .map(|c| c.as_slice())
        .unwrap_or_default();
    let warning = match calendars.len() {
        0 => Some(JoinWarning::MissingCalendar {
            service_id: service_id.to_string(),
        }),
        1 => None,
        count => Some(JoinWarning::DuplicateCalendar {
            service_id: service_id.to_string(),
            count,
        }),
    };
    (calendars.first().map(|c| (*c).clone()), warning)
}

#[cfg(test)]
mod test {
    use super::{enrich_with_calendar, join_routes_stops_with_calendar};
    use crate::join::{group_by, JoinOptions, JoinWarning, JoinedTrip};
    use crate::model::{Calendar, GroupField, Route, StopTime, Trip};
    use chrono::NaiveDate;

    fn calendar(service_id: &str, saturday: u8) -> Calendar {
        Calendar {
            service_id: String::from(service_id),
            monday: 1,
            saturday,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 30),
            ..Default::default()
        }
    }

    fn joined() -> JoinedTrip {
        JoinedTrip {
            stops: vec![StopTime {
                trip_id: String::from("T1"),
                stop_id: String::from("S1"),
                stop_sequence: 1,
                ..Default::default()
            }],
            route: Route {
                route_id: String::from("R1"),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_enrich_merges_calendar_fields() {
        let calendars = vec![calendar("WK", 0)];
        let index = group_by(GroupField::ServiceId, &calendars);
        let input = joined();

        let (enriched, warning) = enrich_with_calendar(&input, "WK", &index);

        assert!(warning.is_none());
        assert_eq!(enriched.joined, input);
        let json = serde_json::to_value(&enriched).expect("should serialize");
        assert_eq!(json["service_id"], "WK");
        assert_eq!(json["monday"], 1);
        assert_eq!(json["start_date"], "20240101");
        assert_eq!(json["end_date"], "20240630");
        assert_eq!(json["route"]["route_id"], "R1");
        assert_eq!(json["stops"][0]["stop_id"], "S1");
    }

    #[test]
    fn test_enrich_missing_calendar_leaves_fields_empty() {
        let calendars: Vec<Calendar> = vec![];
        let index = group_by(GroupField::ServiceId, &calendars);

        let (enriched, warning) = enrich_with_calendar(&joined(), "WK", &index);

        assert_eq!(
            warning,
            Some(JoinWarning::MissingCalendar {
                service_id: String::from("WK")
            })
        );
        assert!(enriched.calendar.is_none());
        let json = serde_json::to_value(&enriched).expect("should serialize");
        let keys = json
            .as_object()
            .expect("should be an object")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(keys.len(), 2);
        assert!(json.get("service_id").is_none());
    }

    #[test]
    fn test_enrich_duplicate_calendar_takes_first() {
        let calendars = vec![calendar("WK", 0), calendar("WK", 1)];
        let index = group_by(GroupField::ServiceId, &calendars);

        let (enriched, warning) = enrich_with_calendar(&joined(), "WK", &index);

        assert_eq!(enriched.calendar.map(|c| c.saturday), Some(0));
        assert_eq!(
            warning,
            Some(JoinWarning::DuplicateCalendar {
                service_id: String::from("WK"),
                count: 2
            })
        );
    }

    #[test]
    fn test_join_with_calendar_reports_missing_service() {
        let trips = vec![
            Trip {
                trip_id: String::from("T1"),
                route_id: String::from("R1"),
                service_id: String::from("WK"),
                ..Default::default()
            },
            Trip {
                trip_id: String::from("T2"),
                route_id: String::from("R1"),
                service_id: String::from("SAT"),
                ..Default::default()
            },
        ];
        let routes = vec![Route {
            route_id: String::from("R1"),
            ..Default::default()
        }];
        let stop_times = vec![
            StopTime {
                trip_id: String::from("T1"),
                ..Default::default()
            },
            StopTime {
                trip_id: String::from("T2"),
                ..Default::default()
            },
        ];
        let calendars = vec![calendar("WK", 0)];

        let result = join_routes_stops_with_calendar(
            &routes,
            &stop_times,
            &trips,
            &calendars,
            &JoinOptions::default(),
        )
        .expect("join should succeed");

        assert_eq!(result.records.len(), 2);
        assert_eq!(
            result.records[0]
                .calendar
                .as_ref()
                .map(|c| c.service_id.as_str()),
            Some("WK")
        );
        assert!(result.records[1].calendar.is_none());
        assert_eq!(
            result.warnings,
            vec![JoinWarning::MissingCalendar {
                service_id: String::from("SAT")
            }]
        );
    }

    #[test]
    fn test_join_with_calendar_warns_once_per_service() {
        let trips = (1..=4)
            .map(|i| Trip {
                trip_id: format!("T{i}"),
                route_id: String::from("R1"),
                service_id: String::from(if i % 2 == 0 { "SAT" } else { "SUN" }),
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let routes = vec![Route {
            route_id: String::from("R1"),
            ..Default::default()
        }];
        let stop_times = trips
            .iter()
            .map(|t| StopTime {
                trip_id: t.trip_id.clone(),
                stop_id: format!("S-{}", t.trip_id),
                ..Default::default()
            })
            .collect::<Vec<_>>();

        let result = join_routes_stops_with_calendar(
            &routes,
            &stop_times,
            &trips,
            &[],
            &JoinOptions::default(),
        )
        .expect("join should succeed");

        assert_eq!(result.records.len(), 4);
        assert_eq!(result.records[2].joined.stops[0].stop_id, "S-T3");
        assert_eq!(
            result.warnings,
            vec![
                JoinWarning::MissingCalendar {
                    service_id: String::from("SUN")
                },
                JoinWarning::MissingCalendar {
                    service_id: String::from("SAT")
                },
            ]
        );
    }
}
