use super::{
    group_by, JoinError, JoinOptions, JoinOutput, JoinWarning, JoinedTrip, LookupMissPolicy,
};
use crate::model::{GroupField, Route, StopTime, Trip};

/// connects each trip's stop times to the route it is associated with.
///
/// routes are indexed by route_id and stop times by trip_id, then each trip is
/// resolved against both indices in input order, so the output follows the
/// order of `trips`. when several routes share a route_id, the first one listed
/// is used and a [`JoinWarning::DuplicateRoute`] is recorded.
///
/// # Arguments
/// * routes - rows of routes.txt
/// * stop_times - rows of stop_times.txt
/// * trips - rows of trips.txt
/// * options - lookup miss handling and stop ordering
///
/// # Result
/// one `{stops, route}` record per resolved trip, or a [`JoinError::LookupMiss`]
/// if a trip cannot be resolved under [`LookupMissPolicy::Fail`].
pub fn join_routes_stops(
    routes: &[Route],
    stop_times: &[StopTime],
    trips: &[Trip],
    options: &JoinOptions,
) -> Result<JoinOutput<JoinedTrip>, JoinError> {
    let resolved = resolve_trips(routes, stop_times, trips, options)?;
    Ok(JoinOutput {
        records: resolved
            .records
            .into_iter()
            .map(|(_, joined)| joined)
            .collect(),
        warnings: resolved.warnings,
    })
}

/// joins trips as in [`join_routes_stops`], keeping each output record paired
/// with the trip it was built from.
pub(super) fn resolve_trips<'a>(
    routes: &[Route],
    stop_times: &[StopTime],
    trips: &'a [Trip],
    options: &JoinOptions,
) -> Result<JoinOutput<(&'a Trip, JoinedTrip)>, JoinError> {
    let routes_by_id = group_by(GroupField::RouteId, routes);
    let times_by_trip_id = group_by(GroupField::TripId, stop_times);

    let mut records = Vec::with_capacity(trips.len());
    let mut warnings = vec![];
    for trip in trips {
        let Some(trip_stops) = times_by_trip_id.get(trip.trip_id.as_str()) else {
            let warning = JoinWarning::MissingStopTimes {
                trip_id: trip.trip_id.clone(),
            };
            handle_lookup_miss(warning, options.lookup_miss_policy, &mut warnings)?;
            continue;
        };
        let route = match routes_by_id.get(trip.route_id.as_str()) {
            Some(route_list) => {
                if route_list.len() > 1 {
                    let warning = JoinWarning::DuplicateRoute {
                        trip_id: trip.trip_id.clone(),
                        route_id: trip.route_id.clone(),
                        count: route_list.len(),
                    };
                    log::warn!("{warning}");
                    warnings.push(warning);
                }
                route_list.first()
            }
            None => None,
        };
        let Some(route) = route else {
            let warning = JoinWarning::MissingRoute {
                trip_id: trip.trip_id.clone(),
                route_id: trip.route_id.clone(),
            };
            handle_lookup_miss(warning, options.lookup_miss_policy, &mut warnings)?;
            continue;
        };

        let mut stops: Vec<StopTime> = trip_stops.iter().map(|st| (*st).clone()).collect();
        if options.order_by_stop_sequence {
            stops.sort_by_key(|st| st.stop_sequence);
        }
        let joined = JoinedTrip {
            stops,
            route: (*route).clone(),
        };
        records.push((trip, joined));
    }

    log::debug!(
        "joined {} of {} trips with {} warnings",
        records.len(),
        trips.len(),
        warnings.len()
    );
    Ok(JoinOutput { records, warnings })
}

fn handle_lookup_miss(
    warning: JoinWarning,
    policy: LookupMissPolicy,
    warnings: &mut Vec<JoinWarning>,
) -> Result<(), JoinError> {
    match policy {
        LookupMissPolicy::Fail => {
            log::error!("{warning}");
            Err(JoinError::LookupMiss(warning))
        }
        LookupMissPolicy::SkipTrip => {
            log::warn!("{warning}, skipping trip");
            warnings.push(warning);
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::join_routes_stops;
    use crate::join::{JoinError, JoinOptions, JoinWarning, LookupMissPolicy};
    use crate::model::{Route, StopTime, Trip};

    fn trip(trip_id: &str, route_id: &str) -> Trip {
        Trip {
            trip_id: String::from(trip_id),
            route_id: String::from(route_id),
            ..Default::default()
        }
    }

    fn route(route_id: &str, short_name: &str) -> Route {
        Route {
            route_id: String::from(route_id),
            route_short_name: String::from(short_name),
            ..Default::default()
        }
    }

    fn stop_time(trip_id: &str, stop_id: &str, stop_sequence: u32) -> StopTime {
        StopTime {
            trip_id: String::from(trip_id),
            stop_id: String::from(stop_id),
            stop_sequence,
            ..Default::default()
        }
    }

    #[test]
    fn test_join_single_trip() {
        let trips = vec![trip("T1", "R1")];
        let routes = vec![route("R1", "5")];
        let stop_times = vec![stop_time("T1", "S1", 1)];

        let result = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].stops, stop_times);
        assert_eq!(result.records[0].route, routes[0]);
        assert!(result.warnings.is_empty());

        let json = serde_json::to_value(&result.records[0]).expect("should serialize");
        assert_eq!(json["route"]["route_id"], "R1");
        assert_eq!(json["route"]["route_short_name"], "5");
        assert_eq!(json["stops"][0]["trip_id"], "T1");
        assert_eq!(json["stops"][0]["stop_id"], "S1");
        assert_eq!(json["stops"][0]["stop_sequence"], 1);
    }

    #[test]
    fn test_join_duplicate_route_selects_first() {
        let trips = vec![trip("T1", "R1")];
        let routes = vec![route("R1", "first"), route("R1", "second")];
        let stop_times = vec![stop_time("T1", "S1", 1)];

        let result = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");

        assert_eq!(result.records[0].route.route_short_name, "first");
        assert_eq!(
            result.warnings,
            vec![JoinWarning::DuplicateRoute {
                trip_id: String::from("T1"),
                route_id: String::from("R1"),
                count: 2
            }]
        );
    }

    #[test]
    fn test_join_output_follows_trip_order() {
        let trips = vec![trip("T3", "R2"), trip("T1", "R1"), trip("T2", "R1")];
        let routes = vec![route("R1", "1"), route("R2", "2")];
        let stop_times = vec![
            stop_time("T1", "S1", 1),
            stop_time("T2", "S2", 1),
            stop_time("T3", "S3", 1),
            stop_time("T1", "S4", 2),
        ];

        let result = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");

        assert_eq!(result.records.len(), trips.len());
        let first_stops = result
            .records
            .iter()
            .map(|r| r.stops[0].stop_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(first_stops, vec!["S3", "S1", "S2"]);
        assert_eq!(result.records[1].stops.len(), 2);
        assert_eq!(result.records[0].route.route_id, "R2");
    }

    #[test]
    fn test_join_keeps_file_order_unless_requested() {
        let trips = vec![trip("T1", "R1")];
        let routes = vec![route("R1", "1")];
        let stop_times = vec![
            stop_time("T1", "S2", 2),
            stop_time("T1", "S1", 1),
            stop_time("T1", "S3", 3),
        ];

        let unordered = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");
        let sequence = |stops: &[StopTime]| {
            stops
                .iter()
                .map(|st| st.stop_sequence)
                .collect::<Vec<_>>()
        };
        assert_eq!(sequence(&unordered.records[0].stops[..]), vec![2, 1, 3]);

        let options = JoinOptions {
            order_by_stop_sequence: true,
            ..Default::default()
        };
        let ordered = join_routes_stops(&routes, &stop_times, &trips, &options)
            .expect("join should succeed");
        assert_eq!(sequence(&ordered.records[0].stops[..]), vec![1, 2, 3]);
    }

    #[test]
    fn test_join_skips_trip_without_stop_times() {
        let trips = vec![trip("T1", "R1"), trip("T2", "R1")];
        let routes = vec![route("R1", "1")];
        let stop_times = vec![stop_time("T2", "S1", 1)];

        let result = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].stops[0].trip_id, "T2");
        assert_eq!(
            result.warnings,
            vec![JoinWarning::MissingStopTimes {
                trip_id: String::from("T1")
            }]
        );
    }

    #[test]
    fn test_join_skips_trip_with_unknown_route() {
        let trips = vec![trip("T1", "R9")];
        let routes = vec![route("R1", "1")];
        let stop_times = vec![stop_time("T1", "S1", 1)];

        let result = join_routes_stops(&routes, &stop_times, &trips, &JoinOptions::default())
            .expect("join should succeed");

        assert!(result.records.is_empty());
        assert_eq!(
            result.warnings,
            vec![JoinWarning::MissingRoute {
                trip_id: String::from("T1"),
                route_id: String::from("R9")
            }]
        );
    }

    #[test]
    fn test_join_fail_policy_surfaces_lookup_miss() {
        let trips = vec![trip("T1", "R1")];
        let routes = vec![route("R1", "1")];
        let options = JoinOptions {
            lookup_miss_policy: LookupMissPolicy::Fail,
            ..Default::default()
        };

        let result = join_routes_stops(&routes, &[], &trips, &options);
        match result {
            Err(JoinError::LookupMiss(JoinWarning::MissingStopTimes { trip_id })) => {
                assert_eq!(trip_id, "T1")
            }
            other => panic!("expected lookup miss, found {other:?}"),
        }
    }

    #[test]
    fn test_join_empty_inputs() {
        let result = join_routes_stops(&[], &[], &[], &JoinOptions::default())
            .expect("join should succeed");
        assert!(result.records.is_empty());
        assert!(result.warnings.is_empty());
    }
}
