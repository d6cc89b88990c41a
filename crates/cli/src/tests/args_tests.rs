// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Args, Command};
use clap::{CommandFactory, Parser};
use orcast_domain::ActivityType;

#[test]
fn test_args_definition_is_consistent() {
    Args::command().debug_assert();
}

#[test]
fn test_activities_parses_type() {
    let args: Args =
        Args::try_parse_from(["orcast", "activities", "trip.json", "--type", "Kayaking"]).unwrap();

    assert!(matches!(
        args.command,
        Command::Activities {
            activity_type: ActivityType::Kayaking,
            ..
        }
    ));
}

#[test]
fn test_activities_rejects_unknown_type() {
    let result = Args::try_parse_from(["orcast", "activities", "trip.json", "--type", "surfing"]);

    assert!(result.is_err());
}

#[test]
fn test_zones_default_threshold() {
    let args: Args = Args::try_parse_from(["orcast", "-q", "zones", "trip.json"]).unwrap();

    match args.command {
        Command::Zones {
            min_probability, ..
        } => assert!(min_probability.abs() < f64::EPSILON),
        other => panic!("unexpected command: {other:?}"),
    }
}
