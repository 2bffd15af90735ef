//! Integration tests for zone grouping and validation.

mod common;

use common::{teams, teams_with_zones};
use evita_fixture::logic::{format_table, supported_team_counts};
use evita_fixture::{group_zones, natural_cmp, validate_zones, FixtureError, Team};
use std::cmp::Ordering;

#[test]
fn natural_order_compares_numbers_by_value() {
    assert_eq!(natural_cmp("Zona 2", "Zona 10"), Ordering::Less);
    assert_eq!(natural_cmp("Zona 10", "Zona 9"), Ordering::Greater);
    assert_eq!(natural_cmp("zona a", "Zona B"), Ordering::Less);
    assert_eq!(natural_cmp("Zona 02", "Zona 2"), Ordering::Equal);
    assert_eq!(natural_cmp("Zona", "Zona 1"), Ordering::Less);
}

#[test]
fn grouping_ignores_case_and_whitespace() {
    let teams = vec![
        Team::new("a", "A", " Zona 1 "),
        Team::new("b", "B", "ZONA  1"),
        Team::new("c", "C", "zona 1"),
    ];
    let zones = group_zones(&teams);
    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].label, "Zona 1");
    assert_eq!(zones[0].team_ids, vec!["a", "b", "c"]);
}

#[test]
fn zones_sorted_naturally_regardless_of_entry_order() {
    let teams = vec![
        Team::new("a", "A", "Zona 10"),
        Team::new("b", "B", "Zona 2"),
        Team::new("c", "C", "Zona 1"),
    ];
    let labels: Vec<_> = group_zones(&teams).into_iter().map(|z| z.label).collect();
    assert_eq!(labels, vec!["Zona 1", "Zona 2", "Zona 10"]);
}

#[test]
fn every_supported_layout_validates() {
    for total in supported_team_counts() {
        let (zones, table) = validate_zones(&teams(total)).unwrap();
        assert_eq!(zones.len(), table.shape.zones);
        assert_eq!(table.teams, total);
    }
}

#[test]
fn table_shapes_add_up_to_their_team_count() {
    for total in 20..=24 {
        let shape = format_table(total).unwrap().shape;
        assert_eq!(shape.threes + shape.twos, shape.zones);
        assert_eq!(3 * shape.threes + 2 * shape.twos, total);
    }
    assert!(format_table(19).is_none());
    assert!(format_table(25).is_none());
}

#[test]
fn team_count_outside_range_is_rejected() {
    let err = validate_zones(&teams_with_zones(&[3, 3, 3, 3, 3, 2, 2])).unwrap_err();
    assert_eq!(err, FixtureError::UnsupportedTeamCount(19));
    let err = validate_zones(&teams_with_zones(&[3, 3, 3, 3, 3, 3, 3, 3, 1])).unwrap_err();
    assert_eq!(err, FixtureError::UnsupportedTeamCount(25));
}

#[test]
fn wrong_zone_count_is_rejected() {
    let err = validate_zones(&teams_with_zones(&[4, 4, 4, 3, 3, 3, 3])).unwrap_err();
    assert_eq!(
        err,
        FixtureError::WrongZoneCount {
            teams: 24,
            expected: 8,
            found: 7
        }
    );
}

#[test]
fn zone_of_four_is_rejected() {
    let err = validate_zones(&teams_with_zones(&[4, 3, 3, 3, 3, 3, 3, 2])).unwrap_err();
    assert_eq!(
        err,
        FixtureError::InvalidZoneSize {
            zone: "Zona 1".to_string(),
            size: 4
        }
    );
}

#[test]
fn team_without_zone_is_rejected() {
    let mut list = teams(20);
    list[5].zone = "   ".to_string();
    let err = validate_zones(&list).unwrap_err();
    assert_eq!(err, FixtureError::TeamWithoutZone(list[5].short_name.clone()));
    assert!(err.to_string().contains("has no zone"));
}
