//! Integration tests for the wire shapes: match records, seeds, snapshots.

use evita_fixture::{
    from_records, to_records, FixtureError, FormatProfile, Match, MatchCode, MatchRecord, Outcome,
    Phase, Pool, Seed, TournamentSnapshot,
};

#[test]
fn seeds_render_their_display_text() {
    assert_eq!(Seed::team("tm_1").to_string(), "tm_1");
    assert_eq!(Seed::ranked(2, 3).to_string(), "2°3°");
    let group = Seed::GroupPlace {
        place: 1,
        group: Pool::A1.label().to_string(),
    };
    assert_eq!(group.to_string(), "1° Zona A1");
    assert_eq!(Seed::winner_of("P9_1").to_string(), "GP P9_1");
    assert_eq!(Seed::loser_of("P17_4").to_string(), "PP P17_4");
    assert_eq!(Seed::Bye.to_string(), "BYE");
}

#[test]
fn seed_text_parses_back() {
    assert_eq!("2°3°".parse::<Seed>().unwrap(), Seed::ranked(2, 3));
    assert_eq!(
        "4° Zona A2".parse::<Seed>().unwrap(),
        Seed::GroupPlace {
            place: 4,
            group: "Zona A2".to_string()
        }
    );
    assert_eq!(
        "PP 12".parse::<Seed>().unwrap(),
        Seed::Outcome {
            result: Outcome::Loser,
            code: MatchCode::Display(12)
        }
    );
    assert_eq!("GP BYE".parse::<Seed>().unwrap().reference().unwrap().0, &MatchCode::Bye);
    assert_eq!("BYE".parse::<Seed>().unwrap(), Seed::Bye);
    for bad in ["", "Equipo", "x°1°", "3°"] {
        assert!(bad.parse::<Seed>().is_err(), "{bad}");
    }
}

#[test]
fn match_codes_parse_by_shape() {
    assert_eq!(MatchCode::from("17"), MatchCode::Display(17));
    assert_eq!(MatchCode::from("BYE"), MatchCode::Bye);
    assert_eq!(MatchCode::from("P9_3"), MatchCode::structural("P9_3"));
    assert_eq!(serde_json::to_string(&MatchCode::Display(5)).unwrap(), "\"5\"");
}

#[test]
fn phases_parse_from_labels() {
    assert_eq!("Fase 2 · Zona A2".parse::<Phase>().unwrap(), Phase::SecondStage(Pool::A2));
    assert_eq!("Puestos 17-24".parse::<Phase>().unwrap(), Phase::Placement17To24);
    assert!(matches!(
        "Final".parse::<Phase>(),
        Err(FixtureError::MalformedMatch(_))
    ));
}

#[test]
fn record_wire_shape_for_a_bracket_match() {
    let m = Match::bracket(
        "P9_5",
        Phase::Placement9To16,
        2,
        Seed::winner_of("P9_1"),
        Seed::loser_of("P9_2"),
    );
    let value = serde_json::to_value(MatchRecord::from(&m)).unwrap();
    assert_eq!(value["code"], "P9_5");
    assert_eq!(value["zone"], "Puestos 9-16");
    assert_eq!(value["phase"], "Puestos 9-16");
    assert_eq!(value["round"], 2);
    assert_eq!(value["homeSeed"], "GP P9_1");
    assert_eq!(value["fromHomeMatchCode"], "P9_1");
    assert_eq!(value["fromHomeResult"], "GP");
    assert_eq!(value["fromAwayResult"], "PP");
    assert!(value["homeTeamId"].is_null());
    assert!(value["date"].is_null());
    assert_eq!(value["isByeMatch"], false);
}

#[test]
fn records_convert_back_to_matches() {
    let mut zone = Match::new("Zona 3", Phase::Zones, 2, Seed::team("a"), Seed::team("b"));
    zone.preferred_day_index = Some(1);
    let knockout = Match::bracket(
        "P17_1",
        Phase::Placement17To24,
        1,
        Seed::ranked(1, 3),
        Seed::Bye,
    )
    .into_bye(true);
    let original = vec![zone, knockout];
    let json = serde_json::to_string(&to_records(&original)).unwrap();
    let records: Vec<MatchRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(from_records(records).unwrap(), original);
}

#[test]
fn minimal_record_gets_a_fresh_id() {
    let json = r#"{"zone":"Zona 1","phase":"Fase 1 · Zonas","round":1,"homeTeamId":"a","awayTeamId":"b"}"#;
    let record: MatchRecord = serde_json::from_str(json).unwrap();
    let m = Match::try_from(record).unwrap();
    assert_eq!(m.home, Seed::team("a"));
    assert_eq!(m.code, None);
    assert!(!m.is_bye);
}

#[test]
fn record_without_a_side_is_rejected() {
    let record = MatchRecord {
        zone: "Zona 1".to_string(),
        phase: "Fase 1 · Zonas".to_string(),
        round: 1,
        home_team_id: Some("a".to_string()),
        ..MatchRecord::default()
    };
    let err = Match::try_from(record).unwrap_err();
    assert!(err.to_string().contains("away side"));
}

#[test]
fn snapshot_defaults() {
    let json = r#"{"teams":[{"id":"a","shortName":"Alfa","zone":"Zona 1"}]}"#;
    let snapshot: TournamentSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snapshot.format_profile().unwrap(), FormatProfile::Evita8x3);
    assert_eq!(snapshot.match_duration_minutes, 60);
    assert_eq!(snapshot.rest_min_minutes, 90);
    assert!(!snapshot.double_round);
    assert!(snapshot.fields.is_empty() && snapshot.day_configs.is_empty());
    assert_eq!(snapshot.teams[0].short_name, "Alfa");
}

#[test]
fn format_profiles_by_name() {
    assert_eq!("especial-8x3-flex".parse::<FormatProfile>().unwrap(), FormatProfile::Evita8x3Flex);
    assert_eq!(FormatProfile::Evita8x3.to_string(), "especial-8x3");
    assert_eq!(
        "liga".parse::<FormatProfile>(),
        Err(FixtureError::UnsupportedFormat("liga".to_string()))
    );
}
