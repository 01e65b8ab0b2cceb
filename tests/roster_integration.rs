//! Integration tests for the roster model
//!
//! These tests drive the public API the way a scorekeeper would:
//! building a roster, recording fouls and makes, and reading the
//! aggregates and reports back out.

use hoops_roster::console::Session;
use hoops_roster::domain::{Player, RosterError, Team};
use hoops_roster::report::BoxScore;

/// Team "Eagles" with Sam wearing #7
fn eagles_with_sam() -> Team {
    let mut team = Team::with_name("Eagles");
    team.add_player("Sam", 7).expect("Failed to add Sam");
    team
}

#[test]
fn test_end_to_end_game_flow() {
    let mut team = eagles_with_sam();

    // Test: Duplicate jersey is rejected and names the current holder
    let err = team.add_player("Lee", 7).unwrap_err();
    assert!(
        matches!(err, RosterError::DuplicateJersey { jersey: 7, ref existing } if existing == "Sam"),
        "Duplicate should mention Sam"
    );
    assert!(err.to_string().contains("Sam"));
    assert_eq!(team.len(), 1, "Roster should be unchanged");

    // Test: Lookup returns the rostered player
    assert_eq!(team.find_player(7).unwrap().unwrap().name(), "Sam");

    // Test: Mutating through lookup feeds the team aggregates
    let sam = team.find_player_mut(7).unwrap().expect("Sam is rostered");
    sam.record_shot(3).expect("valid shot");
    sam.record_foul();

    assert_eq!(team.team_points(), 3);
    assert_eq!(team.team_fouls(), 1);
}

#[test]
fn test_three_player_roster_aggregates() {
    let mut team = Team::new();
    team.add_player("A", 5).unwrap();
    team.add_player("B", 10).unwrap();
    team.add_player("C", 23).unwrap();

    assert_eq!(team.team_fouls(), 0);
    assert_eq!(team.team_points(), 0);

    let a = team.find_player_mut(5).unwrap().unwrap();
    a.record_shot(2).unwrap();
    a.record_foul();

    assert_eq!(team.team_fouls(), 1);
    assert_eq!(team.team_points(), 2);
}

#[test]
fn test_duplicate_leaves_roster_contents_intact() {
    let mut team = Team::new();
    team.add_player("A", 5).unwrap();
    team.add_player("B", 10).unwrap();

    let before: Vec<(u8, String)> = team
        .players()
        .iter()
        .map(|p| (p.jersey(), p.name().to_string()))
        .collect();

    assert!(team.add_player("Z", 5).is_err());

    let after: Vec<(u8, String)> = team
        .players()
        .iter()
        .map(|p| (p.jersey(), p.name().to_string()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn test_find_player_for_every_valid_jersey_on_empty_team() {
    let team = Team::with_name("Empty");
    for jersey in 0..=99 {
        assert!(team.find_player(jersey).unwrap().is_none());
    }
}

#[test]
fn test_invalid_jersey_fails_everywhere() {
    let mut team = Team::new();

    for bad in [-1, 100, 250] {
        assert!(Player::with_jersey(bad).unwrap_err().is_invalid_argument());
        assert!(team.find_player(bad).unwrap_err().is_invalid_argument());
        assert!(team.add_player("X", bad).unwrap_err().is_invalid_argument());
    }

    assert!(team.is_empty());
}

#[test]
fn test_player_identity_is_jersey_only() {
    let x = Player::with_name_and_jersey("X", 9).unwrap();
    let y = Player::with_name_and_jersey("Y", 9).unwrap();

    assert!(x.is_same_player(&y));
    assert!(!x.is_same_player(&"not a player"));
}

#[test]
fn test_reports_after_a_game() {
    let mut team = eagles_with_sam();
    team.add_player("Lee", 11).unwrap();
    team.record_shot(7, 3).unwrap();
    team.record_shot(11, 2).unwrap();
    team.record_shot(11, 1).unwrap();
    team.record_foul(11).unwrap();

    assert_eq!(team.team_stats(), "Team Eagles Fouls: 1 Points: 6");

    let table = team.detail_stats();
    let rows: Vec<&str> = table.lines().collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2], "     7              Sam      0    0    0    1      3 ");
    assert_eq!(rows[3], "    11              Lee      1    1    1    0      3 ");

    let score = BoxScore::from(&team);
    assert_eq!(score.points, 6);
    assert_eq!(score.players[1].name, "Lee");
}

#[test]
fn test_console_session_transcript() {
    let input = "\
add 7 Sam
add 7 Lee
shot 7 3
shot 7 5
foul 7
team
quit
";
    let mut out = Vec::new();
    let mut session = Session::new(Team::with_name("Eagles"), &mut out);
    session.run(input.as_bytes(), "").expect("session runs");
    let team = session.into_team();

    assert_eq!(team.team_points(), 3);
    assert_eq!(team.team_fouls(), 1);

    let transcript = String::from_utf8(out).unwrap();
    assert_eq!(
        transcript,
        "\
Added #7 Sam
error: Jersey #7 already assigned to Sam
#7 Sam Fouls: 0 Points: 3
error: Invalid shot type: 5
#7 Sam Fouls: 1 Points: 3
Team Eagles Fouls: 1 Points: 3
"
    );
}
