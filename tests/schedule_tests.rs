use chrono::{DateTime, FixedOffset, TimeZone, Utc};

use pumpjack::model::game::{Game, GameParticipant, GameState, PeriodDescriptor};
use pumpjack::model::schedule::{GameDay, ScheduleWindow};
use pumpjack::nhl::schedule_from_json;
use pumpjack::schedule::{TODAY_LABEL, day_label, find_next_game};

fn load_schedule() -> ScheduleWindow {
    let body = std::fs::read_to_string("tests/schedule.json").expect("failed to read schedule.json");
    schedule_from_json(&body).expect("schedule.json should decode")
}

fn mountain_morning() -> DateTime<FixedOffset> {
    FixedOffset::west_opt(7 * 3600).unwrap().with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap()
}

fn game(id: u64, away: &str, home: &str, start: DateTime<Utc>) -> Game {
    Game {
        id,
        away_team: GameParticipant::new(1, away, 0),
        home_team: GameParticipant::new(2, home, 0),
        start_time: start,
        state: GameState::Scheduled,
        period: PeriodDescriptor::default(),
    }
}

#[test]
fn finds_first_game_for_team_and_labels_today() {
    let window = load_schedule();
    let next = find_next_game(&window, "EDM", &mountain_morning()).expect("EDM plays this week");
    assert_eq!(next.game.id, 2023020650);
    assert_eq!(next.day_label, TODAY_LABEL);
}

#[test]
fn matches_home_as_well_as_away() {
    let window = load_schedule();
    let next = find_next_game(&window, "MTL", &mountain_morning()).unwrap();
    assert_eq!(next.game.id, 2023020655);
    assert_eq!(next.game.home_team.abbrev, "MTL");
}

#[test]
fn later_days_get_weekday_label() {
    let window = load_schedule();
    let now = mountain_morning();
    let tor = find_next_game(&window, "TOR", &now).unwrap();
    assert_eq!(tor.day_label, "Thu");
    let col = find_next_game(&window, "COL", &now).unwrap();
    assert_eq!(col.day_label, "Sat");
}

#[test]
fn label_follows_the_viewers_zone() {
    let window = load_schedule();
    // 2024-01-12T00:00Z is Thursday evening in Mountain time but Friday in UTC.
    let utc_now = Utc.with_ymd_and_hms(2024, 1, 10, 16, 0, 0).unwrap();
    let tor = find_next_game(&window, "TOR", &utc_now).unwrap();
    assert_eq!(tor.day_label, "Fri");

    // 19:00Z on the 10th is already the 11th at +09:00.
    let tokyo_now = FixedOffset::east_opt(9 * 3600).unwrap().with_ymd_and_hms(2024, 1, 10, 23, 30, 0).unwrap();
    let edm = find_next_game(&window, "EDM", &tokyo_now).unwrap();
    assert_eq!(edm.day_label, "Thu");
}

#[test]
fn team_without_games_is_not_an_error() {
    let window = load_schedule();
    assert!(find_next_game(&window, "NJD", &mountain_morning()).is_none());
    assert!(find_next_game(&ScheduleWindow::default(), "EDM", &mountain_morning()).is_none());
}

#[test]
fn trusts_source_order_over_start_times() {
    let later = Utc.with_ymd_and_hms(2024, 1, 12, 2, 0, 0).unwrap();
    let sooner = Utc.with_ymd_and_hms(2024, 1, 11, 2, 0, 0).unwrap();
    let window = ScheduleWindow {
        game_days: vec![
            GameDay { date: "2024-01-10".into(), day_abbrev: "WED".into(), games: vec![] },
            GameDay { date: "2024-01-11".into(), day_abbrev: "THU".into(), games: vec![game(1, "EDM", "CGY", later)] },
            GameDay { date: "2024-01-12".into(), day_abbrev: "FRI".into(), games: vec![game(2, "VAN", "EDM", sooner)] },
        ],
    };
    let next = find_next_game(&window, "EDM", &mountain_morning()).unwrap();
    assert_eq!(next.game.id, 1);
}

#[test]
fn first_game_for_is_a_plain_structural_scan() {
    let window = load_schedule();
    let ids: Vec<u64> = ["VAN", "SEA", "CGY", "ANA"]
        .iter()
        .filter_map(|abbrev| window.first_game_for(abbrev).map(|g| g.id))
        .collect();
    assert_eq!(ids, vec![2023020649, 2023020649, 2023020650, 2023020670]);
    assert!(window.first_game_for("edm").is_none(), "abbreviations compare exactly");
}

#[test]
fn day_label_is_today_only_on_matching_calendar_date() {
    let start = Utc.with_ymd_and_hms(2024, 1, 11, 6, 59, 0).unwrap();
    let g = game(9, "EDM", "CGY", start);
    // 06:59Z on the 11th is 23:59 on the 10th at -07:00.
    assert_eq!(day_label(&g, &mountain_morning()), TODAY_LABEL);
    let next_minute = game(10, "EDM", "CGY", Utc.with_ymd_and_hms(2024, 1, 11, 7, 0, 0).unwrap());
    assert_eq!(day_label(&next_minute, &mountain_morning()), "Thu");
}
