use voyage_rating::voyage::{
    rating, select_rating, Grade, HistoryEntry, Rating, RatingVariant, Voyage,
};

fn history_of(count: usize, zone: &str) -> Vec<HistoryEntry> {
    (0..count).map(|_| HistoryEntry::new(zone, None)).collect()
}

#[test]
fn experienced_latam_history_grades_a() {
    let voyage = Voyage::new("latam", None);
    let history = history_of(10, "latam");
    let rating = select_rating(&voyage, &history);

    assert_eq!(rating.variant(), RatingVariant::Default);
    assert_eq!(rating.voyage_profit_factor(), 3);
    assert_eq!(rating.voyage_risk(), 1);
    assert_eq!(rating.captain_history_risk(), 1);
    assert_eq!(rating.value(), Grade::A);
}

#[test]
fn capitalized_china_history_falls_through_to_default() {
    let voyage = Voyage::new("china", None);
    let history = history_of(1, "China");
    let rating = select_rating(&voyage, &history);

    assert_eq!(rating.variant(), RatingVariant::Default);
    assert_eq!(rating.voyage_profit_factor(), 3);
    assert_eq!(rating.voyage_risk(), 5);
    assert_eq!(rating.captain_history_risk(), 5);
    assert_eq!(rating.value(), Grade::B);
}

#[test]
fn long_voyage_loses_a_profit_point() {
    let voyage = Voyage::new("latam", Some(15));
    assert_eq!(select_rating(&voyage, &[]).voyage_profit_factor(), 1);
}

#[test]
fn china_specialist_scenarios() {
    let short = Voyage::new("china", None);
    let very_long = Voyage::new("china", Some(19));
    let single = history_of(1, "china");
    let seasoned = history_of(11, "china");

    let rating = select_rating(&short, &single);
    assert_eq!(rating.variant(), RatingVariant::ExperiencedRoute);
    assert_eq!(rating.voyage_length_factor(), 3);
    assert_eq!(rating.history_length_factor(), 0);
    assert_eq!(rating.voyage_profit_factor(), 6);

    assert_eq!(select_rating(&short, &seasoned).voyage_profit_factor(), 7);
    assert_eq!(select_rating(&very_long, &single).voyage_profit_factor(), 6);
}

#[test]
fn risks_are_never_negative() {
    let zones = ["china", "east-indies", "latam", "China", ""];
    for zone in zones {
        for length in [None, Some(0), Some(5), Some(9), Some(20), Some(40)] {
            let voyage = Voyage::new(zone, length);
            for count in [0, 1, 5, 12] {
                let history: Vec<_> = (0..count)
                    .map(|index| HistoryEntry::new(zone, Some(index as f64 * 3.0)))
                    .collect();
                for variant in [RatingVariant::Default, RatingVariant::ExperiencedRoute] {
                    let rating = Rating::new(&voyage, &history, variant);
                    assert!(rating.voyage_risk() >= 0);
                    assert!(rating.captain_history_risk() >= 0);
                }
            }
        }
    }
}

#[test]
fn selection_is_deterministic() {
    let voyage = Voyage::new("china", Some(13));
    let history = vec![
        HistoryEntry::new("china", Some(-4.0)),
        HistoryEntry::new("latam", Some(10.0)),
    ];

    let first = select_rating(&voyage, &history).breakdown();
    let second = select_rating(&voyage, &history).breakdown();
    assert_eq!(first, second);
    assert_eq!(rating(&voyage, &history), first.grade);
}

#[test]
fn default_voyage_risk_never_decreases_with_length() {
    let history: Vec<HistoryEntry> = Vec::new();
    let mut previous = 0;
    for length in 0..30 {
        let voyage = Voyage::new("latam", Some(length));
        let risk = Rating::default_variant(&voyage, &history).voyage_risk();
        assert!(risk >= previous, "risk dropped at length {length}");
        previous = risk;
    }
}

#[test]
fn each_extra_loss_adds_exactly_one_risk_point() {
    let voyage = Voyage::new("china", None);
    let mut history = history_of(4, "china");
    history.push(HistoryEntry::new("china", Some(-3.0)));
    history.push(HistoryEntry::new("latam", Some(-0.5)));

    for variant in [RatingVariant::Default, RatingVariant::ExperiencedRoute] {
        let before = Rating::new(&voyage, &history, variant).captain_history_risk();
        history.push(HistoryEntry::new("china", Some(-1.0)));
        let after = Rating::new(&voyage, &history, variant).captain_history_risk();
        history.truncate(6);
        assert_eq!(before, 1, "variant {variant:?}");
        assert_eq!(after - before, 1, "variant {variant:?}");
    }
}
