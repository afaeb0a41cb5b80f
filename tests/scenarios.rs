use ram_latency::color::COLOR_STOPS;
use ram_latency::config::MAX_HISTORY_POINTS;
use ram_latency::{
    classify, color_for_value, compute_ns, present, Action, AppState, CalcError, Field, History,
    Measurement, Mode, Rgb, Tier,
};

fn commit(i: usize) -> Mode {
    Mode::Commit {
        timestamp: format!("2024-03-01T12:{:02}:00.000Z", i % 60),
    }
}

#[test]
fn ddr4_3200_cl16_is_ideal() {
    let mut history = History::default();
    let p = present(&Measurement::new(3200.0, 16.0), commit(0), &mut history);
    assert_eq!(p.text, "10 ns");
    assert_eq!(p.label, "Ideal");
    assert_eq!(p.background, color_for_value(10.0));
    assert_eq!(history.len(), 1);
}

#[test]
fn sixteen_and_eighteen_is_unacceptable_with_white_text() {
    assert_eq!(compute_ns(16.0, 18.0), Ok(2250.0));
    let mut history = History::default();
    let p = present(&Measurement::new(16.0, 18.0), Mode::Preview, &mut history);
    assert_eq!(p.tier, Some(Tier::Unacceptable));
    assert_eq!(p.background, COLOR_STOPS[COLOR_STOPS.len() - 1].color);
    assert_eq!(p.foreground, Rgb::WHITE);
}

#[test]
fn zero_mts_never_reaches_history() {
    let mut history = History::default();
    let p = present(&Measurement::from_text("0", "16"), commit(0), &mut history);
    assert_eq!(p.text, CalcError::InvalidMts.to_string());
    assert!(history.is_empty());
}

#[test]
fn forty_five_commits_keep_the_latest_forty() {
    let mut history = History::default();
    for i in 0..45 {
        let mts = 2000.0 + 100.0 * i as f64;
        present(&Measurement::new(mts, 16.0), commit(i), &mut history);
    }
    assert_eq!(history.len(), MAX_HISTORY_POINTS);
    let expected: Vec<f64> = (5..45)
        .map(|i| compute_ns(2000.0 + 100.0 * i as f64, 16.0).unwrap())
        .collect();
    assert_eq!(history.values(), expected);
}

#[test]
fn every_value_gets_exactly_one_tier() {
    let mut v = -1.0;
    while v < 20.0 {
        let tier = classify(v);
        assert_eq!(tier == Tier::Invalid, v < 0.0, "value {v}");
        v += 0.01;
    }
}

#[test]
fn history_survives_a_storage_round_trip_through_the_app() {
    let state = AppState::new(History::default(), false)
        .apply(Action::SliderInput(Field::Mts, 3600.0))
        .apply(Action::Calculate {
            timestamp: "2024-03-01T12:00:00.000Z".into(),
        });
    let json = state.history.to_json().unwrap();

    let restored = AppState::new(History::from_stored(Some(&json)), false);
    assert_eq!(restored.history, state.history);
    assert_eq!(restored.display, state.display);
}
