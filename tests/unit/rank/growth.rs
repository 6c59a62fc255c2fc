use super::*;
use crate::foundation::core::Population;

fn country(name: &str, start: f64, end: f64) -> Vec<Observation> {
    vec![
        Observation::new(name, 2020, start),
        Observation::new(name, 2060, (start + end) / 2.0),
        Observation::new(name, 2100, end),
    ]
}

fn names(list: &[RankedCountry]) -> Vec<&str> {
    list.iter().map(|c| &*c.entity).collect()
}

#[test]
fn growth_rate_closed_form() {
    assert_eq!(growth_rate(100.0, 50.0), Some(-0.5));
    assert_eq!(growth_rate(100.0, 400.0), Some(3.0));
    assert_eq!(growth_rate(0.0, 400.0), None);
    assert_eq!(growth_rate(-1.0, 400.0), None);

    let table = GrowthTable::build(&country("Japan", 125_000_000.0, 77_000_000.0));
    let japan = table.get("Japan").unwrap();
    assert_eq!(
        japan.growth_rate,
        (77_000_000.0 - 125_000_000.0) / 125_000_000.0
    );
}

#[test]
fn missing_endpoint_excludes_from_both_lists() {
    let mut obs = country("A", 100.0, 50.0);
    obs.extend(country("B", 100.0, 400.0));
    // C lacks 2100; D lacks 2020; E starts at zero.
    obs.push(Observation::new("C", 2020, 10.0));
    obs.push(Observation::new("C", 2099, 1.0));
    obs.push(Observation::new("D", 2021, 10.0));
    obs.push(Observation::new("D", 2100, 1.0));
    obs.extend(country("E", 0.0, 5.0));

    let table = GrowthTable::build(&obs);
    let excluded: Vec<&str> = table.excluded().iter().map(|e| &**e).collect();
    assert_eq!(excluded, vec!["C", "D", "E"]);
    for order in [RankOrder::Slowest, RankOrder::Fastest] {
        let ranked = table.ranked(order, 5);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| !["C", "D", "E"].contains(&&*c.entity)));
    }
}

#[test]
fn endpoints_match_exactly_not_nearest() {
    let obs = vec![
        Observation::new("Near", 2019, 10.0),
        Observation::new("Near", 2021, 10.0),
        Observation::new("Near", 2100, 20.0),
    ];
    assert!(GrowthTable::build(&obs).entries().is_empty());
}

#[test]
fn ordering_and_limit() {
    let mut obs = Vec::new();
    for (i, name) in ["P", "Q", "R", "S", "T", "U", "V"].iter().enumerate() {
        obs.extend(country(name, 100.0, 100.0 + 10.0 * i as f64));
    }
    let table = GrowthTable::build(&obs);
    assert_eq!(
        names(&table.ranked(RankOrder::Slowest, 5)),
        vec!["P", "Q", "R", "S", "T"]
    );
    assert_eq!(
        names(&table.ranked(RankOrder::Fastest, 5)),
        vec!["V", "U", "T", "S", "R"]
    );
}

#[test]
fn ties_keep_enumeration_order_in_both_directions() {
    let mut obs = Vec::new();
    obs.extend(country("Second", 100.0, 200.0));
    obs.extend(country("First", 100.0, 200.0));
    obs.extend(country("Low", 100.0, 50.0));
    let table = GrowthTable::build(&obs);
    assert_eq!(
        names(&table.ranked(RankOrder::Slowest, 5)),
        vec!["Low", "Second", "First"]
    );
    assert_eq!(
        names(&table.ranked(RankOrder::Fastest, 5)),
        vec!["Second", "First", "Low"]
    );
}

#[test]
fn lists_overlap_with_fewer_than_ten_countries() {
    let mut obs = Vec::new();
    for (i, name) in ["C1", "C2", "C3", "C4", "C5", "C6"].iter().enumerate() {
        obs.extend(country(name, 100.0, 50.0 + 25.0 * i as f64));
    }
    let table = GrowthTable::build(&obs);
    let slow = table.ranked(RankOrder::Slowest, 5);
    let fast = table.ranked(RankOrder::Fastest, 5);
    let overlap: Vec<&str> = names(&slow)
        .into_iter()
        .filter(|n| names(&fast).contains(n))
        .collect();
    assert_eq!(overlap, vec!["C2", "C3", "C4", "C5"]);
}

#[test]
fn ranked_entries_carry_full_sorted_series() {
    let obs = vec![
        Observation::new("Z", 2100, 30.0),
        Observation::new("Z", 2020, 10.0),
        Observation::new("Z", 2050, 20.0),
    ];
    let table = GrowthTable::build(&obs);
    let z = &table.ranked(RankOrder::Fastest, 1)[0];
    let years: Vec<i32> = z.series.iter().map(|o| o.year).collect();
    assert_eq!(years, vec![2020, 2050, 2100]);
    assert_eq!(z.growth_rate, 2.0);
}

#[test]
fn country_observations_drop_aggregates_invalid_and_out_of_window() {
    let obs = vec![
        Observation::new("World", 2020, 1.0),
        Observation::new("Asia", 2020, 1.0),
        Observation::new("Latin America", 2020, 1.0),
        Observation::new("Chile", 2019, 1.0),
        Observation::new("Chile", 2020, 1.0),
        Observation {
            entity: "Chile".into(),
            year: 2021,
            population: Population::INVALID,
        },
    ];
    let kept = country_observations(&obs, YearWindow::default());
    assert_eq!(kept, vec![Observation::new("Chile", 2020, 1.0)]);
}

#[test]
fn endpoints_come_from_2020_and_2100_not_series_edges() {
    let obs = vec![
        Observation::new("Wide", 1950, 5.0),
        Observation::new("Wide", 2020, 10.0),
        Observation::new("Wide", 2100, 40.0),
        Observation::new("Wide", 2110, 99.0),
    ];
    let table = GrowthTable::build(&obs);
    let wide = table.get("Wide").unwrap();
    assert_eq!(wide.endpoints(), (Some(10.0), Some(40.0)));
    assert_eq!(wide.growth_rate, 3.0);
}
