//! Behaviour of the ticker list as seen from outside the crate: records are
//! decoded from API-shaped JSON and driven through the public list API.

use std::num::NonZeroUsize;

use zticker::app::list::{ListViewModel, SortDirection};
use zticker::source::{CoinloreSource, DataSource};
use zticker::{SortField, Ticker};

const NAMES: [&str; 8] = [
    "Bitcoin", "Ethereum", "Tether", "BNB", "Solana", "Bitcoin Cash", "Dogecoin", "Cardano",
];

/// Decodes a response body through the same path the plugin uses.
fn decode(json: &str) -> Vec<Ticker> {
    CoinloreSource::default()
        .decode(200, json.as_bytes())
        .expect("fixture should decode")
}

/// A reproducible market of `count` tickers with no ties in any column.
fn market(count: usize) -> Vec<Ticker> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        seed
    };

    let records: Vec<String> = (0..count)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let change = ((i * 37) % 200) as f64 / 10.0 - 10.0;
            format!(
                r#"{{"id":"{}","symbol":"S{i}","name":"{name} {i}","rank":{},"price_usd":"{}.{:02}","percent_change_24h":"{change:.2}","price_btc":"0.{:08}","market_cap_usd":"{}{:03}"}}"#,
                1000 + i,
                count - i,
                next() % 50_000,
                i % 100,
                i + 1,
                next() % 1_000_000,
                i,
            )
        })
        .collect();

    decode(&format!(r#"{{"data":[{}]}}"#, records.join(",")))
}

fn list(records: Vec<Ticker>, per_page: usize) -> ListViewModel {
    let mut list = ListViewModel::new(NonZeroUsize::new(per_page).unwrap());
    list.load(records);
    list
}

fn ids(tickers: &[&Ticker]) -> Vec<String> {
    tickers.iter().map(|t| t.id.to_string()).collect()
}

#[test]
fn concrete_two_record_scenario() {
    let records = decode(
        r#"{"data":[
            {"id":1,"name":"Bit","rank":2,"price_usd":10},
            {"id":2,"name":"Alt","rank":1,"price_usd":20}
        ]}"#,
    );
    let mut list = list(records, 1);

    list.set_sort(SortField::Rank);
    assert_eq!(ids(&list.compute_view()), ["2"]);
    list.set_page(2);
    assert_eq!(ids(&list.compute_view()), ["1"]);

    list.set_search("Bit");
    assert_eq!(ids(&list.filtered()), ["1"]);
    assert_eq!(list.page_count(), 1);
    assert_eq!(list.view_state().current_page, 1);
}

#[test]
fn pages_partition_the_filtered_sequence() {
    for per_page in [1, 3, 7, 10, 64] {
        for query in ["", "coin", "bitcoin", "10", "nothing-matches"] {
            let mut list = list(market(53), per_page);
            list.set_sort(SortField::PriceUsd);
            list.set_search(query);

            let expected = ids(&list.filtered());
            let mut concatenated = Vec::new();
            for page in 1..=list.page_count() {
                list.set_page(page);
                let view = list.compute_view();
                assert!(!view.is_empty(), "page {page} of {} is empty", list.page_count());
                assert!(view.len() <= per_page);
                concatenated.extend(ids(&view));
            }

            assert_eq!(concatenated, expected, "per_page={per_page} query={query:?}");
        }
    }
}

#[test]
fn every_viewed_record_matches_the_query() {
    let mut list = list(market(40), 5);

    for query in ["BIT", "coin 1", "100", "ether", ""] {
        list.set_search(query);
        let needle = query.to_lowercase();

        for page in 1..=list.page_count() {
            list.set_page(page);
            for ticker in list.compute_view() {
                assert!(
                    ticker.name.to_lowercase().contains(&needle)
                        || ticker.id.to_string().contains(&needle),
                    "{} does not match {query:?}",
                    ticker.name
                );
            }
        }
    }
}

#[test]
fn descending_reverses_ascending_for_every_field() {
    for field in SortField::ALL {
        let mut list = list(market(30), 30);

        list.set_sort(field);
        assert_eq!(list.view_state().sort_direction, SortDirection::Asc);
        let ascending = ids(&list.filtered());

        list.set_sort(field);
        assert_eq!(list.view_state().sort_direction, SortDirection::Desc);
        let mut descending = ids(&list.filtered());
        descending.reverse();

        assert_eq!(ascending, descending, "field {field}");

        let mut all: Vec<String> = list.records().iter().map(|t| t.id.to_string()).collect();
        let mut permutation = ascending.clone();
        all.sort();
        permutation.sort();
        assert_eq!(permutation, all, "field {field} lost or duplicated records");
    }
}

#[test]
fn toggle_sequence_and_field_switch() {
    let mut list = list(market(5), 5);

    list.set_sort(SortField::Name);
    list.set_sort(SortField::Name);
    list.set_sort(SortField::Name);
    assert_eq!(list.view_state().sort_direction, SortDirection::Asc);

    list.set_sort(SortField::Name);
    list.set_sort(SortField::Rank);
    assert_eq!(list.view_state().sort_field, Some(SortField::Rank));
    assert_eq!(list.view_state().sort_direction, SortDirection::Asc);
}

#[test]
fn search_always_returns_to_first_page() {
    let mut list = list(market(50), 5);
    list.set_page(3);

    list.set_search("x");

    assert_eq!(list.view_state().current_page, 1);
}

#[test]
fn out_of_range_pages_are_empty() {
    let mut list = list(market(12), 5);

    for page in [0, 4, 1000, usize::MAX] {
        list.set_page(page);
        assert!(list.compute_view().is_empty(), "page {page}");
    }
}

#[test]
fn failed_fetch_leaves_nothing_to_page() {
    let err = CoinloreSource::default().decode(503, b"Service Unavailable");
    assert!(err.is_err());

    let list = list(Vec::new(), 10);
    assert_eq!(list.page_count(), 0);
    assert!(list.compute_view().is_empty());
}
