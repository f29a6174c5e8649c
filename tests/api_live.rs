#![cfg(feature = "online")]

use gdp_chart::Client;

#[test]
fn fetch_reference_dataset() {
    let data = Client::default().fetch_dataset().expect("fetch dataset");
    assert!(data.len() > 200);
    assert_eq!(data.points()[0].date, "1947-01-01");
    assert!(data.points().iter().all(|d| d.timestamp().is_some()));
}
