use gdp_chart::config::ChartConfig;
use gdp_chart::dom::Document;
use gdp_chart::layout::OuterDimensions;
use gdp_chart::models::{Dataset, Datum};
use gdp_chart::render::{self, Bar};
use gdp_chart::tooltip::{self, BarState, TooltipUpdate};
use gdp_chart::ChartError;

fn tooltip_text(doc: &Document, id: &str) -> Option<String> {
    doc.get_element_by_id(id)
        .and_then(|e| e.text())
        .map(str::to_string)
}

#[test]
fn tooltip_position_and_text_for_a_bar() {
    let dims = OuterDimensions::for_viewport(&ChartConfig::default(), 1000.0)
        .bound(2)
        .unwrap();
    assert_eq!(dims.bar_width(), 397.5);
    let bar = Bar {
        index: 0,
        datum: Datum::new("2008-10-01", 14891.6),
        x: 320.0,
        y: 120.0,
        width: dims.bar_width(),
        height: 305.0,
    };
    let update = TooltipUpdate::for_bar(&bar, &dims, 15.0);
    assert_eq!(update.date_text.as_deref(), Some("10-1-2008"));
    assert_eq!(update.gdp_text, "14892 billion dollars");
    // 320 + 397.5 / 2 + 90 - 397.5
    assert_eq!(update.translate_x, 211.25);
    // 15 + 120 + 15
    assert_eq!(update.translate_y, 150.0);
    assert_eq!(update.transform(), "translate(211.25px, 150px)");
}

#[test]
fn enter_then_leave_on_a_rendered_chart() {
    let data = Dataset::from_pairs([("2008-07-01", 14843.0), ("2008-10-01", 14891.6)]);
    let mut doc = Document::host();
    let mut chart = render::render(&mut doc, &data, 1000.0).unwrap();
    let rects_before: Vec<_> = doc.select_all("rect.bar").into_iter().cloned().collect();

    assert_eq!(tooltip::opacity(&doc), Some(0.0));
    chart.pointer_enter(&mut doc, 1).unwrap();
    assert_eq!(tooltip::opacity(&doc), Some(1.0));
    assert_eq!(chart.hovered(), Some(1));
    assert_eq!(chart.bar_state(1), BarState::Hovered);
    assert_eq!(chart.bar_state(0), BarState::Idle);
    assert_eq!(tooltip_text(&doc, "date").as_deref(), Some("10-1-2008"));
    assert_eq!(
        doc.get_element_by_id("date").unwrap().attribute("data-date"),
        Some("2008-10-01")
    );
    assert_eq!(
        tooltip_text(&doc, "gdp").as_deref(),
        Some("14892 billion dollars")
    );
    // bar 1: x = 397.5 + 2, y = 0
    let tip = doc.get_element_by_id("tooltip").unwrap();
    assert_eq!(tip.style("transform"), Some("translate(290.75px, 30px)"));

    chart.pointer_leave(&mut doc, 1).unwrap();
    assert_eq!(tooltip::opacity(&doc), Some(0.0));
    assert_eq!(chart.hovered(), None);
    // text survives the leave
    assert_eq!(tooltip_text(&doc, "date").as_deref(), Some("10-1-2008"));
    assert_eq!(
        tooltip_text(&doc, "gdp").as_deref(),
        Some("14892 billion dollars")
    );

    let rects_after: Vec<_> = doc.select_all("rect.bar").into_iter().cloned().collect();
    assert_eq!(rects_before, rects_after);
}

#[test]
fn invalid_date_keeps_the_previous_date_line() {
    let data = Dataset::from_pairs([("1990-01-01", 5872.7), ("not-a-date", 6000.4)]);
    let mut doc = Document::host();
    let mut chart = render::render(&mut doc, &data, 1000.0).unwrap();

    chart.pointer_enter(&mut doc, 0).unwrap();
    chart.pointer_leave(&mut doc, 0).unwrap();
    chart.pointer_enter(&mut doc, 1).unwrap();

    assert_eq!(tooltip::format_date("not-a-date"), None);
    assert_eq!(tooltip_text(&doc, "date").as_deref(), Some("1-1-1990"));
    assert_eq!(
        doc.get_element_by_id("date").unwrap().attribute("data-date"),
        Some("1990-01-01")
    );
    assert_eq!(
        tooltip_text(&doc, "gdp").as_deref(),
        Some("6000 billion dollars")
    );
}

#[test]
fn opacity_tracks_unmatched_enters() {
    let data = Dataset::from_pairs([
        ("2000-01-01", 10.0),
        ("2000-04-01", 11.0),
        ("2000-07-01", 12.0),
    ]);
    let mut doc = Document::host();
    let mut chart = render::render(&mut doc, &data, 1000.0).unwrap();

    // leave without enter is ignored
    chart.pointer_leave(&mut doc, 2).unwrap();
    assert_eq!(tooltip::opacity(&doc), Some(0.0));

    for i in 0..3 {
        chart.pointer_enter(&mut doc, i).unwrap();
        assert_eq!(tooltip::opacity(&doc), Some(1.0));
        chart.pointer_leave(&mut doc, i).unwrap();
        assert_eq!(tooltip::opacity(&doc), Some(0.0));
    }
}

#[test]
fn unknown_bar_is_an_error() {
    let data = Dataset::from_pairs([("2000-01-01", 10.0)]);
    let mut doc = Document::host();
    let mut chart = render::render(&mut doc, &data, 1000.0).unwrap();
    let err = chart.pointer_enter(&mut doc, 5).unwrap_err();
    assert!(matches!(err, ChartError::NoSuchBar { index: 5, len: 1 }));
    assert_eq!(tooltip::opacity(&doc), Some(0.0));
}
