use facetfolio::{handle_event, Award, CollectionView, Event, FieldValue, ViewConfig};

#[derive(Debug, Clone, PartialEq)]
struct Item {
    name: String,
    kind: String,
    year: i32,
}

fn item(name: &str, kind: &str, year: i32) -> Item {
    Item {
        name: name.to_string(),
        kind: kind.to_string(),
        year,
    }
}

fn item_view(items: Vec<Item>) -> CollectionView<Item> {
    let config = ViewConfig::searching("name", |i: &Item| FieldValue::text(&i.name))
        .filter("type", |i: &Item| FieldValue::text(&i.kind))
        .filter("year", |i: &Item| FieldValue::text(i.year.to_string()));
    CollectionView::new(items, config)
}

fn names(view: &CollectionView<Item>) -> Vec<String> {
    view.filtered_records().into_iter().map(|i| i.name.clone()).collect()
}

fn five_awards() -> Vec<Award> {
    [
        ("A", "Fellowship", 2019),
        ("B", "Innovation", 2019),
        ("C", "Fellowship", 2020),
        ("D", "Recognition", 2021),
        ("E", "Innovation", 2021),
    ]
    .into_iter()
    .map(|(title, category, year)| Award::new(title, category, year))
    .collect()
}

#[test]
fn year_filter_over_awards() {
    let mut view = CollectionView::browse(five_awards());

    assert!(handle_event(&mut view, Event::toggle("year", "2021", true)));

    let titles: Vec<_> = view.filtered_records().iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["D", "E"]);

    let bar = view.search_bar();
    assert_eq!(bar.summary.to_string(), "Showing 2 of 5 awards");
    assert_eq!(bar.total_active_filters, 1);

    let year = bar.groups.iter().find(|g| g.key == "year").unwrap();
    let values: Vec<_> = year.options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["2021", "2020", "2019"]);
    assert_eq!(year.options[0].count, 2);
    assert!(year.options[0].checked);
    assert_eq!(year.selected_count, 1);
}

#[test]
fn filters_across_keys_are_conjunctive() {
    let mut view = item_view(vec![
        item("alpha", "A", 2020),
        item("beta", "B", 2020),
        item("gamma", "A", 2021),
    ]);

    view.set_filter_selection("type", "A", true);
    view.set_filter_selection("year", "2020", true);
    assert_eq!(names(&view), vec!["alpha"]);

    view.set_filter_selection("type", "B", true);
    assert_eq!(names(&view), vec!["alpha", "beta"]);
}

#[test]
fn search_and_filters_combine() {
    let mut view = item_view(vec![
        item("Deep Learning", "A", 2020),
        item("deep sea survey", "B", 2020),
        item("Shallow", "A", 2020),
    ]);

    view.set_search_text("  DEEP ");
    assert_eq!(names(&view), vec!["Deep Learning", "deep sea survey"]);

    view.set_filter_selection("type", "B", true);
    assert_eq!(names(&view), vec!["deep sea survey"]);
}

#[test]
fn result_is_an_ordered_subsequence() {
    let items: Vec<_> = (0..20)
        .map(|n| item(&format!("item {n}"), if n % 3 == 0 { "A" } else { "B" }, 2000 + n % 4))
        .collect();
    let mut view = item_view(items.clone());

    view.set_search_text("1");
    view.set_filter_selection("type", "B", true);
    view.set_filter_selection("year", "2001", true);
    view.set_filter_selection("year", "2002", true);

    let mut source = items.iter();
    for record in view.filtered_records() {
        assert!(source.any(|i| i == record), "{record:?} out of order");
    }
}

#[test]
fn clear_all_restores_everything() {
    let mut view = item_view(vec![item("alpha", "A", 2020), item("beta", "B", 2021)]);
    view.set_search_text("zzz");
    view.set_filter_selection("year", "2021", true);
    assert!(view.filtered_records().is_empty());

    assert!(handle_event(&mut view, Event::ClearAll));
    assert_eq!(view.search_text(), "");
    assert!(view.active_filters().is_empty());
    assert_eq!(names(&view), vec!["alpha", "beta"]);
}

#[test]
fn unknown_filter_key_has_no_effect() {
    let mut view = item_view(vec![item("alpha", "A", 2020), item("beta", "B", 2021)]);

    assert!(!handle_event(&mut view, Event::toggle("color", "red", true)));
    assert_eq!(names(&view), vec!["alpha", "beta"]);
    assert!(view.has_active_filters());
}

#[test]
fn deselecting_last_value_keeps_key_and_passes() {
    let mut view = item_view(vec![item("alpha", "A", 2020), item("beta", "B", 2021)]);
    view.set_filter_selection("type", "A", true);
    view.set_filter_selection("type", "A", false);

    assert!(view.active_filters().contains_key("type"));
    assert_eq!(names(&view), vec!["alpha", "beta"]);
}

#[test]
fn reloading_records_keeps_criteria() {
    let mut view = CollectionView::browse(five_awards());
    view.set_filter_selection("category", "Innovation", true);
    assert_eq!(view.filtered_len(), 2);

    let mut more = five_awards();
    more.push(Award::new("F", "Innovation", 2022));
    assert!(handle_event(&mut view, Event::RecordsLoaded(more)));

    assert_eq!(view.records().len(), 6);
    assert_eq!(view.filtered_len(), 3);
}

#[test]
fn empty_result_renders_empty_state() {
    let mut view = CollectionView::browse(five_awards());
    view.set_search_text("no such award");

    let bar = view.search_bar();
    let empty = bar.empty_state.as_ref().unwrap();
    assert_eq!(empty.message, "No awards found");

    let text = facetfolio::ui::render(&bar);
    assert!(text.contains("no such award"));
    assert!(text.contains("No awards found"));
}
