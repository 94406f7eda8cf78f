use super::*;

fn collection() -> Vec<Entry> {
    vec![
        Entry::new("Game A", 0).with_release("00040000000AAA00"),
        Entry::new("Game B", 5),
        Entry::new("Pilotwings Resort", 2)
            .with_release("0004000000031C00")
            .with_release("0004000000033D00"),
        Entry::new("Untested Thing", 99),
        Entry::new("Odd Code", 42),
    ]
}

fn titles(view: &FilteredView<'_>) -> Vec<String> {
    view.iter().map(|e| e.title.clone()).collect()
}

#[test]
fn empty_search_and_all_toggles_keeps_everything_in_order() {
    let entries = collection();
    let view = apply_filters(&FilterState::new(), &entries);
    assert_eq!(
        titles(&view),
        vec![
            "Game A",
            "Game B",
            "Pilotwings Resort",
            "Untested Thing",
            "Odd Code"
        ]
    );
}

#[test]
fn search_is_case_insensitive_on_titles() {
    let entries = collection();
    let view = apply_filters(&FilterState::new().with_search("game a"), &entries);
    assert_eq!(titles(&view), vec!["Game A"]);

    let view = apply_filters(&FilterState::new().with_search("GAME"), &entries);
    assert_eq!(titles(&view), vec!["Game A", "Game B"]);
}

#[test]
fn search_matches_any_release_id() {
    let entries = collection();
    // Second release of Pilotwings, lower-case hex
    let view = apply_filters(&FilterState::new().with_search("33d00"), &entries);
    assert_eq!(titles(&view), vec!["Pilotwings Resort"]);
}

#[test]
fn search_without_match_is_empty() {
    let entries = collection();
    let view = apply_filters(&FilterState::new().with_search("zelda"), &entries);
    assert!(view.is_empty());
}

#[test]
fn category_toggles_filter_by_classification() {
    let entries = collection();
    let state = FilterState::new().with_toggles(CategoryToggles::only(&[Category::Untested]));
    let view = apply_filters(&state, &entries);
    // 99 and the unknown code 42 are both untested
    assert_eq!(titles(&view), vec!["Untested Thing", "Odd Code"]);
}

#[test]
fn search_and_category_combine() {
    let entries = collection();
    let state = FilterState::new()
        .with_search("game")
        .with_toggles(CategoryToggles::only(&[Category::Unplayable]));
    assert_eq!(titles(&apply_filters(&state, &entries)), vec!["Game B"]);
}

#[test]
fn all_toggles_off_is_always_empty() {
    let entries = collection();
    for term in ["", "game", "0004", "nothing"] {
        let state = FilterState::new()
            .with_search(term)
            .with_toggles(CategoryToggles::none());
        assert!(
            apply_filters(&state, &entries).is_empty(),
            "term {term:?} should match nothing"
        );
    }
}

#[test]
fn filtering_is_idempotent() {
    let entries = collection();
    let state = FilterState::new().with_search("o");
    let first = apply_filters(&state, &entries);
    let second = apply_filters(&state, &entries);
    assert_eq!(first, second);
}

#[test]
fn empty_collection_yields_empty_view() {
    let view = apply_filters(&FilterState::new().with_search("a"), &[]);
    assert_eq!(view.len(), 0);
}

#[test]
fn search_term_keeps_input_and_matches_lowercase() {
    let mut state = FilterState::new();
    state.set_search_term("Mario KART");
    assert_eq!(state.search_term(), "Mario KART");
    assert_eq!(state.needle(), "mario kart");

    let entries = vec![Entry::new("Mario Kart 7", 0), Entry::new("Zelda", 0)];
    let view = apply_filters(&state, &entries);
    assert_eq!(view.len(), 1);
    assert_eq!(view.entries()[0].title, "Mario Kart 7");
}

#[test]
fn toggles_report_enabled_categories() {
    let mut toggles = CategoryToggles::default();
    assert_eq!(toggles.enabled().count(), 4);
    toggles.set(Category::Playable, false);
    assert!(!toggles.is_enabled(Category::Playable));
    assert_eq!(
        toggles.enabled().collect::<Vec<_>>(),
        vec![Category::Perfect, Category::Unplayable, Category::Untested]
    );
    assert!(CategoryToggles::none().all_disabled());
    assert!(!toggles.all_disabled());
}

#[test]
fn counts_by_category() {
    let entries = collection();
    let counts = count_categories(&entries);
    assert_eq!(counts.get(Category::Perfect), 1);
    assert_eq!(counts.get(Category::Playable), 1);
    assert_eq!(counts.get(Category::Unplayable), 1);
    assert_eq!(counts.get(Category::Untested), 2);
    assert_eq!(counts.total(), entries.len());
}
