use super::*;
use crate::filter::{FilterState, apply_filters};

fn render(entries: &[Entry], options: &RenderOptions) -> RenderedList {
    render_list(&apply_filters(&FilterState::new(), entries), options)
}

fn issue_options() -> RenderOptions {
    RenderOptions {
        issue_search_url: Some(Url::parse(DEFAULT_ISSUE_SEARCH_URL).unwrap()),
    }
}

#[test]
fn rows_carry_id_badge_and_category() {
    let entries = vec![
        Entry::new("Game A", 1).with_release("00040000000AAA00"),
        Entry::new("Game B", 5),
    ];
    let list = render(&entries, &RenderOptions::default());

    assert_eq!(list.count, 2);
    assert_eq!(list.rows[0].id, "00040000000AAA00");
    assert_eq!(list.rows[0].badge, "Great (1)");
    assert_eq!(list.rows[0].category, Category::Perfect);
    assert_eq!(list.rows[1].id, "N/A");
    assert_eq!(list.rows[1].badge, "Bad (5)");
    assert_eq!(list.rows[1].issue_url, None);
}

#[test]
fn html_contains_one_item_per_row() {
    let entries = vec![Entry::new("Game A", 0), Entry::new("Game B", 3)];
    let html = render(&entries, &RenderOptions::default()).to_html();

    assert_eq!(html.matches("class=\"game-item\"").count(), 2);
    assert!(html.contains("<h3>Game A</h3>"));
    assert!(html.contains("compatibility-badge compatibility-playable\">OK (3)</div>"));
    assert!(!html.contains("no-results"));
}

#[test]
fn empty_list_renders_placeholder() {
    let list = render(&[], &RenderOptions::default());
    assert_eq!(list.count, 0);
    assert!(list.is_empty());

    let html = list.to_html();
    assert!(html.contains("class=\"no-results\""));
    assert!(html.contains(NO_RESULTS_HEADING));
    assert!(html.contains(NO_RESULTS_HINT));
}

#[test]
fn user_text_is_escaped() {
    let entries = vec![
        Entry::new("<script>alert('x')</script> & Friends", 0)
            .with_release("\"><img src=x onerror=alert(1)>"),
    ];
    let html = render(&entries, &issue_options()).to_html();

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; Friends"));
    assert!(html.contains("ID: &quot;&gt;&lt;img src=x onerror=alert(1)&gt;"));
}

#[test]
fn escape_html_handles_all_special_characters() {
    assert_eq!(escape_html("a&b<c>d\"e'f"), "a&amp;b&lt;c&gt;d&quot;e&#39;f");
    assert_eq!(escape_html("Pokémon"), "Pokémon");
}

#[test]
fn issue_links_are_query_encoded() {
    let base = Url::parse(DEFAULT_ISSUE_SEARCH_URL).unwrap();
    let link = issue_search_link(&base, "Mario & Luigi");
    let (key, value) = link.query_pairs().next().unwrap();
    assert_eq!(key, "q");
    assert_eq!(value, "is:issue \"Mario & Luigi\"");
    assert!(link.as_str().starts_with(DEFAULT_ISSUE_SEARCH_URL));
    assert!(!link.as_str().contains(" & "));
}

#[test]
fn rows_get_links_only_when_configured() {
    let entries = vec![Entry::new("Game A", 0)];
    let with = render(&entries, &issue_options());
    assert!(with.rows[0].issue_url.is_some());
    assert!(with.to_html().contains("class=\"issue-link\""));

    let without = render(&entries, &RenderOptions::default());
    assert!(!without.to_html().contains("issue-link"));
}

#[test]
fn idle_page_shows_loading_banner_and_checked_toggles() {
    let page = render_page(&ListingState::default());

    assert!(page.contains("id=\"loadingMessage\" style=\"display: block\""));
    assert!(page.contains("id=\"errorMessage\" class=\"banner-error\" style=\"display: none\""));
    for &category in Category::all() {
        assert!(page.contains(&format!(
            "id=\"{}\" checked",
            ids::toggle(category)
        )));
    }
    assert!(page.contains("<span id=\"gameCount\">0</span>"));
}

#[test]
fn page_echoes_search_text_as_typed() {
    let controller = crate::controller::ListingController::new(RenderOptions::default())
        .with_filter(FilterState::new().with_search("GAME <A>"));
    let page = controller.render_page();

    assert!(page.contains("value=\"GAME &lt;A&gt;\""));
    assert!(!page.contains("value=\"game"));
}
