use super::*;

// =============================================================================
// Pager
// =============================================================================

#[test]
fn total_pages_rounds_up() {
    let pager = Pager::new(5);
    assert_eq!(pager.total_pages(0), 0);
    assert_eq!(pager.total_pages(5), 1);
    assert_eq!(pager.total_pages(6), 2);
    assert!(!pager.has_controls(5));
    assert!(pager.has_controls(6));
}

#[test]
fn slice_never_exceeds_page_size() {
    let items: Vec<usize> = (0..23).collect();
    let mut pager = Pager::new(10);
    assert_eq!(pager.slice(&items), &items[0..10]);
    pager.go_to(3, items.len());
    assert_eq!(pager.slice(&items), &items[20..23]);
}

#[test]
fn pages_cover_the_list_exactly_once() {
    for len in [0usize, 1, 4, 5, 17, 50] {
        for per_page in [5usize, 10, 20] {
            let items: Vec<usize> = (0..len).collect();
            let mut pager = Pager::new(per_page);
            let mut seen = Vec::new();
            for page in 1..=pager.total_pages(len) {
                pager.go_to(page, len);
                let slice = pager.slice(&items);
                assert!(slice.len() <= per_page);
                seen.extend_from_slice(slice);
            }
            assert_eq!(seen, items, "len={len} per_page={per_page}");
        }
    }
}

#[test]
fn stale_page_is_clamped_after_list_shrinks() {
    let pager = Pager { page: 4, per_page: 5 };
    assert_eq!(pager.effective_page(7), 2);
    assert_eq!(pager.range(7), 5..7);
    assert_eq!(pager.range(0), 0..0);
}

#[test]
fn next_and_prev_stay_in_bounds() {
    let mut pager = Pager::new(10);
    pager.prev(25);
    assert_eq!(pager.page, 1);
    assert!(!pager.can_prev(25));
    pager.next(25);
    pager.next(25);
    pager.next(25);
    assert_eq!(pager.page, 3);
    assert!(!pager.can_next(25));
    assert!(pager.can_prev(25));
}

#[test]
fn changing_page_size_resets_to_first_page() {
    let mut pager = Pager { page: 3, per_page: 5 };
    pager.set_per_page(20);
    assert_eq!(pager, Pager { page: 1, per_page: 20 });
    pager.page = 2;
    pager.reset();
    assert_eq!(pager.page, 1);
}

// =============================================================================
// matches_search
// =============================================================================

#[test]
fn search_is_case_insensitive_substring() {
    assert!(matches_search("ALI", ["Sara Ali", "x@y.z"]));
    assert!(matches_search("y.z", ["Sara Ali", "x@y.z"]));
    assert!(!matches_search("omar", ["Sara Ali", "x@y.z"]));
}

#[test]
fn blank_search_matches_everything() {
    assert!(matches_search("   ", std::iter::empty::<&str>()));
}

#[test]
fn search_handles_arabic_text() {
    assert!(matches_search("سباكة", ["خدمات سباكة"]));
}

// =============================================================================
// Choice / distinct_sorted
// =============================================================================

#[test]
fn choice_from_select_value() {
    assert_eq!(Choice::from_select("all"), Choice::All);
    assert_eq!(Choice::from_select(""), Choice::All);
    assert_eq!(Choice::from_select("admin"), Choice::Only("admin".into()));
    assert_eq!(Choice::Only("admin".into()).select_value(), "admin");
    assert_eq!(Choice::All.select_value(), "all");
}

#[test]
fn choice_accepts_exact_values_only() {
    let only = Choice::Only("Cairo".into());
    assert!(only.accepts("Cairo"));
    assert!(!only.accepts("cairo"));
    assert!(Choice::All.accepts("anything"));
}

#[test]
fn choice_ignores_stray_whitespace_in_the_field() {
    let only = Choice::Only("Cairo".into());
    assert!(only.accepts("Cairo "));
    assert!(only.accepts("  Cairo"));
    assert!(!only.accepts("Cairo West"));
}

#[test]
fn distinct_sorted_drops_blanks_and_duplicates() {
    assert_eq!(
        distinct_sorted(["giza", " cairo ", "", "giza", "alex"]),
        vec!["alex".to_owned(), "cairo".to_owned(), "giza".to_owned()]
    );
}

// =============================================================================
// upsert_by / remove_by
// =============================================================================

fn pair_key(pair: &(String, u32)) -> &str {
    &pair.0
}

#[test]
fn upsert_appends_new_and_replaces_existing() {
    let mut items = vec![("a".to_owned(), 1), ("b".to_owned(), 2)];
    upsert_by(&mut items, ("c".to_owned(), 3), pair_key);
    upsert_by(&mut items, ("a".to_owned(), 9), pair_key);
    assert_eq!(items, vec![("a".to_owned(), 9), ("b".to_owned(), 2), ("c".to_owned(), 3)]);
}

#[test]
fn remove_only_touches_matching_id() {
    let mut items = vec![("a".to_owned(), 1), ("b".to_owned(), 2)];
    assert!(remove_by(&mut items, "a", pair_key));
    assert!(!remove_by(&mut items, "zzz", pair_key));
    assert_eq!(items, vec![("b".to_owned(), 2)]);
}
