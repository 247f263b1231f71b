use std::sync::Arc;

use colsort_core::{
    MemorySortStore, PersistedSort, SortColumns, SortDirection, SortParams, SortResolver,
    SortSpec, SortStateStore, SortableColumn, resolve_and_store,
};

fn users_resolver() -> SortResolver {
    let columns = SortColumns::new([
        SortableColumn::new("login", "Login"),
        SortableColumn::new("name", "Name"),
        SortableColumn::new("created_on", "Created").descending(),
    ])
    .expect("valid columns");
    SortResolver::new("users", columns)
}

fn click(store: &MemorySortStore, resolver: &SortResolver, session: &str, query: &str) -> SortSpec {
    let requested = SortParams::default().extract(query);
    resolve_and_store(store, resolver, session, requested)
}

#[test]
fn first_visit_stores_default() {
    let store = MemorySortStore::new();
    let resolver = users_resolver();

    let current = click(&store, &resolver, "s1", "");
    assert_eq!(current, SortSpec::new("login", SortDirection::Ascending));
    assert_eq!(store.load("s1", "users"), Some(current));
}

#[test]
fn clicks_toggle_and_switch_across_requests() {
    let store = MemorySortStore::new();
    let resolver = users_resolver();

    let steps = [
        ("sort=name", SortSpec::new("name", SortDirection::Ascending)),
        ("sort=name", SortSpec::new("name", SortDirection::Descending)),
        ("page=2", SortSpec::new("name", SortDirection::Descending)),
        ("sort=created_on", SortSpec::new("created_on", SortDirection::Descending)),
        ("sort=created_on", SortSpec::new("created_on", SortDirection::Ascending)),
        ("sort=drop_table_users", SortSpec::new("created_on", SortDirection::Ascending)),
        ("sort=name", SortSpec::new("name", SortDirection::Ascending)),
    ];

    for (query, expected) in steps {
        assert_eq!(click(&store, &resolver, "s1", query), expected, "after {query}");
    }
}

#[test]
fn header_links_replay_what_they_advertise() {
    let store = MemorySortStore::new();
    let resolver = users_resolver();
    let params = SortParams::default();

    let current = click(&store, &resolver, "s1", "sort=name");
    for cell in resolver.header_cells(&current) {
        let probe = MemorySortStore::new();
        probe.save("probe", resolver.view(), &current);

        let href = cell.href("/users", &params);
        let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let next = click(&probe, &resolver, "probe", query);
        assert_eq!(next, cell.link, "link for {}", cell.key);
    }
}

#[test]
fn malformed_stored_state_counts_as_first_visit() {
    let store = MemorySortStore::new();
    let resolver = users_resolver();
    store.put_persisted(
        "s1",
        "users",
        PersistedSort {
            column: "name".into(),
            direction: "sideways".into(),
        },
    );

    assert_eq!(store.load("s1", "users"), None);
    assert_eq!(
        click(&store, &resolver, "s1", "sort=name"),
        SortSpec::new("name", SortDirection::Ascending)
    );
}

#[test]
fn views_and_sessions_are_isolated() {
    let store = MemorySortStore::new();
    let users = users_resolver();
    let issues = SortResolver::new(
        "issues",
        SortColumns::new([SortableColumn::new("id", "#").descending()]).unwrap(),
    );

    click(&store, &users, "s1", "sort=name");
    click(&store, &issues, "s1", "");
    click(&store, &users, "s2", "sort=created_on");
    assert_eq!(store.len(), 3);

    assert_eq!(store.load("s1", "users"), Some(SortSpec::new("name", SortDirection::Ascending)));
    assert_eq!(store.load("s1", "issues"), Some(SortSpec::new("id", SortDirection::Descending)));

    store.clear_session("s1");
    assert_eq!(store.len(), 1);
    assert_eq!(store.load("s1", "users"), None);
    assert!(store.load("s2", "users").is_some());
}

#[test]
fn concurrent_sessions_do_not_interfere() {
    let store = Arc::new(MemorySortStore::new());
    let resolver = users_resolver();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let store = Arc::clone(&store);
            let resolver = resolver.clone();
            scope.spawn(move || {
                let session = format!("worker-{worker}");
                // First click lands on the default, later ones toggle.
                for _ in 0..10 {
                    click(&store, &resolver, &session, "sort=name");
                }
            });
        }
    });

    for worker in 0..8 {
        assert_eq!(
            store.load(&format!("worker-{worker}"), "users"),
            Some(SortSpec::new("name", SortDirection::Descending))
        );
    }
}

#[test]
fn bounded_store_evicts_least_recently_written() {
    let store = MemorySortStore::with_capacity(3);
    let resolver = users_resolver();

    for n in 0..10 {
        click(&store, &resolver, &format!("anon-{n}"), "sort=name");
    }
    assert_eq!(store.len(), 3);
    assert_eq!(store.load("anon-0", "users"), None);
    for n in 7..10 {
        assert!(store.load(&format!("anon-{n}"), "users").is_some(), "anon-{n} kept");
    }

    // Writing to an existing slot refreshes it instead of growing the map.
    click(&store, &resolver, "anon-7", "sort=name");
    click(&store, &resolver, "anon-10", "");
    assert_eq!(store.len(), 3);
    assert_eq!(store.load("anon-8", "users"), None);
    assert_eq!(
        store.load("anon-7", "users"),
        Some(SortSpec::new("name", SortDirection::Descending))
    );
}

#[test]
fn zero_capacity_still_keeps_latest_slot() {
    let store = MemorySortStore::with_capacity(0);
    assert_eq!(store.capacity(), 1);
    let resolver = users_resolver();
    click(&store, &resolver, "a", "");
    click(&store, &resolver, "b", "sort=name");
    assert_eq!(store.len(), 1);
    assert!(store.load("b", "users").is_some());
}
