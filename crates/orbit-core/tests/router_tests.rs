use orbit_core::Route;

#[test]
fn known_paths_parse() {
    assert_eq!(Route::parse("/start"), Some(Route::Start));
    assert_eq!(Route::parse("/main"), Some(Route::Main));
    assert_eq!(Route::parse("/about/"), Some(Route::About));
    assert_eq!(
        Route::parse("/projects/tag-tracks?from=orbit#top"),
        Some(Route::Project("tag-tracks".into()))
    );
}

#[test]
fn unknown_paths_redirect_to_start() {
    for path in ["/", "", "/nowhere", "/projects/", "/projects/a/b", "/main/extra"] {
        assert_eq!(Route::resolve(path), (Route::Start, true), "{path}");
    }
    assert_eq!(Route::resolve("/main"), (Route::Main, false));
}

#[test]
fn paths_round_trip() {
    for route in [
        Route::Start,
        Route::Main,
        Route::About,
        Route::Project("snyping-game".into()),
    ] {
        assert_eq!(Route::parse(&route.path()), Some(route.clone()));
    }
    assert!(Route::Main.is_main());
    assert!(!Route::About.is_main());
}

#[test]
fn unknown_slug_still_routes_to_project_page() {
    // the page itself renders the not-found state
    assert_eq!(Route::parse("/projects/ghost"), Some(Route::Project("ghost".into())));
}
