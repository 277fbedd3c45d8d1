use std::cell::{Cell, RefCell};
use std::rc::Rc;

use signpost::history::MemoryHistory;
use signpost::prelude::*;

fn test_router(initial: &str) -> (Rc<MemoryHistory>, Rc<Router>) {
    let history = Rc::new(MemoryHistory::with_initial_path(initial));
    let router = Router::new(history.clone());
    (history, router)
}

fn user_routes() -> RouteSet<String> {
    RouteSet::new("/404")
        .route(Route::new("/").exact().view(|_| String::from("home")))
        .route(Route::new("/about").exact().view(|_| String::from("about")))
        .route(Route::new("/user/:id").view(|p| format!("user {}", p.unwrap().value)))
        .route(Route::new("/404").exact().view(|_| String::from("not found")))
}

#[test]
fn initial_location_is_synchronized() {
    let (_, router) = test_router("/about");

    let location = router.location().unwrap();
    assert_eq!(location.path, "/about");
    assert_eq!(location.search, "");
}

#[test]
fn prefix_route_extracts_parameter() {
    let (_, router) = test_router("/user/42");

    let routes = RouteSet::new("/404").route(Route::new("/user/:id").view(|p| {
        let p = p.unwrap();
        assert_eq!(p.name, "id");
        p.value
    }));

    assert_eq!(routes.evaluate(&router), Some(String::from("42")));
}

#[test]
fn exact_route_ignores_fragment() {
    let (_, router) = test_router("/");
    router.navigator().push("/about#team");

    let routes = RouteSet::new("/404").route(Route::new("/about").exact().view(|p| {
        assert!(p.is_none());
        String::from("about")
    }));

    assert_eq!(router.location().unwrap().path, "/about#team");
    assert_eq!(routes.evaluate(&router), Some(String::from("about")));
}

#[test]
fn first_match_wins() {
    let (_, router) = test_router("/user/42");

    // both declarations structurally match; declaration order decides
    let routes = RouteSet::new("/404")
        .route(Route::new("/user/:id").view(|_| String::from("first")))
        .route(Route::new("/user/").view(|_| String::from("second")));

    assert_eq!(routes.evaluate(&router), Some(String::from("first")));
}

#[test]
fn push_to_current_path_is_a_no_op() {
    let (history, router) = test_router("/a");

    let calls = Rc::new(Cell::new(0));
    let inner = calls.clone();
    let _sub = router.subscribe(move |_| inner.set(inner.get() + 1));

    router.navigator().push("/a");

    assert_eq!(calls.get(), 0);
    assert!(!history.can_go_back());
    assert_eq!(router.location().unwrap().path, "/a");
}

#[test]
fn unmatched_path_replaces_with_not_found_target() {
    let (history, router) = test_router("/zzz");
    let routes = user_routes();

    // this cycle renders nothing and replaces, without a new history entry
    assert_eq!(routes.evaluate(&router), None);
    assert_eq!(history.current_path(), "/404");
    assert!(!history.can_go_back());
    assert_eq!(router.location().unwrap().path, "/404");

    // the follow-up cycle resolves against the not-found target
    assert_eq!(routes.evaluate(&router), Some(String::from("not found")));
}

#[test]
fn misconfigured_not_found_target_terminates() {
    let (_, router) = test_router("/zzz");

    // "/404" itself matches nothing here; a subscriber re-evaluating on every
    // change must not recurse forever
    let routes = Rc::new(RouteSet::<String>::new("/404").route(
        Route::new("/").exact().view(|_| String::from("home")),
    ));

    let inner_routes = routes.clone();
    let inner_router = router.clone();
    let _sub = router.subscribe(move |_| {
        let _ = inner_routes.evaluate(&inner_router);
    });

    assert_eq!(routes.evaluate(&router), None);
    assert_eq!(router.location().unwrap().path, "/404");
}

#[test]
fn external_push_leaves_internal_history_untouched() {
    let (history, router) = test_router("/a");

    // MemoryHistory cannot leave the application; either way no internal
    // entry may be created
    router.navigator().push("https://example.com");

    assert_eq!(history.current_path(), "/a");
    assert!(!history.can_go_back());
    assert_eq!(router.location().unwrap().path, "/a");
}

#[test]
fn redirect_takes_precedence_over_view() {
    let (history, router) = test_router("/old-home");

    let rendered = Rc::new(Cell::new(false));
    let inner = rendered.clone();
    let routes = RouteSet::new("/404")
        .route(
            Route::new("/old-home")
                .exact()
                .redirect_to("/")
                .view(move |_| {
                    inner.set(true);
                    String::from("never")
                }),
        )
        .route(Route::new("/").exact().view(|_| String::from("home")));

    assert_eq!(routes.evaluate(&router), None);
    assert!(!rendered.get());
    assert_eq!(history.current_path(), "/");
    assert!(!history.can_go_back());

    assert_eq!(routes.evaluate(&router), Some(String::from("home")));
}

#[test]
fn matched_route_without_handler_renders_nothing() {
    let (history, router) = test_router("/a");

    // neither view nor redirect: reported as a diagnostic, not a redirect
    let routes = RouteSet::<String>::new("/404").route(Route::new("/a").exact());

    assert_eq!(routes.evaluate(&router), None);
    assert_eq!(history.current_path(), "/a");
    assert_eq!(router.location().unwrap().path, "/a");
}

#[test]
fn standalone_route_renders_in_isolation() {
    let (_, router) = test_router("/user/7");

    let route = Route::new("/user/:id").view(|p| p.unwrap().value);
    assert_eq!(route.render(&router), Some(String::from("7")));

    let other = Route::new("/blog/:slug").view(|p| p.unwrap().value);
    assert_eq!(other.render(&router), None);
}

#[test]
fn watcher_passes_the_raw_path_through() {
    let (_, router) = test_router("/a");

    let seen = Rc::new(RefCell::new(Vec::new()));
    let inner = seen.clone();
    let sub = router.watch(move |path| {
        inner.borrow_mut().push(path.map(String::from));
    });

    router.navigator().push("/b");
    drop(sub);
    router.navigator().push("/c");

    assert_eq!(
        *seen.borrow(),
        vec![Some(String::from("/a")), Some(String::from("/b"))]
    );
}

#[test]
fn back_and_forward_resynchronize_the_location() {
    let (history, router) = test_router("/");

    router.navigator().push("/a");
    router.navigator().push("/b");

    history.go_back();
    assert_eq!(router.location().unwrap().path, "/a");

    history.go_back();
    assert_eq!(router.location().unwrap().path, "/");

    history.go_forward();
    assert_eq!(router.location().unwrap().path, "/a");
}

#[test]
fn search_is_preserved_across_internal_pushes() {
    let (history, router) = test_router("/home?tab=1");

    router.navigator().push("/about");

    let location = router.location().unwrap();
    assert_eq!(location.path, "/about");
    assert_eq!(location.search, "?tab=1");
    assert_eq!(history.current_search(), Some(String::from("?tab=1")));
}
