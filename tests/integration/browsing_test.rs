//! Browsing scenarios: filtering, route seeding, the property modal and the
//! auto-advancing hero, driven through the assembled site

mod common;

use std::sync::Arc;
use std::time::Duration;

use ammaar_app::pages::{Page, EMPTY_STATE_TEXT};
use ammaar_app::Route;
use ammaar_catalog::{filter_projects, CatalogProvider, Category, Project, ProjectType};
use ammaar_gallery::{AutoAdvance, Carousel, SharedCarousel};
use ammaar_leads::mock::MockLeadSink;

use common::{five_listing_catalog, test_site};

fn ids(page: &[Arc<Project>]) -> Vec<String> {
    page.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn test_farmland_filter_returns_both_in_catalog_order() {
    let catalog = five_listing_catalog();
    let farmland = filter_projects(
        catalog.all_projects(),
        &Category::Type(ProjectType::Farmland),
    );
    assert_eq!(ids(&farmland), ["farm-a", "farm-b"]);

    let all = filter_projects(catalog.all_projects(), &Category::All);
    assert_eq!(all.len(), 5);
    assert!(all
        .iter()
        .zip(catalog.all_projects())
        .all(|(a, b)| Arc::ptr_eq(a, b)));
}

#[test]
fn test_unknown_category_is_empty_state_not_error() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let mut view = site.navigate("/projects").unwrap().unwrap();

    let Page::Projects(page) = &mut view.page else {
        panic!("Expected projects page");
    };
    assert!(page.select(Category::parse("Commercial")).is_empty());
    assert_eq!(page.empty_message(), Some(EMPTY_STATE_TEXT));
}

#[test]
fn test_route_query_seeds_filter() {
    assert_eq!(
        Route::parse("/projects?filter=Farmland"),
        Some(Route::Projects {
            filter: Category::Type(ProjectType::Farmland)
        })
    );
    assert_eq!(
        Route::parse("/projects?filter=Bogus"),
        Some(Route::Projects {
            filter: Category::Unknown("Bogus".to_string())
        })
    );

    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let view = site.navigate("/projects?filter=Farmland").unwrap().unwrap();
    let Page::Projects(page) = &view.page else {
        panic!("Expected projects page");
    };
    assert_eq!(ids(page.visible()), ["farm-a", "farm-b"]);

    let view = site.navigate("/projects?filter=Bogus").unwrap().unwrap();
    let Page::Projects(page) = &view.page else {
        panic!("Expected projects page");
    };
    assert!(page.visible().is_empty());
    assert_eq!(page.empty_message(), Some(EMPTY_STATE_TEXT));
}

#[test]
fn test_lightbox_resets_to_first_image_between_projects() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let mut view = site.navigate("/gallery").unwrap().unwrap();
    let Page::Gallery(page) = &mut view.page else {
        panic!("Expected gallery page");
    };

    page.open("villa-c").unwrap();
    assert_eq!(
        page.lightbox().current_image(),
        Some("https://images.example.com/villa-c/1.jpg")
    );
    page.lightbox_mut().next();
    page.lightbox_mut().next();
    assert_eq!(page.counter().as_deref(), Some("3 of 4"));

    assert!(page.close());
    assert!(!page.close());

    page.open("farm-b").unwrap();
    assert_eq!(
        page.lightbox().current_image(),
        Some("https://images.example.com/farm-b/1.jpg")
    );
    assert_eq!(page.counter().as_deref(), Some("1 of 3"));
}

#[test]
fn test_single_image_listing_disables_navigation() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let mut view = site.navigate("/projects").unwrap().unwrap();
    view.page.open("villa-b").unwrap();
    assert!(view.scroll_locked());

    let Page::Projects(page) = &mut view.page else {
        panic!("Expected projects page");
    };
    assert!(!page.lightbox().has_navigation());
    assert_eq!(page.lightbox_mut().next(), None);
    assert_eq!(page.lightbox_mut().prev(), None);
}

#[tokio::test(start_paused = true)]
async fn test_auto_advance_steps_once_per_period_and_stops_on_drop() {
    let period = Duration::from_millis(6000);
    let carousel: SharedCarousel<&str> = Arc::new(std::sync::Mutex::new(
        Carousel::new(vec!["a", "b", "c", "d"]).unwrap(),
    ));

    let auto = AutoAdvance::spawn(carousel.clone(), period);
    tokio::time::sleep(period + Duration::from_millis(1)).await;
    assert_eq!(*carousel.lock().unwrap().current(), "b");

    tokio::time::sleep(period).await;
    assert_eq!(*carousel.lock().unwrap().current(), "c");

    drop(auto);
    tokio::time::sleep(period * 10).await;
    assert_eq!(*carousel.lock().unwrap().current(), "c");
}

#[tokio::test(start_paused = true)]
async fn test_leaving_home_cancels_hero_timer() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let view = site.navigate("/").unwrap().unwrap();
    let Page::Home(home) = &view.page else {
        panic!("Expected home page");
    };
    assert!(home.autoplay_running());
    assert_eq!(home.slide_count(), 4);
    drop(view);

    // Navigating elsewhere builds a fresh page; nothing from home lingers
    let view = site.navigate("/about").unwrap().unwrap();
    assert!(view.page.lightbox().is_none());
}
