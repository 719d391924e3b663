//! Shared fixtures for the integration tests
//!
//! - A five-listing catalog with two farmland projects
//! - Site assembly around a programmable mock lead sink
//! - A throwaway local form endpoint that records posted bodies

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Form, Router};

use ammaar_app::Site;
use ammaar_catalog::{CatalogProvider, ListingStatus, Project, ProjectType, StaticCatalog};
use ammaar_common::SiteConfig;
use ammaar_leads::mock::MockLeadSink;
use ammaar_leads::LeadSubmitter;

pub const WHATSAPP: &str = "919876543210";

fn listing(id: &str, project_type: ProjectType, images: usize) -> Project {
    Project::new(
        id,
        format!("Listing {}", id),
        project_type,
        ListingStatus::SellingFast,
        (1..=images)
            .map(|i| format!("https://images.example.com/{}/{}.jpg", id, i))
            .collect(),
    )
    .expect("fixture listing is valid")
    .with_location("Shamshabad, Hyderabad")
    .with_price("₹45 Lakhs")
}

/// Five listings in catalog order; `farm-a` and `farm-b` are farmland
pub fn five_listing_catalog() -> Arc<dyn CatalogProvider> {
    let catalog = StaticCatalog::from_projects(vec![
        listing("villa-a", ProjectType::Residential, 3),
        listing("farm-a", ProjectType::Farmland, 2),
        listing("villa-b", ProjectType::Residential, 1),
        listing("villa-c", ProjectType::Residential, 4),
        listing("farm-b", ProjectType::Farmland, 3),
    ])
    .expect("fixture catalog is valid");
    Arc::new(catalog)
}

/// Site over the fixture catalog, delivering leads to `sink`
pub fn test_site(sink: &MockLeadSink) -> Site {
    let submitter = LeadSubmitter::new(Arc::new(sink.clone()), WHATSAPP);
    Site::new(SiteConfig::default(), five_listing_catalog(), submitter)
}

pub type CapturedForms = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// Spawn a local form endpoint answering every POST with `status`.
/// Returns its `formResponse` URL and the captured bodies.
pub async fn spawn_form_endpoint(status: StatusCode) -> (String, CapturedForms) {
    let captured: CapturedForms = Arc::default();
    let app = Router::new()
        .route(
            "/formResponse",
            post(
                move |State(captured): State<CapturedForms>,
                      Form(body): Form<HashMap<String, String>>| async move {
                    captured.lock().expect("capture lock").push(body);
                    status
                },
            ),
        )
        .with_state(captured.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local form endpoint");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve form endpoint");
    });

    (format!("http://{}/formResponse", addr), captured)
}

/// Decode the `text` parameter of a wa.me link
pub fn whatsapp_text(url: &str) -> String {
    let encoded = url.split("?text=").nth(1).expect("link carries text");
    urlencoding::decode(encoded)
        .expect("valid percent-encoding")
        .into_owned()
}
