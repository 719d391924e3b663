//! Lead submission scenarios: mock and real-transport delivery, the WhatsApp
//! fallback, and the contact form lifecycle on top of them

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;

use ammaar_app::pages::{FormPhase, Page};
use ammaar_leads::google_forms::GoogleFormsClient;
use ammaar_leads::mock::{MockLeadSink, MockOutcome};
use ammaar_leads::{
    DeliveryMode, FallbackReason, Interest, LeadConfig, LeadInquiry, LeadSinkFactory,
    LeadSubmitter, SubmissionOutcome,
};

use common::{spawn_form_endpoint, test_site, whatsapp_text, WHATSAPP};

fn inquiry() -> LeadInquiry {
    LeadInquiry::new("Imran Shaikh", "+91 99887 76655")
        .with_email("imran@example.com")
        .with_interest(Interest::FarmLands)
        .with_message("Need 2 acres near Chevella")
}

fn forms_config(form_url: String, mode: DeliveryMode, accept_unconfirmed: bool) -> LeadConfig {
    LeadConfig {
        provider: "google-forms".to_string(),
        form_url,
        delivery_mode: mode,
        timeout: Duration::from_secs(2),
        accept_unconfirmed,
    }
}

#[test_log::test(tokio::test)]
async fn test_failing_sink_falls_back_with_every_field_verbatim() {
    let sink = MockLeadSink::failing("network unreachable");
    let submitter = LeadSubmitter::new(Arc::new(sink.clone()), WHATSAPP);

    let outcome = submitter.submit(&inquiry()).await.unwrap();
    let SubmissionOutcome::Fallback(link) = outcome else {
        panic!("Expected fallback");
    };

    let text = whatsapp_text(&link.url);
    assert_eq!(
        text,
        "Hi, I'm Imran Shaikh.\n\nInterested in: Farm Lands\n\nMessage: Need 2 acres near Chevella\n\nContact: +91 99887 76655"
    );
    assert_eq!(text, link.message);
    assert!(link.url.starts_with("https://wa.me/919876543210?text="));
    assert!(matches!(link.reason, FallbackReason::DeliveryFailed(_)));
    assert_eq!(sink.submission_count(), 1);
}

#[tokio::test]
async fn test_unusual_phone_and_padded_input_survive_to_fallback() {
    let sink = MockLeadSink::failing("network unreachable");
    let submitter = LeadSubmitter::new(Arc::new(sink.clone()), WHATSAPP);
    let inquiry = LeadInquiry::new(" Imran ", "98765.43210").with_message("  2 acres  ");

    let outcome = submitter.submit(&inquiry).await.unwrap();
    let link = outcome.fallback().unwrap();

    assert_eq!(sink.submission_count(), 1);
    assert_eq!(
        whatsapp_text(&link.url),
        "Hi, I'm  Imran .\n\nInterested in: Residential Property\n\nMessage:   2 acres  \n\nContact: 98765.43210"
    );
}

#[test_log::test(tokio::test)]
async fn test_google_forms_wire_format() {
    let (url, captured) = spawn_form_endpoint(StatusCode::OK).await;
    let sink = LeadSinkFactory::create(forms_config(url, DeliveryMode::Confirmed, true)).unwrap();
    let submitter = LeadSubmitter::new(Arc::from(sink), WHATSAPP);

    let outcome = submitter.submit(&inquiry()).await.unwrap();
    assert!(outcome.is_accepted());

    let bodies = captured.lock().unwrap();
    assert_eq!(bodies.len(), 1);
    let body = &bodies[0];
    assert_eq!(body.len(), 5);
    assert_eq!(body["entry.23900039"], "Imran Shaikh");
    assert_eq!(body["entry.1000509920"], "+91 99887 76655");
    assert_eq!(body["entry.29073643"], "imran@example.com");
    assert_eq!(body["entry.177355161"], "Farm Lands");
    assert_eq!(body["entry.1533124499"], "Need 2 acres near Chevella");
}

#[tokio::test]
async fn test_opaque_delivery_accepted_by_default() {
    let (url, captured) = spawn_form_endpoint(StatusCode::BAD_REQUEST).await;
    let client = GoogleFormsClient::new(&forms_config(url, DeliveryMode::Opaque, true)).unwrap();
    let submitter = LeadSubmitter::new(Arc::new(client), WHATSAPP);

    let outcome = submitter.submit(&inquiry()).await.unwrap();
    assert!(outcome.is_accepted());
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_opaque_delivery_routes_to_fallback_when_unconfirmed_not_accepted() {
    let (url, captured) = spawn_form_endpoint(StatusCode::OK).await;
    let config = forms_config(url, DeliveryMode::Opaque, false);
    let accept = config.accept_unconfirmed;
    let client = GoogleFormsClient::new(&config).unwrap();
    let submitter =
        LeadSubmitter::new(Arc::new(client), WHATSAPP).with_accept_unconfirmed(accept);

    let outcome = submitter.submit(&inquiry()).await.unwrap();
    let link = outcome.fallback().expect("fallback offered");
    assert_eq!(link.reason, FallbackReason::Unconfirmed);
    assert!(whatsapp_text(&link.url).contains("Contact: +91 99887 76655"));
    // The request itself still went out
    assert_eq!(captured.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_confirmed_delivery_error_status_falls_back() {
    let (url, _captured) = spawn_form_endpoint(StatusCode::SERVICE_UNAVAILABLE).await;
    let client = GoogleFormsClient::new(&forms_config(url, DeliveryMode::Confirmed, true)).unwrap();
    let submitter = LeadSubmitter::new(Arc::new(client), WHATSAPP);

    let outcome = submitter.submit(&inquiry()).await.unwrap();
    assert!(matches!(
        outcome.fallback().map(|l| &l.reason),
        Some(FallbackReason::DeliveryFailed(_))
    ));
}

#[tokio::test]
async fn test_contact_page_lifecycle() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let mut view = site.navigate("/contact").unwrap().unwrap();
    let Page::Contact(form) = &mut view.page else {
        panic!("Expected contact page");
    };

    {
        let fields = form.fields_mut();
        fields.name = "Imran Shaikh".to_string();
        fields.phone = "+91 99887 76655".to_string();
        fields.interest = Interest::Other;
    }

    sink.set_outcome(MockOutcome::Fail("form endpoint down".to_string()));
    assert_eq!(
        form.submit(site.submitter()).await.unwrap(),
        FormPhase::FallbackOffered
    );
    assert_eq!(form.fields().name, "Imran Shaikh");
    assert!(whatsapp_text(&form.fallback().unwrap().url).contains("Interested in: Other"));

    sink.set_outcome(MockOutcome::Confirm);
    assert_eq!(
        form.submit(site.submitter()).await.unwrap(),
        FormPhase::Submitted
    );
    assert!(form.fields().name.is_empty());
    assert_eq!(sink.submission_count(), 2);

    form.send_another().unwrap();
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[tokio::test]
async fn test_invalid_form_never_reaches_sink() {
    let sink = MockLeadSink::new();
    let site = test_site(&sink);
    let mut view = site.navigate("/contact").unwrap().unwrap();
    let Page::Contact(form) = &mut view.page else {
        panic!("Expected contact page");
    };

    form.fields_mut().name = "Imran".to_string();
    assert!(form.submit(site.submitter()).await.is_err());
    assert_eq!(form.phase(), FormPhase::Idle);
    assert_eq!(sink.submission_count(), 0);
}
