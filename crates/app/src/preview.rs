//! Plain-text rendering of a view, used by the `site-preview` binary

use std::fmt::Write;

use ammaar_catalog::{Project, COMPANY_INFO};
use ammaar_gallery::Lightbox;

use crate::links::ContactLinks;
use crate::pages::{FilterButton, FormPhase, Page, View, LOGIN_UNAVAILABLE};

/// Render a view as plain text
pub fn render(view: &View, links: &ContactLinks) -> String {
    let mut out = String::new();

    if view.shows_navbar() {
        let _ = writeln!(out, "== {} | {} ==", COMPANY_INFO.name, view.route.title());
    }

    match &view.page {
        Page::Home(page) => {
            let slide = page.current_slide();
            let _ = writeln!(
                out,
                "Hero [{}/{}]: {} - {}",
                page.slide_index() + 1,
                page.slide_count(),
                slide.title,
                slide.location
            );
            let _ = writeln!(out, "Featured:");
            for project in page.featured() {
                write_card(&mut out, project);
            }
        }
        Page::About(page) => {
            let _ = writeln!(out, "{} - {}", page.company().name, page.company().tagline);
            for stat in page.stats() {
                let _ = writeln!(out, "  {}: {}", stat.label, stat.value);
            }
        }
        Page::Projects(page) => {
            write_filters(&mut out, &page.filter_buttons());
            write_grid(&mut out, page.visible(), page.empty_message());
        }
        Page::Gallery(page) => {
            write_filters(&mut out, &page.filter_buttons());
            write_grid(&mut out, page.visible(), page.empty_message());
            if let Some(counter) = page.counter() {
                let _ = writeln!(out, "Image {}", counter);
            }
        }
        Page::Contact(form) => {
            let _ = writeln!(out, "Contact form ({})", form.phase());
            match form.phase() {
                FormPhase::Submitted => {
                    let _ = writeln!(out, "Thank you! We'll get back to you shortly.");
                }
                FormPhase::FallbackOffered => {
                    if let Some(link) = form.fallback() {
                        let _ = writeln!(out, "Continue on WhatsApp: {}", link.url);
                    }
                }
                FormPhase::Idle | FormPhase::Submitting => {}
            }
        }
        Page::Login(form) => {
            let _ = writeln!(out, "Sign in");
            if form.is_loading() {
                let _ = writeln!(out, "Signing in...");
            } else {
                let _ = writeln!(out, "({})", LOGIN_UNAVAILABLE);
            }
        }
    }

    if let Some(lightbox) = view.page.lightbox() {
        write_modal(&mut out, lightbox, links);
    }

    if view.shows_footer() {
        let _ = writeln!(
            out,
            "-- Call {} | {} --",
            links.phone(),
            COMPANY_INFO.contact.email
        );
    }

    out
}

fn write_card(out: &mut String, project: &Project) {
    let _ = writeln!(
        out,
        "  [{}] {} ({}) {} - {}",
        project.id, project.title, project.status, project.location, project.price
    );
}

fn write_filters(out: &mut String, buttons: &[FilterButton]) {
    let captions: Vec<String> = buttons
        .iter()
        .map(|b| {
            if b.active {
                format!("*{}*", b.caption())
            } else {
                b.caption()
            }
        })
        .collect();
    let _ = writeln!(out, "Filter: {}", captions.join(" | "));
}

fn write_grid(out: &mut String, projects: &[std::sync::Arc<Project>], empty: Option<&str>) {
    match empty {
        Some(message) => {
            let _ = writeln!(out, "{}", message);
        }
        None => projects.iter().for_each(|p| write_card(out, p)),
    }
}

fn write_modal(out: &mut String, lightbox: &Lightbox, links: &ContactLinks) {
    let (Some(project), Some(image)) = (lightbox.selection(), lightbox.current_image()) else {
        return;
    };

    let _ = writeln!(out, "+-- {} [{}]", project.title, project.status);
    let _ = writeln!(out, "|   {}", image);
    if let Some(position) = lightbox.position_label() {
        if lightbox.has_navigation() {
            let _ = writeln!(out, "|   < {} >", position);
        }
    }
    for stat in project.quick_stats() {
        let _ = writeln!(out, "|   {}: {}", stat.label, stat.value);
    }
    let _ = writeln!(out, "|   WhatsApp: {}", links.project_enquiry(project));
    let _ = writeln!(out, "+-- Call: {}", links.call());
}
