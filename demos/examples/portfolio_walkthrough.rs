// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Portfolio walkthrough.
//!
//! Drive a whole page through a short visit: scroll, filter, open a project's
//! tech stack, read a document, and close everything again. Page events are
//! logged through `tracing`.
//!
//! Run:
//! - `RUST_LOG=vitrine_page=debug cargo run -p vitrine_demos --example portfolio_walkthrough`

use tracing_subscriber::EnvFilter;
use vitrine_demos::{fallback_tech_stack, sample_catalog, sample_layout};
use vitrine_document::SimulatedSource;
use vitrine_page::{ExternalLink, Page, PageConfig, PageEffect, TracingTrace};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let layout = sample_layout();
    let config = PageConfig::default().with_fallback_tech_stack(fallback_tech_stack());
    let mut page = Page::with_parts(
        sample_catalog().expect("sample catalog is valid"),
        config,
        SimulatedSource::default(),
        TracingTrace,
    )
    .expect("navigation sections are unique");

    let mut now = 0_u64;
    let mut advance = |page: &mut Page<SimulatedSource, TracingTrace>, until: u64| {
        while now < until {
            now += 16;
            page.on_frame(now, &layout);
            for effect in page.tick(now, &layout) {
                if let PageEffect::Document(event) = effect {
                    println!("document: {event:?}");
                }
            }
        }
    };

    // Scroll down to the projects.
    page.on_scroll(2_500.0);
    advance(&mut page, 100);
    println!("active section: {:?}", page.active_section());

    page.select_category("ecommerce");
    for project in page.visible_projects() {
        let links = vitrine_page::ProjectLinks::of(project).expect("sample links are valid");
        println!(
            "{}: live {} (target {:?})",
            project.title,
            links.live,
            links.live.target()
        );
    }

    // Open the storefront's tech stack and its backend document.
    page.open_tech_stack(1, 200);
    advance(&mut page, 400);
    page.open_document(2, 400);
    advance(&mut page, 1_500);

    let viewer = page.viewer_mut();
    viewer.next();
    viewer.zoom_in();
    println!(
        "{} at {:.2}x: {}",
        viewer.caption().unwrap_or_default(),
        viewer.zoom(),
        viewer.current_page_text().unwrap_or_default()
    );
    println!("download: {:?}", page.document_download_url());

    // A project without its own stack shows the fallback entries.
    page.open_tech_stack(3, 1_600);
    println!(
        "dashboard stack: {:?}",
        page.tech_stack_of(3)
            .map(|s| s.iter().map(|t| t.name.as_str()).collect::<Vec<_>>())
    );

    page.close_tech_stack(1_700);
    advance(&mut page, 2_100);

    let mail = ExternalLink::parse("mailto:hello@example.com").expect("valid mailto link");
    println!("contact: {mail}");

    println!("{:#?}", page.debug_info());
    let cancelled = page.teardown();
    tracing::info!(cancelled, "walkthrough finished");
}
