// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of `vitrine_page::Page`.

use vitrine_disclosure::Level;
use vitrine_document::{
    Document, LoadError, LoadState, PageEntry, SimulatedSource, ViewerEvent,
};
use vitrine_gallery::{Project, ProjectCatalog, TechEntry};
use vitrine_page::{Page, PageConfig, PageEffect, RecordingTrace, TraceEvent};
use vitrine_scroll_spy::SectionGeometry;

fn tech(id: u32, name: &str) -> TechEntry {
    TechEntry {
        id,
        name: name.to_string(),
        icon: String::new(),
        description: String::new(),
        document_url: format!("/docs/{}.pdf", name.to_lowercase()),
    }
}

fn project(id: u32, category: &str, technologies: &[&str], stack: Vec<TechEntry>) -> Project {
    Project {
        id,
        category: category.to_string(),
        title: format!("Project {id}"),
        description: String::new(),
        thumbnail: String::new(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        tech_stack: stack,
        live_link: format!("https://example.com/{id}"),
        github_link: format!("https://github.com/example/{id}"),
    }
}

fn catalog() -> ProjectCatalog {
    ProjectCatalog::from_projects(vec![
        project(
            1,
            "ecommerce",
            &["React", "Node.js", "MongoDB", "Stripe", "Redis", "Docker"],
            vec![tech(1, "Frontend"), tech(2, "Backend")],
        ),
        project(2, "web", &["Vue"], vec![tech(1, "DevOps")]),
        project(3, "web", &[], vec![]),
    ])
    .unwrap()
}

fn layout() -> Vec<(String, SectionGeometry)> {
    [
        ("home", 0.0, 800.0),
        ("summary", 800.0, 600.0),
        ("skills", 1400.0, 600.0),
        ("projects", 2000.0, 1200.0),
        ("tools", 3200.0, 600.0),
        ("contact", 3800.0, 800.0),
        ("project-tech-stack", 2600.0, 900.0),
    ]
    .into_iter()
    .map(|(id, top, height)| (id.to_string(), SectionGeometry::new(top, height)))
    .collect()
}

fn traced_page() -> Page<SimulatedSource, RecordingTrace> {
    Page::with_parts(
        catalog(),
        PageConfig::default(),
        SimulatedSource::default(),
        RecordingTrace::new(),
    )
    .unwrap()
}

#[test]
fn highlight_follows_scroll() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    let about = page.nav_items()[1].clone();
    assert_eq!(about.label, "ABOUT");
    assert!(!page.is_highlighted(&about));

    page.on_scroll(300.0);
    page.on_scroll(750.0);
    assert!(page.on_frame(0, &layout).section_changed);
    assert!(page.is_highlighted(&about));

    // Nothing pending: the next frame is idle.
    assert!(!page.on_frame(16, &layout).section_changed);
}

#[test]
fn navigation_scrolls_smoothly_and_highlights_target() {
    let layout = layout();
    let mut page = traced_page();

    assert!(!page.navigate_to("blog", 0, &layout));
    assert!(page.navigate_to("tools", 0, &layout));

    let first = page.on_frame(0, &layout);
    assert_eq!(first.scroll_to, Some(0.0));
    assert!(!first.section_changed);

    let mid = page.on_frame(200, &layout).scroll_to.unwrap();
    assert!(mid > 0.0 && mid < 3200.0);

    let last = page.on_frame(400, &layout);
    assert_eq!(last.scroll_to, Some(3200.0));
    assert!(last.section_changed);
    assert_eq!(page.active_section(), Some("tools"));
    assert_eq!(page.on_frame(416, &layout).scroll_to, None);

    assert_eq!(
        page.trace().events().first(),
        Some(&TraceEvent::ScrollStarted(3200.0))
    );
    assert!(
        page.trace()
            .events()
            .contains(&TraceEvent::SectionActivated("tools".into()))
    );
}

#[test]
fn category_selection_filters_projects() {
    let mut page = traced_page();
    assert_eq!(page.active_category(), "all");
    assert_eq!(page.visible_projects().len(), 3);

    assert!(page.select_category("web"));
    assert!(!page.select_category("web"));
    let ids: Vec<u32> = page.visible_projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, [2, 3]);

    assert!(page.select_category("tools"));
    assert!(page.visible_projects().is_empty());

    assert_eq!(
        page.trace().events(),
        [
            TraceEvent::CategorySelected {
                category: "web".into(),
                visible: 2,
            },
            TraceEvent::CategorySelected {
                category: "tools".into(),
                visible: 0,
            },
        ]
    );
}

#[test]
fn card_preview_and_expansion() {
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    let preview = page.tech_preview(1).unwrap();
    assert_eq!(preview.shown, ["React", "Node.js", "MongoDB", "Stripe"]);
    assert_eq!(preview.more_label().as_deref(), Some("+2 more"));
    assert_eq!(page.tech_preview(2).unwrap().more_label(), None);
    assert!(page.tech_preview(99).is_none());

    assert_eq!(page.toggle_project(1), Some(1));
    assert_eq!(page.toggle_project(2), Some(2));
    assert_eq!(page.toggle_project(2), None);
    assert_eq!(page.expanded_project(), None);
}

#[test]
fn opening_tech_stack_scrolls_to_panel_after_delay() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    assert!(!page.open_tech_stack(42, 0));
    assert!(page.open_tech_stack(1, 0));
    assert_eq!(page.tech_stack_project().map(|p| p.id), Some(1));

    assert!(page.tick(99, &layout).is_empty());
    assert_eq!(
        page.tick(100, &layout),
        [PageEffect::ScrollStarted {
            anchor: "project-tech-stack".into(),
            target: 2600.0,
        }]
    );
    assert_eq!(page.tracker().debug_info().scroll_target, Some(2600.0));
}

#[test]
fn document_requires_open_panel() {
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    assert!(!page.open_document(1, 0));

    page.open_tech_stack(1, 0);
    assert!(!page.open_document(9, 10));
    assert!(page.open_document(1, 10));
    assert!(page.is_document_open());
}

#[test]
fn projects_without_stack_use_fallback_entries() {
    let config = PageConfig::default().with_fallback_tech_stack(vec![tech(5, "Testing")]);
    let mut page = Page::new(catalog(), config).unwrap();
    assert_eq!(page.tech_stack_of(3).map(<[TechEntry]>::len), Some(1));
    assert_eq!(page.tech_stack_of(2).map(|s| s[0].name.as_str()), Some("DevOps"));

    page.open_tech_stack(3, 0);
    assert!(page.open_document(5, 0));
    assert_eq!(page.document_download_url(), Some("/docs/testing.pdf"));

    // Projects with their own stack never see the fallback.
    page.open_tech_stack(2, 10);
    assert!(!page.open_document(5, 10));
}

#[test]
fn each_tech_entry_downloads_its_own_document() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    page.open_tech_stack(1, 0);

    page.open_document(1, 0);
    assert_eq!(page.document_download_url(), Some("/docs/frontend.pdf"));

    page.open_document(2, 100);
    assert_eq!(page.document_download_url(), Some("/docs/backend.pdf"));
    assert_eq!(page.document_entry().map(|t| t.name.as_str()), Some("Backend"));

    // Only the second load survives.
    let effects = page.tick(1_100, &layout);
    assert!(effects.contains(&PageEffect::Document(ViewerEvent::Loaded { pages: 10 })));
    assert_eq!(
        page.viewer().page_text(1),
        Some("This is page 1 of the backend.pdf documentation.")
    );
}

#[test]
fn viewer_commands_go_through_the_page() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    page.open_tech_stack(1, 0);
    page.open_document(2, 0);
    page.tick(1_000, &layout);

    let viewer = page.viewer_mut();
    assert!(viewer.next());
    assert_eq!(viewer.enter_page_text("11"), PageEntry::Ignored);
    assert_eq!(viewer.enter_page_text("10"), PageEntry::Moved(10));
    assert!(!viewer.next());
    assert_eq!(page.viewer().caption().as_deref(), Some("Page 10 of 10"));
}

#[test]
fn closing_tech_stack_cascades_and_cancels_load() {
    let layout = layout();
    let mut page = traced_page();
    page.open_tech_stack(1, 0);
    page.tick(100, &layout);
    page.open_document(2, 200);
    assert!(page.viewer().is_loading());

    assert!(page.close_tech_stack(500));
    assert!(!page.is_tech_stack_open());
    assert!(!page.is_document_open());
    assert_eq!(page.viewer().state(), &LoadState::Idle);
    // Both payloads stay for the exit transition.
    assert_eq!(page.tech_stack_project().map(|p| p.id), Some(1));
    assert_eq!(page.document_download_url(), Some("/docs/backend.pdf"));

    assert_eq!(page.next_deadline(), Some(800));
    assert_eq!(
        page.tick(800, &layout),
        [
            PageEffect::PanelCleared(Level::Child),
            PageEffect::PanelCleared(Level::Parent),
        ]
    );
    assert!(page.tick(5_000, &layout).is_empty());
    assert!(page.tech_stack_project().is_none());
    assert!(page.document_entry().is_none());

    let events = page.trace().events();
    let closed_doc = events
        .iter()
        .position(|e| *e == TraceEvent::DocumentClosed(2))
        .unwrap();
    let closed_stack = events
        .iter()
        .position(|e| *e == TraceEvent::TechStackClosed(1))
        .unwrap();
    assert!(closed_doc < closed_stack);
}

#[test]
fn reopening_before_clear_keeps_new_project() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    page.open_tech_stack(1, 0);
    page.close_tech_stack(1_000);
    page.open_tech_stack(2, 1_100);

    let effects = page.tick(10_000, &layout);
    assert!(!effects.contains(&PageEffect::PanelCleared(Level::Parent)));
    assert!(page.is_tech_stack_open());
    assert_eq!(page.tech_stack_project().map(|p| p.id), Some(2));
}

#[test]
fn switching_project_closes_document() {
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    page.open_tech_stack(1, 0);
    page.open_document(1, 0);
    page.open_tech_stack(2, 50);
    assert!(!page.is_document_open());
    assert!(page.viewer().url().is_none());
    assert!(page.is_tech_stack_open());
}

#[test]
fn closing_document_keeps_its_entry_after_project_switch() {
    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default()).unwrap();
    page.open_tech_stack(1, 0);
    page.open_document(1, 0);
    assert_eq!(page.document_download_url(), Some("/docs/frontend.pdf"));

    // Project 2 also has a tech entry with id 1.
    page.open_tech_stack(2, 50);
    assert!(!page.is_document_open());
    assert_eq!(page.document_download_url(), Some("/docs/frontend.pdf"));
    assert_eq!(page.document_entry().map(|t| t.name.as_str()), Some("Frontend"));
    assert_eq!(page.debug_info().document, Some(1));

    let effects = page.tick(349, &layout);
    assert!(!effects.contains(&PageEffect::PanelCleared(Level::Child)));
    assert_eq!(page.document_download_url(), Some("/docs/frontend.pdf"));

    let effects = page.tick(350, &layout);
    assert!(effects.contains(&PageEffect::PanelCleared(Level::Child)));
    assert!(page.document_download_url().is_none());

    assert!(page.open_document(1, 400));
    assert_eq!(page.document_download_url(), Some("/docs/devops.pdf"));
}

#[test]
fn failed_load_is_reported() {
    let layout = layout();
    let failing = |url: &str| -> Result<Document, LoadError> {
        Err(LoadError::NotFound { url: url.into() })
    };
    let mut page = Page::with_parts(
        catalog(),
        PageConfig::default().with_load_delay(250),
        failing,
        RecordingTrace::new(),
    )
    .unwrap();
    page.open_tech_stack(2, 0);
    page.open_document(1, 0);

    let expected = LoadError::NotFound {
        url: "/docs/devops.pdf".into(),
    };
    let effects = page.tick(250, &layout);
    assert!(effects.contains(&PageEffect::Document(ViewerEvent::Failed(expected.clone()))));
    assert!(
        page.trace()
            .events()
            .contains(&TraceEvent::DocumentFailed(expected))
    );
}

#[test]
fn teardown_cancels_everything() {
    let layout = layout();
    let mut page = traced_page();
    page.open_tech_stack(1, 0);
    page.open_document(1, 0);
    page.navigate_to("contact", 0, &layout);

    // Pending: the panel's anchor scroll and the document load.
    assert_eq!(page.teardown(), 2);
    assert_eq!(page.next_deadline(), None);
    assert!(page.tick(100_000, &layout).is_empty());
    assert!(!page.tracker().is_scrolling());
    assert!(!page.is_tech_stack_open());
    assert!(page.tech_stack_project().is_none());
    assert_eq!(page.trace().events().last(), Some(&TraceEvent::TornDown(2)));
}

#[cfg(feature = "serde")]
#[test]
fn config_loads_from_partial_json() {
    let config: PageConfig =
        serde_json::from_str(r#"{ "close_duration": 150, "initial_section": "summary" }"#)
            .unwrap();
    assert_eq!(config.close_duration, 150);
    assert_eq!(config.initial_section, "summary");
    assert_eq!(config.load_delay, 1000);
    assert_eq!(config.nav.len(), 6);

    let page = Page::new(catalog(), config).unwrap();
    assert_eq!(page.active_section(), Some("summary"));
}

#[cfg(feature = "tracing")]
#[test]
fn tracing_trace_follows_a_full_visit() {
    use vitrine_page::TracingTrace;

    let layout = layout();
    let mut page = Page::new(catalog(), PageConfig::default())
        .unwrap()
        .with_trace(TracingTrace);
    page.on_scroll(2_100.0);
    assert!(page.on_frame(0, &layout).section_changed);
    assert!(page.open_tech_stack(1, 0));
    assert!(page.open_document(2, 0));
    page.tick(1_000, &layout);
    assert_eq!(page.viewer().caption().as_deref(), Some("Page 1 of 10"));

    assert!(page.close_tech_stack(1_100));
    let effects = page.tick(1_400, &layout);
    assert_eq!(
        effects,
        [
            PageEffect::PanelCleared(Level::Child),
            PageEffect::PanelCleared(Level::Parent),
        ]
    );
    assert_eq!(page.teardown(), 0);
}
