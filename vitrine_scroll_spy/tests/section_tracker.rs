// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_scroll_spy` crate.
//!
//! These exercise section activation against live layout, per-frame
//! coalescing of scroll events, and smooth navigation scrolling.

use std::cell::Cell;

use vitrine_scroll_spy::{FnLayout, SectionGeometry, SectionLayout, SectionTracker};

const PAGE: [&str; 6] = ["home", "summary", "skills", "projects", "tools", "contact"];

fn stacked(heights: &[f64]) -> Vec<(&'static str, SectionGeometry)> {
    let mut top = 0.0;
    PAGE.iter()
        .zip(heights)
        .map(|(id, h)| {
            let g = SectionGeometry::new(top, *h);
            top += h;
            (*id, g)
        })
        .collect()
}

#[test]
fn three_section_scenario() {
    let layout = vec![
        ("home", SectionGeometry::new(0.0, 800.0)),
        ("about", SectionGeometry::new(800.0, 800.0)),
        ("contact", SectionGeometry::new(1600.0, 800.0)),
    ];
    let mut tracker = SectionTracker::new(["home", "about", "contact"]).unwrap();
    assert_eq!(tracker.activation_margin(), 100.0);
    assert_eq!(tracker.evaluate(750.0, &layout), Some(&"about"));
}

#[test]
fn every_offset_yields_one_section_once_active() {
    let layout = stacked(&[900.0, 640.0, 720.0, 1300.0, 500.0, 600.0]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();

    let mut offset = -200.0;
    while offset < 6_000.0 {
        let probe = offset + tracker.activation_margin();
        let expected = layout
            .iter()
            .find(|(_, g)| g.contains(probe))
            .map(|(id, _)| *id);
        let previous = tracker.active().copied();
        let active = tracker.evaluate(offset, &layout).copied();

        match expected {
            Some(id) => assert_eq!(active, Some(id), "offset {offset}"),
            None => assert_eq!(active, previous, "offset {offset} should retain"),
        }
        offset += 37.0;
    }
    assert_eq!(tracker.active(), Some(&"contact"));
}

#[test]
fn sections_without_geometry_are_skipped() {
    // "skills" is not laid out (for example still lazily loading).
    let layout = vec![
        ("home", SectionGeometry::new(0.0, 500.0)),
        ("projects", SectionGeometry::new(500.0, 500.0)),
    ];
    let mut tracker = SectionTracker::new(["home", "skills", "projects"]).unwrap();
    assert_eq!(tracker.evaluate(450.0, &layout), Some(&"projects"));
}

#[test]
fn geometry_is_read_live_on_every_evaluation() {
    let home_height = Cell::new(800.0);
    let layout = FnLayout(|id: &&str| match *id {
        "home" => Some(SectionGeometry::new(0.0, home_height.get())),
        "about" => Some(SectionGeometry::new(home_height.get(), 800.0)),
        _ => None,
    });
    let mut tracker = SectionTracker::new(["home", "about"]).unwrap();

    assert_eq!(tracker.evaluate(600.0, &layout), Some(&"home"));

    // Layout shift: an image above loads and the home section shrinks.
    home_height.set(500.0);
    assert_eq!(tracker.evaluate(600.0, &layout), Some(&"about"));
}

#[test]
fn frame_coalesces_scroll_events() {
    let calls = Cell::new(0_u32);
    let base = stacked(&[800.0, 800.0, 800.0, 800.0, 800.0, 800.0]);
    let layout = FnLayout(|id: &&str| {
        calls.set(calls.get() + 1);
        base.section_geometry(id)
    });
    let mut tracker = SectionTracker::new(PAGE).unwrap();

    for offset in [100.0, 400.0, 900.0, 1_750.0] {
        tracker.on_scroll(offset);
    }
    assert!(tracker.has_pending_scroll());
    assert_eq!(calls.get(), 0, "recording scroll must not read layout");

    assert!(tracker.on_frame(&layout));
    assert_eq!(tracker.active(), Some(&"skills"));
    assert!(!tracker.has_pending_scroll());
    let reads = calls.get();

    // Nothing recorded since the last frame: no layout reads at all.
    assert!(!tracker.on_frame(&layout));
    assert_eq!(calls.get(), reads);
}

#[test]
fn frame_reports_no_change_when_section_is_stable() {
    let layout = stacked(&[800.0; 6]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();
    tracker.on_scroll(10.0);
    assert!(tracker.on_frame(&layout));
    tracker.on_scroll(20.0);
    assert!(!tracker.on_frame(&layout));
}

#[test]
fn scroll_to_unknown_section_is_a_silent_no_op() {
    let layout = stacked(&[800.0; 6]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();

    assert_eq!(tracker.scroll_target(&"blog", &layout), None);
    assert!(!tracker.scroll_to(&"blog", 0, &layout));
    assert!(!tracker.is_scrolling());
}

#[test]
fn scroll_to_section_animates_to_its_top() {
    let layout = stacked(&[800.0; 6]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();
    tracker.smooth_scroll_mut().set_duration(200);
    tracker.evaluate(0.0, &layout);

    assert_eq!(tracker.scroll_target(&"tools", &layout), Some(3_200.0));
    assert!(tracker.scroll_to(&"tools", 1_000, &layout));

    let mut now = 1_000;
    let mut last = 0.0;
    while let Some(offset) = tracker.sample_scroll(now) {
        assert!(offset >= last);
        last = offset;
        tracker.on_scroll(offset);
        tracker.on_frame(&layout);
        now += 16;
    }
    assert_eq!(last, 3_200.0);
    // 3200 + 100 lands in "tools".
    assert_eq!(tracker.active(), Some(&"tools"));
}

#[test]
fn manual_scroll_interrupts_navigation() {
    let layout = stacked(&[800.0; 6]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();
    assert!(tracker.scroll_to(&"contact", 0, &layout));

    let partway = tracker.sample_scroll(100).unwrap();
    tracker.on_scroll(partway);
    assert!(tracker.interrupt_scroll());
    assert_eq!(tracker.sample_scroll(200), None);
    assert_eq!(tracker.scroll_offset(), partway);
}

#[test]
fn new_navigation_starts_from_current_offset() {
    let layout = stacked(&[800.0; 6]);
    let mut tracker = SectionTracker::new(PAGE).unwrap();
    tracker.evaluate(1_600.0, &layout);

    assert!(tracker.scroll_to(&"home", 0, &layout));
    assert_eq!(tracker.sample_scroll(0), Some(1_600.0));
    assert_eq!(tracker.debug_info().scroll_target, Some(0.0));
}
