// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll spy basics.
//!
//! Sweep the viewport down a page, watch the active section change, then
//! smooth-scroll back to the top the way a navigation click would.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example scroll_spy_basics`

use vitrine_demos::sample_layout;
use vitrine_scroll_spy::SectionTracker;

fn main() {
    let layout = sample_layout();
    let ids = ["home", "summary", "skills", "projects", "tools", "contact"].map(String::from);
    let mut tracker = SectionTracker::new(ids)
        .expect("section ids are unique")
        .with_initial_active(&"home".to_owned());

    println!("== Sweep ==");
    for offset in (0..5_200).step_by(400) {
        tracker.on_scroll(f64::from(offset));
        if tracker.on_frame(&layout) {
            println!("offset {offset:>5}: active = {:?}", tracker.active());
        }
    }

    println!("\n== Smooth scroll to home ==");
    let started = tracker.scroll_to(&"home".to_owned(), 0, &layout);
    println!("started: {started}");
    let mut now = 0;
    while let Some(offset) = tracker.sample_scroll(now) {
        tracker.on_scroll(offset);
        let changed = tracker.on_frame(&layout);
        println!(
            "t={now:>3}ms offset={offset:>7.1}{}",
            if changed { "  (section changed)" } else { "" }
        );
        now += 50;
    }
    println!("{:#?}", tracker.debug_info());
}
