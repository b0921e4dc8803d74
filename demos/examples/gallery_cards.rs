// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gallery cards.
//!
//! Load the sample catalog from JSON, walk the category tabs, and print the
//! card previews and a workflow path.
//!
//! Run:
//! - `cargo run -p vitrine_demos --example gallery_cards`

use vitrine_demos::sample_catalog;
use vitrine_gallery::{CategoryFilter, tech_preview, workflow_points, workflow_svg};
use vitrine_page::default_categories;

fn main() {
    let catalog = sample_catalog().expect("sample catalog is valid");
    let mut filter = CategoryFilter::new();

    for category in default_categories() {
        filter.select(&category.id);
        let visible = filter.apply(catalog.projects());
        println!("[{}] {} project(s)", category.label, visible.len());
        for project in visible {
            let preview = tech_preview(project, 4);
            println!(
                "  #{} {:<12} {}{}",
                project.id,
                project.title,
                preview.shown.join(", "),
                preview
                    .more_label()
                    .map(|more| format!(" {more}"))
                    .unwrap_or_default()
            );
        }
    }

    println!("\nWorkflow path for 5 steps:");
    println!("  {}", workflow_svg(&workflow_points(5)));
}
