// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zig-zag workflow path drawn behind a project's process steps.
//!
//! Steps are spread across a fixed 360-unit strip starting at x = 20, with
//! every other step dropped from y = 40 to y = 70. Consecutive steps are
//! joined by quadratic curves: odd segments bulge 30 units above their start
//! point, and even segments continue smoothly by reflecting the previous
//! control point (SVG's `T` command).

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point};

const ORIGIN_X: f64 = 20.0;
const SPAN: f64 = 360.0;
const HIGH_Y: f64 = 40.0;
const LOW_Y: f64 = 70.0;
const LIFT: f64 = 30.0;

/// Returns the anchor point of each of `steps` workflow steps.
///
/// A single step sits at the strip origin.
#[must_use]
pub fn workflow_points(steps: usize) -> Vec<Point> {
    if steps == 1 {
        return alloc::vec![Point::new(ORIGIN_X, HIGH_Y)];
    }
    let step_width = SPAN / steps.saturating_sub(1) as f64;
    (0..steps)
        .map(|i| {
            let x = ORIGIN_X + i as f64 * step_width;
            let y = if i % 2 == 0 { HIGH_Y } else { LOW_Y };
            Point::new(x, y)
        })
        .collect()
}

/// Builds the curved path through `points`.
///
/// Returns an empty path for fewer than two points.
#[must_use]
pub fn workflow_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let [first, rest @ ..] = points else {
        return path;
    };
    if rest.is_empty() {
        return path;
    }
    path.move_to(*first);
    let mut prev = *first;
    let mut prev_ctrl = *first;
    for (offset, &point) in rest.iter().enumerate() {
        let ctrl = if offset % 2 == 0 {
            Point::new(prev.x + (point.x - prev.x) / 2.0, prev.y - LIFT)
        } else {
            Point::new(2.0 * prev.x - prev_ctrl.x, 2.0 * prev.y - prev_ctrl.y)
        };
        path.quad_to(ctrl, point);
        prev_ctrl = ctrl;
        prev = point;
    }
    path
}

/// Renders the path through `points` as SVG path data using `Q`/`T`
/// commands.
///
/// Returns an empty string for fewer than two points.
#[must_use]
pub fn workflow_svg(points: &[Point]) -> String {
    let path = workflow_path(points);
    let mut svg = String::new();
    for (index, el) in path.elements().iter().enumerate() {
        match *el {
            PathEl::MoveTo(p) => svg.push_str(&format!("M {},{} ", p.x, p.y)),
            // Segment index `index` ends at point `index`; odd ones carry an
            // explicit control point.
            PathEl::QuadTo(c, p) if index % 2 == 1 => {
                svg.push_str(&format!("Q {},{} {},{} ", c.x, c.y, p.x, p.y));
            }
            PathEl::QuadTo(_, p) => svg.push_str(&format!("T {},{} ", p.x, p.y)),
            _ => {}
        }
    }
    svg
}
