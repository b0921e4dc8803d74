// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_disclosure` crate.
//!
//! These focus on timer interactions: reopen-before-clear, cascade ordering,
//! and teardown, plus invariants checked after long command sequences.

use vitrine_disclosure::{
    ChainEffect, Disclosure, DisclosureChain, DisclosureConfig, DisclosureEffect, DisclosureState,
    Level,
};

fn config() -> DisclosureConfig {
    DisclosureConfig {
        close_duration: 300,
        open_scroll_delay: 100,
    }
}

#[test]
fn close_then_reopen_never_clears_fresh_payload() {
    for reopen_after in [0_u64, 1, 150, 299] {
        let mut panel: Disclosure<&str> = Disclosure::new(config());
        panel.open(0, "first");
        panel.close(1_000);
        panel.open(1_000 + reopen_after, "second");

        // Well past the first clear deadline.
        for now in (1_000..2_000).step_by(50) {
            let effects = panel.tick(now);
            assert!(
                !effects.contains(&DisclosureEffect::PayloadCleared),
                "stale clear fired at {now} (reopened after {reopen_after}ms)"
            );
        }
        assert_eq!(panel.state(), &DisclosureState::Open("second"));
    }
}

#[test]
fn close_reopen_close_clears_once_at_latest_deadline() {
    let mut panel: Disclosure<u8> = Disclosure::new(config());
    panel.open(0, 1);
    panel.close(100);
    panel.open(200, 2);
    panel.close(250);

    assert_eq!(panel.pending_clear(), Some(550));
    assert!(panel.tick(400).is_empty(), "first clear must be gone");
    assert_eq!(
        panel.tick(550).as_slice(),
        [DisclosureEffect::PayloadCleared]
    );
}

#[test]
fn invariants_hold_over_command_sequences() {
    // A small deterministic pseudo-random walk over commands and time.
    let mut chain: DisclosureChain<u32, u32> = DisclosureChain::new(
        Disclosure::new(config()).with_anchor("project-tech-stack"),
        Disclosure::new(config()),
    );
    let mut seed = 0x9e37_79b9_u32;
    let mut now = 0_u64;

    for step in 0..2_000_u32 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        now += u64::from(seed % 120);

        match seed % 6 {
            0 => chain.open_parent(now, step),
            1 => {
                chain.open_child(now, step);
            }
            2 => {
                chain.close_child(now);
            }
            3 => {
                chain.close_parent(now);
            }
            _ => {
                chain.tick(now);
            }
        }

        assert!(
            !chain.child().is_open() || chain.parent().is_open(),
            "child open without parent at step {step}"
        );
        if chain.parent().is_open() {
            assert!(chain.parent().payload().is_some());
        }
        if chain.child().is_open() {
            assert!(chain.child().payload().is_some());
        }
        if chain.parent().is_closing() {
            assert!(chain.parent().pending_clear().is_some());
        }
        if chain.child().is_closing() {
            assert!(chain.child().pending_clear().is_some());
        }
    }
}

#[test]
fn cascade_close_hides_both_synchronously() {
    let mut chain: DisclosureChain<&str, &str> =
        DisclosureChain::new(Disclosure::new(config()), Disclosure::new(config()));
    chain.open_parent(0, "project");
    chain.open_child(50, "frontend.pdf");

    assert!(chain.close_parent(60));
    assert!(chain.parent().is_closing());
    assert!(chain.child().is_closing());
    // Content stays available to animate out.
    assert_eq!(chain.child().payload(), Some(&"frontend.pdf"));

    let effects = chain.tick(360);
    assert_eq!(
        effects,
        [
            ChainEffect {
                level: Level::Child,
                effect: DisclosureEffect::PayloadCleared,
            },
            ChainEffect {
                level: Level::Parent,
                effect: DisclosureEffect::PayloadCleared,
            },
        ]
    );
}

#[test]
fn child_closed_earlier_clears_independently() {
    let mut chain: DisclosureChain<&str, &str> =
        DisclosureChain::new(Disclosure::new(config()), Disclosure::new(config()));
    chain.open_parent(0, "project");
    chain.open_child(0, "backend.pdf");
    chain.close_child(100);
    assert!(chain.close_parent(200));

    let first = chain.tick(400);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].level, Level::Child);

    let second = chain.tick(500);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].level, Level::Parent);
}

#[test]
fn teardown_during_transition_prevents_late_updates() {
    let mut chain: DisclosureChain<&str, &str> = DisclosureChain::new(
        Disclosure::new(config()).with_anchor("project-tech-stack"),
        Disclosure::new(config()),
    );
    chain.open_parent(0, "project");
    chain.open_child(10, "ml.pdf");
    chain.close_parent(20);

    assert_eq!(chain.teardown(), 2);
    assert_eq!(chain.next_deadline(), None);
    assert!(chain.tick(u64::MAX).is_empty());
}
