// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parent → child disclosure pair with cascade close.

use alloc::vec::Vec;

use crate::node::{Disclosure, DisclosureEffect};

/// Which node of a [`DisclosureChain`] produced an effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// The outer panel.
    Parent,
    /// The panel nested inside the parent.
    Child,
}

/// An effect tagged with the node that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainEffect<A> {
    /// Node the effect belongs to.
    pub level: Level,
    /// The effect itself.
    pub effect: DisclosureEffect<A>,
}

/// Two nested disclosures where the child only exists inside an open parent.
///
/// Rules:
/// - The child can only be opened while the parent is open.
/// - Closing the parent closes the child first; both hide synchronously and
///   each schedules its own payload clear.
/// - Every parent open closes an open child, even a reopen with the same
///   payload.
///
/// Together these keep "child open ⇒ parent open" true after every command.
#[derive(Clone, Debug)]
pub struct DisclosureChain<P, C, A = &'static str> {
    parent: Disclosure<P, A>,
    child: Disclosure<C, A>,
}

impl<P, C, A: Clone + PartialEq> DisclosureChain<P, C, A> {
    /// Creates a chain from two closed disclosures.
    #[must_use]
    pub fn new(parent: Disclosure<P, A>, child: Disclosure<C, A>) -> Self {
        Self { parent, child }
    }

    /// Returns the parent node.
    #[must_use]
    pub fn parent(&self) -> &Disclosure<P, A> {
        &self.parent
    }

    /// Returns the child node.
    #[must_use]
    pub fn child(&self) -> &Disclosure<C, A> {
        &self.child
    }

    /// Opens the parent with `payload`, closing any open child first.
    pub fn open_parent(&mut self, now: u64, payload: P) {
        self.child.close(now);
        self.parent.open(now, payload);
    }

    /// Opens the child with `payload` if the parent is open.
    ///
    /// Returns `false` and leaves the child untouched otherwise.
    pub fn open_child(&mut self, now: u64, payload: C) -> bool {
        if !self.parent.is_open() {
            return false;
        }
        self.child.open(now, payload);
        true
    }

    /// Closes the child only.
    pub fn close_child(&mut self, now: u64) -> bool {
        self.child.close(now)
    }

    /// Closes the child (if open) and then the parent.
    ///
    /// Returns `true` if the parent was open.
    pub fn close_parent(&mut self, now: u64) -> bool {
        self.child.close(now);
        self.parent.close(now)
    }

    /// Returns the earliest pending deadline of either node.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.parent.next_deadline(), self.child.next_deadline()) {
            (Some(p), Some(c)) => Some(p.min(c)),
            (p, c) => p.or(c),
        }
    }

    /// Fires every timer due at `now` across both nodes in deadline order.
    ///
    /// On equal deadlines the child's effect comes first.
    pub fn tick(&mut self, now: u64) -> Vec<ChainEffect<A>> {
        let mut effects = Vec::new();
        loop {
            let level = match (self.parent.next_deadline(), self.child.next_deadline()) {
                (Some(p), Some(c)) if c <= p => Level::Child,
                (Some(_), _) => Level::Parent,
                (None, Some(_)) => Level::Child,
                (None, None) => break,
            };
            let fired = match level {
                Level::Parent => self.parent.fire_next(now),
                Level::Child => self.child.fire_next(now),
            };
            match fired {
                Some(effect) => effects.push(ChainEffect { level, effect }),
                None => break,
            }
        }
        effects
    }

    /// Cancels all timers of both nodes and closes them without effects.
    ///
    /// Returns the number of cancelled timers.
    pub fn teardown(&mut self) -> usize {
        self.child.teardown() + self.parent.teardown()
    }
}
