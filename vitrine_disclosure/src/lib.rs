// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Disclosure: panels and modals that animate out before they let go.
//!
//! A disclosure is a togglable panel. Closing it is a two-step affair: the
//! panel is hidden right away (so it stops being interactive and its exit
//! transition can start), but its payload (the data that drives what the panel
//! renders) is kept until the transition has had time to finish. Only then is
//! it cleared.
//!
//! This crate models that lifecycle as explicit state plus cancellable timers:
//!
//! - [`Disclosure`]: one node, `Closed → Open → Closing → Closed`.
//! - [`DisclosureChain`]: a parent node with one nested child node, where the
//!   child can only be open inside an open parent, and closing the parent
//!   cascades to the child.
//!
//! Nothing here reads a clock or touches a UI toolkit. Callers pass the current
//! time (milliseconds) to every command, call `tick` from their frame or timer
//! callback, and apply the returned [`DisclosureEffect`]s.
//!
//! ## Nested panels
//!
//! ```rust
//! use vitrine_disclosure::{
//!     ChainEffect, Disclosure, DisclosureChain, DisclosureConfig, DisclosureEffect, Level,
//! };
//!
//! let config = DisclosureConfig::default();
//! let mut panels: DisclosureChain<&str, &str> = DisclosureChain::new(
//!     Disclosure::new(config).with_anchor("project-tech-stack"),
//!     Disclosure::new(config),
//! );
//!
//! panels.open_parent(0, "Storefront");
//! // The parent asks to be scrolled into view once it has mounted.
//! assert_eq!(
//!     panels.tick(100),
//!     [ChainEffect {
//!         level: Level::Parent,
//!         effect: DisclosureEffect::ScrollToAnchor("project-tech-stack"),
//!     }]
//! );
//!
//! panels.open_child(200, "backend.pdf");
//!
//! // Closing the parent hides both immediately.
//! panels.close_parent(1_000);
//! assert!(!panels.parent().is_open());
//! assert!(!panels.child().is_open());
//!
//! // Payloads go away once the exit transition is over.
//! assert_eq!(panels.tick(1_300).len(), 2);
//! assert!(panels.child().payload().is_none());
//! ```
//!
//! ## Reopen before the clear
//!
//! Reopening a closing panel cancels its pending clear, so a late timer can
//! never drop the fresh payload:
//!
//! ```rust
//! use vitrine_disclosure::{Disclosure, DisclosureConfig};
//!
//! let mut panel: Disclosure<u32> = Disclosure::new(DisclosureConfig::default());
//! panel.open(0, 1);
//! panel.close(100);
//! panel.open(150, 2);
//!
//! panel.tick(10_000);
//! assert_eq!(panel.payload(), Some(&2));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod chain;
mod node;

pub use chain::{ChainEffect, DisclosureChain, Level};
pub use node::{Disclosure, DisclosureConfig, DisclosureEffect, DisclosureState};
