// Copyright 2025 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Event State: small pointer-gesture state machines.
//!
//! Two trackers, both pure state with no timers or toolkit dependencies:
//!
//! - [`MultiClick`]: classifies successive presses as single or double
//!   clicks by the elapsed time between them.
//! - [`PanDrag`]: turns motion events while a drag button is held into
//!   screen-space pan deltas.
//!
//! Timestamps are caller-supplied milliseconds, so the host event loop owns
//! the clock and tests stay deterministic.
//!
//! This crate is `no_std` compatible.

#![no_std]

mod click;
mod drag;

pub use click::{ClickKind, DOUBLE_CLICK_MS, MultiClick};
pub use drag::PanDrag;
