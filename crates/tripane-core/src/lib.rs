#![forbid(unsafe_code)]

//! Core: pane geometry primitives and animation plumbing.
//!
//! # Role in tripane
//! `tripane-core` is the leaf layer. It names the three fixed pane slots and
//! the two device orientations, describes the translate/resize instructions
//! handed to a host's animation player, and provides the tick-driven timer
//! used to bound how long a transition may stay in flight.
//!
//! # How it fits in the system
//! `tripane-layout` owns the visibility state machine and decides *which*
//! instructions to emit and *when*. Nothing in this crate knows about
//! visibility states, so hosts can reuse the instruction types and sinks
//! with their own renderers.

pub mod animation;
pub mod geometry;
