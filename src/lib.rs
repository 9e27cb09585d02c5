//! Spring point fields for interactive effects.
//!
//! `springfield` animates a set of 2D points toward fixed rest positions while
//! they are pushed around by a pointer and disturbed by expanding ripple
//! impulses. It is the numeric core behind mesh ripple grids, particle sliders
//! and wobbly rings: the host owns rendering and input, and calls
//! [`SpringPointField::step`] once per frame.
//!
//! # Features
//!
//! - **Spring-to-rest**: damped explicit Euler, stable for validated stiffness
//! - **Pointer proximity**: repel or attract inside a hard-cutoff radius
//! - **Ripples**: expanding rings measured from rest positions, decaying to zero
//! - **Layouts**: grids with pinned boundaries, rings, free scatter
//! - **Observable**: monitor steps via the `StepObserver` trait or the `log` facade
//! - **`no_std` compatible**: works in embedded and WASM environments
//! - **`serde`** (optional): serialize configs, layouts and snapshots

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod impulse;
pub mod forces;
pub mod config;
pub mod layout;
pub mod field;
pub mod observer;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use point::Point;
pub use impulse::Impulse;
pub use config::{FieldConfig, PointerMode, MAX_STABLE_STIFFNESS};
pub use layout::{GridLayout, Layout, grid_with, ring, scatter};
pub use field::{SpringPointField, Snapshot, StepStats};
pub use observer::{StepObserver, NoOpStepObserver, LogStepObserver};
pub use error::FieldError;
