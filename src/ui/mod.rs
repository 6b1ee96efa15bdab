// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Frame
//!
//! - [`shell`] - Sidebar, header and mobile drawer around the page
//! - [`page`] - Renders documentation pages and holds per-page UI state
//! - [`code_block`] - Copyable code samples with a timed acknowledgment
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark theme state and color schemes
//! - [`icons`] - SVG icon rendering

pub mod code_block;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod page;
pub mod shell;
pub mod styles;
pub mod theming;
