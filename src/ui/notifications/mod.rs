// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Nothing in the documentation shell is fatal, so recovered failures (an
//! unreadable preference file, a failed write, a refused clipboard) surface
//! here as short-lived toasts instead of dialogs.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("notification.copyFailed"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```
//!
//! Max visible toasts: 3 (others are queued), shown bottom-right.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
