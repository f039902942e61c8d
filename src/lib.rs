// SPDX-License-Identifier: MPL-2.0
//! `lens_gallery` is an image gallery built with the Iced GUI framework.
//!
//! The gallery logic in [`gallery`] is toolkit-independent: navigation,
//! swipe gestures, the full-screen modal, image fallback and focus
//! handling are plain state machines driven by a [`gallery::Page`]. The
//! [`app`] module hosts one gallery in an Iced window.

#![doc(html_root_url = "https://docs.rs/lens_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod domain;
pub mod error;
pub mod fallback;
pub mod gallery;
pub mod ui;
