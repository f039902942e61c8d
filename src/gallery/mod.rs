// SPDX-License-Identifier: MPL-2.0
//! Headless gallery core.
//!
//! Everything here is independent of any toolkit: the page layer supplies
//! markup handles, focus and raw input, and reads back the rendered
//! [`GalleryView`] and image slot states.

pub mod command;
pub mod controller;
pub mod focus;
pub mod gesture;
pub mod image_slot;
pub mod markup;
pub mod modal;
pub mod navigation;
pub mod page;
pub mod scheduler;
pub mod scroll_lock;
pub mod slide;
pub mod suppression;
pub mod view;

pub use command::{Command, GestureSurface, Input, Key};
pub use controller::{GalleryController, GallerySettings};
pub use focus::{FocusHost, FocusState, NodeAllocator, NodeId};
pub use gesture::{GestureRecognizer, PointerButton, PointerEvent, PointerInput, SwipeDirection};
pub use image_slot::{ImageBinder, SlotState, FALLBACK_IMAGE_URL};
pub use markup::{GalleryMarkup, ModalMarkup, SelectorMarkup};
pub use navigation::{normalize, Navigation};
pub use page::{GalleryId, Page};
pub use scroll_lock::{ScrollLockGuard, ScrollLockRegistry};
pub use slide::Slide;
pub use view::{GalleryView, SelectorView};
