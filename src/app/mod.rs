// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` owns a single-gallery [`Page`] built from a scanned directory
//! and translates iced messages into page input. Image loads are probed
//! off-thread and reported back as load or error events.

mod message;
pub mod paths;
mod probe;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::directory_scanner::{self, GalleryEntry};
use crate::fallback;
use crate::gallery::{FocusHost, GalleryId, NodeId, Page, ScrollLockRegistry};
use iced::widget::image;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

const APP_TITLE: &str = "Lens Gallery";

/// Root Iced application state.
pub struct App {
    page: Page,
    gallery: GalleryId,
    show_thumbnails: bool,
    fallback: Option<image::Handle>,
    cursor_positions: HashMap<NodeId, Point>,
    pressed: Option<NodeId>,
    probes_in_flight: HashSet<(NodeId, u64)>,
    /// Warning shown above the gallery (bad config, unreadable directory).
    status: Option<String>,
    directory: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("directory", &self.directory)
            .field("slides", &self.page.gallery(self.gallery).slide_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: fallback::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, scans the requested directory and mounts the gallery.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);
        let (config, config_warning) = config::load();
        let sort_order = config.display.sort_order.unwrap_or_default();

        let directory = flags.directory.map(PathBuf::from);
        let mut status = config_warning;
        let entries = match &directory {
            Some(dir) => directory_scanner::scan_directory(dir, sort_order).unwrap_or_else(|err| {
                tracing::warn!(directory = %dir.display(), %err, "could not scan directory");
                status = Some(err.to_string());
                Vec::new()
            }),
            None => Vec::new(),
        };

        let mut app = Self::build(&config, &entries, ScrollLockRegistry::global().clone());
        app.status = status;
        app.directory = directory;
        let task = app.finish();
        (app, task)
    }

    /// Mounts a gallery for `entries` on a fresh page.
    fn build(config: &Config, entries: &[GalleryEntry], registry: ScrollLockRegistry) -> Self {
        let mut page = Page::with_registry(config.gallery_settings(), registry);
        let markup = directory_scanner::build_markup(page.nodes_mut(), entries);
        let gallery = page.mount(markup);

        let fallback = fallback::fallback_handle()
            .map_err(|err| tracing::warn!(%err, "fallback artwork unavailable"))
            .ok();

        tracing::info!(slides = entries.len(), "gallery mounted");

        Self {
            page,
            gallery,
            show_thumbnails: config
                .display
                .show_thumbnails
                .unwrap_or(config::DEFAULT_SHOW_THUMBNAILS),
            fallback,
            cursor_positions: HashMap::new(),
            pressed: None,
            probes_in_flight: HashSet::new(),
            status: None,
            directory: None,
        }
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            page: &mut self.page,
            gallery: self.gallery,
            cursor_positions: &mut self.cursor_positions,
            pressed: &mut self.pressed,
            probes_in_flight: &mut self.probes_in_flight,
        }
    }

    fn finish(&mut self) -> Task<Message> {
        update::finish(&mut self.context())
    }

    fn title(&self) -> String {
        let gallery = self.page.gallery(self.gallery);
        match gallery.slides().get(gallery.current_index()) {
            Some(slide) => format!("{} - {APP_TITLE}", slide.alt()),
            _ => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.page.has_pending_tasks()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle_message(&mut self.context(), message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: self.page.gallery(self.gallery),
            show_thumbnails: self.show_thumbnails,
            fallback: self.fallback.as_ref(),
            focused: self.page.focus().focused(),
            scroll_locked: self.page.is_scroll_locked(),
            status: self.status.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Key;
    use std::path::PathBuf;

    fn entries(names: &[&str]) -> Vec<GalleryEntry> {
        names
            .iter()
            .map(|name| GalleryEntry {
                path: PathBuf::from(format!("/photos/{name}")),
                label: (*name).to_string(),
            })
            .collect()
    }

    fn app_with(names: &[&str]) -> App {
        App::build(
            &Config::default(),
            &entries(names),
            ScrollLockRegistry::new(),
        )
    }

    fn gallery(app: &App) -> &crate::gallery::GalleryController {
        app.page.gallery(app.gallery)
    }

    #[test]
    fn title_names_current_slide() {
        let app = app_with(&["a.jpg", "b.jpg"]);
        assert_eq!(app.title(), "a.jpg - Lens Gallery");
    }

    #[test]
    fn empty_gallery_uses_plain_title() {
        let app = app_with(&[]);
        assert_eq!(app.title(), APP_TITLE);
        assert_eq!(gallery(&app).view().counter_text.as_deref(), Some("0 / 0"));
    }

    #[test]
    fn clicking_thumbnail_selects_slide_and_focuses_it() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let thumb = gallery(&app).markup().selectors[2].control;

        let _ = app.update(Message::Click(thumb));
        assert_eq!(gallery(&app).current_index(), 2);
        assert_eq!(app.page.focus().focused(), Some(thumb));
        assert_eq!(app.title(), "c.jpg - Lens Gallery");
    }

    #[test]
    fn arrow_keys_navigate_after_focusing_gallery() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let thumb = gallery(&app).markup().selectors[0].control;

        let _ = app.update(Message::Key(Key::ArrowRight));
        assert_eq!(gallery(&app).current_index(), 0);

        let _ = app.update(Message::Click(thumb));
        let _ = app.update(Message::Key(Key::ArrowLeft));
        assert_eq!(gallery(&app).current_index(), 2);
    }

    #[test]
    fn drag_on_stage_swipes_without_opening_modal() {
        let mut app = app_with(&["a.jpg", "b.jpg", "c.jpg"]);
        let stage = gallery(&app).markup().stage.expect("stage");

        let _ = app.update(Message::CursorMoved {
            surface: stage,
            position: Point::new(200.0, 100.0),
        });
        let _ = app.update(Message::PointerPressed(stage));
        let _ = app.update(Message::CursorMoved {
            surface: stage,
            position: Point::new(100.0, 104.0),
        });
        let _ = app.update(Message::PointerReleased(stage));

        assert_eq!(gallery(&app).current_index(), 1);
        assert!(!gallery(&app).is_modal_open());
        assert!(!gallery(&app).is_click_suppressed());
    }

    #[test]
    fn press_and_release_on_stage_opens_modal() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        let stage = gallery(&app).markup().stage.expect("stage");

        let _ = app.update(Message::PointerPressed(stage));
        let _ = app.update(Message::PointerReleased(stage));

        assert!(gallery(&app).is_modal_open());
        assert!(app.page.is_scroll_locked());

        let _ = app.update(Message::Key(Key::Escape));
        assert!(!gallery(&app).is_modal_open());
        assert!(!app.page.is_scroll_locked());
    }

    #[test]
    fn release_without_press_is_not_a_click() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        let stage = gallery(&app).markup().stage.expect("stage");

        let _ = app.update(Message::PointerReleased(stage));
        assert!(!gallery(&app).is_modal_open());
    }

    #[test]
    fn failed_probe_substitutes_fallback() {
        let mut app = app_with(&["a.jpg"]);
        let slot = gallery(&app).markup().main_image.expect("main image");
        let state = gallery(&app).image(slot).expect("bound slot").clone();

        let _ = app.update(Message::ImageProbed {
            slot,
            source: state.source.clone(),
            generation: state.generation,
            ok: false,
        });

        let state = gallery(&app).image(slot).expect("bound slot");
        assert!(state.shows_fallback());
        assert!(state.loading);
    }

    #[test]
    fn successful_probe_clears_loading() {
        let mut app = app_with(&["a.jpg"]);
        let slot = gallery(&app).markup().main_image.expect("main image");
        let state = gallery(&app).image(slot).expect("bound slot").clone();

        let _ = app.update(Message::ImageProbed {
            slot,
            source: state.source,
            generation: state.generation,
            ok: true,
        });

        assert!(!gallery(&app).image(slot).expect("bound slot").loading);
    }

    #[test]
    fn build_starts_one_probe_per_loading_slot() {
        let mut app = app_with(&["a.jpg", "b.jpg"]);
        let _ = app.finish();
        // main, modal and two thumbnails
        assert_eq!(app.probes_in_flight.len(), 4);

        let _ = app.finish();
        assert_eq!(app.probes_in_flight.len(), 4);
    }

    #[test]
    fn thumbnails_follow_config() {
        let config = Config {
            display: config::DisplayConfig {
                show_thumbnails: Some(false),
                ..config::DisplayConfig::default()
            },
            ..Config::default()
        };
        let app = App::build(&config, &entries(&["a.jpg"]), ScrollLockRegistry::new());
        assert!(!app.show_thumbnails);
    }
}
