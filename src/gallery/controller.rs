// SPDX-License-Identifier: MPL-2.0
//! Per-instance gallery controller.
//!
//! Raw [`Input`]s are translated into [`Command`]s, which a single reducer
//! ([`GalleryController::update`]) applies to the navigation, modal and
//! suppression state. Every index change ends in a render step that pushes
//! the current slide into the image slots and refreshes the [`GalleryView`].

use super::command::{Command, GestureSurface, Input, Key};
use super::focus::{FocusHost, NodeId};
use super::gesture::{GestureRecognizer, SwipeDirection};
use super::image_slot::{ImageBinder, SlotState};
use super::markup::GalleryMarkup;
use super::modal::ModalSession;
use super::navigation::{Navigation, RenderRequest};
use super::scheduler::{GalleryTask, Scheduler};
use super::scroll_lock::ScrollLockRegistry;
use super::slide::{collect_slides, Slide};
use super::suppression::ClickSuppression;
use super::view::{GalleryView, SelectorView};
use crate::config::DEFAULT_ALT_PREFIX;
use crate::domain::{SuppressionWindow, SwipeThreshold};
use std::time::Instant;

/// Tunables shared by every gallery on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySettings {
    pub swipe_threshold: SwipeThreshold,
    pub suppression_window: SuppressionWindow,
    /// Prefix for generated alt text ("Image 3").
    pub alt_prefix: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            swipe_threshold: SwipeThreshold::default(),
            suppression_window: SuppressionWindow::default(),
            alt_prefix: DEFAULT_ALT_PREFIX.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct GalleryController {
    markup: GalleryMarkup,
    slides: Vec<Slide>,
    navigation: Navigation,
    modal: ModalSession,
    suppression: ClickSuppression,
    binder: ImageBinder,
    main_gestures: GestureRecognizer,
    modal_gestures: GestureRecognizer,
    scheduler: Scheduler,
    registry: ScrollLockRegistry,
    view: GalleryView,
    pending_scroll: Option<NodeId>,
}

impl GalleryController {
    /// Mounts a gallery on `markup` and renders its initial state.
    ///
    /// With no usable slide the instance enters its permanent empty state:
    /// placeholder shown, navigation hidden, activation disabled.
    pub fn mount(
        markup: GalleryMarkup,
        settings: &GallerySettings,
        registry: ScrollLockRegistry,
    ) -> Self {
        let slides = collect_slides(&markup.selectors, &settings.alt_prefix);
        let mut binder = ImageBinder::new();

        for slot in [markup.main_image, markup.modal_image()].into_iter().flatten() {
            binder.bind(slot);
        }
        for selector in &markup.selectors {
            if let Some(thumbnail) = selector.thumbnail {
                binder.bind(thumbnail);
                binder.set_image(
                    Some(thumbnail),
                    &selector.source,
                    selector.label.as_deref().unwrap_or_default(),
                );
            }
        }

        let mut controller = Self {
            navigation: Navigation::new(slides.len()),
            modal: ModalSession::new(markup.modal.is_some()),
            suppression: ClickSuppression::new(settings.suppression_window),
            binder,
            main_gestures: GestureRecognizer::new(settings.swipe_threshold),
            modal_gestures: GestureRecognizer::new(settings.swipe_threshold),
            scheduler: Scheduler::new(),
            registry,
            view: GalleryView::default(),
            pending_scroll: None,
            slides,
            markup,
        };

        if controller.slides.is_empty() {
            controller.render_empty();
        } else {
            controller.view.main_enabled = controller.markup.main_button.is_some();
            controller.view.thumbs_visible = controller.markup.thumbs_track.is_some();
            controller.view.nav_controls_visible = controller.navigation.can_step();
            if let Some(request) = controller.navigation.go_to(0, false) {
                controller.render(request);
            }
        }
        tracing::debug!(slides = controller.slides.len(), "gallery mounted");
        controller
    }

    /// Handles one raw input. Returns `true` when the gallery consumed it.
    pub fn handle(&mut self, input: Input, now: Instant, focus: &mut dyn FocusHost) -> bool {
        match input {
            Input::Click(node) => match self.translate_click(node) {
                Some(command) => {
                    self.update(command, now, focus);
                    true
                }
                // A swallowed post-swipe click still counts as handled.
                None => Some(node) == self.markup.main_button && !self.slides.is_empty(),
            },
            Input::Key(key) => match self.translate_key(key, focus.focused()) {
                Some(command) => {
                    self.update(command, now, focus);
                    true
                }
                None => false,
            },
            Input::Pointer { surface, input } => {
                if self.slides.is_empty() {
                    return false;
                }
                let (recognizer, gesture_surface) = if Some(surface) == self.markup.stage {
                    (&mut self.main_gestures, GestureSurface::Main)
                } else if Some(surface) == self.markup.modal_stage() {
                    (&mut self.modal_gestures, GestureSurface::Modal)
                } else {
                    return false;
                };
                if let Some(direction) = recognizer.handle(input) {
                    self.update(
                        Command::SwipeDetected {
                            surface: gesture_surface,
                            direction,
                        },
                        now,
                        focus,
                    );
                }
                true
            }
            Input::ImageLoaded { slot, source } => {
                if !self.is_current_source(slot, &source) {
                    return false;
                }
                self.binder.on_load(slot);
                true
            }
            Input::ImageFailed { slot, source } => {
                if !self.is_current_source(slot, &source) {
                    return false;
                }
                self.binder.on_error(slot);
                true
            }
        }
    }

    /// Applies one command to the gallery state.
    pub fn update(&mut self, command: Command, now: Instant, focus: &mut dyn FocusHost) {
        let request = match command {
            Command::SelectSlide(index) => self.navigation.go_to(index as i64, false),
            Command::RequestNext => self.navigation.next(),
            Command::RequestPrevious => self.navigation.previous(),
            Command::OpenModal => {
                if !self.slides.is_empty()
                    && self
                        .modal
                        .open(&*focus, &self.registry, &mut self.scheduler, now)
                {
                    self.view.modal_open = true;
                }
                None
            }
            Command::CloseModal => {
                if self.modal.close(focus, &mut self.scheduler) {
                    self.view.modal_open = false;
                }
                None
            }
            Command::SwipeDetected { surface, direction } => {
                if surface == GestureSurface::Main {
                    self.suppression.mark_swipe(&mut self.scheduler, now);
                }
                match direction {
                    SwipeDirection::Left => self.navigation.next(),
                    SwipeDirection::Right => self.navigation.previous(),
                }
            }
        };

        if let Some(request) = request {
            self.render(request);
        }
    }

    /// Runs every scheduled task due at `now`.
    pub fn tick(&mut self, now: Instant, focus: &mut dyn FocusHost) {
        for (id, task) in self.scheduler.take_due(now) {
            match task {
                GalleryTask::FocusModalClose => {
                    self.modal
                        .run_focus_task(id, self.markup.modal_close(), focus);
                }
                GalleryTask::ExpireClickSuppression => self.suppression.expire(id),
            }
        }
    }

    fn translate_click(&mut self, node: NodeId) -> Option<Command> {
        if self.slides.is_empty() {
            return None;
        }
        if let Some(index) = self.slide_index_for(node) {
            return Some(Command::SelectSlide(index));
        }
        if self.markup.all_prev().any(|prev| prev == node) {
            return Some(Command::RequestPrevious);
        }
        if self.markup.all_next().any(|next| next == node) {
            return Some(Command::RequestNext);
        }
        if Some(node) == self.markup.main_button {
            if self.suppression.take(&mut self.scheduler) {
                return None;
            }
            return Some(Command::OpenModal);
        }
        let on_scrim = self
            .markup
            .modal
            .as_ref()
            .is_some_and(|modal| modal.overlay == node);
        if on_scrim || Some(node) == self.markup.modal_close() {
            return Some(Command::CloseModal);
        }
        None
    }

    fn translate_key(&self, key: Key, focused: Option<NodeId>) -> Option<Command> {
        // Modal keys win over every other use while the overlay is open.
        if self.modal.is_open() {
            match key {
                Key::Escape => return Some(Command::CloseModal),
                Key::ArrowLeft => return Some(Command::RequestPrevious),
                Key::ArrowRight => return Some(Command::RequestNext),
                _ => {}
            }
        }
        if self.slides.is_empty() {
            return None;
        }
        let focused = focused?;

        if key.is_activation() {
            if let Some(index) = self.slide_index_for(focused) {
                return Some(Command::SelectSlide(index));
            }
            if Some(focused) == self.markup.main_button {
                return Some(Command::OpenModal);
            }
            if self.modal.is_open() && Some(focused) == self.markup.modal_close() {
                return Some(Command::CloseModal);
            }
            if self.markup.all_prev().any(|prev| prev == focused) {
                return Some(Command::RequestPrevious);
            }
            if self.markup.all_next().any(|next| next == focused) {
                return Some(Command::RequestNext);
            }
            return None;
        }

        if self.modal.is_open() || !self.markup.contains(focused) {
            return None;
        }
        match key {
            Key::ArrowLeft => Some(Command::RequestPrevious),
            Key::ArrowRight => Some(Command::RequestNext),
            _ => None,
        }
    }

    fn render(&mut self, request: RenderRequest) {
        let Some(slide) = self.slides.get(request.index) else {
            return;
        };
        let (source, alt, origin) = (
            slide.source().to_string(),
            slide.alt().to_string(),
            slide.origin(),
        );

        self.binder.set_image(self.markup.main_image, &source, &alt);
        self.binder
            .set_image(self.markup.modal_image(), &source, &alt);

        self.view.main_image_visible = self.markup.main_image.is_some();
        self.view.placeholder_visible = false;
        self.view.selectors = self
            .markup
            .selectors
            .iter()
            .map(|selector| {
                let active = selector.control == origin;
                SelectorView {
                    control: selector.control,
                    active,
                    current: active,
                }
            })
            .collect();

        if request.scroll_into_view {
            self.pending_scroll = Some(origin);
        }

        let label = self.navigation.position_label();
        self.view.counter_text = self.markup.counter.map(|_| label.clone());
        self.view.modal_counter_text = self.markup.modal_counter().map(|_| label);
    }

    fn render_empty(&mut self) {
        self.view = GalleryView {
            main_image_visible: false,
            placeholder_visible: self.markup.placeholder.is_some(),
            main_enabled: false,
            nav_controls_visible: false,
            thumbs_visible: false,
            modal_open: false,
            selectors: self
                .markup
                .selectors
                .iter()
                .map(|selector| SelectorView {
                    control: selector.control,
                    active: false,
                    current: false,
                })
                .collect(),
            counter_text: self.markup.counter.map(|_| self.navigation.position_label()),
            modal_counter_text: None,
        };
    }

    fn slide_index_for(&self, node: NodeId) -> Option<usize> {
        self.slides.iter().position(|slide| slide.origin() == node)
    }

    fn is_current_source(&self, slot: NodeId, source: &str) -> bool {
        self.binder
            .slot(slot)
            .is_some_and(|state| state.source == source)
    }

    /// Whether `node` is a control that takes focus when clicked.
    #[must_use]
    pub fn is_control(&self, node: NodeId) -> bool {
        self.markup
            .selectors
            .iter()
            .any(|selector| selector.control == node)
            || Some(node) == self.markup.main_button
            || Some(node) == self.markup.modal_close()
            || self.markup.all_prev().any(|prev| prev == node)
            || self.markup.all_next().any(|next| next == node)
            || self.markup.extra.contains(&node)
    }

    /// Whether `node` lies inside this gallery's boundary.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.markup.contains(node)
    }

    /// The selector to bring into view, consumed once.
    pub fn take_scroll_request(&mut self) -> Option<NodeId> {
        self.pending_scroll.take()
    }

    #[must_use]
    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    #[must_use]
    pub fn markup(&self) -> &GalleryMarkup {
        &self.markup
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.navigation.len()
    }

    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal.is_open()
    }

    #[must_use]
    pub fn is_click_suppressed(&self) -> bool {
        self.suppression.is_active()
    }

    /// State of an image slot (main, modal or thumbnail).
    #[must_use]
    pub fn image(&self, slot: NodeId) -> Option<&SlotState> {
        self.binder.slot(slot)
    }

    #[must_use]
    pub fn binder(&self) -> &ImageBinder {
        &self.binder
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduler.next_due()
    }

    #[must_use]
    pub fn has_pending_tasks(&self) -> bool {
        self.scheduler.has_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::focus::{FocusState, NodeAllocator};
    use crate::gallery::gesture::{PointerEvent, PointerInput};
    use crate::gallery::image_slot::FALLBACK_IMAGE_URL;
    use std::time::Duration;

    struct Harness {
        gallery: GalleryController,
        focus: FocusState,
        registry: ScrollLockRegistry,
        now: Instant,
    }

    fn harness(entries: &[(&str, &str)]) -> Harness {
        let mut nodes = NodeAllocator::new();
        let markup = GalleryMarkup::standard(&mut nodes, entries);
        let registry = ScrollLockRegistry::new();
        Harness {
            gallery: GalleryController::mount(markup, &GallerySettings::default(), registry.clone()),
            focus: FocusState::new(),
            registry,
            now: Instant::now(),
        }
    }

    fn five() -> Harness {
        harness(&[
            ("a.jpg", "A"),
            ("b.jpg", "B"),
            ("c.jpg", "C"),
            ("d.jpg", "D"),
            ("e.jpg", "E"),
        ])
    }

    impl Harness {
        fn send(&mut self, input: Input) -> bool {
            self.gallery.handle(input, self.now, &mut self.focus)
        }

        fn click(&mut self, node: NodeId) -> bool {
            self.send(Input::Click(node))
        }

        fn key(&mut self, key: Key) -> bool {
            self.send(Input::Key(key))
        }

        fn advance(&mut self, by: Duration) {
            self.now += by;
            self.gallery.tick(self.now, &mut self.focus);
        }

        fn swipe_main(&mut self, from_x: f32, to_x: f32) {
            let stage = self.gallery.markup().stage.expect("stage");
            self.send(Input::Pointer {
                surface: stage,
                input: PointerInput::Down(PointerEvent::mouse(from_x, 100.0)),
            });
            self.send(Input::Pointer {
                surface: stage,
                input: PointerInput::Up(PointerEvent::mouse(to_x, 100.0)),
            });
        }

        fn main_button(&self) -> NodeId {
            self.gallery.markup().main_button.expect("main button")
        }

        fn main_source(&self) -> String {
            let slot = self.gallery.markup().main_image.expect("main image");
            self.gallery.image(slot).expect("slot").source.clone()
        }
    }

    #[test]
    fn mount_renders_first_slide() {
        let h = five();
        assert_eq!(h.gallery.current_index(), 0);
        assert_eq!(h.main_source(), "a.jpg");
        assert_eq!(h.gallery.view().counter_text.as_deref(), Some("1 / 5"));
        assert_eq!(h.gallery.view().modal_counter_text.as_deref(), Some("1 / 5"));
        assert!(h.gallery.view().nav_controls_visible);
        assert!(!h.gallery.view().placeholder_visible);
    }

    #[test]
    fn mount_does_not_request_scroll() {
        let mut h = five();
        assert_eq!(h.gallery.take_scroll_request(), None);
    }

    #[test]
    fn previous_from_first_wraps() {
        let mut h = five();
        let prev = h.gallery.markup().prev[0];
        h.click(prev);
        assert_eq!(h.gallery.current_index(), 4);
        assert_eq!(h.main_source(), "e.jpg");
    }

    #[test]
    fn next_from_last_wraps() {
        let mut h = five();
        let last = h.gallery.markup().selectors[4].control;
        let next = h.gallery.markup().next[0];
        h.click(last);
        h.click(next);
        assert_eq!(h.gallery.current_index(), 0);
    }

    #[test]
    fn selector_click_does_not_scroll() {
        let mut h = five();
        let third = h.gallery.markup().selectors[2].control;
        h.click(third);
        assert_eq!(h.gallery.current_index(), 2);
        assert_eq!(h.gallery.take_scroll_request(), None);
        assert_eq!(h.gallery.view().active_selector(), Some(third));
    }

    #[test]
    fn button_navigation_requests_scroll() {
        let mut h = five();
        let next = h.gallery.markup().next[0];
        h.click(next);
        let second = h.gallery.markup().selectors[1].control;
        assert_eq!(h.gallery.take_scroll_request(), Some(second));
        assert_eq!(h.gallery.take_scroll_request(), None);
    }

    #[test]
    fn modal_prev_next_share_navigation() {
        let mut h = five();
        let modal_next = h.gallery.markup().modal.as_ref().expect("modal").next[0];
        h.click(modal_next);
        assert_eq!(h.gallery.current_index(), 1);
    }

    #[test]
    fn selector_views_mark_exactly_one_active() {
        let mut h = five();
        let next = h.gallery.markup().next[0];
        h.click(next);
        let view = h.gallery.view();
        assert_eq!(view.selectors.iter().filter(|s| s.active).count(), 1);
        assert!(view.selectors.iter().all(|s| s.active == s.current));
    }

    #[test]
    fn main_button_click_opens_modal() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);
        assert!(h.gallery.is_modal_open());
        assert!(h.gallery.view().modal_open);
        assert!(h.registry.is_locked());
    }

    #[test]
    fn focus_moves_to_close_on_next_tick() {
        let mut h = five();
        let main = h.main_button();
        h.focus.focus(main);
        h.click(main);
        assert_eq!(h.focus.focused(), Some(main));

        h.advance(Duration::ZERO);
        assert_eq!(h.focus.focused(), h.gallery.markup().modal_close());
    }

    #[test]
    fn escape_closes_modal_and_restores_focus() {
        let mut h = five();
        let main = h.main_button();
        h.focus.focus(main);
        h.click(main);
        h.advance(Duration::ZERO);

        assert!(h.key(Key::Escape));
        assert!(!h.gallery.is_modal_open());
        assert!(!h.registry.is_locked());
        assert_eq!(h.focus.focused(), Some(main));
    }

    #[test]
    fn scrim_click_closes_but_content_click_does_not() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);

        let image = h.gallery.markup().modal_image().expect("modal image");
        h.click(image);
        assert!(h.gallery.is_modal_open());

        let overlay = h.gallery.markup().modal.as_ref().expect("modal").overlay;
        h.click(overlay);
        assert!(!h.gallery.is_modal_open());
    }

    #[test]
    fn close_control_closes_modal() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);
        let close = h.gallery.markup().modal_close().expect("close");
        h.click(close);
        assert!(!h.gallery.is_modal_open());
    }

    #[test]
    fn enter_on_focused_close_closes_modal() {
        let mut h = five();
        let main = h.main_button();
        h.focus.focus(main);
        h.click(main);
        h.advance(Duration::ZERO);
        let close = h.gallery.markup().modal_close();
        assert_eq!(h.focus.focused(), close);

        assert!(h.key(Key::Enter));
        assert!(!h.gallery.is_modal_open());
        assert!(!h.registry.is_locked());
        assert_eq!(h.focus.focused(), Some(main));
    }

    #[test]
    fn space_on_focused_next_navigates() {
        let mut h = five();
        let next = h.gallery.markup().all_next().next().expect("next control");
        h.focus.focus(next);
        assert!(h.key(Key::Space));
        assert_eq!(h.gallery.current_index(), 1);
        assert!(h.gallery.take_scroll_request().is_some());
    }

    #[test]
    fn enter_on_focused_prev_wraps_to_last() {
        let mut h = five();
        let prev = h.gallery.markup().all_prev().next().expect("prev control");
        h.focus.focus(prev);
        assert!(h.key(Key::Enter));
        assert_eq!(h.gallery.current_index(), 4);
    }

    #[test]
    fn enter_on_modal_next_navigates() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);
        let next = h
            .gallery
            .markup()
            .modal
            .as_ref()
            .and_then(|modal| modal.next.first().copied())
            .expect("modal next");
        h.focus.focus(next);
        assert!(h.key(Key::Enter));
        assert_eq!(h.gallery.current_index(), 1);
        assert!(h.gallery.is_modal_open());
    }

    #[test]
    fn arrows_navigate_while_modal_open_regardless_of_focus() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);
        h.focus.blur();

        assert!(h.key(Key::ArrowRight));
        assert_eq!(h.gallery.current_index(), 1);
        assert!(h.key(Key::ArrowLeft));
        assert!(h.key(Key::ArrowLeft));
        assert_eq!(h.gallery.current_index(), 4);
    }

    #[test]
    fn arrows_need_focus_inside_gallery_when_modal_closed() {
        let mut h = five();
        assert!(!h.key(Key::ArrowRight));
        assert_eq!(h.gallery.current_index(), 0);

        let thumb = h.gallery.markup().selectors[0].control;
        h.focus.focus(thumb);
        assert!(h.key(Key::ArrowRight));
        assert_eq!(h.gallery.current_index(), 1);
    }

    #[test]
    fn arrow_on_main_button_navigates_once() {
        let mut h = five();
        let main = h.main_button();
        h.focus.focus(main);
        h.key(Key::ArrowRight);
        assert_eq!(h.gallery.current_index(), 1);
    }

    #[test]
    fn enter_on_selector_selects_without_scroll() {
        let mut h = five();
        let fourth = h.gallery.markup().selectors[3].control;
        h.focus.focus(fourth);
        assert!(h.key(Key::Enter));
        assert_eq!(h.gallery.current_index(), 3);
        assert_eq!(h.gallery.take_scroll_request(), None);
    }

    #[test]
    fn space_on_main_button_opens_modal() {
        let mut h = five();
        let main = h.main_button();
        h.focus.focus(main);
        assert!(h.key(Key::Space));
        assert!(h.gallery.is_modal_open());
    }

    #[test]
    fn swipe_left_on_stage_advances_and_suppresses_click() {
        let mut h = five();
        h.swipe_main(200.0, 100.0);
        assert_eq!(h.gallery.current_index(), 1);
        assert!(h.gallery.is_click_suppressed());

        let main = h.main_button();
        assert!(h.click(main));
        assert!(!h.gallery.is_modal_open());
        assert!(!h.gallery.is_click_suppressed());
    }

    #[test]
    fn swipe_right_goes_back() {
        let mut h = five();
        h.swipe_main(100.0, 200.0);
        assert_eq!(h.gallery.current_index(), 4);
    }

    #[test]
    fn click_after_suppression_window_opens_modal() {
        let mut h = five();
        h.swipe_main(200.0, 100.0);
        h.advance(Duration::from_millis(260));

        let main = h.main_button();
        h.click(main);
        assert!(h.gallery.is_modal_open());
    }

    #[test]
    fn click_just_inside_window_is_swallowed() {
        let mut h = five();
        h.swipe_main(200.0, 100.0);
        h.advance(Duration::from_millis(259));

        let main = h.main_button();
        h.click(main);
        assert!(!h.gallery.is_modal_open());
    }

    #[test]
    fn modal_swipe_navigates_without_suppression() {
        let mut h = five();
        let main = h.main_button();
        h.click(main);
        let modal_stage = h.gallery.markup().modal_stage().expect("modal stage");
        h.send(Input::Pointer {
            surface: modal_stage,
            input: PointerInput::Down(PointerEvent::touch(7, 300.0, 50.0)),
        });
        h.send(Input::Pointer {
            surface: modal_stage,
            input: PointerInput::Up(PointerEvent::touch(7, 200.0, 60.0)),
        });
        assert_eq!(h.gallery.current_index(), 1);
        assert!(!h.gallery.is_click_suppressed());
    }

    #[test]
    fn empty_gallery_is_disabled() {
        let mut h = harness(&[]);
        let view = h.gallery.view().clone();
        assert!(!view.nav_controls_visible);
        assert!(!view.main_enabled);
        assert!(view.placeholder_visible);
        assert!(!view.main_image_visible);
        assert!(!view.thumbs_visible);
        assert_eq!(view.counter_text.as_deref(), Some("0 / 0"));

        let main = h.main_button();
        h.click(main);
        assert!(!h.gallery.is_modal_open());

        h.gallery.update(Command::SelectSlide(3), h.now, &mut h.focus);
        h.gallery.update(Command::RequestNext, h.now, &mut h.focus);
        assert_eq!(h.gallery.current_index(), 0);
        h.gallery.update(Command::OpenModal, h.now, &mut h.focus);
        assert!(!h.registry.is_locked());
    }

    #[test]
    fn selectors_without_sources_leave_gallery_empty() {
        let h = harness(&[("", "A"), ("", "B")]);
        assert_eq!(h.gallery.slide_count(), 0);
        assert!(h.gallery.view().placeholder_visible);
    }

    #[test]
    fn single_slide_hides_navigation_but_opens_modal() {
        let mut h = harness(&[("only.jpg", "Only")]);
        assert!(!h.gallery.view().nav_controls_visible);
        assert_eq!(h.gallery.view().counter_text.as_deref(), Some("1 / 1"));

        let main = h.main_button();
        h.click(main);
        assert!(h.gallery.is_modal_open());
        let modal_image = h.gallery.markup().modal_image().expect("modal image");
        assert_eq!(
            h.gallery.image(modal_image).map(|s| s.source.as_str()),
            Some("only.jpg")
        );
    }

    #[test]
    fn open_twice_holds_one_lock() {
        let mut h = five();
        h.gallery.update(Command::OpenModal, h.now, &mut h.focus);
        h.gallery.update(Command::OpenModal, h.now, &mut h.focus);
        assert_eq!(h.registry.holders_count(), 1);

        h.gallery.update(Command::CloseModal, h.now, &mut h.focus);
        h.gallery.update(Command::CloseModal, h.now, &mut h.focus);
        assert_eq!(h.registry.holders_count(), 0);
    }

    #[test]
    fn image_failure_swaps_in_fallback_once() {
        let mut h = five();
        let slot = h.gallery.markup().main_image.expect("main image");
        h.send(Input::ImageFailed {
            slot,
            source: "a.jpg".to_string(),
        });
        assert_eq!(h.main_source(), FALLBACK_IMAGE_URL);

        h.send(Input::ImageFailed {
            slot,
            source: FALLBACK_IMAGE_URL.to_string(),
        });
        let state = h.gallery.image(slot).expect("slot");
        assert_eq!(state.source, FALLBACK_IMAGE_URL);
        assert!(!state.loading);
    }

    #[test]
    fn stale_image_events_are_ignored() {
        let mut h = five();
        let slot = h.gallery.markup().main_image.expect("main image");
        let next = h.gallery.markup().next[0];
        h.click(next);

        assert!(!h.send(Input::ImageFailed {
            slot,
            source: "a.jpg".to_string(),
        }));
        assert_eq!(h.main_source(), "b.jpg");
    }

    #[test]
    fn thumbnails_are_loaded_at_mount() {
        let h = five();
        let thumb = h.gallery.markup().selectors[1].thumbnail.expect("thumbnail");
        let state = h.gallery.image(thumb).expect("thumbnail slot");
        assert_eq!(state.source, "b.jpg");
        assert!(state.loading);
    }
}
