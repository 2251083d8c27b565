// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `#[wasm_bindgen]` surface and DOM event wiring.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::mem;
use std::rc::Rc;

use js_sys::{Function, Reflect};
use kurbo::Point;
use understory_carousel::gesture::TouchMove;
use understory_carousel::{Carousel, CarouselOptions, EventResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlElement, TouchEvent, Window};

use crate::capabilities::{Capabilities, Strategy, TransitionFlavor};
use crate::dom::DomHost;
use crate::options::JsOptionValues;
use crate::wiring::{
    Delivery, GestureListeners, ListenerChange, TickScheduler, TransitionEvents, drain_tick,
    listener,
};

type TouchClosure = Closure<dyn FnMut(TouchEvent)>;
type EventClosure = Closure<dyn FnMut(Event)>;

/// User hooks taken from the options object.
#[derive(Default)]
struct JsHooks {
    /// `callback(index, slide)`
    callback: Option<Function>,
    /// `transitionEnd(event, index, slide)`
    transition_end: Option<Function>,
}

/// Listeners installed for one carousel.
///
/// Each closure holds a strong reference to [`Shared`], so the carousel stays
/// alive while it is wired to the page. [`TouchSlide::destroy`] detaches and
/// drops them.
#[derive(Default)]
struct Listeners {
    touch_start: Option<TouchClosure>,
    touch_move: Option<TouchClosure>,
    touch_end: Option<TouchClosure>,
    transition_end: Option<(EventClosure, &'static [&'static str])>,
    resize: Option<EventClosure>,
    resize_only: bool,
}

struct Shared {
    window: Window,
    carousel: RefCell<Carousel<DomHost>>,
    hooks: JsHooks,
    transition_events: RefCell<TransitionEvents<Event>>,
    scheduler: Cell<TickScheduler>,
    gesture: Cell<GestureListeners>,
    listeners: RefCell<Listeners>,
}

/// A touch-swipe carousel attached to a DOM container.
///
/// Created by [`touch_slide`]. The first element child of the container is
/// the strip; its element children are the slides.
#[wasm_bindgen]
pub struct TouchSlide {
    shared: Rc<Shared>,
}

impl fmt::Debug for TouchSlide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("TouchSlide");
        if let Ok(carousel) = self.shared.carousel.try_borrow() {
            debug
                .field("index", &carousel.index())
                .field("enabled", &carousel.is_enabled());
        }
        debug.finish_non_exhaustive()
    }
}

/// Attaches a carousel to `container`.
///
/// Returns `undefined` when the container is missing or has no strip element.
/// The carousel keeps working when the returned handle is dropped; call
/// `destroy()` on it to detach from the page.
/// Recognized options: `index`, `speed`, `space`, `disableScroll`,
/// `stopPropagation`, `wrap`, `callback(index, slide)` and
/// `transitionEnd(event, index, slide)`.
#[wasm_bindgen(js_name = touchSlide)]
pub fn touch_slide(container: Option<HtmlElement>, options: JsValue) -> Option<TouchSlide> {
    let window = web_sys::window()?;
    let capabilities = detect_capabilities(&window);
    let host = DomHost::new(container?, capabilities.transitions)?;
    let (options, hooks) = read_options(&options);
    let strategy = capabilities.strategy();
    log::debug!("touch slide wiring: {strategy:?}");

    let shared = Rc::new(Shared {
        window,
        carousel: RefCell::new(Carousel::new(host, options)),
        hooks,
        transition_events: RefCell::new(TransitionEvents::default()),
        scheduler: Cell::new(TickScheduler::default()),
        gesture: Cell::new(GestureListeners::default()),
        listeners: RefCell::new(Listeners::default()),
    });
    if let Err(err) = attach(&shared, strategy) {
        log::warn!("touch slide listeners not attached: {err:?}");
    }
    // Deliver the initial setup notification.
    schedule_tick(&shared);
    Some(TouchSlide { shared })
}

#[wasm_bindgen]
impl TouchSlide {
    /// Moves to the following slide.
    pub fn next(&self) {
        let result = self.shared.carousel.borrow_mut().next();
        if let Err(err) = result {
            log::debug!("next: {err}");
        }
        schedule_tick(&self.shared);
    }

    /// Moves to the preceding slide.
    pub fn prev(&self) {
        let result = self.shared.carousel.borrow_mut().prev();
        if let Err(err) = result {
            log::debug!("prev: {err}");
        }
        schedule_tick(&self.shared);
    }

    /// Moves to slide `to`, animating over `speed` milliseconds or the
    /// configured speed.
    pub fn slide(&self, to: u32, speed: Option<u32>) {
        let result = self
            .shared
            .carousel
            .borrow_mut()
            .slide(to as usize, speed);
        if let Err(err) = result {
            log::debug!("slide({to}): {err}");
        }
        schedule_tick(&self.shared);
    }

    /// Active slide index.
    #[wasm_bindgen(getter)]
    pub fn index(&self) -> u32 {
        let index = self.shared.carousel.borrow().index();
        u32::try_from(index).unwrap_or(u32::MAX)
    }

    /// Whether the carousel found enough slides to be interactive.
    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool {
        self.shared.carousel.borrow().is_enabled()
    }

    /// Removes every listener from the page. The carousel no longer reacts to
    /// touches, resizes or transitions; `next`, `prev` and `slide` still work.
    pub fn destroy(&self) {
        let shared = &self.shared;
        // `detach` below also removes the per-gesture listeners.
        let _ = update_gesture(shared, GestureListeners::after_touch_end);
        let listeners = mem::take(&mut *shared.listeners.borrow_mut());
        let strip = shared.carousel.borrow().host().strip().clone();
        if let Err(err) = listeners.detach(&strip, &shared.window) {
            log::warn!("touch slide listeners not detached: {err:?}");
            // The page may still call them.
            mem::forget(listeners);
        }
    }
}

fn read_options(value: &JsValue) -> (CarouselOptions, JsHooks) {
    if !value.is_object() {
        return (CarouselOptions::default(), JsHooks::default());
    }
    let get = |key: &str| {
        Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    };
    let number = |key: &str| get(key).and_then(|v| v.as_f64());
    let flag = |key: &str| get(key).is_some_and(|v| v.is_truthy());
    let function = |key: &str| get(key).and_then(|v| v.dyn_into::<Function>().ok());

    let values = JsOptionValues {
        index: number("index"),
        speed: number("speed"),
        space: number("space"),
        disable_scroll: flag("disableScroll"),
        stop_propagation: flag("stopPropagation"),
        wrap: flag("wrap"),
    };
    let hooks = JsHooks {
        callback: function("callback"),
        transition_end: function("transitionEnd"),
    };
    (values.to_options(), hooks)
}

fn detect_capabilities(window: &Window) -> Capabilities {
    fn has(target: &JsValue, key: &str) -> bool {
        Reflect::has(target, &JsValue::from_str(key)).unwrap_or(false)
    }

    let transitions = window
        .document()
        .and_then(|document| document.create_element("div").ok())
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .and_then(|element| {
            let style = element.style();
            TransitionFlavor::detect(|property| {
                Reflect::get(&style, &JsValue::from_str(property))
                    .is_ok_and(|value| !value.is_undefined())
            })
        });
    Capabilities {
        event_listeners: has(window, "addEventListener"),
        touch: has(window, "ontouchstart"),
        transitions,
    }
}

fn handler<E>(shared: &Rc<Shared>, f: fn(&Rc<Shared>, &E)) -> Closure<dyn FnMut(E)>
where
    E: FromWasmAbi + 'static,
{
    Closure::wrap(Box::new(listener(shared, f)) as Box<dyn FnMut(E)>)
}

fn update_gesture(
    shared: &Shared,
    step: impl FnOnce(&mut GestureListeners) -> Option<ListenerChange>,
) -> Option<ListenerChange> {
    let mut gesture = shared.gesture.get();
    let change = step(&mut gesture);
    shared.gesture.set(gesture);
    change
}

fn attach(shared: &Rc<Shared>, strategy: Strategy) -> Result<(), JsValue> {
    let mut listeners = shared.listeners.borrow_mut();
    match strategy {
        Strategy::EventDriven {
            touch,
            transition_end,
        } => {
            let strip = shared.carousel.borrow().host().strip().clone();
            if touch {
                let start = handler(shared, on_touch_start);
                strip.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;
                listeners.touch_start = Some(start);
                // Attached per gesture in `on_touch_start`.
                listeners.touch_move = Some(handler(shared, on_touch_move));
                listeners.touch_end = Some(handler(shared, on_touch_end));
            }
            if !transition_end.is_empty() {
                let done = handler(shared, on_transition_end);
                for name in transition_end {
                    strip.add_event_listener_with_callback(name, done.as_ref().unchecked_ref())?;
                }
                listeners.transition_end = Some((done, transition_end));
            }
            let resize = handler(shared, on_resize);
            shared
                .window
                .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
            listeners.resize = Some(resize);
        }
        Strategy::ResizeOnly => {
            let resize = handler(shared, on_resize_only);
            shared
                .window
                .set_onresize(Some(resize.as_ref().unchecked_ref()));
            listeners.resize = Some(resize);
            listeners.resize_only = true;
        }
    }
    Ok(())
}

impl Listeners {
    fn listen_for_gesture(&self, strip: &HtmlElement) -> Result<(), JsValue> {
        if let Some(moved) = &self.touch_move {
            strip.add_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref())?;
        }
        if let Some(ended) = &self.touch_end {
            strip.add_event_listener_with_callback("touchend", ended.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn stop_listening_for_gesture(&self, strip: &HtmlElement) -> Result<(), JsValue> {
        if let Some(moved) = &self.touch_move {
            strip.remove_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref())?;
        }
        if let Some(ended) = &self.touch_end {
            strip.remove_event_listener_with_callback("touchend", ended.as_ref().unchecked_ref())?;
        }
        Ok(())
    }

    fn detach(&self, strip: &HtmlElement, window: &Window) -> Result<(), JsValue> {
        self.stop_listening_for_gesture(strip)?;
        if let Some(start) = &self.touch_start {
            strip.remove_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;
        }
        if let Some((done, names)) = &self.transition_end {
            for name in *names {
                strip.remove_event_listener_with_callback(name, done.as_ref().unchecked_ref())?;
            }
        }
        if self.resize_only {
            window.set_onresize(None);
        } else if let Some(resize) = &self.resize {
            window.remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        }
        Ok(())
    }
}

fn apply(event: &Event, response: EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.stop_propagation {
        event.stop_propagation();
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Epoch milliseconds are integral and far below u64::MAX."
)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

fn on_touch_start(shared: &Rc<Shared>, event: &TouchEvent) {
    let Some(touch) = event.touches().get(0) else {
        return;
    };
    let position = Point::new(f64::from(touch.page_x()), f64::from(touch.page_y()));
    let (response, tracking) = {
        let mut carousel = shared.carousel.borrow_mut();
        let response = carousel.on_touch_start(position, now_ms());
        (response, carousel.is_tracking())
    };
    if let Some(ListenerChange::Attach) =
        update_gesture(shared, |gesture| gesture.after_touch_start(tracking))
    {
        let strip = shared.carousel.borrow().host().strip().clone();
        if let Err(err) = shared.listeners.borrow().listen_for_gesture(&strip) {
            log::warn!("gesture listeners not attached: {err:?}");
        }
    }
    apply(event, response);
}

fn on_touch_move(shared: &Rc<Shared>, event: &TouchEvent) {
    let touches = event.touches();
    let Some(touch) = touches.get(0) else {
        return;
    };
    // `scale` is only reported by engines with native pinch gestures.
    let scale = Reflect::get(event, &JsValue::from_str("scale"))
        .ok()
        .and_then(|value| value.as_f64());
    let moved = TouchMove {
        position: Point::new(f64::from(touch.page_x()), f64::from(touch.page_y())),
        touch_count: touches.length() as usize,
        scale,
    };
    let response = shared.carousel.borrow_mut().on_touch_move(moved);
    apply(event, response);
}

fn on_touch_end(shared: &Rc<Shared>, event: &TouchEvent) {
    let response = shared.carousel.borrow_mut().on_touch_end(now_ms());
    if let Some(ListenerChange::Detach) = update_gesture(shared, GestureListeners::after_touch_end)
    {
        let strip = shared.carousel.borrow().host().strip().clone();
        if let Err(err) = shared.listeners.borrow().stop_listening_for_gesture(&strip) {
            log::warn!("gesture listeners not detached: {err:?}");
        }
    }
    apply(event, response);
    schedule_tick(shared);
}

fn on_transition_end(shared: &Rc<Shared>, event: &Event) {
    shared.transition_events.borrow_mut().record(event.clone());
    let response = shared.carousel.borrow_mut().on_transition_end();
    apply(event, response);
    schedule_tick(shared);
}

fn on_resize(shared: &Rc<Shared>, event: &Event) {
    let response = shared.carousel.borrow_mut().on_resize();
    apply(event, response);
    schedule_tick(shared);
}

fn on_resize_only(shared: &Rc<Shared>, _event: &Event) {
    let result = shared.carousel.borrow_mut().setup();
    if let Err(err) = result {
        log::debug!("resize setup: {err}");
    }
    schedule_tick(shared);
}

/// Runs the carousel's deferred work on a later task, once per batch.
fn schedule_tick(shared: &Rc<Shared>) {
    let has_pending = shared.carousel.borrow().has_pending_tick();
    let mut scheduler = shared.scheduler.get();
    let should_schedule = scheduler.request(has_pending);
    shared.scheduler.set(scheduler);
    if !should_schedule {
        return;
    }

    let pending = Rc::clone(shared);
    let callback = Closure::once_into_js(move || run_tick(&pending));
    let scheduled = shared
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    if let Err(err) = scheduled {
        mark_tick_started(shared);
        log::warn!("could not schedule carousel tick: {err:?}");
    }
}

fn mark_tick_started(shared: &Shared) {
    let mut scheduler = shared.scheduler.get();
    scheduler.tick_started();
    shared.scheduler.set(scheduler);
}

fn run_tick(shared: &Rc<Shared>) {
    mark_tick_started(shared);
    drain_tick(&shared.carousel, &shared.transition_events, |delivery| {
        deliver(shared, delivery);
    });
    // Hooks may have queued more work.
    schedule_tick(shared);
}

fn deliver(shared: &Shared, delivery: Delivery<Event>) {
    let result = match &delivery {
        Delivery::Slide { index } => match &shared.hooks.callback {
            Some(callback) => callback.call2(
                &JsValue::UNDEFINED,
                &index_value(*index),
                &slide_value(shared, *index),
            ),
            None => Ok(JsValue::UNDEFINED),
        },
        Delivery::TransitionEnd { native, index } => match &shared.hooks.transition_end {
            Some(hook) => hook.call3(
                &JsValue::UNDEFINED,
                native
                    .as_ref()
                    .map_or(&JsValue::UNDEFINED, |event: &Event| -> &JsValue { event }),
                &index_value(*index),
                &slide_value(shared, *index),
            ),
            None => Ok(JsValue::UNDEFINED),
        },
    };
    if let Err(err) = result {
        log::warn!("carousel hook for {delivery:?} threw: {err:?}");
    }
}

fn index_value(index: usize) -> JsValue {
    JsValue::from(u32::try_from(index).unwrap_or(u32::MAX))
}

fn slide_value(shared: &Shared, index: usize) -> JsValue {
    shared
        .carousel
        .borrow()
        .host()
        .slide_element(index)
        .map_or(JsValue::UNDEFINED, JsValue::from)
}
