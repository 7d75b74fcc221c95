//! Slide Deck entry point
//!
//! Handles platform-specific initialization and wires DOM events to the deck.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_deck {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AddEventListenerOptions, Document, ErrorEvent, KeyboardEvent, TouchEvent, WheelEvent,
        Window,
    };

    use slide_deck::DeckConfig;
    use slide_deck::clipboard::CopyTarget;
    use slide_deck::nav::{
        Bindings, InputSource, Key, NavCommand, Presenter, SwipeTracker, ZoomGuard,
        parse_goto_index,
    };
    use slide_deck::notify::{Notification, RELOAD_MESSAGE};
    use slide_deck::platform::web::{
        Actions, BrowserTimers, DomView, Notifier, inject_styles, preload_images, setup_checklist,
    };
    use slide_deck::schedule::Debouncer;

    type Deck = Rc<RefCell<Presenter<DomView>>>;

    pub fn start() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        if document.ready_state() == "loading" {
            let closure = Closure::once_into_js(run);
            let _ = document
                .add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref());
        } else {
            run();
        }
    }

    fn run() {
        log::info!("Slide deck starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        inject_styles(&document);

        let config = DeckConfig::load();
        let notifier = Notifier::new(&document, &config);
        let actions = Actions::new(&document, notifier.clone(), config.button_reset_ms);

        // Page-level handler first so setup errors are reported too
        setup_error_handler(&window, notifier.clone());

        let view = DomView::new(&document, &config);
        let bindings = Bindings::standard(config.total_slides);
        let deck: Deck = Rc::new(RefCell::new(Presenter::new(
            config.total_slides,
            bindings,
            view,
        )));

        setup_buttons(deck.clone());
        setup_dots(deck.clone());
        setup_keyboard(&document, deck.clone());
        setup_touch(&document, deck.clone(), &config);
        setup_resize(&window, deck.clone(), &config);

        if let Some(checklist) = &config.checklist {
            setup_checklist(&document, checklist, notifier.clone());
        }
        if config.uploads {
            actions.setup_uploads();
        }
        preload_images(&config.preload_images);

        expose_globals(&window, deck, actions);

        log::info!(
            "Slide deck running ({} variant, {} slides)",
            config.variant.as_str(),
            config.total_slides
        );
    }

    fn setup_buttons(deck: Deck) {
        let (prev, next) = {
            let d = deck.borrow();
            (d.view().prev_button().cloned(), d.view().next_button().cloned())
        };

        for (button, source) in [(prev, InputSource::PrevButton), (next, InputSource::NextButton)] {
            let Some(button) = button else {
                continue;
            };
            let deck = deck.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                deck.borrow_mut().handle(source);
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_dots(deck: Deck) {
        let dots = deck.borrow().view().dots().to_vec();
        for (i, dot) in dots.iter().enumerate() {
            let deck = deck.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                deck.borrow_mut().handle(InputSource::Dot(i));
            });
            let _ = dot.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(document: &Document, deck: Deck) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(key) = Key::from_dom(&event.key()) else {
                return;
            };
            let handled = deck.borrow().bindings().handles_key(key);
            if handled {
                event.prevent_default();
                deck.borrow_mut().handle(InputSource::Key(key));
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_touch(document: &Document, deck: Deck, config: &DeckConfig) {
        let swipe = Rc::new(RefCell::new(SwipeTracker::new(config.swipe_threshold_px)));
        let guard = Rc::new(RefCell::new(ZoomGuard::new(config.double_tap_ms)));

        // Listeners that may cancel must not be passive
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        // Touch start - block pinch, remember swipe origin
        {
            let swipe = swipe.clone();
            let guard = guard.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if guard.borrow().block_touch_start(event.touches().length()) {
                    event.prevent_default();
                }
                if let Some(touch) = event.changed_touches().get(0) {
                    swipe.borrow_mut().touch_start(touch.screen_x() as f64);
                }
            });
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Touch end - block double-tap zoom, finish swipe
        {
            let guard = guard.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if guard.borrow_mut().block_touch_end(js_sys::Date::now()) {
                    event.prevent_default();
                }
                let Some(touch) = event.changed_touches().get(0) else {
                    return;
                };
                let gesture = swipe.borrow_mut().touch_end(touch.screen_x() as f64);
                if let Some(source) = gesture {
                    deck.borrow_mut().handle(source);
                }
            });
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "touchend",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Ctrl/Cmd + wheel zoom
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                if guard.borrow().block_wheel(event.ctrl_key(), event.meta_key()) {
                    event.prevent_default();
                }
            });
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                "wheel",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn setup_resize(window: &Window, deck: Deck, config: &DeckConfig) {
        let debouncer = Rc::new(RefCell::new(Debouncer::new(
            BrowserTimers,
            config.resize_debounce_ms,
        )));
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let deck = deck.clone();
            debouncer.borrow_mut().trigger(Box::new(move || {
                deck.borrow_mut().handle(InputSource::Resize);
            }));
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_error_handler(window: &Window, notifier: Notifier) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: ErrorEvent| {
            log::error!("Error en la presentación: {} {:?}", event.message(), event.error());
            notifier.show(&Notification::error(RELOAD_MESSAGE));
        });
        let _ = window.add_event_listener_with_callback("error", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Functions the markup calls through `onclick` attributes
    fn expose_globals(window: &Window, deck: Deck, actions: Actions) {
        let set = |name: &str, value: &JsValue| {
            if js_sys::Reflect::set(window, &JsValue::from_str(name), value).is_err() {
                log::warn!("Could not expose window.{}", name);
            }
        };

        for (name, command) in [("nextSlide", NavCommand::Next), ("prevSlide", NavCommand::Previous)] {
            let deck = deck.clone();
            let closure = Closure::<dyn FnMut()>::new(move || {
                deck.borrow_mut().dispatch(command);
            });
            set(name, closure.as_ref());
            closure.forget();
        }

        {
            let deck = deck.clone();
            let closure = Closure::<dyn FnMut(JsValue)>::new(move |index: JsValue| {
                let Some(index) = index.as_f64().and_then(parse_goto_index) else {
                    return;
                };
                deck.borrow_mut().dispatch(NavCommand::GoTo(index));
            });
            set("goToSlide", closure.as_ref());
            closure.forget();
        }

        for target in CopyTarget::ALL {
            let actions = actions.clone();
            let closure = Closure::<dyn FnMut()>::new(move || actions.copy(target));
            set(target.entry_point(), closure.as_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_deck::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;
    use slide_deck::DeckConfig;
    use slide_deck::nav::{Bindings, Presenter};
    use slide_deck::platform::native::{Args, LogView, parse_step};

    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Slide deck (native) starting...");
    log::info!("The browser build runs with `trunk serve`; natively, steps are replayed to the log");

    let config = match &args.config {
        Some(path) => DeckConfig::load_from_path(path),
        None => DeckConfig::default(),
    };

    let mut deck = Presenter::new(
        config.total_slides,
        Bindings::standard(config.total_slides),
        LogView::default(),
    );

    for step in &args.steps {
        match parse_step(step) {
            Some(source) => {
                if deck.handle(source).is_none() {
                    log::warn!("{:?} is not bound", source);
                }
            }
            None => log::warn!("Unknown step: {}", step),
        }
    }

    log::info!(
        "Finished at slide {} of {} after {} renders",
        deck.current() + 1,
        config.total_slides,
        deck.view().renders
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
