//! Decision Wheel entry point
//!
//! Browser front end (canvas, Web Audio, DOM) on wasm32; a headless runner
//! everywhere else.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_wheel {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, HtmlCanvasElement, HtmlElement, HtmlTextAreaElement};

    use decision_wheel::Settings;
    use decision_wheel::WheelApp;
    use decision_wheel::audio::AudioManager;
    use decision_wheel::renderer::{CanvasSurface, DrawingSurface, Viewport};

    const CONFETTI_CANVAS_ID: &str = "confetti-canvas";
    /// How long the pointer stays flicked after a tick
    const POINTER_FLICK_MS: i32 = 50;

    /// Page elements the wheel talks to
    struct Dom {
        choices_input: HtmlTextAreaElement,
        spin_btn: HtmlButtonElement,
        winner_modal: HtmlElement,
        winner_text: HtmlElement,
        pointer: Option<HtmlElement>,
    }

    /// Front end state holding the wheel and its surfaces
    struct Wheel {
        app: WheelApp<AudioManager>,
        surface: CanvasSurface,
        dom: Dom,
        /// A wheel frame callback is queued
        frame_pending: bool,
        confetti_surface: Option<CanvasSurface>,
        confetti_pending: bool,
    }

    impl Wheel {
        /// Measure the canvas and reset its scale (once per resize)
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else { return };
            let rect = self.surface.canvas().get_bounding_client_rect();
            let viewport = Viewport::new(
                rect.width() as f32,
                rect.height() as f32,
                window.device_pixel_ratio(),
            );
            self.surface.resize(viewport);
            self.app.resize(viewport);
            log::debug!("Canvas resized to {:?}", viewport.device_size());
        }

        fn redraw(&mut self) {
            let commands = self.app.draw();
            self.surface.draw(&commands);
        }

        fn update_choices(&mut self) {
            let raw = self.dom.choices_input.value();
            self.app.update_choices(&raw);
            self.redraw();
        }

        /// Tilt the pointer briefly, as if a peg knocked it
        fn flick_pointer(&self) {
            let Some(pointer) = self.dom.pointer.clone() else { return };
            let _ = pointer
                .style()
                .set_property("transform", "translateY(-50%) rotate(-25deg)");

            let reset = Closure::once(move || {
                let _ = pointer
                    .style()
                    .set_property("transform", "translateY(-50%) rotate(0deg)");
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    reset.as_ref().unchecked_ref(),
                    POINTER_FLICK_MS,
                );
            }
            reset.forget();
        }

        fn show_winner(&self, label: &str) {
            self.dom.winner_text.set_text_content(Some(label));
            let _ = self.dom.winner_modal.class_list().remove_1("hidden");
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Decision Wheel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let element = |id: &str| document.get_element_by_id(id);
        let canvas: HtmlCanvasElement = element("wheelCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let dom = Dom {
            choices_input: element("choicesInput")
                .expect("no choices input")
                .dyn_into()
                .expect("not a textarea"),
            spin_btn: element("spinBtn")
                .expect("no spin button")
                .dyn_into()
                .expect("not a button"),
            winner_modal: element("winnerModal")
                .expect("no winner modal")
                .dyn_into()
                .expect("not an element"),
            winner_text: element("winnerText")
                .expect("no winner text")
                .dyn_into()
                .expect("not an element"),
            pointer: document
                .query_selector(".pointer")
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into().ok()),
        };

        let settings = Settings::load();
        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Wheel initialized with seed: {}", seed);

        let surface = CanvasSurface::new(canvas).expect("no 2d context");
        let wheel = Rc::new(RefCell::new(Wheel {
            app: WheelApp::new(AudioManager::new(), settings, seed),
            surface,
            dom,
            frame_pending: false,
            confetti_surface: None,
            confetti_pending: false,
        }));

        {
            let mut w = wheel.borrow_mut();
            w.resize();
            w.update_choices();
        }

        setup_buttons(wheel.clone());
        setup_resize(wheel);

        log::info!("Decision Wheel ready!");
    }

    fn on_click(id: &str, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("Missing #{} - handler not attached", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(handler);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(wheel: Rc<RefCell<Wheel>>) {
        {
            let wheel = wheel.clone();
            on_click("spinBtn", move |_| {
                let mut w = wheel.borrow_mut();
                if !w.app.spin() {
                    return;
                }
                w.dom.spin_btn.set_disabled(true);
                drop(w);
                schedule_frame(wheel.clone());
            });
        }
        {
            let wheel = wheel.clone();
            on_click("updateBtn", move |_| {
                wheel.borrow_mut().update_choices();
            });
        }
        on_click("closeModalBtn", move |_| {
            let _ = wheel.borrow().dom.winner_modal.class_list().add_1("hidden");
        });
    }

    fn setup_resize(wheel: Rc<RefCell<Wheel>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let mut w = wheel.borrow_mut();
            w.resize();
            w.redraw();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Queue one wheel frame; never more than one at a time
    fn schedule_frame(wheel: Rc<RefCell<Wheel>>) {
        {
            let mut w = wheel.borrow_mut();
            if w.frame_pending {
                return;
            }
            w.frame_pending = true;
        }
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            wheel_frame(wheel);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn wheel_frame(wheel: Rc<RefCell<Wheel>>) {
        let (keep_going, won) = {
            let mut w = wheel.borrow_mut();
            w.frame_pending = false;

            let report = w.app.frame();
            w.surface.draw(&report.commands);

            if report.crossed().is_some() {
                w.flick_pointer();
            }
            if let Some(winner) = &report.winner {
                w.dom.spin_btn.set_disabled(false);
                w.show_winner(&winner.label);
            }
            (w.app.needs_frame(), report.winner.is_some())
        };

        if won {
            start_confetti(wheel.clone());
        }
        if keep_going {
            schedule_frame(wheel);
        }
    }

    /// Full-window overlay canvas for confetti, created on demand
    fn confetti_canvas() -> Option<HtmlCanvasElement> {
        let document = web_sys::window()?.document()?;
        if let Some(existing) = document.get_element_by_id(CONFETTI_CANVAS_ID) {
            return existing.dyn_into().ok();
        }

        let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_id(CONFETTI_CANVAS_ID);
        let style = canvas.style();
        for (prop, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("pointer-events", "none"),
            ("z-index", "9999"),
        ] {
            let _ = style.set_property(prop, value);
        }
        document.body()?.append_child(&canvas).ok()?;
        Some(canvas)
    }

    fn start_confetti(wheel: Rc<RefCell<Wheel>>) {
        let Some(window) = web_sys::window() else { return };
        let area = Viewport::new(
            window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
            window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32,
            1.0,
        );

        {
            let mut w = wheel.borrow_mut();
            if w.confetti_surface.is_none() {
                w.confetti_surface = confetti_canvas().and_then(CanvasSurface::new);
            }
            let Some(surface) = w.confetti_surface.as_mut() else {
                log::warn!("Confetti overlay unavailable");
                return;
            };
            surface.resize(area);
            w.app.celebrate(area, js_sys::Date::now());
            if w.confetti_pending {
                return;
            }
            w.confetti_pending = true;
        }
        request_confetti_frame(wheel);
    }

    fn request_confetti_frame(wheel: Rc<RefCell<Wheel>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            confetti_frame(wheel);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn confetti_frame(wheel: Rc<RefCell<Wheel>>) {
        let running = {
            let mut w = wheel.borrow_mut();
            let commands = w.app.confetti_frame(js_sys::Date::now());
            match commands {
                Some(commands) => {
                    if let Some(surface) = w.confetti_surface.as_mut() {
                        surface.draw(&commands);
                    }
                    true
                }
                None => {
                    w.confetti_pending = false;
                    if let Some(surface) = w.confetti_surface.take() {
                        surface.canvas().remove();
                    }
                    false
                }
            }
        };

        if running {
            request_confetti_frame(wheel);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_wheel::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::Read;

    use decision_wheel::renderer::{DrawingSurface, RecordingSurface, Viewport};
    use decision_wheel::{Settings, WheelApp, effects::SilentAudio};

    env_logger::init();
    log::info!("Decision Wheel (native) starting...");

    let mut raw = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut raw) {
        log::warn!("Could not read choices from stdin: {}", e);
    }

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    log::info!("Seed: {}", seed);

    let viewport = Viewport::default();
    let mut surface = RecordingSurface::default();
    surface.resize(viewport);

    let mut app = WheelApp::new(SilentAudio, settings, seed);
    app.resize(viewport);
    app.update_choices(&raw);
    app.spin();

    let mut frames = 0u64;
    let mut winner = None;
    while app.is_spinning() {
        let report = app.frame();
        surface.draw(&report.commands);
        frames += 1;
        winner = report.winner.or(winner);
    }

    log::info!(
        "Stopped after {} frames; last frame had {} draw commands",
        frames,
        surface.commands.len()
    );
    match winner {
        Some(winner) => println!("{}", winner.label),
        None => log::warn!("Wheel stopped without a winner"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
