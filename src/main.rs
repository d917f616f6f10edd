//! Grape Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use grape_drop::consts::*;
    use grape_drop::input::HeldKeys;
    use grape_drop::renderer::{shapes, RenderState};
    use grape_drop::sim::{tick, GameConfig, GameEvent, GameState, GameStatus};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        held: HeldKeys,
        accumulator: f32,
        last_time: f64,
        /// False once the session is won and the loop stops re-arming
        running: bool,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                render_state: None,
                held: HeldKeys::new(),
                accumulator: 0.0,
                last_time: 0.0,
                running: true,
            }
        }

        /// Run simulation ticks and collect the events they raised
        fn update(&mut self, dt: f32) -> Vec<GameEvent> {
            let dt = dt.min(0.1);
            self.accumulator += dt;

            let mut events = Vec::new();
            let mut substeps = 0;
            while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = self.held.tick_input();
                events.extend(tick(&mut self.state, &input));
                self.accumulator -= SIM_DT;
                substeps += 1;
            }

            if self.state.status == GameStatus::Won {
                self.running = false;
            }

            events
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::game_scene(&self.state);
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Caught counter
            if let Some(el) = document.query_selector("#hud-caught .hud-value").ok().flatten() {
                el.set_text_content(Some(&format!(
                    "{} / {}",
                    self.state.grapes_caught, self.state.config.grapes_to_win
                )));
            }

            // Score
            if let Some(el) = document.query_selector("#hud-score .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.score.to_string()));
            }

            // Grapes still needed
            if let Some(el) = document.query_selector("#hud-remaining .hud-value").ok().flatten() {
                el.set_text_content(Some(&self.state.remaining().to_string()));
            }

            // Progress bar toward the win
            if let Some(el) = document.get_element_by_id("progress-fill") {
                let pct = self.state.progress() * 100.0;
                let _ = el.set_attribute("style", &format!("width: {:.0}%", pct));
            }

            // Show/hide victory overlay
            if let Some(el) = document.get_element_by_id("game-over") {
                if self.state.status == GameStatus::Won {
                    let _ = el.set_attribute("class", "");
                    if let Some(caught_el) = document.get_element_by_id("final-caught") {
                        caught_el.set_text_content(Some(&self.state.grapes_caught.to_string()));
                    }
                    if let Some(score_el) = document.get_element_by_id("final-score") {
                        score_el.set_text_content(Some(&self.state.score.to_string()));
                    }
                    if let Some(time_el) = document.get_element_by_id("final-time") {
                        let seconds = self.state.time_ticks as f32 * SIM_DT;
                        time_el.set_text_content(Some(&format!("{:.1}s", seconds)));
                    }
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }

        /// Reset the session for a fresh run
        fn restart(&mut self, seed: u64) {
            self.state.reset(seed);
            self.accumulator = 0.0;
            self.last_time = 0.0;
            self.held.clear();
        }
    }

    /// Pop a toast message, restarting its animation if one is showing
    fn show_toast(document: &web_sys::Document, message: &str, kind: &str) {
        if let Some(el) = document.get_element_by_id("toast") {
            el.set_text_content(Some(message));
            let _ = el.set_attribute("class", "toast");
            // Force a reflow so re-adding the class restarts the animation
            if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
                let _ = html.offset_width();
            }
            let _ = el.set_attribute("class", &format!("toast show {}", kind));
        }
    }

    fn handle_events(document: &web_sys::Document, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::GrapeCaught { caught, target } => {
                    show_toast(document, &format!("Caught! {} / {}", caught, target), "good");
                }
                GameEvent::StoneHit { punished: true } => {
                    show_toast(document, "Ouch! A stone cost you a grape", "bad");
                }
                // Harmless stones pass without comment
                GameEvent::StoneHit { punished: false } => {}
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Grape Drop starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize the session
        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(GameConfig::default(), seed).expect("default config is valid");
        let game = Rc::new(RefCell::new(Game::new(state)));

        log::info!("Session initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Set up restart button
        setup_restart_button(game.clone());

        // Show HUD
        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Grape Drop running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Keyboard steering
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                if game.borrow_mut().held.press(&event.key()) {
                    // Keep arrow keys from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                game.borrow_mut().held.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: drop held keys so nothing sticks while unfocused
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().held.clear();
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Tab hidden: same, keyup events never arrive for a hidden tab
        {
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    game.borrow_mut().held.clear();
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            let events = g.update(dt);
            g.render();
            g.update_hud();

            if !events.is_empty() {
                let document = web_sys::window().unwrap().document().unwrap();
                handle_events(&document, &events);
            }

            g.running
        };

        // A won session stops the loop; the restart button re-arms it
        if keep_running {
            request_animation_frame(game);
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let mut g = game.borrow_mut();
                let was_stopped = !g.running;
                g.restart(seed);
                g.running = true;
                drop(g);

                // Re-arm only if the loop actually stopped; a click during
                // play must not double-drive it
                if was_stopped {
                    request_animation_frame(game.clone());
                }

                log::info!("Session restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Grape Drop (native) starting...");
    log::info!("The playable build is web only - run with `trunk serve`");

    println!("\nRunning headless demo session...");
    demo_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_session() {
    use grape_drop::consts::SIM_DT;
    use grape_drop::sim::{
        tick, GameConfig, GameEvent, GameState, GameStatus, ObjectKind, TickInput,
    };

    // A stone frequency above the spawn cap keeps the run stone free,
    // and the quick basket lets the bot reach every grape in time
    let config = GameConfig {
        grapes_to_win: 10,
        stone_frequency: 25,
        basket_speed: 8.0,
        ..GameConfig::default()
    };
    let mut state = GameState::new(config, 0xC0FFEE).expect("demo config is valid");

    // Chase the lowest grape on the field
    let max_ticks: u64 = 60 * 60 * 2;
    while state.status == GameStatus::Playing && state.time_ticks < max_ticks {
        let target = state
            .objects
            .iter()
            .filter(|o| o.kind == ObjectKind::Grape)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|o| o.pos.x)
            .unwrap_or(state.basket_x);

        let input = TickInput {
            left: target < state.basket_x - 1.0,
            right: target > state.basket_x + 1.0,
        };

        for event in tick(&mut state, &input) {
            match event {
                GameEvent::GrapeCaught { caught, target } => {
                    log::info!("caught grape {}/{}", caught, target);
                }
                GameEvent::StoneHit { punished } => {
                    log::info!("stone hit (punished: {})", punished);
                }
            }
        }
    }

    let seconds = state.time_ticks as f32 * SIM_DT;
    println!(
        "✓ Demo finished: {:?} after {:.1}s simulated, score {}",
        state.status, seconds, state.score
    );
    assert_eq!(state.status, GameStatus::Won, "demo bot should win");
}
