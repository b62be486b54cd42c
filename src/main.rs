//! Tunnel Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent};

    use tunnel_runner::renderer::{RenderState, SceneAdapter};
    use tunnel_runner::sim::{GameState, TickInput, tick};
    use tunnel_runner::{ConfigError, FrameClock, GameConfig};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        scene: SceneAdapter,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: TickInput,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            Self {
                state,
                scene: SceneAdapter::new(),
                render_state: None,
                clock: FrameClock::new(),
                input: TickInput::default(),
            }
        }

        /// Run the simulation ticks due for this frame
        fn update(&mut self, time: f64) {
            let ticks = self.clock.frame(time);
            for _ in 0..ticks {
                tick(&mut self.state, &self.input);
                // Clear one-shot inputs after processing
                self.input.jump = false;

                if self.state.is_game_over() {
                    break;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                self.scene.sync(&self.state);
                match render_state.render(&self.scene, &self.state.camera) {
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

        /// Show the game-over indicator once the run ends
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", super::game_over_class(self.state.is_game_over()));
                if self.state.is_game_over() {
                    if let Some(distance_el) = document.get_element_by_id("final-distance") {
                        distance_el
                            .set_text_content(Some(&format!("{:.0}", self.state.distance)));
                    }
                }
            }
        }
    }

    /// Optional JSON config embedded in the page as
    /// `<script id="game-config" type="application/json">`
    fn load_config(document: &Document) -> Result<GameConfig, ConfigError> {
        match document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        {
            Some(json) => {
                let config = GameConfig::from_json(&json)?;
                log::info!("Loaded game config from page");
                Ok(config)
            }
            None => {
                log::info!("Using default game config");
                Ok(GameConfig::default())
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Tunnel Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let config = match load_config(&document) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Refusing to start: {}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(seed, config) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Refusing to start: {}", e);
                return;
            }
        };
        let game = Rc::new(RefCell::new(Game::new(state)));
        log::info!("Game initialized with seed: {}", seed);

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

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .expect("Failed to create device");
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Tunnel Runner running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            match event.code().as_str() {
                "Space" => {
                    event.prevent_default();
                    g.input.jump = true;
                }
                "KeyI" => {
                    g.input.autopilot = !g.input.autopilot;
                    log::info!("Autopilot: {}", g.input.autopilot);
                }
                _ => {}
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
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
        let game_over = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            g.state.is_game_over()
        };

        // The final frame has been drawn; stop scheduling instead of spinning
        if game_over {
            log::info!("Frame loop stopped");
            return;
        }
        request_animation_frame(game);
    }
}

/// Class list for the `#game-over` overlay
#[cfg(any(target_arch = "wasm32", test))]
fn game_over_class(game_over: bool) -> &'static str {
    if game_over { "overlay" } else { "overlay hidden" }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Ticks simulated by the native headless run (one minute of play)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_TICKS: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use tunnel_runner::sim::{GameState, TickInput, tick};
    use tunnel_runner::{GameConfig, TunnelMotion};

    env_logger::init();
    log::info!("Tunnel Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot session - use `trunk serve` to play");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let config = GameConfig {
        motion: TunnelMotion::Anchored,
        ..Default::default()
    };

    let mut state = match GameState::new(seed, config) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };
    while state.time_ticks < HEADLESS_TICKS && !state.is_game_over() {
        tick(&mut state, &input);
    }

    if state.is_game_over() {
        println!(
            "Fell in after {} ticks ({:.1} units)",
            state.time_ticks, state.distance
        );
    } else {
        println!(
            "Survived {} ticks ({:.1} units), seed {}",
            state.time_ticks, state.distance, seed
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
