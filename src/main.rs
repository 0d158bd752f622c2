//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use brick_breaker::renderer::CanvasSurface;
    use brick_breaker::sim::Arena;
    use brick_breaker::{GameConfig, GameLoop, TickOutcome};

    /// Game instance: the loop plus what it draws on
    struct Game {
        game: GameLoop,
        surface: CanvasSurface,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Pointer x relative to the canvas' left edge
        fn pointer_x(&self, event: &MouseEvent) -> f32 {
            (event.client_x() - self.canvas.offset_left()) as f32
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        if let Err(e) = start() {
            log::error!("Failed to start: {:?}", e);
        }
    }

    fn start() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("myCanvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| JsValue::from_str("not a canvas"))?;

        let surface = CanvasSurface::from_canvas(&canvas)?;
        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);

        let config = GameConfig::load();
        let game = GameLoop::new(config, arena).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let game = Rc::new(RefCell::new(Game {
            game,
            surface,
            canvas,
        }));

        setup_input_handlers(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Brick Breaker running!");
        Ok(())
    }

    /// Listeners only queue events; the next frame applies them
    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("no document")?;

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().game.key_down(event.key_code());
            });
            document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().game.key_up(event.key_code());
            });
            document
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Mouse move - absolute position relative to the canvas
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let mut g = game.borrow_mut();
                let x = g.pointer_x(&event);
                g.game.pointer_move(x);
            });
            document
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let outcome = {
            let mut g = game.borrow_mut();
            let Game { game, surface, .. } = &mut *g;
            game.run_tick(surface, js_sys::Date::now())
        };

        match outcome {
            TickOutcome::Continue => request_animation_frame(game),
            // Defeat message is already on the canvas
            TickOutcome::GameOver => log::info!("Game over, frame loop stopped"),
            TickOutcome::Restart => restart_page(&game.borrow().game),
        }
    }

    /// Announce the win, then reload the whole page
    fn restart_page(game: &GameLoop) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(game.victory_message()) {
            log::warn!("alert failed: {:?}", e);
        }
        if let Err(e) = window.location().reload() {
            log::warn!("reload failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use brick_breaker::platform::{self, HeadlessOptions};
    use brick_breaker::{GameConfig, GameLoop};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs headless with the autopilot - build for wasm32 to play");

    // Optional first argument: JSON config file
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            GameConfig::from_file(&path)?
        }
        None => GameConfig::load(),
    };

    let arena = config.default_arena();
    let mut game = GameLoop::new(config, arena)?;
    let summary = platform::run(&mut game, HeadlessOptions::default());

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
