//! Flappy Kiro entry point
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

    use flappy_kiro::FrameDriver;
    use flappy_kiro::Tuning;
    use flappy_kiro::persistence::LocalStore;
    use flappy_kiro::renderer::{CanvasRenderer, hud_text};

    type Game = FrameDriver<LocalStore, CanvasRenderer>;

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Kiro starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let renderer = CanvasRenderer::new(&canvas).expect("Failed to create 2d context");
        let tuning = Tuning::load(&LocalStore);
        let seed = js_sys::Date::now() as u64;

        let mut driver = FrameDriver::new(seed, tuning, LocalStore, renderer);
        driver.set_playfield(canvas.width() as f32, canvas.height() as f32);
        let game = Rc::new(RefCell::new(driver));

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone());
        update_hud(&game.borrow());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Kiro running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    // Keep the page from scrolling
                    event.prevent_default();
                    game.borrow_mut().activate();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click / tap
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().activate();
            });
            let _ = canvas
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Update the score line in the DOM
    fn update_hud(game: &Game) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("score") {
            let state = game.state();
            el.set_text_content(Some(&hud_text(state.score, state.high_score)));
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            // Score and best only change alongside an event
            if !g.frame().is_empty() {
                update_hud(&g);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Kiro (native) starting...");
    log::info!("Native mode runs a headless autopilot demo");
    log::info!("Serve the wasm build for the real game");

    headless_demo(std::env::args().nth(1));
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one autopilot session in memory and report the result
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo(tuning_path: Option<String>) {
    use flappy_kiro::persistence::MemoryStore;
    use flappy_kiro::renderer::{NullRenderer, hud_text};
    use flappy_kiro::sim::{GamePhase, autopilot};
    use flappy_kiro::{FrameDriver, Tuning};

    const MAX_FRAMES: u64 = 60 * 60 * 5;

    let tuning = match tuning_path {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{}: {}, using defaults", path, e);
                Tuning::default()
            }),
            Err(e) => {
                log::warn!("Can't read {}: {}, using defaults", path, e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut driver = FrameDriver::new(seed, tuning, MemoryStore::new(), NullRenderer);
    log::info!("Game initialized with seed: {}", seed);

    let mut frames = 0;
    while frames < MAX_FRAMES {
        if autopilot(driver.state()) {
            driver.activate();
        }
        let _ = driver.frame();
        frames += 1;
        if driver.state().phase == GamePhase::GameOver {
            break;
        }
    }

    let state = driver.state();
    println!(
        "{} after {} frames ({:?})",
        hud_text(state.score, state.high_score),
        frames,
        state.phase
    );
}
