//! Court Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use court_pong::platform::{InputEvent, pointer_to_court_y};
    use court_pong::renderer::RenderState;
    use court_pong::sim::{Score, Side};
    use court_pong::{GameLoop, Renderer, ScoreBoard, Tuning};

    /// Score and winner banner DOM elements
    struct DomScoreBoard {
        document: web_sys::Document,
    }

    impl ScoreBoard for DomScoreBoard {
        fn show_score(&mut self, score: Score) {
            if let Some(el) = self.document.get_element_by_id("player-score") {
                el.set_text_content(Some(&score.player.to_string()));
            }
            if let Some(el) = self.document.get_element_by_id("ai-score") {
                el.set_text_content(Some(&score.ai.to_string()));
            }
        }

        fn show_winner(&mut self, winner: Option<Side>) {
            let Some(el) = self.document.get_element_by_id("winner-banner") else {
                return;
            };
            match winner {
                Some(side) => {
                    let text = match side {
                        Side::Player => "You Win!",
                        Side::Ai => "AI Wins!",
                    };
                    el.set_text_content(Some(text));
                    let _ = el.set_attribute("class", "");
                }
                None => {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    /// Draws nothing until WebGPU is ready
    struct Screen(Option<RenderState>);

    impl Renderer for Screen {
        fn draw(&mut self, state: &court_pong::sim::GameState) {
            if let Some(ref mut render_state) = self.0 {
                render_state.draw(state);
            }
        }
    }

    /// Game instance holding all state
    struct Game {
        game_loop: GameLoop,
        screen: Screen,
        hud: DomScoreBoard,
        court_height: f32,
    }

    impl Game {
        /// Queue a paddle move from an element-relative pointer Y
        fn pointer_moved(&mut self, offset_y: f32, element_height: f32) {
            let y = pointer_to_court_y(offset_y, element_height, self.court_height);
            self.game_loop.push_input(InputEvent::SetPlayerTarget(y));
        }

        fn frame(&mut self) {
            self.game_loop.frame(&mut self.screen, &mut self.hud);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Court Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();
        let court = (tuning.court_width, tuning.court_height);

        // Backing store matches the court, scaled for high-DPI screens
        let dpr = window.device_pixel_ratio();
        let width = (court.0 as f64 * dpr) as u32;
        let height = (court.1 as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            game_loop: GameLoop::seeded(tuning, seed),
            screen: Screen(None),
            hud: DomScoreBoard {
                document: document.clone(),
            },
            court_height: court.1,
        }));

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

        let render_state = RenderState::new(surface, &adapter, width, height, court).await;
        game.borrow_mut().screen = Screen(Some(render_state));

        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Court Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().pointer_moved(y, rect.height() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let y = touch.client_y() as f32 - rect.top() as f32;
                    game.borrow_mut().pointer_moved(y, rect.height() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().game_loop.push_input(InputEvent::Restart);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
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
        game.borrow_mut().frame();
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use court_pong::platform::InputEvent;
    use court_pong::sim::{GameState, Score, Side};
    use court_pong::{GameLoop, Renderer, ScoreBoard, Tuning};

    /// Play a headless match between the AI and a scripted player
    #[derive(Debug, Parser)]
    #[command(name = "court-pong", version, about)]
    pub struct Args {
        /// Match seed (defaults to the current time)
        #[arg(long)]
        pub seed: Option<u64>,
        /// Give up after this many frames
        #[arg(long, default_value_t = 100_000)]
        pub max_frames: u64,
        /// JSON tuning override
        #[arg(long)]
        pub tuning: Option<PathBuf>,
        /// Frames of lag in the scripted player's view of the ball
        #[arg(long, default_value_t = 6)]
        pub reaction_frames: usize,
    }

    /// Counts frames instead of drawing them
    #[derive(Default)]
    struct FrameCounter(u64);

    impl Renderer for FrameCounter {
        fn draw(&mut self, _state: &GameState) {
            self.0 += 1;
        }
    }

    struct LogScoreBoard;

    impl ScoreBoard for LogScoreBoard {
        fn show_score(&mut self, score: Score) {
            log::debug!("Score {} - {}", score.player, score.ai);
        }

        fn show_winner(&mut self, winner: Option<Side>) {
            if let Some(side) = winner {
                log::info!("Winner: {}", side.as_str());
            }
        }
    }

    pub fn run(args: Args) {
        let tuning = Tuning::load(args.tuning.as_deref());
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let mut game = GameLoop::seeded(tuning, seed);
        let mut screen = FrameCounter::default();
        let mut board = LogScoreBoard;
        // Ring of recent ball heights, so the scripted player reacts late
        let mut seen = std::collections::VecDeque::with_capacity(args.reaction_frames + 1);

        while !game.state().is_over() && game.frames() < args.max_frames {
            seen.push_back(game.state().ball.pos.y);
            if seen.len() > args.reaction_frames {
                if let Some(y) = seen.pop_front() {
                    game.push_input(InputEvent::SetPlayerTarget(y));
                }
            }
            game.frame(&mut screen, &mut board);
        }

        let state = game.state();
        match state.winner() {
            Some(side) => println!(
                "{} wins {} - {} after {} frames (seed {})",
                side.as_str(),
                state.score.player,
                state.score.ai,
                screen.0,
                seed
            ),
            None => println!(
                "No winner after {} frames: {} - {} (seed {})",
                screen.0, state.score.player, state.score.ai, seed
            ),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Court Pong (native) starting headless match...");
    headless::run(headless::Args::parse());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
