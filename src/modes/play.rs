use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use log::info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stderr, Stderr};
use std::time::Duration;
use tokio::time::{interval, sleep_until, Instant};

use crate::game::{GameConfig, GameEngine, TickEvent};
use crate::input::{InputAction, InputHandler, SwipeTracker};
use crate::metrics::SessionMetrics;
use crate::render::{Renderer, Theme};
use crate::score::FileScoreStore;

/// Longest player name the start overlay accepts
const MAX_NAME_LEN: usize = 24;

/// Interactive play: terminal setup, the event/tick/render loop, teardown
pub struct PlayMode {
    engine: GameEngine<FileScoreStore>,
    renderer: Renderer,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    metrics: SessionMetrics,
    theme: Theme,
    name_input: String,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig, store: FileScoreStore) -> Self {
        Self {
            engine: GameEngine::new(config, store),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            metrics: SessionMetrics::new(),
            theme: Theme::default(),
            name_input: String::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS regardless of game speed
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        // Ticks fire whenever the elapsed time reaches the engine's current
        // interval. The deadline restarts from "now" after each tick, so a
        // stalled loop resumes without replaying missed ticks, and a mid-run
        // speed change takes effect on the next step.
        let mut next_tick = Instant::now() + self.engine.tick_interval();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = sleep_until(next_tick) => {
                    self.advance_game();
                    next_tick = Instant::now() + self.engine.tick_interval();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            &self.engine.snapshot(),
                            &self.name_input,
                            self.theme,
                            &self.metrics,
                        );
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = self.input_handler.handle_key_event(key, self.engine.run_state());
                self.apply_action(action);
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn apply_action(&mut self, action: InputAction) {
        match action {
            InputAction::Direction(direction) => self.engine.set_direction(direction),
            InputAction::Start => {
                self.engine.start(&self.name_input);
                self.metrics.on_run_start();
            }
            InputAction::Restart => {
                self.engine.restart();
                self.metrics.on_run_start();
            }
            InputAction::Menu => self.engine.return_to_menu(),
            InputAction::CycleTheme => self.theme = self.theme.cycle(),
            InputAction::NamePush(c) => {
                if self.name_input.chars().count() < MAX_NAME_LEN {
                    self.name_input.push(c);
                }
            }
            InputAction::NamePop => {
                self.name_input.pop();
            }
            InputAction::Quit => self.should_quit = true,
            InputAction::None => {}
        }
    }

    /// Swipes arrive as mouse press/release pairs
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(mouse.column as i32, mouse.row as i32);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(direction) = self.swipe.release(mouse.column as i32, mouse.row as i32)
                {
                    self.engine.set_direction(direction);
                }
            }
            _ => {}
        }
    }

    fn advance_game(&mut self) {
        if let TickEvent::GameOver { final_score, .. } = self.engine.tick() {
            info!("run over: final score {}", final_score);
            self.metrics.on_run_over();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
