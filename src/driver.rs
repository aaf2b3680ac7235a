#![cfg(feature = "std")]

//! Event loop feeding input events into a [`GameSession`].

use log::{debug, info, trace, warn};
use tokio::time::{sleep_until, Duration, Instant};

use crate::core::{BoardSide, CellView, GamePhase, GameSession, GridBoard, RecordStore, DRAG_CLEAR_DELAY_MS};
use crate::input::{InputEvent, InputSource};

/// Consumer of board changes. Only changed cells are handed over.
pub trait Renderer {
    fn draw(&mut self, side: BoardSide, board: &GridBoard, changed: &[CellView]);

    /// Session phase moved (also called once when the loop starts).
    fn banner(&mut self, _phase: GamePhase) {}

    /// An event was rejected; the session is unchanged.
    fn rejected(&mut self, _reason: &str) {}
}

/// Renderer that discards everything.
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _side: BoardSide, _board: &GridBoard, _changed: &[CellView]) {}
}

pub struct SessionDriver<S: RecordStore, I: InputSource, R: Renderer> {
    session: GameSession<S>,
    input: I,
    renderer: R,
    drag_clear_delay: Duration,
}

impl<S: RecordStore, I: InputSource, R: Renderer> SessionDriver<S, I, R> {
    pub fn new(session: GameSession<S>, input: I, renderer: R) -> Self {
        Self {
            session,
            input,
            renderer,
            drag_clear_delay: Duration::from_millis(DRAG_CLEAR_DELAY_MS),
        }
    }

    pub fn with_drag_clear_delay(mut self, delay: Duration) -> Self {
        self.drag_clear_delay = delay;
        self
    }

    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_session(self) -> GameSession<S> {
        self.session
    }

    /// Run until the source is exhausted or a `Quit` event arrives.
    ///
    /// Every pointer-up or click (re)arms a one-shot deadline; when it
    /// passes, the touched cells of both boards are forgotten.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut clear_at: Option<Instant> = None;
        self.renderer.banner(self.session.phase());
        self.flush();

        loop {
            let deadline = clear_at;
            tokio::select! {
                _ = async { sleep_until(deadline.unwrap_or_else(Instant::now)).await }, if deadline.is_some() => {
                    for side in BoardSide::BOTH {
                        self.session.board_mut(side).clear_touched();
                    }
                    clear_at = None;
                    trace!("drag-touched cells cleared");
                }
                event = self.input.next_event() => {
                    let Some(event) = event else {
                        debug!("input source closed");
                        break;
                    };
                    if event == InputEvent::Quit {
                        break;
                    }
                    // a bare click is a whole gesture on its own
                    if matches!(event, InputEvent::PointerUp | InputEvent::Click(..)) {
                        clear_at = Some(Instant::now() + self.drag_clear_delay);
                    }
                    self.handle(event);
                }
            }
        }
        info!("session loop finished in phase {:?}", self.session.phase());
        Ok(())
    }

    /// Apply one event and push the resulting changes to the renderer.
    pub fn handle(&mut self, event: InputEvent) {
        let before = self.session.phase();
        if let Err(e) = self.apply(event) {
            warn!("{:?} rejected: {}", event, e);
            self.renderer.rejected(&e.to_string());
        }
        let after = self.session.phase();
        if before != after {
            self.renderer.banner(after);
        }
        self.flush();
    }

    fn apply(&mut self, event: InputEvent) -> anyhow::Result<()> {
        match event {
            InputEvent::PointerDown(side, c) => self.session.board_mut(side).pointer_down(c)?,
            InputEvent::PointerMove(side, c) => self.session.board_mut(side).pointer_move(c)?,
            InputEvent::PointerUp => {
                for side in BoardSide::BOTH {
                    self.session.board_mut(side).pointer_up();
                }
            }
            InputEvent::Click(side, c) => {
                self.session.board_mut(side).click(c)?;
            }
            InputEvent::HoverEnter(side, c) => self.session.board_mut(side).hover_enter(c)?,
            InputEvent::HoverExit(side, c) => self.session.board_mut(side).hover_exit(c)?,
            InputEvent::StartBattle => self.session.start_battle()?,
            InputEvent::EndBattle => {
                let id = self.session.end_battle()?;
                info!("game saved as record {}", id);
            }
            InputEvent::NewGame => self.session.start_new_game(),
            InputEvent::Show => {
                for side in BoardSide::BOTH {
                    let board = self.session.board(side);
                    self.renderer.draw(side, board, &[]);
                }
            }
            InputEvent::Quit => {}
        }
        Ok(())
    }

    fn flush(&mut self) {
        for side in BoardSide::BOTH {
            let changed = self.session.board_mut(side).take_dirty();
            if !changed.is_empty() {
                self.renderer.draw(side, self.session.board(side), &changed);
            }
        }
    }
}
