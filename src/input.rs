#![cfg(feature = "std")]

//! Discrete input events and the sources that deliver them.

use std::str::FromStr;

use anyhow::{anyhow, bail};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::mpsc;

use crate::core::{BoardSide, Coord};

/// One event from the input collaborator, already resolved to grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown(BoardSide, Coord),
    PointerMove(BoardSide, Coord),
    /// Released anywhere on the page, so it reaches both boards.
    PointerUp,
    Click(BoardSide, Coord),
    HoverEnter(BoardSide, Coord),
    HoverExit(BoardSide, Coord),
    StartBattle,
    EndBattle,
    NewGame,
    /// Redraw both boards in full.
    Show,
    Quit,
}

fn parse_side(word: Option<&str>) -> anyhow::Result<BoardSide> {
    match word.map(|w| w.to_ascii_lowercase()).as_deref() {
        Some("own") | Some("me") => Ok(BoardSide::Own),
        Some("opp") | Some("opponent") => Ok(BoardSide::Opponent),
        Some(other) => bail!("Unknown board '{}' - use 'own' or 'opp'", other),
        None => bail!("Missing board - use 'own' or 'opp'"),
    }
}

fn parse_cell(word: Option<&str>) -> anyhow::Result<Coord> {
    let word = word.ok_or_else(|| anyhow!("Missing cell (e.g. B5)"))?;
    word.parse::<Coord>().map_err(|e| anyhow!(e))
}

impl FromStr for InputEvent {
    type Err = anyhow::Error;

    /// Text form used by the interactive CLI, e.g. `click own B5` or `up`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words
            .next()
            .ok_or_else(|| anyhow!("Empty command"))?
            .to_ascii_lowercase();
        let event = match cmd.as_str() {
            "up" => InputEvent::PointerUp,
            "start" => InputEvent::StartBattle,
            "end" | "finish" => InputEvent::EndBattle,
            "new" => InputEvent::NewGame,
            "show" => InputEvent::Show,
            "quit" | "exit" => InputEvent::Quit,
            "down" | "move" | "click" | "hover" | "leave" => {
                let side = parse_side(words.next())?;
                let cell = parse_cell(words.next())?;
                match cmd.as_str() {
                    "down" => InputEvent::PointerDown(side, cell),
                    "move" => InputEvent::PointerMove(side, cell),
                    "click" => InputEvent::Click(side, cell),
                    "hover" => InputEvent::HoverEnter(side, cell),
                    _ => InputEvent::HoverExit(side, cell),
                }
            }
            other => bail!("Unknown command '{}'", other),
        };
        if let Some(extra) = words.next() {
            bail!("Unexpected argument '{}'", extra);
        }
        Ok(event)
    }
}

/// Something the driver can pull input events from.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next event, or `None` once the source is exhausted.
    async fn next_event(&mut self) -> Option<InputEvent>;
}

/// Events pushed through a tokio channel (scripted play, tests, embedding).
pub struct ChannelSource {
    rx: mpsc::UnboundedReceiver<InputEvent>,
}

impl ChannelSource {
    pub fn channel() -> (mpsc::UnboundedSender<InputEvent>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

#[async_trait::async_trait]
impl InputSource for ChannelSource {
    async fn next_event(&mut self) -> Option<InputEvent> {
        self.rx.recv().await
    }
}

/// Text commands read line by line from stdin.
pub struct LineSource {
    lines: Lines<BufReader<Stdin>>,
}

impl LineSource {
    pub fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

#[async_trait::async_trait]
impl InputSource for LineSource {
    async fn next_event(&mut self) -> Option<InputEvent> {
        loop {
            let line = match self.lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => return None,
                Err(e) => {
                    log::error!("stdin read failed: {}", e);
                    return None;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match line.parse() {
                Ok(event) => return Some(event),
                Err(e) => eprintln!("{}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pointer_commands() {
        assert_eq!(
            "click own B5".parse::<InputEvent>().unwrap(),
            InputEvent::Click(BoardSide::Own, Coord::new(1, 4))
        );
        assert_eq!(
            "DOWN opp a1".parse::<InputEvent>().unwrap(),
            InputEvent::PointerDown(BoardSide::Opponent, Coord::new(0, 0))
        );
        assert_eq!("up".parse::<InputEvent>().unwrap(), InputEvent::PointerUp);
    }

    #[test]
    fn rejects_malformed_commands() {
        assert!("click".parse::<InputEvent>().is_err());
        assert!("click sea B5".parse::<InputEvent>().is_err());
        assert!("click own B5 C6".parse::<InputEvent>().is_err());
        assert!("fire own B5".parse::<InputEvent>().is_err());
    }
}
