//! Audio cues for moves and round results.
//!
//! Playback goes through an [`AudioSink`]. The [`Audio`] wrapper carries an
//! explicit `audio_available` flag that is checked before every cue, so a
//! session without working audio plays exactly like one with it.

use derive_more::Display;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use tictactoe_core::{MoveResult, Outcome};
use tracing::{debug, info, instrument, warn};

/// A sound the shell can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// A player completed a line.
    Win,
    /// The board filled without a line.
    Draw,
}

impl Cue {
    /// Cues for a move result, in playback order.
    ///
    /// Rejected moves are silent. An accepted move always gets the move cue,
    /// followed by the win or draw cue when it ended the round.
    pub fn for_result(result: &MoveResult) -> Vec<Cue> {
        if !result.is_accepted() {
            return Vec::new();
        }
        let mut cues = vec![Cue::Move];
        match result.outcome() {
            Outcome::XWins | Outcome::OWins => cues.push(Cue::Win),
            Outcome::Tie => cues.push(Cue::Draw),
            Outcome::InProgress => {}
        }
        cues
    }

    /// Number of terminal bell pulses used to voice this cue.
    pub fn pulses(self) -> usize {
        match self {
            Cue::Move => 1,
            Cue::Win => 2,
            Cue::Draw => 3,
        }
    }
}

/// Something that can voice a [`Cue`].
pub trait AudioSink {
    /// Plays one cue.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the device rejects output.
    fn play(&mut self, cue: Cue) -> io::Result<()>;
}

/// Voices cues as terminal bell characters.
#[derive(Debug)]
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    /// Creates a bell writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the bell, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> io::Result<()> {
        for _ in 0..cue.pulses() {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

/// A sink that discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _cue: Cue) -> io::Result<()> {
        Ok(())
    }
}

/// Audio output with an explicit availability flag.
pub struct Audio {
    sink: Box<dyn AudioSink>,
    audio_available: bool,
}

impl Audio {
    /// Wraps a sink. Cues are dropped unless `audio_available` is set.
    pub fn new(sink: Box<dyn AudioSink>, audio_available: bool) -> Self {
        Self {
            sink,
            audio_available,
        }
    }

    /// Audio that never plays.
    pub fn disabled() -> Self {
        Self::new(Box::new(Silent), false)
    }

    /// Detects whether the terminal bell can be used.
    ///
    /// Audio is unavailable when disabled by configuration, when stdout is
    /// not a terminal, or when `TERM` is `dumb`.
    #[instrument]
    pub fn probe(enabled: bool) -> Self {
        if !enabled {
            info!("Audio disabled by configuration");
            return Self::disabled();
        }
        if !io::stdout().is_terminal() {
            warn!("Audio unavailable: stdout is not a terminal");
            return Self::disabled();
        }
        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            warn!("Audio unavailable: terminal does not support the bell");
            return Self::disabled();
        }
        info!("Audio available via terminal bell");
        Self::new(Box::new(TerminalBell::new(io::stdout())), true)
    }

    /// Checks if cues will be played.
    pub fn audio_available(&self) -> bool {
        self.audio_available
    }

    /// Plays a cue if audio is available.
    ///
    /// A playback failure is logged and turns audio off for the rest of the
    /// session.
    #[instrument(skip(self), fields(available = self.audio_available))]
    pub fn play(&mut self, cue: Cue) {
        if !self.audio_available {
            return;
        }
        if let Err(e) = self.sink.play(cue) {
            warn!(error = %e, %cue, "Could not play sound, disabling audio");
            self.audio_available = false;
        } else {
            debug!(%cue, "Played cue");
        }
    }

    /// Plays every cue belonging to a move result.
    pub fn play_for(&mut self, result: &MoveResult) {
        for cue in Cue::for_result(result) {
            self.play(cue);
        }
    }
}

impl fmt::Debug for Audio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Audio")
            .field("audio_available", &self.audio_available)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tictactoe_core::GameEngine;

    #[derive(Debug, Default, Clone)]
    struct Recorder(Rc<RefCell<Vec<Cue>>>);

    impl AudioSink for Recorder {
        fn play(&mut self, cue: Cue) -> io::Result<()> {
            self.0.borrow_mut().push(cue);
            Ok(())
        }
    }

    struct Broken;

    impl AudioSink for Broken {
        fn play(&mut self, _cue: Cue) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "no device"))
        }
    }

    #[test]
    fn test_cues_follow_move_results() {
        let mut engine = GameEngine::new_session();
        assert_eq!(Cue::for_result(&engine.apply_move(0, 0)), vec![Cue::Move]);
        assert!(Cue::for_result(&engine.apply_move(0, 0)).is_empty());
        for (row, col) in [(1, 0), (0, 1), (1, 1)] {
            engine.apply_move(row, col);
        }
        assert_eq!(
            Cue::for_result(&engine.apply_move(0, 2)),
            vec![Cue::Move, Cue::Win]
        );
    }

    #[test]
    fn test_tie_plays_draw_cue() {
        let mut engine = GameEngine::new_session();
        let moves = [(0, 0), (0, 2), (0, 1), (1, 0), (1, 2), (1, 1), (2, 0), (2, 1)];
        for (row, col) in moves {
            engine.apply_move(row, col);
        }
        assert_eq!(
            Cue::for_result(&engine.apply_move(2, 2)),
            vec![Cue::Move, Cue::Draw]
        );
    }

    #[test]
    fn test_unavailable_audio_skips_sink() {
        let recorder = Recorder::default();
        let mut audio = Audio::new(Box::new(recorder.clone()), false);
        audio.play(Cue::Move);
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_available_audio_reaches_sink() {
        let recorder = Recorder::default();
        let mut audio = Audio::new(Box::new(recorder.clone()), true);
        audio.play(Cue::Win);
        assert_eq!(*recorder.0.borrow(), vec![Cue::Win]);
    }

    #[test]
    fn test_failed_playback_disables_audio() {
        let mut audio = Audio::new(Box::new(Broken), true);
        audio.play(Cue::Move);
        assert!(!audio.audio_available());
    }

    #[test]
    fn test_bell_pulses_per_cue() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::Draw).unwrap();
        bell.play(Cue::Move).unwrap();
        assert_eq!(bell.into_inner(), b"\x07\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_cues_are_distinguishable() {
        use std::collections::HashSet;
        use strum::IntoEnumIterator;
        let pulses: HashSet<usize> = Cue::iter().map(Cue::pulses).collect();
        assert_eq!(pulses.len(), Cue::iter().count());
    }

    #[test]
    fn test_disabled_probe() {
        assert!(!Audio::probe(false).audio_available());
    }
}
