/// Ghost-specific renderers - injected into the game as observers
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::ghost::event::GhostEvent;

/// Prints the match transcript for people at the console.
pub struct GhostRenderer<W: Write = io::Stdout> {
    ctx: TerminalContext<W>,
}

impl GhostRenderer {
    pub fn stdout() -> Self {
        Self { ctx: TerminalContext::stdout() }
    }
}

impl<W: Write> GhostRenderer<W> {
    pub fn new(ctx: TerminalContext<W>) -> Self {
        Self { ctx }
    }

    pub fn into_inner(self) -> W {
        self.ctx.into_inner()
    }

    fn write_event(&mut self, event: &GhostEvent) -> io::Result<()> {
        match event {
            GhostEvent::TurnStarted { player } => {
                self.ctx.empty_line()?;
                self.ctx.print_colored_line(&format!("--{}'s turn--", player), TerminalColor::Cyan)?;
            }
            GhostEvent::LetterPlayed { player, letter, fragment } => {
                self.ctx.print_line(&format!("{} played the letter '{}'", player, letter))?;
                self.ctx.print_line(&format!("The current word fragment is '{}'", fragment))?;
            }
            GhostEvent::ChallengedAsComplete { challenger, challenged, letter, fragment } => {
                self.ctx.print_colored_line(
                    &format!(
                        "{} is challenging {}, who played the letter '{}' creating the word fragment '{}', \
                         for having accidentally completed a valid word",
                        challenger, challenged, letter, fragment
                    ),
                    TerminalColor::Yellow,
                )?;
            }
            GhostEvent::ChallengedAsImpossible { challenger, challenged, letter, fragment } => {
                self.ctx.print_colored_line(
                    &format!(
                        "{} is challenging {}, who played the letter '{}' creating the word fragment '{}', \
                         for having created an impossible word fragment",
                        challenger, challenged, letter, fragment
                    ),
                    TerminalColor::Yellow,
                )?;
            }
            GhostEvent::FragmentJudged { fragment, is_word, loser } => {
                let verdict = if *is_word { "is a valid word" } else { "is not a valid word" };
                self.ctx.print_line(&format!(
                    "The word fragment '{}' {}, therefore {} loses the round",
                    fragment, verdict, loser
                ))?;
            }
            GhostEvent::IntendedWordJudged { player, word, is_valid, loser } => {
                let verdict = if *is_valid { "is a valid word" } else { "is NOT a valid word" };
                self.ctx.print_line(&format!(
                    "{}'s intended word, '{}', {}, therefore {} loses the round",
                    player, word, verdict, loser
                ))?;
            }
            GhostEvent::Forfeited { player } => {
                self.ctx.print_line(&format!("{} is stumped and is forfeiting the round", player))?;
            }
            GhostEvent::RoundLost { player, ghost_prefix, .. } => {
                self.ctx.print_colored_line(
                    &format!(
                        "{} has lost the round; they gain one letter, and they now have '{}'",
                        player, ghost_prefix
                    ),
                    TerminalColor::Red,
                )?;
            }
            GhostEvent::PlayerEliminated { player, ghost_word } => {
                self.ctx.print_colored_line(
                    &format!("{} has {} and has been eliminated!", player, ghost_word),
                    TerminalColor::Red,
                )?;
            }
            GhostEvent::GameWon { player } => {
                self.ctx.print_colored_line(&format!("{} has won the game!", player), TerminalColor::Green)?;
                self.ctx.empty_line()?;
            }
        }
        self.ctx.flush()
    }
}

impl<W: Write> GameRenderer<GhostEvent> for GhostRenderer<W> {
    fn render(&mut self, event: &GhostEvent) {
        if let Err(e) = self.write_event(event) {
            tracing::warn!(error = %e, "failed to render event");
        }
    }
}

/// Writes each event as one line of JSON.
pub struct JsonTranscript<W: Write> {
    out: W,
}

impl<W: Write> JsonTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GameRenderer<GhostEvent> for JsonTranscript<W> {
    fn render(&mut self, event: &GhostEvent) {
        let result = serde_json::to_writer(&mut self.out, event)
            .map_err(io::Error::from)
            .and_then(|_| writeln!(self.out))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "failed to write transcript");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(events: &[GhostEvent]) -> String {
        let mut renderer = GhostRenderer::new(TerminalContext::plain(Vec::new()));
        for event in events {
            renderer.render(event);
        }
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_round_loss_and_elimination_lines() {
        let text = render_plain(&[
            GhostEvent::RoundLost { player: "Ada".into(), strikes: 5, ghost_prefix: "GHOST".into() },
            GhostEvent::PlayerEliminated { player: "Ada".into(), ghost_word: "GHOST".into() },
            GhostEvent::GameWon { player: "Bob".into() },
        ]);

        assert_eq!(
            text,
            "Ada has lost the round; they gain one letter, and they now have 'GHOST'\n\
             Ada has GHOST and has been eliminated!\n\
             Bob has won the game!\n\n"
        );
    }

    #[test]
    fn test_letter_played_lines() {
        let text = render_plain(&[GhostEvent::LetterPlayed {
            player: "Ada".into(),
            letter: 'g',
            fragment: "g".into(),
        }]);
        assert_eq!(text, "Ada played the letter 'g'\nThe current word fragment is 'g'\n");
    }

    #[test]
    fn test_intended_word_verdict() {
        let text = render_plain(&[GhostEvent::IntendedWordJudged {
            player: "Ada".into(),
            word: "ghostly".into(),
            is_valid: false,
            loser: "Ada".into(),
        }]);
        assert_eq!(
            text,
            "Ada's intended word, 'ghostly', is NOT a valid word, therefore Ada loses the round\n"
        );
    }

    #[test]
    fn test_json_transcript_one_line_per_event() {
        let mut transcript = JsonTranscript::new(Vec::new());
        transcript.render(&GhostEvent::TurnStarted { player: "Ada".into() });
        transcript.render(&GhostEvent::Forfeited { player: "Ada".into() });

        let text = String::from_utf8(transcript.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"event":"turn_started","player":"Ada"}"#);
        assert_eq!(lines[1], r#"{"event":"forfeited","player":"Ada"}"#);
    }
}
