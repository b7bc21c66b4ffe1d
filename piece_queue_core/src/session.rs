use crate::consts;
use crate::generator::PieceGenerator;
use crate::menu::{MenuCommand, MENU_LINES};
use crate::piece::Piece;
use crate::queue::{PieceQueue, QueueError};
use rand::RngCore;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub const INVALID_OPTION: &str = "Invalid option! Try again.";
pub const PROMPT: &str = "Choose an option: ";

/// Result of applying a single menu command to the session.
#[must_use]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Outcome {
    Played(Piece),
    Inserted(Piece),
    Rejected(QueueError),
    Quit,
}

/// One interactive run: the preview queue plus the generator feeding it.
pub struct Session<R: RngCore> {
    queue: PieceQueue,
    generator: PieceGenerator<R>,
}

impl<R: RngCore> Session<R> {
    pub fn new(generator: PieceGenerator<R>) -> Self {
        Self {
            queue: PieceQueue::new(),
            generator,
        }
    }

    /// Generate up to `count` pieces into the queue, stopping once it is full.
    /// Returns how many were added.
    pub fn prefill(&mut self, count: usize) -> usize {
        let mut added = 0;
        while added < count && !self.queue.is_full() {
            let piece = self.generator.generate();
            if self.queue.enqueue(piece).is_err() {
                break;
            }
            added += 1;
        }
        log::debug!("Prefilled {added} pieces: {}", self.queue);
        added
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn generator(&self) -> &PieceGenerator<R> {
        &self.generator
    }

    pub fn execute(&mut self, command: MenuCommand) -> Outcome {
        match command {
            MenuCommand::Play => self.play(),
            MenuCommand::Insert => self.insert(),
            MenuCommand::Quit => Outcome::Quit,
        }
    }

    fn play(&mut self) -> Outcome {
        match self.queue.dequeue() {
            Ok(piece) => {
                log::debug!("Dequeued {piece}, {} remaining", self.queue.len());
                Outcome::Played(piece)
            }
            Err(e) => {
                log::warn!("Play rejected: {e}");
                Outcome::Rejected(e)
            }
        }
    }

    fn insert(&mut self) -> Outcome {
        // Checked up front so a rejected insert does not burn an id.
        if self.queue.is_full() {
            log::warn!("Insert rejected: {}", QueueError::Full);
            return Outcome::Rejected(QueueError::Full);
        }
        let piece = self.generator.generate();
        match self.queue.enqueue(piece) {
            Ok(()) => {
                log::debug!("Enqueued {piece}, {} stored", self.queue.len());
                Outcome::Inserted(piece)
            }
            Err(e) => Outcome::Rejected(e),
        }
    }

    /// Drive the menu loop until the quit command or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, mut input: I, mut output: O) -> io::Result<()> {
        log::info!("Session started with {} pieces queued", self.queue.len());
        loop {
            self.render(&mut output)?;

            // Raw bytes so a line that is not UTF-8 is rejected like any other bad option.
            let mut raw = Vec::new();
            if input.read_until(b'\n', &mut raw)? == 0 {
                writeln!(output)?;
                log::info!("Input closed, ending session");
                return Ok(());
            }

            let line = String::from_utf8_lossy(&raw);
            let outcome = match line.parse::<MenuCommand>() {
                Ok(command) => self.execute(command),
                Err(e) => {
                    log::warn!("Rejected menu input: {e}");
                    writeln!(output, "\n{INVALID_OPTION}")?;
                    continue;
                }
            };
            writeln!(output, "\n{outcome}")?;

            if outcome == Outcome::Quit {
                return output.flush();
            }
        }
    }

    fn render<O: Write>(&self, output: &mut O) -> io::Result<()> {
        writeln!(output)?;
        writeln!(output, "{}", consts::BANNER_RULE)?;
        writeln!(output, "{}", consts::BANNER_TITLE)?;
        writeln!(output, "{}", consts::BANNER_RULE)?;

        if self.queue.is_empty() {
            writeln!(output, "\n[Queue empty]")?;
        } else {
            writeln!(output, "\nUpcoming pieces:")?;
            writeln!(output, "{}", self.queue)?;
        }

        writeln!(output, "\nOptions:")?;
        for line in MENU_LINES {
            writeln!(output, "{line}")?;
        }
        write!(output, "{PROMPT}")?;
        output.flush()
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Played(piece) => write!(f, "Played piece: {piece}"),
            Self::Inserted(piece) => write!(f, "New piece {piece} added to the queue!"),
            Self::Rejected(QueueError::Empty) => {
                write!(f, "Warning: queue is empty! No piece to play.")
            }
            Self::Rejected(QueueError::Full) => {
                write!(f, "Warning: queue is full! Cannot add more pieces.")
            }
            Self::Quit => write!(f, "Leaving the game... bye!"),
        }
    }
}
