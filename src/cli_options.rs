use clap::builder::RangedU64ValueParser;
use clap::Parser;
use piece_queue_core::consts::QUEUE_CAPACITY;

#[derive(Parser, Debug)]
#[command(version, about = "Tetris upcoming-pieces queue simulator", long_about = None)]
pub struct QueueArgs {
    /// Seed for the piece generator. Defaults to the current Unix time.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of pieces generated into the queue before the first prompt.
    #[arg(
        long,
        default_value_t = QUEUE_CAPACITY,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=QUEUE_CAPACITY as u64)
    )]
    pub prefill: usize,
}
