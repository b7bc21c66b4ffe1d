/// Number of pieces the preview queue can hold.
pub const QUEUE_CAPACITY: usize = 5;

/// Id carried by the first piece generated in a session.
pub const FIRST_PIECE_ID: u32 = 0;

pub const BANNER_RULE: &str = "==============================";
pub const BANNER_TITLE: &str = "      UPCOMING PIECES";
