pub const DEFAULT_TOP_K: usize = 100;
pub const DEFAULT_TOP_M: usize = 10;
pub const DEFAULT_STOP_WORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];
pub const DEFAULT_DATA_PATH: &str = "Book-Txt";
