// Digit alphabet for combinations
pub const MIN_DIGIT: u8 = 1;
pub const MAX_DIGIT: u8 = 9;
pub const DIGIT_COUNT: usize = (MAX_DIGIT - MIN_DIGIT + 1) as usize;
