/// Movie ids are store-assigned integers, starting at 1.
pub type MovieId = i64;
