/// Points for a word spelled over `tile_count` cells.
///
/// Counts tiles, not letters: a QU tile is one tile even though it spells two
/// characters.
pub fn calculate_score(tile_count: usize) -> u32 {
    match tile_count {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}
