/// Gamification reward for a completed assessment, bracketed by validity score.
///
/// The brackets are a product dial, not a psychometric rule.
pub fn points_for(validity_score: u8) -> u32 {
    match validity_score {
        90.. => 100,
        80..=89 => 75,
        70..=79 => 50,
        _ => 25,
    }
}
