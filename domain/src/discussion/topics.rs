//! Opening topics

use rand::Rng;
use rand::seq::SliceRandom;

/// Pool the opening topic is drawn from when a discussion starts unprompted
pub const TOPICS: [&str; 10] = [
    "What will technology look like in 2030?",
    "Will AGI be achieved in the next 5 years?",
    "Should we colonize Mars or fix Earth first?",
    "What's the biggest threat to humanity: AI, climate change, or something else?",
    "Will remote work dominate or will offices make a comeback?",
    "What's the next big breakthrough after AI?",
    "Should we regulate AI development more strictly?",
    "Will cryptocurrency replace traditional banking?",
    "What's the future of education with AI?",
    "How will quantum computing change the world?",
];

/// Pick one topic uniformly at random
pub fn random_topic<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TOPICS.choose(rng).copied().unwrap_or(TOPICS[0])
}
