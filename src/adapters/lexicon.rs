//! Rule-based polarity scoring for news headlines.
//!
//! Each known word carries a polarity. A preceding negation flips and damps
//! the next scored word, a preceding intensifier scales it. The headline's
//! polarity is the mean over scored words, clamped to `[-1, 1]`.

use crate::domain::ports::SentimentScorer;
use std::collections::HashMap;

const NEGATION_FACTOR: f64 = -0.5;

const POSITIVE_WORDS: &[(&str, f64)] = &[
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("best", 1.0),
    ("better", 0.5),
    ("positive", 0.2),
    ("success", 0.3),
    ("successful", 0.75),
    ("win", 0.8),
    ("wins", 0.8),
    ("happy", 0.8),
    ("love", 0.5),
    ("amazing", 0.6),
    ("impressive", 1.0),
    ("strong", 0.43),
    ("stronger", 0.5),
    ("robust", 0.5),
    ("solid", 0.4),
    ("bullish", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("rally", 0.7),
    ("rallies", 0.7),
    ("soar", 0.8),
    ("soars", 0.8),
    ("jump", 0.4),
    ("jumps", 0.4),
    ("gain", 0.5),
    ("gains", 0.5),
    ("profit", 0.6),
    ("profitable", 0.6),
    ("growth", 0.6),
    ("grow", 0.4),
    ("grows", 0.4),
    ("rise", 0.5),
    ("rises", 0.5),
    ("increase", 0.5),
    ("improve", 0.5),
    ("improves", 0.5),
    ("outperform", 0.7),
    ("beat", 0.6),
    ("beats", 0.6),
    ("exceed", 0.6),
    ("exceeds", 0.6),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("record", 0.6),
    ("upgrade", 0.6),
    ("upgrades", 0.6),
    ("buy", 0.5),
    ("breakout", 0.6),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("high", 0.16),
    ("higher", 0.25),
    ("top", 0.5),
    ("innovative", 0.5),
    ("boost", 0.5),
    ("boosts", 0.5),
];

const NEGATIVE_WORDS: &[(&str, f64)] = &[
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("poor", -0.4),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("negative", -0.3),
    ("sad", -0.5),
    ("weak", -0.38),
    ("weaker", -0.45),
    ("bearish", -0.8),
    ("crash", -0.9),
    ("crashes", -0.9),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("tumble", -0.7),
    ("tumbles", -0.7),
    ("slump", -0.6),
    ("slumps", -0.6),
    ("drop", -0.6),
    ("drops", -0.6),
    ("fall", -0.5),
    ("falls", -0.5),
    ("decline", -0.6),
    ("declines", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("lose", -0.5),
    ("down", -0.16),
    ("lower", -0.2),
    ("low", -0.2),
    ("decrease", -0.5),
    ("pessimistic", -0.6),
    ("concern", -0.5),
    ("concerns", -0.5),
    ("worry", -0.5),
    ("worries", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("risk", -0.4),
    ("risky", -0.5),
    ("volatile", -0.3),
    ("uncertainty", -0.5),
    ("miss", -0.6),
    ("misses", -0.6),
    ("disappoint", -0.7),
    ("disappointing", -0.6),
    ("underperform", -0.6),
    ("downgrade", -0.6),
    ("downgrades", -0.6),
    ("sell", -0.5),
    ("selloff", -0.6),
    ("crisis", -0.8),
    ("warning", -0.5),
    ("warns", -0.5),
    ("trouble", -0.6),
    ("problem", -0.5),
    ("fail", -0.7),
    ("fails", -0.7),
    ("failure", -0.7),
    ("lawsuit", -0.5),
    ("fraud", -0.9),
    ("layoffs", -0.6),
    ("cut", -0.3),
    ("cuts", -0.3),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nothing", "cannot", "can't", "cant",
    "don't", "dont", "doesn't", "doesnt", "didn't", "didnt", "won't", "wont", "isn't", "isnt",
    "aren't", "arent", "wasn't", "wasnt", "hardly", "barely",
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("really", 1.2),
    ("significantly", 1.3),
    ("sharply", 1.4),
    ("dramatically", 1.4),
    ("massively", 1.5),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("marginally", 0.5),
];

pub struct LexiconScorer {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        let words = POSITIVE_WORDS
            .iter()
            .chain(NEGATIVE_WORDS.iter())
            .map(|(w, s)| (w.to_string(), *s))
            .collect();

        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(w, m)| (w.to_string(), *m))
            .collect();

        Self {
            words,
            intensifiers,
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word)
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\'' || c == '’'))
        .filter(|t| !t.is_empty())
        .map(|t| t.replace('’', "'").to_lowercase())
}

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut scores: Vec<f64> = Vec::new();
        let mut negate_next = false;
        let mut intensifier = 1.0;

        for word in tokenize(text) {
            if Self::is_negation(&word) {
                negate_next = true;
                continue;
            }

            if let Some(mult) = self.intensifiers.get(&word) {
                intensifier = *mult;
                continue;
            }

            match self.words.get(&word) {
                Some(score) => {
                    let mut score = *score * intensifier;
                    if negate_next {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score.clamp(-1.0, 1.0));
                    negate_next = false;
                    intensifier = 1.0;
                }
                None => {
                    // 修飾詞只作用於緊接的詞
                    negate_next = false;
                    intensifier = 1.0;
                }
            }
        }

        if scores.is_empty() {
            return 0.0;
        }

        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        mean.clamp(-1.0, 1.0)
    }
}
