//! Stochastic document generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use docgraph_json::{
    CorefChain, CorefMention, DependencyEdge, DependencyGraph, Document, EntityMention,
    NerConfidences, ParseTree, Quotation, Section, Sentence, Span, Token,
};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from DOCGRAPH_TEST_SEED or a random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("DOCGRAPH_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| rand::random());
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// `Some(f())` with probability p
    pub fn maybe<T>(&mut self, p: f64, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.chance(p) {
            Some(f(self))
        } else {
            None
        }
    }

    /// A word, occasionally with characters that need escaping or are non-ASCII
    pub fn word(&mut self) -> String {
        const SPICE: &[&str] = &["\"", "\\", "\n", "\t", "é", "日本", "𝄞", "\u{1}"];
        let len = 1 + self.geometric(0.6);
        let mut word: String = (0..len)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect();
        if self.chance(0.1) {
            word.push_str(SPICE[self.rng.gen_range(0..SPICE.len())]);
        }
        word
    }

    pub fn label(&mut self, choices: &[&str]) -> String {
        choices[self.rng.gen_range(0..choices.len())].to_string()
    }

    pub fn confidences(&mut self) -> NerConfidences {
        let mut table = NerConfidences::new();
        for label in ["O", "PERSON", "LOCATION"] {
            if self.chance(0.5) {
                table.insert(label.to_string(), self.rng.gen());
            }
        }
        table
    }

    pub fn token(&mut self, index: usize, offset: usize) -> Token {
        let word = self.word();
        let end = offset + word.len();
        Token {
            lemma: self.maybe(0.5, |g| g.word()),
            char_begin: self.maybe(0.8, |_| offset),
            char_end: self.maybe(0.8, |_| end),
            pos: self.maybe(0.7, |g| g.label(&["NN", "VB", "DT", "JJ"])),
            ner: self.maybe(0.5, |g| g.label(&["O", "PERSON", "DATE"])),
            ner_confidences: self.maybe(0.3, |g| g.confidences()),
            speaker: self.maybe(0.2, |g| g.word()),
            timex: self.maybe(0.1, |_| None),
            ..Token::new(index, word)
        }
    }

    pub fn tree(&mut self, depth: usize) -> ParseTree {
        if depth == 0 || self.chance(0.3) {
            return ParseTree::node(self.label(&["NN", "VB", "DT"]), vec![ParseTree::leaf(self.word())]);
        }
        let n = 1 + self.geometric(0.4);
        let children = (0..n).map(|_| self.tree(depth - 1)).collect();
        ParseTree::node(self.label(&["S", "NP", "VP", "PP"]), children)
    }

    pub fn graph(&mut self, tokens: usize) -> Option<DependencyGraph> {
        if self.chance(0.2) {
            return None;
        }
        let edges = (2..=tokens)
            .map(|dep| DependencyEdge::new(1, dep, self.label(&["nsubj", "obj", "root", "amod"])))
            .collect();
        Some(DependencyGraph::new(vec![1], edges))
    }

    pub fn sentence(&mut self, index: usize, token_offset: usize) -> Sentence {
        let n = 1 + self.geometric(0.7);
        let tokens: Vec<Token> = (1..=n).map(|i| self.token(i, i * 4)).collect();
        Sentence {
            index: Some(index),
            token_offset: self.maybe(0.8, |_| token_offset),
            parse: self.maybe(0.5, |g| if g.chance(0.2) { ParseTree::unparsable() } else { g.tree(3) }),
            basic_dependencies: self.maybe(0.5, |g| g.graph(n)),
            entity_mentions: self.maybe(0.4, |g| {
                (0..g.geometric(0.5))
                    .map(|_| EntityMention {
                        text: Some(g.word()),
                        token_span: Some(Span::new(token_offset, token_offset + 1)),
                        ner_confidences: g.maybe(0.6, |g| g.confidences()),
                        ..Default::default()
                    })
                    .collect()
            }),
            tokens: self.maybe(0.9, |_| tokens),
            ..Default::default()
        }
    }

    pub fn quote(&mut self, index: usize) -> Quotation {
        Quotation {
            index: Some(index),
            text: Some(self.word()),
            speaker: self.maybe(0.5, |g| g.word()),
            canonical_speaker: self.maybe(0.5, |g| g.word()),
            ..Default::default()
        }
    }

    pub fn chain(&mut self, id: i32) -> CorefChain {
        let mentions: Vec<CorefMention> = (0..self.geometric(0.6))
            .map(|i| CorefMention {
                id: Some(i as u32),
                text: Some(self.word()),
                position: Some((1, i + 1)),
                ..Default::default()
            })
            .collect();
        let representative = if mentions.is_empty() || self.chance(0.2) {
            None
        } else {
            Some(self.rng.gen_range(0..mentions.len()))
        };
        CorefChain { id: Some(id), mentions, representative }
    }

    /// A random document; every layer is independently present or absent
    pub fn document(&mut self) -> Document {
        let n = self.geometric(0.6);
        let mut offset = 0;
        let sentences: Vec<Sentence> = (0..n)
            .map(|i| {
                let s = self.sentence(i, offset);
                offset += s.tokens.as_ref().map_or(0, Vec::len);
                s
            })
            .collect();
        Document {
            date: self.maybe(0.3, |g| g.word()),
            author: self.maybe(0.3, |g| g.word()),
            text: self.maybe(0.5, |g| g.word()),
            sentences: self.maybe(0.8, |_| sentences),
            sections: self.maybe(0.3, |_| {
                vec![Section { sentence_indexes: (0..n).collect(), ..Default::default() }]
            }),
            tokens: self.maybe(0.3, |g| vec![g.token(1, 0)]),
            quotes: self.maybe(0.3, |g| (0..g.geometric(0.5)).map(|i| g.quote(i)).collect()),
            coref_chains: self.maybe(0.3, |g| (1..=g.geometric(0.5) as i32).map(|id| g.chain(id)).collect()),
            ..Document::new(format!("doc-{}", self.seed))
        }
    }
}
