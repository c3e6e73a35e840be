//! Hand-built documents with every annotation layer populated.

use docgraph_json::{
    Animacy, CorefChain, CorefMention, DependencyEdge, DependencyGraph, Document, EntityMention,
    Gender, MentionType, NerConfidences, Number, ParseTree, Quotation, RelationTriple, Section,
    Sentence, Sentiment, Span, Timex, Token,
};

fn token(index: usize, word: &str, begin: usize, pos: &str, ner: &str) -> Token {
    Token {
        original_text: Some(word.to_string()),
        lemma: Some(word.to_lowercase()),
        char_begin: Some(begin),
        char_end: Some(begin + word.len()),
        pos: Some(pos.to_string()),
        ner: Some(ner.to_string()),
        before: Some(if begin == 0 { "" } else { " " }.to_string()),
        after: Some(" ".to_string()),
        ..Token::new(index, word)
    }
}

fn preterminal(tag: &str, word: &str) -> ParseTree {
    ParseTree::node(tag, vec![ParseTree::leaf(word)])
}

/// "Ada wrote notes. She said "Go."" with parses, dependencies, sentiment,
/// entity mentions, triples, a quote, a section and one coreference chain.
pub fn sample_document() -> Document {
    let mut confidences = NerConfidences::new();
    confidences.insert("O".to_string(), 0.02);
    confidences.insert("PERSON".to_string(), 0.98);

    let first = Sentence {
        id: Some("s0".to_string()),
        index: Some(0),
        token_offset: Some(0),
        line: Some(1),
        paragraph: Some(1),
        parse: Some(ParseTree::node(
            "ROOT",
            vec![ParseTree::node(
                "S",
                vec![
                    ParseTree::node("NP", vec![preterminal("NNP", "Ada")]),
                    ParseTree::node(
                        "VP",
                        vec![
                            preterminal("VBD", "wrote"),
                            ParseTree::node("NP", vec![preterminal("NNS", "notes")]),
                        ],
                    ),
                    preterminal(".", "."),
                ],
            )],
        )),
        basic_dependencies: Some(Some(DependencyGraph::new(
            vec![2],
            vec![
                DependencyEdge::new(2, 1, "nsubj"),
                DependencyEdge::new(2, 3, "obj"),
                DependencyEdge::new(2, 4, "punct"),
            ],
        ))),
        enhanced_dependencies: Some(None),
        sentiment: Some(Sentiment {
            class: Some("Neutral".to_string()),
            value: Some(2),
            distribution: Some(vec![0.05, 0.1, 0.7, 0.1, 0.05]),
            tree: Some(ParseTree::node("2", vec![ParseTree::leaf("Ada")])),
        }),
        openie: Some(vec![RelationTriple::new("Ada", "wrote", "notes").with_spans(
            Span::new(0, 1),
            Span::new(1, 2),
            Span::new(2, 3),
        )]),
        kbp: Some(Vec::new()),
        entity_mentions: Some(vec![EntityMention {
            text: Some("Ada".to_string()),
            token_span: Some(Span::new(0, 1)),
            char_span: Some(Span::new(0, 3)),
            ner: Some("PERSON".to_string()),
            ner_confidences: Some(confidences.clone()),
            ..Default::default()
        }]),
        tokens: Some(vec![
            Token {
                ner_confidences: Some(confidences),
                ..token(1, "Ada", 0, "NNP", "PERSON")
            },
            token(2, "wrote", 4, "VBD", "O"),
            token(3, "notes", 10, "NNS", "O"),
            token(4, ".", 15, ".", "O"),
        ]),
        ..Default::default()
    };

    let second = Sentence {
        index: Some(1),
        token_offset: Some(4),
        parse: Some(ParseTree::unparsable()),
        speaker: Some("Ada".to_string()),
        tokens: Some(vec![
            token(1, "She", 17, "PRP", "O"),
            Token {
                timex: Some(Some(Timex {
                    tid: Some("t1".to_string()),
                    timex_type: Some("DATE".to_string()),
                    value: Some("PAST_REF".to_string()),
                    ..Default::default()
                })),
                ..token(2, "said", 21, "VBD", "O")
            },
            Token {
                timex: Some(None),
                ..token(3, "\"Go.\"", 26, "``", "O")
            },
        ]),
        ..Default::default()
    };

    let ada = CorefMention {
        id: Some(1),
        text: Some("Ada".to_string()),
        mention_type: Some(MentionType::Proper),
        number: Some(Number::Singular),
        gender: Some(Gender::Female),
        animacy: Some(Animacy::Animate),
        sentence_index: Some(1),
        token_span: Some(Span::new(1, 2)),
        head_index: Some(1),
        char_span: Some(Span::new(0, 3)),
        position: Some((1, 1)),
    };
    let she = CorefMention {
        id: Some(2),
        text: Some("She".to_string()),
        mention_type: Some(MentionType::Pronominal),
        sentence_index: Some(2),
        token_span: Some(Span::new(1, 2)),
        head_index: Some(1),
        char_span: Some(Span::new(17, 20)),
        position: Some((2, 1)),
        ..ada.clone()
    };

    Document {
        date: Some("1843-09-01".to_string()),
        source_type: Some("letter".to_string()),
        author: Some("A. A. Lovelace".to_string()),
        text: Some("Ada wrote notes. She said \"Go.\"".to_string()),
        sentences: Some(vec![first, second]),
        sections: Some(vec![Section {
            char_begin: Some(0),
            char_end: Some(31),
            author: Some("Ada".to_string()),
            date_time: None,
            sentence_indexes: vec![0, 1],
        }]),
        quotes: Some(vec![Quotation {
            index: Some(0),
            text: Some("\"Go.\"".to_string()),
            char_span: Some(Span::new(26, 31)),
            token_span: Some(Span::new(6, 7)),
            sentence_span: Some(Span::new(1, 1)),
            speaker: Some("She".to_string()),
            ..Default::default()
        }]),
        coref_chains: Some(vec![CorefChain::new(1, vec![ada, she]).with_representative(0)]),
        ..Document::new("sample-1")
    }
}
