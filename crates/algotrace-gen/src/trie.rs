//! Trie insertion followed by prefix queries.
//!
//! Nodes live in an arena; node 0 is the root. Children are kept in a
//! `BTreeMap` so the snapshot lists edges in alphabetical order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use algotrace_core::{step_kind, Recorder, Trace};

step_kind! {
    /// Transitions recorded by [`trie_operations`].
    pub enum TrieKind {
        Start => "start",
        /// A missing edge was added for the next character.
        CreateNode => "create-node",
        /// An existing edge was followed.
        FollowEdge => "follow-edge",
        /// The last node of an inserted word was flagged as a word end.
        MarkWord => "mark-word",
        /// A query matched a stored word.
        Found => "found",
        /// A query fell off the trie or stopped on a non-word node.
        NotFound => "not-found",
        Done => "done" [terminal],
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieNode {
    pub children: BTreeMap<char, usize>,
    pub is_word: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieState {
    pub nodes: Vec<TrieNode>,
    /// Node the cursor is on.
    pub current: usize,
    /// Word being inserted or queried.
    pub word: Option<String>,
    /// Characters of `word` consumed so far.
    pub depth: usize,
    /// `(query, matched)` for every finished query.
    pub results: Vec<(String, bool)>,
}

algotrace_core::snapshot_by_clone!(TrieState);

struct Builder {
    rec: Recorder<TrieKind, TrieState>,
    work: TrieState,
}

impl Builder {
    fn begin(&mut self, word: &str) {
        self.work.current = 0;
        self.work.depth = 0;
        self.work.word = Some(word.to_string());
    }

    fn insert(&mut self, word: &str) {
        self.begin(word);
        for (i, c) in word.chars().enumerate() {
            let here = self.work.current;
            self.work.depth = i + 1;
            match self.work.nodes[here].children.get(&c).copied() {
                Some(next) => {
                    self.work.current = next;
                    self.rec.record(
                        TrieKind::FollowEdge,
                        &self.work,
                        format!("Insert \"{word}\": edge '{c}' exists, follow it to node {next}"),
                    );
                }
                None => {
                    let next = self.work.nodes.len();
                    self.work.nodes.push(TrieNode::default());
                    self.work.nodes[here].children.insert(c, next);
                    self.work.current = next;
                    self.rec.record(
                        TrieKind::CreateNode,
                        &self.work,
                        format!("Insert \"{word}\": no edge '{c}', create node {next}"),
                    );
                }
            }
        }
        let end = self.work.current;
        self.work.nodes[end].is_word = true;
        self.rec.record(
            TrieKind::MarkWord,
            &self.work,
            format!("Mark node {end} as the end of \"{word}\""),
        );
    }

    fn query(&mut self, word: &str) {
        self.begin(word);
        for (i, c) in word.chars().enumerate() {
            let here = self.work.current;
            let Some(next) = self.work.nodes[here].children.get(&c).copied() else {
                self.work.results.push((word.to_string(), false));
                self.rec.record(
                    TrieKind::NotFound,
                    &self.work,
                    format!("Search \"{word}\": node {here} has no edge '{c}', not found"),
                );
                return;
            };
            self.work.current = next;
            self.work.depth = i + 1;
            self.rec.record(
                TrieKind::FollowEdge,
                &self.work,
                format!("Search \"{word}\": follow '{c}' to node {next}"),
            );
        }

        let end = self.work.current;
        let matched = self.work.nodes[end].is_word;
        self.work.results.push((word.to_string(), matched));
        if matched {
            self.rec.record(
                TrieKind::Found,
                &self.work,
                format!("Search \"{word}\": node {end} ends a word, found"),
            );
        } else {
            self.rec.record(
                TrieKind::NotFound,
                &self.work,
                format!("Search \"{word}\": node {end} is only a prefix, not found"),
            );
        }
    }
}

/// Traces inserting every word in `words`, then looking up each of `queries`.
pub fn trie_operations(words: &[String], queries: &[String]) -> Trace<TrieKind, TrieState> {
    let work = TrieState {
        nodes: vec![TrieNode::default()],
        current: 0,
        word: None,
        depth: 0,
        results: Vec::new(),
    };

    if words.is_empty() && queries.is_empty() {
        return Trace::single(
            TrieKind::Done,
            work,
            "No words to insert and no queries to run",
        );
    }

    let mut builder = Builder {
        rec: Recorder::new(),
        work,
    };
    builder.rec.record(
        TrieKind::Start,
        &builder.work,
        format!(
            "Insert {} word(s) into an empty trie, then run {} query(ies)",
            words.len(),
            queries.len()
        ),
    );

    for word in words {
        builder.insert(word);
    }
    for query in queries {
        builder.query(query);
    }

    builder.work.current = 0;
    builder.work.word = None;
    builder.work.depth = 0;
    let found = builder.work.results.iter().filter(|(_, m)| *m).count();
    let description = format!(
        "Trie holds {} node(s); {found} of {} query(ies) found",
        builder.work.nodes.len(),
        builder.work.results.len()
    );
    builder.rec.finish(TrieKind::Done, &builder.work, description)
}
