//! Step records and the closed set of kind tags each algorithm emits.
//!
//! A [`Step`] pairs a kind tag with a narration sentence and an owned
//! snapshot of algorithm state. Kind enums are declared with
//! [`step_kind!`](crate::step_kind), which derives the serde tag, the label
//! used for rendering, and which kinds end a trace.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Indices the presentation layer should emphasise for a step.
///
/// Rarely more than a handful (the two pointers of a window, a compared pair),
/// so they live inline.
pub type Highlights = SmallVec<[usize; 4]>;

/// A per-algorithm tag describing what kind of transition a step records.
pub trait StepKind: Copy + Eq + fmt::Debug + Serialize {
    /// Stable kebab-case tag (`"not-found"`), identical to the serde name.
    fn label(&self) -> &'static str;

    /// Whether a step of this kind concludes a trace.
    fn is_terminal(&self) -> bool;
}

/// One immutable point in an algorithm's execution.
///
/// `state` is owned: it was deep-copied from the generator's working state at
/// record time and shares nothing with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step<K, S> {
    /// Position of this step within its trace.
    pub index: usize,
    pub kind: K,
    /// Human-readable narration of the transition.
    pub description: String,
    pub state: S,
}

impl<K: StepKind, S> Step<K, S> {
    /// Whether this step ends its trace.
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// The kind's rendering label.
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }
}

/// Declares a step kind enum.
///
/// Each variant maps to its kebab-case label; variants marked `[terminal]`
/// may close a trace.
///
/// ```ignore
/// step_kind! {
///     /// Transitions of binary search.
///     pub enum SearchKind {
///         Start => "start",
///         Found => "found" [terminal],
///     }
/// }
/// ```
#[macro_export]
macro_rules! step_kind {
    (@terminal terminal) => {
        true
    };
    (@terminal) => {
        false
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal $([$terminal:ident])?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::step::StepKind for $name {
            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $( $name::$variant => $crate::step_kind!(@terminal $($terminal)?), )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::step::StepKind::label(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::step_kind! {
        /// Kinds used only by these tests.
        pub enum ProbeKind {
            Start => "start",
            NotFound => "not-found" [terminal],
            Done => "done" [terminal],
        }
    }

    #[test]
    fn labels_match_serde_names() {
        for kind in [ProbeKind::Start, ProbeKind::NotFound, ProbeKind::Done] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.label()));
        }
    }

    #[test]
    fn terminal_marks_only_listed_variants() {
        assert!(!ProbeKind::Start.is_terminal());
        assert!(ProbeKind::NotFound.is_terminal());
        assert!(ProbeKind::Done.is_terminal());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(ProbeKind::NotFound.to_string(), "not-found");
    }

    #[test]
    fn step_delegates_to_kind() {
        let step = Step {
            index: 0,
            kind: ProbeKind::Done,
            description: "done".to_string(),
            state: (),
        };
        assert!(step.is_terminal());
        assert_eq!(step.label(), "done");
    }
}
