//! Grammatical classification of identifier words.
//!
//! The tagger assigns a part-of-speech tag to each word of a decomposed
//! identifier in one batched call, then `verbs_in` keeps only the verb
//! forms. Tagging is lexicon-driven with closed-class tables and suffix
//! rules behind it; the lexicon is a resource bundle resolved exactly
//! once per process via `Tagger::ensure_initialized`.

pub mod lexicon;
mod rules;

use once_cell::sync::OnceCell;

pub use lexicon::{Lexicon, LexiconError, LexiconSource};

use crate::words::split_words;

/// Part-of-speech tags, a fixed Penn treebank subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// VB - verb, base form
    VerbBase,
    /// VBD - verb, past tense
    VerbPast,
    /// VBG - verb, gerund or present participle
    VerbGerund,
    /// VBN - verb, past participle
    VerbParticiple,
    /// VBP - verb, non-third-person singular present
    VerbPresent,
    /// VBZ - verb, third-person singular present
    VerbSingular,
    /// MD - modal
    Modal,
    /// NN - noun, singular
    Noun,
    /// NNS - noun, plural
    NounPlural,
    /// JJ - adjective
    Adjective,
    /// RB - adverb
    Adverb,
    /// PRP - pronoun
    Pronoun,
    /// DT - determiner
    Determiner,
    /// IN - preposition or subordinating conjunction
    Preposition,
    /// CC - coordinating conjunction
    Conjunction,
    /// CD - cardinal number
    Cardinal,
    /// TO - "to"
    To,
}

impl PosTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::VerbBase => "VB",
            PosTag::VerbPast => "VBD",
            PosTag::VerbGerund => "VBG",
            PosTag::VerbParticiple => "VBN",
            PosTag::VerbPresent => "VBP",
            PosTag::VerbSingular => "VBZ",
            PosTag::Modal => "MD",
            PosTag::Noun => "NN",
            PosTag::NounPlural => "NNS",
            PosTag::Adjective => "JJ",
            PosTag::Adverb => "RB",
            PosTag::Pronoun => "PRP",
            PosTag::Determiner => "DT",
            PosTag::Preposition => "IN",
            PosTag::Conjunction => "CC",
            PosTag::Cardinal => "CD",
            PosTag::To => "TO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VB" => Some(PosTag::VerbBase),
            "VBD" => Some(PosTag::VerbPast),
            "VBG" => Some(PosTag::VerbGerund),
            "VBN" => Some(PosTag::VerbParticiple),
            "VBP" => Some(PosTag::VerbPresent),
            "VBZ" => Some(PosTag::VerbSingular),
            "MD" => Some(PosTag::Modal),
            "NN" => Some(PosTag::Noun),
            "NNS" => Some(PosTag::NounPlural),
            "JJ" => Some(PosTag::Adjective),
            "RB" => Some(PosTag::Adverb),
            "PRP" => Some(PosTag::Pronoun),
            "DT" => Some(PosTag::Determiner),
            "IN" => Some(PosTag::Preposition),
            "CC" => Some(PosTag::Conjunction),
            "CD" => Some(PosTag::Cardinal),
            "TO" => Some(PosTag::To),
            _ => None,
        }
    }

    /// Whether this tag counts as an author-chosen verb form.
    ///
    /// Exactly the base, past, gerund and past-participle tags qualify.
    /// The finite VBZ/VBP tags do not, so `is` and `has` never count.
    pub fn is_verb(&self) -> bool {
        matches!(
            self,
            PosTag::VerbBase | PosTag::VerbPast | PosTag::VerbGerund | PosTag::VerbParticiple
        )
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Process-wide tagger instance; see `Tagger::ensure_initialized`.
static TAGGER: OnceCell<Tagger> = OnceCell::new();

/// Lexicon-backed part-of-speech tagger.
pub struct Tagger {
    lexicon: Lexicon,
}

impl Tagger {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// A tagger over the compiled-in lexicon.
    pub fn with_builtin_lexicon() -> Self {
        Self::new(Lexicon::builtin())
    }

    /// Resolve the lexicon and initialize the process-wide tagger.
    ///
    /// Idempotent: the first call performs the (possibly blocking)
    /// resource resolution, later calls return the same instance. Call
    /// this once at startup, before any per-file processing, and pass
    /// the returned reference down explicitly.
    pub fn ensure_initialized(source: &LexiconSource) -> Result<&'static Tagger, LexiconError> {
        TAGGER.get_or_try_init(|| lexicon::resolve(source).map(Tagger::new))
    }

    /// Tag an ordered word sequence in one batched call.
    ///
    /// Words are looked up lowercased; the returned pairs carry the
    /// words as given, in the same order.
    pub fn tag<S: AsRef<str>>(&self, words: &[S]) -> Vec<(String, PosTag)> {
        let mut tagged = Vec::with_capacity(words.len());
        let mut previous: Option<String> = None;

        for word in words {
            let word = word.as_ref();
            let lower = word.to_lowercase();
            let mut tag = self.tag_word(&lower);

            // A past form after an auxiliary is a participle: "has_failed".
            if tag == PosTag::VerbPast {
                if let Some(prev) = &previous {
                    if rules::AUXILIARIES.contains(prev.as_str()) {
                        tag = PosTag::VerbParticiple;
                    }
                }
            }

            tagged.push((word.to_string(), tag));
            previous = Some(lower);
        }

        tagged
    }

    fn tag_word(&self, word: &str) -> PosTag {
        if let Some(tag) = rules::CLOSED_CLASS.get(word) {
            return *tag;
        }
        if let Some(tag) = self.lexicon.lookup(word) {
            return tag;
        }
        if rules::IRREGULAR_PAST.contains(word) {
            return PosTag::VerbPast;
        }
        if rules::IRREGULAR_PARTICIPLES.contains(word) {
            return PosTag::VerbParticiple;
        }
        rules::guess(word)
    }

    /// The verb-form words of an identifier, with their tags.
    ///
    /// Decomposes the identifier, tags the whole word sequence, and
    /// retains verb-tagged pairs in positional order. Duplicates within
    /// one identifier are preserved.
    pub fn verbs_in(&self, name: &str) -> Vec<(String, PosTag)> {
        let words = split_words(name);
        self.tag(&words)
            .into_iter()
            .filter(|(_, tag)| tag.is_verb())
            .collect()
    }
}
