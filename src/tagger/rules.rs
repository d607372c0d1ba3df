//! Static tag tables: closed-class words, irregular verbs, suffix guesses.

use lazy_static::lazy_static;
use phf::{phf_map, phf_set};
use std::collections::HashSet;

use super::PosTag;

/// Function words whose tag never varies. Checked before the lexicon.
pub(crate) static CLOSED_CLASS: phf::Map<&'static str, PosTag> = phf_map! {
    // determiners
    "the" => PosTag::Determiner,
    "a" => PosTag::Determiner,
    "an" => PosTag::Determiner,
    "this" => PosTag::Determiner,
    "that" => PosTag::Determiner,
    "these" => PosTag::Determiner,
    "those" => PosTag::Determiner,
    "each" => PosTag::Determiner,
    "every" => PosTag::Determiner,
    "all" => PosTag::Determiner,
    "some" => PosTag::Determiner,
    "any" => PosTag::Determiner,
    "no" => PosTag::Determiner,
    "both" => PosTag::Determiner,
    // prepositions and subordinators
    "in" => PosTag::Preposition,
    "on" => PosTag::Preposition,
    "at" => PosTag::Preposition,
    "by" => PosTag::Preposition,
    "for" => PosTag::Preposition,
    "with" => PosTag::Preposition,
    "without" => PosTag::Preposition,
    "from" => PosTag::Preposition,
    "of" => PosTag::Preposition,
    "into" => PosTag::Preposition,
    "onto" => PosTag::Preposition,
    "over" => PosTag::Preposition,
    "under" => PosTag::Preposition,
    "before" => PosTag::Preposition,
    "after" => PosTag::Preposition,
    "between" => PosTag::Preposition,
    "during" => PosTag::Preposition,
    "through" => PosTag::Preposition,
    "within" => PosTag::Preposition,
    "per" => PosTag::Preposition,
    "via" => PosTag::Preposition,
    "if" => PosTag::Preposition,
    "while" => PosTag::Preposition,
    "as" => PosTag::Preposition,
    "to" => PosTag::To,
    // conjunctions
    "and" => PosTag::Conjunction,
    "or" => PosTag::Conjunction,
    "but" => PosTag::Conjunction,
    "nor" => PosTag::Conjunction,
    // pronouns
    "i" => PosTag::Pronoun,
    "you" => PosTag::Pronoun,
    "he" => PosTag::Pronoun,
    "she" => PosTag::Pronoun,
    "it" => PosTag::Pronoun,
    "we" => PosTag::Pronoun,
    "they" => PosTag::Pronoun,
    "me" => PosTag::Pronoun,
    "him" => PosTag::Pronoun,
    "her" => PosTag::Pronoun,
    "us" => PosTag::Pronoun,
    "them" => PosTag::Pronoun,
    "my" => PosTag::Pronoun,
    "your" => PosTag::Pronoun,
    "its" => PosTag::Pronoun,
    "our" => PosTag::Pronoun,
    "their" => PosTag::Pronoun,
    // forms of be, have, do
    "be" => PosTag::VerbBase,
    "is" => PosTag::VerbSingular,
    "am" => PosTag::VerbPresent,
    "are" => PosTag::VerbPresent,
    "was" => PosTag::VerbPast,
    "were" => PosTag::VerbPast,
    "been" => PosTag::VerbParticiple,
    "being" => PosTag::VerbGerund,
    "have" => PosTag::VerbPresent,
    "has" => PosTag::VerbSingular,
    "had" => PosTag::VerbPast,
    "do" => PosTag::VerbBase,
    "does" => PosTag::VerbSingular,
    "did" => PosTag::VerbPast,
    "done" => PosTag::VerbParticiple,
    "doing" => PosTag::VerbGerund,
    // modals
    "can" => PosTag::Modal,
    "could" => PosTag::Modal,
    "will" => PosTag::Modal,
    "would" => PosTag::Modal,
    "shall" => PosTag::Modal,
    "should" => PosTag::Modal,
    "may" => PosTag::Modal,
    "might" => PosTag::Modal,
    "must" => PosTag::Modal,
    // negation
    "not" => PosTag::Adverb,
};

/// Auxiliaries that turn a following past form into a participle.
pub(crate) static AUXILIARIES: phf::Set<&'static str> = phf_set! {
    "is", "am", "are", "was", "were", "be", "been", "being",
    "has", "have", "had", "get", "gets", "got",
};

lazy_static! {
    /// Irregular past-tense forms (strictly past, not participles).
    pub(crate) static ref IRREGULAR_PAST: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.extend([
            "ran", "went", "came", "became", "took", "threw", "drew", "grew",
            "knew", "gave", "wrote", "began", "broke", "chose", "spoke",
            "stood", "understood", "rose", "froze", "drove", "rode", "shook",
            "forgot", "swam", "ate", "fell", "flew", "drank", "sang",
            "sprang", "swore", "tore", "wore", "woke", "saw", "sank",
        ]);
        set
    };

    /// Irregular past participles that no suffix rule can recognize.
    pub(crate) static ref IRREGULAR_PARTICIPLES: HashSet<&'static str> = {
        let mut set = HashSet::new();

        set.extend([
            "gone", "seen", "known", "given", "taken", "made", "come",
            "written", "spoken", "broken", "chosen", "driven", "eaten",
            "fallen", "forgotten", "forgiven", "frozen", "gotten", "hidden",
            "ridden", "risen", "shaken", "shown", "stolen", "sworn", "torn",
            "thrown", "worn", "beaten", "bitten", "blown", "drawn", "flown",
            "grown", "withdrawn", "arisen", "awoken", "forbidden", "mistaken",
            "proven", "woven",
        ]);

        set.extend([
            "begun", "drunk", "rung", "shrunk", "sunk", "sprung", "sung",
            "swum", "spun", "won", "hung", "struck", "stuck", "swung",
            "clung", "flung", "stung", "strung", "wrung",
        ]);

        set.extend([
            "said", "paid", "laid", "heard", "sold", "told", "held", "left",
            "kept", "slept", "swept", "felt", "dealt", "meant", "sent",
            "spent", "bent", "lent", "built", "burnt", "learnt", "spelt",
            "bound", "bred", "brought", "bought", "caught", "taught",
            "thought", "sought", "fought", "found", "ground", "wound",
            "led", "fed", "fled", "sped", "lost", "met", "sat", "shot",
            "slid", "lit",
        ]);

        set
    };
}

/// Suffix-based guess for a word absent from every table.
pub(crate) fn guess(word: &str) -> PosTag {
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()) {
        return PosTag::Cardinal;
    }
    if word.len() > 4 && word.ends_with("ing") {
        return PosTag::VerbGerund;
    }
    if word.len() > 3 && word.ends_with("ed") {
        return PosTag::VerbPast;
    }
    if word.len() > 4 {
        for suffix in ["ize", "ise", "ify"] {
            if word.ends_with(suffix) {
                return PosTag::VerbBase;
            }
        }
        for suffix in [
            "tion", "sion", "ment", "ness", "ance", "ence", "ship", "ity",
        ] {
            if word.ends_with(suffix) {
                return PosTag::Noun;
            }
        }
        for suffix in ["ous", "ful", "less", "able", "ible", "ive"] {
            if word.ends_with(suffix) {
                return PosTag::Adjective;
            }
        }
        if word.ends_with("ly") {
            return PosTag::Adverb;
        }
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return PosTag::NounPlural;
    }
    PosTag::Noun
}
