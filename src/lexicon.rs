//! Fixed Owens Valley Paiute lexicon: nouns, pronouns, verb stems, and
//! bound morphemes.
//!
//! The vocabulary is compiled in. Entries carry their English gloss and,
//! for demonstrative morphemes, a proximal/distal deixis feature. The
//! tables are built once behind a `OnceLock` and shared read-only for the
//! life of the process; table order is meaningful and is preserved
//! everywhere candidates are listed.

use std::fmt;
use std::sync::OnceLock;

/// Spatial deixis feature carried by demonstrative morphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Deixis {
    /// Near the speaker ("this", "these").
    Proximal,
    /// Away from the speaker ("that", "those").
    Distal,
}

impl fmt::Display for Deixis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deixis::Proximal => write!(f, "proximal"),
            Deixis::Distal => write!(f, "distal"),
        }
    }
}

/// Transitivity class of a verb stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbClass {
    /// Takes an object (noun phrase and/or pronominal prefix).
    Transitive,
    /// Rejects any object marking.
    Intransitive,
}

/// A free lexical entry: surface form plus English gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub form: &'static str,
    pub gloss: &'static str,
}

/// A bound morpheme: suffix, tense marker, or pronominal affix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Morpheme {
    pub form: &'static str,
    pub gloss: &'static str,
    /// Deixis feature, when the morpheme carries one. Demonstrative
    /// suffixes always do; object pronouns only in the third person.
    pub deixis: Option<Deixis>,
}

/// The full compiled-in lexicon.
pub struct Lexicon {
    nouns: Vec<Lexeme>,
    subject_pronouns: Vec<Lexeme>,
    subject_suffixes: Vec<Morpheme>,
    tenses: Vec<Morpheme>,
    transitive_verbs: Vec<Lexeme>,
    intransitive_verbs: Vec<Lexeme>,
    object_pronouns: Vec<Morpheme>,
    object_suffixes: Vec<Morpheme>,
}

static LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// Get the process-wide lexicon, building it on first access.
pub fn lexicon() -> &'static Lexicon {
    LEXICON.get_or_init(Lexicon::build)
}

impl Lexicon {
    fn build() -> Self {
        let nouns = vec![
            Lexeme { form: "isha'", gloss: "coyote" },
            Lexeme { form: "isha'pugu", gloss: "dog" },
            Lexeme { form: "kidi'", gloss: "cat" },
            Lexeme { form: "pugu", gloss: "horse" },
            Lexeme { form: "wai", gloss: "rice" },
            Lexeme { form: "tüba", gloss: "pinenuts" },
            Lexeme { form: "maishibü", gloss: "corn" },
            Lexeme { form: "paya", gloss: "water" },
            Lexeme { form: "payahuupü", gloss: "river" },
            Lexeme { form: "katünu", gloss: "chair" },
            Lexeme { form: "toyabi", gloss: "mountain" },
            Lexeme { form: "tuunapi", gloss: "food" },
            Lexeme { form: "pasohobü", gloss: "tree" },
            Lexeme { form: "nobi", gloss: "house" },
            Lexeme { form: "toni", gloss: "wickiup" },
            Lexeme { form: "apo", gloss: "cup" },
            Lexeme { form: "küna", gloss: "wood" },
            Lexeme { form: "tübbi", gloss: "rock" },
            Lexeme { form: "tabuutsi'", gloss: "cottontail" },
            Lexeme { form: "kamü", gloss: "jackrabbit" },
            Lexeme { form: "aaponu'", gloss: "apple" },
            Lexeme { form: "tüsüga", gloss: "weasle" },
            Lexeme { form: "mukita", gloss: "lizard" },
            Lexeme { form: "wo'ada", gloss: "mosquito" },
            Lexeme { form: "wükada", gloss: "bird snake" },
            Lexeme { form: "wo'abi", gloss: "worm" },
            Lexeme { form: "aingwü", gloss: "squirrel" },
            Lexeme { form: "tsiipa", gloss: "bird" },
            Lexeme { form: "tüwoobü", gloss: "earth" },
            Lexeme { form: "koopi'", gloss: "coffee" },
            Lexeme { form: "pahabichi", gloss: "bear" },
            Lexeme { form: "pagwi", gloss: "fish" },
            Lexeme { form: "kwadzi", gloss: "tail" },
        ];

        let subject_pronouns = vec![
            Lexeme { form: "nüü", gloss: "I" },
            Lexeme { form: "uhu", gloss: "he/she/it" },
            Lexeme { form: "uhuw̃a", gloss: "they" },
            Lexeme { form: "mahu", gloss: "he/she/it" },
            Lexeme { form: "mahuw̃a", gloss: "they" },
            Lexeme { form: "ihi", gloss: "this" },
            Lexeme { form: "ihiw̃a", gloss: "these" },
            Lexeme { form: "taa", gloss: "you and I" },
            Lexeme { form: "nüügwa", gloss: "we (exclusive)" },
            Lexeme { form: "taagwa", gloss: "we (inclusive)" },
            Lexeme { form: "üü", gloss: "you" },
            Lexeme { form: "üügwa", gloss: "you (plural)" },
        ];

        let subject_suffixes = vec![
            Morpheme { form: "ii", gloss: "proximal", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "uu", gloss: "distal", deixis: Some(Deixis::Distal) },
        ];

        let tenses = vec![
            Morpheme { form: "ku", gloss: "completive (past)", deixis: None },
            Morpheme { form: "ti", gloss: "present ongoing (-ing)", deixis: None },
            Morpheme { form: "dü", gloss: "present", deixis: None },
            Morpheme { form: "wei", gloss: "future (will)", deixis: None },
            Morpheme { form: "gaa-wei", gloss: "future (going to)", deixis: None },
            Morpheme { form: "pü", gloss: "have x-ed, am x-ed", deixis: None },
        ];

        let transitive_verbs = vec![
            Lexeme { form: "tüka", gloss: "eat" },
            Lexeme { form: "puni", gloss: "see" },
            Lexeme { form: "hibi", gloss: "drink" },
            Lexeme { form: "naka", gloss: "hear" },
            Lexeme { form: "kwana", gloss: "smell" },
            Lexeme { form: "kwati", gloss: "hit" },
            Lexeme { form: "yadohi", gloss: "talk to" },
            Lexeme { form: "naki", gloss: "chase" },
            Lexeme { form: "tsibui", gloss: "climb" },
            Lexeme { form: "sawa", gloss: "cook" },
            Lexeme { form: "tama'i", gloss: "find" },
            Lexeme { form: "nia", gloss: "read" },
            Lexeme { form: "mui", gloss: "write" },
            Lexeme { form: "nobini", gloss: "visit" },
        ];

        // tsibui is listed in both classes; transitive wins on lookup.
        let intransitive_verbs = vec![
            Lexeme { form: "katü", gloss: "sit" },
            Lexeme { form: "üwi", gloss: "sleep" },
            Lexeme { form: "kwisha'i", gloss: "sneeze" },
            Lexeme { form: "poyoha", gloss: "run" },
            Lexeme { form: "mia", gloss: "go" },
            Lexeme { form: "hukaw̃ia", gloss: "walk" },
            Lexeme { form: "wünü", gloss: "stand" },
            Lexeme { form: "habi", gloss: "lie down" },
            Lexeme { form: "yadoha", gloss: "talk" },
            Lexeme { form: "kwatsa'i", gloss: "fall" },
            Lexeme { form: "waakü", gloss: "work" },
            Lexeme { form: "wükihaa", gloss: "smile" },
            Lexeme { form: "hubiadu", gloss: "sing" },
            Lexeme { form: "nishua'i", gloss: "laugh" },
            Lexeme { form: "tsibui", gloss: "climb" },
            Lexeme { form: "tübinohi", gloss: "play" },
            Lexeme { form: "yotsi", gloss: "fly" },
            Lexeme { form: "nüga", gloss: "dance" },
            Lexeme { form: "pahabi", gloss: "swim" },
            Lexeme { form: "tünia", gloss: "read" },
            Lexeme { form: "tümui", gloss: "write" },
            Lexeme { form: "tsiipe'i", gloss: "chirp" },
        ];

        let object_pronouns = vec![
            Morpheme { form: "i", gloss: "me", deixis: None },
            Morpheme { form: "u", gloss: "him/her/it (distal)", deixis: Some(Deixis::Distal) },
            Morpheme { form: "ui", gloss: "them (distal)", deixis: Some(Deixis::Distal) },
            Morpheme { form: "ma", gloss: "him/her/it (proximal)", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "mai", gloss: "them (proximal)", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "a", gloss: "him/her/it (proximal)", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "ai", gloss: "them (proximal)", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "ni", gloss: "us (plural, exclusive)", deixis: None },
            Morpheme { form: "tei", gloss: "us (plural, inclusive)", deixis: None },
            Morpheme { form: "ta", gloss: "us (dual), you and I", deixis: None },
            Morpheme { form: "ü", gloss: "you (singular)", deixis: None },
            Morpheme { form: "üi", gloss: "you (plural), you all", deixis: None },
        ];

        let object_suffixes = vec![
            Morpheme { form: "eika", gloss: "proximal", deixis: Some(Deixis::Proximal) },
            Morpheme { form: "oka", gloss: "distal", deixis: Some(Deixis::Distal) },
        ];

        Self {
            nouns,
            subject_pronouns,
            subject_suffixes,
            tenses,
            transitive_verbs,
            intransitive_verbs,
            object_pronouns,
            object_suffixes,
        }
    }

    // ── Tables ──────────────────────────────────────────────────────────

    pub fn nouns(&self) -> &[Lexeme] {
        &self.nouns
    }

    pub fn subject_pronouns(&self) -> &[Lexeme] {
        &self.subject_pronouns
    }

    pub fn subject_suffixes(&self) -> &[Morpheme] {
        &self.subject_suffixes
    }

    pub fn tenses(&self) -> &[Morpheme] {
        &self.tenses
    }

    pub fn transitive_verbs(&self) -> &[Lexeme] {
        &self.transitive_verbs
    }

    pub fn intransitive_verbs(&self) -> &[Lexeme] {
        &self.intransitive_verbs
    }

    pub fn object_pronouns(&self) -> &[Morpheme] {
        &self.object_pronouns
    }

    pub fn object_suffixes(&self) -> &[Morpheme] {
        &self.object_suffixes
    }

    // ── Lookups (exact, case-sensitive) ─────────────────────────────────

    pub fn noun(&self, form: &str) -> Option<&Lexeme> {
        self.nouns.iter().find(|l| l.form == form)
    }

    pub fn subject_pronoun(&self, form: &str) -> Option<&Lexeme> {
        self.subject_pronouns.iter().find(|l| l.form == form)
    }

    /// Look up a subject word: pronouns first, then nouns.
    pub fn subject_word(&self, form: &str) -> Option<&Lexeme> {
        self.subject_pronoun(form).or_else(|| self.noun(form))
    }

    pub fn subject_suffix(&self, form: &str) -> Option<&Morpheme> {
        self.subject_suffixes.iter().find(|m| m.form == form)
    }

    pub fn tense(&self, form: &str) -> Option<&Morpheme> {
        self.tenses.iter().find(|m| m.form == form)
    }

    /// Look up a verb stem in both classes. A stem listed in both (tsibui)
    /// resolves to `Transitive`.
    pub fn verb(&self, form: &str) -> Option<(&Lexeme, VerbClass)> {
        self.transitive_verbs
            .iter()
            .find(|l| l.form == form)
            .map(|l| (l, VerbClass::Transitive))
            .or_else(|| {
                self.intransitive_verbs
                    .iter()
                    .find(|l| l.form == form)
                    .map(|l| (l, VerbClass::Intransitive))
            })
    }

    pub fn object_pronoun(&self, form: &str) -> Option<&Morpheme> {
        self.object_pronouns.iter().find(|m| m.form == form)
    }

    pub fn object_suffix(&self, form: &str) -> Option<&Morpheme> {
        self.object_suffixes.iter().find(|m| m.form == form)
    }

    // ── Deixis queries ──────────────────────────────────────────────────

    /// Third-person object pronouns, optionally restricted to one deixis.
    ///
    /// With `None` the full set is returned, proximal entries before
    /// distal ones, each group in table order.
    pub fn third_person_object_pronouns(&self, deixis: Option<Deixis>) -> Vec<&Morpheme> {
        let of = |d: Deixis| {
            self.object_pronouns
                .iter()
                .filter(move |m| m.deixis == Some(d))
        };
        match deixis {
            Some(d) => of(d).collect(),
            None => of(Deixis::Proximal).chain(of(Deixis::Distal)).collect(),
        }
    }

    /// The object suffix carrying the given deixis feature.
    pub fn object_suffix_for(&self, deixis: Deixis) -> Option<&Morpheme> {
        self.object_suffixes.iter().find(|m| m.deixis == Some(deixis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        let lex = lexicon();
        assert_eq!(lex.nouns().len(), 33);
        assert_eq!(lex.subject_pronouns().len(), 12);
        assert_eq!(lex.subject_suffixes().len(), 2);
        assert_eq!(lex.tenses().len(), 6);
        assert_eq!(lex.transitive_verbs().len(), 14);
        assert_eq!(lex.intransitive_verbs().len(), 22);
        assert_eq!(lex.object_pronouns().len(), 12);
        assert_eq!(lex.object_suffixes().len(), 2);
    }

    #[test]
    fn noun_lookup() {
        let lex = lexicon();
        let coyote = lex.noun("isha'").expect("should find isha'");
        assert_eq!(coyote.gloss, "coyote");
        assert!(lex.noun("coyote").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lexicon().noun("Pugu").is_none());
        assert!(lexicon().noun("pugu").is_some());
    }

    #[test]
    fn subject_word_prefers_pronouns() {
        let lex = lexicon();
        let nuu = lex.subject_word("nüü").expect("should find nüü");
        assert_eq!(nuu.gloss, "I");
        let horse = lex.subject_word("pugu").expect("should find pugu");
        assert_eq!(horse.gloss, "horse");
    }

    #[test]
    fn dual_class_stem_resolves_transitive() {
        let (stem, class) = lexicon().verb("tsibui").expect("should find tsibui");
        assert_eq!(stem.gloss, "climb");
        assert_eq!(class, VerbClass::Transitive);
    }

    #[test]
    fn verb_lookup_finds_both_classes() {
        let lex = lexicon();
        assert_eq!(lex.verb("puni").map(|(_, c)| c), Some(VerbClass::Transitive));
        assert_eq!(lex.verb("katü").map(|(_, c)| c), Some(VerbClass::Intransitive));
        assert!(lex.verb("gallop").is_none());
    }

    #[test]
    fn third_person_pronoun_partition() {
        let lex = lexicon();
        let proximal: Vec<&str> = lex
            .third_person_object_pronouns(Some(Deixis::Proximal))
            .iter()
            .map(|m| m.form)
            .collect();
        assert_eq!(proximal, ["ma", "mai", "a", "ai"]);

        let distal: Vec<&str> = lex
            .third_person_object_pronouns(Some(Deixis::Distal))
            .iter()
            .map(|m| m.form)
            .collect();
        assert_eq!(distal, ["u", "ui"]);

        let all: Vec<&str> = lex
            .third_person_object_pronouns(None)
            .iter()
            .map(|m| m.form)
            .collect();
        assert_eq!(all, ["ma", "mai", "a", "ai", "u", "ui"]);
    }

    #[test]
    fn suffix_for_each_deixis() {
        let lex = lexicon();
        assert_eq!(lex.object_suffix_for(Deixis::Proximal).map(|m| m.form), Some("eika"));
        assert_eq!(lex.object_suffix_for(Deixis::Distal).map(|m| m.form), Some("oka"));
    }

    #[test]
    fn demonstratives_carry_deixis() {
        let lex = lexicon();
        for m in lex.subject_suffixes().iter().chain(lex.object_suffixes()) {
            assert!(m.deixis.is_some(), "suffix {} missing deixis", m.form);
        }
        for m in lex.tenses() {
            assert!(m.deixis.is_none(), "tense {} should not carry deixis", m.form);
        }
    }
}
