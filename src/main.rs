//! yadoha CLI: Owens Valley Paiute sentence builder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use yadoha::choices::{ChoiceSet, Field, SentenceDraft};
use yadoha::lexicon::{Lexeme, Morpheme, lexicon};
use yadoha::morph::LexemePolicy;
use yadoha::sampler;
use yadoha::sentence;
use yadoha::translate::Translator;

#[derive(Parser)]
#[command(name = "yadoha", version, about = "Owens Valley Paiute sentence builder")]
struct Cli {
    /// Seed for the random number generator (entropy if unset).
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random grammatical sentences.
    Random {
        /// Number of sentences to generate.
        #[arg(long, default_value = "1")]
        count: usize,

        /// Draw subject, object, and a transitive verb directly from
        /// the tables instead of following the agreement engine.
        #[arg(long)]
        big: bool,

        /// Print each sentence as a JSON word breakdown.
        #[arg(long)]
        json: bool,
    },

    /// Build one sentence from explicit field choices.
    Build {
        #[command(flatten)]
        fields: FieldArgs,

        /// Reject verb stems that are not in the lexicon.
        #[arg(long)]
        strict: bool,

        /// Print the word breakdown as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show candidates and requirements for every field of a draft.
    Choices {
        #[command(flatten)]
        fields: FieldArgs,

        /// Print the full choice-state as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate one random sentence and translate it to English.
    Translate,

    /// Build a CSV log of random sentences with English translations.
    Evaluate {
        /// Total number of rows the log should contain.
        #[arg(long, default_value = "10")]
        num: usize,

        /// Path of the CSV log; an existing log is resumed, not redone.
        #[arg(long, default_value = "evaluation.csv")]
        savepath: PathBuf,
    },

    /// Print lexicon tables.
    Lexicon {
        #[command(subcommand)]
        table: LexiconTable,
    },
}

/// The seven sentence fields as CLI flags. Unset flags are left for
/// the agreement engine to fill or disable.
#[derive(Args)]
struct FieldArgs {
    /// Subject noun or pronoun.
    #[arg(long)]
    subject_noun: Option<String>,

    /// Subject demonstrative suffix (ii or uu).
    #[arg(long)]
    subject_suffix: Option<String>,

    /// Verb stem.
    #[arg(long)]
    verb: Option<String>,

    /// Tense suffix.
    #[arg(long)]
    tense: Option<String>,

    /// Object pronoun prefix.
    #[arg(long)]
    object_pronoun: Option<String>,

    /// Object noun.
    #[arg(long)]
    object_noun: Option<String>,

    /// Object demonstrative suffix (eika or oka).
    #[arg(long)]
    object_suffix: Option<String>,
}

impl FieldArgs {
    fn draft(self) -> SentenceDraft {
        SentenceDraft {
            subject_noun: self.subject_noun,
            subject_suffix: self.subject_suffix,
            verb: self.verb,
            verb_tense: self.tense,
            object_pronoun: self.object_pronoun,
            object_noun: self.object_noun,
            object_suffix: self.object_suffix,
        }
    }
}

#[derive(Subcommand)]
enum LexiconTable {
    /// Nouns with English glosses.
    Nouns,
    /// Subject pronouns.
    SubjectPronouns,
    /// Subject demonstrative suffixes.
    SubjectSuffixes,
    /// Tense suffixes.
    Tenses,
    /// Transitive verb stems.
    TransitiveVerbs,
    /// Intransitive verb stems.
    IntransitiveVerbs,
    /// Object pronoun prefixes.
    ObjectPronouns,
    /// Object demonstrative suffixes.
    ObjectSuffixes,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.command {
        Commands::Random { count, big, json } => {
            for _ in 0..count {
                let state = if big {
                    sampler::sample_transitive(&mut rng)
                } else {
                    sampler::sample_guided(&mut rng).into_diagnostic()?
                };
                let sentence =
                    sentence::format_sentence(&state.draft()).into_diagnostic()?;
                if json {
                    let breakdown =
                        serde_json::to_string_pretty(&sentence.details()).into_diagnostic()?;
                    println!("{breakdown}");
                } else {
                    println!("{}", sentence.text());
                }
            }
        }

        Commands::Build {
            fields,
            strict,
            json,
        } => {
            let policy = if strict {
                LexemePolicy::Strict
            } else {
                LexemePolicy::Lenient
            };
            let sentence =
                sentence::format_sentence_with_policy(&fields.draft(), policy)
                    .into_diagnostic()?;
            if json {
                let breakdown =
                    serde_json::to_string_pretty(&sentence.details()).into_diagnostic()?;
                println!("{breakdown}");
            } else {
                println!("{}", sentence.text());
            }
        }

        Commands::Choices { fields, json } => {
            let state = ChoiceSet::compute(&fields.draft());
            if json {
                println!("{}", serde_json::to_string_pretty(&state).into_diagnostic()?);
            } else {
                for field in Field::ALL {
                    let choices = state.field(field);
                    println!(
                        "{} ({}) = {}",
                        field,
                        choices.requirement,
                        choices.value.unwrap_or("-")
                    );
                    for candidate in &choices.candidates {
                        println!("    {}", candidate.label);
                    }
                }
            }
        }

        Commands::Translate => {
            let state = sampler::sample_guided(&mut rng).into_diagnostic()?;
            let draft = state.draft();
            let sentence = sentence::format_sentence(&draft).into_diagnostic()?;
            let translator = Translator::from_env();
            let translation = translator.translate(&draft).into_diagnostic()?;
            println!("Sentence: {}", sentence.text());
            println!("Translation: {translation}");
        }

        Commands::Evaluate { num, savepath } => {
            let translator = Translator::from_env();
            let added =
                yadoha::eval::evaluate(&translator, num, &savepath, &mut rng)
                    .into_diagnostic()?;
            println!("Wrote {added} new rows to {}", savepath.display());
        }

        Commands::Lexicon { table } => {
            let lex = lexicon();
            match table {
                LexiconTable::Nouns => print_lexemes(lex.nouns()),
                LexiconTable::SubjectPronouns => print_lexemes(lex.subject_pronouns()),
                LexiconTable::SubjectSuffixes => print_morphemes(lex.subject_suffixes()),
                LexiconTable::Tenses => print_morphemes(lex.tenses()),
                LexiconTable::TransitiveVerbs => print_lexemes(lex.transitive_verbs()),
                LexiconTable::IntransitiveVerbs => print_lexemes(lex.intransitive_verbs()),
                LexiconTable::ObjectPronouns => print_morphemes(lex.object_pronouns()),
                LexiconTable::ObjectSuffixes => print_morphemes(lex.object_suffixes()),
            }
        }
    }

    Ok(())
}

fn print_lexemes(entries: &[Lexeme]) {
    for entry in entries {
        println!("{:12} {}", entry.form, entry.gloss);
    }
}

fn print_morphemes(entries: &[Morpheme]) {
    for entry in entries {
        println!("{:12} {}", entry.form, entry.gloss);
    }
}
