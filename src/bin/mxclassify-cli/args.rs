use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use mxclassify_lib::{ClassifyOptions, DEFAULT_OUTPUT_DIR, MxOrdering};

#[derive(Parser)]
#[command(name = "mxclassify-cli", about = "Email MX Record Classifier")]
pub struct Cli {
    /// fichier d'adresses e-mail (une par ligne)
    #[arg(long)]
    pub input: PathBuf,

    /// répertoire de sortie (un fichier .txt par catégorie)
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// dictionnaire `suffixe:catégorie` pour la classification secondaire
    #[arg(long = "mx-dict")]
    pub mx_dict: Option<PathBuf>,

    /// réutilise Microsoft/Outlook/Gmail_* déjà classés dans --output
    #[arg(long)]
    pub reuse_existing: bool,

    /// ordre des MX: lexicographic|preference
    #[arg(long, default_value = "lexicographic")]
    pub order: String,

    /// une seule requête MX par domaine
    #[arg(long)]
    pub cache_domains: bool,

    /// affiche le résumé en JSON sur stdout (feature `with-serde`)
    #[arg(long)]
    pub summary_json: bool,

    /// écrit un rapport CSV email,category,mx (feature `with-csv`)
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn classify_options(&self) -> Result<ClassifyOptions> {
        Ok(ClassifyOptions::new()
            .with_ordering(ordering_from_str(&self.order)?)
            .cache_domains(self.cache_domains))
    }
}

pub fn ordering_from_str(s: &str) -> Result<MxOrdering> {
    match s {
        "lexicographic" => Ok(MxOrdering::Lexicographic),
        "preference" => Ok(MxOrdering::Preference),
        other => bail!("unknown --order '{other}', use: lexicographic|preference"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_surface() {
        let cli = <Cli as Parser>::try_parse_from(["mxclassify-cli", "--input", "emails.txt"])
            .expect("parse");
        assert_eq!(cli.output, PathBuf::from("classified_emails"));
        assert!(cli.mx_dict.is_none());
        assert!(!cli.reuse_existing);
        assert_eq!(
            cli.classify_options().expect("options").ordering,
            MxOrdering::Lexicographic
        );
    }

    #[test]
    fn long_flags_are_kebab_case() {
        let cli = <Cli as Parser>::try_parse_from([
            "mxclassify-cli",
            "--input",
            "emails.txt",
            "--mx-dict",
            "dict.txt",
            "--reuse-existing",
            "--cache-domains",
            "--order",
            "preference",
        ])
        .expect("parse");
        assert_eq!(cli.mx_dict, Some(PathBuf::from("dict.txt")));
        assert!(cli.reuse_existing);
        let options = cli.classify_options().expect("options");
        assert!(options.cache_domains);
        assert_eq!(options.ordering, MxOrdering::Preference);
    }

    #[test]
    fn input_is_required() {
        assert!(<Cli as Parser>::try_parse_from(["mxclassify-cli"]).is_err());
    }

    #[test]
    fn unknown_order_is_rejected() {
        assert!(ordering_from_str("random").is_err());
    }
}
