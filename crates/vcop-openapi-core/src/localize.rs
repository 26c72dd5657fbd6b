//! Spanish copy of the generated document.
//!
//! This is a cosmetic post-process, not a translation facility: a handful of
//! leading verbs in operation summaries and descriptions are swapped for
//! their Spanish equivalents and the top-level metadata is replaced with
//! fixed text. Everything else passes through untouched.

use tracing::debug;

use crate::document::SpecDocument;

/// One literal substitution, applied to the first occurrence only.
pub type Substitution = (&'static str, &'static str);

/// Fixed localized text and substitution tables for one target language.
#[derive(Debug, Clone, Copy)]
pub struct Localization {
    /// Replacement for `info.title`.
    pub title: &'static str,
    /// Replacement for `info.description`.
    pub description: &'static str,
    /// Replacements for server descriptions, by position.
    pub server_descriptions: &'static [&'static str],
    /// Rules applied to operation summaries, in order.
    pub summary_rules: &'static [Substitution],
    /// Rules applied to operation descriptions, in order.
    pub description_rules: &'static [Substitution],
}

/// The Spanish localization.
pub const SPANISH: Localization = Localization {
    title: "API del Protocolo VCOP",
    description: "Protocolo DeFi de Préstamos Avanzado con Arquitectura Híbrida",
    server_descriptions: &["Servidor de producción", "Servidor de testnet"],
    summary_rules: &[
        ("Execute", "Ejecutar"),
        ("Get", "Obtener"),
        ("Check", "Verificar"),
    ],
    description_rules: &[
        ("Execute", "Ejecutar"),
        ("Retrieve", "Obtener"),
        ("Check", "Verificar"),
    ],
};

/// Applies `rules` in order, each replacing only its first occurrence.
///
/// Matching is case-sensitive and ignores word boundaries.
#[must_use]
pub fn substitute(text: &str, rules: &[Substitution]) -> String {
    rules
        .iter()
        .fold(text.to_owned(), |acc, (from, to)| acc.replacen(from, to, 1))
}

impl Localization {
    /// Returns a localized copy of `doc`; `doc` itself is left unchanged.
    #[must_use]
    pub fn apply(&self, doc: &SpecDocument) -> SpecDocument {
        let mut localized = doc.clone();

        localized.info.title = self.title.to_owned();
        localized.info.description = Some(self.description.to_owned());
        for (server, text) in localized.servers.iter_mut().zip(self.server_descriptions) {
            server.description = Some((*text).to_owned());
        }

        let mut rewritten = 0_usize;
        for operation in localized.operations_mut() {
            if let Some(summary) = operation.summary.as_mut() {
                *summary = substitute(summary, self.summary_rules);
            }
            if let Some(description) = operation.description.as_mut() {
                *description = substitute(description, self.description_rules);
            }
            rewritten += 1;
        }

        debug!(operations = rewritten, title = self.title, "Localized document");
        localized
    }
}
