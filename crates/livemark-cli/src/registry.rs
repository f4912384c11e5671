use livemark_config::Config;
use livemark_engine::{LanguageDef, LanguageRegistry};

/// The builtin languages with the config file's languages layered on top.
pub fn build_registry(config: &Config) -> LanguageRegistry {
    let mut registry = LanguageRegistry::builtin();

    for (tag, lang) in &config.languages {
        registry.insert(
            tag,
            LanguageDef::new(
                lang.keywords.iter().cloned(),
                lang.line_comment.as_deref(),
                lang.quotes(),
            ),
        );
        for alias in &lang.aliases {
            registry.alias(alias, tag);
        }
        log::debug!("registered language {tag:?} with aliases {:?}", lang.aliases);
    }

    registry
}
