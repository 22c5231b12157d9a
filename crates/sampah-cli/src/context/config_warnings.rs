/// Nested sections; `SAMPAH_<SECTION>_<KEY>` with a single underscore is
/// silently ignored by figment.
const SECTIONS: [&str; 4] = ["API", "AUTH", "BANK_SAMPAH", "GENERAL"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    for (key, _) in env {
        let Some(rest) = key.strip_prefix("SAMPAH_") else {
            continue;
        };
        let Some(section) = SECTIONS.iter().find(|section| {
            rest.strip_prefix(*section)
                .is_some_and(|tail| tail.starts_with('_') && !tail.starts_with("__"))
        }) else {
            continue;
        };
        warnings.push(format!(
            "{key} is ignored. Use double underscores (example: SAMPAH_{section}__{}).",
            &rest[section.len() + 1..]
        ));
    }

    warnings
}
