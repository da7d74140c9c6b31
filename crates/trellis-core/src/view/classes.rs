use itertools::Itertools;
use std::collections::BTreeMap;

/// Compose a BEM style class list: the base class followed by `base--mod`
/// for every non-empty modifier, in order, without duplicates.
///
/// ```
/// use trellis_core::view::class_names_with_mods;
/// assert_eq!(
///     class_names_with_mods("ui-list", &["vertical", "hide-bullets"]),
///     "ui-list ui-list--vertical ui-list--hide-bullets"
/// );
/// ```
pub fn class_names_with_mods<S: AsRef<str>>(base: &str, mods: &[S]) -> String {
    std::iter::once(base.to_string())
        .chain(
            mods.iter()
                .map(|m| m.as_ref().trim())
                .filter(|m| !m.is_empty())
                .unique()
                .map(|m| format!("{base}--{m}")),
        )
        .join(" ")
}

/// Turn a map of custom attributes into `data-*` attribute pairs.
/// Keys that already carry the prefix are kept as they are.
pub fn data_attributes(attrs: &BTreeMap<String, String>) -> Vec<(String, String)> {
    attrs
        .iter()
        .filter(|(k, _)| !k.is_empty())
        .map(|(k, v)| {
            let key = if k.starts_with("data-") {
                k.clone()
            } else {
                format!("data-{k}")
            };
            (key, v.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_only() {
        assert_eq!(class_names_with_mods::<&str>("ui-button", &[]), "ui-button");
    }

    #[test]
    fn test_skips_empty_and_duplicate_mods() {
        assert_eq!(
            class_names_with_mods("ui-button", &["primary", "", "primary", " large "]),
            "ui-button ui-button--primary ui-button--large"
        );
    }

    #[test]
    fn test_data_attributes() {
        let mut attrs = BTreeMap::new();
        attrs.insert("gtm".to_string(), "calendar".to_string());
        attrs.insert("data-id".to_string(), "7".to_string());
        assert_eq!(
            data_attributes(&attrs),
            vec![
                ("data-id".to_string(), "7".to_string()),
                ("data-gtm".to_string(), "calendar".to_string()),
            ]
        );
    }
}
