use serde_json::Value;

/// Language that `granular_markings` assigns to `field`.
///
/// Markings are walked in order. A marking that selects `field` without a
/// `lang` is skipped. A structurally broken marking list (not an array, an
/// entry that is not an object, missing or non-array `selectors`) ends the
/// walk with `None`.
pub(crate) fn granular_lang<'a>(markings: Option<&'a Value>, field: &str) -> Option<&'a str> {
    for marking in markings?.as_array()? {
        let marking = marking.as_object()?;
        let selectors = marking.get("selectors")?.as_array()?;

        if selectors.iter().any(|selector| selector.as_str() == Some(field)) {
            if let Some(lang) = marking.get("lang").and_then(Value::as_str) {
                return Some(lang);
            }
        }
    }
    None
}
