//! Field definition checks.
//!
//! Rules only make sense for some kinds: a checkbox has no length, a phone
//! field has no file extension. These checks catch such combinations when a
//! field is configured, instead of leaving the engine to guess.
//!
//! | id | level | problem |
//! |---|---|---|
//! | `fields.E001` | error | length rule on a non-text kind |
//! | `fields.E002` | error | `min_length` greater than `max_length` |
//! | `fields.E003` | error | format rule on a non-text kind |
//! | `fields.W001` | warning | file rule on a non-file kind (ignored) |
//! | `fields.W002` | warning | empty label |
//! | `fields.I001` | info | several fields share a kind |

use std::collections::HashMap;

use formgen_core::checks::CheckMessage;

use crate::fields::FieldDefinition;
use crate::kinds::FieldKind;
use crate::rules::ValidationRules;

/// Checks a single field configuration.
pub fn check_field(kind: FieldKind, label: &str, rules: &ValidationRules) -> Vec<CheckMessage> {
    let mut messages = Vec::new();
    let obj = if label.is_empty() { kind.as_str() } else { label };

    if rules.has_length_rule() && !kind.is_text() {
        messages.push(CheckMessage::error(
            format!("Length rules are not supported on {kind} fields"),
            Some("Remove min_length and max_length, or use a text-valued kind"),
            Some(obj),
            Some("fields.E001"),
        ));
    }

    if let (Some(min), Some(max)) = (rules.min_length, rules.max_length) {
        if max > 0 && min > max {
            messages.push(CheckMessage::error(
                format!("min_length ({min}) is greater than max_length ({max})"),
                Some("No value could ever satisfy both bounds"),
                Some(obj),
                Some("fields.E002"),
            ));
        }
    }

    if rules.format.is_some() && !kind.is_text() {
        messages.push(CheckMessage::error(
            format!("Format rules are not supported on {kind} fields"),
            Some("Remove the format rule, or use a text-valued kind"),
            Some(obj),
            Some("fields.E003"),
        ));
    }

    if rules.has_file_rule() && kind != FieldKind::File {
        messages.push(CheckMessage::warning(
            format!("File rules on a {kind} field are ignored"),
            Some("Remove allowed_extensions and max_size_bytes"),
            Some(obj),
            Some("fields.W001"),
        ));
    }

    if label.trim().is_empty() {
        messages.push(CheckMessage::warning(
            "Field has an empty label",
            Some("Error messages are built from the label"),
            Some(obj),
            Some("fields.W002"),
        ));
    }

    messages
}

/// Checks every definition, plus form-wide conditions.
pub fn check_fields<'a, I>(fields: I) -> Vec<CheckMessage>
where
    I: IntoIterator<Item = &'a FieldDefinition>,
{
    let mut messages = Vec::new();
    let mut per_kind: HashMap<FieldKind, usize> = HashMap::new();

    for field in fields {
        messages.extend(check_field(field.kind, &field.label, &field.rules));
        *per_kind.entry(field.kind).or_insert(0) += 1;
    }

    let mut shared: Vec<(FieldKind, usize)> =
        per_kind.into_iter().filter(|(_, count)| *count > 1).collect();
    shared.sort();
    for (kind, count) in shared {
        messages.push(CheckMessage::info(
            format!("{count} fields share the {kind} kind"),
            Some("Each field keeps its own value and error"),
            Some(kind.as_str()),
            Some("fields.I001"),
        ));
    }

    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::FieldId;
    use crate::rules::Format;
    use formgen_core::checks::CheckLevel;

    fn ids(messages: &[CheckMessage]) -> Vec<&str> {
        messages.iter().filter_map(|m| m.id.as_deref()).collect()
    }

    #[test]
    fn test_clean_text_field() {
        let rules = ValidationRules::new().required().min_length(2).max_length(10);
        assert!(check_field(FieldKind::Text, "Name", &rules).is_empty());
    }

    #[test]
    fn test_length_on_checkbox() {
        let rules = ValidationRules::new().min_length(2);
        let messages = check_field(FieldKind::Checkbox, "Agree", &rules);
        assert_eq!(ids(&messages), ["fields.E001"]);
        assert_eq!(messages[0].level, CheckLevel::Error);
        assert_eq!(messages[0].obj.as_deref(), Some("Agree"));
    }

    #[test]
    fn test_inverted_bounds() {
        let rules = ValidationRules::new().min_length(5).max_length(2);
        assert_eq!(ids(&check_field(FieldKind::Text, "Name", &rules)), ["fields.E002"]);
    }

    #[test]
    fn test_format_on_file() {
        let rules = ValidationRules::new().format(Format::Email);
        assert_eq!(ids(&check_field(FieldKind::File, "Upload", &rules)), ["fields.E003"]);
    }

    #[test]
    fn test_file_rules_on_text_warn() {
        let rules = ValidationRules::new().allowed_extensions(["txt"]);
        let messages = check_field(FieldKind::Text, "Name", &rules);
        assert_eq!(ids(&messages), ["fields.W001"]);
        assert!(!messages[0].is_error());
    }

    #[test]
    fn test_empty_label() {
        let messages = check_field(FieldKind::Text, "  ", &ValidationRules::new());
        assert_eq!(ids(&messages), ["fields.W002"]);
    }

    #[test]
    fn test_shared_kind_info() {
        let defs = [
            FieldDefinition::from_spec(
                FieldId::new(1),
                crate::fields::FieldSpec::new(FieldKind::Email, "Work Email"),
            ),
            FieldDefinition::from_spec(
                FieldId::new(2),
                crate::fields::FieldSpec::new(FieldKind::Email, "Home Email"),
            ),
        ];
        let messages = check_fields(&defs);
        assert_eq!(ids(&messages), ["fields.I001"]);
        assert_eq!(messages[0].msg, "2 fields share the email kind");
    }

    #[test]
    fn test_default_fields_are_clean() {
        let defs: Vec<FieldDefinition> = crate::fields::default_fields()
            .into_iter()
            .enumerate()
            .map(|(i, spec)| FieldDefinition::from_spec(FieldId::new(i as u64), spec))
            .collect();
        assert!(check_fields(&defs).is_empty());
    }
}
