//! Parsing of session commands and user-entered values.
//!
//! Fields are addressed by their 1-based position in the form, as shown by
//! `show`. Values are parsed according to the target field's kind.

use std::path::Path;
use std::str::FromStr;

use formgen_core::{FormgenError, FormgenResult};
use formgen_forms::{FieldId, FieldKind, FieldRegistry, FileHandle, FormValue};

/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// `add <kind> [label]`
    Add {
        /// The kind to add.
        kind: FieldKind,
        /// The label; the kind's menu label when omitted.
        label: Option<String>,
    },
    /// `remove <n>`
    Remove(usize),
    /// `set <n> <value>`
    Set {
        /// 1-based field position.
        position: usize,
        /// The raw value, parsed once the field kind is known.
        raw: String,
    },
    /// `clear <n>`
    Clear(usize),
    /// `submit`
    Submit,
    /// `reset`
    Reset,
    /// `show`
    Show,
    /// `kinds`
    Kinds,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

fn split_word(s: &str) -> (&str, &str) {
    s.split_once(char::is_whitespace)
        .map_or((s, ""), |(word, rest)| (word, rest.trim()))
}

fn parse_position(s: &str) -> FormgenResult<usize> {
    if s.is_empty() {
        return Err(FormgenError::Parse("missing field position".to_string()));
    }
    s.parse()
        .map_err(|_| FormgenError::Parse(format!("'{s}' is not a field position")))
}

fn no_arguments(word: &str, rest: &str, action: Action) -> FormgenResult<Action> {
    if rest.is_empty() {
        Ok(action)
    } else {
        Err(FormgenError::Parse(format!("'{word}' takes no arguments")))
    }
}

impl FromStr for Action {
    type Err = FormgenError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (word, rest) = split_word(line.trim());
        match word.to_lowercase().as_str() {
            "add" => {
                let (kind, label) = split_word(rest);
                if kind.is_empty() {
                    return Err(FormgenError::Parse("usage: add <kind> [label]".to_string()));
                }
                Ok(Self::Add {
                    kind: kind.parse()?,
                    label: (!label.is_empty()).then(|| label.to_string()),
                })
            }
            "remove" | "rm" => Ok(Self::Remove(parse_position(rest)?)),
            "set" => {
                let (position, raw) = split_word(rest);
                Ok(Self::Set {
                    position: parse_position(position)?,
                    raw: raw.to_string(),
                })
            }
            "clear" => Ok(Self::Clear(parse_position(rest)?)),
            "submit" => no_arguments(word, rest, Self::Submit),
            "reset" => no_arguments(word, rest, Self::Reset),
            "show" | "ls" => no_arguments(word, rest, Self::Show),
            "kinds" => no_arguments(word, rest, Self::Kinds),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            "" => Err(FormgenError::Parse("empty command".to_string())),
            other => Err(FormgenError::Parse(format!(
                "unknown command '{other}' (type 'help' for a list)"
            ))),
        }
    }
}

/// Resolves a 1-based position to a field id.
pub fn resolve_position(registry: &FieldRegistry, position: usize) -> FormgenResult<FieldId> {
    position
        .checked_sub(1)
        .and_then(|index| registry.id_at(index))
        .ok_or_else(|| FormgenError::UnknownField(format!("no field at position {position}")))
}

/// Parses a checkbox state.
pub fn parse_bool(raw: &str) -> FormgenResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" | "y" => Ok(true),
        "false" | "no" | "off" | "0" | "n" => Ok(false),
        other => Err(FormgenError::InvalidValue(format!(
            "'{other}' is not a checkbox state (use yes or no)"
        ))),
    }
}

/// Parses a file value: a path to a local file, or `<name>:<bytes>`.
///
/// A path is preferred when it names an existing file; only its name and
/// size are kept.
pub fn parse_file(raw: &str) -> FormgenResult<FileHandle> {
    let raw = raw.trim();
    let path = Path::new(raw);
    if path.is_file() {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map_or_else(|| raw.to_string(), |n| n.to_string_lossy().into_owned());
        return Ok(FileHandle::new(name, metadata.len()));
    }

    let (name, size) = raw.rsplit_once(':').ok_or_else(|| {
        FormgenError::InvalidValue(format!(
            "'{raw}' is neither a file nor of the form <name>:<bytes>"
        ))
    })?;
    let size_bytes = size
        .trim()
        .parse()
        .map_err(|_| FormgenError::InvalidValue(format!("'{size}' is not a byte count")))?;
    if name.trim().is_empty() {
        return Err(FormgenError::InvalidValue("file name is empty".to_string()));
    }
    Ok(FileHandle::new(name.trim(), size_bytes))
}

/// Parses a raw value for a field of the given kind.
pub fn parse_value(kind: FieldKind, raw: &str) -> FormgenResult<FormValue> {
    match kind {
        FieldKind::Checkbox => parse_bool(raw).map(FormValue::Bool),
        FieldKind::File => parse_file(raw).map(FormValue::File),
        _ => Ok(FormValue::text(raw)),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            "add email".parse::<Action>().unwrap(),
            Action::Add {
                kind: FieldKind::Email,
                label: None
            }
        );
        assert_eq!(
            "ADD text  Favourite Colour ".parse::<Action>().unwrap(),
            Action::Add {
                kind: FieldKind::Text,
                label: Some("Favourite Colour".to_string())
            }
        );
        assert!(matches!("add".parse::<Action>(), Err(FormgenError::Parse(_))));
        assert!(matches!("add date".parse::<Action>(), Err(FormgenError::Parse(_))));
    }

    #[test]
    fn test_parse_set_keeps_spaces() {
        assert_eq!(
            "set 2 hello  world".parse::<Action>().unwrap(),
            Action::Set {
                position: 2,
                raw: "hello  world".to_string()
            }
        );
        assert_eq!(
            "set 1".parse::<Action>().unwrap(),
            Action::Set {
                position: 1,
                raw: String::new()
            }
        );
    }

    #[test]
    fn test_parse_simple() {
        assert_eq!("remove 3".parse::<Action>().unwrap(), Action::Remove(3));
        assert_eq!("clear 1".parse::<Action>().unwrap(), Action::Clear(1));
        assert_eq!("submit".parse::<Action>().unwrap(), Action::Submit);
        assert_eq!(" show ".parse::<Action>().unwrap(), Action::Show);
        assert_eq!("quit".parse::<Action>().unwrap(), Action::Quit);
        assert!("submit now".parse::<Action>().is_err());
        assert!("remove x".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
        assert!("dance".parse::<Action>().is_err());
    }

    #[test]
    fn test_resolve_position() {
        let registry = FieldRegistry::new();
        assert_eq!(resolve_position(&registry, 1).ok(), registry.id_at(0));
        assert!(resolve_position(&registry, 0).is_err());
        assert!(matches!(
            resolve_position(&registry, 8),
            Err(FormgenError::UnknownField(_))
        ));
    }

    #[test]
    fn test_parse_bool() {
        for yes in ["true", "YES", "on", "1"] {
            assert!(parse_bool(yes).unwrap());
        }
        for no in ["false", "No", "off", "0"] {
            assert!(!parse_bool(no).unwrap());
        }
        assert!(matches!(parse_bool("maybe"), Err(FormgenError::InvalidValue(_))));
    }

    #[test]
    fn test_parse_file_name_and_size() {
        let handle = parse_file("photo.png:2048").unwrap();
        assert_eq!(handle.name, "photo.png");
        assert_eq!(handle.size_bytes, 2048);
        assert!(parse_file("photo.png").is_err());
        assert!(parse_file("photo.png:big").is_err());
        assert!(parse_file(":12").is_err());
    }

    #[test]
    fn test_parse_file_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.jpg");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0_u8; 300]).unwrap();
        drop(file);

        let handle = parse_file(path.to_str().unwrap()).unwrap();
        assert_eq!(handle.name, "avatar.jpg");
        assert_eq!(handle.size_bytes, 300);
    }

    #[test]
    fn test_parse_value_by_kind() {
        assert_eq!(
            parse_value(FieldKind::Email, "a@b.com").unwrap(),
            FormValue::text("a@b.com")
        );
        assert_eq!(parse_value(FieldKind::Checkbox, "yes").unwrap(), FormValue::Bool(true));
        assert_eq!(
            parse_value(FieldKind::File, "a.jpg:1").unwrap(),
            FormValue::file("a.jpg", 1)
        );
    }
}
