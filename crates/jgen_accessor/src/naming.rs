//! Accessor name derivation.
//!
//! The canonical getter name depends on the declared field type: primitive
//! `boolean` fields get an `is` prefix, everything else gets `get`. A field
//! whose own name already carries the boolean prefix (`isActive`) is used
//! verbatim. Configured field prefixes are stripped before any of this.

use jgen_ir::JavaType;

use crate::config::AccessorConfig;

/// Canonical getter name for a field, or `None` when the name matches none
/// of the configured prefixes.
pub fn getter_name(field_name: &str, field_type: &JavaType, config: &AccessorConfig) -> Option<String> {
    let base = strip_prefix(field_name, &config.prefixes)?;
    if config.fluent {
        return Some(base.to_string());
    }
    if is_primitive_boolean(field_type) {
        if has_boolean_prefix(base) {
            return Some(base.to_string());
        }
        return Some(format!("is{}", capitalized(base)));
    }
    Some(format!("get{}", capitalized(base)))
}

/// Every name the getter could plausibly answer to. Used for clash scans:
/// a boolean field `active` must not generate `isActive()` when the user
/// already wrote `getActive()`. The canonical name always comes first.
pub fn all_getter_names(field_name: &str, field_type: &JavaType, config: &AccessorConfig) -> Vec<String> {
    let base = match strip_prefix(field_name, &config.prefixes) {
        Some(base) => base,
        None => return Vec::new(),
    };

    let mut names = Vec::new();
    if let Some(canonical) = getter_name(field_name, field_type, config) {
        push_unique(&mut names, canonical);
    }
    if is_primitive_boolean(field_type) {
        push_unique(&mut names, format!("is{}", capitalized(base)));
        if has_boolean_prefix(base) {
            push_unique(&mut names, base.to_string());
        }
    }
    push_unique(&mut names, format!("get{}", capitalized(base)));
    push_unique(&mut names, base.to_string());
    names
}

/// Removes the first matching configured prefix. An empty prefix list keeps
/// the name as-is. A prefix ending in a letter only matches when the next
/// character is not lowercase, so `m` strips from `mValue` but not `minute`.
fn strip_prefix<'a>(field_name: &'a str, prefixes: &[String]) -> Option<&'a str> {
    if prefixes.is_empty() {
        return Some(field_name);
    }
    for prefix in prefixes {
        if prefix.is_empty() {
            return Some(field_name);
        }
        let remainder = match field_name.strip_prefix(prefix.as_str()) {
            Some(rest) if !rest.is_empty() => rest,
            _ => continue,
        };
        let boundary_ok = match prefix.chars().last() {
            Some(last) if last.is_alphabetic() => {
                remainder.chars().next().map_or(false, |c| !c.is_lowercase())
            }
            _ => true,
        };
        if boundary_ok {
            return Some(remainder);
        }
    }
    None
}

/// Capitalizes the leading character, except when the second character is
/// already uppercase. That keeps acronym-style names like `qName` producing
/// `getqName` the way hand-written bean accessors do.
fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    if chars.next().map_or(false, |second| second.is_uppercase()) {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    out.extend(first.to_uppercase());
    out.push_str(&name[first.len_utf8()..]);
    out
}

/// `isActive` style names: longer than two characters, start with `is`, and
/// the third character is uppercase.
fn has_boolean_prefix(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next() == Some('i')
        && chars.next() == Some('s')
        && chars.next().map_or(false, |c| c.is_uppercase())
}

fn is_primitive_boolean(java_type: &JavaType) -> bool {
    matches!(java_type, JavaType::Primitive(name) if name == "boolean")
}

fn push_unique(names: &mut Vec<String>, candidate: String) {
    if !names.contains(&candidate) {
        names.push(candidate);
    }
}
