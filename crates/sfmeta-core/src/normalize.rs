//! # Directory Name Normalization
//!
//! Source trees name metadata folders after the plural, lowercase form of a
//! type (`classes`, `triggers`, `objects`), while the registry is keyed by
//! the metadata API name (`ApexClass`, `ApexTrigger`, `CustomObject`). The
//! alias table bridges the two for the families that are known to differ.
//!
//! Names missing from the table are returned verbatim. Directories that
//! already carry their canonical name (in any casing) still validate through
//! the registry's case-insensitive comparison; a directory whose name
//! differs from the registry entry in some other way (pluralization, say)
//! and has no alias here is reported invalid.

/// Lowercased directory alias → canonical metadata type name.
static ALIASES: &[(&str, &str)] = &[
    ("class", "ApexClass"),
    ("classes", "ApexClass"),
    ("object", "CustomObject"),
    ("objects", "CustomObject"),
    ("trigger", "ApexTrigger"),
    ("triggers", "ApexTrigger"),
    ("layout", "Layout"),
    ("layouts", "Layout"),
    ("permissionset", "PermissionSet"),
    ("permissionsets", "PermissionSet"),
    ("profile", "Profile"),
    ("profiles", "Profile"),
    ("component", "ApexComponent"),
    ("components", "ApexComponent"),
    ("page", "ApexPage"),
    ("pages", "ApexPage"),
    ("application", "CustomApplication"),
    ("applications", "CustomApplication"),
    ("customobject", "CustomObject"),
    ("customobjects", "CustomObject"),
    ("workflow", "Workflow"),
    ("workflows", "Workflow"),
    ("workskillrouting", "WorkSkillRouting"),
    ("workskillroutings", "WorkSkillRouting"),
    ("externalcredential", "ExternalCredential"),
    ("externalcredentials", "ExternalCredential"),
    ("namedcredential", "NamedCredential"),
    ("namedcredentials", "NamedCredential"),
    ("remotesitesetting", "RemoteSiteSetting"),
    ("remotesitesettings", "RemoteSiteSetting"),
    ("staticresource", "StaticResource"),
    ("staticresources", "StaticResource"),
];

/// Map a directory name to its canonical metadata type name.
///
/// The lookup is case-insensitive. Unknown names pass through unchanged.
///
/// ```
/// use sfmeta_core::normalize_directory_name;
///
/// assert_eq!(normalize_directory_name("classes"), "ApexClass");
/// assert_eq!(normalize_directory_name("Triggers"), "ApexTrigger");
/// assert_eq!(normalize_directory_name("lwc"), "lwc");
/// ```
pub fn normalize_directory_name(name: &str) -> &str {
    lookup_alias(&name.to_lowercase()).unwrap_or(name)
}

/// Canonical name for an already-lowercased alias, if the table has one.
pub fn lookup_alias(lowercase: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == lowercase)
        .map(|(_, canonical)| *canonical)
}

/// The full alias table in declaration order.
pub fn aliases() -> &'static [(&'static str, &'static str)] {
    ALIASES
}

/// Distinct canonical names in the alias table, in first-seen order.
pub fn canonical_types() -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for &(_, canonical) in ALIASES {
        if !seen.contains(&canonical) {
            seen.push(canonical);
        }
    }
    seen
}
