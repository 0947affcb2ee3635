//! Rendering tuples as text.

use std::fmt;

/// Render values as `[v1 v2 ...]`, each one in its own [`Debug`](fmt::Debug) form.
pub(crate) fn fmt_values(f: &mut fmt::Formatter, values: &[&dyn fmt::Debug]) -> fmt::Result {
    write!(f, "[")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{:?}", value)?;
    }
    write!(f, "]")
}

/// Render a tuple the way it would be written as a struct literal, prefixed with the types of its
/// fields: `T2<i32, &str> { v1: 1, v2: "one" }`.
///
/// Each entry of `fields` pairs the full type name of a field with its value.
pub(crate) fn fmt_constructor(
    f: &mut fmt::Formatter,
    name: &str,
    fields: &[(&'static str, &dyn fmt::Debug)],
) -> fmt::Result {
    let types = fields
        .iter()
        .map(|(type_name, _)| short_type_name(type_name))
        .collect::<Vec<_>>()
        .join(", ");
    let mut s = f.debug_struct(&format!("{}<{}>", name, types));
    for (i, (_, value)) in fields.iter().enumerate() {
        let _ = s.field(&format!("v{}", i + 1), value);
    }
    s.finish()
}

/// Strip the module paths from a type name produced by [`std::any::type_name`], including the
/// paths of any type arguments.
///
/// # Examples
///
/// ```
/// use tuplet::render::short_type_name;
///
/// assert_eq!(short_type_name("alloc::string::String"), "String");
/// assert_eq!(
///     short_type_name("core::option::Option<alloc::vec::Vec<u8>>"),
///     "Option<Vec<u8>>"
/// );
/// assert_eq!(short_type_name("&str"), "&str");
/// ```
pub fn short_type_name(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    // Where the path segment currently being copied starts in `short`.
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                let _ = chars.next();
                short.truncate(segment_start);
            }
            '<' | '>' | '(' | ')' | '[' | ']' | ',' | ';' | ' ' | '&' | '*' => {
                short.push(c);
                segment_start = short.len();
            }
            _ => short.push(c),
        }
    }
    short
}
