//! Version ordering used to pick the newest installer for `latest`.

use std::cmp::Ordering;

/// Compare two installer versions.
///
/// Dotted numeric components are compared numerically, anything that is not
/// a number falls back to string comparison. `1.10.0` sorts after `1.9.2`.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let mut left = a.split(['.', '-']);
    let mut right = b.split(['.', '-']);

    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            // A trailing textual component marks a pre-release (1.0 > 1.0-rc)
            (Some(l), None) => return extra_component(l),
            (None, Some(r)) => return extra_component(r).reverse(),
            (Some(l), Some(r)) => {
                let ordering = match (l.parse::<u64>(), r.parse::<u64>()) {
                    (Ok(l), Ok(r)) => l.cmp(&r),
                    (Ok(_), Err(_)) => Ordering::Greater,
                    (Err(_), Ok(_)) => Ordering::Less,
                    (Err(_), Err(_)) => l.cmp(r),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Ordering of a version against its own prefix, decided by the first
/// component the prefix lacks.
fn extra_component(component: &str) -> Ordering {
    if component.parse::<u64>().is_ok() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Pick the newest version out of `versions`.
pub fn newest<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    versions
        .into_iter()
        .max_by(|a, b| compare_versions(a, b))
}
