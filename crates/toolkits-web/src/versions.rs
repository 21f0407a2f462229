//! Version directory listing — scans the templates root for version
//! subdirectories, newest first.

use std::cmp::Ordering;
use std::path::Path;

use crate::error::Error;

/// Reserved alias for the newest template set. Always listed first; excluded
/// from the directory scan and prepended instead.
pub const LATEST: &str = "latest";

/// List available template versions, newest first.
///
/// Only immediate subdirectories of `templates_root` count; files are
/// ignored. Names sort descending with numeric-aware comparison, so `2.10`
/// is newer than `2.9`. The `latest` alias heads the list even when the root
/// holds no numbered versions at all.
pub fn list_versions(templates_root: &Path) -> Result<Vec<String>, Error> {
    let scan_err = |source| Error::VersionScan {
        path: templates_root.to_path_buf(),
        source,
    };

    let entries = std::fs::read_dir(templates_root).map_err(scan_err)?;

    let mut versions = Vec::new();
    for entry in entries {
        let entry = entry.map_err(scan_err)?;
        if !entry.file_type().map_err(scan_err)?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name == LATEST {
            continue;
        }
        versions.push(name);
    }

    versions.sort_by(|a, b| natural_cmp(b, a));

    let mut listed = Vec::with_capacity(versions.len() + 1);
    listed.push(LATEST.to_string());
    listed.extend(versions);
    Ok(listed)
}

/// The newest version identifier — the first element of `list_versions()`.
pub fn latest_version(templates_root: &Path) -> Result<String, Error> {
    let mut versions = list_versions(templates_root)?;
    Ok(versions.remove(0))
}

/// Compare two strings treating runs of digits by numeric value, so
/// `1.10 > 1.9` and `10 > 9`.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a = a.as_bytes();
    let mut b = b.as_bytes();

    loop {
        match (a.first(), b.first()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ac), Some(&bc)) if ac.is_ascii_digit() && bc.is_ascii_digit() => {
                let (a_num, a_rest) = split_digits(a);
                let (b_num, b_rest) = split_digits(b);

                let a_trim = trim_leading_zeros(a_num);
                let b_trim = trim_leading_zeros(b_num);
                let ord = a_trim
                    .len()
                    .cmp(&b_trim.len())
                    .then_with(|| a_trim.cmp(b_trim));
                if ord != Ordering::Equal {
                    return ord;
                }

                a = a_rest;
                b = b_rest;
            }
            (Some(&ac), Some(&bc)) => match ac.cmp(&bc) {
                Ordering::Equal => {
                    a = &a[1..];
                    b = &b[1..];
                }
                other => return other,
            },
        }
    }
}

fn split_digits(s: &[u8]) -> (&[u8], &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn trim_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|&c| c != b'0').unwrap_or(s.len() - 1);
    &s[start..]
}
