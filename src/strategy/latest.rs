//! Latest-per-name reduction of a destination package list

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::domain::Package;

/// Map each package name to its newest destination package
///
/// On equal versions a release wins over a snapshot, so the outcome does not
/// depend on where the snapshot sits in the list. Between two entries with
/// the same snapshot flag the first one seen is kept.
pub fn latest_per_name(destination: &[Package]) -> HashMap<&str, &Package> {
    let mut latest: HashMap<&str, &Package> = HashMap::with_capacity(destination.len());

    for package in destination {
        let replace = latest
            .get(package.name())
            .is_none_or(|current| supersedes(package, current));
        if replace {
            latest.insert(package.name(), package);
        }
    }

    latest
}

fn supersedes(candidate: &Package, current: &Package) -> bool {
    match candidate.compare_version(current) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => current.is_snapshot() && !candidate.is_snapshot(),
    }
}
