//! Compare command implementation

use std::cmp::Ordering;

use console::Style;

use crate::cli::CompareArgs;
use crate::domain::Version;
use crate::error::Result;

/// Print how two versions order, failing on malformed input
pub fn run(args: CompareArgs) -> Result<()> {
    let left = Version::parse(&args.left)?;
    let right = Version::parse(&args.right)?;

    let operator = match left.cmp(&right) {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };

    let bold = Style::new().bold();
    println!("{} {} {}", left, bold.apply_to(operator), right);

    if left == right && left.qualifier() != right.qualifier() {
        let dim = Style::new().dim();
        let note = if left.is_snapshot() != right.is_snapshot() {
            "(same version number; the snapshot is replaceable by its release)"
        } else {
            "(same version number; qualifiers are not ordered)"
        };
        println!("{}", dim.apply_to(note));
    }

    Ok(())
}
