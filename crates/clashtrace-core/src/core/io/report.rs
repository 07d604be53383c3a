use crate::core::models::transition::Transition;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::{self, Write};

/// Sorts transitions into the report's total, deterministic order:
/// category label, chosen frame RMSD, chosen frame ID, then clash pair.
pub fn sort_transitions(mut transitions: Vec<Transition>) -> Vec<Transition> {
    transitions.sort_by(|a, b| {
        a.clash
            .category
            .as_str()
            .cmp(b.clash.category.as_str())
            .then_with(|| {
                a.frame
                    .rmsd
                    .partial_cmp(&b.frame.rmsd)
                    .unwrap_or(Ordering::Equal)
            })
            .then_with(|| a.frame.id.cmp(&b.frame.id))
            .then_with(|| a.clash.pair().cmp(&b.clash.pair()))
    });
    transitions
}

/// Writes the transition report: a header line followed by one space-delimited
/// record per transition, sorted as by [`sort_transitions`].
///
/// This is the sole contract surface consumed by downstream plotting tools.
pub fn write_transitions(
    transitions: Vec<Transition>,
    residue_names: &HashMap<isize, String>,
    writer: &mut impl Write,
) -> io::Result<()> {
    let sorted = sort_transitions(transitions);

    writeln!(
        writer,
        "# type resname1 res1 atom1 resname2 res2 atom2 frameID RMSD"
    )?;
    for transition in &sorted {
        let name = |res: isize| residue_names.get(&res).map_or("UNK", String::as_str);
        writeln!(
            writer,
            "{} {} {} {} {} {} {} {} {:.3}",
            transition.clash.category,
            name(transition.clash.res1),
            transition.clash.res1,
            transition.atoms.0,
            name(transition.clash.res2),
            transition.clash.res2,
            transition.atoms.1,
            transition.frame.id,
            transition.frame.rmsd,
        )?;
    }
    writer.flush()
}
