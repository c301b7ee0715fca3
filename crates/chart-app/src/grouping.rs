// File: crates/chart-app/src/grouping.rs
// Summary: Ordered group-name -> observations mapping built in one pass.

use indexmap::IndexMap;

use crate::observation::Observation;

/// Group name -> members, in first-seen group order and input order within a group.
pub type Groups<'a> = IndexMap<&'a str, Vec<&'a Observation>>;

pub fn group_by_name<'a, I>(observations: I) -> Groups<'a>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut groups: Groups<'a> = IndexMap::new();
    for o in observations {
        groups.entry(o.group.as_str()).or_default().push(o);
    }
    groups
}

/// Plottable observations only, stable-sorted by time ascending.
pub fn sorted_by_time(observations: &[Observation]) -> Vec<&Observation> {
    let mut out: Vec<&Observation> = observations.iter().filter(|o| o.is_plottable()).collect();
    out.sort_by_key(|o| o.time);
    out
}

/// Move `reference` to the front, leaving the other groups in their existing order.
pub fn reference_first<'a>(mut groups: Groups<'a>, reference: &str) -> Groups<'a> {
    let Some((name, members)) = groups.shift_remove_entry(reference) else {
        return groups;
    };
    let mut out = IndexMap::with_capacity(groups.len() + 1);
    out.insert(name, members);
    out.extend(groups);
    out
}
