//! Target merge strategy.
//!
//! Combines the mission target with nearby discovery results into the
//! single list the session exposes. Pure data transformation, no I/O.

use crate::search::LocationPoint;

/// Merge the mission target into a list of nearby points.
///
/// The target is flagged and placed first. Any nearby row sharing the
/// target's id is dropped so the result never lists the destination
/// twice. All other rows keep their order and are cleared of any stray
/// target flag, so the result contains exactly one target.
///
/// Deduplication is by id only; distinct points may legitimately share
/// a name or address.
pub fn merge_target(target: LocationPoint, nearby: Vec<LocationPoint>) -> Vec<LocationPoint> {
    let mut target = target;
    target.is_target = true;
    let target_id = target.id.clone();

    let mut merged = Vec::with_capacity(nearby.len() + 1);
    merged.push(target);
    merged.extend(nearby.into_iter().filter(|p| p.id != target_id).map(|mut p| {
        p.is_target = false;
        p
    }));

    merged
}
