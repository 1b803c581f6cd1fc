use std::collections::HashSet;

/// Ways a requested ordering can be rejected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingViolation {
    #[error("position must not be negative, got {0}")]
    NegativePosition(i32),

    #[error("position {position} is beyond the last position {max}")]
    PositionOutOfRange { position: i32, max: i32 },

    #[error("media not attached to this parent: {0:?}")]
    UnknownMedia(Vec<i32>),

    #[error("order is missing attached media: {0:?}")]
    MissingMedia(Vec<i32>),
}

/// Range update that makes room for a single moved item.
///
/// Every attachment with `from <= position <= to` gets `delta` added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionShift {
    pub from: i32,
    pub to: i32,
    pub delta: i32,
}

/// Plans the neighbour shift for moving one item from `current` to `target`.
///
/// Moving forward closes the hole at `current` by pulling `(current, target]`
/// back one slot. Moving backward pushes `[target, current)` forward one slot.
/// Returns `None` when the item already sits at `target`.
pub fn plan_shift(current: i32, target: i32) -> Option<PositionShift> {
    if current < target {
        Some(PositionShift {
            from: current + 1,
            to: target,
            delta: -1,
        })
    } else if current > target {
        Some(PositionShift {
            from: target,
            to: current - 1,
            delta: 1,
        })
    } else {
        None
    }
}

/// Checks a move target against the current positions of the parent.
///
/// Positions may contain gaps after an unlink, so the upper bound is the
/// highest stored position rather than the attachment count.
pub fn validate_target_position(target: i32, max_position: i32) -> Result<(), OrderingViolation> {
    if target < 0 {
        return Err(OrderingViolation::NegativePosition(target));
    }
    if target > max_position {
        return Err(OrderingViolation::PositionOutOfRange {
            position: target,
            max: max_position,
        });
    }
    Ok(())
}

/// Drops repeated ids, keeping the first occurrence and the input order.
pub fn dedup_order(media_ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(media_ids.len());
    media_ids
        .iter()
        .copied()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Validates a client-submitted full ordering against what is attached.
///
/// The deduplicated order must name every attached media exactly once and
/// nothing else. A partial list would leave stale positions colliding with
/// the stamped ones.
pub fn validate_full_order(
    requested: &[i32],
    attached: &[i32],
) -> Result<Vec<i32>, OrderingViolation> {
    let order = dedup_order(requested);

    let attached_set: HashSet<i32> = attached.iter().copied().collect();
    let unknown: Vec<i32> = order
        .iter()
        .copied()
        .filter(|id| !attached_set.contains(id))
        .collect();
    if !unknown.is_empty() {
        return Err(OrderingViolation::UnknownMedia(unknown));
    }

    let requested_set: HashSet<i32> = order.iter().copied().collect();
    let missing: Vec<i32> = attached
        .iter()
        .copied()
        .filter(|id| !requested_set.contains(id))
        .collect();
    if !missing.is_empty() {
        return Err(OrderingViolation::MissingMedia(missing));
    }

    Ok(order)
}
