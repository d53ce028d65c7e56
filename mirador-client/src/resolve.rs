//! Room identifier resolution
//!
//! Staff type a free-text room "number"; the PMS keys rooms by a numeric id
//! that is not guaranteed to align with that label. The resolver walks a
//! fixed ladder of matching tiers and always produces a usable id, so a
//! submission is never blocked by identifier ambiguity. The tier that fired
//! is recorded for auditability, and degraded tiers are logged.

use crate::inventory::RoomInventory;
use shared::models::Room;

/// Room id used when the inventory is unreachable or empty (tier 6)
pub const FALLBACK_ROOM_ID: i64 = 1;

/// Matching tier that produced a resolved room id, ordered by confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum MatchTier {
    /// Filtered inventory query returned exactly one row
    ExactQuery = 1,
    /// Full-inventory entry whose `numero` equals the input
    ExactNumber = 2,
    /// Input parses to an integer equal to an entry's id
    IdMatch = 3,
    /// Input and an entry's `numero` parse to the same integer
    NumericNumber = 4,
    /// No match; first inventory entry used as a degraded fallback
    FirstEntry = 5,
    /// Inventory unreachable or empty; fixed fallback id
    Fallback = 6,
}

impl MatchTier {
    /// Numeric confidence tier (1 = most precise, 6 = last resort)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Whether this tier is a degraded match that must be logged
    pub fn is_degraded(self) -> bool {
        matches!(self, MatchTier::FirstEntry | MatchTier::Fallback)
    }
}

/// A resolved room id plus the tier that produced it
///
/// Transient: produced once per submission attempt, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoom {
    pub id: i64,
    pub tier: MatchTier,
}

// ============================================================================
// Pure matching tiers (evaluated left-to-right, first hit wins)
// ============================================================================

/// Tier 2: entry whose `numero` equals the input exactly
fn match_exact_number(rooms: &[Room], input: &str) -> Option<i64> {
    rooms.iter().find(|r| r.numero == input).map(|r| r.id)
}

/// Tier 3: input parses to an integer equal to some entry's id
fn match_id(rooms: &[Room], input: &str) -> Option<i64> {
    let wanted: i64 = input.trim().parse().ok()?;
    rooms.iter().find(|r| r.id == wanted).map(|r| r.id)
}

/// Tier 4: input and an entry's `numero` parse to the same integer
fn match_numeric_number(rooms: &[Room], input: &str) -> Option<i64> {
    let wanted: i64 = input.trim().parse().ok()?;
    rooms
        .iter()
        .find(|r| r.numero.trim().parse::<i64>() == Ok(wanted))
        .map(|r| r.id)
}

/// Tier 5: degraded first-entry fallback
fn match_first_entry(rooms: &[Room], _input: &str) -> Option<i64> {
    rooms.first().map(|r| r.id)
}

/// Snapshot tiers 2..=5 in ladder order
const SNAPSHOT_TIERS: &[(MatchTier, fn(&[Room], &str) -> Option<i64>)] = &[
    (MatchTier::ExactNumber, match_exact_number),
    (MatchTier::IdMatch, match_id),
    (MatchTier::NumericNumber, match_numeric_number),
    (MatchTier::FirstEntry, match_first_entry),
];

/// Resolve tiers 2..=5 over a fixed inventory snapshot
///
/// Returns `None` only for an empty snapshot (tier 5 matches any non-empty
/// inventory).
pub fn resolve_in_snapshot(rooms: &[Room], input: &str) -> Option<ResolvedRoom> {
    SNAPSHOT_TIERS.iter().find_map(|(tier, matcher)| {
        matcher(rooms, input).map(|id| ResolvedRoom { id, tier: *tier })
    })
}

/// Resolve a free-text room number to a canonical room id
///
/// Never fails: if every precise tier misses, a degraded match or the fixed
/// fallback id is returned instead. Inventory fetch failures degrade to the
/// next tier and are logged, never propagated.
pub async fn resolve_room<I>(inventory: &I, room_number: &str) -> ResolvedRoom
where
    I: RoomInventory + ?Sized,
{
    // Tier 1: filtered query with exactly one result
    match inventory.find_by_number(room_number).await {
        Ok(rooms) if rooms.len() == 1 => {
            let resolved = ResolvedRoom {
                id: rooms[0].id,
                tier: MatchTier::ExactQuery,
            };
            tracing::debug!(room_number, id = resolved.id, "Room resolved by filtered query");
            return resolved;
        }
        Ok(rooms) => {
            tracing::debug!(
                room_number,
                results = rooms.len(),
                "Filtered room query inconclusive, walking full inventory"
            );
        }
        Err(err) => {
            tracing::warn!(
                room_number,
                error = %err,
                "Filtered room query failed, walking full inventory"
            );
        }
    }

    // Tiers 2..=5: ladder over the full snapshot
    match inventory.list_all().await {
        Ok(rooms) => {
            if let Some(resolved) = resolve_in_snapshot(&rooms, room_number) {
                if resolved.tier.is_degraded() {
                    tracing::warn!(
                        room_number,
                        id = resolved.id,
                        tier = resolved.tier.rank(),
                        "Room resolution degraded to first inventory entry"
                    );
                } else {
                    tracing::debug!(
                        room_number,
                        id = resolved.id,
                        tier = resolved.tier.rank(),
                        "Room resolved from inventory snapshot"
                    );
                }
                return resolved;
            }
            tracing::warn!(room_number, "Room inventory empty, using fixed fallback id");
        }
        Err(err) => {
            tracing::warn!(
                room_number,
                error = %err,
                "Room inventory fetch failed, using fixed fallback id"
            );
        }
    }

    // Tier 6: fixed fallback
    ResolvedRoom {
        id: FALLBACK_ROOM_ID,
        tier: MatchTier::Fallback,
    }
}
