//! Rent schedule lookup.
//!
//! Rent depends only on how many properties of the color the charging
//! player holds, which improvements that color carries, and whether a
//! Double Rent is pending.

use crate::cards::Color;
use crate::core::{Player, RulesConfig};

/// Rent owed for `count` properties of `color`.
///
/// The schedule is indexed by holding count and capped at its last entry.
/// House and hotel bonuses apply only to a full set of an improvable color.
/// `doubled` doubles the total.
#[must_use]
pub fn compute_rent(
    config: &RulesConfig,
    color: Color,
    count: usize,
    has_house: bool,
    has_hotel: bool,
    doubled: bool,
) -> u32 {
    if count == 0 {
        return 0;
    }

    let schedule = &config.rent[color];
    let Some(&last) = schedule.last() else {
        return 0;
    };
    let mut amount = schedule.get(count - 1).copied().unwrap_or(last);

    if count >= config.set_size[color] && config.is_improvable(color) {
        if has_house {
            amount += config.house_bonus;
        }
        if has_hotel {
            amount += config.hotel_bonus;
        }
    }

    if doubled {
        amount *= 2;
    }
    amount
}

/// Rent `player` would charge for `color` right now, including a pending
/// Double Rent.
#[must_use]
pub fn rent_for(player: &Player, color: Color, config: &RulesConfig) -> u32 {
    let group = player.holdings.group(color);
    compute_rent(
        config,
        color,
        group.len(),
        group.has_house(),
        group.has_hotel(),
        player.double_rent_pending,
    )
}
