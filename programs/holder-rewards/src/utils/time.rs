//! Fixed-period time utilities (seconds, UTC, no calendar).
//! - a window `[start, start + duration)` is open while `now < start + duration`
//! - whole_periods = number of completed `period`-second spans since `from`

use crate::error::RewardsError;

/// First timestamp at which a window opened at `start` is closed.
pub fn window_end(start_ts: i64, duration: i64) -> Result<i64, RewardsError> {
    start_ts
        .checked_add(duration)
        .ok_or(RewardsError::MathOverflow)
}

/// True once `now` has reached `start + duration` (inclusive at the boundary).
pub fn has_elapsed(now_ts: i64, start_ts: i64, duration: i64) -> Result<bool, RewardsError> {
    Ok(now_ts >= window_end(start_ts, duration)?)
}

/// Completed `period`-second spans between `from_ts` and `now_ts`.
/// Returns 0 when the clock has not moved past `from_ts`.
pub fn whole_periods(now_ts: i64, from_ts: i64, period: i64) -> Result<u64, RewardsError> {
    if period <= 0 {
        return Err(RewardsError::MathOverflow);
    }
    if now_ts <= from_ts {
        return Ok(0);
    }
    let elapsed = now_ts
        .checked_sub(from_ts)
        .ok_or(RewardsError::MathOverflow)?;
    Ok((elapsed / period) as u64)
}

/// `from_ts` advanced by `count` whole periods.
pub fn advance_periods(from_ts: i64, count: u64, period: i64) -> Result<i64, RewardsError> {
    let count = i64::try_from(count).map_err(|_| RewardsError::MathOverflow)?;
    count
        .checked_mul(period)
        .and_then(|span| from_ts.checked_add(span))
        .ok_or(RewardsError::MathOverflow)
}
