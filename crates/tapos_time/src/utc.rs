use tapos_error::TaposError;
use time::{PrimitiveDateTime, format_description::FormatItem, macros::format_description};

use crate::{Microseconds, TimePoint};

const FMT_FRACTION: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");
const FMT_SEC: &[FormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Parses a node timestamp such as `head_block_time`.
///
/// Nodes emit `YYYY-MM-DDTHH:MM:SS.sss` with no zone designator and mean UTC.
/// The value is always read as UTC, never as local time. A trailing `Z` is
/// tolerated; any other offset is rejected.
pub fn parse_head_block_time(value: &str) -> Result<TimePoint, TaposError> {
    let v = value.strip_suffix('Z').unwrap_or(value);

    let pdt = PrimitiveDateTime::parse(v, FMT_FRACTION)
        .or_else(|_| PrimitiveDateTime::parse(v, FMT_SEC))
        .map_err(|e| TaposError::ParseError(format!("invalid block time {value:?}: {e}")))?;

    let micros = pdt.assume_utc().unix_timestamp_nanos() / 1_000;
    let micros = i64::try_from(micros)
        .map_err(|_| TaposError::ParseError(format!("block time {value:?} out of range")))?;

    Ok(TimePoint::new(Microseconds::new(micros)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{milliseconds, seconds};

    // 2024-01-01T00:00:00Z
    const NEW_YEAR: i64 = 1_704_067_200;

    #[test]
    fn test_parse_without_zone_is_utc() {
        let tp = parse_head_block_time("2024-01-01T00:00:00.000").unwrap();
        assert_eq!(tp.time_since_epoch(), seconds(NEW_YEAR));
    }

    #[test]
    fn test_parse_variants() {
        let with_z = parse_head_block_time("2024-01-01T00:00:00.500Z").unwrap();
        assert_eq!(with_z.time_since_epoch(), seconds(NEW_YEAR) + milliseconds(500));

        let no_fraction = parse_head_block_time("2024-01-01T00:00:01").unwrap();
        assert_eq!(no_fraction.time_since_epoch(), seconds(NEW_YEAR + 1));
    }

    #[test]
    fn test_parse_rejects_offsets_and_garbage() {
        assert!(matches!(
            parse_head_block_time("2024-01-01T00:00:00.000+02:00"),
            Err(TaposError::ParseError(_))
        ));
        assert!(parse_head_block_time("").is_err());
        assert!(parse_head_block_time("2024-13-01T00:00:00").is_err());
        assert!(parse_head_block_time("yesterday").is_err());
    }
}
