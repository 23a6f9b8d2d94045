//! Parse individual report lines and extract the packet counter pairs.
//!
//! A delivery-report line is a sequence of whitespace-separated fields. The
//! analyzer only consumes two of them, at fixed positions:
//!
//! ```text
//! AGENTE 0 -> ENVIOS: 3/5 - RECEBIDOS: 2/2
//! ^      ^ ^  ^       ^   ^ ^          ^
//! 0      1 2  3       4   5 6          7
//! ```
//!
//! Field 4 is the `observed/expected` pair for sent packets, field 7 the
//! pair for received packets. The remaining fields are free-form labels and
//! are not interpreted.

use crate::error::RecordError;

use super::types::{LogRecord, PacketRatio};

/// Position of the sends counter pair within a record.
const SENDS_FIELD_INDEX: usize = 4;

/// Position of the receives counter pair within a record.
const RECEIVES_FIELD_INDEX: usize = 7;

/// Minimum number of fields a record must carry.
const MIN_FIELD_COUNT: usize = RECEIVES_FIELD_INDEX + 1;

/// Parse one report line into a [`LogRecord`].
///
/// # Parameters
///
/// * `line` - A single non-blank report line
///
/// # Returns
///
/// `Ok(LogRecord)` with both counter pairs, or a [`RecordError`] naming the
/// first defect found.
pub fn parse_record(line: &str) -> Result<LogRecord, RecordError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() < MIN_FIELD_COUNT {
        return Err(RecordError::TooFewFields {
            expected: MIN_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let sends = parse_ratio(fields[SENDS_FIELD_INDEX], SENDS_FIELD_INDEX)?;
    let receives = parse_ratio(fields[RECEIVES_FIELD_INDEX], RECEIVES_FIELD_INDEX)?;

    Ok(LogRecord { sends, receives })
}

/// Parse a single `observed/expected` field.
///
/// The field must split into exactly two parts on `/`, both unsigned
/// integers. Anything else (missing slash, extra parts, signs, non-digits)
/// is rejected.
fn parse_ratio(token: &str, index: usize) -> Result<PacketRatio, RecordError> {
    let bad_ratio = || RecordError::BadRatio {
        index,
        token: token.to_string(),
    };

    let mut parts = token.split('/');
    let observed = parts.next().ok_or_else(&bad_ratio)?;
    let expected = parts.next().ok_or_else(&bad_ratio)?;
    if parts.next().is_some() {
        return Err(bad_ratio());
    }

    let observed: u64 = observed.parse().map_err(|_| bad_ratio())?;
    let expected: u64 = expected.parse().map_err(|_| bad_ratio())?;

    Ok(PacketRatio { observed, expected })
}
