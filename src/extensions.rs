//! Extension traits for protobuf timestamp conversions.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;

/// Convert an optional protobuf timestamp into a UTC datetime.
///
/// A missing or out-of-range timestamp resolves to the Unix epoch, matching
/// the backend's own treatment of nil timestamps.
pub trait TimestampExt {
    fn to_utc(&self) -> DateTime<Utc>;
}

impl TimestampExt for Option<Timestamp> {
    fn to_utc(&self) -> DateTime<Utc> {
        self.as_ref().map_or(DateTime::UNIX_EPOCH, |ts| {
            let nanos = u32::try_from(ts.nanos).unwrap_or(0);
            DateTime::from_timestamp(ts.seconds, nanos).unwrap_or(DateTime::UNIX_EPOCH)
        })
    }
}

/// Convert a UTC datetime into a protobuf timestamp.
pub trait ToProtoTimestamp {
    fn to_proto_timestamp(&self) -> Timestamp;
}

impl ToProtoTimestamp for DateTime<Utc> {
    fn to_proto_timestamp(&self) -> Timestamp {
        Timestamp {
            seconds: self.timestamp(),
            nanos: self.timestamp_subsec_nanos() as i32,
        }
    }
}
