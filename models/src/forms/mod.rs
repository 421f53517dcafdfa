//! Quote form records.
//!
//! Every field is a plain string (a list for commercial coverage types) and
//! defaults to empty. Serialized names are camelCase to match the field names
//! used by the site's form inputs. Missing fields in persisted data fall back
//! to their defaults; unknown fields are ignored.

pub mod commercial;
pub mod home;
