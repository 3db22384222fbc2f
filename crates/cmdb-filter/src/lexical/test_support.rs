//! Test helpers for asserting recognizer outcomes.
use crate::errors::{Scan, ScanError};

pub(crate) fn scan_ok(scan: Scan, input: &str) -> usize {
    match scan {
        Ok(cursor) => cursor,
        Err(err) => panic!("{input:?} should be accepted: {err}"),
    }
}

pub(crate) fn scan_err(scan: Scan, input: &str) -> ScanError {
    match scan {
        Ok(cursor) => panic!("{input:?} should be rejected, got cursor {cursor}"),
        Err(err) => err,
    }
}
