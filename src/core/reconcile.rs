use crate::models::TimeEntry;
use crate::utils::time::minutes_between;
use chrono::NaiveTime;
use serde::Serialize;

/// Time chosen to represent the real attendance event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub time: NaiveTime,
    /// True when the self-reported time replaced the logged one.
    pub adjusted: bool,
}

impl Reconciled {
    fn logged(time: NaiveTime) -> Self {
        Self {
            time,
            adjusted: false,
        }
    }
}

/// Picks the authoritative time for one message.
///
/// The extracted time wins only when it is earlier than the logged time by
/// at least `tolerance_minutes`; a later extracted time is never used.
pub fn reconcile(
    logged: NaiveTime,
    extracted: Option<NaiveTime>,
    tolerance_minutes: u32,
) -> Reconciled {
    let Some(extracted) = extracted else {
        return Reconciled::logged(logged);
    };

    if extracted >= logged {
        return Reconciled::logged(logged);
    }

    if minutes_between(extracted, logged) >= i64::from(tolerance_minutes) {
        Reconciled {
            time: extracted,
            adjusted: true,
        }
    } else {
        Reconciled::logged(logged)
    }
}

impl TimeEntry {
    pub fn reconcile(&self, tolerance_minutes: u32) -> Reconciled {
        reconcile(self.time, self.extracted_time, tolerance_minutes)
    }
}
