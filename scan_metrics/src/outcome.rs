use seq_params::params::ScanParameters;
use serde::Serialize;
use crate::advisory::{advisories, Advisory};
use crate::scan_time::scan_time_seconds;
use crate::scores::{snr_score, resolution_score, speed_score};

#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct DerivedOutcome {
    pub scan_time_seconds:f32,
    pub snr_score:u8,
    pub resolution_score:u8,
    pub speed_score:u8,
    pub advisories:Vec<Advisory>,
}

/// recomputes every derived value from the current parameter fields. there is
/// no cached state, so repeated calls with unchanged parameters are identical
pub fn derive_outcome(params:&ScanParameters) -> DerivedOutcome {
    let scan_time = scan_time_seconds(params);
    DerivedOutcome {
        scan_time_seconds: scan_time,
        snr_score: snr_score(params),
        resolution_score: resolution_score(params),
        speed_score: speed_score(scan_time),
        advisories: advisories(params,scan_time),
    }
}
