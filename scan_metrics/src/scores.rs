use seq_params::params::ScanParameters;
use serde::{Serialize,Deserialize};

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn from_score(score:u8) -> Self {
        match score {
            s if s < 40 => Self::Low,
            s if s < 70 => Self::Medium,
            _=> Self::High
        }
    }
    pub fn decode(&self) -> String {
        match &self {
            Self::Low => String::from("low"),
            Self::Medium => String::from("medium"),
            Self::High => String::from("high"),
        }
    }
}

// snr and resolution stay inside 0-100 over the legal parameter domain
// (corner maxima 97.5 and 100.0), so only speed carries an explicit clamp
pub fn snr_score(params:&ScanParameters) -> u8 {
    let score = (params.nex as f32/4.0)*50.0
        + (params.slice_thickness_mm as f32/10.0)*30.0
        + ((512.0 - params.matrix_size as f32)/512.0)*20.0;
    score.round() as u8
}

pub fn resolution_score(params:&ScanParameters) -> u8 {
    let score = (params.matrix_size as f32/512.0)*60.0
        + ((11.0 - params.slice_thickness_mm as f32)/10.0)*40.0;
    score.round() as u8
}

pub fn speed_score(scan_time_seconds:f32) -> u8 {
    let score = (100.0 - (scan_time_seconds/600.0)*100.0).round() as i32;
    score.clamp(0,100) as u8
}
