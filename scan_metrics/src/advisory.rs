use seq_params::params::ScanParameters;
use serde::Serialize;

#[derive(Clone,Debug,PartialEq,Serialize)]
pub enum AdvisoryLevel {
    High,
    Medium,
    Good,
}

impl AdvisoryLevel {
    pub fn decode(&self) -> String {
        match &self {
            Self::High => String::from("high"),
            Self::Medium => String::from("medium"),
            Self::Good => String::from("good"),
        }
    }
}

#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct Advisory {
    pub level:AdvisoryLevel,
    pub message:&'static str,
}

struct AdvisoryRule {
    level:AdvisoryLevel,
    message:&'static str,
    applies:fn(&ScanParameters,f32) -> bool,
}

fn long_scan(_params:&ScanParameters,scan_time:f32) -> bool {
    scan_time > 600.0
}

fn minimum_averaging(params:&ScanParameters,_scan_time:f32) -> bool {
    params.nex == 1
}

fn low_matrix(params:&ScanParameters,_scan_time:f32) -> bool {
    params.matrix_size < 128
}

fn thick_slices(params:&ScanParameters,_scan_time:f32) -> bool {
    params.slice_thickness_mm > 5
}

fn moderate_slices(params:&ScanParameters,_scan_time:f32) -> bool {
    params.slice_thickness_mm == 3
}

fn isotropic_slices(params:&ScanParameters,_scan_time:f32) -> bool {
    params.slice_thickness_mm <= 1
}

fn balanced_acquisition(params:&ScanParameters,scan_time:f32) -> bool {
    params.nex >= 3 && params.matrix_size >= 256 && params.slice_thickness_mm <= 3 && scan_time < 600.0
}

// evaluated top to bottom on every call; rules are independent and any
// number of them may fire at once
static RULES:[AdvisoryRule;7] = [
    AdvisoryRule {
        level: AdvisoryLevel::High,
        message: "prolonged scan time raises motion-artifact risk.",
        applies: long_scan,
    },
    AdvisoryRule {
        level: AdvisoryLevel::High,
        message: "minimum averaging: high noise floor.",
        applies: minimum_averaging,
    },
    AdvisoryRule {
        level: AdvisoryLevel::High,
        message: "low matrix: severe loss of fine detail.",
        applies: low_matrix,
    },
    AdvisoryRule {
        level: AdvisoryLevel::High,
        message: "thick slices: pronounced stair-step artifact in reformats.",
        applies: thick_slices,
    },
    AdvisoryRule {
        level: AdvisoryLevel::Medium,
        message: "moderate slice thickness: visible but acceptable stepping.",
        applies: moderate_slices,
    },
    AdvisoryRule {
        level: AdvisoryLevel::Good,
        message: "isotropic-class slices: high-fidelity 3D reformat.",
        applies: isotropic_slices,
    },
    AdvisoryRule {
        level: AdvisoryLevel::Good,
        message: "balanced acquisition across all three axes.",
        applies: balanced_acquisition,
    },
];

pub fn advisories(params:&ScanParameters,scan_time_seconds:f32) -> Vec<Advisory> {
    RULES.iter()
        .filter(|rule| (rule.applies)(params,scan_time_seconds))
        .map(|rule| Advisory {
            level: rule.level.clone(),
            message: rule.message,
        })
        .collect()
}
