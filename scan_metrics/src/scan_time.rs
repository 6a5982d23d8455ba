use seq_params::params::ScanParameters;
use seq_params::sequence::SequenceId;

const REFERENCE_MATRIX:f32 = 128.0;
const THIN_SLICE_LIMIT_MM:u16 = 3;
const THIN_SLICE_PENALTY:f32 = 1.5;
const PD_FSE_SPEEDUP:f32 = 0.8;

/// scan duration in seconds for the parameter set now in effect.
/// the penalties apply in order and the 1mm branch stacks on the thin-slice
/// branch, so 1mm slices pay a 2.25x total
pub fn scan_time_seconds(params:&ScanParameters) -> f32 {
    let preset = params.current_preset();
    let mut raw_seconds = (params.matrix_size as f32/REFERENCE_MATRIX) * params.nex as f32 * preset.base_time_seconds;
    if params.slice_thickness_mm < THIN_SLICE_LIMIT_MM {
        raw_seconds *= THIN_SLICE_PENALTY;
    }
    if params.slice_thickness_mm == 1 {
        raw_seconds *= THIN_SLICE_PENALTY;
    }
    if params.sequence_id() == SequenceId::PdFse {
        raw_seconds *= PD_FSE_SPEEDUP;
    }
    raw_seconds
}

pub fn format_scan_time(seconds:f32) -> String {
    let m = (seconds/60.0).floor() as i32;
    let s = (seconds % 60.0).floor() as i32;
    format!("{}min {}s",m,s)
}
