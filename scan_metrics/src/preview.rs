use seq_params::params::ScanParameters;
use serde::Serialize;

/// scalar inputs for a presentation layer's noise/blur/stair-step effects.
/// computed here so every skin renders the same degradation for the same
/// parameter set
#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct PreviewEffects {
    pub noise_level:f32,
    pub blur_amount:f32,
    pub step_size_mm:u16,
}

pub fn preview_effects(params:&ScanParameters) -> PreviewEffects {
    PreviewEffects {
        noise_level: (5.0 - params.nex as f32)*0.15,
        blur_amount: (512.0 - params.matrix_size as f32)/100.0,
        step_size_mm: params.slice_thickness_mm.saturating_sub(2).max(1),
    }
}

#[cfg(test)]
mod tests {
use super::*;

fn params(nex:u16,matrix_size:u16,slice_thickness_mm:u16) -> ScanParameters {
    let mut p = ScanParameters::default();
    p.set_nex(nex);
    p.set_matrix_size(matrix_size);
    p.set_slice_thickness(slice_thickness_mm);
    p
}

#[test]
fn effects_track_parameters(){
    let fx = preview_effects(&params(4,512,1));
    assert_eq!(fx.noise_level,0.15);
    assert_eq!(fx.blur_amount,0.0);
    assert_eq!(fx.step_size_mm,1);

    let fx = preview_effects(&params(1,64,10));
    assert_eq!(fx.noise_level,0.6);
    assert_eq!(fx.blur_amount,4.48);
    assert_eq!(fx.step_size_mm,8);
}

#[test]
fn step_size_floors_at_one(){
    assert_eq!(preview_effects(&params(2,256,1)).step_size_mm,1);
    assert_eq!(preview_effects(&params(2,256,2)).step_size_mm,1);
    assert_eq!(preview_effects(&params(2,256,3)).step_size_mm,1);
    assert_eq!(preview_effects(&params(2,256,4)).step_size_mm,2);
}
}