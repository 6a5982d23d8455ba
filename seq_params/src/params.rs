use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use serde::{Serialize,Deserialize};
use crate::sequence::{SequenceId, SequencePreset};

#[derive(Debug,PartialEq)]
pub enum ParamsLoadError {
    FileUnreadable,
    InvalidFormat,
}

/// the four acquisition parameters in effect. the boundary offering values is
/// responsible for keeping them in their legal ranges; the model stores
/// whatever it is given
#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct ScanParameters {
    pub nex:u16,
    pub matrix_size:u16,
    pub slice_thickness_mm:u16,
    pub sequence:String,
}

impl ScanParameters {
    pub fn default() -> Self {
        ScanParameters {
            nex: 1,
            matrix_size: 128,
            slice_thickness_mm: 5,
            sequence: String::from("PD_FSE"),
        }
    }
    pub fn set_nex(&mut self,nex:u16) {
        self.nex = nex;
    }
    pub fn set_matrix_size(&mut self,matrix_size:u16) {
        self.matrix_size = matrix_size;
    }
    pub fn set_slice_thickness(&mut self,thickness_mm:u16) {
        self.slice_thickness_mm = thickness_mm;
    }
    pub fn set_sequence(&mut self,id:&str) {
        self.sequence = id.to_string();
    }
    /// the stored id resolved against the sequence table, falling back to
    /// PD_FSE when unrecognized
    pub fn sequence_id(&self) -> SequenceId {
        SequenceId::encode(&self.sequence)
    }
    pub fn current_preset(&self) -> &'static SequencePreset {
        self.sequence_id().preset()
    }
    pub fn load(params_file:&Path) -> Result<Self,ParamsLoadError> {
        let mut f = File::open(params_file).map_err(|_| ParamsLoadError::FileUnreadable)?;
        let mut json_str = String::new();
        f.read_to_string(&mut json_str).map_err(|_| ParamsLoadError::FileUnreadable)?;
        match serde_json::from_str(&json_str) {
            Ok(params) => Ok(params),
            Err(_) => Err(ParamsLoadError::InvalidFormat)
        }
    }
    pub fn write(&self,params_file:&Path) {
        let str = serde_json::to_string_pretty(&self).expect("cannot serialize struct");
        let mut f = File::create(params_file).expect("cannot create file");
        f.write_all(str.as_bytes()).expect("trouble writing to file");
    }
    pub fn write_default(params_file:&Path) {
        let params = Self::default();
        params.write(params_file);
    }
}

#[cfg(test)]
mod tests {
use super::*;

#[test]
fn setters_replace_fields(){
    let mut params = ScanParameters::default();
    params.set_nex(3);
    params.set_matrix_size(256);
    params.set_slice_thickness(2);
    params.set_sequence("3D_FSE");
    assert_eq!(params.nex,3);
    assert_eq!(params.matrix_size,256);
    assert_eq!(params.slice_thickness_mm,2);
    assert_eq!(params.sequence_id(),SequenceId::Fse3D);
}

#[test]
fn unrecognized_sequence_resolves_to_pd_fse(){
    let mut params = ScanParameters::default();
    params.set_sequence("");
    assert_eq!(params.sequence_id(),SequenceId::PdFse);
    assert_eq!(params.current_preset().base_time_seconds,180.0);
    params.set_sequence("STIR");
    assert_eq!(params.current_preset().display_name,"Proton Density (PD) FSE-2D");
}

#[test]
fn default_state(){
    let params = ScanParameters::default();
    assert_eq!(params.nex,1);
    assert_eq!(params.matrix_size,128);
    assert_eq!(params.slice_thickness_mm,5);
    assert_eq!(params.sequence_id(),SequenceId::PdFse);
}
}
