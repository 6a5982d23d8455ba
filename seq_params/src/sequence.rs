use serde::{Serialize,Deserialize};

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub enum SequenceId {
    Ute,
    Gre3D,
    Fse3D,
    PdFse,
}

pub struct SequencePreset {
    pub display_name:&'static str,
    pub tr_ms:f32,
    pub te_ms:f32,
    pub echo_train_length:u16,
    pub base_time_seconds:f32,
    pub description:&'static str,
}

static UTE:SequencePreset = SequencePreset {
    display_name: "Ultrashort TE (UTE)",
    tr_ms: 10.0,
    te_ms: 0.05,
    echo_train_length: 1,
    base_time_seconds: 400.0,
    description: "Excellent for cortical bone & tendon. Very short TE minimizes signal decay in solid structures.",
};

static GRE_3D:SequencePreset = SequencePreset {
    display_name: "3D Gradient Echo (GRE)",
    tr_ms: 20.0,
    te_ms: 5.0,
    echo_train_length: 1,
    base_time_seconds: 200.0,
    description: "Fast 3D acquisition. Good for cartilage, but susceptible to magnetic susceptibility artifacts.",
};

static FSE_3D:SequencePreset = SequencePreset {
    display_name: "3D Fast Spin Echo (FSE)",
    tr_ms: 1500.0,
    te_ms: 30.0,
    echo_train_length: 60,
    base_time_seconds: 350.0,
    description: "High SNR 3D volume. Good for reformats. Less prone to metal artifacts than GRE.",
};

static PD_FSE:SequencePreset = SequencePreset {
    display_name: "Proton Density (PD) FSE-2D",
    tr_ms: 3000.0,
    te_ms: 30.0,
    echo_train_length: 12,
    base_time_seconds: 180.0,
    description: "The gold standard for cartilage and meniscus. Excellent anatomical detail.",
};

impl SequenceId {
    pub fn all() -> Vec<Self> {
        vec![
            Self::Ute,
            Self::Gre3D,
            Self::Fse3D,
            Self::PdFse,
        ]
    }
    pub fn list() -> String {
        Self::all().iter().map(|id| id.decode()).collect::<Vec<String>>().join("\n")
    }
    // unrecognized ids resolve to the PD-FSE default so every consumer of the
    // current sequence sees the same resolved value
    pub fn encode(id:&str) -> Self {
        match id {
            "UTE" => Self::Ute,
            "3D_GRE" => Self::Gre3D,
            "3D_FSE" => Self::Fse3D,
            "PD_FSE" => Self::PdFse,
            _=> Self::PdFse
        }
    }
    pub fn decode(&self) -> String {
        match &self {
            Self::Ute => String::from("UTE"),
            Self::Gre3D => String::from("3D_GRE"),
            Self::Fse3D => String::from("3D_FSE"),
            Self::PdFse => String::from("PD_FSE"),
        }
    }
    pub fn preset(&self) -> &'static SequencePreset {
        match &self {
            Self::Ute => &UTE,
            Self::Gre3D => &GRE_3D,
            Self::Fse3D => &FSE_3D,
            Self::PdFse => &PD_FSE,
        }
    }
}

#[cfg(test)]
mod tests {
use super::*;

#[test]
fn wire_ids_round_trip(){
    for id in SequenceId::all() {
        let decoded = id.decode();
        assert_eq!(SequenceId::encode(&decoded),id,"round trip failed for {}",decoded);
    }
}

#[test]
fn unrecognized_ids_fall_back_to_pd_fse(){
    assert_eq!(SequenceId::encode(""),SequenceId::PdFse);
    assert_eq!(SequenceId::encode("T1_SE"),SequenceId::PdFse);
    assert_eq!(SequenceId::encode("pd_fse"),SequenceId::PdFse);
}

#[test]
fn preset_table(){
    assert_eq!(SequenceId::PdFse.preset().base_time_seconds,180.0);
    assert_eq!(SequenceId::Ute.preset().te_ms,0.05);
    assert_eq!(SequenceId::Fse3D.preset().echo_train_length,60);
    assert_eq!(SequenceId::Gre3D.preset().tr_ms,20.0);
}
}
