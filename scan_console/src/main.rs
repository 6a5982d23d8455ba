use std::path::PathBuf;
use clap::Parser;
use seq_params::params::{ScanParameters, ParamsLoadError};
use seq_params::sequence::SequenceId;
use scan_metrics::outcome::{derive_outcome, DerivedOutcome};
use scan_metrics::scan_time::format_scan_time;
use scan_metrics::scores::ScoreBand;
use scan_sched::project_schedule;

#[derive(clap::Parser,Debug)]
struct ScanConsoleArgs {
    #[command(subcommand)]
    action: Action,
}

#[derive(clap::Subcommand,Debug)]
pub enum Action {
    /// print the sequence preset table
    ListSequences,
    /// derived outcome for a parameter set
    Outcome(ParamArgs),
    /// daily schedule projection for a parameter set
    Schedule(ScheduleArgs),
    /// write a default scan parameter config
    NewConfig(NewConfigArgs),
}

#[derive(clap::Args,Debug)]
pub struct ParamArgs {
    #[clap(long)]
    config:Option<PathBuf>,
    #[clap(long)]
    nex:Option<u16>,
    #[clap(long)]
    matrix:Option<u16>,
    #[clap(long)]
    thickness:Option<u16>,
    #[clap(long)]
    sequence:Option<String>,
    #[clap(long)]
    json:bool,
}

#[derive(clap::Args,Debug)]
pub struct ScheduleArgs {
    #[clap(flatten)]
    params:ParamArgs,
    /// sequences acquired per exam slot
    sequences_per_exam:u16,
}

#[derive(clap::Args,Debug)]
pub struct NewConfigArgs {
    destination:PathBuf,
}

fn main(){
    let args = ScanConsoleArgs::parse();
    use Action::*;
    match &args.action {
        ListSequences => {
            for id in SequenceId::all() {
                let preset = id.preset();
                println!("{} - {}",id.decode(),preset.display_name);
                println!("  TR: {}ms  TE: {}ms  ETL: {}  base time: {}s",
                         preset.tr_ms,preset.te_ms,preset.echo_train_length,preset.base_time_seconds);
                println!("  {}",preset.description);
            }
        }
        Outcome(args) => {
            let params = match resolve_params(args) {
                Some(params) => params,
                None => return
            };
            let outcome = derive_outcome(&params);
            match args.json {
                true => println!("{}",serde_json::to_string_pretty(&outcome).expect("cannot serialize outcome")),
                false => print_outcome(&params,&outcome)
            }
        }
        Schedule(args) => {
            let params = match resolve_params(&args.params) {
                Some(params) => params,
                None => return
            };
            let outcome = derive_outcome(&params);
            let projection = project_schedule(outcome.scan_time_seconds,args.sequences_per_exam);
            match args.params.json {
                true => println!("{}",serde_json::to_string_pretty(&projection).expect("cannot serialize projection")),
                false => {
                    println!("slot length: {} min",projection.slot_minutes);
                    println!("exams per day: {}",projection.slots_per_day);
                    println!("daily revenue: {}",projection.daily_revenue);
                    for slot in &projection.slots {
                        println!("  {:>2}  {} - {}",slot.index + 1,slot.start_label,slot.end_label);
                    }
                }
            }
        }
        NewConfig(args) => {
            if args.destination.exists() {
                println!("{:?} already exists. Choose a different destination.",args.destination);
                return
            }
            ScanParameters::write_default(&args.destination);
            println!("wrote default scan parameters to {:?}",args.destination);
        }
    }
}

// config file first, then any explicit flags on top
fn resolve_params(args:&ParamArgs) -> Option<ScanParameters> {
    let mut params = match &args.config {
        Some(path) => {
            match ScanParameters::load(path) {
                Ok(params) => params,
                Err(ParamsLoadError::FileUnreadable) => {
                    println!("cannot read config {:?}",path);
                    return None
                }
                Err(ParamsLoadError::InvalidFormat) => {
                    println!("config {:?} is not a scan parameter file",path);
                    return None
                }
            }
        }
        None => ScanParameters::default()
    };
    if let Some(nex) = args.nex {
        params.set_nex(nex);
    }
    if let Some(matrix) = args.matrix {
        params.set_matrix_size(matrix);
    }
    if let Some(thickness) = args.thickness {
        params.set_slice_thickness(thickness);
    }
    if let Some(sequence) = &args.sequence {
        params.set_sequence(sequence);
    }
    Some(params)
}

fn print_outcome(params:&ScanParameters,outcome:&DerivedOutcome) {
    let preset = params.current_preset();
    println!("{} ({})",preset.display_name,params.sequence_id().decode());
    println!("TR: {}ms  TE: {}ms",preset.tr_ms,preset.te_ms);
    println!("scan time: {} ({}s)",format_scan_time(outcome.scan_time_seconds),outcome.scan_time_seconds);
    println!("snr: {} ({})  resolution: {} ({})  speed: {} ({})",
             outcome.snr_score,ScoreBand::from_score(outcome.snr_score).decode(),
             outcome.resolution_score,ScoreBand::from_score(outcome.resolution_score).decode(),
             outcome.speed_score,ScoreBand::from_score(outcome.speed_score).decode());
    for advisory in &outcome.advisories {
        println!("  [{}] {}",advisory.level.decode(),advisory.message);
    }
}

#[test]
fn flags_override_config_defaults(){
    let args = ParamArgs {
        config: None,
        nex: Some(4),
        matrix: None,
        thickness: Some(2),
        sequence: Some(String::from("UTE")),
        json: false,
    };
    let params = resolve_params(&args).expect("params did not resolve");
    assert_eq!(params.nex,4);
    assert_eq!(params.matrix_size,128);
    assert_eq!(params.slice_thickness_mm,2);
    assert_eq!(params.sequence_id(),SequenceId::Ute);
}
