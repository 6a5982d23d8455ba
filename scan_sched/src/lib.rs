use serde::Serialize;

const PREP_SECONDS:f32 = 600.0;
const RESET_SECONDS:f32 = 300.0;
const OPENING_MINUTE:i32 = 8*60;
const CLOSING_MINUTE:i32 = 20*60;
const REVENUE_PER_SLOT:i32 = 300;

#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct ScheduleSlot {
    pub index:usize,
    pub start_label:String,
    pub end_label:String,
}

#[derive(Clone,Debug,PartialEq,Serialize)]
pub struct ScheduleProjection {
    pub slot_minutes:i32,
    pub slots_per_day:i32,
    pub daily_revenue:i32,
    pub slots:Vec<ScheduleSlot>,
}

/// exam slot length in whole minutes: patient prep, every sequence of the
/// exam back to back, then table reset
pub fn slot_minutes(scan_time_seconds:f32,sequences_per_exam:u16) -> i32 {
    let total_scan_phase = scan_time_seconds * sequences_per_exam as f32;
    let slot_seconds = PREP_SECONDS + total_scan_phase + RESET_SECONDS;
    (slot_seconds/60.0).round() as i32
}

/// minutes past midnight as a 12-hour clock label ("8:00 AM", "12:05 PM")
pub fn minute_to_clock_label(minute:i32) -> String {
    let hour = (minute/60) % 24;
    let min = minute % 60;
    let suffix = match hour < 12 {
        true => "AM",
        false => "PM"
    };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h
    };
    format!("{}:{:02} {}",hour12,min,suffix)
}

pub fn project_schedule(scan_time_seconds:f32,sequences_per_exam:u16) -> ScheduleProjection {
    let slot_minutes = slot_minutes(scan_time_seconds,sequences_per_exam);
    let operating_minutes = CLOSING_MINUTE - OPENING_MINUTE;
    // a degenerate slot length books nothing rather than dividing by zero
    let slots_per_day = match slot_minutes > 0 {
        true => operating_minutes/slot_minutes,
        false => 0
    };
    let slots = (0..slots_per_day as usize).map(|index| {
        let start = OPENING_MINUTE + index as i32 * slot_minutes;
        ScheduleSlot {
            index,
            start_label: minute_to_clock_label(start),
            end_label: minute_to_clock_label(start + slot_minutes),
        }
    }).collect();
    ScheduleProjection {
        slot_minutes,
        slots_per_day,
        daily_revenue: slots_per_day * REVENUE_PER_SLOT,
        slots,
    }
}

#[cfg(test)]
mod tests {
use super::*;

#[test]
fn clock_labels(){
    assert_eq!(minute_to_clock_label(480),"8:00 AM");
    assert_eq!(minute_to_clock_label(505),"8:25 AM");
    assert_eq!(minute_to_clock_label(719),"11:59 AM");
    assert_eq!(minute_to_clock_label(720),"12:00 PM");
    assert_eq!(minute_to_clock_label(725),"12:05 PM");
    assert_eq!(minute_to_clock_label(1200),"8:00 PM");
}

#[test]
fn reference_projection(){
    // 144s per sequence, 4 sequences: 600 + 576 + 300 = 1476s slots
    let projection = project_schedule(144.0,4);
    assert_eq!(projection.slot_minutes,25);
    assert_eq!(projection.slots_per_day,28);
    assert_eq!(projection.daily_revenue,8400);
    assert_eq!(projection.slots.len(),28);
    assert_eq!(projection.slots[0].start_label,"8:00 AM");
    assert_eq!(projection.slots[1].start_label,"8:25 AM");
    assert_eq!(projection.slots[0].end_label,projection.slots[1].start_label);
}

#[test]
fn no_partial_trailing_slot(){
    // 50000s scans: slot is 848 minutes, longer than the operating day
    let projection = project_schedule(50000.0,1);
    assert_eq!(projection.slot_minutes,848);
    assert_eq!(projection.slots_per_day,0);
    assert!(projection.slots.is_empty());

    // 55 minute slots book 13 exams, the trailing 5 minutes stay unbooked
    let projection = project_schedule(2400.0,1);
    assert_eq!(projection.slot_minutes,55);
    assert_eq!(projection.slots_per_day,13);
    assert_eq!(projection.slots.last().expect("no slots").end_label,"7:55 PM");
}

#[test]
fn degenerate_slot_length_books_nothing(){
    let projection = project_schedule(-100000.0,10);
    assert!(projection.slot_minutes <= 0);
    assert_eq!(projection.slots_per_day,0);
    assert!(projection.slots.is_empty());
    assert_eq!(projection.daily_revenue,0);
}
}
