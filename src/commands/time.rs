//! Session time commands: end time and overstay for a single session.

use crate::{
    libs::{
        messages::Message,
        overstay::{self, Extension, SessionRecord, SystemClock},
    },
    msg_bail_anyhow, msg_print,
};
use anyhow::Result;
use chrono::{NaiveTime, Timelike};
use clap::Args;

#[derive(Debug, Args)]
pub struct EndTimeArgs {
    /// Session start, e.g. "2024-05-01 13:30"
    start: String,

    /// Booked duration in minutes
    duration: String,

    /// Extra minutes added on top
    #[arg(long, default_value = "0")]
    extra: String,
}

#[derive(Debug, Args)]
pub struct OverstayArgs {
    /// Scheduled end, HH:MM
    #[arg(long)]
    end: String,

    /// Extension end, HH:MM; repeat in the order they were added
    #[arg(long = "extend")]
    extensions: Vec<String>,

    /// Completion timestamp; omit for a session still running
    #[arg(long)]
    completed: Option<String>,
}

pub fn end_time(args: EndTimeArgs) -> Result<()> {
    let end = overstay::parse_minutes(&args.duration)
        .and_then(|duration| Ok((duration, overstay::parse_minutes(&args.extra)?)))
        .and_then(|(duration, extra)| overstay::compute_end_time(&args.start, duration, extra));

    match end {
        Ok(end) => {
            msg_print!(Message::EndTime(end));
            Ok(())
        }
        Err(e) => msg_bail_anyhow!(Message::InvalidTimeInput(e.to_string())),
    }
}

pub fn overstay(args: OverstayArgs) -> Result<()> {
    let record = match build_record(&args) {
        Ok(record) => record,
        Err(e) => msg_bail_anyhow!(Message::InvalidTimeInput(e.to_string())),
    };

    let minutes = overstay::overstay_minutes(&record, &SystemClock)?;
    if minutes == 0 {
        msg_print!(Message::OverstayNone);
    } else {
        msg_print!(Message::OverstayMinutes(minutes));
    }
    Ok(())
}

fn build_record(args: &OverstayArgs) -> Result<SessionRecord> {
    let end = parse_hour_minute(&args.end)?;
    let mut record = SessionRecord::ending_at(end.hour(), end.minute());

    for extension in &args.extensions {
        let time = parse_hour_minute(extension)?;
        record.extensions.push(Extension {
            end_hour: Some(time.hour()),
            end_min: Some(time.minute()),
        });
    }

    if let Some(completed) = &args.completed {
        record.completed_at = Some(overstay::parse_timestamp(completed)?);
    }
    Ok(record)
}

fn parse_hour_minute(value: &str) -> Result<NaiveTime> {
    Ok(NaiveTime::parse_from_str(value.trim(), "%H:%M")?)
}
