//! Conversions between the S7 temporal types and `chrono`.
//!
//! Enabled with the `chrono` feature. Conversions into `chrono` are fallible
//! because the S7 types do not validate their fields. Conversions from
//! `chrono` are fallible too: leap-second nanoseconds (1e9 and above) and
//! years the S7 type cannot store are rejected with [`S7Error::OutOfRange`].

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::date::CalendarDate;
use crate::datetime::{DateAndTime, Dtl};
use crate::error::S7Error;
use crate::time::TimeOfDay;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Years a DATE_AND_TIME can hold with its two-digit BCD year.
const DATE_AND_TIME_YEARS: RangeInclusive<i32> = 1990..=2089;

fn sub_second_nanos(nanos: u32) -> Result<u32, S7Error> {
    if nanos < NANOS_PER_SECOND {
        Ok(nanos)
    } else {
        Err(S7Error::out_of_range("nanosecond", nanos))
    }
}

fn binary_year(year: i32) -> Result<u16, S7Error> {
    u16::try_from(year).map_err(|_| S7Error::out_of_range("year", year))
}

fn bcd_year(year: i32) -> Result<u16, S7Error> {
    if DATE_AND_TIME_YEARS.contains(&year) {
        Ok(year as u16)
    } else {
        Err(S7Error::out_of_range("year", year))
    }
}

impl TryFrom<TimeOfDay> for NaiveTime {
    type Error = TimeOfDay;

    fn try_from(tod: TimeOfDay) -> Result<Self, Self::Error> {
        NaiveTime::from_hms_milli_opt(tod.hour, tod.minute, tod.second, tod.millisecond).ok_or(tod)
    }
}

impl TryFrom<NaiveTime> for TimeOfDay {
    type Error = S7Error;

    fn try_from(t: NaiveTime) -> Result<Self, Self::Error> {
        let nanos = sub_second_nanos(t.nanosecond())?;
        Ok(TimeOfDay::new(
            t.hour(),
            t.minute(),
            t.second(),
            nanos / 1_000_000,
        ))
    }
}

impl TryFrom<CalendarDate> for NaiveDate {
    type Error = CalendarDate;

    fn try_from(date: CalendarDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(date.year),
            u32::from(date.month),
            u32::from(date.day),
        )
        .ok_or(date)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = S7Error;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        Ok(CalendarDate::new(
            binary_year(d.year())?,
            d.month() as u8,
            d.day() as u8,
        ))
    }
}

impl TryFrom<DateAndTime> for NaiveDateTime {
    type Error = DateAndTime;

    fn try_from(dt: DateAndTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(i32::from(dt.year), u32::from(dt.month), u32::from(dt.day))
            .and_then(|d| {
                d.and_hms_milli_opt(
                    u32::from(dt.hour),
                    u32::from(dt.minute),
                    u32::from(dt.second),
                    u32::from(dt.millisecond),
                )
            })
            .ok_or(dt)
    }
}

impl TryFrom<NaiveDateTime> for DateAndTime {
    type Error = S7Error;

    fn try_from(ndt: NaiveDateTime) -> Result<Self, Self::Error> {
        let nanos = sub_second_nanos(ndt.nanosecond())?;
        Ok(DateAndTime::new(
            bcd_year(ndt.year())?,
            ndt.month() as u8,
            ndt.day() as u8,
            ndt.hour() as u8,
            ndt.minute() as u8,
            ndt.second() as u8,
            (nanos / 1_000_000) as u16,
        ))
    }
}

impl TryFrom<Dtl> for NaiveDateTime {
    type Error = Dtl;

    fn try_from(dtl: Dtl) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(dtl.year),
            u32::from(dtl.month),
            u32::from(dtl.day),
        )
        .and_then(|d| {
            d.and_hms_nano_opt(
                u32::from(dtl.hour),
                u32::from(dtl.minute),
                u32::from(dtl.second),
                dtl.nanosecond,
            )
        })
        .ok_or(dtl)
    }
}

impl TryFrom<NaiveDateTime> for Dtl {
    type Error = S7Error;

    fn try_from(ndt: NaiveDateTime) -> Result<Self, Self::Error> {
        Ok(Dtl::new(
            binary_year(ndt.year())?,
            ndt.month() as u8,
            ndt.day() as u8,
            ndt.hour() as u8,
            ndt.minute() as u8,
            ndt.second() as u8,
            sub_second_nanos(ndt.nanosecond())?,
        ))
    }
}
