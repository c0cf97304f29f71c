//! Built-in value providers.
//!
//! Each provider is a stateless unit struct. [`ValueProviderRegistry::with_builtins`]
//! registers all of them under the names in [`crate::constants`].
//!
//! [`ValueProviderRegistry::with_builtins`]: crate::value_provider::ValueProviderRegistry::with_builtins
use std::env;

use chrono::{DateTime, Datelike, FixedOffset, Local, TimeDelta};

use crate::constants::{CAST_PROVIDER, ENV_PROVIDER, TIME_DIFF_PROVIDER};
use crate::time_format::{format_time, parse_time};
use crate::value_provider::context::ValueContext;
use crate::value_provider::error::{Result, ValueProviderError};
use crate::value_provider::provider::ValueProvider;
use crate::value_provider::value::Value;

fn local_now() -> DateTime<FixedOffset> {
    let now = Local::now();
    now.with_timezone(now.offset())
}

/// Returns the value of the environment variable named by the first argument
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvValueProvider;

impl ValueProvider for EnvValueProvider {
    fn get(&self, _context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        let name = arguments
            .first()
            .ok_or_else(|| ValueProviderError::argument_count(ENV_PROVIDER, "at least 1", 0))?
            .as_string();
        env::var(&name)
            .map(Value::String)
            .map_err(|_| ValueProviderError::EnvVarNotFound { name })
    }
}

/// Casts the second argument to the type named by the first.
///
/// `time` takes a value and a date pattern and fails when parsing fails.
/// `int`, `float`, `bool` and `string` never fail: unconvertible input
/// becomes the type's zero value.
#[derive(Debug, Default, Clone, Copy)]
pub struct CastValueProvider;

impl ValueProvider for CastValueProvider {
    fn get(&self, _context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        if arguments.len() < 2 {
            return Err(ValueProviderError::argument_count(CAST_PROVIDER, "at least 2", arguments.len()));
        }
        let target = arguments[0].as_string();
        let value = &arguments[1];

        match target.as_str() {
            "time" => {
                if arguments.len() != 3 {
                    return Err(ValueProviderError::argument_count(CAST_PROVIDER, "exactly 3", arguments.len()));
                }
                let text = value.as_string();
                parse_time(&arguments[2].as_string(), &text)
                    .map(Value::Time)
                    .map_err(|source| ValueProviderError::CastFailed { value: text, source })
            }
            "int" => Ok(Value::Int(value.as_int())),
            "float" => Ok(Value::Float(value.as_float())),
            "bool" => Ok(Value::Bool(value.as_bool())),
            "string" => Ok(Value::String(value.as_string())),
            _ => Err(ValueProviderError::UnsupportedCast { target }),
        }
    }
}

/// Returns the current local time
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentTimeProvider;

impl ValueProvider for CurrentTimeProvider {
    fn get(&self, _context: &ValueContext, _arguments: &[Value]) -> Result<Value> {
        Ok(Value::Time(local_now()))
    }
}

/// Shifts a base time by an amount of units, optionally formatting it.
///
/// Arguments: base time (or `now`), amount, unit (`day`, `week`, `hour`,
/// `min`, `sec`), and an output format: `unix` for seconds, `timestamp`
/// for milliseconds, or a date pattern.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeDiffProvider;

impl TimeDiffProvider {
    fn delta(amount: i64, unit: &str) -> Option<TimeDelta> {
        match unit.to_ascii_lowercase().as_str() {
            "day" => TimeDelta::try_days(amount),
            "week" => TimeDelta::try_weeks(amount),
            "hour" => TimeDelta::try_hours(amount),
            "min" => TimeDelta::try_minutes(amount),
            "sec" => TimeDelta::try_seconds(amount),
            _ => Some(TimeDelta::zero()),
        }
    }
}

impl ValueProvider for TimeDiffProvider {
    fn get(&self, _context: &ValueContext, arguments: &[Value]) -> Result<Value> {
        let base = arguments
            .first()
            .ok_or_else(|| ValueProviderError::argument_count(TIME_DIFF_PROVIDER, "at least 1", 0))?;

        let mut time = if base.as_string().eq_ignore_ascii_case("now") {
            local_now()
        } else {
            base.as_time().ok_or_else(|| ValueProviderError::InvalidTime {
                value: base.as_string(),
            })?
        };

        if arguments.len() >= 3 {
            let amount = arguments[1].as_int();
            let unit = arguments[2].as_string();
            let out_of_range = || ValueProviderError::TimeOutOfRange {
                amount,
                unit: unit.clone(),
            };
            let delta = Self::delta(amount, &unit).ok_or_else(out_of_range)?;
            time = time.checked_add_signed(delta).ok_or_else(out_of_range)?;
        }

        let format = arguments.get(3).map(Value::as_string).unwrap_or_default();
        Ok(match format.as_str() {
            "unix" => Value::Int(time.timestamp()),
            "timestamp" => Value::Int(time.timestamp_millis()),
            "" => Value::Time(time),
            pattern => Value::String(format_time(pattern, &time)),
        })
    }
}

/// Returns the current weekday, 0 for Sunday through 6 for Saturday
#[derive(Debug, Default, Clone, Copy)]
pub struct WeekdayProvider;

impl ValueProvider for WeekdayProvider {
    fn get(&self, _context: &ValueContext, _arguments: &[Value]) -> Result<Value> {
        let weekday = Local::now().weekday().num_days_from_sunday();
        Ok(Value::Int(i64::from(weekday)))
    }
}

/// Returns today's local date as `yyyymmdd`, e.g. `20170205`
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentDateProvider;

impl ValueProvider for CurrentDateProvider {
    fn get(&self, _context: &ValueContext, _arguments: &[Value]) -> Result<Value> {
        Ok(Value::String(Local::now().format("%Y%m%d").to_string()))
    }
}

/// Always returns null
#[derive(Debug, Default, Clone, Copy)]
pub struct NilValueProvider;

impl ValueProvider for NilValueProvider {
    fn get(&self, _context: &ValueContext, _arguments: &[Value]) -> Result<Value> {
        Ok(Value::Null)
    }
}
