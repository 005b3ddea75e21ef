//! Domain value objects: TimeOfDay, Money, Email, PhoneNumber, TimeSlot.
//!
//! # Design
//!
//! These are immutable, self-validating primitives with no identity.
//! Construction is the only place invariants are checked; once a value
//! exists it is guaranteed well-formed. Every derivation returns a new
//! value — there are no mutating methods.
//!
//! Values that cross the API boundary re-validate on deserialization
//! (`#[serde(try_from = ...)]`), so a storage adapter can never smuggle a
//! malformed primitive into the domain.

use crate::domain::error::DomainError;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// A minute-of-day clock time (00:00–23:59).
///
/// Backing type for shop opening hours and work-schedule bounds. Parsed
/// from strict `HH:mm`; serialized back to the same string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// Build from an hour/minute pair.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, DomainError> {
        if hour > 23 || minute > 59 {
            return Err(DomainError::InvalidTimeOfDay(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Minutes since midnight.
    pub const fn minute_of_day(self) -> u16 {
        self.0
    }

    pub const fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    pub const fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = DomainError;

    /// Strict `HH:mm` — exactly five characters, zero-padded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidTimeOfDay(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 5 || bytes[2] != b':' {
            return Err(invalid());
        }
        if ![0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit()) {
            return Err(invalid());
        }
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[3] - b'0') * 10 + (bytes[4] - b'0');
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

// ── Money ─────────────────────────────────────────────────────────────────────

/// Serialized shape of [`Money`]: a decimal amount plus a currency code.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MoneyRepr {
    amount: f64,
    currency: String,
}

/// An amount of money in a single currency.
///
/// Stored as minor units (cents) to keep arithmetic exact. The decimal
/// input is scaled by 100 and rounded with `f64::round` (half away from
/// zero). Note that decimal literals such as `19.995` sit just below the
/// binary midpoint and therefore round down; this is the documented,
/// consistent rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    minor: i64,
    currency: String,
}

impl Money {
    /// Create an amount in the given currency (default callers pass "EUR").
    ///
    /// Fails with `InvalidAmount` for negative or non-finite amounts and
    /// `InvalidCurrency` unless the code is exactly three characters. The
    /// code is normalized to uppercase.
    pub fn new(amount: f64, currency: &str) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(DomainError::InvalidAmount);
        }
        if currency.chars().count() != 3 {
            return Err(DomainError::InvalidCurrency(currency.to_string()));
        }
        Ok(Self {
            minor: (amount * 100.0).round() as i64,
            currency: currency.to_uppercase(),
        })
    }

    /// Decimal amount, two fractional digits.
    pub fn amount(&self) -> f64 {
        self.minor as f64 / 100.0
    }

    pub fn minor_units(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn add(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        Ok(Self {
            minor: self.minor + other.minor,
            currency: self.currency.clone(),
        })
    }

    /// Fails with `NegativeResult` when `other` exceeds `self`.
    pub fn subtract(&self, other: &Money) -> Result<Money, DomainError> {
        self.require_same_currency(other)?;
        let minor = self.minor - other.minor;
        if minor < 0 {
            return Err(DomainError::NegativeResult);
        }
        Ok(Self {
            minor,
            currency: self.currency.clone(),
        })
    }

    /// Scale by a non-negative factor, rounding the result to cents.
    pub fn multiply(&self, factor: f64) -> Result<Money, DomainError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(DomainError::NegativeFactor);
        }
        Ok(Self {
            minor: (self.minor as f64 * factor).round() as i64,
            currency: self.currency.clone(),
        })
    }

    fn require_same_currency(&self, other: &Money) -> Result<(), DomainError> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount(), self.currency)
    }
}

impl TryFrom<MoneyRepr> for Money {
    type Error = DomainError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Self::new(repr.amount, &repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount(),
            currency: money.currency,
        }
    }
}

// ── Email ─────────────────────────────────────────────────────────────────────

/// A normalized (trimmed, lowercased) email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(email: &str) -> Result<Self, DomainError> {
        let trimmed = email.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyField { field: "email" });
        }
        let normalized = trimmed.to_lowercase();
        if !is_valid_email(&normalized) {
            return Err(DomainError::InvalidEmail(email.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a dot
/// inside the domain that is neither its first nor last character.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

// ── PhoneNumber ───────────────────────────────────────────────────────────────

/// A normalized phone number: spaces, dashes and parentheses stripped,
/// then an optional `+` followed by a non-zero digit and 8–14 further
/// digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(phone: &str) -> Result<Self, DomainError> {
        if phone.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "phone number" });
        }
        let normalized: String = phone
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
            .collect();
        if !is_valid_phone(&normalized) {
            return Err(DomainError::InvalidPhoneNumber(phone.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `+XX XXX XXX XXXX` for twelve-digit international numbers; anything
    /// else is returned untouched.
    pub fn formatted(&self) -> String {
        let digits = self.0.strip_prefix('+').unwrap_or(&self.0);
        if self.0.starts_with('+') && digits.len() == 12 {
            format!(
                "+{} {} {} {}",
                &digits[..2],
                &digits[2..5],
                &digits[5..8],
                &digits[8..]
            )
        } else {
            self.0.clone()
        }
    }
}

fn is_valid_phone(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    let mut chars = digits.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_digit()
        && first != '0'
        && (9..=15).contains(&digits.len())
        && chars.all(|c| c.is_ascii_digit())
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

// ── TimeSlot ──────────────────────────────────────────────────────────────────

/// Serialized shape of [`TimeSlot`]; re-validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimeSlotRepr {
    date: NaiveDate,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

/// A concrete start–end interval on a single calendar day.
///
/// Overlap uses half-open semantics: a slot ending at `T` and a slot
/// starting at `T` do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimeSlotRepr", into = "TimeSlotRepr")]
pub struct TimeSlot {
    date: NaiveDate,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeSlot {
    /// Build a slot of `duration_minutes` starting at the given wall-clock
    /// time on `date`.
    ///
    /// Fails when the computed end is not after the start or when the slot
    /// would cross midnight (a slot ending exactly at 00:00 of the next day
    /// is rejected).
    pub fn new(
        date: NaiveDate,
        start_hour: u32,
        start_minute: u32,
        duration_minutes: u32,
    ) -> Result<Self, DomainError> {
        let start = date
            .and_hms_opt(start_hour, start_minute, 0)
            .ok_or(DomainError::InvalidSlot("start time out of range"))?;
        let end = start + Duration::minutes(i64::from(duration_minutes));
        Self::from_datetimes(start, end)
    }

    /// Build a slot from explicit start/end timestamps.
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidSlot("start time must be before end time"));
        }
        if start.date() != end.date() {
            return Err(DomainError::InvalidSlot("time slot cannot span multiple days"));
        }
        Ok(Self {
            date: start.date(),
            start,
            end,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end_time(&self) -> NaiveDateTime {
        self.end
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Half-open interval intersection: touching edges do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && self.end > other.start
    }

    pub fn is_before(&self, other: &TimeSlot) -> bool {
        self.end <= other.start
    }

    pub fn is_after(&self, other: &TimeSlot) -> bool {
        self.start >= other.end
    }

    pub fn start_hour(&self) -> u32 {
        self.start.hour()
    }

    pub fn start_minute(&self) -> u32 {
        self.start.minute()
    }

    pub fn weekday(&self) -> chrono::Weekday {
        self.start.weekday()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl TryFrom<TimeSlotRepr> for TimeSlot {
    type Error = DomainError;

    /// The stored `date` is ignored and recomputed from `start_time`, so a
    /// hand-edited state file cannot desynchronize the two.
    fn try_from(repr: TimeSlotRepr) -> Result<Self, Self::Error> {
        Self::from_datetimes(repr.start_time, repr.end_time)
    }
}

impl From<TimeSlot> for TimeSlotRepr {
    fn from(slot: TimeSlot) -> Self {
        Self {
            date: slot.date,
            start_time: slot.start,
            end_time: slot.end,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
