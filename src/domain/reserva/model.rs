//! Reserva domain entity

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

/// Salas disponibles para reservar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sala {
    A,
    B,
    C,
}

impl Sala {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Parse a sala name. Anything outside the fixed set is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Self::A),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sala {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reserva de sala
#[derive(Debug, Clone)]
pub struct Reserva {
    /// Unique reservation ID (UUID v4, assigned at creation)
    pub id: String,
    /// Owning user ID (subject claim of the verified token)
    pub usuario: String,
    /// Reservation date (calendar date, no time-of-day)
    pub fecha: NaiveDate,
    /// Reserved sala
    pub sala: Sala,
    /// Time slot in 12-hour format, e.g. "09:30 AM"
    pub hora: String,
    /// When the reservation was created
    pub created_at: DateTime<Utc>,
}

impl Reserva {
    pub fn new(
        usuario: impl Into<String>,
        fecha: NaiveDate,
        sala: Sala,
        hora: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            usuario: usuario.into(),
            fecha,
            sala,
            hora: hora.into(),
            created_at: Utc::now(),
        }
    }
}

/// Check the `hh:mm AM|PM` 12-hour clock format: zero-padded hour 01-12,
/// minute 00-59, one space, literal `AM` or `PM`.
pub fn hora_valida(hora: &str) -> bool {
    let b = hora.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b' ' {
        return false;
    }
    if ![b[0], b[1], b[3], b[4]].iter().all(u8::is_ascii_digit) {
        return false;
    }
    let hour = (b[0] - b'0') * 10 + (b[1] - b'0');
    if !(1..=12).contains(&hour) {
        return false;
    }
    // minute tens digit caps the minute at 59
    if b[3] > b'5' {
        return false;
    }
    // literal AM or PM suffix
    (b[6] == b'A' || b[6] == b'P') && b[7] == b'M'
}

/// Parse an `AAAA-MM-DD` string into a calendar date.
///
/// The string is split into year/month/day components and the date is built
/// from them directly — never through a timestamp, whose timezone offset
/// could shift the weekday at midnight boundaries. Returns `None` when the
/// components do not form a real calendar date.
pub fn parse_fecha(fecha: &str) -> Option<NaiveDate> {
    let mut parts = fecha.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Reservas are not allowed on Sundays.
pub fn es_domingo(fecha: NaiveDate) -> bool {
    fecha.weekday() == Weekday::Sun
}

// ── Tests ──────────────────────────────────────────────────────
