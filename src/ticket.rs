use chrono::NaiveDate;
use std::fmt;

/// Every editable field of a [`TicketRecord`], in the order the form presents them
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TicketField {
    FullName,
    OriginAirport,
    DestinationAirport,
    Airline,
    FlightNumber,
    FlightDate,
    Terminal,
    Gate,
    BoardingTime,
    Group,
    Seat,
    Sequence,
    RecordLocator,
    Class,
}

impl TicketField {
    pub const ALL: [TicketField; 14] = [
        TicketField::FullName,
        TicketField::OriginAirport,
        TicketField::DestinationAirport,
        TicketField::Airline,
        TicketField::FlightNumber,
        TicketField::FlightDate,
        TicketField::Terminal,
        TicketField::Gate,
        TicketField::BoardingTime,
        TicketField::Group,
        TicketField::Seat,
        TicketField::Sequence,
        TicketField::RecordLocator,
        TicketField::Class,
    ];

    /// The name a form input for this field is keyed by
    pub fn key(self) -> &'static str {
        match self {
            TicketField::FullName => "fullName",
            TicketField::OriginAirport => "originAirport",
            TicketField::DestinationAirport => "destinationAirport",
            TicketField::Airline => "airline",
            TicketField::FlightNumber => "flightNumber",
            TicketField::FlightDate => "flightDateISO",
            TicketField::Terminal => "terminal",
            TicketField::Gate => "gate",
            TicketField::BoardingTime => "boardingTime",
            TicketField::Group => "group",
            TicketField::Seat => "seat",
            TicketField::Sequence => "sequence",
            TicketField::RecordLocator => "recordLocator",
            TicketField::Class => "class",
        }
    }

    pub fn from_key(key: &str) -> Option<TicketField> {
        TicketField::ALL.into_iter().find(|field| field.key() == key)
    }

    /// A human readable label, derived from the key by splitting it at capitals:
    /// `flightNumber` becomes `Flight Number`
    pub fn label(self) -> String {
        let mut label = String::new();
        for (i, ch) in self.key().chars().enumerate() {
            if i == 0 {
                label.extend(ch.to_uppercase());
            } else {
                if ch.is_uppercase() {
                    label.push(' ');
                }
                label.push(ch);
            }
        }
        label
    }

    /// Whether the form should offer a date picker for this field
    pub fn is_date(self) -> bool {
        self.key().contains("Date")
    }
}

impl fmt::Display for TicketField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The text printed on a boarding pass.
///
/// Every field is plain text and nothing is validated: whatever the passenger types
/// is what gets printed. Rendering and exporting only ever read a record; edits replace
/// one field at a time through [`TicketRecord::set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRecord {
    pub full_name: String,
    pub origin_airport: String,
    pub destination_airport: String,
    pub airline: String,
    pub flight_number: String,
    /// The flight date as `YYYY-MM-DD`
    pub flight_date: String,
    pub terminal: String,
    pub gate: String,
    pub boarding_time: String,
    pub group: String,
    pub seat: String,
    pub sequence: String,
    pub record_locator: String,
    pub class: String,
}

impl Default for TicketRecord {
    fn default() -> Self {
        TicketRecord {
            full_name: "CHRIS O'BRYAN".into(),
            origin_airport: "JFK NEW YORK".into(),
            destination_airport: "DUB IRELAND".into(),
            airline: "American Airlines".into(),
            flight_number: "AA 208".into(),
            flight_date: "2025-04-23".into(),
            terminal: "8".into(),
            gate: "32".into(),
            boarding_time: "330P".into(),
            group: "4".into(),
            seat: "52B".into(),
            sequence: "SEQ 52B".into(),
            record_locator: "37QNSC2A".into(),
            class: "ECONOMY".into(),
        }
    }
}

impl TicketRecord {
    /// A record filled with sample values
    pub fn new() -> TicketRecord {
        TicketRecord::default()
    }

    pub fn get(&self, field: TicketField) -> &str {
        match field {
            TicketField::FullName => &self.full_name,
            TicketField::OriginAirport => &self.origin_airport,
            TicketField::DestinationAirport => &self.destination_airport,
            TicketField::Airline => &self.airline,
            TicketField::FlightNumber => &self.flight_number,
            TicketField::FlightDate => &self.flight_date,
            TicketField::Terminal => &self.terminal,
            TicketField::Gate => &self.gate,
            TicketField::BoardingTime => &self.boarding_time,
            TicketField::Group => &self.group,
            TicketField::Seat => &self.seat,
            TicketField::Sequence => &self.sequence,
            TicketField::RecordLocator => &self.record_locator,
            TicketField::Class => &self.class,
        }
    }

    fn slot(&mut self, field: TicketField) -> &mut String {
        match field {
            TicketField::FullName => &mut self.full_name,
            TicketField::OriginAirport => &mut self.origin_airport,
            TicketField::DestinationAirport => &mut self.destination_airport,
            TicketField::Airline => &mut self.airline,
            TicketField::FlightNumber => &mut self.flight_number,
            TicketField::FlightDate => &mut self.flight_date,
            TicketField::Terminal => &mut self.terminal,
            TicketField::Gate => &mut self.gate,
            TicketField::BoardingTime => &mut self.boarding_time,
            TicketField::Group => &mut self.group,
            TicketField::Seat => &mut self.seat,
            TicketField::Sequence => &mut self.sequence,
            TicketField::RecordLocator => &mut self.record_locator,
            TicketField::Class => &mut self.class,
        }
    }

    /// Replace the value of one field
    pub fn set<S: ToString>(&mut self, field: TicketField, value: S) -> &mut Self {
        *self.slot(field) = value.to_string();
        self
    }

    /// Replace the value of the field a form input is keyed by. Returns the field that
    /// was updated, or [None] if no field has that key.
    pub fn set_by_key<S: ToString>(&mut self, key: &str, value: S) -> Option<TicketField> {
        let field = TicketField::from_key(key)?;
        self.set(field, value);
        Some(field)
    }

    /// Iterate over every field and its value, in form order
    pub fn fields(&self) -> impl Iterator<Item = (TicketField, &str)> + '_ {
        TicketField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// The flight date as printed on the ticket, e.g. `APR 23 2025`
    pub fn ticket_date(&self) -> String {
        format_ticket_date(&self.flight_date, "%b %d %Y")
    }

    /// The flight date as printed on the stub, e.g. `23 APR`
    pub fn stub_date(&self) -> String {
        format_ticket_date(&self.flight_date, "%d %b")
    }

    /// A file name that identifies the flight and seat, so exports of different
    /// records don't overwrite each other
    pub fn export_file_name(&self) -> String {
        format!(
            "boarding-pass-{}-{}.pdf",
            file_name_safe(&self.flight_number),
            file_name_safe(&self.seat)
        )
    }
}

// dates that don't parse are printed as typed
fn format_ticket_date(iso: &str, format: &str) -> String {
    match NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d") {
        Ok(date) => date.format(format).to_string().to_uppercase(),
        Err(_) => iso.to_string(),
    }
}

fn file_name_safe(value: &str) -> String {
    value
        .trim()
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' => '_',
            ch if ch.is_control() => '_',
            ch => ch,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_are_split_at_capitals() {
        assert_eq!(TicketField::FullName.label(), "Full Name");
        assert_eq!(TicketField::Gate.label(), "Gate");
        assert_eq!(TicketField::FlightDate.label(), "Flight Date I S O");
    }

    #[test]
    fn only_the_date_field_is_a_date() {
        let dates: Vec<TicketField> = TicketField::ALL
            .into_iter()
            .filter(|f| f.is_date())
            .collect();
        assert_eq!(dates, vec![TicketField::FlightDate]);
    }

    #[test]
    fn keys_round_trip() {
        for field in TicketField::ALL {
            assert_eq!(TicketField::from_key(field.key()), Some(field));
        }
        assert_eq!(TicketField::from_key("nope"), None);
    }

    #[test]
    fn edits_replace_one_field() {
        let mut record = TicketRecord::new();
        let before = record.clone();
        assert_eq!(record.set_by_key("seat", "12A"), Some(TicketField::Seat));
        assert_eq!(record.seat, "12A");
        for (field, value) in record.fields() {
            if field != TicketField::Seat {
                assert_eq!(value, before.get(field));
            }
        }
        assert_eq!(record.set_by_key("meal", "VGML"), None);
    }

    #[test]
    fn dates_are_formatted_for_the_ticket() {
        let record = TicketRecord::default();
        assert_eq!(record.ticket_date(), "APR 23 2025");
        assert_eq!(record.stub_date(), "23 APR");
    }

    #[test]
    fn unparsable_dates_are_kept() {
        let mut record = TicketRecord::default();
        record.set(TicketField::FlightDate, "SOMEDAY");
        assert_eq!(record.ticket_date(), "SOMEDAY");
    }

    #[test]
    fn file_name_identifies_flight_and_seat() {
        let record = TicketRecord::default();
        assert_eq!(record.export_file_name(), "boarding-pass-AA 208-52B.pdf");

        let mut record = TicketRecord::default();
        record.set(TicketField::FlightNumber, "BA/117");
        assert_eq!(record.export_file_name(), "boarding-pass-BA_117-52B.pdf");
    }
}
