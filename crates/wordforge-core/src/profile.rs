use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Personal information supplied for combination.
///
/// Every field is optional; absent fields are skipped during generation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Date of birth, `DD/MM/YYYY` or `DD-MM-YYYY`.
    pub dob: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub place: Option<String>,
}

impl PersonalInfo {
    /// True when no field carries a usable value.
    pub fn is_empty(&self) -> bool {
        self.field_values().is_empty()
    }

    /// Name-like fields (name, father, mother, place), in declaration order.
    pub fn name_fields(&self) -> Vec<&str> {
        [&self.name, &self.father_name, &self.mother_name, &self.place]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .collect()
    }

    /// Every populated field as a single comparable value, in declaration
    /// order: name, phone digits, compact DOB, father, mother, place.
    pub fn field_values(&self) -> Vec<String> {
        let mut values = Vec::new();
        if let Some(name) = trimmed(&self.name) {
            values.push(name.to_string());
        }
        if let Some(digits) = self.phone_digits() {
            values.push(digits);
        }
        if let Some(compact) = self.dob_forms().into_iter().next() {
            values.push(compact);
        }
        if let Some(father) = trimmed(&self.father_name) {
            values.push(father.to_string());
        }
        if let Some(mother) = trimmed(&self.mother_name) {
            values.push(mother.to_string());
        }
        if let Some(place) = trimmed(&self.place) {
            values.push(place.to_string());
        }
        values
    }

    /// Date-of-birth reformattings, widest first:
    /// DDMMYYYY, DDMMYY, DDMM, MMYYYY, MMDDYYYY, YYYY, YY.
    ///
    /// An unparseable date degrades to its digit string as a single token.
    pub fn dob_forms(&self) -> Vec<String> {
        let Some(raw) = trimmed(&self.dob) else {
            return Vec::new();
        };
        match parse_dob(raw) {
            Some(date) => {
                let day = format!("{:02}", date.day());
                let month = format!("{:02}", date.month());
                let year = format!("{:04}", date.year());
                let year_short = year[year.len() - 2..].to_string();
                vec![
                    format!("{day}{month}{year}"),
                    format!("{day}{month}{year_short}"),
                    format!("{day}{month}"),
                    format!("{month}{year}"),
                    format!("{month}{day}{year}"),
                    year,
                    year_short,
                ]
            }
            None => {
                let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
                if digits.is_empty() { Vec::new() } else { vec![digits] }
            }
        }
    }

    /// Phone digit variants: full number, then last 4, 6, and 8 digits.
    pub fn phone_forms(&self) -> Vec<String> {
        let Some(digits) = self.phone_digits() else {
            return Vec::new();
        };
        let mut forms = vec![digits.clone()];
        for tail in [4, 6, 8] {
            if digits.len() > tail {
                forms.push(digits[digits.len() - tail..].to_string());
            }
        }
        forms
    }

    fn phone_digits(&self) -> Option<String> {
        let raw = trimmed(&self.phone)?;
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() { None } else { Some(digits) }
    }
}

fn trimmed(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn parse_dob(raw: &str) -> Option<NaiveDate> {
    for format in ["%d/%m/%Y", "%d-%m-%Y", "%d%m%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    None
}
