use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Selection record for a consultancy assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionConsultant {
    pub prior_review_threshold: Option<String>,
    pub category: Option<String>,
    pub procurement_method: Option<String>,
    #[serde(
        rename = "shortlistcomprisingentirelyofnationalconsultants",
        alias = "shortlistComprisingEntirelyOfNationalConsultants"
    )]
    pub shortlist_comprising_entirely_of_national_consultants: Option<String>,
    pub consultancy_assignments: Option<String>,
    pub reference_number: Option<String>,
    #[serde(rename = "descriptioncontract", alias = "descriptionContract")]
    pub description_contract: Option<String>,
    /// Monetary amount, currency unspecified. Any value is accepted.
    #[serde(default)]
    pub estimated_cost: i64,
    /// Published separately from `procurementMethod`; both members are kept.
    #[serde(rename = "procurementmethod")]
    pub procurement_method_lower: Option<String>,
    #[serde(rename = "reviewbyBank", alias = "reviewByBank")]
    pub review_by_bank: Option<String>,
    #[serde(with = "opening_time")]
    pub expected_bids_opening_time: DateTime<FixedOffset>,
    #[serde(rename = "marketapproach", alias = "marketApproach")]
    pub market_approach: Option<String>,
    pub donors: Option<String>,
}

/// RFC 3339 on the way out, keeping the offset and every fractional digit.
/// Timestamps that arrive without an offset are read as UTC; a bare date or
/// a minute-precision time is accepted too.
mod opening_time {
    use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    pub(super) fn parse(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).or_else(|err| {
            parse_naive(raw)
                .map(|naive| naive.and_utc().fixed_offset())
                .ok_or(err)
        })
    }

    fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
        raw.parse::<NaiveDateTime>()
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").ok())
            .or_else(|| {
                raw.parse::<NaiveDate>()
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }
}
