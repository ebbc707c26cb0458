use chrono::{DateTime, TimeZone};
use std::fmt::Display;

pub trait ToCatalogDate {
    fn to_catalog_date(&self) -> String;
}

impl<Tz: TimeZone> ToCatalogDate for DateTime<Tz>
where
    Tz::Offset: Display,
{
    fn to_catalog_date(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl<T: ToCatalogDate> ToCatalogDate for Option<T> {
    fn to_catalog_date(&self) -> String {
        match self {
            Some(date) => date.to_catalog_date(),
            None => "unknown".to_string(),
        }
    }
}
