// src/extractors/header.rs
use crate::extractors::labels::Label;

/// Customer and address lines of the announcement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub customer: Option<String>,
    pub address: Option<String>,
}

/// Single pass over every line; header lines may sit between schedule
/// blocks. The first matching line wins for each field.
pub fn extract_header(lines: &[&str]) -> Header {
    let mut header = Header::default();

    for line in lines {
        if header.customer.is_none() {
            header.customer = Label::Customer.value_of(line);
        }
        if header.address.is_none() {
            header.address = Label::Address.value_of(line);
        }
        if header.customer.is_some() && header.address.is_some() {
            break;
        }
    }

    tracing::debug!(
        "Header: customer found = {}, address found = {}",
        header.customer.is_some(),
        header.address.is_some()
    );
    header
}
